use crate::domain::gateway::{FieldSpec, FormFields};
use crate::gateways::PaymentGateway;

pub struct PaypalGateway;

impl PaymentGateway for PaypalGateway {
    fn id(&self) -> &str {
        "paypal"
    }

    fn method_title(&self) -> &str {
        "PayPal"
    }

    fn method_description(&self) -> &str {
        "PayPal Standard sends customers to PayPal to enter their payment information."
    }

    fn init_form_fields(&self) -> FormFields {
        vec![
            (
                "enabled".to_string(),
                FieldSpec::new("Enable/Disable", "checkbox")
                    .label("Enable PayPal Standard")
                    .default_value("no"),
            ),
            (
                "title".to_string(),
                FieldSpec::new("Title", "text")
                    .description("This controls the title which the user sees during checkout.")
                    .default_value("PayPal"),
            ),
            (
                "description".to_string(),
                FieldSpec::new("Description", "text")
                    .description("This controls the description which the user sees during checkout.")
                    .default_value("Pay via PayPal; you can pay with your credit card if you don't have a PayPal account."),
            ),
            (
                "email".to_string(),
                FieldSpec::new("PayPal email", "email")
                    .description("Please enter your PayPal email address; this is needed in order to take payment.")
                    .placeholder("you@youremail.com"),
            ),
            (
                "advanced".to_string(),
                FieldSpec::new("Advanced options", "title"),
            ),
            (
                "testmode".to_string(),
                FieldSpec::new("PayPal sandbox", "checkbox")
                    .label("Enable PayPal sandbox")
                    .default_value("no"),
            ),
            (
                "paymentaction".to_string(),
                FieldSpec::new("Payment action", "select")
                    .description("Choose whether you wish to capture funds immediately or authorize payment only.")
                    .default_value("sale")
                    .options([("sale", "Capture"), ("authorization", "Authorize")]),
            ),
            (
                "invoice_prefix".to_string(),
                FieldSpec::new("Invoice prefix", "text")
                    .description("Please enter a prefix for your invoice numbers.")
                    .default_value("WC-"),
            ),
        ]
    }
}
