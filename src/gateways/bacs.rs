use crate::domain::gateway::{FieldSpec, FormFields};
use crate::gateways::PaymentGateway;

pub struct BacsGateway;

impl PaymentGateway for BacsGateway {
    fn id(&self) -> &str {
        "bacs"
    }

    fn method_title(&self) -> &str {
        "Direct bank transfer"
    }

    fn method_description(&self) -> &str {
        "Take payments in person via BACS. More commonly known as direct bank/wire transfer."
    }

    fn init_form_fields(&self) -> FormFields {
        vec![
            (
                "enabled".to_string(),
                FieldSpec::new("Enable/Disable", "checkbox")
                    .label("Enable bank transfer")
                    .default_value("no"),
            ),
            (
                "title".to_string(),
                FieldSpec::new("Title", "text")
                    .description("This controls the title which the user sees during checkout.")
                    .default_value("Direct bank transfer"),
            ),
            (
                "description".to_string(),
                FieldSpec::new("Description", "textarea")
                    .description("Payment method description that the customer will see on your checkout.")
                    .default_value(
                        "Make your payment directly into our bank account. Please use your Order ID as the payment reference.",
                    ),
            ),
            (
                "instructions".to_string(),
                FieldSpec::new("Instructions", "textarea")
                    .description("Instructions that will be added to the thank you page and emails."),
            ),
            (
                "account_details".to_string(),
                FieldSpec::new("Account details", "account_details"),
            ),
        ]
    }
}
