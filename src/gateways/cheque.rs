use crate::domain::gateway::{FieldSpec, FormFields};
use crate::gateways::PaymentGateway;

pub struct ChequeGateway;

impl PaymentGateway for ChequeGateway {
    fn id(&self) -> &str {
        "cheque"
    }

    fn method_title(&self) -> &str {
        "Check payments"
    }

    fn method_description(&self) -> &str {
        "Take payments in person via checks. This offline gateway can also be useful to test purchases."
    }

    fn init_form_fields(&self) -> FormFields {
        vec![
            (
                "enabled".to_string(),
                FieldSpec::new("Enable/Disable", "checkbox")
                    .label("Enable check payments")
                    .default_value("no"),
            ),
            (
                "title".to_string(),
                FieldSpec::new("Title", "text")
                    .description("This controls the title which the user sees during checkout.")
                    .default_value("Check payments"),
            ),
            (
                "description".to_string(),
                FieldSpec::new("Description", "textarea")
                    .description("Payment method description that the customer will see on your checkout.")
                    .default_value("Please send a check to Store Name, Store Street, Store Town, Store State / County, Store Postcode."),
            ),
            (
                "instructions".to_string(),
                FieldSpec::new("Instructions", "textarea")
                    .description("Instructions that will be added to the thank you page and emails."),
            ),
        ]
    }
}
