use crate::domain::gateway::{FieldSpec, FormFields};
use crate::gateways::PaymentGateway;

pub struct CodGateway;

impl PaymentGateway for CodGateway {
    fn id(&self) -> &str {
        "cod"
    }

    fn method_title(&self) -> &str {
        "Cash on delivery"
    }

    fn method_description(&self) -> &str {
        "Have your customers pay with cash (or by other means) upon delivery."
    }

    fn init_form_fields(&self) -> FormFields {
        vec![
            (
                "enabled".to_string(),
                FieldSpec::new("Enable/Disable", "checkbox")
                    .label("Enable cash on delivery")
                    .default_value("no"),
            ),
            (
                "title".to_string(),
                FieldSpec::new("Title", "text")
                    .description("Payment method description that the customer will see on your checkout.")
                    .default_value("Cash on delivery"),
            ),
            (
                "description".to_string(),
                FieldSpec::new("Description", "textarea")
                    .description("Payment method description that the customer will see on your website.")
                    .default_value("Pay with cash upon delivery."),
            ),
            (
                "instructions".to_string(),
                FieldSpec::new("Instructions", "textarea")
                    .description("Instructions that will be added to the thank you page.")
                    .default_value("Pay with cash upon delivery."),
            ),
            (
                "enable_for_methods".to_string(),
                FieldSpec::new("Enable for shipping methods", "multiselect")
                    .description("If COD is only available for certain methods, set it up here. Leave blank to enable for all methods.")
                    .placeholder("Select shipping methods")
                    .options([
                        ("flat_rate", "Flat rate"),
                        ("free_shipping", "Free shipping"),
                        ("local_pickup", "Local pickup"),
                    ]),
            ),
            (
                "enable_for_virtual".to_string(),
                FieldSpec::new("Accept for virtual orders", "checkbox")
                    .label("Accept COD if the order is virtual")
                    .default_value("yes"),
            ),
        ]
    }
}
