#![allow(dead_code)]

use anyhow::{bail, Result};
use payment_gateways_api::domain::gateway::{FieldSpec, FormFields, GatewayHandle};
use payment_gateways_api::domain::identity::{Identity, Role};
use payment_gateways_api::domain::view::LinkBuilder;
use payment_gateways_api::gateways::{materialize, GatewayRegistry, PaymentGateway};
use payment_gateways_api::hooks::SettingsHooks;
use payment_gateways_api::service::access_policy::RolePolicy;
use payment_gateways_api::service::gateway_service::PaymentGatewaysController;
use payment_gateways_api::settings::memory::MemorySettingsStore;
use payment_gateways_api::settings::{load_settings, SettingsStore};
use serde_json::Value;
use std::sync::Arc;

pub struct TestGateway {
    pub id: &'static str,
    pub method_title: &'static str,
    pub fields: FormFields,
}

impl PaymentGateway for TestGateway {
    fn id(&self) -> &str {
        self.id
    }

    fn method_title(&self) -> &str {
        self.method_title
    }

    fn method_description(&self) -> &str {
        "test gateway"
    }

    fn init_form_fields(&self) -> FormFields {
        self.fields.clone()
    }
}

pub fn shared<G: PaymentGateway + 'static>(gateway: G) -> Arc<dyn PaymentGateway> {
    Arc::new(gateway)
}

pub fn text_gateway(id: &'static str) -> Arc<dyn PaymentGateway> {
    shared(TestGateway {
        id,
        method_title: "Text",
        fields: vec![
            (
                "enabled".to_string(),
                FieldSpec::new("Enable/Disable", "checkbox").default_value("no"),
            ),
            ("title".to_string(), FieldSpec::new("Title", "text").default_value("Plain")),
            ("f".to_string(), FieldSpec::new("F", "text").default_value("v0")),
        ],
    })
}

/// Registry whose keys are chosen by the test, so keys may repeat or differ
/// from the gateway's own id.
pub struct FixtureRegistry {
    pub entries: Vec<(String, Arc<dyn PaymentGateway>)>,
    pub store: Arc<dyn SettingsStore>,
}

#[async_trait::async_trait]
impl GatewayRegistry for FixtureRegistry {
    async fn payment_gateways(&self) -> Result<Vec<(String, GatewayHandle)>> {
        let mut out = Vec::new();
        for (key, gateway) in &self.entries {
            let stored = load_settings(self.store.as_ref(), key).await?;
            out.push((key.clone(), materialize(gateway.as_ref(), stored)));
        }
        Ok(out)
    }
}

/// Delegates to memory but refuses writes to one key.
pub struct FailingStore {
    pub inner: MemorySettingsStore,
    pub fail_on: String,
}

#[async_trait::async_trait]
impl SettingsStore for FailingStore {
    async fn get(&self, option_key: &str) -> Result<Option<Value>> {
        self.inner.get(option_key).await
    }

    async fn set(&self, option_key: &str, value: Value) -> Result<()> {
        if option_key == self.fail_on {
            bail!("disk full");
        }
        self.inner.set(option_key, value).await
    }
}

pub fn controller(
    entries: Vec<(&str, Arc<dyn PaymentGateway>)>,
    store: Arc<dyn SettingsStore>,
    hooks: SettingsHooks,
) -> PaymentGatewaysController {
    let registry = FixtureRegistry {
        entries: entries
            .into_iter()
            .map(|(k, g)| (k.to_string(), g))
            .collect(),
        store: store.clone(),
    };
    PaymentGatewaysController {
        registry: Arc::new(registry),
        settings_store: store,
        access_policy: Arc::new(RolePolicy),
        hooks,
        links: LinkBuilder::new("http://shop.test", "wc/v1"),
    }
}

pub fn manager() -> Identity {
    Identity::ApiKey {
        name: "manager".to_string(),
        role: Role::ShopManager,
    }
}

pub fn viewer() -> Identity {
    Identity::ApiKey {
        name: "viewer".to_string(),
        role: Role::Viewer,
    }
}
