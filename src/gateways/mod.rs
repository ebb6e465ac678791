use crate::domain::gateway::{flag_to_bool, FormFields, GatewayHandle, Settings, ENABLED_SETTING};
use crate::settings::{load_order_map, load_settings, order_position, SettingsStore};
use anyhow::Result;
use serde_json::Value;
use std::sync::Arc;

pub mod bacs;
pub mod cheque;
pub mod cod;
pub mod paypal;

/// A gateway type. Each declares its own settings schema at runtime; callers
/// never branch on the concrete type.
pub trait PaymentGateway: Send + Sync {
    fn id(&self) -> &str;

    fn method_title(&self) -> &str;

    fn method_description(&self) -> &str;

    fn init_form_fields(&self) -> FormFields;
}

/// Source of truth for which gateways exist. Entries are ordered and keyed by
/// gateway id; implementations may yield the same key twice.
#[async_trait::async_trait]
pub trait GatewayRegistry: Send + Sync {
    async fn payment_gateways(&self) -> Result<Vec<(String, GatewayHandle)>>;
}

/// Builds a handle from a gateway type and its stored settings. Every form
/// field key is backfilled with its default so projections never miss a value.
pub fn materialize(gateway: &dyn PaymentGateway, stored: Settings) -> GatewayHandle {
    let form_fields = gateway.init_form_fields();
    let mut settings = stored;
    for (key, field) in &form_fields {
        if !settings.contains_key(key) {
            let default = field
                .default
                .clone()
                .unwrap_or_else(|| Value::String(String::new()));
            settings.insert(key.clone(), default);
        }
    }

    let text = |key: &str| {
        settings
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string()
    };

    GatewayHandle {
        id: gateway.id().to_string(),
        title: text("title"),
        description: text("description"),
        enabled: flag_to_bool(settings.get(ENABLED_SETTING)),
        method_title: gateway.method_title().to_string(),
        method_description: gateway.method_description().to_string(),
        form_fields,
        settings,
    }
}

pub struct BuiltinRegistry {
    gateways: Vec<Arc<dyn PaymentGateway>>,
    settings_store: Arc<dyn SettingsStore>,
}

impl BuiltinRegistry {
    pub fn new(settings_store: Arc<dyn SettingsStore>) -> Self {
        Self {
            gateways: Vec::new(),
            settings_store,
        }
    }

    pub fn with_defaults(settings_store: Arc<dyn SettingsStore>) -> Self {
        Self::new(settings_store)
            .register(Arc::new(bacs::BacsGateway))
            .register(Arc::new(cheque::ChequeGateway))
            .register(Arc::new(cod::CodGateway))
            .register(Arc::new(paypal::PaypalGateway))
    }

    pub fn register(mut self, gateway: Arc<dyn PaymentGateway>) -> Self {
        self.gateways.push(gateway);
        self
    }
}

#[async_trait::async_trait]
impl GatewayRegistry for BuiltinRegistry {
    /// Ordered gateways come first by ascending position, the rest follow in
    /// registration order.
    async fn payment_gateways(&self) -> Result<Vec<(String, GatewayHandle)>> {
        let order_map = load_order_map(self.settings_store.as_ref()).await?;

        let mut entries = Vec::with_capacity(self.gateways.len());
        for (idx, gateway) in self.gateways.iter().enumerate() {
            let stored = load_settings(self.settings_store.as_ref(), gateway.id()).await?;
            let handle = materialize(gateway.as_ref(), stored);
            let position = order_map.get(gateway.id()).and_then(order_position);
            entries.push((position, idx, handle));
        }

        entries.sort_by_key(|(position, idx, _)| (position.is_none(), *position, *idx));
        Ok(entries
            .into_iter()
            .map(|(_, _, handle)| (handle.id.clone(), handle))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::memory::MemorySettingsStore;
    use crate::settings::{gateway_option_key, GATEWAY_ORDER_KEY};
    use serde_json::json;

    #[tokio::test]
    async fn defaults_are_backfilled() {
        let store = Arc::new(MemorySettingsStore::new());
        let registry = BuiltinRegistry::with_defaults(store);
        let entries = registry.payment_gateways().await.unwrap();

        for (_, handle) in &entries {
            for (key, _) in &handle.form_fields {
                assert!(handle.settings.contains_key(key), "{} missing {}", handle.id, key);
            }
        }
    }

    #[tokio::test]
    async fn registration_order_without_stored_positions() {
        let store = Arc::new(MemorySettingsStore::new());
        let registry = BuiltinRegistry::with_defaults(store);
        let ids: Vec<String> = registry
            .payment_gateways()
            .await
            .unwrap()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec!["bacs", "cheque", "cod", "paypal"]);
    }

    #[tokio::test]
    async fn stored_positions_reorder_entries() {
        let store = Arc::new(MemorySettingsStore::new());
        store
            .set(GATEWAY_ORDER_KEY, json!({"paypal": 0, "cod": 1}))
            .await
            .unwrap();
        let registry = BuiltinRegistry::with_defaults(store);
        let ids: Vec<String> = registry
            .payment_gateways()
            .await
            .unwrap()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ids, vec!["paypal", "cod", "bacs", "cheque"]);
    }

    #[tokio::test]
    async fn stored_settings_drive_title_and_enabled() {
        let store = Arc::new(MemorySettingsStore::new());
        store
            .set(
                &gateway_option_key("cheque"),
                json!({"enabled": "yes", "title": "Pay by cheque"}),
            )
            .await
            .unwrap();
        let registry = BuiltinRegistry::with_defaults(store);
        let entries = registry.payment_gateways().await.unwrap();
        let (_, cheque) = entries.iter().find(|(id, _)| id == "cheque").unwrap();
        assert!(cheque.enabled);
        assert_eq!(cheque.title, "Pay by cheque");
    }
}
