use crate::domain::gateway::Settings;
use anyhow::Result;
use serde_json::Value;

pub mod memory;
pub mod store_redis;

pub const GATEWAY_ORDER_KEY: &str = "gateway_order";

pub fn gateway_option_key(gateway_id: &str) -> String {
    format!("gateway_{}_settings", gateway_id)
}

/// Key/value persistence for gateway settings and the shared order map.
///
/// Reads and writes are independent calls. Nothing here makes a
/// read-modify-write atomic; concurrent writers to the same key race and the
/// last write wins.
#[async_trait::async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self, option_key: &str) -> Result<Option<Value>>;

    async fn set(&self, option_key: &str, value: Value) -> Result<()>;

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}

pub async fn load_settings(store: &dyn SettingsStore, gateway_id: &str) -> Result<Settings> {
    Ok(as_map(store.get(&gateway_option_key(gateway_id)).await?))
}

/// Missing or non-object order values read as an empty map.
pub async fn load_order_map(store: &dyn SettingsStore) -> Result<Settings> {
    Ok(as_map(store.get(GATEWAY_ORDER_KEY).await?))
}

fn as_map(value: Option<Value>) -> Settings {
    match value {
        Some(Value::Object(map)) => map,
        _ => Settings::new(),
    }
}

pub fn order_position(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemorySettingsStore;
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn order_map_defaults_to_empty() {
        let store = MemorySettingsStore::new();
        assert!(load_order_map(&store).await.unwrap().is_empty());

        store.set(GATEWAY_ORDER_KEY, json!("corrupt")).await.unwrap();
        assert!(load_order_map(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn settings_load_under_gateway_key() {
        let store = MemorySettingsStore::new();
        store
            .set(&gateway_option_key("bacs"), json!({"enabled": "yes"}))
            .await
            .unwrap();
        let settings = load_settings(&store, "bacs").await.unwrap();
        assert_eq!(settings.get("enabled"), Some(&json!("yes")));
    }

    #[test]
    fn order_positions_accept_numeric_strings() {
        assert_eq!(order_position(&json!(3)), Some(3));
        assert_eq!(order_position(&json!("4")), Some(4));
        assert_eq!(order_position(&json!("")), None);
    }
}
