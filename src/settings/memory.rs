use crate::settings::SettingsStore;
use anyhow::Result;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MemorySettingsStore {
    inner: Arc<RwLock<HashMap<String, Value>>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get(&self, option_key: &str) -> Result<Option<Value>> {
        Ok(self.inner.read().await.get(option_key).cloned())
    }

    async fn set(&self, option_key: &str, value: Value) -> Result<()> {
        self.inner.write().await.insert(option_key.to_string(), value);
        Ok(())
    }
}
