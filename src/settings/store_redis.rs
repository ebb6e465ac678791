use crate::settings::SettingsStore;
use anyhow::Result;
use redis::AsyncCommands;
use serde_json::Value;

#[derive(Clone)]
pub struct SettingsStoreRedis {
    pub client: redis::Client,
}

impl SettingsStoreRedis {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }

    fn option_key(option_key: &str) -> String {
        format!("options:{}", option_key)
    }
}

#[async_trait::async_trait]
impl SettingsStore for SettingsStoreRedis {
    async fn get(&self, option_key: &str) -> Result<Option<Value>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let payload: Option<String> = conn.get(Self::option_key(option_key)).await?;
        match payload {
            Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, option_key: &str, value: Value) -> Result<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let payload = serde_json::to_string(&value)?;
        let _: () = conn.set(Self::option_key(option_key), payload).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}
