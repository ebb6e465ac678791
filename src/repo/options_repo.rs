use crate::settings::SettingsStore;
use anyhow::Result;
use serde_json::Value;
use sqlx::{PgPool, Row};

#[derive(Clone)]
pub struct OptionsRepo {
    pub pool: PgPool,
}

#[async_trait::async_trait]
impl SettingsStore for OptionsRepo {
    async fn get(&self, option_key: &str) -> Result<Option<Value>> {
        let row = sqlx::query("SELECT option_value FROM options WHERE option_key=$1")
            .bind(option_key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get::<Value, _>("option_value")))
    }

    async fn set(&self, option_key: &str, value: Value) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO options (option_key, option_value, updated_at)
            VALUES ($1,$2,now())
            ON CONFLICT (option_key) DO UPDATE SET
                option_value=EXCLUDED.option_value,
                updated_at=now()
            "#,
        )
        .bind(option_key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
