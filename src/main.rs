use payment_gateways_api::config::{AppConfig, SettingsBackend};
use payment_gateways_api::domain::view::LinkBuilder;
use payment_gateways_api::gateways::BuiltinRegistry;
use payment_gateways_api::hooks::SettingsHooks;
use payment_gateways_api::http::routes::build_router;
use payment_gateways_api::repo::options_repo::OptionsRepo;
use payment_gateways_api::service::access_policy::{ApiKeyDirectory, RolePolicy};
use payment_gateways_api::service::gateway_service::PaymentGatewaysController;
use payment_gateways_api::settings::memory::MemorySettingsStore;
use payment_gateways_api::settings::store_redis::SettingsStoreRedis;
use payment_gateways_api::settings::SettingsStore;
use payment_gateways_api::AppState;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env()?;

    let settings_store: Arc<dyn SettingsStore> = match cfg.settings_backend {
        SettingsBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect(&cfg.database_url)
                .await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            Arc::new(OptionsRepo { pool })
        }
        SettingsBackend::Redis => Arc::new(SettingsStoreRedis::new(redis::Client::open(
            cfg.redis_url.clone(),
        )?)),
        SettingsBackend::Memory => Arc::new(MemorySettingsStore::new()),
    };
    tracing::info!("settings backend: {:?}", cfg.settings_backend);

    let controller = PaymentGatewaysController {
        registry: Arc::new(BuiltinRegistry::with_defaults(settings_store.clone())),
        settings_store: settings_store.clone(),
        access_policy: Arc::new(RolePolicy),
        hooks: SettingsHooks::new(),
        links: LinkBuilder::new(&cfg.public_base_url, &cfg.api_namespace),
    };

    let state = AppState {
        controller,
        settings_store,
    };
    let directory = Arc::new(ApiKeyDirectory::from_config(&cfg));
    let app = build_router(state, directory, &cfg.api_namespace);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
