pub mod config;
pub mod domain {
    pub mod gateway;
    pub mod identity;
    pub mod patch;
    pub mod view;
}
pub mod error;
pub mod gateways;
pub mod hooks;
pub mod http {
    pub mod handlers {
        pub mod ops;
        pub mod payment_gateways;
    }
    pub mod middleware {
        pub mod identity;
    }
    pub mod routes;
}
pub mod repo {
    pub mod options_repo;
}
pub mod service {
    pub mod access_policy;
    pub mod gateway_service;
}
pub mod settings;

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub controller: service::gateway_service::PaymentGatewaysController,
    pub settings_store: Arc<dyn settings::SettingsStore>,
}
