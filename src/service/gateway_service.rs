use crate::domain::gateway::{bool_to_flag, GatewayHandle, Settings, ENABLED_SETTING};
use crate::domain::identity::Identity;
use crate::domain::patch::{absint, coerce_bool, UpdateGatewayRequest};
use crate::domain::view::{settings_view, GatewayView, LinkBuilder};
use crate::error::ApiError;
use crate::gateways::GatewayRegistry;
use crate::hooks::SettingsHooks;
use crate::service::access_policy::{AccessPolicy, Action, PAYMENT_GATEWAYS_RESOURCE};
use crate::settings::{gateway_option_key, load_order_map, SettingsStore, GATEWAY_ORDER_KEY};
use serde_json::Value;
use std::sync::Arc;

enum Denial {
    List,
    View,
    Edit,
}

impl Denial {
    fn action(&self) -> Action {
        match self {
            Denial::List | Denial::View => Action::Read,
            Denial::Edit => Action::Edit,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Denial::List | Denial::View => "payment_gateways_cannot_view",
            Denial::Edit => "payment_gateways_cannot_edit",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Denial::List => "Sorry, you cannot list resources.",
            Denial::View => "Sorry, you cannot view this resource.",
            Denial::Edit => "Sorry, you are not allowed to edit this resource.",
        }
    }
}

/// List/get/update over the payment gateway collection. Holds no state of its
/// own: every call re-reads the registry and the settings store.
#[derive(Clone)]
pub struct PaymentGatewaysController {
    pub registry: Arc<dyn GatewayRegistry>,
    pub settings_store: Arc<dyn SettingsStore>,
    pub access_policy: Arc<dyn AccessPolicy>,
    pub hooks: SettingsHooks,
    pub links: LinkBuilder,
}

impl PaymentGatewaysController {
    pub async fn list_gateways(&self, identity: &Identity) -> Result<Vec<GatewayView>, ApiError> {
        self.authorize(identity, Denial::List)?;

        let entries = self
            .registry
            .payment_gateways()
            .await
            .map_err(ApiError::Internal)?;
        let order_map = self.order_map().await?;

        Ok(entries
            .into_iter()
            .map(|(id, mut gateway)| {
                gateway.id = id;
                self.project(&gateway, &order_map)
            })
            .collect())
    }

    pub async fn get_gateway(&self, id: &str, identity: &Identity) -> Result<GatewayView, ApiError> {
        self.authorize(identity, Denial::View)?;

        let gateway = self.find_gateway(id).await?.ok_or(ApiError::NotFound)?;
        let order_map = self.order_map().await?;
        Ok(self.project(&gateway, &order_map))
    }

    /// Applies settings, then order, then enabled. Each present group is a
    /// separate write; a failure leaves earlier groups persisted.
    pub async fn update_gateway(
        &self,
        id: &str,
        identity: &Identity,
        patch: UpdateGatewayRequest,
    ) -> Result<GatewayView, ApiError> {
        self.authorize(identity, Denial::Edit)?;

        let gateway = self.find_gateway(id).await?.ok_or(ApiError::NotFound)?;
        let mut settings = gateway.settings.clone();

        if let Some(requested) = patch.settings.as_ref() {
            for (key, _) in &gateway.form_fields {
                if let Some(value) = requested.get(key).filter(|v| !v.is_null()) {
                    settings.insert(key.clone(), value.clone());
                }
            }
            settings = self.persist_settings(&gateway.id, settings).await?;
        }

        if let Some(order) = patch.order.as_ref() {
            let position = absint(order);
            let mut order_map = self.order_map().await?;
            order_map.insert(gateway.id.clone(), Value::from(position));
            self.settings_store
                .set(GATEWAY_ORDER_KEY, Value::Object(order_map))
                .await
                .map_err(ApiError::WriteFailed)?;
            tracing::debug!("gateway {} order set to {}", gateway.id, position);
        }

        if let Some(enabled) = patch.enabled.as_ref() {
            let enabled = coerce_bool(enabled);
            settings.insert(
                ENABLED_SETTING.to_string(),
                Value::String(bool_to_flag(enabled).to_string()),
            );
            self.persist_settings(&gateway.id, settings).await?;
        }

        let fresh = self.find_gateway(id).await?.ok_or(ApiError::NotFound)?;
        let order_map = self.order_map().await?;
        Ok(self.project(&fresh, &order_map))
    }

    /// Edit permission check, usable before the request body is decoded.
    pub fn authorize_edit(&self, identity: &Identity) -> Result<(), ApiError> {
        self.authorize(identity, Denial::Edit)
    }

    fn authorize(&self, identity: &Identity, denial: Denial) -> Result<(), ApiError> {
        if self
            .access_policy
            .can(PAYMENT_GATEWAYS_RESOURCE, denial.action(), identity)
        {
            return Ok(());
        }

        tracing::info!("denied {:?} on payment gateways for {}", denial.action(), identity.name());
        Err(ApiError::Forbidden {
            status: self.access_policy.denial_status(identity),
            code: denial.code(),
            message: denial.message(),
        })
    }

    /// Linear scan of the current registry; the last entry with a matching
    /// key wins.
    async fn find_gateway(&self, id: &str) -> Result<Option<GatewayHandle>, ApiError> {
        let entries = self
            .registry
            .payment_gateways()
            .await
            .map_err(ApiError::Internal)?;

        Ok(entries
            .into_iter()
            .rev()
            .find(|(key, _)| key == id)
            .map(|(key, mut gateway)| {
                gateway.id = key;
                gateway
            }))
    }

    async fn order_map(&self) -> Result<Settings, ApiError> {
        load_order_map(self.settings_store.as_ref())
            .await
            .map_err(ApiError::Internal)
    }

    /// Persists what the hooks return, and hands that value back.
    async fn persist_settings(&self, gateway_id: &str, settings: Settings) -> Result<Settings, ApiError> {
        let filtered = self.hooks.apply(gateway_id, settings);
        self.settings_store
            .set(&gateway_option_key(gateway_id), Value::Object(filtered.clone()))
            .await
            .map_err(ApiError::WriteFailed)?;
        tracing::debug!("gateway {} settings saved", gateway_id);
        Ok(filtered)
    }

    pub fn project(&self, gateway: &GatewayHandle, order_map: &Settings) -> GatewayView {
        GatewayView {
            id: gateway.id.clone(),
            title: gateway.title.clone(),
            description: gateway.description.clone(),
            order: order_map
                .get(&gateway.id)
                .cloned()
                .unwrap_or_else(|| Value::String(String::new())),
            enabled: gateway.enabled,
            method_title: gateway.method_title.clone(),
            method_description: gateway.method_description.clone(),
            settings: settings_view(gateway),
            links: self.links.for_gateway(&gateway.id),
        }
    }
}
