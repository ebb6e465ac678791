use crate::config::AppConfig;
use crate::domain::identity::{Identity, Role};
use axum::http::StatusCode;
use std::collections::HashMap;

pub const PAYMENT_GATEWAYS_RESOURCE: &str = "payment_gateways";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Edit,
}

pub trait AccessPolicy: Send + Sync {
    fn can(&self, resource: &str, action: Action, identity: &Identity) -> bool;

    /// 401 until the caller has proven who they are, 403 afterwards.
    fn denial_status(&self, identity: &Identity) -> StatusCode {
        if identity.is_authenticated() {
            StatusCode::FORBIDDEN
        } else {
            StatusCode::UNAUTHORIZED
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RolePolicy;

impl AccessPolicy for RolePolicy {
    fn can(&self, resource: &str, action: Action, identity: &Identity) -> bool {
        if resource != PAYMENT_GATEWAYS_RESOURCE {
            return false;
        }
        match (identity.role(), action) {
            (Some(Role::ShopManager), _) => true,
            (Some(Role::Viewer), Action::Read) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApiKeyDirectory {
    keys: HashMap<String, (String, Role)>,
}

impl ApiKeyDirectory {
    pub fn from_config(cfg: &AppConfig) -> Self {
        let mut directory = Self::default();
        directory.insert(&cfg.manager_api_key, "manager", Role::ShopManager);
        if let Some(viewer) = cfg.viewer_api_key.as_deref() {
            directory.insert(viewer, "viewer", Role::Viewer);
        }
        directory
    }

    pub fn insert(&mut self, key: &str, name: &str, role: Role) {
        if key.is_empty() {
            return;
        }
        self.keys.insert(key.to_string(), (name.to_string(), role));
    }

    pub fn resolve(&self, provided: Option<&str>) -> Identity {
        match provided.and_then(|k| self.keys.get(k)) {
            Some((name, role)) => Identity::ApiKey {
                name: name.clone(),
                role: *role,
            },
            None => Identity::Anonymous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> Identity {
        Identity::ApiKey {
            name: "manager".to_string(),
            role: Role::ShopManager,
        }
    }

    fn viewer() -> Identity {
        Identity::ApiKey {
            name: "viewer".to_string(),
            role: Role::Viewer,
        }
    }

    #[test]
    fn viewers_read_managers_edit() {
        let policy = RolePolicy;
        assert!(policy.can(PAYMENT_GATEWAYS_RESOURCE, Action::Edit, &manager()));
        assert!(policy.can(PAYMENT_GATEWAYS_RESOURCE, Action::Read, &viewer()));
        assert!(!policy.can(PAYMENT_GATEWAYS_RESOURCE, Action::Edit, &viewer()));
        assert!(!policy.can(PAYMENT_GATEWAYS_RESOURCE, Action::Read, &Identity::Anonymous));
        assert!(!policy.can("orders", Action::Read, &manager()));
    }

    #[test]
    fn denial_status_depends_on_authentication() {
        let policy = RolePolicy;
        assert_eq!(policy.denial_status(&Identity::Anonymous), StatusCode::UNAUTHORIZED);
        assert_eq!(policy.denial_status(&viewer()), StatusCode::FORBIDDEN);
    }

    #[test]
    fn directory_resolves_known_keys_only() {
        let mut directory = ApiKeyDirectory::default();
        directory.insert("k1", "manager", Role::ShopManager);
        directory.insert("", "blank", Role::Viewer);
        assert_eq!(directory.resolve(Some("k1")), manager());
        assert_eq!(directory.resolve(Some("")), Identity::Anonymous);
        assert_eq!(directory.resolve(None), Identity::Anonymous);
    }
}
