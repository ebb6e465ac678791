use crate::domain::gateway::Settings;
use std::collections::HashMap;
use std::sync::Arc;

/// Transforms (or vetoes, by returning the previous state) a gateway's
/// settings right before they are persisted.
pub trait SettingsFilter: Send + Sync {
    fn filter(&self, gateway_id: &str, settings: Settings) -> Settings;
}

impl<F> SettingsFilter for F
where
    F: Fn(&str, Settings) -> Settings + Send + Sync,
{
    fn filter(&self, gateway_id: &str, settings: Settings) -> Settings {
        self(gateway_id, settings)
    }
}

#[derive(Clone, Default)]
pub struct SettingsHooks {
    filters: HashMap<String, Vec<Arc<dyn SettingsFilter>>>,
}

impl SettingsHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, gateway_id: &str, filter: Arc<dyn SettingsFilter>) {
        self.filters
            .entry(gateway_id.to_string())
            .or_default()
            .push(filter);
    }

    /// Runs the filters registered for `gateway_id` in registration order.
    pub fn apply(&self, gateway_id: &str, settings: Settings) -> Settings {
        match self.filters.get(gateway_id) {
            Some(filters) => filters
                .iter()
                .fold(settings, |acc, f| f.filter(gateway_id, acc)),
            None => settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filters_chain_per_gateway() {
        let mut hooks = SettingsHooks::new();
        hooks.register(
            "cod",
            Arc::new(|_: &str, mut s: Settings| {
                s.insert("a".to_string(), json!(1));
                s
            }),
        );
        hooks.register(
            "cod",
            Arc::new(|_: &str, mut s: Settings| {
                let a = s.get("a").cloned().unwrap_or(json!(0));
                s.insert("b".to_string(), a);
                s
            }),
        );

        let out = hooks.apply("cod", Settings::new());
        assert_eq!(out.get("b"), Some(&json!(1)));

        let untouched = hooks.apply("bacs", Settings::new());
        assert!(untouched.is_empty());
    }
}
