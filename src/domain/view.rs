use crate::domain::gateway::{is_empty_value, GatewayHandle};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

pub const REST_BASE: &str = "payment_gateways";

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    #[default]
    View,
    Edit,
}

impl Context {
    /// Anything other than `edit` reads as `view`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("edit") => Context::Edit,
            _ => Context::View,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Context::View => "view",
            Context::Edit => "edit",
        }
    }
}

pub struct SchemaProperty {
    pub name: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub contexts: &'static [Context],
}

pub const ITEM_PROPERTIES: &[SchemaProperty] = &[
    SchemaProperty {
        name: "id",
        kind: "string",
        description: "Payment gateway ID.",
        contexts: &[Context::View],
    },
    SchemaProperty {
        name: "title",
        kind: "string",
        description: "Payment gateway title on checkout.",
        contexts: &[Context::View, Context::Edit],
    },
    SchemaProperty {
        name: "description",
        kind: "string",
        description: "Payment gateway description on checkout.",
        contexts: &[Context::View, Context::Edit],
    },
    SchemaProperty {
        name: "order",
        kind: "integer",
        description: "Payment gateway sort order.",
        contexts: &[Context::View, Context::Edit],
    },
    SchemaProperty {
        name: "enabled",
        kind: "boolean",
        description: "Payment gateway enabled status.",
        contexts: &[Context::View, Context::Edit],
    },
    SchemaProperty {
        name: "method_title",
        kind: "string",
        description: "Payment gateway method title.",
        contexts: &[Context::View],
    },
    SchemaProperty {
        name: "method_description",
        kind: "string",
        description: "Payment gateway method description.",
        contexts: &[Context::View],
    },
    SchemaProperty {
        name: "settings",
        kind: "array",
        description: "Payment gateway settings.",
        contexts: &[Context::View, Context::Edit],
    },
];

pub fn item_schema() -> Value {
    let properties: serde_json::Map<String, Value> = ITEM_PROPERTIES
        .iter()
        .map(|p| {
            let contexts: Vec<&str> = p.contexts.iter().map(Context::as_str).collect();
            (
                p.name.to_string(),
                json!({
                    "description": p.description,
                    "type": p.kind,
                    "context": contexts,
                }),
            )
        })
        .collect();

    json!({
        "$schema": "http://json-schema.org/draft-04/schema#",
        "title": "payment_gateway",
        "type": "object",
        "properties": properties,
    })
}

fn visible_in(name: &str, context: Context) -> bool {
    ITEM_PROPERTIES
        .iter()
        .find(|p| p.name == name)
        .is_some_and(|p| p.contexts.contains(&context))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Href {
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GatewayLinks {
    #[serde(rename = "self")]
    pub self_link: Vec<Href>,
    pub collection: Vec<Href>,
}

#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base_url: String,
    namespace: String,
}

impl LinkBuilder {
    pub fn new(base_url: &str, namespace: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            namespace: namespace.trim_matches('/').to_string(),
        }
    }

    pub fn collection_url(&self) -> String {
        if self.namespace.is_empty() {
            format!("{}/{}", self.base_url, REST_BASE)
        } else {
            format!("{}/{}/{}", self.base_url, self.namespace, REST_BASE)
        }
    }

    pub fn item_url(&self, gateway_id: &str) -> String {
        format!(
            "{}/{}",
            self.collection_url(),
            utf8_percent_encode(gateway_id, PATH_SEGMENT)
        )
    }

    pub fn for_gateway(&self, gateway_id: &str) -> GatewayLinks {
        GatewayLinks {
            self_link: vec![Href {
                href: self.item_url(gateway_id),
            }],
            collection: vec![Href {
                href: self.collection_url(),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingView {
    pub id: String,
    pub label: String,
    pub description: String,
    #[serde(rename = "type")]
    pub field_type: String,
    pub value: Value,
    pub default: Value,
    pub tip: String,
    pub placeholder: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GatewayView {
    pub id: String,
    pub title: String,
    pub description: String,
    /// The stored position, or `""` when the gateway was never ordered.
    pub order: Value,
    pub enabled: bool,
    pub method_title: String,
    pub method_description: String,
    pub settings: Vec<SettingView>,
    #[serde(rename = "_links")]
    pub links: GatewayLinks,
}

impl GatewayView {
    pub fn setting(&self, id: &str) -> Option<&SettingView> {
        self.settings.iter().find(|s| s.id == id)
    }

    /// Serializes the view, dropping properties not declared for `context`.
    pub fn render(&self, context: Context) -> Value {
        let Ok(Value::Object(mut item)) = serde_json::to_value(self) else {
            return Value::Null;
        };
        item.retain(|key, _| key == "_links" || visible_in(key, context));
        Value::Object(item)
    }
}

/// Projects the gateway's form fields into client-facing settings, skipping
/// UI separators and fields without a title or type.
pub fn settings_view(gateway: &GatewayHandle) -> Vec<SettingView> {
    let mut out = Vec::with_capacity(gateway.form_fields.len());
    for (id, field) in &gateway.form_fields {
        if field.is_malformed() {
            tracing::debug!("skipping malformed field {} on gateway {}", id, gateway.id);
            continue;
        }
        if field.is_separator() {
            continue;
        }

        let value = match gateway.settings.get(id) {
            Some(v) => v.clone(),
            None => {
                tracing::warn!("gateway {} has no stored value for field {}", gateway.id, id);
                Value::Null
            }
        };
        let description = non_empty(field.description.as_deref());

        out.push(SettingView {
            id: id.clone(),
            label: match non_empty(field.label.as_deref()) {
                label if label.is_empty() => field.title.clone(),
                label => label,
            },
            description: description.clone(),
            field_type: field.field_type.clone(),
            value,
            default: match &field.default {
                Some(d) if !is_empty_value(d) => d.clone(),
                _ => Value::String(String::new()),
            },
            tip: description,
            placeholder: non_empty(field.placeholder.as_deref()),
            options: field.options.clone().filter(|o| !o.is_empty()),
        });
    }
    out
}

fn non_empty(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.is_empty() && s != "0" => s.to_string(),
        _ => String::new(),
    }
}
