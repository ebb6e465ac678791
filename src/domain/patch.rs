use crate::domain::gateway::Settings;
use serde::Deserialize;
use serde_json::Value;

/// Body of `PATCH /payment_gateways/:id`. A `null` anywhere counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGatewayRequest {
    #[serde(default)]
    pub settings: Option<Settings>,
    #[serde(default)]
    pub order: Option<Value>,
    #[serde(default)]
    pub enabled: Option<Value>,
}

/// Non-negative integer coercion: the absolute value of whatever integer the
/// input reads as, or 0 when it does not read as a number at all.
pub fn absint(value: &Value) -> u64 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.unsigned_abs()
            } else if let Some(u) = n.as_u64() {
                u
            } else {
                n.as_f64().map(truncate_abs).unwrap_or(0)
            }
        }
        Value::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                i.unsigned_abs()
            } else {
                s.parse::<f64>().map(truncate_abs).unwrap_or(0)
            }
        }
        Value::Bool(true) => 1,
        _ => 0,
    }
}

fn truncate_abs(f: f64) -> u64 {
    if f.is_finite() {
        f.trunc().abs() as u64
    } else {
        0
    }
}

pub fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => {
            let s = s.trim().to_ascii_lowercase();
            !matches!(s.as_str(), "" | "0" | "false" | "no" | "off")
        }
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Null => false,
    }
}
