use serde::de::DeserializeOwned;
use serde_json::Value;

/// How an endpoint wraps its payload. Fixed per endpoint at the call site so
/// nothing downstream inspects the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// The payload is the body.
    Bare,
    /// The payload sits under `data` (the server's `StandardResponse`).
    Data,
}

impl Envelope {
    pub fn open<T: DeserializeOwned>(self, body: Value) -> Result<T, String> {
        let payload = match self {
            Self::Bare => body,
            Self::Data => match body {
                Value::Object(mut map) => map
                    .remove("data")
                    .ok_or_else(|| "missing `data` envelope".to_string())?,
                other => {
                    return Err(format!(
                        "expected an object with `data`, got {}",
                        kind_of(&other)
                    ));
                }
            },
        };
        serde_json::from_value(payload).map_err(|e| e.to_string())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
