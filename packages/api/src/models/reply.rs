use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A decoded response body.
///
/// Every endpoint may answer with a human-readable `detail`; the rest of the
/// object (`account_id`, `student_id`, `access_token`, ...) is kept verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServerReply {
    /// Decode a response body. Anything that is not a JSON object yields `None`.
    pub fn from_body(bytes: &[u8]) -> Option<Self> {
        serde_json::from_slice(bytes).ok()
    }

    /// `detail` as display text.
    ///
    /// Plain strings are returned as-is. Request validation failures come back as a
    /// list of `{"loc": .., "msg": ..}` objects; their messages are joined with `"; "`.
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            Value::Array(items) => {
                let messages: Vec<String> = items
                    .iter()
                    .map(|item| match item.get("msg").and_then(Value::as_str) {
                        Some(msg) => msg.to_string(),
                        None => item.to_string(),
                    })
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            other => Some(other.to_string()),
        }
    }

    /// A top-level field other than `detail`.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}
