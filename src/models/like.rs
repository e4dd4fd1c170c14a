use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /like`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeRequest {
    pub product_id: String,
}

impl LikeRequest {
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
        }
    }
}

/// Response of `POST /like`.
///
/// `new_likes` is left untyped: the backend sends a number on success, the
/// string `"N/A"` when the updated document has no count, and omits it when
/// the like was registered without modifying the counter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LikeResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub new_likes: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl LikeResponse {
    /// Counter text to display, present only when `new_likes` is truthy
    /// (non-zero number or non-empty string).
    pub fn new_likes_text(&self) -> Option<String> {
        match self.new_likes.as_ref()? {
            Value::Number(n) => {
                if let Some(i) = n.as_u64() {
                    (i != 0).then(|| i.to_string())
                } else if let Some(i) = n.as_i64() {
                    (i != 0).then(|| i.to_string())
                } else {
                    n.as_f64()
                        .filter(|f| *f != 0.0 && !f.is_nan())
                        .map(|f| f.to_string())
                }
            }
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}
