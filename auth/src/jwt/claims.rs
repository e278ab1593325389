use std::collections::BTreeMap;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Bearer token payload: the registered `sub`, `iat` and `exp` claims plus
/// any private claims a service attaches (flattened into the token body).
///
/// Registered claims are optional on the type so that decoding a token without
/// them surfaces as a `JwtError::MissingClaim` from the handler, not as a
/// deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Issue instant, seconds since the Unix epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiry instant, seconds since the Unix epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    #[serde(flatten)]
    pub private: BTreeMap<String, Value>,
}

impl Claims {
    /// Claims for `subject`, issued at `issued_at` and valid for `ttl`.
    pub fn for_subject(subject: impl ToString, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: Some(subject.to_string()),
            iat: Some(issued_at.timestamp()),
            exp: Some((issued_at + ttl).timestamp()),
            private: BTreeMap::new(),
        }
    }

    /// Attach a private claim. Values that cannot be represented as JSON are skipped.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(value) = serde_json::to_value(value) {
            self.private.insert(key.into(), value);
        }
        self
    }

    /// Read a private claim as `T`.
    ///
    /// # Returns
    /// `None` if the claim is absent or has another shape
    pub fn extra_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.private
            .get(key)
            .and_then(|value| T::deserialize(value).ok())
    }
}
