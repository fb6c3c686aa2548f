//! Miscellaneous common types used throughout the MartianPay data model.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a key-value map in the MartianPay API. The key is a `String`.
pub type Record<V> = std::collections::HashMap<String, V>;

/// Represents any JSON value. Used for serializing/deserializing arbitrary JSON data.
pub type AnyJson = serde_json::Value;

/// A JSON object that keeps its keys in document order.
pub type JsonObject = serde_json::Map<String, AnyJson>;

/// Free-form string metadata attached to a resource.
///
/// The API documents soft limits for these maps (see [`crate::types::MetadataLimits`]),
/// but values received from the server are never rejected for exceeding them.
pub type Metadata = Record<String>;

/// A point in time as Unix seconds, the way every MartianPay timestamp crosses the wire.
///
/// ```
/// use martianpay_core::types::Timestamp;
///
/// let created: Timestamp = serde_json::from_value(serde_json::json!(1717171717)).unwrap();
/// assert_eq!(created.as_secs(), 1717171717);
/// assert_eq!(created.to_datetime().unwrap().to_rfc3339(), "2024-05-31T16:08:37+00:00");
/// assert_eq!(serde_json::to_value(created).unwrap(), serde_json::json!(1717171717));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Timestamp(Utc::now().timestamp())
    }

    pub fn as_secs(&self) -> i64 {
        self.0
    }

    /// Returns `None` when the value is outside the range `chrono` can represent.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }
}

impl From<i64> for Timestamp {
    fn from(value: i64) -> Self {
        Timestamp(value)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp(value.timestamp())
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
