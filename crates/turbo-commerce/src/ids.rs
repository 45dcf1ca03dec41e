//! Newtype IDs for type-safe identifiers.
//!
//! Products are keyed by the backend's integer id; orders get a locally
//! generated string id at confirmation time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend product identifier.
///
/// Serialized transparently as an integer, which also lets it act as a JSON
/// object key in persisted cart snapshots (`{"items": {"1": ...}}`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create a product ID.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw integer value.
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Locally generated order identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    /// Create an order ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new unique order ID.
    pub fn generate() -> Self {
        Self(generate_id())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generate a unique ID from the clock and a process-wide counter.
fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = chrono::Utc::now().timestamp_millis() as u64;
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("ORD-{:x}-{:04x}", timestamp, counter & 0xffff)
}
