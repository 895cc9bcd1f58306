//! Re-exported types from external crates for convenience.
//!
//! These types are commonly used in this SDK and are re-exported here
//! so users don't need to add these dependencies to their `Cargo.toml`.

/// Date and time types for timestamps and business dates in Marquee records.
pub use chrono::{DateTime, NaiveDate, Utc};
/// Secret string types that redact the access token in debug output.
pub use secrecy::{ExposeSecret, SecretString};
/// Raw JSON values, as held by [`Properties`](crate::base::Properties).
pub use serde_json::{Value, json};
