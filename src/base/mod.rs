//! The object model shared by every Marquee record.
//!
//! Marquee speaks camelCase JSON while this crate exposes snake_case Rust. Most of the
//! mapping is static and handled by `serde` attributes on the typed records. This module
//! covers the dynamic remainder:
//!
//! - [`naming`]: cached translation between the two naming conventions,
//! - [`WireEnum`]: lenient matching of enumerated values, with an `Unknown` fallback,
//! - [`Properties`]: an open record for free-form parts of the schema,
//! - [`Record`]: name-based property access with type coercion on any typed record.
//!
//! ```
//! use marquee_client_sdk::base::Record as _;
//! use marquee_client_sdk::common::{Currency, Entitlements};
//! use serde_json::json;
//!
//! # fn main() -> marquee_client_sdk::Result<()> {
//! let mut entitlements = Entitlements::from_dict(json!({"view": ["guid:abc"]}))?;
//! entitlements.set_property("performance_details", ["guid:abc"])?;
//! assert_eq!(entitlements.to_dict()?, json!({
//!     "view": ["guid:abc"],
//!     "performanceDetails": ["guid:abc"]
//! }));
//!
//! let currency: Currency = "usd".parse().unwrap_or_else(|never| match never {});
//! assert_eq!(currency, Currency::USD);
//! # Ok(())
//! # }
//! ```

mod enums;
pub mod naming;
mod properties;
mod record;

pub use enums::WireEnum;
pub use naming::Case;
pub use properties::Properties;
pub use record::{Record, rename_keys};
