//! Types for the Marquee countries service.
//!
//! - **Entity types**: [`Country`] and [`Subdivision`] with their cross references, used both
//!   as responses and as create/update payloads.
//! - **Request types**: builder-pattern query filters in [`request`].
//!
//! ```
//! use marquee_client_sdk::common::Region;
//! use marquee_client_sdk::countries::types::{Country, CountryXref};
//!
//! let country = Country::builder()
//!     .id("GB")
//!     .name("United Kingdom")
//!     .region(Region::Europe)
//!     .xref(CountryXref::builder().alpha3("GBR").country_code("826").build())
//!     .build();
//! assert_eq!(country.xref.and_then(|x| x.alpha3).as_deref(), Some("GBR"));
//! ```

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none};

use crate::base::Properties;
use crate::common::{Entitlements, Region};
use crate::serde_helpers::{FlexibleDateTime, StringFromAny};

pub mod request;

/// External identifiers of a country.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CountryXref {
    #[builder(into)]
    pub alpha2: Option<String>,
    #[builder(into)]
    pub alpha3: Option<String>,
    #[builder(into)]
    pub bbid: Option<String>,
    /// ISO 3166 numeric code. Some feeds send it as a number.
    #[serde_as(as = "Option<StringFromAny>")]
    #[builder(into)]
    pub country_code: Option<String>,
    #[builder(into)]
    pub region_code: Option<String>,
    #[builder(into)]
    pub sub_region_code: Option<String>,
}

/// A country as maintained by Marquee reference data.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Country {
    #[builder(into)]
    pub name: String,
    /// Marquee id of the country, usually its ISO alpha-2 code.
    #[builder(into)]
    pub id: Option<String>,
    pub region: Option<Region>,
    #[builder(into)]
    pub sub_region: Option<String>,
    #[builder(into)]
    pub region_code: Option<String>,
    #[builder(into)]
    pub sub_region_code: Option<String>,
    pub xref: Option<CountryXref>,
    pub entitlements: Option<Entitlements>,
    #[builder(into)]
    pub owner_id: Option<String>,
    #[builder(into)]
    pub created_by_id: Option<String>,
    #[serde_as(as = "Option<FlexibleDateTime>")]
    pub created_time: Option<DateTime<Utc>>,
    #[builder(into)]
    pub last_updated_by_id: Option<String>,
    #[serde_as(as = "Option<FlexibleDateTime>")]
    pub last_updated_time: Option<DateTime<Utc>>,
    /// Properties not modelled above.
    #[serde(flatten)]
    #[builder(default)]
    pub extra: Properties,
}

/// External identifiers of a subdivision.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SubdivisionXref {
    #[builder(into)]
    pub alpha2: Option<String>,
    #[builder(into)]
    pub bbid: Option<String>,
    /// ISO 3166-2 code, e.g. `GB-SCT`.
    #[builder(into)]
    pub iso_code: Option<String>,
}

/// A first-level administrative subdivision of a country.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Subdivision {
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub id: Option<String>,
    /// Marquee id of the parent [`Country`].
    #[builder(into)]
    pub country_id: Option<String>,
    pub xref: Option<SubdivisionXref>,
    pub entitlements: Option<Entitlements>,
    #[builder(into)]
    pub owner_id: Option<String>,
    #[builder(into)]
    pub created_by_id: Option<String>,
    #[serde_as(as = "Option<FlexibleDateTime>")]
    pub created_time: Option<DateTime<Utc>>,
    #[builder(into)]
    pub last_updated_by_id: Option<String>,
    #[serde_as(as = "Option<FlexibleDateTime>")]
    pub last_updated_time: Option<DateTime<Utc>>,
    #[serde(flatten)]
    #[builder(default)]
    pub extra: Properties,
}
