//! Records and enumerations shared across Marquee services.

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::base::Properties;

/// Principals allowed to act on an entity, per action.
///
/// Each list holds principal ids such as `guid:…`, `role:…` or `group:…`. Empty lists are
/// omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase", default)]
#[non_exhaustive]
pub struct Entitlements {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub view: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub edit: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub admin: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub rebalance: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub execute: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub trade: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub upload: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub query: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub performance_details: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub plot: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub delete: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub display: Vec<String>,
}

impl Entitlements {
    /// Entitlements granting every action to a single principal.
    #[must_use]
    pub fn owned_by(principal: &str) -> Self {
        let all = vec![principal.to_owned()];
        Entitlements::builder()
            .view(all.clone())
            .edit(all.clone())
            .admin(all)
            .build()
    }
}

/// A page of results from a Marquee list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Results<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    pub total_results: Option<u64>,
    pub scroll_id: Option<String>,
}

impl<T> Results<T> {
    #[must_use]
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}

/// Free-form acknowledgement returned by delete endpoints.
pub type DeleteResponse = Properties;

wire_enum! {
    /// ISO 4217 currency codes used throughout the Marquee schema.
    #[allow(clippy::upper_case_acronyms, reason = "currency codes are written as on the wire")]
    pub enum Currency {
        USD => "USD",
        EUR => "EUR",
        GBP => "GBP",
        JPY => "JPY",
        CHF => "CHF",
        CAD => "CAD",
        AUD => "AUD",
        NZD => "NZD",
        CNY => "CNY",
        HKD => "HKD",
        SGD => "SGD",
        SEK => "SEK",
        NOK => "NOK",
        DKK => "DKK",
        INR => "INR",
        BRL => "BRL",
        MXN => "MXN",
        ZAR => "ZAR",
    }
}

wire_enum! {
    /// Asset classes of Marquee instruments and datasets.
    pub enum AssetClass {
        Cash => "Cash",
        Commod => "Commod",
        Credit => "Credit",
        CrossAsset => "Cross Asset",
        Econ => "Econ",
        Equity => "Equity",
        Fund => "Fund",
        Fx => "FX",
        Mortgage => "Mortgage",
        Rates => "Rates",
        Loan => "Loan",
        Social => "Social",
        Cryptocurrency => "Cryptocurrency",
    }
}

wire_enum! {
    /// Geographic regions.
    pub enum Region {
        Americas => "Americas",
        Asia => "Asia",
        Em => "EM",
        Europe => "Europe",
        Global => "Global",
    }
}
