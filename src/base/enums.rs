//! Lenient matching of Marquee enumerations.
//!
//! Marquee is inconsistent about the casing of enumerated values across services and
//! over time (`"Equity"` vs `"EQUITY"`, `"sub_region"` vs `"subRegion"`). Types declared with
//! `wire_enum!` resolve incoming strings through [`WireEnum::fuzzy_match`] and keep anything
//! unrecognized in their `Unknown` variant instead of failing.

use std::any::type_name;

use crate::Result;
use crate::error::Error;

/// A Marquee enumeration with fixed wire strings.
pub trait WireEnum: Sized + Clone + 'static {
    /// All known variants, in declaration order. `Unknown` is not part of this list.
    const VARIANTS: &'static [Self];

    /// The wire string of this value.
    fn as_str(&self) -> &str;

    /// The Rust variant name of this value, or the raw value for `Unknown`.
    fn variant_name(&self) -> &str;

    /// Wraps an unrecognized value.
    fn unknown(value: String) -> Self;

    /// Returns `true` for values captured by the `Unknown` variant.
    fn is_unknown(&self) -> bool;

    /// Resolves `value` to a known variant.
    ///
    /// Candidates are tried from strictest to loosest: the exact wire string, the wire string
    /// ignoring ASCII case, the variant name ignoring ASCII case, and finally both compared
    /// after dropping `_`, `-`, `.` and whitespace.
    fn fuzzy_match(value: &str) -> Option<Self> {
        let variants = Self::VARIANTS;

        variants
            .iter()
            .find(|v| v.as_str() == value)
            .or_else(|| {
                variants
                    .iter()
                    .find(|v| v.as_str().eq_ignore_ascii_case(value))
            })
            .or_else(|| {
                variants
                    .iter()
                    .find(|v| v.variant_name().eq_ignore_ascii_case(value))
            })
            .or_else(|| {
                let wanted = normalize(value);
                if wanted.is_empty() {
                    return None;
                }
                variants.iter().find(|v| {
                    normalize(v.as_str()) == wanted || normalize(v.variant_name()) == wanted
                })
            })
            .cloned()
    }

    /// Resolves `value`, falling back to the `Unknown` variant.
    fn from_wire(value: &str) -> Self {
        Self::fuzzy_match(value).unwrap_or_else(|| Self::unknown(value.to_owned()))
    }

    /// Resolves `value`, failing with a validation error if it matches no known variant.
    fn parse_known(value: &str) -> Result<Self> {
        Self::fuzzy_match(value).ok_or_else(|| {
            let full_name = type_name::<Self>();
            let name = full_name.rsplit("::").next().unwrap_or(full_name);
            Error::validation(format!("{value:?} is not a known {name}"))
        })
    }
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | '.') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    wire_enum! {
        /// Test enum with awkward spellings.
        enum Granularity {
            SubRegion => "sub_region",
            Country => "Country",
            MarketCap => "MARKET-CAP",
        }
    }

    #[test]
    fn exact_and_case_insensitive_wire_values_match() {
        assert_eq!(Granularity::fuzzy_match("Country"), Some(Granularity::Country));
        assert_eq!(Granularity::fuzzy_match("COUNTRY"), Some(Granularity::Country));
        assert_eq!(Granularity::fuzzy_match("market-cap"), Some(Granularity::MarketCap));
    }

    #[test]
    fn variant_names_and_separators_match() {
        assert_eq!(Granularity::fuzzy_match("subregion"), Some(Granularity::SubRegion));
        assert_eq!(Granularity::fuzzy_match("Sub Region"), Some(Granularity::SubRegion));
        assert_eq!(Granularity::fuzzy_match("market_cap"), Some(Granularity::MarketCap));
        assert_eq!(Granularity::fuzzy_match("MarketCap"), Some(Granularity::MarketCap));
    }

    #[test]
    fn unrecognized_values_are_kept() {
        assert_eq!(Granularity::fuzzy_match("city"), None);
        assert_eq!(Granularity::fuzzy_match("__"), None);
        assert_eq!(
            Granularity::from_wire("city"),
            Granularity::Unknown("city".to_owned())
        );
        assert!(Granularity::from_wire("city").is_unknown());
        assert!(!Granularity::Country.is_unknown());
    }

    #[test]
    fn parse_known_rejects_unrecognized_values() {
        let err = Granularity::parse_known("city").unwrap_err();

        assert!(err.to_string().contains("\"city\" is not a known Granularity"), "{err}");
        assert_eq!(
            Granularity::parse_known("SUB_REGION").unwrap(),
            Granularity::SubRegion
        );
    }

    #[test]
    fn serde_uses_wire_strings() {
        let json = serde_json::to_string(&Granularity::MarketCap).unwrap();
        assert_eq!(json, "\"MARKET-CAP\"");

        let parsed: Vec<Granularity> =
            serde_json::from_str(r#"["subRegion", "country", "planet"]"#).unwrap();
        assert_eq!(
            parsed,
            vec![
                Granularity::SubRegion,
                Granularity::Country,
                Granularity::Unknown("planet".to_owned()),
            ]
        );

        let unknown = serde_json::to_string(&Granularity::Unknown("planet".to_owned())).unwrap();
        assert_eq!(unknown, "\"planet\"");
    }

    #[test]
    fn display_and_from_str_round_trip() {
        let parsed: Granularity = "market cap".parse().unwrap();

        assert_eq!(parsed, Granularity::MarketCap);
        assert_eq!(parsed.to_string(), "MARKET-CAP");
        assert_eq!(Granularity::VARIANTS.len(), 3);
    }
}
