use std::any::type_name;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::Result;
use crate::base::naming::{Case, to_camel_case};
use crate::error::Error;

/// Dynamic access to the typed records of the Marquee schema.
///
/// Every type that round-trips through JSON gets this for free. The JSON wire form serves as
/// the reflective view of a record: properties are looked up by name in it, and assignments
/// are merged into it and parsed back, so a value is coerced by exactly the same rules that
/// apply to data coming from the API (a date string becomes a date, `"usd"` becomes
/// `Currency::USD`, and so on).
pub trait Record: Serialize + DeserializeOwned {
    /// Builds a record from JSON whose keys may be snake_case or camelCase, at any depth.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the values cannot be coerced into the record's fields or
    /// a required field is missing.
    fn from_dict(value: Value) -> Result<Self> {
        let value = rename_keys(value, Case::Camel);
        serde_json::from_value(value).map_err(|e| {
            Error::validation(format!("cannot build {}: {e}", short_type_name::<Self>()))
        })
    }

    /// The wire form of the record, camelCase keys and unset properties omitted.
    fn to_dict(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// The record as JSON with keys in the requested convention.
    fn as_dict(&self, case: Case) -> Result<Value> {
        let value = self.to_dict()?;
        Ok(match case {
            Case::Camel => value,
            _ => rename_keys(value, case),
        })
    }

    /// Returns the current value of a property by either of its names, or `None` if unset.
    fn get_property(&self, name: &str) -> Result<Option<Value>> {
        let key = to_camel_case(name);
        let mut fields = self.fields()?;
        Ok(fields.remove(&key))
    }

    /// Assigns a property by either of its names, coercing `value` to the property's type.
    ///
    /// Nested records in `value` may use either naming, as with [`Record::from_dict`].
    /// Assigning `null` clears an optional property and resets a list to empty. On failure
    /// the record is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the value cannot be coerced, if clearing a required
    /// property, or if the record has no property of that name.
    fn set_property<T: Serialize>(&mut self, name: &str, value: T) -> Result<()> {
        let key = to_camel_case(name);
        let value = rename_keys(serde_json::to_value(value)?, Case::Camel);
        let record = short_type_name::<Self>();

        let mut fields = self.fields()?;
        if value.is_null() {
            if !Self::has_property(&key) {
                return Err(Error::validation(format!("{record} has no property {name}")));
            }
            fields.remove(&key);
        } else {
            fields.insert(key.clone(), value);
        }

        let mut ignored = Vec::new();
        let updated: Self = serde_ignored::deserialize(Value::Object(fields), |path| {
            ignored.push(path.to_string());
        })
        .map_err(|e| Error::validation(format!("cannot set {name} on {record}: {e}")))?;

        let nested = format!("{key}.");
        if let Some(path) = ignored
            .iter()
            .find(|path| **path == key || path.starts_with(&nested))
        {
            return Err(Error::validation(if *path == key {
                format!("{record} has no property {name}")
            } else {
                format!("cannot set {name} on {record}: unknown property {path}")
            }));
        }

        *self = updated;
        Ok(())
    }

    /// Returns `true` if `name`, in either naming, is a property of this record type.
    ///
    /// Records keeping unmodelled fields in a flattened [`Properties`](super::Properties)
    /// accept every name.
    fn has_property(name: &str) -> bool {
        let key = to_camel_case(name);
        let mut lookup = Map::new();
        lookup.insert(key.clone(), Value::Null);

        // unknown keys are reported before any missing field error
        let mut known = true;
        let _decoded: std::result::Result<Self, _> =
            serde_ignored::deserialize(Value::Object(lookup), |path| {
                if path.to_string() == key {
                    known = false;
                }
            });
        known
    }

    /// A record with every property at its default, for records that have one.
    #[must_use]
    fn default_instance() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    #[doc(hidden)]
    fn fields(&self) -> Result<Map<String, Value>> {
        match self.to_dict()? {
            Value::Object(fields) => Ok(fields),
            other => Err(Error::validation(format!(
                "{} is not a record but {other}",
                short_type_name::<Self>()
            ))),
        }
    }
}

impl<T: Serialize + DeserializeOwned> Record for T {}

/// Recursively renames every object key in `value` into `case`.
#[must_use]
pub fn rename_keys(value: Value, case: Case) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (case.convert(&key), rename_keys(value, case)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| rename_keys(item, case))
                .collect(),
        ),
        other => other,
    }
}

fn short_type_name<T>() -> &'static str {
    let full_name = type_name::<T>();
    full_name.rsplit("::").next().unwrap_or(full_name)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::Deserialize;
    use serde_json::json;
    use serde_with::skip_serializing_none;

    use super::*;
    use crate::base::Properties;
    use crate::common::Currency;

    #[skip_serializing_none]
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Quote {
        name: String,
        #[serde(rename = "type")]
        type_: Option<String>,
        currency: Option<Currency>,
        as_of_date: Option<NaiveDate>,
        last_updated_time: Option<DateTime<Utc>>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        tags: Vec<String>,
    }

    #[skip_serializing_none]
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct OpenQuote {
        name: String,
        #[serde(flatten)]
        extra: Properties,
    }

    #[test]
    fn from_dict_accepts_either_naming() -> anyhow::Result<()> {
        let quote = Quote::from_dict(json!({
            "name": "SPX close",
            "as_of_date": "2024-03-01",
            "lastUpdatedTime": "2024-03-01T21:00:00Z",
            "currency": "usd",
            "type_": "close"
        }))?;

        assert_eq!(quote.as_of_date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(quote.currency, Some(Currency::USD));
        assert_eq!(quote.type_.as_deref(), Some("close"));
        assert!(quote.last_updated_time.is_some());
        Ok(())
    }

    #[test]
    fn from_dict_reports_missing_required_fields() {
        let err = Quote::from_dict(json!({"asOfDate": "2024-03-01"})).unwrap_err();

        assert!(err.to_string().contains("cannot build Quote"), "{err}");
        assert!(err.to_string().contains("name"), "{err}");
    }

    #[test]
    fn dicts_use_requested_case() -> anyhow::Result<()> {
        let quote = Quote {
            name: "SPX close".to_owned(),
            as_of_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..Quote::default_instance()
        };

        assert_eq!(
            quote.to_dict()?,
            json!({"name": "SPX close", "asOfDate": "2024-03-01"})
        );
        assert_eq!(
            quote.as_dict(Case::Snake)?,
            json!({"name": "SPX close", "as_of_date": "2024-03-01"})
        );
        Ok(())
    }

    #[test]
    fn set_property_coerces_values() -> anyhow::Result<()> {
        let mut quote = Quote::default_instance();

        quote.set_property("as_of_date", "2024-03-01")?;
        quote.set_property("currency", "eur")?;
        quote.set_property("type", "close")?;
        quote.set_property("tags", ["equity", "index"])?;

        assert_eq!(quote.as_of_date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(quote.currency, Some(Currency::EUR));
        assert_eq!(quote.type_.as_deref(), Some("close"));
        assert_eq!(quote.tags, ["equity", "index"]);
        assert_eq!(quote.get_property("asOfDate")?, Some(json!("2024-03-01")));
        assert_eq!(quote.get_property("last_updated_time")?, None);
        Ok(())
    }

    #[test]
    fn set_property_failure_leaves_record_unchanged() -> anyhow::Result<()> {
        let mut quote = Quote::default_instance();
        quote.set_property("asOfDate", "2024-03-01")?;
        let before = quote.clone();

        let err = quote.set_property("as_of_date", "yesterday").unwrap_err();
        assert!(err.to_string().contains("cannot set as_of_date on Quote"), "{err}");

        let err = quote.set_property("colour", "blue").unwrap_err();
        assert!(err.to_string().contains("Quote has no property colour"), "{err}");

        quote.set_property("name", Option::<String>::None).unwrap_err();

        assert_eq!(quote, before);
        Ok(())
    }

    #[test]
    fn set_property_clears_optional_values() -> anyhow::Result<()> {
        let mut quote = Quote::default_instance();
        quote.set_property("currency", "GBP")?;
        quote.set_property("currency", Option::<String>::None)?;

        assert_eq!(quote.currency, None);
        Ok(())
    }

    #[skip_serializing_none]
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Listing {
        venue: Option<String>,
        primary_quote: Option<Quote>,
    }

    #[test]
    fn set_property_assigns_values_omitted_from_the_wire_form() -> anyhow::Result<()> {
        let mut quote = Quote::default_instance();
        quote.set_property("tags", ["equity"])?;

        quote.set_property("tags", Vec::<String>::new())?;
        assert!(quote.tags.is_empty(), "tags: {:?}", quote.tags);

        quote.set_property("tags", ["index"])?;
        quote.set_property("tags", Option::<Vec<String>>::None)?;
        assert!(quote.tags.is_empty(), "tags: {:?}", quote.tags);
        Ok(())
    }

    #[test]
    fn set_property_normalizes_nested_keys() -> anyhow::Result<()> {
        let mut listing = Listing::default_instance();
        listing.set_property(
            "primary_quote",
            json!({"name": "SPX close", "as_of_date": "2024-03-01", "type_": "close"}),
        )?;

        let quote = listing.primary_quote.as_ref().map(|q| (q.as_of_date, q.type_.as_deref()));
        assert_eq!(
            quote,
            Some((NaiveDate::from_ymd_opt(2024, 3, 1), Some("close")))
        );
        Ok(())
    }

    #[test]
    fn set_property_rejects_unknown_nested_names() {
        let mut listing = Listing::default_instance();

        let err = listing
            .set_property("primaryQuote", json!({"name": "SPX close", "colour": "blue"}))
            .unwrap_err();
        assert!(err.to_string().contains("unknown property"), "{err}");
        assert_eq!(listing, Listing::default_instance());
    }

    #[test]
    fn clearing_unknown_names_is_rejected() {
        let mut quote = Quote::default_instance();

        let err = quote
            .set_property("colour", Option::<String>::None)
            .unwrap_err();
        assert!(err.to_string().contains("Quote has no property colour"), "{err}");
    }

    #[test]
    fn property_names_are_known_in_either_naming() {
        assert!(Quote::has_property("as_of_date"), "snake_case name");
        assert!(Quote::has_property("asOfDate"), "camelCase name");
        assert!(Quote::has_property("tags"), "list property");
        assert!(Quote::has_property("type_"), "keyword property");
        assert!(!Quote::has_property("colour"), "unknown name");
        assert!(OpenQuote::has_property("colour"), "open record");
    }

    #[test]
    fn open_records_keep_unknown_properties() -> anyhow::Result<()> {
        let mut quote = OpenQuote::from_dict(json!({"name": "x", "close_price": 4.5}))?;
        quote.set_property("open_price", 4.25)?;

        assert_eq!(quote.extra.get("closePrice"), Some(&json!(4.5)));
        assert_eq!(quote.get_property("openPrice")?, Some(json!(4.25)));
        assert_eq!(
            quote.to_dict()?,
            json!({"name": "x", "closePrice": 4.5, "openPrice": 4.25})
        );
        Ok(())
    }

    #[test]
    fn non_records_are_rejected() {
        let mut value = 5_u32;

        let err = value.set_property("anything", 1).unwrap_err();
        assert!(err.to_string().contains("is not a record"), "{err}");
    }
}
