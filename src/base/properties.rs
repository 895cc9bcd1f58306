//! An open record keyed by wire names, for the parts of the schema that are free-form.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::Result;
use crate::base::naming::{to_camel_case, to_snake_case};

/// A loosely typed record whose properties can be addressed by either naming convention.
///
/// Entries are stored under their camelCase wire name, so `props.get("region_code")` and
/// `props.get("regionCode")` are the same lookup. Keys arriving over the wire in snake_case
/// are normalized on deserialization.
///
/// Typed records use it (flattened) to hold properties this SDK has no field for, which keeps
/// them from being lost when a record is fetched, modified and sent back.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, Value>);

impl Properties {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value of a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(&to_camel_case(name))
    }

    /// Returns a property converted into `T`, or `None` if it is not set.
    ///
    /// # Errors
    ///
    /// Returns an error if the property is set but cannot be represented as `T`.
    pub fn get_as<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>> {
        self.get(name)
            .map(|value| serde_json::from_value(value.clone()))
            .transpose()
            .map_err(Into::into)
    }

    /// Sets a property, returning the previous value. Setting `null` removes the property.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be serialized to JSON.
    pub fn set<T: Serialize>(&mut self, name: &str, value: T) -> Result<Option<Value>> {
        let key = to_camel_case(name);
        let value = serde_json::to_value(value)?;

        if value.is_null() {
            Ok(self.0.remove(&key))
        } else {
            Ok(self.0.insert(key, value))
        }
    }

    /// Removes a property, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(&to_camel_case(name))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(&to_camel_case(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over properties by wire name.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Iterates over properties by snake_case accessor name.
    pub fn iter_snake(&self) -> impl Iterator<Item = (String, &Value)> {
        self.0.iter().map(|(key, value)| (to_snake_case(key), value))
    }

    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.0
    }
}

impl<'de> Deserialize<'de> for Properties {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}

impl<K: AsRef<str>> FromIterator<(K, Value)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (to_camel_case(key.as_ref()), value))
                .collect(),
        )
    }
}

impl<'props> IntoIterator for &'props Properties {
    type Item = (&'props String, &'props Value);
    type IntoIter = btree_map::Iter<'props, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    #[test]
    fn either_naming_addresses_the_same_property() -> anyhow::Result<()> {
        let mut props = Properties::new();
        props.set("region_code", "019")?;

        assert_eq!(props.get("regionCode"), Some(&json!("019")));
        assert_eq!(props.get("region_code"), Some(&json!("019")));
        assert!(props.contains("regionCode"));
        assert_eq!(props.len(), 1);

        let previous = props.set("regionCode", 150)?;
        assert_eq!(previous, Some(json!("019")));
        assert_eq!(props.get_as::<u32>("region_code")?, Some(150));
        Ok(())
    }

    #[test]
    fn setting_null_removes() -> anyhow::Result<()> {
        let mut props = Properties::new();
        props.set("ownerId", "abc")?;
        props.set("owner_id", Option::<String>::None)?;

        assert!(props.is_empty());
        assert_eq!(props.remove("ownerId"), None);
        Ok(())
    }

    #[test]
    fn get_as_reports_coercion_failures() -> anyhow::Result<()> {
        let mut props = Properties::new();
        props.set("asOfDate", "2024-03-01")?;

        assert_eq!(
            props.get_as::<NaiveDate>("as_of_date")?,
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
        props.get_as::<u64>("as_of_date").unwrap_err();
        assert_eq!(props.get_as::<u64>("missing")?, None);
        Ok(())
    }

    #[test]
    fn deserialization_normalizes_keys() -> anyhow::Result<()> {
        let props: Properties = serde_json::from_value(json!({
            "sub_region": "Northern Europe",
            "alpha2": "GB",
            "dropped": null
        }))?;

        let keys: Vec<&String> = props.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["alpha2", "subRegion"]);

        let snake: Vec<String> = props.iter_snake().map(|(k, _)| k).collect();
        assert_eq!(snake, ["alpha2", "sub_region"]);

        assert_eq!(
            serde_json::to_value(&props)?,
            json!({"alpha2": "GB", "subRegion": "Northern Europe"})
        );
        Ok(())
    }
}
