//! # Enforcement Document
//!
//! The normalized policy record produced by one load: required updates,
//! hidden updates, and driver exclusion rules.
//!
//! ## Decoding
//!
//! Both records decode only from JSON objects; an array or scalar in their
//! place is a decode error. Within an object:
//!
//! - Keys match case-insensitively (`Required` fills `required`).
//! - A repeated key overwrites the earlier value.
//! - A `null` list is an empty list. A `null` list element is the empty
//!   value. A `null` string field leaves the field empty.
//! - Unknown keys are skipped.
//!
//! ## Normalization
//!
//! [`EnforcementDocument::dedupe`] keeps the first occurrence of every
//! element and drops later repeats. It is a stable filter: survivors keep
//! their source order, nothing is merged.
//!
//! Driver exclusions compare as whole `(driver_class, update_id)` tuples.
//! `{driverClass: "X"}` and `{driverClass: "X", updateID: "Y"}` are
//! distinct rules and both survive.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A rule excluding drivers from update actions.
///
/// An empty field means "unspecified", not "match any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct DriverExclude {
    /// Driver class the rule applies to.
    #[serde(rename = "driverClass", skip_serializing_if = "String::is_empty")]
    pub driver_class: String,
    /// Update identifier the rule applies to.
    #[serde(rename = "updateID", skip_serializing_if = "String::is_empty")]
    pub update_id: String,
}

impl DriverExclude {
    /// Creates a rule from both fields.
    pub fn new(driver_class: impl Into<String>, update_id: impl Into<String>) -> Self {
        Self {
            driver_class: driver_class.into(),
            update_id: update_id.into(),
        }
    }

    /// Creates a rule naming only a driver class.
    pub fn class(driver_class: impl Into<String>) -> Self {
        Self::new(driver_class, String::new())
    }

    /// Creates a rule naming only an update identifier.
    pub fn update(update_id: impl Into<String>) -> Self {
        Self::new(String::new(), update_id)
    }
}

/// Parsed and normalized enforcement policy for one source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnforcementDocument {
    /// Update identifiers that must be applied.
    pub required: Vec<String>,
    /// Update identifiers suppressed from the user-facing list.
    pub hidden: Vec<String>,
    /// Driver exclusion rules.
    #[serde(rename = "excludedDrivers")]
    pub excluded_drivers: Vec<DriverExclude>,
}

impl EnforcementDocument {
    /// Removes repeated entries from all three lists in place, keeping
    /// first occurrences in their original order.
    pub fn dedupe(&mut self) {
        dedupe_preserving_order(&mut self.required);
        dedupe_preserving_order(&mut self.hidden);
        dedupe_preserving_order(&mut self.excluded_drivers);
    }

    /// Returns `true` if the document names no updates and no exclusions.
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.hidden.is_empty() && self.excluded_drivers.is_empty()
    }
}

/// Stable order-preserving deduplication, in place.
///
/// Each element is kept only if an equal element has not been seen
/// earlier in `items`.
pub fn dedupe_preserving_order<T: Eq + Hash>(items: &mut Vec<T>) {
    let keep: Vec<bool> = {
        let mut seen: HashSet<&T> = HashSet::with_capacity(items.len());
        items.iter().map(|item| seen.insert(item)).collect()
    };
    // `retain` visits elements exactly once, in order.
    let mut keep = keep.into_iter();
    items.retain(|_| keep.next().unwrap_or(false));
}

/// List field that tolerates `null` for the list and for its elements.
struct NullableList<T>(Vec<T>);

impl<'de, T> Deserialize<'de> for NullableList<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Self(items.into_iter().map(Option::unwrap_or_default).collect()))
    }
}

impl<'de> Deserialize<'de> for EnforcementDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = EnforcementDocument;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an enforcement policy object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut doc = EnforcementDocument::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("required") {
                doc.required = map.next_value::<NullableList<String>>()?.0;
            } else if key.eq_ignore_ascii_case("hidden") {
                doc.hidden = map.next_value::<NullableList<String>>()?.0;
            } else if key.eq_ignore_ascii_case("excludedDrivers") {
                doc.excluded_drivers = map.next_value::<NullableList<DriverExclude>>()?.0;
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(doc)
    }
}

impl<'de> Deserialize<'de> for DriverExclude {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DriverExcludeVisitor)
    }
}

struct DriverExcludeVisitor;

impl<'de> Visitor<'de> for DriverExcludeVisitor {
    type Value = DriverExclude;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a driver exclusion object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut rule = DriverExclude::default();
        while let Some(key) = map.next_key::<String>()? {
            let field = if key.eq_ignore_ascii_case("driverClass") {
                &mut rule.driver_class
            } else if key.eq_ignore_ascii_case("updateID") {
                &mut rule.update_id
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            if let Some(value) = map.next_value::<Option<String>>()? {
                *field = value;
            }
        }
        Ok(rule)
    }
}
