//! Field-level change tracking for partial updates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prior and new value of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    /// Value before the update.
    pub old: Value,
    /// Value after the update.
    pub new: Value,
}

/// Map from field name to its [`FieldChange`].
///
/// Holds an entry for a field if and only if the update changed its value.
/// Serialises as a plain JSON object keyed by field name.
///
/// # Examples
/// ```
/// use recipe_api::domain::ChangeLog;
///
/// let mut log = ChangeLog::default();
/// let mut name = "Adobo".to_owned();
/// log.apply("name", &mut name, Some("Chicken Adobo".to_owned()));
/// log.apply("name", &mut name, Some("Chicken Adobo".to_owned()));
///
/// assert_eq!(name, "Chicken Adobo");
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeLog(BTreeMap<String, FieldChange>);

impl ChangeLog {
    /// Overwrite `slot` with `value` when one is supplied, recording the
    /// change under `field` if the value differs.
    pub fn apply<T>(&mut self, field: &str, slot: &mut T, value: Option<T>)
    where
        T: PartialEq + Clone + Into<Value>,
    {
        let Some(value) = value else {
            return;
        };
        if *slot == value {
            return;
        }
        let old = std::mem::replace(slot, value);
        self.0.insert(
            field.to_owned(),
            FieldChange {
                old: old.into(),
                new: slot.clone().into(),
            },
        );
    }

    /// Recorded change for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldChange> {
        self.0.get(field)
    }

    /// Number of changed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names of the changed fields in lexical order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
