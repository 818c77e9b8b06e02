//! Per-instance form values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::field::{FieldIndex, FieldKind, FormSpec};

/// Current value of one field: text for every kind except checkbox
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    /// Value an unset field reads as
    pub fn default_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Checkbox => FieldValue::Checked(false),
            _ => FieldValue::Text(String::new()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Checked(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Checked(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Checked(value)
    }
}

/// Change reported by a rendered control
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// Text inputs, textareas, radio groups and selects
    Text { index: FieldIndex, value: String },
    /// Checkboxes
    Checked { index: FieldIndex, checked: bool },
}

impl InputEvent {
    pub fn index(&self) -> FieldIndex {
        match self {
            InputEvent::Text { index, .. } | InputEvent::Checked { index, .. } => *index,
        }
    }

    pub fn into_value(self) -> FieldValue {
        match self {
            InputEvent::Text { value, .. } => FieldValue::Text(value),
            InputEvent::Checked { checked, .. } => FieldValue::Checked(checked),
        }
    }
}

/// Last committed value per field index.
///
/// Entries are stored exactly as received; nothing is validated or
/// normalized on the way in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    values: BTreeMap<FieldIndex, FieldValue>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite one entry, leaving every other entry untouched
    pub fn set(&mut self, index: FieldIndex, value: impl Into<FieldValue>) {
        self.values.insert(index, value.into());
    }

    /// Commit the value carried by an input event
    pub fn apply(&mut self, event: InputEvent) {
        let index = event.index();
        self.set(index, event.into_value());
    }

    pub fn get(&self, index: FieldIndex) -> Option<&FieldValue> {
        self.values.get(&index)
    }

    /// Stored value, or the default for `kind` when the field is unset
    pub fn value_for(&self, index: FieldIndex, kind: FieldKind) -> FieldValue {
        self.values
            .get(&index)
            .cloned()
            .unwrap_or_else(|| FieldValue::default_for(kind))
    }

    pub fn text(&self, index: FieldIndex) -> &str {
        self.values
            .get(&index)
            .and_then(FieldValue::as_str)
            .unwrap_or_default()
    }

    pub fn checked(&self, index: FieldIndex) -> bool {
        self.values
            .get(&index)
            .and_then(FieldValue::as_bool)
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Full value mapping for `spec`: every field present, unset ones at
    /// their per-kind default, plus any other entry that was committed.
    pub fn snapshot(&self, spec: &FormSpec) -> FormSnapshot {
        let mut values = self.values.clone();
        for (index, field) in spec.fields.iter().enumerate() {
            values
                .entry(index)
                .or_insert_with(|| FieldValue::default_for(field.kind()));
        }
        FormSnapshot { values }
    }
}

/// Values handed to the submit handler
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot {
    values: BTreeMap<FieldIndex, FieldValue>,
}

impl FormSnapshot {
    pub fn get(&self, index: FieldIndex) -> Option<&FieldValue> {
        self.values.get(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldIndex, &FieldValue)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldDescriptor;
    use serde_json::json;

    fn text_and_checkbox() -> FormSpec {
        FormSpec::new(vec![
            FieldDescriptor::Text {
                label: "Name".to_string(),
                placeholder: None,
            },
            FieldDescriptor::Checkbox {
                label: "Subscribe".to_string(),
            },
        ])
    }

    #[test]
    fn test_unset_values_default_per_kind() {
        let state = FormState::new();
        assert_eq!(state.value_for(0, FieldKind::Text), FieldValue::Text(String::new()));
        assert_eq!(state.value_for(3, FieldKind::Checkbox), FieldValue::Checked(false));
        assert_eq!(state.text(7), "");
        assert!(!state.checked(7));
    }

    #[test]
    fn test_set_overwrites_single_entry() {
        let mut state = FormState::new();
        state.set(0, "a");
        state.set(1, true);
        state.set(0, "b");

        assert_eq!(state.get(0), Some(&FieldValue::Text("b".to_string())));
        assert_eq!(state.get(1), Some(&FieldValue::Checked(true)));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_apply_commits_event_value() {
        let mut state = FormState::new();
        state.apply(InputEvent::Text { index: 2, value: "x".to_string() });
        state.apply(InputEvent::Checked { index: 1, checked: true });

        assert_eq!(state.text(2), "x");
        assert!(state.checked(1));
        assert_eq!(state.get(0), None);
    }

    #[test]
    fn test_empty_snapshot_has_defaults() {
        let snapshot = FormState::new().snapshot(&text_and_checkbox());
        assert_eq!(snapshot.to_json(), json!({ "0": "", "1": false }));
    }

    #[test]
    fn test_snapshot_keeps_committed_values() {
        let mut state = FormState::new();
        state.set(0, "Ada");
        state.set(1, true);

        let snapshot = state.snapshot(&text_and_checkbox());
        assert_eq!(snapshot.to_json(), json!({ "0": "Ada", "1": true }));
    }
}
