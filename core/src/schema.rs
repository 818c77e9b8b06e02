//! Field schema for editor hosts
//!
//! Describes which block properties a page-builder host lets users edit,
//! and the display rules attached to them: the option list of a form field
//! is only shown for radio and select fields, and each field entry in a
//! list view is summarized by its label.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::field::{FieldDescriptor, FieldKind, FieldOption};

/// Summary shown for a field entry whose label is still empty
pub const NEW_FIELD_SUMMARY: &str = "New Field";

/// Whether the option sub-list is presented for a field of `kind`
pub fn options_visible(kind: FieldKind) -> bool {
    kind.has_options()
}

// ============================================================================
// Field Entry
// ============================================================================

/// A form field as authored in the editor.
///
/// Unlike [`FieldDescriptor`], an entry keeps its option list whatever its
/// kind, so switching a select to text and back restores the options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    #[serde(default, deserialize_with = "nullable_options")]
    pub options: Vec<FieldOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

fn nullable_options<'de, D>(deserializer: D) -> Result<Vec<FieldOption>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<FieldOption>>::deserialize(deserializer)?.unwrap_or_default())
}

impl FieldEntry {
    pub fn new(label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            label: label.into(),
            kind,
            ..Default::default()
        }
    }

    pub fn with_options<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = values.into_iter().map(FieldOption::new).collect();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Change the kind. Options are kept even when they become hidden.
    pub fn set_kind(&mut self, kind: FieldKind) {
        self.kind = kind;
    }

    pub fn options_hidden(&self) -> bool {
        !options_visible(self.kind)
    }

    /// Options the editor should present; empty while hidden
    pub fn visible_options(&self) -> &[FieldOption] {
        if self.options_hidden() {
            &[]
        } else {
            &self.options
        }
    }

    /// List-view label: the field label, or "New Field" while it is empty
    pub fn summary(&self) -> &str {
        if self.label.is_empty() {
            NEW_FIELD_SUMMARY
        } else {
            &self.label
        }
    }

    /// Build the render-side descriptor, keeping only what the kind uses
    pub fn descriptor(&self) -> FieldDescriptor {
        let label = self.label.clone();
        let placeholder = self.placeholder.clone();
        let options = self.options.clone();

        match self.kind {
            FieldKind::Text => FieldDescriptor::Text { label, placeholder },
            FieldKind::Number => FieldDescriptor::Number { label, placeholder },
            FieldKind::Email => FieldDescriptor::Email { label, placeholder },
            FieldKind::Tel => FieldDescriptor::Tel { label, placeholder },
            FieldKind::Textarea => FieldDescriptor::Textarea { label, placeholder },
            FieldKind::Checkbox => FieldDescriptor::Checkbox { label },
            FieldKind::Radio => FieldDescriptor::Radio { label, options },
            FieldKind::Select => FieldDescriptor::Select { label, options },
        }
    }
}

impl From<&FieldDescriptor> for FieldEntry {
    fn from(field: &FieldDescriptor) -> Self {
        Self {
            label: field.label().to_string(),
            kind: field.kind(),
            options: field.options().to_vec(),
            placeholder: field.placeholder().map(String::from),
        }
    }
}

// ============================================================================
// Property Configuration
// ============================================================================

/// One entry of an editor select control
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Declarative visibility rule for an array property
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum HiddenRule {
    /// Hidden unless the enclosing entry's `type` is one of `kinds`
    UnlessKindIn { kinds: Vec<FieldKind> },
}

impl HiddenRule {
    pub fn is_hidden(&self, entry: &FieldEntry) -> bool {
        match self {
            HiddenRule::UnlessKindIn { kinds } => !kinds.contains(&entry.kind),
        }
    }
}

/// How an array item is labelled in the editor list view
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum SummaryRule {
    /// Value of `field`, or `fallback` when it is empty
    FieldOr { field: String, fallback: String },
}

impl SummaryRule {
    pub fn summarize(&self, item: &Value) -> String {
        match self {
            SummaryRule::FieldOr { field, fallback } => item
                .get(field)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .unwrap_or(fallback)
                .to_string(),
        }
    }
}

/// Editable property types understood by the host
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PropertyConfig {
    Text,
    Textarea,
    Select {
        options: Vec<SelectOption>,
    },
    Array {
        #[serde(rename = "arrayFields")]
        array_fields: IndexMap<String, PropertyConfig>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hidden: Option<HiddenRule>,
        #[serde(rename = "itemSummary", default, skip_serializing_if = "Option::is_none")]
        item_summary: Option<SummaryRule>,
    },
}

/// Editable fields and default props of one block type. Field order is
/// the order the editor shows them in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentConfig {
    pub fields: IndexMap<String, PropertyConfig>,
    #[serde(rename = "defaultProps")]
    pub default_props: Value,
}

impl ComponentConfig {
    pub fn field(&self, name: &str) -> Option<&PropertyConfig> {
        self.fields.get(name)
    }
}

/// Every block a page can contain, keyed by block type name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    pub components: IndexMap<String, ComponentConfig>,
}

impl PageConfig {
    pub fn component(&self, name: &str) -> Option<&ComponentConfig> {
        self.components.get(name)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Editable properties of a single form field entry
pub fn field_entry_properties() -> IndexMap<String, PropertyConfig> {
    IndexMap::from([
        ("label".to_string(), PropertyConfig::Text),
        ("placeholder".to_string(), PropertyConfig::Text),
        (
            "type".to_string(),
            PropertyConfig::Select {
                options: FieldKind::ALL
                    .iter()
                    .map(|k| SelectOption {
                        value: k.as_str().to_string(),
                        label: k.display_name().to_string(),
                    })
                    .collect(),
            },
        ),
        (
            "options".to_string(),
            PropertyConfig::Array {
                array_fields: IndexMap::from([("value".to_string(), PropertyConfig::Text)]),
                hidden: Some(HiddenRule::UnlessKindIn {
                    kinds: vec![FieldKind::Radio, FieldKind::Select],
                }),
                item_summary: None,
            },
        ),
    ])
}

/// Configuration of the heading, form and button blocks
pub fn page_config() -> PageConfig {
    PageConfig {
        components: IndexMap::from([
            (
                "HeadingBlock".to_string(),
                ComponentConfig {
                    fields: IndexMap::from([("title".to_string(), PropertyConfig::Text)]),
                    default_props: json!({ "title": crate::blocks::DEFAULT_HEADING_TITLE }),
                },
            ),
            (
                "Form".to_string(),
                ComponentConfig {
                    fields: IndexMap::from([
                        ("title".to_string(), PropertyConfig::Text),
                        ("description".to_string(), PropertyConfig::Textarea),
                        (
                            "fields".to_string(),
                            PropertyConfig::Array {
                                array_fields: field_entry_properties(),
                                hidden: None,
                                item_summary: Some(SummaryRule::FieldOr {
                                    field: "label".to_string(),
                                    fallback: NEW_FIELD_SUMMARY.to_string(),
                                }),
                            },
                        ),
                    ]),
                    default_props: json!({
                        "fields": [],
                        "title": crate::blocks::DEFAULT_FORM_TITLE,
                        "description": crate::blocks::DEFAULT_FORM_DESCRIPTION,
                    }),
                },
            ),
            (
                "Button".to_string(),
                ComponentConfig {
                    fields: IndexMap::from([("label".to_string(), PropertyConfig::Text)]),
                    default_props: json!({ "label": crate::blocks::DEFAULT_BUTTON_LABEL }),
                },
            ),
        ]),
    }
}

// ============================================================================
// Tests
// ============================================================================
