//! Render-side field model
//!
//! A form is an ordered list of [`FieldDescriptor`]s. Each descriptor is a
//! closed variant per field kind carrying only the properties that kind
//! renders, so a text input never sees an option list and a radio group
//! never sees a placeholder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a field inside its form. Fields are addressed by position.
pub type FieldIndex = usize;

// ============================================================================
// Field Kind
// ============================================================================

/// The fixed set of input kinds a form block supports
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Email,
    Tel,
    Radio,
    Checkbox,
    Select,
    Textarea,
}

impl FieldKind {
    /// All kinds, in the order the editor offers them
    pub const ALL: [FieldKind; 8] = [
        FieldKind::Text,
        FieldKind::Number,
        FieldKind::Email,
        FieldKind::Tel,
        FieldKind::Radio,
        FieldKind::Checkbox,
        FieldKind::Select,
        FieldKind::Textarea,
    ];

    /// Wire name, also the HTML `type` attribute of single-line inputs
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Radio => "radio",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Select => "select",
            FieldKind::Textarea => "textarea",
        }
    }

    /// Get display name for the editor
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "Text Input",
            FieldKind::Number => "Number Input",
            FieldKind::Email => "Email Input",
            FieldKind::Tel => "Telephone Input",
            FieldKind::Radio => "Radio Buttons",
            FieldKind::Checkbox => "Checkbox",
            FieldKind::Select => "Select Dropdown",
            FieldKind::Textarea => "Text Area",
        }
    }

    /// Parse a wire name. Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    /// Kinds whose value is picked from an option list
    pub fn has_options(&self) -> bool {
        matches!(self, FieldKind::Radio | FieldKind::Select)
    }

    /// Kinds that render a placeholder hint
    pub fn has_placeholder(&self) -> bool {
        matches!(
            self,
            FieldKind::Text
                | FieldKind::Number
                | FieldKind::Email
                | FieldKind::Tel
                | FieldKind::Textarea
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a radio group or select dropdown
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

// ============================================================================
// Field Descriptor
// ============================================================================

/// One form field, ready to render
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldDescriptor {
    Text { label: String, placeholder: Option<String> },
    Number { label: String, placeholder: Option<String> },
    Email { label: String, placeholder: Option<String> },
    Tel { label: String, placeholder: Option<String> },
    Textarea { label: String, placeholder: Option<String> },
    Checkbox { label: String },
    Radio { label: String, options: Vec<FieldOption> },
    Select { label: String, options: Vec<FieldOption> },
}

impl FieldDescriptor {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldDescriptor::Text { .. } => FieldKind::Text,
            FieldDescriptor::Number { .. } => FieldKind::Number,
            FieldDescriptor::Email { .. } => FieldKind::Email,
            FieldDescriptor::Tel { .. } => FieldKind::Tel,
            FieldDescriptor::Textarea { .. } => FieldKind::Textarea,
            FieldDescriptor::Checkbox { .. } => FieldKind::Checkbox,
            FieldDescriptor::Radio { .. } => FieldKind::Radio,
            FieldDescriptor::Select { .. } => FieldKind::Select,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FieldDescriptor::Text { label, .. }
            | FieldDescriptor::Number { label, .. }
            | FieldDescriptor::Email { label, .. }
            | FieldDescriptor::Tel { label, .. }
            | FieldDescriptor::Textarea { label, .. }
            | FieldDescriptor::Checkbox { label }
            | FieldDescriptor::Radio { label, .. }
            | FieldDescriptor::Select { label, .. } => label,
        }
    }

    /// Placeholder hint, for the kinds that carry one
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            FieldDescriptor::Text { placeholder, .. }
            | FieldDescriptor::Number { placeholder, .. }
            | FieldDescriptor::Email { placeholder, .. }
            | FieldDescriptor::Tel { placeholder, .. }
            | FieldDescriptor::Textarea { placeholder, .. } => placeholder.as_deref(),
            _ => None,
        }
    }

    /// Choice list of a radio group or select; empty for every other kind
    pub fn options(&self) -> &[FieldOption] {
        match self {
            FieldDescriptor::Radio { options, .. } | FieldDescriptor::Select { options, .. } => {
                options
            }
            _ => &[],
        }
    }
}

// ============================================================================
// Form Spec
// ============================================================================

/// Ordered fields plus the optional form heading and description
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSpec {
    pub fields: Vec<FieldDescriptor>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl FormSpec {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            fields,
            title: None,
            description: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, index: FieldIndex) -> Option<&FieldDescriptor> {
        self.fields.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_names_round_trip() {
        for kind in FieldKind::ALL {
            assert_eq!(FieldKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(FieldKind::parse("date"), None);
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let kind: FieldKind = serde_json::from_str("\"textarea\"").unwrap();
        assert_eq!(kind, FieldKind::Textarea);
        assert_eq!(serde_json::to_string(&FieldKind::Tel).unwrap(), "\"tel\"");
    }

    #[test]
    fn test_options_only_on_choice_kinds() {
        let radio = FieldDescriptor::Radio {
            label: "Size".to_string(),
            options: vec![FieldOption::new("S"), FieldOption::new("M")],
        };
        assert_eq!(radio.options().len(), 2);
        assert_eq!(radio.placeholder(), None);

        let text = FieldDescriptor::Text {
            label: "Name".to_string(),
            placeholder: Some("Jane".to_string()),
        };
        assert!(text.options().is_empty());
        assert_eq!(text.placeholder(), Some("Jane"));
        assert_eq!(text.kind(), FieldKind::Text);
    }
}
