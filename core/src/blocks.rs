//! Page blocks
//!
//! Heading and button blocks are stateless renders of their props. The
//! form block renders through [`crate::form::FormInstance`], which owns the
//! per-instance values.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::field::FormSpec;
use crate::render::{render_form, Element};
use crate::schema::FieldEntry;
use crate::state::FormState;

pub const DEFAULT_HEADING_TITLE: &str = "Heading";
pub const DEFAULT_FORM_TITLE: &str = "Contact Form";
pub const DEFAULT_FORM_DESCRIPTION: &str = "Please fill out the form below";
pub const DEFAULT_BUTTON_LABEL: &str = "Click Me";

/// Message reported by the default button action
pub const BUTTON_CLICKED_MESSAGE: &str = "Button clicked!";

// ============================================================================
// Heading
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingBlock {
    #[serde(default = "default_heading_title")]
    pub title: String,
}

fn default_heading_title() -> String {
    DEFAULT_HEADING_TITLE.to_string()
}

impl Default for HeadingBlock {
    fn default() -> Self {
        Self {
            title: default_heading_title(),
        }
    }
}

impl HeadingBlock {
    pub fn render(&self) -> Element {
        Element::new("div")
            .attr("style", "padding: 64px")
            .child(Element::new("h1").text(self.title.clone()))
    }
}

// ============================================================================
// Form
// ============================================================================

/// Form block props as authored in the editor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormBlock {
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
    #[serde(default = "default_form_title")]
    pub title: Option<String>,
    #[serde(default = "default_form_description")]
    pub description: Option<String>,
}

fn default_form_title() -> Option<String> {
    Some(DEFAULT_FORM_TITLE.to_string())
}

fn default_form_description() -> Option<String> {
    Some(DEFAULT_FORM_DESCRIPTION.to_string())
}

impl Default for FormBlock {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            title: default_form_title(),
            description: default_form_description(),
        }
    }
}

impl FormBlock {
    pub fn spec(&self) -> FormSpec {
        FormSpec {
            fields: self.fields.iter().map(FieldEntry::descriptor).collect(),
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }

    /// Render in the freshly mounted state (no values entered)
    pub fn render(&self) -> Element {
        render_form(&self.spec(), &FormState::new())
    }
}

// ============================================================================
// Button
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonBlock {
    #[serde(default = "default_button_label")]
    pub label: String,
}

fn default_button_label() -> String {
    DEFAULT_BUTTON_LABEL.to_string()
}

impl Default for ButtonBlock {
    fn default() -> Self {
        Self {
            label: default_button_label(),
        }
    }
}

impl ButtonBlock {
    pub fn render(&self) -> Element {
        Element::new("button")
            .attr("type", "button")
            .class("submit-button")
            .text(self.label.clone())
    }

    /// Bind the default click action, which logs the click
    pub fn with_default_action(self) -> Button<impl FnMut()> {
        let label = self.label.clone();
        Button::new(self, move || {
            info!(target: "blockform::button", label = %label, "{}", BUTTON_CLICKED_MESSAGE)
        })
    }
}

/// A button block bound to its click action
pub struct Button<A> {
    pub props: ButtonBlock,
    action: A,
}

impl<A: FnMut()> Button<A> {
    pub fn new(props: ButtonBlock, action: A) -> Self {
        Self { props, action }
    }

    pub fn render(&self) -> Element {
        self.props.render()
    }

    /// Invoke the bound action, as a click would
    pub fn press(&mut self) {
        (self.action)();
    }
}

// ============================================================================
// Block
// ============================================================================

const BLOCK_TYPES: &[&str] = &["HeadingBlock", "Form", "Button"];

/// One entry of a page's content list: `{ "type": ..., "props": {...} }`.
/// A missing or null `props` reads as the block's default props.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "props")]
pub enum Block {
    HeadingBlock(HeadingBlock),
    Form(FormBlock),
    Button(ButtonBlock),
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Entry {
            #[serde(rename = "type")]
            kind: String,
            #[serde(default)]
            props: Value,
        }

        let Entry { kind, props } = Entry::deserialize(deserializer)?;
        let props = match props {
            Value::Null => Value::Object(Default::default()),
            props => props,
        };

        let block = match kind.as_str() {
            "HeadingBlock" => serde_json::from_value(props).map(Block::HeadingBlock),
            "Form" => serde_json::from_value(props).map(Block::Form),
            "Button" => serde_json::from_value(props).map(Block::Button),
            other => return Err(de::Error::unknown_variant(other, BLOCK_TYPES)),
        };
        block.map_err(|e| de::Error::custom(format!("invalid {} props: {}", kind, e)))
    }
}

impl Block {
    pub fn type_name(&self) -> &'static str {
        match self {
            Block::HeadingBlock(_) => "HeadingBlock",
            Block::Form(_) => "Form",
            Block::Button(_) => "Button",
        }
    }

    pub fn render(&self) -> Element {
        match self {
            Block::HeadingBlock(b) => b.render(),
            Block::Form(b) => b.render(),
            Block::Button(b) => b.render(),
        }
    }
}
