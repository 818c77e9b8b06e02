//! Markup rendering
//!
//! Blocks render into a small element tree rather than straight into a
//! string, so callers can inspect the structure (tests, the preview server)
//! before serializing it with [`Element::to_html`].

use crate::field::{FieldDescriptor, FieldIndex, FormSpec};
use crate::state::FormState;

/// Attribute carrying the field position on each field wrapper
pub const FIELD_INDEX_ATTR: &str = "data-field-index";

/// Label of the select entry shown while nothing is chosen
pub const SELECT_PLACEHOLDER: &str = "Select an option";

const VOID_TAGS: &[&str] = &["input", "br", "hr", "img", "meta", "link"];

// ============================================================================
// Element Tree
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An HTML element. Attributes keep insertion order; a `None` value is a
/// bare boolean attribute such as `checked`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, Option<String>)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, Some(value.into())));
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Boolean attribute, emitted only when `on` is set
    pub fn flag(mut self, name: &'static str, on: bool) -> Self {
        if on {
            self.attrs.push((name, None));
        }
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_deref().unwrap_or_default())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| *n == name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// All descendant elements in document order, excluding `self`
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_descendants(&mut out);
        out
    }

    fn collect_descendants<'a>(&'a self, out: &mut Vec<&'a Element>) {
        for child in &self.children {
            if let Node::Element(el) = child {
                out.push(el);
                el.collect_descendants(out);
            }
        }
    }

    pub fn find_all(&self, pred: impl Fn(&Element) -> bool) -> Vec<&Element> {
        self.descendants().into_iter().filter(|el| pred(*el)).collect()
    }

    /// Concatenated text of this subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => out.push_str(&el.text_content()),
            }
        }
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                out.push_str(&tera::escape_html(value));
                out.push('"');
            }
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(&tera::escape_html(t)),
                Node::Element(el) => el.write_html(out),
            }
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

// ============================================================================
// Form Rendering
// ============================================================================

/// Render a form with the values currently held in `state`
pub fn render_form(spec: &FormSpec, state: &FormState) -> Element {
    let mut wrapper = Element::new("div").class("form-wrapper");

    if let Some(title) = spec.title.as_deref().filter(|t| !t.is_empty()) {
        wrapper = wrapper.child(Element::new("h2").class("form-heading").text(title));
    }
    if let Some(description) = spec.description.as_deref().filter(|d| !d.is_empty()) {
        wrapper = wrapper.child(
            Element::new("p")
                .class("form-description")
                .text(description),
        );
    }

    let submit = Element::new("div").class("form-field").child(
        Element::new("button")
            .attr("type", "submit")
            .class("submit-button")
            .text("Submit"),
    );

    let form = Element::new("form")
        .children(
            spec.fields
                .iter()
                .enumerate()
                .map(|(index, field)| render_field(index, field, state)),
        )
        .child(submit);

    Element::new("div")
        .class("form-container")
        .child(wrapper.child(form))
}

/// Render one field wrapper, dispatching on the field kind
pub fn render_field(index: FieldIndex, field: &FieldDescriptor, state: &FormState) -> Element {
    let wrapper = Element::new("div")
        .class("form-field")
        .attr(FIELD_INDEX_ATTR, index.to_string());

    match field {
        FieldDescriptor::Radio { label, options } => {
            let current = state.text(index);
            let group = Element::new("div").class("radio-group").children(options.iter().map(|option| {
                Element::new("label")
                    .class("radio-item")
                    .child(
                        Element::new("input")
                            .attr("type", "radio")
                            .attr("name", format!("field-{}", index))
                            .attr("value", option.value.clone())
                            .class("radio-input")
                            .flag("checked", state.get(index).is_some() && current == option.value),
                    )
                    .child(Element::new("span").text(option.value.clone()))
            }));

            wrapper.child(field_label(label)).child(group)
        }
        FieldDescriptor::Select { label, options } => {
            let current = state.text(index);
            let placeholder = Element::new("option")
                .attr("value", "")
                .flag("disabled", true)
                .flag("selected", current.is_empty())
                .text(SELECT_PLACEHOLDER);
            let select = Element::new("select")
                .class("form-select")
                .attr("name", format!("field-{}", index))
                .child(placeholder)
                .children(options.iter().map(|option| {
                    Element::new("option")
                        .attr("value", option.value.clone())
                        .flag("selected", !current.is_empty() && current == option.value)
                        .text(option.value.clone())
                }));

            wrapper.child(field_label(label)).child(select)
        }
        FieldDescriptor::Checkbox { label } => wrapper.child(
            Element::new("label")
                .class("checkbox-item")
                .child(
                    Element::new("input")
                        .attr("type", "checkbox")
                        .attr("name", format!("field-{}", index))
                        .class("checkbox-input")
                        .flag("checked", state.checked(index)),
                )
                .text(label.clone()),
        ),
        FieldDescriptor::Textarea { label, placeholder } => {
            let mut textarea = Element::new("textarea")
                .class("form-textarea")
                .attr("name", format!("field-{}", index));
            if let Some(placeholder) = placeholder {
                textarea = textarea.attr("placeholder", placeholder.clone());
            }

            wrapper
                .child(field_label(label))
                .child(textarea.text(state.text(index)))
        }
        FieldDescriptor::Text { label, placeholder }
        | FieldDescriptor::Number { label, placeholder }
        | FieldDescriptor::Email { label, placeholder }
        | FieldDescriptor::Tel { label, placeholder } => {
            let mut input = Element::new("input")
                .attr("type", field.kind().as_str())
                .attr("name", format!("field-{}", index))
                .class("form-input");
            if let Some(placeholder) = placeholder {
                input = input.attr("placeholder", placeholder.clone());
            }

            wrapper
                .child(field_label(label))
                .child(input.attr("value", state.text(index)))
        }
    }
}

fn field_label(label: &str) -> Element {
    Element::new("label").class("form-label").text(label)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldOption;
    use pretty_assertions::assert_eq;

    fn field_indexes(root: &Element) -> Vec<String> {
        root.find_all(|el| el.has_attr(FIELD_INDEX_ATTR))
            .into_iter()
            .filter_map(|el| el.get_attr(FIELD_INDEX_ATTR).map(String::from))
            .collect()
    }

    fn submit_count(root: &Element) -> usize {
        root.find_all(|el| el.tag == "button" && el.get_attr("type") == Some("submit"))
            .len()
    }

    fn every_kind() -> FormSpec {
        FormSpec::new(vec![
            FieldDescriptor::Text { label: "Name".into(), placeholder: Some("Your name".into()) },
            FieldDescriptor::Number { label: "Age".into(), placeholder: None },
            FieldDescriptor::Email { label: "Email".into(), placeholder: None },
            FieldDescriptor::Tel { label: "Phone".into(), placeholder: None },
            FieldDescriptor::Radio {
                label: "Size".into(),
                options: vec![FieldOption::new("A"), FieldOption::new("B")],
            },
            FieldDescriptor::Checkbox { label: "Subscribe".into() },
            FieldDescriptor::Select {
                label: "Country".into(),
                options: vec![FieldOption::new("A"), FieldOption::new("B")],
            },
            FieldDescriptor::Textarea { label: "Message".into(), placeholder: Some("Say hi".into()) },
        ])
    }

    #[test]
    fn test_one_wrapper_per_field_in_order_plus_submit() {
        let spec = every_kind();
        let root = render_form(&spec, &FormState::new());

        let expected: Vec<String> = (0..spec.len()).map(|i| i.to_string()).collect();
        assert_eq!(field_indexes(&root), expected);
        assert_eq!(submit_count(&root), 1);
    }

    #[test]
    fn test_empty_form_renders_heading_and_submit_only() {
        let spec = FormSpec::default()
            .with_title("Contact Form")
            .with_description("Please fill out the form below");
        let root = render_form(&spec, &FormState::new());

        assert!(field_indexes(&root).is_empty());
        assert_eq!(submit_count(&root), 1);
        let heading = root.find_all(|el| el.tag == "h2");
        assert_eq!(heading.len(), 1);
        assert_eq!(heading[0].text_content(), "Contact Form");
        assert_eq!(root.find_all(|el| el.has_class("form-description")).len(), 1);
    }

    #[test]
    fn test_missing_title_and_description_are_omitted() {
        let root = render_form(&FormSpec::default(), &FormState::new());
        assert!(root.find_all(|el| el.tag == "h2" || el.tag == "p").is_empty());
    }

    #[test]
    fn test_single_line_inputs_use_kind_as_type() {
        let root = render_form(&every_kind(), &FormState::new());
        let types: Vec<&str> = root
            .find_all(|el| el.has_class("form-input"))
            .into_iter()
            .filter_map(|el| el.get_attr("type"))
            .collect();
        assert_eq!(types, vec!["text", "number", "email", "tel"]);
    }

    #[test]
    fn test_unset_radio_has_no_checked_option() {
        let root = render_form(&every_kind(), &FormState::new());
        let radios = root.find_all(|el| el.get_attr("type") == Some("radio"));
        assert_eq!(radios.len(), 2);
        assert!(radios.iter().all(|r| !r.has_attr("checked")));
        assert!(radios.iter().all(|r| r.get_attr("name") == Some("field-4")));
    }

    #[test]
    fn test_radio_checked_follows_state() {
        let mut state = FormState::new();
        state.set(4, "B");
        let root = render_form(&every_kind(), &state);

        let checked: Vec<&str> = root
            .find_all(|el| el.get_attr("type") == Some("radio") && el.has_attr("checked"))
            .into_iter()
            .filter_map(|el| el.get_attr("value"))
            .collect();
        assert_eq!(checked, vec!["B"]);
    }

    #[test]
    fn test_select_starts_with_disabled_placeholder() {
        let root = render_form(&every_kind(), &FormState::new());
        let select = root.find_all(|el| el.tag == "select");
        let options = select[0].find_all(|el| el.tag == "option");

        assert_eq!(options.len(), 3);
        assert_eq!(options[0].text_content(), SELECT_PLACEHOLDER);
        assert!(options[0].has_attr("disabled"));
        assert!(options[0].has_attr("selected"));
        assert!(!options[1].has_attr("selected"));
    }

    #[test]
    fn test_empty_option_list_renders_empty_choice_set() {
        let spec = FormSpec::new(vec![FieldDescriptor::Radio {
            label: "Pick".into(),
            options: vec![],
        }]);
        let root = render_form(&spec, &FormState::new());
        assert!(root.find_all(|el| el.tag == "input").is_empty());
        assert_eq!(root.find_all(|el| el.has_class("radio-group")).len(), 1);
    }

    #[test]
    fn test_checkbox_label_wraps_input() {
        let mut state = FormState::new();
        state.set(5, true);
        let root = render_form(&every_kind(), &state);
        let item = root.find_all(|el| el.has_class("checkbox-item"));

        assert_eq!(item[0].text_content(), "Subscribe");
        let input = item[0].find_all(|el| el.tag == "input");
        assert!(input[0].has_attr("checked"));
    }

    #[test]
    fn test_html_escapes_text_and_attributes() {
        let spec = FormSpec::new(vec![FieldDescriptor::Text {
            label: "<b>Name</b>".into(),
            placeholder: Some("\"quoted\"".into()),
        }]);
        let html = render_form(&spec, &FormState::new()).to_html();

        assert!(html.contains("&lt;b&gt;Name&lt;&#x2F;b&gt;"));
        assert!(html.contains("placeholder=\"&quot;quoted&quot;\""));
        assert!(!html.contains("</input>"));
    }

    #[test]
    fn test_textarea_renders_current_text() {
        let mut state = FormState::new();
        state.set(7, "hello");
        let root = render_form(&every_kind(), &state);
        let textarea = root.find_all(|el| el.tag == "textarea");
        assert_eq!(textarea[0].text_content(), "hello");
        assert_eq!(textarea[0].get_attr("placeholder"), Some("Say hi"));
    }
}
