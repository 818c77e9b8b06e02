//! Form instances
//!
//! A [`FormInstance`] is one mounted form: the spec it renders, the values
//! entered so far and the handler that receives them on submit. Mounting
//! starts from an empty state, every input event replaces one entry, and
//! unmounting drops the values for good.

use tracing::{debug, info};

use crate::field::{FieldIndex, FormSpec};
use crate::render::{render_form, Element};
pub use crate::state::InputEvent;
use crate::state::{FormSnapshot, FormState};

// ============================================================================
// Events
// ============================================================================

/// Submit action raised by the form's submit control
#[derive(Debug, Default)]
pub struct SubmitEvent {
    prevent_default_calls: u32,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the host's default submit behaviour (page navigation)
    pub fn prevent_default(&mut self) {
        self.prevent_default_calls += 1;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.prevent_default_calls > 0
    }

    /// Times `prevent_default` was called on this event
    pub fn prevent_default_calls(&self) -> u32 {
        self.prevent_default_calls
    }
}

// ============================================================================
// Submit Handlers
// ============================================================================

/// Receives the submitted values; installed by the host at mount time
pub trait SubmitHandler {
    fn on_submit(&mut self, snapshot: &FormSnapshot);
}

impl<F> SubmitHandler for F
where
    F: FnMut(&FormSnapshot),
{
    fn on_submit(&mut self, snapshot: &FormSnapshot) {
        (self)(snapshot)
    }
}

/// Logs each submission
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSubmitHandler;

impl SubmitHandler for TracingSubmitHandler {
    fn on_submit(&mut self, snapshot: &FormSnapshot) {
        info!(target: "blockform::submit", values = %snapshot.to_json(), "Form values");
    }
}

// ============================================================================
// Form Instance
// ============================================================================

pub struct FormInstance {
    spec: FormSpec,
    state: FormState,
    handler: Box<dyn SubmitHandler>,
}

impl FormInstance {
    /// Mount a form with empty state
    pub fn mount(spec: FormSpec, handler: impl SubmitHandler + 'static) -> Self {
        debug!(fields = spec.len(), "Mounting form");
        Self {
            spec,
            state: FormState::new(),
            handler: Box::new(handler),
        }
    }

    /// Mount a form that logs its submissions
    pub fn mount_logged(spec: FormSpec) -> Self {
        Self::mount(spec, TracingSubmitHandler)
    }

    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn render(&self) -> Element {
        render_form(&self.spec, &self.state)
    }

    /// Apply one input change. Only the entry at the event's index changes.
    pub fn dispatch(&mut self, event: InputEvent) {
        self.state.apply(event);
    }

    /// Store the chosen option of a radio group or select
    pub fn select(&mut self, index: FieldIndex, value: impl Into<String>) {
        self.dispatch(InputEvent::Text {
            index,
            value: value.into(),
        });
    }

    /// Flip a checkbox; an unset checkbox reads as unchecked
    pub fn toggle(&mut self, index: FieldIndex) {
        let checked = !self.state.checked(index);
        self.dispatch(InputEvent::Checked { index, checked });
    }

    /// Suppress default navigation and hand the current values to the
    /// handler. Values are not validated and the state is left as is.
    pub fn submit(&mut self, event: &mut SubmitEvent) {
        event.prevent_default();
        let snapshot = self.state.snapshot(&self.spec);
        self.handler.on_submit(&snapshot);
    }

    /// Tear the form down, discarding its values
    pub fn unmount(self) {
        debug!(fields = self.spec.len(), entries = self.state.len(), "Unmounting form");
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldDescriptor, FieldOption};
    use crate::state::FieldValue;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Submissions = Rc<RefCell<Vec<FormSnapshot>>>;

    fn recording() -> (Submissions, impl SubmitHandler + 'static) {
        let submissions: Submissions = Rc::new(RefCell::new(Vec::new()));
        let sink = submissions.clone();
        (submissions, move |s: &FormSnapshot| sink.borrow_mut().push(s.clone()))
    }

    fn choice_spec() -> FormSpec {
        let ab = vec![FieldOption::new("A"), FieldOption::new("B")];
        FormSpec::new(vec![
            FieldDescriptor::Radio { label: "Radio".into(), options: ab.clone() },
            FieldDescriptor::Select { label: "Select".into(), options: ab },
            FieldDescriptor::Text { label: "Name".into(), placeholder: None },
            FieldDescriptor::Checkbox { label: "Agree".into() },
        ])
    }

    #[test]
    fn test_submit_event_counts_prevent_default() {
        let mut event = SubmitEvent::new();
        assert!(!event.is_default_prevented());
        event.prevent_default();
        event.prevent_default();
        assert_eq!(event.prevent_default_calls(), 2);
    }

    #[test]
    fn test_mount_starts_empty() {
        let form = FormInstance::mount_logged(choice_spec());
        assert!(form.state().is_empty());
    }

    #[test]
    fn test_selecting_option_changes_only_that_field() {
        let mut form = FormInstance::mount_logged(choice_spec());
        form.dispatch(InputEvent::Text { index: 2, value: "Ada".into() });
        form.select(1, "A");

        let before = form.state().clone();
        form.select(0, "B");

        assert_eq!(form.state().get(0), Some(&FieldValue::Text("B".into())));
        for index in 1..4 {
            assert_eq!(form.state().get(index), before.get(index));
        }

        form.select(1, "B");
        assert_eq!(form.state().text(1), "B");
        assert_eq!(form.state().text(0), "B");
        assert_eq!(form.state().text(2), "Ada");
    }

    #[test]
    fn test_checkbox_toggle_cycle() {
        let mut form = FormInstance::mount_logged(choice_spec());
        form.toggle(3);
        assert_eq!(form.state().get(3), Some(&FieldValue::Checked(true)));
        form.toggle(3);
        assert_eq!(form.state().get(3), Some(&FieldValue::Checked(false)));
    }

    #[test]
    fn test_submit_without_interaction_yields_defaults() {
        let spec = FormSpec::new(vec![
            FieldDescriptor::Text { label: String::new(), placeholder: None },
            FieldDescriptor::Checkbox { label: String::new() },
        ]);
        let (submissions, handler) = recording();
        let mut form = FormInstance::mount(spec, handler);

        let mut event = SubmitEvent::new();
        form.submit(&mut event);

        assert!(event.is_default_prevented());
        assert_eq!(event.prevent_default_calls(), 1);
        let submissions = submissions.borrow();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].to_json(), json!({ "0": "", "1": false }));
    }

    #[test]
    fn test_submit_once_per_action_and_state_untouched() {
        let (submissions, handler) = recording();
        let mut form = FormInstance::mount(choice_spec(), handler);
        form.select(0, "A");
        let before = form.state().clone();

        let mut first = SubmitEvent::new();
        form.submit(&mut first);
        assert_eq!(submissions.borrow().len(), 1);
        assert_eq!(first.prevent_default_calls(), 1);
        assert_eq!(form.state(), &before);

        let mut second = SubmitEvent::new();
        form.submit(&mut second);
        assert_eq!(submissions.borrow().len(), 2);
        assert_eq!(second.prevent_default_calls(), 1);
        assert_eq!(form.state(), &before);

        assert_eq!(
            submissions.borrow()[1].to_json(),
            json!({ "0": "A", "1": "", "2": "", "3": false })
        );
    }

    #[test]
    fn test_render_reflects_state() {
        let mut form = FormInstance::mount_logged(choice_spec());
        form.select(1, "B");
        let root = form.render();

        let selected: Vec<String> = root
            .find_all(|el| el.tag == "option" && el.has_attr("selected"))
            .into_iter()
            .map(|el| el.text_content())
            .collect();
        assert_eq!(selected, vec!["B".to_string()]);
    }

    #[test]
    fn test_unmount_discards_state() {
        let (submissions, handler) = recording();
        let mut form = FormInstance::mount(choice_spec(), handler);
        form.select(0, "A");
        form.unmount();

        let (_, handler) = recording();
        let remounted = FormInstance::mount(choice_spec(), handler);
        assert!(remounted.state().is_empty());
        assert!(submissions.borrow().is_empty());
    }
}
