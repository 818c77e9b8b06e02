//! # blockform-core
//!
//! Page-builder blocks (heading, form, button) and the dynamic form
//! renderer behind the form block.
//!
//! ## Modules
//!
//! - **field**: render-side field descriptors, one variant per field kind
//! - **schema**: editable-property schema handed to editor hosts
//! - **state**: per-instance form values and submit snapshots
//! - **render**: element tree and form markup
//! - **form**: mounted form instances, input events and submission
//! - **blocks**: heading, form and button block props
//!
//! ## Example
//!
//! ```rust
//! use blockform_core::{FieldEntry, FieldKind, FormBlock, FormInstance, SubmitEvent};
//!
//! let block = FormBlock {
//!     fields: vec![FieldEntry::new("Subscribe", FieldKind::Checkbox)],
//!     ..Default::default()
//! };
//!
//! let mut form = FormInstance::mount(block.spec(), |values: &blockform_core::FormSnapshot| {
//!     assert_eq!(values.to_json(), serde_json::json!({ "0": true }));
//! });
//! form.toggle(0);
//! form.submit(&mut SubmitEvent::new());
//! form.unmount();
//! ```

pub mod blocks;
pub mod field;
pub mod form;
pub mod render;
pub mod schema;
pub mod state;

pub use blocks::{Block, Button, ButtonBlock, FormBlock, HeadingBlock};
pub use field::{FieldDescriptor, FieldIndex, FieldKind, FieldOption, FormSpec};
pub use form::{FormInstance, InputEvent, SubmitEvent, SubmitHandler, TracingSubmitHandler};
pub use render::Element;
pub use schema::{page_config, FieldEntry, PageConfig};
pub use state::{FieldValue, FormSnapshot, FormState};
