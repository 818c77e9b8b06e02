//! Page shown at `/` when no server page is selected

use blockform_core::blocks::{ButtonBlock, FormBlock, HeadingBlock};
use blockform_core::{Block, FieldEntry, FieldKind};

pub fn demo_page() -> Vec<Block> {
    vec![
        Block::HeadingBlock(HeadingBlock {
            title: "Get in touch".to_string(),
        }),
        Block::Form(FormBlock {
            fields: vec![
                FieldEntry::new("Name", FieldKind::Text).with_placeholder("Jane Doe"),
                FieldEntry::new("Email", FieldKind::Email).with_placeholder("jane@example.com"),
                FieldEntry::new("Phone", FieldKind::Tel),
                FieldEntry::new("Team size", FieldKind::Number),
                FieldEntry::new("Plan", FieldKind::Radio).with_options(["Free", "Pro", "Enterprise"]),
                FieldEntry::new("Topic", FieldKind::Select).with_options(["Sales", "Support"]),
                FieldEntry::new("Message", FieldKind::Textarea)
                    .with_placeholder("How can we help?"),
                FieldEntry::new("Subscribe to updates", FieldKind::Checkbox),
            ],
            ..Default::default()
        }),
        Block::Button(ButtonBlock::default()),
    ]
}
