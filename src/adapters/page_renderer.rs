//! Server-side page rendering
//!
//! Renders every block of a page in its initial state and wraps the result
//! in an HTML document. Forms render as freshly mounted instances: the
//! preview holds no values between requests.

use axum::http::StatusCode;
use tera::{Context, Tera};
use thiserror::Error;

use crate::config::{PageDocument, Settings};

const DOCUMENT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
</head>
<body>
{% for block in blocks %}{{ block | safe }}
{% endfor %}</body>
</html>
"#;

/// Errors that can occur while rendering a page
#[derive(Debug, Error)]
pub enum PageError {
    /// No page with that name is configured
    #[error("Page not found: {0}")]
    NotFound(String),

    /// Document template failed to render
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

impl PageError {
    /// Convert to HTTP status code for responses
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Render one page into a complete HTML document
pub fn render_document(page: &PageDocument) -> Result<String, PageError> {
    let blocks: Vec<String> = page
        .content
        .iter()
        .map(|block| block.render().to_html())
        .collect();

    let mut context = Context::new();
    context.insert("title", page.display_title());
    context.insert("blocks", &blocks);

    tracing::debug!("Rendering page '{}' with {} blocks", page.name, blocks.len());
    Ok(Tera::one_off(DOCUMENT_TEMPLATE, &context, true)?)
}

/// Look a page up by name and render it
pub fn render_named(settings: &Settings, name: &str) -> Result<String, PageError> {
    let page = settings
        .page(name)
        .ok_or_else(|| PageError::NotFound(name.to_string()))?;
    render_document(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerSettings;
    use blockform_core::{Block, ButtonBlock, FieldEntry, FieldKind, FormBlock, HeadingBlock};

    fn contact_page() -> PageDocument {
        PageDocument {
            name: "contact".to_string(),
            title: Some("Contact <us>".to_string()),
            content: vec![
                Block::HeadingBlock(HeadingBlock::default()),
                Block::Form(FormBlock {
                    fields: vec![
                        FieldEntry::new("Email", FieldKind::Email),
                        FieldEntry::new("Topic", FieldKind::Select).with_options(["Sales", "Support"]),
                    ],
                    ..Default::default()
                }),
                Block::Button(ButtonBlock::default()),
            ],
        }
    }

    #[test]
    fn test_document_contains_blocks_in_order() {
        let html = render_document(&contact_page()).unwrap();

        let heading = html.find("<h1>Heading</h1>").unwrap();
        let form = html.find("<form>").unwrap();
        let button = html.find(">Click Me</button>").unwrap();
        assert!(heading < form && form < button);
        assert!(html.contains("<title>Contact &lt;us&gt;</title>"));
        assert!(html.contains(r#"<option value="Support">Support</option>"#));
    }

    #[test]
    fn test_unknown_page() {
        let settings = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            pages: vec![contact_page()],
        };
        assert!(render_named(&settings, "contact").is_ok());

        let err = render_named(&settings, "missing").unwrap_err();
        assert!(matches!(err, PageError::NotFound(_)));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
