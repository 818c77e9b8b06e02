use std::collections::HashMap;
use thiserror::Error;

use crate::config::{PageDocument, ServerSettings, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Duplicate entry: {0}")]
    Duplicate(String),
}

/// Checks host-side settings. Block props are not validated: every prop is
/// free text or a closed choice the editor already enforces.
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_pages(&settings.pages) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_pages(pages: &[PageDocument]) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut seen_names = HashMap::new();

        for (idx, page) in pages.iter().enumerate() {
            if page.name.is_empty() {
                errors.push(ValidationError::MissingField(format!("pages[{}].name", idx)));
                continue;
            }

            if page.name.contains('/') {
                errors.push(ValidationError::InvalidValue {
                    field: format!("pages[{}].name", idx),
                    reason: "Page names are used as URL segments and cannot contain '/'"
                        .to_string(),
                });
            }

            if let Some(prev_idx) = seen_names.insert(&page.name, idx) {
                errors.push(ValidationError::Duplicate(format!(
                    "Page name '{}' appears at indices {} and {}",
                    page.name, prev_idx, idx
                )));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(pages: Vec<PageDocument>) -> Settings {
        Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            pages,
        }
    }

    fn page(name: &str) -> PageDocument {
        PageDocument {
            name: name.to_string(),
            title: None,
            content: vec![],
        }
    }

    #[test]
    fn test_valid_settings() {
        assert!(ConfigValidator::validate(&settings(vec![page("home"), page("contact")])).is_ok());
    }

    #[test]
    fn test_invalid_server() {
        let mut s = settings(vec![]);
        s.server.host = String::new();
        s.server.port = 0;

        let errors = ConfigValidator::validate(&s).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ValidationError::MissingField(_)));
        assert!(matches!(errors[1], ValidationError::InvalidValue { .. }));
    }

    #[test]
    fn test_duplicate_and_empty_page_names() {
        let errors =
            ConfigValidator::validate(&settings(vec![page("home"), page(""), page("home")]))
                .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].to_string(), "Missing required field: pages[1].name");
        assert_eq!(
            errors[1].to_string(),
            "Duplicate entry: Page name 'home' appears at indices 0 and 2"
        );
    }

    #[test]
    fn test_page_name_with_slash() {
        let errors = ConfigValidator::validate(&settings(vec![page("a/b")])).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidValue { .. }));
    }
}
