use blockform_core::Block;
use serde::Deserialize;

/// Envelope every `/api` response comes wrapped in
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Row of the page listing
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageSummary {
    pub name: String,
    pub title: String,
    pub blocks: usize,
}

/// Full page document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Vec<Block>,
}

impl Page {
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_response_decodes_blocks() {
        let body = r#"{
            "success": true,
            "data": {
                "name": "contact",
                "content": [
                    { "type": "HeadingBlock", "props": { "title": "Hi" } },
                    { "type": "Button", "props": {} }
                ]
            },
            "error": null
        }"#;

        let response: ApiResponse<Page> = serde_json::from_str(body).unwrap();
        let page = response.data.unwrap();
        assert_eq!(page.display_title(), "contact");
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.content[1].type_name(), "Button");
    }

    #[test]
    fn test_empty_title_falls_back_to_name() {
        let page: Page =
            serde_json::from_str(r#"{ "name": "faq", "title": "", "content": [] }"#).unwrap();
        assert_eq!(page.display_title(), "faq");

        let page: Page =
            serde_json::from_str(r#"{ "name": "faq", "title": "Questions" }"#).unwrap();
        assert_eq!(page.display_title(), "Questions");
    }
}
