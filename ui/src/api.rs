//! Client for the preview server's `/api` routes

use crate::types::{ApiResponse, Page, PageSummary};
use gloo_net::http::Request;

const API_BASE: &str = "/api";

/// List the pages the server has loaded
pub async fn list_pages() -> Result<Vec<PageSummary>, String> {
    let url = format!("{}/pages", API_BASE);
    fetch_json::<Vec<PageSummary>>(&url).await
}

/// Fetch one page document by name
pub async fn get_page(name: &str) -> Result<Page, String> {
    fetch_json::<Page>(&page_url(name)).await
}

fn page_url(name: &str) -> String {
    format!("{}/pages/{}", API_BASE, urlencoding::encode(name))
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let api_response: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if api_response.success {
        api_response.data.ok_or_else(|| "No data in response".to_string())
    } else {
        Err(api_response.error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}
