//! REST handlers for editor hosts and page previews

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use blockform_core::{page_config, PageConfig};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::adapters::page_renderer::{self, PageError};
use crate::config::{PageDocument, Settings};

#[derive(Clone)]
pub struct ApiState {
    pub settings: Arc<RwLock<Settings>>,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub name: String,
    pub title: String,
    pub blocks: usize,
}

impl From<&PageDocument> for PageSummary {
    fn from(page: &PageDocument) -> Self {
        Self {
            name: page.name.clone(),
            title: page.display_title().to_string(),
            blocks: page.content.len(),
        }
    }
}

/// Block schema for editor hosts
pub async fn get_schema() -> Json<ApiResponse<PageConfig>> {
    Json(ApiResponse::success(page_config()))
}

pub async fn list_pages(State(state): State<ApiState>) -> Json<ApiResponse<Vec<PageSummary>>> {
    let settings = state.settings.read().await;
    let pages = settings.pages.iter().map(PageSummary::from).collect();
    Json(ApiResponse::success(pages))
}

pub async fn get_page(
    State(state): State<ApiState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let settings = state.settings.read().await;

    if let Some(page) = settings.page(&name) {
        (StatusCode::OK, Json(ApiResponse::success(page.clone())))
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<PageDocument>::error(PageError::NotFound(name).to_string())),
        )
    }
}

/// Server-rendered HTML preview of a page
pub async fn preview_page(
    State(state): State<ApiState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    let settings = state.settings.read().await;

    match page_renderer::render_named(&settings, &name) {
        Ok(html) => (StatusCode::OK, Html(html)),
        Err(e) => {
            if !matches!(e, PageError::NotFound(_)) {
                tracing::error!("Failed to render page '{}': {}", name, e);
            }
            (e.status_code(), Html(format!("<h1>{}</h1>", tera::escape_html(&e.to_string()))))
        }
    }
}
