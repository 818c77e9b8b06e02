//! # Blockform
//!
//! Host-side tooling for the blockform page-builder blocks: loads pages
//! handed over by an editor, renders them to HTML, exports the block schema
//! and serves live previews.
//!
//! The blocks themselves (field schema, form renderer, form state) live in
//! `blockform-core`; the browser rendering lives in `blockform-ui`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use blockform::config::Settings;
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = Settings::new()?;
//!     println!("{}", blockform::adapters::page_renderer::render_named(&settings, "home")?);
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;

use crate::adapters::api_handler::{self, ApiState};
use crate::adapters::health_handler::HealthHandler;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Creates the Axum application router with all endpoints configured.
///
/// # Arguments
///
/// * `settings` - Shared settings, swapped in place on reload
///
/// # Returns
///
/// Configured Axum Router
pub fn create_app(settings: Arc<RwLock<config::Settings>>) -> Router {
    let health_handler = Arc::new(HealthHandler::new(settings.clone()));

    let health_router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/ready", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.ready().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }));

    let api_state = ApiState { settings };

    let api_router = Router::new()
        .route("/schema", get(api_handler::get_schema))
        .route("/pages", get(api_handler::list_pages))
        .route("/pages/:name", get(api_handler::get_page))
        .with_state(api_state.clone());

    let preview_router = Router::new()
        .route("/pages/:name", get(api_handler::preview_page))
        .with_state(api_state);

    health_router
        .nest("/api", api_router)
        .merge(preview_router)
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
}
