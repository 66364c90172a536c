//! Euqsarosa promotional site.
//!
//! Single-binary server for a musician's single-page marketing site:
//! - Server-rendered Dioxus components over axum
//! - Theme preference service: a durable cookie set by a request
//!   interceptor, mirrored client-side, baked into the first paint
//! - Static release catalog driving the spotlight gallery

pub mod api;
pub mod catalog;
pub mod config;
pub mod theme;
pub mod ui;

use axum::{middleware, routing::get, Router};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

/// Build the site router. Page routes run behind the theme interceptor;
/// static assets and the API pass through it untouched.
pub fn app(config: &config::Config) -> Router {
    Router::new()
        // Pages
        .route("/", get(ui::home_page))
        // Embedded assets
        .route("/site.css", get(ui::site_css))
        .route("/favicon.svg", get(ui::favicon))
        // Health check
        .route("/api/status", get(api::status_handler))
        // On-disk media (cover art, hero video, profile photo)
        .nest_service("/assets", ServeDir::new(&config.public_dir))
        // Middleware
        .layer(middleware::from_fn(theme::interceptor::ensure_theme_cookie))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
