//! Server-rendered pages and embedded asset handlers.
//!
//! Pages are Dioxus components rendered to strings with `dioxus::ssr` and
//! wrapped in a hand-built HTML document. The document bakes the
//! interceptor-resolved theme into the root element, so the first paint
//! matches the value the request layer already chose.

pub mod assets;
pub mod components;
pub mod pages;

use axum::{
    http::header,
    response::{Html, IntoResponse},
    Extension,
};
use dioxus::prelude::*;

use crate::theme::{self, interceptor::ResolvedTheme, Theme};
use pages::HomePage;

/// HTML document wrapper around a rendered page body.
fn html_doc(title: &str, description: &str, theme: Theme, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en" {attr}="{theme}" class="scroll-smooth">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <meta name="description" content="{description}">
    <link rel="icon" type="image/svg+xml" href="/favicon.svg">
    <link rel="stylesheet" href="/site.css">
    <script>{bootstrap}</script>
</head>
<body>
{body}
<script>{sync}</script>
</body>
</html>"#,
        attr = theme::ROOT_ATTRIBUTE,
        theme = theme,
        bootstrap = components::theme::bootstrap_script(),
        sync = components::theme::sync_script(),
    )
}

/// GET / - the whole site on one page.
pub async fn home_page(resolved: Option<Extension<ResolvedTheme>>) -> impl IntoResponse {
    let theme = resolved
        .map(|Extension(ResolvedTheme(theme))| theme)
        .unwrap_or_default();
    let body = dioxus::ssr::render_element(rsx! { HomePage {} });
    Html(html_doc(
        "Euqsarosa - D&B Producer",
        "Official music production site for Euqsarosa. Stream and discover the latest tracks, EPs, and albums.",
        theme,
        &body,
    ))
}

/// GET /site.css - embedded stylesheet.
pub async fn site_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        assets::SITE_CSS,
    )
}

/// GET /favicon.svg - embedded favicon.
pub async fn favicon() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], assets::FAVICON_SVG)
}
