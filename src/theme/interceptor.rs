//! Request interceptor guaranteeing a durable theme cookie.
//!
//! Runs once per page request, before any content is produced. If the request
//! already carries a valid theme cookie it passes through untouched; if not,
//! a default derived from the client's color-scheme hint is attached to the
//! response as a site-wide cookie. Static assets and API routes are skipped
//! entirely.

use axum::{
    extract::Request,
    http::{header, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

use super::{resolve, set_cookie_value, Theme, HINT_HEADER};

/// Resolved theme for the current request, stashed in request extensions so
/// the render step reuses the exact value the interceptor chose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedTheme(pub Theme);

/// Paths the interceptor leaves untouched: static assets, embedded assets,
/// and API routes.
fn is_excluded(path: &str) -> bool {
    path.starts_with("/assets/")
        || path.starts_with("/api/")
        || path == "/site.css"
        || path == "/favicon.svg"
}

/// Axum middleware: ensure every page request has a durable theme cookie.
pub async fn ensure_theme_cookie(mut request: Request, next: Next) -> Response {
    if is_excluded(request.uri().path()) {
        return next.run(request).await;
    }

    let cookie_header = request
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let stored = cookie_header.as_deref().and_then(super::cookie_value);
    let hint_is_dark = request
        .headers()
        .get(HINT_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().eq_ignore_ascii_case("dark"))
        .unwrap_or(false);

    let theme = resolve(stored, hint_is_dark);
    let needs_cookie = stored.and_then(Theme::parse).is_none();

    request.extensions_mut().insert(ResolvedTheme(theme));
    let mut response = next.run(request).await;

    // Ask the browser to send the color-scheme hint on subsequent requests.
    response.headers_mut().insert(
        HeaderName::from_static("accept-ch"),
        HeaderValue::from_static("Sec-CH-Prefers-Color-Scheme"),
    );

    if needs_cookie {
        tracing::debug!(%theme, "no valid theme cookie on request, setting default");
        if let Ok(value) = HeaderValue::from_str(&set_cookie_value(theme)) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_and_api_paths_are_excluded() {
        assert!(is_excluded("/assets/aurora.jpg"));
        assert!(is_excluded("/assets/herovid.mp4"));
        assert!(is_excluded("/api/status"));
        assert!(is_excluded("/site.css"));
        assert!(is_excluded("/favicon.svg"));
    }

    #[test]
    fn page_paths_are_not_excluded() {
        assert!(!is_excluded("/"));
        assert!(!is_excluded("/anything"));
        // Prefixes must match whole path segments worth of traffic, not the
        // bare directory name.
        assert!(!is_excluded("/assets"));
        assert!(!is_excluded("/apiary"));
    }
}
