//! Rendered-page tests: the no-flash invariant and the catalog-driven
//! content.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use euqsarosa_site::{catalog, config::Config, theme};

fn test_app() -> Router {
    euqsarosa_site::app(&Config {
        port: 0,
        public_dir: "public".into(),
    })
}

async fn fetch_home(headers: &[(&str, &str)]) -> (Option<String>, String) {
    let mut builder = Request::builder().uri("/");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder.body(Body::empty()).expect("request");

    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .map(|v| v.to_str().expect("ascii cookie").to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let html = String::from_utf8(bytes.to_vec()).expect("utf-8 page");
    (set_cookie, html)
}

fn root_attribute(html: &str) -> &str {
    if html.contains(r#"data-theme="dark""#) {
        "dark"
    } else if html.contains(r#"data-theme="light""#) {
        "light"
    } else {
        panic!("no data-theme attribute in rendered page");
    }
}

#[tokio::test]
async fn first_paint_matches_the_resolved_theme() {
    // The baked root attribute must equal theme resolution of the same
    // request's cookie/hint inputs, for every signal combination.
    let cases: &[(&[(&str, &str)], Option<&str>, bool)] = &[
        (&[], None, false),
        (&[("sec-ch-prefers-color-scheme", "dark")], None, true),
        (&[("cookie", "theme=dark")], Some("dark"), false),
        (
            &[
                ("cookie", "theme=light"),
                ("sec-ch-prefers-color-scheme", "dark"),
            ],
            Some("light"),
            true,
        ),
        (
            &[
                ("cookie", "theme=blue"),
                ("sec-ch-prefers-color-scheme", "dark"),
            ],
            Some("blue"),
            true,
        ),
    ];

    for (headers, stored, hint_is_dark) in cases {
        let expected = theme::resolve(*stored, *hint_is_dark);
        let (_, html) = fetch_home(headers).await;
        assert_eq!(
            root_attribute(&html),
            expected.as_str(),
            "stored={stored:?} hint_is_dark={hint_is_dark}"
        );
    }
}

#[tokio::test]
async fn default_cookie_and_first_paint_agree() {
    // When the interceptor writes a default, the page it returns must
    // already be painted with that same value.
    let (set_cookie, html) =
        fetch_home(&[("sec-ch-prefers-color-scheme", "dark")]).await;
    let cookie = set_cookie.expect("default cookie set");
    assert!(cookie.starts_with("theme=dark;"), "got: {cookie}");
    assert_eq!(root_attribute(&html), "dark");
}

#[tokio::test]
async fn every_release_appears_on_the_page() {
    let (_, html) = fetch_home(&[]).await;
    for release in catalog::RELEASES {
        assert!(
            html.contains(release.title),
            "missing release: {}",
            release.title
        );
        assert!(
            html.contains(&format!(r#"id="release-{}""#, release.id)),
            "missing card id for {}",
            release.id
        );
    }
}

#[tokio::test]
async fn link_panels_render_every_outbound_url() {
    let (_, html) = fetch_home(&[]).await;
    for release in catalog::RELEASES {
        for link in release.links {
            assert!(
                html.contains(link.url),
                "missing {} link for {}",
                link.service.name(),
                release.id
            );
        }
    }
    for social in catalog::SOCIAL_LINKS {
        assert!(html.contains(social.url), "missing {}", social.url);
    }
}

#[tokio::test]
async fn toggle_wiring_is_on_the_page() {
    let (_, html) = fetch_home(&[]).await;
    assert!(html.contains(r#"id="theme-toggle""#));
    assert!(html.contains("toggleTheme()"));
    // Head bootstrap runs before the stylesheet-driven body paints.
    assert!(html.contains("localStorage.setItem"));
}
