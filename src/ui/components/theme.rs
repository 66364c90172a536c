//! Theme toggle component and the client-side sync scripts.
//!
//! The toggle's glyph is drawn by the stylesheet from the root `data-theme`
//! attribute, so the server markup is identical for both themes and the
//! first paint never disagrees with the value the interceptor resolved.

use dioxus::prelude::*;

use crate::theme;

/// Theme toggle button.
/// Rendered with a raw onclick attribute since the sync script is already on
/// the page and Dioxus SSR does not support string event handlers directly.
#[component]
pub fn ThemeToggle() -> Element {
    rsx! {
        div {
            class: "theme-toggle",
            dangerous_inner_html: r#"<button id="theme-toggle" onclick="toggleTheme()" aria-label="Toggle light and dark theme"><span class="theme-toggle-icon" aria-hidden="true"></span></button>"#
        }
    }
}

/// Head script, runs before first paint: seed in-page state from the
/// server-baked root attribute and refresh the localStorage mirror to match.
/// The durable cookie decided the attribute, so on a full navigation the
/// cookie wins over a stale mirror; the mirror only carries state between
/// toggles within a loaded page.
pub fn bootstrap_script() -> String {
    format!(
        r#"(function () {{
    var value = document.documentElement.getAttribute('{attr}') === 'dark' ? 'dark' : 'light';
    try {{ localStorage.setItem('{key}', value); }} catch (e) {{ /* storage blocked; page state still works */ }}
}})();"#,
        attr = theme::ROOT_ATTRIBUTE,
        key = theme::COOKIE_NAME,
    )
}

/// Body script: `toggleTheme()` flips the current value and synchronously
/// writes the root attribute, the durable cookie, and the mirror. Storage
/// failures leave the in-page state working; the new value then simply does
/// not survive a reload.
pub fn sync_script() -> String {
    format!(
        r#"function toggleTheme() {{
    var root = document.documentElement;
    var next = root.getAttribute('{attr}') === 'dark' ? 'light' : 'dark';
    root.setAttribute('{attr}', next);
    try {{
        document.cookie = '{cookie}=' + next + '; {cookie_attrs}';
        localStorage.setItem('{cookie}', next);
    }} catch (e) {{ /* storage blocked; attribute already updated */ }}
}}"#,
        attr = theme::ROOT_ATTRIBUTE,
        cookie = theme::COOKIE_NAME,
        cookie_attrs = theme::cookie_attributes(),
    )
}
