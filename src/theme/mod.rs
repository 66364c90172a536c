//! Theme preference resolution shared by the request layer and the page.
//!
//! The durable store is a `theme` cookie scoped to the whole site. The page
//! mirrors the value into localStorage under the same key and keeps the root
//! `data-theme` attribute in sync. Both sides speak the vocabulary defined
//! here, so the cookie the interceptor writes and the cookie the in-page
//! toggle writes are byte-identical in shape.

use std::fmt;

pub mod interceptor;

/// Durable cookie name; also the localStorage mirror key.
pub const COOKIE_NAME: &str = "theme";

/// Root element attribute the stylesheet keys off.
pub const ROOT_ATTRIBUTE: &str = "data-theme";

/// Client hint header carrying the OS/browser color-scheme preference.
pub const HINT_HEADER: &str = "sec-ch-prefers-color-scheme";

/// Cookie lifetime: one year.
pub const COOKIE_MAX_AGE_SECS: u64 = 31_536_000;

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Strict parse: anything but the two literal values is rejected, so a
    /// malformed stored value falls through to hint-then-default resolution.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other theme.
    pub fn flipped(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the theme to render for a request.
///
/// A valid stored value wins unconditionally; otherwise the client hint
/// decides; otherwise light. Never fails.
pub fn resolve(stored: Option<&str>, hint_is_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(theme) => theme,
        None if hint_is_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Cookie attributes shared by every theme write: site-wide scope, one-year
/// lifetime.
pub fn cookie_attributes() -> String {
    format!("Path=/; Max-Age={COOKIE_MAX_AGE_SECS}; SameSite=Lax")
}

/// Full `Set-Cookie` payload for a theme write.
pub fn set_cookie_value(theme: Theme) -> String {
    format!("{COOKIE_NAME}={}; {}", theme.as_str(), cookie_attributes())
}

/// Scan a `Cookie` request header for the raw theme value.
pub fn cookie_value(header: &str) -> Option<&str> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == COOKIE_NAME).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_defaults_to_light_without_signals() {
        assert_eq!(resolve(None, false), Theme::Light);
    }

    #[test]
    fn resolve_follows_hint_when_nothing_stored() {
        assert_eq!(resolve(None, true), Theme::Dark);
    }

    #[test]
    fn stored_value_wins_over_hint() {
        assert_eq!(resolve(Some("dark"), false), Theme::Dark);
        assert_eq!(resolve(Some("dark"), true), Theme::Dark);
        assert_eq!(resolve(Some("light"), false), Theme::Light);
        assert_eq!(resolve(Some("light"), true), Theme::Light);
    }

    #[test]
    fn malformed_stored_value_treated_as_missing() {
        assert_eq!(resolve(Some("blue"), false), Theme::Light);
        assert_eq!(resolve(Some("blue"), true), Theme::Dark);
        assert_eq!(resolve(Some(""), true), Theme::Dark);
        assert_eq!(resolve(Some("DARK"), false), Theme::Light);
    }

    #[test]
    fn flip_is_an_involution() {
        assert_eq!(Theme::Light.flipped(), Theme::Dark);
        assert_eq!(Theme::Dark.flipped(), Theme::Light);
        assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
        assert_eq!(Theme::Dark.flipped().flipped(), Theme::Dark);
    }

    #[test]
    fn parse_accepts_only_the_two_literals() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("oled"), None);
        assert_eq!(Theme::parse(" dark"), None);
    }

    #[test]
    fn set_cookie_value_is_stable_across_calls() {
        // Writing the same value twice must produce the identical stored
        // representation.
        assert_eq!(set_cookie_value(Theme::Dark), set_cookie_value(Theme::Dark));
        assert_eq!(
            set_cookie_value(Theme::Dark),
            "theme=dark; Path=/; Max-Age=31536000; SameSite=Lax"
        );
        assert_eq!(
            set_cookie_value(Theme::Light),
            "theme=light; Path=/; Max-Age=31536000; SameSite=Lax"
        );
    }

    #[test]
    fn cookie_value_scans_multi_cookie_headers() {
        assert_eq!(cookie_value("theme=dark"), Some("dark"));
        assert_eq!(cookie_value("a=1; theme=light; b=2"), Some("light"));
        assert_eq!(cookie_value("a=1;  theme=dark"), Some("dark"));
        assert_eq!(cookie_value("a=1; b=2"), None);
        assert_eq!(cookie_value("themes=dark"), None);
        // Malformed values are surfaced as-is; resolution rejects them.
        assert_eq!(cookie_value("theme=purple"), Some("purple"));
    }
}
