//! Layout component wrapping the page body with common chrome.

use dioxus::prelude::*;

use super::nav::Nav;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page content
    pub children: Element,
}

/// Page chrome: header navigation, main content, footer.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("SITE_VERSION");

    rsx! {
        Nav {}
        main { {props.children} }
        footer { class: "site-footer",
            span { class: "brand", "EUQSAROSA" }
            p { "©2025 Euqsarosa" }
            small { "v{version}" }
        }
    }
}
