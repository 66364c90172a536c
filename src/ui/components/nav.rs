//! Header navigation component.

use dioxus::prelude::*;

use super::theme::ThemeToggle;

/// Fixed site header: brand, section anchors, theme toggle.
#[component]
pub fn Nav() -> Element {
    rsx! {
        header { class: "site-header",
            nav { class: "site-nav", "aria-label": "Main",
                a { class: "brand", href: "#", "EUQSAROSA" }
                ul { class: "nav-links",
                    li {
                        a { href: "#music", "Music" }
                    }
                    li {
                        a { href: "#about", "About" }
                    }
                    li {
                        a { href: "#contact", "Contact" }
                    }
                }
                ThemeToggle {}
            }
        }
    }
}
