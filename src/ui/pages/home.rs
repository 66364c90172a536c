//! The whole site on one page: hero, release gallery, biography, social
//! links.

use dioxus::prelude::*;

use crate::catalog;
use crate::ui::components::{Layout, ReleaseCard};

/// Home page component.
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Layout {
            Hero {}
            MusicSection {}
            AboutSection {}
            ContactSection {}
        }
    }
}

/// Hero: background video, artist name, call-to-action links.
#[component]
fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            video {
                class: "hero-video",
                src: "/assets/herovid.mp4",
                autoplay: true,
                r#loop: true,
                muted: true,
                "playsinline": "true",
            }
            div { class: "hero-overlay" }
            div { class: "hero-content",
                h1 { class: "hero-title", "EUQSAROSA" }
                p { class: "hero-tagline", "Drum & Bass Producer" }
                div { class: "hero-actions",
                    a { class: "button primary", href: "#music", "Listen Now" }
                    a { class: "button outline", href: "#contact", "Get in Touch" }
                }
            }
        }
    }
}

/// Releases Spotlight: one card per catalog entry.
#[component]
fn MusicSection() -> Element {
    rsx! {
        section { id: "music", class: "music-section",
            h2 { "Releases Spotlight" }
            div { class: "release-grid",
                for release in catalog::RELEASES {
                    ReleaseCard { key: "{release.id}", release: *release }
                }
            }
        }
    }
}

#[component]
fn AboutSection() -> Element {
    rsx! {
        section { id: "about", class: "about-section",
            h2 { "About Euqsarosa" }
            div { class: "about-card",
                img {
                    class: "about-photo",
                    src: "/assets/profile.jpg",
                    alt: "Photograph of Euqsarosa",
                    loading: "lazy",
                }
                div { class: "about-text",
                    p {
                        "Shahrose Atique is a Drum & Bass producer based in Dubai, UAE."
                    }
                    p {
                        "What initially started out as a curious hobby back in his university days eventually led up to his obsession with producing music as a creative outlet, all the while being deployed out in the oilfields for months at a time."
                    }
                    p {
                        "His love for D&B as well as inspiration drew from artists like Calibre, Mohican Sun, LSB, Tokyo Prose, Etherwood, Technimatic, and many more."
                    }
                }
            }
        }
    }
}

/// Connect: social profiles and the booking contact.
#[component]
fn ContactSection() -> Element {
    rsx! {
        section { id: "contact", class: "contact-section",
            h2 { "Connect" }
            p { class: "contact-lead", "Follow and stay updated with the latest releases" }
            div { class: "social-grid",
                for social in catalog::SOCIAL_LINKS {
                    a {
                        key: "{social.service.name()}",
                        class: "social-card",
                        href: "{social.url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{social.service.name()}"
                    }
                }
            }
            div { class: "contact-card",
                h3 { "Get in Touch" }
                p {
                    "For bookings, collaborations, or just to say hello, reach out through any of the social channels above or send a direct message."
                }
                a {
                    class: "button primary",
                    href: "mailto:{catalog::CONTACT_EMAIL}",
                    "Email"
                }
            }
        }
    }
}
