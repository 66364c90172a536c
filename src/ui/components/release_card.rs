//! Release card with a disclosure panel of streaming links.

use dioxus::prelude::*;

use crate::catalog::Release;

#[derive(Props, Clone, PartialEq)]
pub struct ReleaseCardProps {
    pub release: Release,
}

/// One release in the spotlight gallery. The link panel is a native
/// disclosure element; which links appear, and in what order, comes from the
/// catalog entry.
#[component]
pub fn ReleaseCard(props: ReleaseCardProps) -> Element {
    let release = props.release;

    rsx! {
        article { class: "release-card", id: "release-{release.id}",
            details {
                summary { class: "release-summary",
                    img {
                        class: "release-cover",
                        src: "{release.cover}",
                        alt: "{release.title} cover art",
                        loading: "lazy",
                    }
                    div { class: "release-heading",
                        h3 { "{release.title}" }
                        span { class: "release-kind", "{release.kind.label()}" }
                    }
                }
                if let Some(embed) = release.embed_url {
                    iframe {
                        class: "release-embed",
                        title: "{release.title} player",
                        src: "{embed}",
                        width: "100%",
                        height: "{release.kind.embed_height()}",
                        "loading": "lazy",
                        allow: "autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture",
                    }
                }
                if !release.links.is_empty() {
                    div { class: "release-links",
                        p { class: "release-links-title", "Choose music service" }
                        ul {
                            for link in release.links {
                                li { key: "{release.id}-{link.service.name()}",
                                    a {
                                        class: "service-link",
                                        href: "{link.url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        span { class: "service-name", "{link.service.name()}" }
                                        span { class: "service-action", "{link.label}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
