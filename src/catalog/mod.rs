//! Static release catalog and outbound links.
//!
//! This is configuration, not runtime data: the page renders what is listed
//! here. Each release is keyed by a stable id and carries its own ordered
//! streaming-link panel, so rendering never branches on display text.
//! Outbound URLs are opaque strings passed through unchanged; cover art and
//! video paths resolve against the static asset mount.

/// Streaming platforms a release or the artist can link out to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Service {
    Spotify,
    YouTube,
    Bandcamp,
    JunoDownload,
    Beatport,
    SoundCloud,
    Tidal,
    Deezer,
    Qobuz,
    Anghami,
    Instagram,
}

impl Service {
    pub fn name(&self) -> &'static str {
        match self {
            Service::Spotify => "Spotify",
            Service::YouTube => "YouTube",
            Service::Bandcamp => "Bandcamp",
            Service::JunoDownload => "JunoDownload",
            Service::Beatport => "Beatport",
            Service::SoundCloud => "SoundCloud",
            Service::Tidal => "Tidal",
            Service::Deezer => "Deezer",
            Service::Qobuz => "Qobuz",
            Service::Anghami => "Anghami",
            Service::Instagram => "Instagram",
        }
    }
}

/// Outbound link on a release panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceLink {
    pub service: Service,
    /// Action label shown on the link ("Play", "Go To", "Download").
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseKind {
    Album,
    Track,
}

impl ReleaseKind {
    pub fn label(&self) -> &'static str {
        match self {
            ReleaseKind::Album => "Album",
            ReleaseKind::Track => "Track",
        }
    }

    /// Height of the embedded player, when a release has one.
    pub fn embed_height(&self) -> u32 {
        match self {
            ReleaseKind::Album => 152,
            ReleaseKind::Track => 80,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Release {
    /// Stable identifier; also the DOM id of the card.
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ReleaseKind,
    /// Cover art path under the static asset mount.
    pub cover: &'static str,
    /// Embedded player URL, when the release has one.
    pub embed_url: Option<&'static str>,
    /// Ordered streaming links shown in the card's panel.
    pub links: &'static [ServiceLink],
}

const AURORA_LINKS: &[ServiceLink] = &[
    ServiceLink {
        service: Service::Spotify,
        label: "Play",
        url: "https://open.spotify.com/track/aurora",
    },
    ServiceLink {
        service: Service::YouTube,
        label: "Play",
        url: "https://youtube.com/watch?v=aurora",
    },
    ServiceLink {
        service: Service::Bandcamp,
        label: "Go To",
        url: "https://bandcamp.com/aurora",
    },
    ServiceLink {
        service: Service::JunoDownload,
        label: "Download",
        url: "https://junodownload.com/aurora",
    },
    ServiceLink {
        service: Service::Beatport,
        label: "Play",
        url: "https://beatport.com/aurora",
    },
    ServiceLink {
        service: Service::SoundCloud,
        label: "Play",
        url: "https://soundcloud.com/aurora",
    },
    ServiceLink {
        service: Service::Tidal,
        label: "Play",
        url: "https://tidal.com/aurora",
    },
    ServiceLink {
        service: Service::Deezer,
        label: "Play",
        url: "https://deezer.com/aurora",
    },
    ServiceLink {
        service: Service::Qobuz,
        label: "Play",
        url: "https://qobuz.com/aurora",
    },
    ServiceLink {
        service: Service::Anghami,
        label: "Play",
        url: "https://anghami.com/aurora",
    },
];

const IN_YOUR_EYES_LINKS: &[ServiceLink] = &[
    ServiceLink {
        service: Service::Spotify,
        label: "Play",
        url: "https://open.spotify.com/track/0SCoNAciqsTEKWpHiSfYVk?utm_source=generator",
    },
    ServiceLink {
        service: Service::YouTube,
        label: "Play",
        url: "https://youtube.com/watch?v=inyoureyes",
    },
    ServiceLink {
        service: Service::Bandcamp,
        label: "Go To",
        url: "https://bandcamp.com/inyoureyes",
    },
    ServiceLink {
        service: Service::JunoDownload,
        label: "Download",
        url: "https://junodownload.com/inyoureyes",
    },
    ServiceLink {
        service: Service::Beatport,
        label: "Play",
        url: "https://beatport.com/inyoureyes",
    },
    ServiceLink {
        service: Service::SoundCloud,
        label: "Play",
        url: "https://soundcloud.com/inyoureyes",
    },
    ServiceLink {
        service: Service::Tidal,
        label: "Play",
        url: "https://tidal.com/inyoureyes",
    },
    ServiceLink {
        service: Service::Deezer,
        label: "Play",
        url: "https://deezer.com/inyoureyes",
    },
    ServiceLink {
        service: Service::Qobuz,
        label: "Play",
        url: "https://qobuz.com/inyoureyes",
    },
    ServiceLink {
        service: Service::Anghami,
        label: "Play",
        url: "https://anghami.com/inyoureyes",
    },
];

/// Releases shown in the spotlight gallery, newest first.
pub const RELEASES: &[Release] = &[
    Release {
        id: "never-let-go-used-to",
        title: "Never Let Go / Used To",
        kind: ReleaseKind::Album,
        cover: "/assets/neverletgousedto.jpg",
        embed_url: Some(
            "https://open.spotify.com/embed/album/1bAqTRWU3QALt1F8doULon?utm_source=generator",
        ),
        links: &[],
    },
    Release {
        id: "aurora",
        title: "Aurora",
        kind: ReleaseKind::Track,
        cover: "/assets/aurora.jpg",
        embed_url: None,
        links: AURORA_LINKS,
    },
    Release {
        id: "in-your-eyes",
        title: "In Your Eyes",
        kind: ReleaseKind::Track,
        cover: "/assets/inyoureyes.jpg",
        embed_url: Some(
            "https://open.spotify.com/embed/track/0SCoNAciqsTEKWpHiSfYVk?utm_source=generator",
        ),
        links: IN_YOUR_EYES_LINKS,
    },
    Release {
        id: "grow",
        title: "Grow",
        kind: ReleaseKind::Track,
        cover: "/assets/grow.jpg",
        embed_url: Some(
            "https://open.spotify.com/embed/track/12iUl8zcG0fZlbxcIOMM0u?utm_source=generator",
        ),
        links: &[],
    },
    Release {
        id: "keeping-on",
        title: "Keeping On",
        kind: ReleaseKind::Track,
        cover: "/assets/keepingon.jpg",
        embed_url: Some(
            "https://open.spotify.com/embed/track/3RxWpfV6ilqc7GQSTY2IDJ?utm_source=generator",
        ),
        links: &[],
    },
    Release {
        id: "incongruency",
        title: "Incongruency",
        kind: ReleaseKind::Track,
        cover: "/assets/incongruency.jpg",
        embed_url: Some(
            "https://open.spotify.com/embed/track/4xnVoqewkPXTcKYMKGPJNI?utm_source=generator",
        ),
        links: &[],
    },
];

/// Social profile link shown in the Connect section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub service: Service,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        service: Service::Spotify,
        url: "https://open.spotify.com/artist/2qvorxtBtHDDhTGbMBUDdT?si=rq7hX1P7RAyVyicI-7Ff6g",
    },
    SocialLink {
        service: Service::Instagram,
        url: "https://www.instagram.com/euqsarosa/",
    },
    SocialLink {
        service: Service::SoundCloud,
        url: "https://soundcloud.com/euqsarosa",
    },
    SocialLink {
        service: Service::YouTube,
        url: "https://www.youtube.com/@euqsarosa",
    },
];

/// Booking/collaboration contact address.
pub const CONTACT_EMAIL: &str = "euqsarosaprod@gmail.com";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn release_ids_are_unique_and_nonempty() {
        let mut seen = HashSet::new();
        for release in RELEASES {
            assert!(!release.id.is_empty());
            assert!(
                seen.insert(release.id),
                "duplicate release id: {}",
                release.id
            );
        }
    }

    #[test]
    fn every_release_has_cover_art_under_the_asset_mount() {
        for release in RELEASES {
            assert!(
                release.cover.starts_with("/assets/"),
                "{} cover outside asset mount: {}",
                release.id,
                release.cover
            );
        }
    }

    #[test]
    fn outbound_urls_are_absolute() {
        for release in RELEASES {
            for link in release.links {
                assert!(link.url.starts_with("https://"), "{}", link.url);
            }
            if let Some(embed) = release.embed_url {
                assert!(embed.starts_with("https://"));
            }
        }
        for social in SOCIAL_LINKS {
            assert!(social.url.starts_with("https://"));
        }
    }

    #[test]
    fn link_panels_keep_service_order() {
        // The panel order is part of the page design: Spotify leads, Anghami
        // closes, ten services in all.
        for links in [AURORA_LINKS, IN_YOUR_EYES_LINKS] {
            assert_eq!(links.len(), 10);
            assert_eq!(links[0].service, Service::Spotify);
            assert_eq!(links[links.len() - 1].service, Service::Anghami);
        }
    }

    #[test]
    fn embed_heights_follow_release_kind() {
        assert_eq!(ReleaseKind::Album.embed_height(), 152);
        assert_eq!(ReleaseKind::Track.embed_height(), 80);
    }
}
