//! Embedded static assets.
//!
//! The stylesheet and favicon are compiled into the binary so the site
//! renders with no on-disk dependencies; cover art, the hero video, and the
//! profile photo are media served from the public directory on disk.

/// Site stylesheet. Theme colors key off the root `data-theme` attribute.
pub const SITE_CSS: &str = include_str!("../../public/site.css");

/// Favicon.
pub const FAVICON_SVG: &str = include_str!("../../public/favicon.svg");
