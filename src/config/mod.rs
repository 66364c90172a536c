//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served under /assets (cover art, hero video, profile photo).
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
}

fn default_port() -> u16 {
    8080
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SITE_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/euqsarosa-site");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("euqsarosa-site");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config/euqsarosa-site");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("euqsarosa-site");
        }
    }

    // Fallback to current directory
    PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("port", 8080)?
        .set_default("public_dir", "public")?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (SITE_PORT, SITE_PUBLIC_DIR, etc.)
        .add_source(
            ::config::Environment::with_prefix("SITE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Support PORT env vars with explicit precedence: SITE_PORT > PORT > config > default
    if let Ok(port) = std::env::var("SITE_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        // Legacy PORT fallback (Docker, PaaS launchers)
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}
