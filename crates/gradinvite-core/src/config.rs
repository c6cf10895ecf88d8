use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Event details shown on the rendered invitation (optional section in config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    /// Headline, e.g. "Lễ tốt nghiệp 2025".
    #[serde(default)]
    pub title: Option<String>,
    /// Free-form date and time text.
    #[serde(default)]
    pub date: Option<String>,
    /// Where the ceremony takes place.
    #[serde(default)]
    pub venue: Option<String>,
}

/// Global configuration loaded from `~/.config/gradinvite/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteConfig {
    /// Page that renders invitations; share links are `<share_base_url>?code=<code>`.
    pub share_base_url: String,
    /// Photo shown when an invitation has no usable photo link.
    pub placeholder_photo: String,
    /// Relation used when an invitation has none.
    pub default_relation: String,
    /// Optional event details; if missing, only the timeline is rendered.
    #[serde(default)]
    pub event: Option<EventConfig>,
}

impl Default for InviteConfig {
    fn default() -> Self {
        Self {
            share_base_url: "https://example.com/".to_string(),
            placeholder_photo: "/avatar.jpg".to_string(),
            default_relation: "Bạn".to_string(),
            event: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gradinvite")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<InviteConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<InviteConfig> {
    if !path.exists() {
        let default_cfg = InviteConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: InviteConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
