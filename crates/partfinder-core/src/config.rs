use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Origin of the plate information service used when no config overrides it.
pub const DEFAULT_LOOKUP_BASE_URL: &str = "http://plate-information.159.69.86.229.sslip.io";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot locate XDG directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("lookup_base_url {url:?} is not an absolute http(s) URL")]
    InvalidUrl { url: String },
}

/// Global configuration loaded from `~/.config/partfinder/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartfinderConfig {
    /// Origin of the plate lookup service; requests go to `{lookup_base_url}/plate/{plate}`.
    pub lookup_base_url: String,
    /// Optional overall transfer timeout in seconds (None = transport default).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for PartfinderConfig {
    fn default() -> Self {
        Self {
            lookup_base_url: DEFAULT_LOOKUP_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl PartfinderConfig {
    /// Checks that `lookup_base_url` is an absolute http/https URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match url::Url::parse(&self.lookup_base_url) {
            Ok(u) if matches!(u.scheme(), "http" | "https") && u.has_host() => Ok(()),
            _ => Err(ConfigError::InvalidUrl {
                url: self.lookup_base_url.clone(),
            }),
        }
    }
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("partfinder")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PartfinderConfig, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PartfinderConfig::default();
        write_default(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Read and validate a config file at an explicit path.
pub fn load_from(path: &Path) -> Result<PartfinderConfig, ConfigError> {
    let data = fs::read_to_string(path)?;
    let cfg: PartfinderConfig = toml::from_str(&data)?;
    cfg.validate()?;
    Ok(cfg)
}

fn write_default(path: &Path, cfg: &PartfinderConfig) -> Result<(), ConfigError> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)?;
    Ok(())
}
