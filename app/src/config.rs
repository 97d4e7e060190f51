//! Host configuration (`config.toml`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::app::AppSettings;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("cannot serialise config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("cannot write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub dark_theme: bool,
    /// Route pushed on top of the start destination at launch.
    pub start_route: String,
    pub density: f32,
    pub text_scale: f32,
    /// Back stack file, restored at launch and written on exit.
    pub saved_stack: Option<PathBuf>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            dark_theme: false,
            start_route: "welcome".into(),
            density: 1.0,
            text_scale: 1.0,
            saved_stack: None,
        }
    }
}

impl HostConfig {
    pub const ENV: &'static str = "BLOOM_CONFIG";

    /// `~/.config/bloom/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs_next::config_dir().map(|d| d.join("bloom").join("config.toml"))
    }

    /// Loads from `explicit`, else `$BLOOM_CONFIG`, else [`Self::default_path`].
    /// A missing file yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let env = std::env::var_os(Self::ENV).map(PathBuf::from);
        match locate(explicit, env) {
            Some(path) => Self::load_from(&path),
            None => {
                log::info!("no config directory; using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("{} not found; using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config: HostConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config.sanitized())
    }

    /// Writes the config, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(write_err)?;
        }
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text).map_err(write_err)
    }

    pub fn settings(&self) -> AppSettings {
        AppSettings {
            dark_theme: self.dark_theme,
            density: self.density,
            text_scale: self.text_scale,
        }
    }

    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.density.is_finite() || self.density <= 0.0 {
            log::warn!("density {} ignored", self.density);
            self.density = defaults.density;
        }
        if !self.text_scale.is_finite() || self.text_scale <= 0.0 {
            log::warn!("text_scale {} ignored", self.text_scale);
            self.text_scale = defaults.text_scale;
        }
        self
    }
}

fn locate(explicit: Option<&Path>, env: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or(env)
        .or_else(HostConfig::default_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins_over_env() {
        let explicit = Path::new("/tmp/a.toml");
        let env = Some(PathBuf::from("/tmp/b.toml"));
        assert_eq!(locate(Some(explicit), env.clone()), Some(explicit.into()));
        assert_eq!(locate(None, env.clone()), env);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: HostConfig = toml::from_str("dark_theme = true").unwrap();
        assert!(config.dark_theme);
        assert_eq!(config.start_route, "welcome");
        assert_eq!(config.saved_stack, None);
    }

    #[test]
    fn non_positive_scales_are_reset() {
        let config = HostConfig {
            density: 0.0,
            text_scale: -2.0,
            ..HostConfig::default()
        }
        .sanitized();
        assert_eq!(config.density, 1.0);
        assert_eq!(config.text_scale, 1.0);
    }
}
