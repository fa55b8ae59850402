use crate::key::KeyState;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "kana-util.toml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Convert to half-width katakana unless told otherwise.
    pub half_katakana: bool,
    /// Modifier bits ignored when matching hotkeys.
    pub ignore_mask: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            half_katakana: false,
            ignore_mask: KeyState::CAPS_LOCK.bits(),
        }
    }
}

impl Options {
    pub fn config_path() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(CONFIG_FILE)
    }

    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No configuration at {path:?}, using default values");
            return Options::default();
        }
        match fs::read_to_string(path) {
            Ok(text) => match toml::from_str::<Options>(&text) {
                Ok(opts) => {
                    info!("Options loaded from {path:?}");
                    opts
                }
                Err(e) => {
                    warn!("Invalid configuration file {path:?}, using default values: {e}");
                    Options::default()
                }
            },
            Err(e) => {
                warn!("Unable to read {path:?}, using default values: {e}");
                Options::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        info!("Options saved into {path:?}");
        Ok(())
    }

    pub fn ignore_mask(&self) -> KeyState {
        KeyState::from_bits_truncate(self.ignore_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_roundtrip() -> anyhow::Result<()> {
        let o = Options::default();
        let s = toml::to_string(&o)?;
        let back: Options = toml::from_str(&s)?;
        assert_eq!(o, back);
        Ok(())
    }

    #[test]
    fn missing_fields_use_defaults() -> anyhow::Result<()> {
        let opts: Options = toml::from_str("half_katakana = true")?;
        assert!(opts.half_katakana);
        assert_eq!(opts.ignore_mask(), KeyState::CAPS_LOCK);
        Ok(())
    }

    #[test]
    fn save_then_load() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let opts = Options {
            half_katakana: true,
            ignore_mask: (KeyState::CAPS_LOCK | KeyState::SUPER).bits(),
        };
        opts.save_to(&path)?;
        assert_eq!(Options::load_from(&path), opts);
        Ok(())
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "half_katakana = \"maybe\"")?;
        assert_eq!(Options::load_from(&path), Options::default());
        Ok(())
    }

    #[test]
    fn missing_file_falls_back_to_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CONFIG_FILE);
        assert_eq!(Options::load_from(&path), Options::default());
        Ok(())
    }
}
