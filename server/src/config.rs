use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Server configuration persisted as TOML.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Starting port for the bind search (the first free port at or after
    /// this value is used).
    pub port: u16,
    /// Default minimum bet / big blind for newly created tables.
    pub min_bet: u32,
    /// Path to the append-only hand audit log.
    pub audit_log_path: PathBuf,
    /// How long a single action may hold a table's lock before it is
    /// abandoned and the action dropped, in milliseconds.
    pub lock_lease_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 3000,
            min_bet: 20,
            audit_log_path: PathBuf::from("data/hands.jsonl"),
            lock_lease_ms: 5000,
        }
    }
}

impl Config {
    /// Load configuration from `path`. If the file does not exist, create it
    /// with reasonable defaults and return the default config.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let s = fs::read_to_string(path)
                .with_context(|| format!("reading config file '{}'", path.display()))?;
            let cfg: Config = toml::from_str(&s)
                .with_context(|| format!("parsing TOML config '{}'", path.display()))?;
            Ok(cfg)
        } else {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("creating config directory '{}'", parent.display())
                    })?;
                }
            }

            let cfg = Config::default();
            let toml_text = toml::to_string_pretty(&cfg)
                .with_context(|| "serializing default config to TOML")?;
            fs::write(path, toml_text)
                .with_context(|| format!("writing default config to '{}'", path.display()))?;
            Ok(cfg)
        }
    }

    /// Save the current config state back to the provided path (overwrites).
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating config directory '{}'", parent.display()))?;
            }
        }
        let toml_text =
            toml::to_string_pretty(&self).with_context(|| "serializing config to TOML")?;
        fs::write(path, toml_text)
            .with_context(|| format!("writing config to '{}'", path.display()))?;
        Ok(())
    }

    pub fn lock_lease(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.lock_lease_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_or_create_writes_defaults_on_first_run() {
        let dir = std::env::temp_dir().join(format!("holdem-cfg-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let cfg = Config::load_or_create(&path).expect("creates default config");
        assert_eq!(cfg.min_bet, 20);
        assert!(path.exists());

        let reloaded = Config::load_or_create(&path).expect("reloads existing config");
        assert_eq!(reloaded.port, cfg.port);

        let _ = fs::remove_dir_all(&dir);
    }
}
