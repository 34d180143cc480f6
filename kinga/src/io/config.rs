//! Server configuration stored in `kinga.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "kinga.toml";

/// Server configuration (TOML).
///
/// Every field is optional in the file; missing fields fall back to the
/// local-development defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind: String,

    /// Port to listen on.
    pub port: u16,

    /// Directory holding favicons, `matsu.svg` and `cover.png`.
    pub public_dir: PathBuf,

    /// Site URL used for page metadata when `SITE_URL` is not set.
    pub site_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 3000,
            public_dir: PathBuf::from("public"),
            site_url: None,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.bind.trim().is_empty() {
            return Err(anyhow!("bind must be a non-empty address"));
        }
        if self.port == 0 {
            return Err(anyhow!("port must be > 0"));
        }
        Ok(())
    }

    /// `bind:port` as a socket address string.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind.trim(), self.port)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ServerConfig::default()`.
pub fn load_config(path: &Path) -> Result<ServerConfig> {
    if !path.exists() {
        let cfg = ServerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ServerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.listen_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("kinga.toml");
        fs::write(&path, "port = 8080\nsite_url = \"https://kinga.example\"\n").expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.bind, "127.0.0.1");
        assert_eq!(cfg.public_dir, PathBuf::from("public"));
        assert_eq!(cfg.site_url.as_deref(), Some("https://kinga.example"));
    }

    #[test]
    fn rejects_zero_port() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("kinga.toml");
        fs::write(&path, "port = 0\n").expect("write");

        let err = load_config(&path).expect_err("port 0 should fail");
        assert!(format!("{err:#}").contains("port must be > 0"));
    }

    #[test]
    fn rejects_malformed_toml() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("kinga.toml");
        fs::write(&path, "port = \"many\"\n").expect("write");

        let err = load_config(&path).expect_err("bad type should fail");
        assert!(format!("{err:#}").contains("parse"));
    }

    #[test]
    fn blank_bind_is_invalid() {
        let cfg = ServerConfig {
            bind: "  ".to_string(),
            ..ServerConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
