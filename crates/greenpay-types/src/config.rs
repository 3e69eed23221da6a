//! Server configuration types.
//!
//! `ServerConfig` represents the `greenpay.toml` file that controls the bind
//! address, the static content root, and the display figures reported by
//! `/api/stats`. All fields have defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the GreenPay server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory static files are served from.
    #[serde(default = "default_web_dir")]
    pub web_dir: PathBuf,

    /// Document served for `/`, relative to `web_dir`.
    #[serde(default = "default_index_document")]
    pub index_document: String,

    #[serde(default)]
    pub display: DisplayFigures,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_web_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_index_document() -> String {
    "index.html".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            web_dir: default_web_dir(),
            index_document: default_index_document(),
            display: DisplayFigures::default(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Full path of the entry document served for `/`.
    pub fn index_path(&self) -> PathBuf {
        self.web_dir.join(&self.index_document)
    }
}

/// Marketing figures shown on the site. Static, not computed from data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFigures {
    #[serde(default = "default_uptime")]
    pub uptime: String,
    #[serde(default = "default_active_merchants")]
    pub active_merchants: String,
    #[serde(default = "default_total_processed")]
    pub total_processed: String,
}

fn default_uptime() -> String {
    "99.9%".to_string()
}

fn default_active_merchants() -> String {
    "10,000+".to_string()
}

fn default_total_processed() -> String {
    "$2B+".to_string()
}

impl Default for DisplayFigures {
    fn default() -> Self {
        Self {
            uptime: default_uptime(),
            active_merchants: default_active_merchants(),
            total_processed: default_total_processed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default_values() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.index_path(), PathBuf::from("static/index.html"));
        assert_eq!(config.display.uptime, "99.9%");
    }

    #[test]
    fn test_server_config_deserialize_with_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.display, DisplayFigures::default());
    }

    #[test]
    fn test_server_config_deserialize_with_values() {
        let toml_str = r#"
host = "127.0.0.1"
port = 8080
web_dir = "public"

[display]
active_merchants = "12,500+"
"#;
        let config: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.web_dir, PathBuf::from("public"));
        assert_eq!(config.index_document, "index.html");
        assert_eq!(config.display.active_merchants, "12,500+");
        assert_eq!(config.display.uptime, "99.9%");
    }
}
