//! Server configuration loader.
//!
//! Reads a TOML file (`greenpay.toml` by default) and deserializes it into
//! [`ServerConfig`]. Falls back to defaults when the file is missing or
//! malformed.

use std::path::Path;

use greenpay_types::config::ServerConfig;

/// Load server configuration from `path`.
///
/// - If the file does not exist, returns [`ServerConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config.
pub async fn load_server_config(path: &Path) -> ServerConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", path.display());
            return ServerConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return ServerConfig::default();
        }
    };

    match toml::from_str::<ServerConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            ServerConfig::default()
        }
    }
}
