//! Configuration loading and bind address resolution

use crate::{Error, Result};
use std::path::PathBuf;

/// Compiled default bind address
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Environment variable checked for a bind address override
pub const BIND_ENV_VAR: &str = "WEBCALC_BIND";

/// Bind address resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file (`bind` key)
/// 4. Compiled default (fallback)
///
/// A missing or unreadable config file degrades to the next tier; it never
/// prevents startup.
pub fn resolve_bind_addr(cli_arg: Option<&str>) -> String {
    // Priority 1: Command-line argument
    if let Some(addr) = cli_arg {
        return addr.to_string();
    }

    // Priority 2: Environment variable
    if let Ok(addr) = std::env::var(BIND_ENV_VAR) {
        if !addr.is_empty() {
            return addr;
        }
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = find_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(bind) = config.get("bind").and_then(|v| v.as_str()) {
                    return bind.to_string();
                }
            }
        }
    }

    // Priority 4: Compiled default
    DEFAULT_BIND_ADDR.to_string()
}

/// Locate the configuration file for the platform
fn find_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/webcalc/config.toml first, then /etc/webcalc/config.toml
        if let Some(path) = dirs::config_dir().map(|d| d.join("webcalc").join("config.toml")) {
            if path.exists() {
                return Ok(path);
            }
        }
        let system_config = PathBuf::from("/etc/webcalc/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
        Err(Error::Config("No config file found".to_string()))
    } else {
        let path = dirs::config_dir()
            .map(|d| d.join("webcalc").join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        if path.exists() {
            Ok(path)
        } else {
            Err(Error::Config(format!("Config file not found: {:?}", path)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_arg_wins() {
        assert_eq!(resolve_bind_addr(Some("0.0.0.0:8080")), "0.0.0.0:8080");
    }

    #[test]
    fn test_default_parses_as_socket_addr() {
        use std::net::SocketAddr;
        let parsed: std::result::Result<SocketAddr, _> = DEFAULT_BIND_ADDR.parse();
        assert!(parsed.is_ok());
    }
}
