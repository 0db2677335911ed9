use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use tracing_subscriber::filter::LevelFilter;

use crate::app_error::{AppResult, ServerError};

/// Same limit the service had behind its JSON body parser.
pub const DEFAULT_MAX_BODY_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub persist_output: bool,
    pub output_dir: PathBuf,
    pub max_body_bytes: u64,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            persist_output: false,
            output_dir: PathBuf::from("."),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            log_level: LevelFilter::INFO,
        }
    }
}

impl AppConfig {
    // Used environment variables
    // HOST, PORT, PERSIST_OUTPUT, OUTPUT_DIR, MAX_BODY_BYTES, LOG_LEVEL
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        Ok(AppConfig {
            host: parse_var(&lookup, "HOST", defaults.host)?,
            port: parse_var(&lookup, "PORT", defaults.port)?,
            persist_output: parse_bool(&lookup, "PERSIST_OUTPUT", defaults.persist_output)?,
            output_dir: lookup("OUTPUT_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            max_body_bytes: parse_var(&lookup, "MAX_BODY_BYTES", defaults.max_body_bytes)?,
            log_level: parse_var(&lookup, "LOG_LEVEL", defaults.log_level)?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<T>()
            .map_err(|_e| ServerError::InvalidConfig { name, value }),
        _ => Ok(default),
    }
}

fn parse_bool<F>(lookup: &F, name: &'static str, default: bool) -> AppResult<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let value = match lookup(name) {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Ok(default),
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ServerError::InvalidConfig { name, value }),
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use tracing_subscriber::filter::LevelFilter;

    use super::{AppConfig, DEFAULT_MAX_BODY_BYTES};
    use crate::app_error::ServerError;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, ServerError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert!(!config.persist_output);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert_eq!(config.log_level, LevelFilter::INFO);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("PERSIST_OUTPUT", "Yes"),
            ("OUTPUT_DIR", "/tmp/mp3"),
            ("MAX_BODY_BYTES", "1024"),
            ("LOG_LEVEL", "debug"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert!(config.persist_output);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/mp3"));
        assert_eq!(config.max_body_bytes, 1024);
        assert_eq!(config.log_level, LevelFilter::DEBUG);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("PORT", " "), ("OUTPUT_DIR", "")]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn rejects_invalid_values() {
        match config_from(&[("PORT", "eighty")]) {
            Err(ServerError::InvalidConfig { name, value }) => {
                assert_eq!(name, "PORT");
                assert_eq!(value, "eighty");
            }
            other => panic!("expected invalid config, got {:?}", other),
        }
        assert!(config_from(&[("PERSIST_OUTPUT", "maybe")]).is_err());
    }
}
