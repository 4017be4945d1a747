use crate::types::{PageviewError, RunMode, DEFAULT_MODE, DEFAULT_PORT};
use config::{Config, Environment, Map};
use dotenvy::dotenv;
use serde::Deserialize;
use std::ffi::OsString;

/// The only variables the gateway reads.
const GATEWAY_VARS: [&str; 2] = ["GIN_MODE", "PORT"];

/// Startup configuration of the API gateway, read once and never mutated.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GatewayConfig {
    /// Raw `GIN_MODE` value, kept verbatim.
    #[serde(rename = "gin_mode")]
    pub mode: String,
    /// Raw `PORT` value, kept verbatim.
    pub port: String,
}

impl GatewayConfig {
    pub fn run_mode(&self) -> RunMode {
        RunMode::from_config(&self.mode)
    }

    /// True when `GIN_MODE` holds something other than debug/release/test.
    pub fn has_unknown_mode(&self) -> bool {
        RunMode::parse(&self.mode).is_none()
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
            port: DEFAULT_PORT.to_string(),
        }
    }
}

pub fn load_config() -> Result<GatewayConfig, PageviewError> {
    // 加载 .env 文件
    dotenv().ok();

    load_config_from(gateway_vars(|k: &str| std::env::var_os(k)))
}

/// Picks `GIN_MODE` and `PORT` out of `lookup`. Other variables are never
/// touched, and values that are not valid UTF-8 are converted lossily.
pub fn gateway_vars<F>(lookup: F) -> Map<String, String>
where
    F: Fn(&str) -> Option<OsString>,
{
    GATEWAY_VARS
        .iter()
        .filter_map(|name| {
            lookup(name).map(|value| (name.to_string(), value.to_string_lossy().into_owned()))
        })
        .collect()
}

/// Builds the configuration from `vars`. Empty values fall back to the defaults.
pub fn load_config_from(vars: Map<String, String>) -> Result<GatewayConfig, PageviewError> {
    let settings = Config::builder()
        .set_default("gin_mode", DEFAULT_MODE)?
        .set_default("port", DEFAULT_PORT)?
        .add_source(Environment::default().ignore_empty(true).source(Some(vars)))
        .build()?;

    let config: GatewayConfig = settings.try_deserialize()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load_config_from(vars(&[])).unwrap();
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.port, "8080");
        assert_eq!(config.mode, "debug");
        assert_eq!(config.run_mode(), RunMode::Debug);
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let config = load_config_from(vars(&[("GIN_MODE", ""), ("PORT", "")])).unwrap();
        assert_eq!(config, GatewayConfig::default());
    }

    #[test]
    fn test_values_are_kept_verbatim() {
        let config = load_config_from(vars(&[("GIN_MODE", "release"), ("PORT", "9090")])).unwrap();
        assert_eq!(config.mode, "release");
        assert_eq!(config.port, "9090");
        assert_eq!(config.run_mode(), RunMode::Release);
        assert!(!config.has_unknown_mode());

        let config = load_config_from(vars(&[("GIN_MODE", "staging"), ("PORT", "not-a-port")])).unwrap();
        assert_eq!(config.mode, "staging");
        assert_eq!(config.port, "not-a-port");
        assert_eq!(config.run_mode(), RunMode::Debug);
        assert!(config.has_unknown_mode());
    }

    #[cfg(unix)]
    fn os(bytes: &[u8]) -> OsString {
        use std::os::unix::ffi::OsStrExt;
        std::ffi::OsStr::from_bytes(bytes).to_os_string()
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_variables_do_not_break_loading() {
        let lookup = |name: &str| match name {
            "PORT" => Some(OsString::from("9090")),
            "JUNK" => Some(os(b"\xff\xfe")),
            _ => None,
        };
        let picked = gateway_vars(lookup);
        assert_eq!(picked.len(), 1);
        assert!(!picked.contains_key("JUNK"));

        let config = load_config_from(picked).unwrap();
        assert_eq!(config.port, "9090");
        assert_eq!(config.mode, "debug");

        let lookup = |name: &str| match name {
            "GIN_MODE" => Some(os(b"rel\xffease")),
            _ => None,
        };
        let config = load_config_from(gateway_vars(lookup)).unwrap();
        assert_eq!(config.mode, "rel\u{fffd}ease");
        assert!(config.has_unknown_mode());
        assert_eq!(config.port, "8080");
    }

    #[test]
    fn test_gateway_vars_only_reads_known_names() {
        let seen = std::cell::RefCell::new(Vec::new());
        let picked = gateway_vars(|name: &str| {
            seen.borrow_mut().push(name.to_string());
            Some(OsString::from("x"))
        });
        assert_eq!(*seen.borrow(), vec!["GIN_MODE", "PORT"]);
        assert_eq!(picked.len(), 2);
    }

    #[test]
    fn test_unrelated_variables_are_ignored() {
        let config = load_config_from(vars(&[("HOME", "/root"), ("PORT", "3000")])).unwrap();
        assert_eq!(config.port, "3000");
        assert_eq!(config.mode, "debug");
    }
}
