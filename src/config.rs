//! Client configuration and environment detection.
//!
//! The global instance is configured from the environment: `DAT_HOST`,
//! `DAT_PORT` and `DAT_ENABLED` override the defaults, and `APP_ENV`
//! set to `production` disables the client entirely regardless of any
//! explicit enable flag.

use std::env;

use crate::error::{Error, Result};

/// Connection settings for a [`Dat`](crate::Dat) handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Debug server host.
    pub host: String,
    /// Debug server port.
    pub port: u16,
    /// Explicit enable flag. Combined with [`is_production`] at
    /// construction time to compute effective enablement.
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
            enabled: true,
        }
    }
}

impl Config {
    /// Default debug server host.
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";

    /// Default debug server port.
    pub const DEFAULT_PORT: u16 = 3030;

    /// Base URL of the debug server, e.g. `http://127.0.0.1:3030`.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Read configuration from the environment.
    ///
    /// Overrides fall back per variable: an unparseable `DAT_PORT` keeps
    /// the default port but still honors a valid `DAT_HOST` next to it.
    pub fn from_env() -> Self {
        Self::from_overrides(env_var("DAT_HOST"), env_var("DAT_PORT"), env_var("DAT_ENABLED"))
    }

    /// Read configuration from the environment, surfacing invalid values.
    pub fn try_from_env() -> Result<Self> {
        Self::try_from_overrides(env_var("DAT_HOST"), env_var("DAT_PORT"), env_var("DAT_ENABLED"))
    }

    fn from_overrides(host: Option<String>, port: Option<String>, enabled: Option<String>) -> Self {
        let mut config = Self::default();
        apply_host(&mut config, host);
        if let Some(port) = port {
            match port.parse() {
                Ok(value) => config.port = value,
                Err(_) => tracing::debug!("ignoring invalid DAT_PORT value: {}", port),
            }
        }
        apply_enabled(&mut config, enabled);
        config
    }

    fn try_from_overrides(
        host: Option<String>,
        port: Option<String>,
        enabled: Option<String>,
    ) -> Result<Self> {
        let mut config = Self::default();
        apply_host(&mut config, host);
        if let Some(port) = port {
            config.port = port
                .parse()
                .map_err(|_| Error::Config(format!("invalid DAT_PORT value: {port}")))?;
        }
        apply_enabled(&mut config, enabled);
        Ok(config)
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn apply_host(config: &mut Config, host: Option<String>) {
    if let Some(host) = host {
        if !host.is_empty() {
            config.host = host;
        }
    }
}

fn apply_enabled(config: &mut Config, enabled: Option<String>) {
    if let Some(flag) = enabled {
        config.enabled = parse_enabled(&flag);
    }
}

/// True when `APP_ENV` names the production environment. Debug
/// instrumentation must stay dark there no matter what the caller asked for.
pub fn is_production() -> bool {
    is_production_value(env::var("APP_ENV").ok().as_deref())
}

fn is_production_value(value: Option<&str>) -> bool {
    matches!(value, Some(v) if v.trim().eq_ignore_ascii_case("production"))
}

fn parse_enabled(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}
