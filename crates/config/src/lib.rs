//! Layered runtime configuration.
//!
//! Values resolve in increasing priority: builtin defaults, then
//! `snapdiff.toml` in the platform config directory, then `snapdiff.toml`
//! in the working directory, then `SNAPDIFF_*` environment variables.

pub mod error;

use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;
use tracing::instrument;

/// File name looked up in the working directory and the platform config dir.
pub const CONFIG_FILE_NAME: &str = "snapdiff.toml";
const ENV_PREFIX: &str = "SNAPDIFF_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// User-Agent header sent with every outgoing request.
    pub user_agent: String,
    /// Per-request timeout for index lookups and page fetches, in seconds.
    pub fetch_timeout_secs: u64,
    /// Address the web front end binds to.
    pub bind: IpAddr,
    /// Port the web front end listens on.
    pub port: u16,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: snapdiff_archive::DEFAULT_USER_AGENT.to_string(),
            fetch_timeout_secs: snapdiff_archive::DEFAULT_FETCH_TIMEOUT.as_secs(),
            bind: IpAddr::from([127, 0, 0, 1]),
            port: 5000,
        }
    }
}
impl Config {
    /// Loads and validates configuration from all sources.
    #[instrument]
    pub fn load() -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = Self::platform_config_file() {
            figment = figment.merge(Toml::file(path));
        }
        let figment = figment.merge(Toml::file(CONFIG_FILE_NAME)).merge(Env::prefixed(ENV_PREFIX));
        Self::from_figment(figment)
    }

    fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract().or_raise(|| ErrorKind::Load)?;
        config.validate()?;
        Ok(config)
    }

    fn platform_config_file() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "snapdiff").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    fn validate(&self) -> Result<()> {
        if self.user_agent.trim().is_empty() {
            exn::bail!(ErrorKind::Invalid("user_agent"));
        }
        if self.fetch_timeout_secs == 0 {
            exn::bail!(ErrorKind::Invalid("fetch_timeout_secs"));
        }
        Ok(())
    }

    /// Fetch timeout as a [`Duration`].
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Socket address for the web front end.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((self.bind, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_match_the_fetch_collaborator() {
        let config = Config::default();
        assert_eq!(config.user_agent, snapdiff_archive::DEFAULT_USER_AGENT);
        assert_eq!(config.fetch_timeout(), snapdiff_archive::DEFAULT_FETCH_TIMEOUT);
        assert_eq!(config.listen_addr().to_string(), "127.0.0.1:5000");
    }

    #[test]
    fn file_values_override_defaults() {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::string("port = 8080\nfetch_timeout_secs = 30"));
        let config = Config::from_figment(figment).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
        // Untouched fields keep their defaults.
        assert_eq!(config.user_agent, snapdiff_archive::DEFAULT_USER_AGENT);
    }

    #[rstest]
    #[case::unknown_field("definitely_unknown = 1")]
    #[case::empty_user_agent("user_agent = \"  \"")]
    #[case::zero_timeout("fetch_timeout_secs = 0")]
    fn invalid_sources_are_rejected(#[case] source: &str) {
        let figment = Figment::from(Serialized::defaults(Config::default())).merge(Toml::string(source));
        assert!(Config::from_figment(figment).is_err());
    }
}
