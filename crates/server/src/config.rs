use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use log::warn;

use crate::error::StartupError;

/// Listen address used when `BIND_ADDR` is not set
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3000);

/// Runtime settings for the server
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Address the HTTP listener binds to
    pub bind_addr: SocketAddr,
    /// OIDC issuer used to validate bearer tokens; `None` leaves the route ungated
    pub oidc_issuer_url: Option<String>,
    /// Accepted `aud` claim values; empty means any audience
    pub oidc_audiences: Vec<String>,
}

impl Config {
    /// Loads the configuration from the process environment
    ///
    /// A `.env` file in the working directory is read first if one exists.
    pub fn from_env() -> Result<Self, StartupError> {
        if let Err(e) = dotenvy::dotenv()
            && !e.not_found()
        {
            warn!("Ignoring unreadable .env file: {e}");
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup
    ///
    /// # Arguments
    /// * `lookup` - Returns the raw value of a variable, if set
    ///
    /// # Returns
    /// The parsed [`Config`], or [`StartupError::InvalidConfig`] if a value is malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let bind_addr = match var("BIND_ADDR") {
            Some(raw_addr) => raw_addr.parse().map_err(|e| {
                StartupError::InvalidConfig(format!(
                    "BIND_ADDR '{raw_addr}' is not a socket address: {e}"
                ))
            })?,
            None => DEFAULT_BIND_ADDR,
        };

        let oidc_audiences = var("OIDC_AUDIENCES")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|aud| !aud.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            oidc_issuer_url: var("OIDC_ISSUER_URL"),
            oidc_audiences,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            oidc_issuer_url: None,
            oidc_audiences: Vec::new(),
        }
    }
}
