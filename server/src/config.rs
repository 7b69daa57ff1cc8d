//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `BIND_ADDR`: interface to listen on, default `0.0.0.0`
//! - `PORT`: default 3000
//! - `ASSETS_DIR`: static images and styles served under `/assets`, default
//!   `<server manifest>/../assets`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::ServerError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::Config` when `BIND_ADDR` or `PORT` is set but
    /// does not parse.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_var(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?;
        let port = parse_var(&lookup, "PORT", &DEFAULT_PORT.to_string())?;
        let assets_dir = lookup("ASSETS_DIR")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map_or_else(default_assets_dir, PathBuf::from);
        Ok(Self { bind_addr, port, assets_dir })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets")
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: &str) -> Result<T, ServerError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = lookup(var).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
    let value = raw.as_deref().unwrap_or(default);
    value.parse().map_err(|e: T::Err| ServerError::Config {
        var,
        value: value.to_owned(),
        reason: e.to_string(),
    })
}
