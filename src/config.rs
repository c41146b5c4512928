use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dotenvy::dotenv;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_API_HOST: &str = "localhost";
pub const DEFAULT_API_PORT: u16 = 10483;
pub const DEFAULT_SITE_NAME: &str = "WikiSearch";
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub api_host: String,
    pub api_port: u16,
    pub site_name: String,
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    /// Useful for testing without touching the process environment.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bind_addr = get_or_default("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("Invalid BIND_ADDR: {bind_addr}"))?;

        let api_port = match lookup("SEARCH_API_PORT") {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("Invalid SEARCH_API_PORT: {port}"))?,
            None => DEFAULT_API_PORT,
        };

        Ok(Config {
            bind_addr,
            api_host: get_or_default("SEARCH_API_HOST", DEFAULT_API_HOST),
            api_port,
            site_name: get_or_default("SITE_NAME", DEFAULT_SITE_NAME),
            static_dir: PathBuf::from(get_or_default("STATIC_DIR", DEFAULT_STATIC_DIR)),
        })
    }
}
