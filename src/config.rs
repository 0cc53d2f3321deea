use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "5000";
const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `STATIC_DIR` from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|_| AppError::Config("PORT must be a number".into()))?;
        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid address: {}:{}", host, port)))?;

        Ok(Self {
            addr,
            static_dir: static_dir.into(),
        })
    }
}
