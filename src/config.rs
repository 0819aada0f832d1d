use std::{env, net::SocketAddr};

use crate::error::AppError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TITLE: &str = "SEO AI Engine";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub app_host: String,
    pub app_port: u16,
    pub app_title: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but reads keys through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_host = lookup("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let app_port = match lookup("APP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::InvalidConfig {
                    var: "APP_PORT",
                    value: raw,
                })?,
            None => DEFAULT_PORT,
        };
        let app_title = lookup("APP_TITLE").unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Ok(Self {
            app_host,
            app_port,
            app_title,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        Ok(format!("{}:{}", self.app_host, self.app_port).parse()?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_host: DEFAULT_HOST.to_string(),
            app_port: DEFAULT_PORT,
            app_title: DEFAULT_TITLE.to_string(),
        }
    }
}
