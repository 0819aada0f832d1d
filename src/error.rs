use std::net::AddrParseError;

/// Startup failures. The request path itself has no error branch.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidConfig { var: &'static str, value: String },
    #[error("invalid listen address: {0}")]
    InvalidAddr(#[from] AddrParseError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
