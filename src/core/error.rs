use std::io;

#[derive(thiserror::Error, Debug)]
pub enum ScopeError {
    #[error("config error: {0}")]
    Config(String),
    #[error("dns error: {0}")]
    Dns(String),
    #[error("output error: {0}")]
    Output(String),
    #[error("input error: {0}")]
    Input(String),
    #[error("unknown error")]
    Unknown,
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for ScopeError {
    fn from(err: serde_json::Error) -> Self {
        ScopeError::Output(err.to_string())
    }
}

impl From<toml::de::Error> for ScopeError {
    fn from(err: toml::de::Error) -> Self {
        ScopeError::Config(err.to_string())
    }
}
