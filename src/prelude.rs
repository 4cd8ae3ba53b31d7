use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("ERR-LOAD-000: could not read listing file: {0}")]
    Read(#[from] std::io::Error),
    #[error("ERR-LOAD-001: invalid JSON file format: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("ERR-CONF-000: improperly configured: {0}")]
    Config(#[from] config::ConfigError),
    #[error("ERR-RENDER-000: could not render listings: {0}")]
    Render(#[from] askama::Error),
    #[error("ERR-RENDER-001: could not encode listings: {0}")]
    Encode(serde_json::Error),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Read(_) => "ERR-LOAD-000",
            Error::Malformed(_) => "ERR-LOAD-001",
            Error::Config(_) => "ERR-CONF-000",
            Error::Render(_) => "ERR-RENDER-000",
            Error::Encode(_) => "ERR-RENDER-001",
        }
    }
}
