use thiserror::Error;

#[derive(Error, Debug)]
pub enum KudosError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl From<confique::Error> for KudosError {
    fn from(err: confique::Error) -> Self {
        KudosError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, KudosError>;
