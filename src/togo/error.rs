use thiserror::Error;

#[derive(Error, Debug)]
pub enum TogoError {
    #[error("Non-existing todo number: {0}")]
    TaskNotFound(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl TogoError {
    /// True when the error is a missing file rather than a broken one.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, TogoError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, TogoError>;
