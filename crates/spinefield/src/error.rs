#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cluster count must not be negative (got {count})")]
    NegativeClusterCount { count: i64 },

    #[error("cluster count {count} exceeds the configured maximum of {max}")]
    TooManyClusters { count: usize, max: usize },

    #[error("invalid layout options: {message}")]
    InvalidOptions { message: String },

    #[error("invalid layout config JSON: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
