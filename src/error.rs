use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("parallelism must be between 1 and {max}, got {value}")]
    InvalidParallelism { value: usize, max: usize },

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("arrays to sort must not be empty")]
    EmptyArray,

    #[error("failed to build sort thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("runtime failure: {0}")]
    Runtime(String),
}
