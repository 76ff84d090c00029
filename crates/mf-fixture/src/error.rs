use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("matrix error: {0}")]
    Matrix(#[from] mf_matrix::MatrixError),
    #[error("invalid fixture config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, FixtureError>;
