use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("invalid range: min {min} must not exceed max {max}")]
    InvalidRange { min: i64, max: i64 },
}

pub type TreeResult<T> = Result<T, TreeError>;
