use thiserror::Error;

#[derive(Debug, Error)]
pub enum CargoError {
    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CargoResult<T> = Result<T, CargoError>;
