use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("dispatch configuration error: {0}")]
    Config(String),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
