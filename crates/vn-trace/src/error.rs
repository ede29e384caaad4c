use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("I/O error reading trace: {0}")]
    Io(#[from] std::io::Error),
}

pub type TraceResult<T> = Result<T, TraceError>;
