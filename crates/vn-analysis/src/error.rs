use thiserror::Error;
use vn_core::VnError;
use vn_trace::TraceError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("analysis configuration error: {0}")]
    Config(#[from] VnError),

    #[error("trace error: {0}")]
    Trace(#[from] TraceError),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
