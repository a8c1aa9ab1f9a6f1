use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid request: {0}")]
    Invalid(#[from] wordforge_core::Error),
    /// Writing to the output failed. `written` complete lines were accepted
    /// before the failure and are left in place.
    #[error("output write failed after {written} line(s): {source}")]
    Sink {
        written: u64,
        #[source]
        source: std::io::Error,
    },
    /// Stopped by a cancellation request after `written` lines.
    #[error("generation cancelled after {written} line(s)")]
    Cancelled { written: u64 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenerationError {
    /// Lines already written when a streaming run stopped early.
    pub fn lines_written(&self) -> Option<u64> {
        match self {
            GenerationError::Sink { written, .. } | GenerationError::Cancelled { written } => {
                Some(*written)
            }
            _ => None,
        }
    }
}
