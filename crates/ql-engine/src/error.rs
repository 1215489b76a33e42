//! Error types for the engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while running a session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Stored save data exists but does not describe a valid player state
    /// for the loaded graph: malformed JSON, a scene id the graph does not
    /// define, or negative health.
    ///
    /// Recoverable: callers should fall back to a fresh state rather than
    /// abort the session.
    #[error("corrupt save data: {0}")]
    CorruptSave(String),

    /// The underlying key-value store failed.
    #[error("save store error: {0}")]
    Store(#[from] std::io::Error),

    /// A choice index outside the visible-links sequence was selected.
    #[error("invalid choice: {0}")]
    InvalidChoice(usize),
}
