use crate::scene::SceneId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when constructing a scene graph.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A scene id is referenced but no scene with that id is defined.
    ///
    /// Raised for dangling link targets as well as for the distinguished
    /// start and death ids. Always raised at construction time, never
    /// during traversal.
    #[error("broken reference: \"{target}\" (referenced from {referrer}) is not a known scene")]
    BrokenReference {
        /// Where the dangling reference appears, e.g. `scene "road"` or
        /// `the start id`.
        referrer: String,
        /// The unresolved scene id.
        target: SceneId,
    },

    /// The configuration defines no scenes at all.
    #[error("the scene graph is empty")]
    EmptyGraph,

    /// The configuration document could not be parsed.
    #[error("invalid scene graph configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("cannot read scene graph configuration: {0}")]
    Io(#[from] std::io::Error),
}
