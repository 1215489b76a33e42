//! Questline engine: player state, transition resolution, and persistence.
//!
//! Sits on top of [`ql_core`]'s validated scene graph and provides the
//! moving parts: the mutable [`PlayerState`], the pure transition
//! [`resolve`] function, the link [`visibility`] filter, the persistence
//! adapter in [`store`], and the [`Session`] facade that presentation and
//! input adapters talk to.

/// Error types for the engine.
pub mod error;
/// Player state: position, health, inventory.
pub mod player;
/// The transition resolution algorithm.
pub mod resolver;
/// Interactive session facade for front ends.
pub mod session;
/// Persistence adapter: save stores and load/save/reset.
pub mod store;
/// Link visibility filtering.
pub mod visibility;

/// Re-export error types.
pub use error::{EngineError, EngineResult};
/// Re-export player state.
pub use player::PlayerState;
/// Re-export the resolver entry point.
pub use resolver::resolve;
/// Re-export the session facade.
pub use session::{ChoiceView, SceneView, Session};
/// Re-export store types.
pub use store::{FileStore, MemoryStore, SAVE_KEY, SaveStore};
/// Re-export visibility helpers.
pub use visibility::{is_visible, visible_links};
