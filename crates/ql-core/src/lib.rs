//! Core types for Questline: scenes, links, and the scene graph.
//!
//! This crate defines the narrative data model the engine traverses. A
//! [`SceneGraph`] is constructed once from configuration data (typically a
//! JSON document supplied by a content author) and validated eagerly: every
//! link target and both distinguished scene ids must resolve before any
//! player touches the graph.

/// Error types used throughout the crate.
pub mod error;
/// The validated scene graph and its configuration form.
pub mod graph;
/// Scene and link types.
pub mod scene;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export graph types.
pub use graph::{GraphConfig, SceneGraph};
/// Re-export scene types.
pub use scene::{Link, Scene, SceneId};
