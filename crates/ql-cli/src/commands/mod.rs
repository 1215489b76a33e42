pub mod check;
pub mod init;
pub mod play;
pub mod reset;
pub mod show;

use std::path::Path;

use ql_core::SceneGraph;

/// Load and validate a scene file.
///
/// Validation failures (dangling targets, bad JSON) surface here with the
/// file name attached, before any command touches the graph.
fn load_graph(file: &Path) -> Result<SceneGraph, String> {
    SceneGraph::from_json_file(file).map_err(|e| format!("{}: {e}", file.display()))
}
