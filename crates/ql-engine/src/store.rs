//! Persistence adapter: save stores and load/save/reset.
//!
//! Progress lives as one JSON snapshot under a single fixed key in a
//! key-value store. [`restore`] reads it once at startup, [`save`] rewrites
//! it after every resolved transition, and [`reset`] produces the canonical
//! fresh state without touching the store at all.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use ql_core::SceneGraph;

use crate::error::{EngineError, EngineResult};
use crate::player::{PlayerState, STARTING_HEALTH};

/// The fixed key all progress is stored under.
pub const SAVE_KEY: &str = "questline.save";

/// A synchronous key-value store holding the save snapshot.
///
/// One key, whole-value replace on write. No transactional guarantees
/// beyond that are assumed.
pub trait SaveStore {
    /// Read the value under `key`, or `None` if absent.
    fn get(&self, key: &str) -> EngineResult<Option<String>>;

    /// Write `value` under `key`, replacing any prior value.
    fn put(&mut self, key: &str, value: &str) -> EngineResult<()>;

    /// Remove the value under `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> EngineResult<()>;
}

/// In-memory store, for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemoryStore {
    fn get(&self, key: &str) -> EngineResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> EngineResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> EngineResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store: one file per key under a directory.
///
/// Writes go through a temporary file and a rename so a reader only ever
/// observes the old snapshot or the new one, never a partial write.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on the
    /// first write, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The file a key is stored in.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SaveStore for FileStore {
    fn get(&self, key: &str) -> EngineResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> EngineResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> EngineResult<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// The canonical initial state: the graph's start scene, health 10, empty
/// inventory. Does not write to any store; the caller decides whether and
/// when to persist.
pub fn reset(graph: &SceneGraph) -> PlayerState {
    PlayerState::new(graph.start().clone(), STARTING_HEALTH)
}

/// Restore the saved snapshot, or the initial state when none exists.
///
/// A snapshot that exists but does not describe a valid state for `graph`
/// is a [`EngineError::CorruptSave`]: malformed JSON, a scene id the graph
/// does not define (a save from a different adventure, say), or negative
/// health. The fallback policy belongs to the caller (see
/// [`restore_or_reset`]).
pub fn restore(store: &impl SaveStore, graph: &SceneGraph) -> EngineResult<PlayerState> {
    let Some(raw) = store.get(SAVE_KEY)? else {
        return Ok(reset(graph));
    };

    let state: PlayerState =
        serde_json::from_str(&raw).map_err(|e| EngineError::CorruptSave(e.to_string()))?;

    if !graph.contains(&state.scene_id) {
        return Err(EngineError::CorruptSave(format!(
            "scene \"{}\" is not in the loaded graph",
            state.scene_id
        )));
    }
    if state.health < 0 {
        return Err(EngineError::CorruptSave(format!(
            "negative health {}",
            state.health
        )));
    }

    Ok(state)
}

/// Restore, treating a corrupt snapshot like an absent one. Store I/O
/// failures still propagate.
pub fn restore_or_reset(store: &impl SaveStore, graph: &SceneGraph) -> EngineResult<PlayerState> {
    match restore(store, graph) {
        Ok(state) => Ok(state),
        Err(EngineError::CorruptSave(_)) => Ok(reset(graph)),
        Err(e) => Err(e),
    }
}

/// Serialize the state and overwrite the stored snapshot.
pub fn save(store: &mut impl SaveStore, state: &PlayerState) -> EngineResult<()> {
    let raw =
        serde_json::to_string(state).map_err(|e| EngineError::CorruptSave(e.to_string()))?;
    store.put(SAVE_KEY, &raw)
}
