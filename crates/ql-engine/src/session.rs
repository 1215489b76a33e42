//! Interactive session facade for front ends.
//!
//! A [`Session`] owns the graph, the single live [`PlayerState`], and the
//! save store, and exposes exactly the surface the outside adapters need:
//! [`Session::view`] for the presentation layer, [`Session::choose`] for
//! the input layer, and [`Session::reset`] for the reset trigger. Each
//! chosen link runs resolve → save before control returns.

use ql_core::{Scene, SceneGraph};

use crate::error::{EngineError, EngineResult};
use crate::player::PlayerState;
use crate::resolver::resolve;
use crate::store::{self, SaveStore};
use crate::visibility::visible_links;

/// Everything a presentation layer needs to draw the current moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneView {
    /// Active scene's headline.
    pub title: String,
    /// Active scene's flavour text.
    pub body: String,
    /// Current health.
    pub health: i64,
    /// Held items, in sorted order.
    pub inventory: Vec<String>,
    /// The visible links, in display order.
    pub choices: Vec<ChoiceView>,
}

/// One selectable link as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    /// Selection index, the value to pass to [`Session::choose`].
    pub index: usize,
    /// Label to display.
    pub text: String,
}

/// A running playthrough: graph + player state + save store.
pub struct Session<S: SaveStore> {
    graph: SceneGraph,
    state: PlayerState,
    store: S,
}

impl<S: SaveStore> Session<S> {
    /// Start a session from an explicit state.
    pub fn new(graph: SceneGraph, store: S, state: PlayerState) -> Self {
        Self {
            graph,
            state,
            store,
        }
    }

    /// Start a session from the stored snapshot, falling back to a fresh
    /// state when none exists or the snapshot is corrupt.
    pub fn restore(graph: SceneGraph, store: S) -> EngineResult<Self> {
        let state = store::restore_or_reset(&store, &graph)?;
        Ok(Self::new(graph, store, state))
    }

    /// The scene graph being played.
    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// The current player state.
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// The active scene.
    ///
    /// Always defined: fresh and reset states start on the validated
    /// start scene, restored snapshots are checked against the graph, and
    /// the resolver only moves along validated links.
    pub fn scene(&self) -> &Scene {
        self.graph
            .scene(&self.state.scene_id)
            .expect("scene_id always names a defined scene")
    }

    /// True when the active scene has no outgoing links.
    pub fn is_over(&self) -> bool {
        self.scene().is_terminal()
    }

    /// Snapshot of the current moment for the presentation layer.
    pub fn view(&self) -> SceneView {
        let scene = self.scene();
        SceneView {
            title: scene.title.clone(),
            body: scene.body.clone(),
            health: self.state.health,
            inventory: self.state.inventory.iter().cloned().collect(),
            choices: visible_links(scene, &self.state)
                .into_iter()
                .enumerate()
                .map(|(index, link)| ChoiceView {
                    index,
                    text: link.text.clone(),
                })
                .collect(),
        }
    }

    /// Select the `index`-th visible link of the active scene, resolve the
    /// transition, and persist the result.
    pub fn choose(&mut self, index: usize) -> EngineResult<()> {
        let links = visible_links(self.scene(), &self.state);
        let link = links
            .get(index)
            .copied()
            .ok_or(EngineError::InvalidChoice(index))?;

        let next = resolve(&self.graph, &self.state, link);
        self.state = next;
        store::save(&mut self.store, &self.state)
    }

    /// Replace the player state with the canonical initial state.
    ///
    /// Deliberately does not persist; the old snapshot survives until the
    /// next resolved transition overwrites it.
    pub fn reset(&mut self) {
        self.state = store::reset(&self.graph);
    }
}
