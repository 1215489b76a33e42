use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::scene::{Scene, SceneId};

fn default_start() -> SceneId {
    SceneId::new("start")
}

fn default_death() -> SceneId {
    SceneId::new("graveyard")
}

/// The serde form of a scene graph, as supplied by a content author.
///
/// `start` and `death` default to `"start"` and `"graveyard"` when the
/// document omits them. Turn a config into a usable graph with
/// [`SceneGraph::new`], which validates all references.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Id of the scene a fresh player begins on.
    #[serde(default = "default_start")]
    pub start: SceneId,
    /// Id of the scene forced when health drops below 1.
    #[serde(default = "default_death")]
    pub death: SceneId,
    /// All scenes, keyed by id.
    pub scenes: BTreeMap<SceneId, Scene>,
}

/// A validated, read-only mapping from scene id to scene.
///
/// Construction checks every reference eagerly: each link target and both
/// distinguished ids must name a defined scene. After construction no
/// lookup along a link can dangle.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    start: SceneId,
    death: SceneId,
    scenes: BTreeMap<SceneId, Scene>,
}

impl SceneGraph {
    /// Validate a configuration and build the graph.
    pub fn new(config: GraphConfig) -> CoreResult<Self> {
        let GraphConfig {
            start,
            death,
            scenes,
        } = config;

        if scenes.is_empty() {
            return Err(CoreError::EmptyGraph);
        }

        for (id, scene) in &scenes {
            for link in &scene.links {
                if let Some(target) = &link.target
                    && !scenes.contains_key(target)
                {
                    return Err(CoreError::BrokenReference {
                        referrer: format!("scene \"{id}\""),
                        target: target.clone(),
                    });
                }
            }
        }

        if !scenes.contains_key(&start) {
            return Err(CoreError::BrokenReference {
                referrer: "the start id".to_string(),
                target: start,
            });
        }
        if !scenes.contains_key(&death) {
            return Err(CoreError::BrokenReference {
                referrer: "the death id".to_string(),
                target: death,
            });
        }

        Ok(Self {
            start,
            death,
            scenes,
        })
    }

    /// Parse a JSON configuration document and build the graph.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let config: GraphConfig = serde_json::from_str(json)?;
        Self::new(config)
    }

    /// Read a JSON configuration file and build the graph.
    pub fn from_json_file(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Look up a scene by id.
    pub fn scene(&self, id: &SceneId) -> Option<&Scene> {
        self.scenes.get(id)
    }

    /// True if a scene with this id is defined.
    pub fn contains(&self, id: &SceneId) -> bool {
        self.scenes.contains_key(id)
    }

    /// The id of the scene a fresh player begins on.
    pub fn start(&self) -> &SceneId {
        &self.start
    }

    /// The id of the scene forced when health drops below 1.
    pub fn death(&self) -> &SceneId {
        &self.death
    }

    /// Number of scenes in the graph.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// True if the graph has no scenes. Never true for a constructed graph.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Iterate over all scenes in id order.
    pub fn scenes(&self) -> impl Iterator<Item = (&SceneId, &Scene)> {
        self.scenes.iter()
    }
}
