//! Player state: position, health, inventory.

use std::collections::BTreeSet;

use ql_core::SceneId;
use serde::{Deserialize, Serialize};

/// Health a fresh player starts with.
pub const STARTING_HEALTH: i64 = 10;

/// The single mutable record of the player's progress.
///
/// Serializes to the persisted save format: `sceneId` and `health` as-is,
/// and the inventory as a map from item id to a truthy marker
/// (`{"sword": 1}`), where presence alone means held. Health never goes
/// below 0; there is no upper bound (negative damage heals past the
/// starting value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Id of the scene the player is currently on.
    pub scene_id: SceneId,
    /// Current health. Invariant: always >= 0.
    pub health: i64,
    /// Items currently held. Membership only, no quantities.
    #[serde(with = "inventory_map")]
    pub inventory: BTreeSet<String>,
}

impl PlayerState {
    /// Create a player at the given scene with the given health and an
    /// empty inventory.
    pub fn new(scene_id: impl Into<SceneId>, health: i64) -> Self {
        Self {
            scene_id: scene_id.into(),
            health,
            inventory: BTreeSet::new(),
        }
    }

    /// Check if the player holds an item.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.contains(item)
    }

    /// Add an item to the inventory. Adding a held item is a no-op.
    pub fn add_item(&mut self, item: impl Into<String>) {
        self.inventory.insert(item.into());
    }

    /// Remove an item from the inventory. Returns false if it was not
    /// held; that is not an error.
    pub fn remove_item(&mut self, item: &str) -> bool {
        self.inventory.remove(item)
    }
}

/// Serde codec for the inventory: a set on the Rust side, a map from item
/// id to the marker `1` on the wire. Marker values are ignored on read.
mod inventory_map {
    use std::collections::{BTreeMap, BTreeSet};

    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        inventory: &BTreeSet<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(inventory.iter().map(|item| (item, 1u8)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeSet<String>, D::Error> {
        let map = BTreeMap::<String, IgnoredAny>::deserialize(deserializer)?;
        Ok(map.into_keys().collect())
    }
}
