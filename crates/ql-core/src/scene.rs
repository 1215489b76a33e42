use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for a scene in the graph. Author-supplied, unique per graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(pub String);

impl SceneId {
    /// Create a scene id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SceneId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A node in the narrative graph: display text plus outgoing links.
///
/// Scenes are immutable once the graph is constructed. A scene with no
/// links is terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Headline shown for the scene.
    pub title: String,
    /// Flavour text shown under the title.
    pub body: String,
    /// Outgoing links, in display order.
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Scene {
    /// Create a new scene with the given title and body and no links.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            links: Vec::new(),
        }
    }

    /// Add a link.
    pub fn with_link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// True if this scene has no outgoing links.
    pub fn is_terminal(&self) -> bool {
        self.links.is_empty()
    }
}

/// A directed, conditionally-visible choice leading out of a scene.
///
/// Every field but `text` is optional. A link with no `target` keeps the
/// player on the current scene (unless the transition kills them).
/// Serialized field names are camelCase to match the external
/// content-authoring format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Label shown to the player.
    pub text: String,
    /// Scene to move to when selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<SceneId>,
    /// Health delta subtracted on selection. Negative values heal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<i64>,
    /// Item added to the inventory on selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gain: Option<String>,
    /// Item removed from the inventory on selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lose: Option<String>,
    /// Item the player must hold for this link to be visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_present: Option<String>,
    /// Item the player must NOT hold for this link to be visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_absent: Option<String>,
}

impl Link {
    /// Create a new link with the given label and no effects or guards.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target: None,
            damage: None,
            gain: None,
            lose: None,
            requires_present: None,
            requires_absent: None,
        }
    }

    /// Set the target scene.
    pub fn with_target(mut self, target: impl Into<SceneId>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the health delta.
    pub fn with_damage(mut self, damage: i64) -> Self {
        self.damage = Some(damage);
        self
    }

    /// Set the item gained.
    pub fn with_gain(mut self, item: impl Into<String>) -> Self {
        self.gain = Some(item.into());
        self
    }

    /// Set the item lost.
    pub fn with_lose(mut self, item: impl Into<String>) -> Self {
        self.lose = Some(item.into());
        self
    }

    /// Require an item to be held for visibility.
    pub fn requires_present(mut self, item: impl Into<String>) -> Self {
        self.requires_present = Some(item.into());
        self
    }

    /// Require an item to be absent for visibility.
    pub fn requires_absent(mut self, item: impl Into<String>) -> Self {
        self.requires_absent = Some(item.into());
        self
    }
}
