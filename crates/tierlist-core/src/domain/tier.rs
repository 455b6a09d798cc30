//! Tier Entity
//!
//! A named, colored bucket holding an ordered list of items.

use std::fmt;

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::item::{Item, ItemId};

/// Unique tier identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierId(String);

impl TierId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TierId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A ranked tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    /// Unique identifier
    pub id: TierId,
    /// Label shown on the swatch (e.g. "S", "A+")
    pub label: String,
    /// CSS color value (e.g. "#FF7F7F", "hsl(120, 70%, 60%)")
    pub color: String,
    /// Items ranked in this tier, in display order
    pub items: Vec<Item>,
}

impl Tier {
    pub fn new(id: TierId, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            color: color.into(),
            items: Vec::new(),
        }
    }

    pub fn contains(&self, item_id: &ItemId) -> bool {
        self.items.iter().any(|item| &item.id == item_id)
    }

    pub fn position_of(&self, item_id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == item_id)
    }

    pub fn apply(&mut self, patch: TierPatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

impl Entity for Tier {
    type Id = TierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Partial tier update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPatch {
    pub label: Option<String>,
    pub color: Option<String>,
}

impl TierPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            color: None,
        }
    }

    pub fn color(color: impl Into<String>) -> Self {
        Self {
            label: None,
            color: Some(color.into()),
        }
    }
}
