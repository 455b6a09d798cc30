//! Item Entity
//!
//! A rankable item: either a text label or an image.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

/// Unique item identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Item kind discriminator, used in patches and when parsing form input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Text,
    Image,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Text => "text",
            ItemKind::Image => "image",
        }
    }
}

impl FromStr for ItemKind {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "text" => Ok(ItemKind::Text),
            "image" => Ok(ItemKind::Image),
            other => Err(DomainError::InvalidInput(format!("unknown item kind '{}'", other))),
        }
    }
}

/// What an item shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum ItemContent {
    /// Plain text label
    Text(String),
    /// Image reference (usually a `data:` URL produced by a file upload)
    Image(String),
}

impl ItemContent {
    pub fn text(text: impl Into<String>) -> Self {
        ItemContent::Text(text.into())
    }

    /// Image content; an empty reference cannot be rendered and is rejected
    pub fn image(src: impl Into<String>) -> DomainResult<Self> {
        let src = src.into();
        if src.trim().is_empty() {
            return Err(DomainError::InvalidInput("image source is empty".to_string()));
        }
        Ok(ItemContent::Image(src))
    }

    /// Build content from a kind and a raw payload
    pub fn from_parts(kind: ItemKind, payload: String) -> Self {
        match kind {
            ItemKind::Text => ItemContent::Text(payload),
            ItemKind::Image => ItemContent::Image(payload),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            ItemContent::Text(_) => ItemKind::Text,
            ItemContent::Image(_) => ItemKind::Image,
        }
    }

    /// Raw payload: the text value or the image reference
    pub fn payload(&self) -> &str {
        match self {
            ItemContent::Text(s) | ItemContent::Image(s) => s,
        }
    }

    fn into_payload(self) -> String {
        match self {
            ItemContent::Text(s) | ItemContent::Image(s) => s,
        }
    }
}

/// A rankable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(flatten)]
    pub content: ItemContent,
    /// Display font size for text items (None = stylesheet default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
}

impl Item {
    pub fn new(id: ItemId, content: ItemContent) -> Self {
        Self {
            id,
            content,
            font_size: None,
        }
    }

    pub fn with_font_size(mut self, font_size: Option<f32>) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn kind(&self) -> ItemKind {
        self.content.kind()
    }

    /// Apply a partial update in place
    ///
    /// A kind change without new content re-tags the existing payload.
    pub fn apply(&mut self, patch: ItemPatch) {
        let ItemPatch { kind, content, font_size } = patch;
        if kind.is_some() || content.is_some() {
            let kind = kind.unwrap_or_else(|| self.content.kind());
            let current = std::mem::replace(&mut self.content, ItemContent::Text(String::new()));
            let payload = content.unwrap_or_else(|| current.into_payload());
            self.content = ItemContent::from_parts(kind, payload);
        }
        if let Some(size) = font_size {
            self.font_size = size;
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Partial item update; `None` fields are left untouched
///
/// `font_size` is two-level: `Some(None)` clears the size back to the
/// stylesheet default, `Some(Some(px))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub kind: Option<ItemKind>,
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<Option<f32>>,
}

impl ItemPatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Replace the item with an image
    pub fn image(src: impl Into<String>) -> Self {
        Self {
            kind: Some(ItemKind::Image),
            content: Some(src.into()),
            ..Default::default()
        }
    }

    pub fn font_size(size: f32) -> Self {
        Self {
            font_size: Some(Some(size)),
            ..Default::default()
        }
    }

    pub fn reset_font_size() -> Self {
        Self {
            font_size: Some(None),
            ..Default::default()
        }
    }
}
