//! Domain Layer
//!
//! Items, tiers and the containers that hold them.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod item;
mod tier;
mod container;

pub use entity::{Entity, DomainError, DomainResult};
pub use item::{Item, ItemId, ItemKind, ItemContent, ItemPatch};
pub use tier::{Tier, TierId, TierPatch};
pub use container::ContainerId;
