//! Tier List Core
//!
//! Layered like the rest of the app:
//! - domain: items, tiers, containers and their partial updates
//! - state: the board's state container
//! - coordinator: drag gesture state machine driving item moves
//!
//! Nothing here touches the DOM, so the whole model runs under native tests.

pub mod domain;
pub mod ids;
pub mod presets;
pub mod state;
pub mod coordinator;

pub use domain::{
    ContainerId, DomainError, DomainResult, Entity, Item, ItemContent, ItemId, ItemKind, ItemPatch,
    Tier, TierId, TierPatch,
};
pub use ids::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use presets::{tier_color_for_hue, DEFAULT_TIERS, NEW_TEXT_ITEM, NEW_TIER_LABEL};
pub use state::{TierListSnapshot, TierListStore};
pub use coordinator::{
    plan_release, resolve_tier, DragCoordinator, DragPhase, DragSession, GestureEvent,
    GestureOutcome, MovePlan,
};
