//! Drag-Reorder Coordinator
//!
//! Turns one pointer gesture (start, hover, release) into at most one
//! [`TierListStore::move_item`] call. The coordinator owns no board data;
//! it only remembers which item is in flight and where it came from.
//!
//! Drop target ids are opaque strings from the UI: a tier id (the tier row,
//! its swatch and its label all report the tier id) or an item id. Anything
//! else, including no target at all, sends the item back to the pool.

use serde::{Deserialize, Serialize};

use crate::domain::{ContainerId, ItemId, TierId};
use crate::ids::IdGenerator;
use crate::state::{TierListSnapshot, TierListStore};

/// Typed gesture input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GestureEvent {
    /// Pointer grabbed a draggable item
    Start { item_id: ItemId },
    /// Pointer moved over a drop target (`None` = over nothing droppable)
    Over { target: Option<String> },
    /// Pointer released (`None` = outside every droppable area)
    Release { target: Option<String> },
    /// Host aborted the gesture (Escape, window blur)
    Cancel,
}

/// State of the gesture in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub active_item: ItemId,
    pub source: ContainerId,
    /// Tier under the pointer, for highlighting only
    pub hovered: Option<TierId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// What a gesture event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Event arrived while idle
    Ignored,
    Started { source: ContainerId },
    Hovering { tier: Option<TierId> },
    Moved {
        item_id: ItemId,
        from: ContainerId,
        to: ContainerId,
        index: usize,
    },
    /// Dropped back onto its own tier
    SameTier,
    /// The board changed under the gesture and the move was refused
    Stale,
    Cancelled,
}

/// A move computed from a release, not yet applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    pub item_id: ItemId,
    pub source: ContainerId,
    pub target: ContainerId,
    pub index: usize,
}

/// Where a drop target id lands
#[derive(Debug, Clone, PartialEq, Eq)]
struct TierDrop {
    tier: TierId,
    index: usize,
}

/// Tier addressed by `target`, directly or through one of its items
pub fn resolve_tier<'a>(snapshot: &'a TierListSnapshot, target: &str) -> Option<&'a TierId> {
    let item_id = ItemId::new(target);
    snapshot
        .tiers
        .iter()
        .find(|tier| tier.id.as_str() == target || tier.contains(&item_id))
        .map(|tier| &tier.id)
}

fn resolve_drop(snapshot: &TierListSnapshot, target: &str) -> Option<TierDrop> {
    let tier_id = resolve_tier(snapshot, target)?;
    let tier = snapshot.tier(tier_id)?;
    // insert before a hovered item, append when the tier itself was hit
    let index = tier
        .position_of(&ItemId::new(target))
        .unwrap_or(tier.items.len());
    Some(TierDrop {
        tier: tier.id.clone(),
        index,
    })
}

/// Decide what releasing `session` over `target` should do
///
/// Returns `None` for a same-tier drop.
pub fn plan_release(
    snapshot: &TierListSnapshot,
    session: &DragSession,
    target: Option<&str>,
) -> Option<MovePlan> {
    let drop = target.and_then(|t| resolve_drop(snapshot, t));
    match drop {
        Some(TierDrop { tier, index }) => {
            if session.source.tier_id() == Some(&tier) {
                return None;
            }
            Some(MovePlan {
                item_id: session.active_item.clone(),
                source: session.source.clone(),
                target: ContainerId::Tier(tier),
                index,
            })
        }
        None => Some(MovePlan {
            item_id: session.active_item.clone(),
            source: session.source.clone(),
            target: ContainerId::Pool,
            index: snapshot.pool.len(),
        }),
    }
}

/// Idle/Dragging gesture state machine
#[derive(Debug, Clone, Default)]
pub struct DragCoordinator {
    phase: DragPhase,
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging(session) => Some(session),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session().is_some()
    }

    pub fn active_item(&self) -> Option<&ItemId> {
        self.session().map(|s| &s.active_item)
    }

    pub fn hovered_tier(&self) -> Option<&TierId> {
        self.session().and_then(|s| s.hovered.as_ref())
    }

    /// Feed one gesture event, mutating `store` only on release
    pub fn handle<G: IdGenerator>(
        &mut self,
        store: &mut TierListStore<G>,
        event: GestureEvent,
    ) -> GestureOutcome {
        match event {
            GestureEvent::Start { item_id } => self.start(store.snapshot(), item_id),
            GestureEvent::Over { target } => self.hover(store.snapshot(), target.as_deref()),
            GestureEvent::Release { target } => self.release(store, target.as_deref()),
            GestureEvent::Cancel => self.cancel(),
        }
    }

    /// Begin a gesture; a session left over from a lost release is replaced
    pub fn start(&mut self, snapshot: &TierListSnapshot, item_id: ItemId) -> GestureOutcome {
        let source = snapshot
            .tier_containing(&item_id)
            .map(|tier| ContainerId::Tier(tier.id.clone()))
            .unwrap_or(ContainerId::Pool);
        if self.is_dragging() {
            log::debug!("drag start for {} replaces a stale gesture", item_id);
        }
        self.phase = DragPhase::Dragging(DragSession {
            active_item: item_id,
            source: source.clone(),
            hovered: None,
        });
        GestureOutcome::Started { source }
    }

    pub fn hover(&mut self, snapshot: &TierListSnapshot, target: Option<&str>) -> GestureOutcome {
        let DragPhase::Dragging(session) = &mut self.phase else {
            return GestureOutcome::Ignored;
        };
        session.hovered = target.and_then(|t| resolve_tier(snapshot, t)).cloned();
        GestureOutcome::Hovering {
            tier: session.hovered.clone(),
        }
    }

    /// Finish the gesture, applying its move if there is one
    pub fn release<G: IdGenerator>(
        &mut self,
        store: &mut TierListStore<G>,
        target: Option<&str>,
    ) -> GestureOutcome {
        let DragPhase::Dragging(session) = std::mem::take(&mut self.phase) else {
            return GestureOutcome::Ignored;
        };
        let Some(plan) = plan_release(store.snapshot(), &session, target) else {
            log::debug!("drop of {} on its own tier ignored", session.active_item);
            return GestureOutcome::SameTier;
        };
        if store.move_item(&plan.item_id, &plan.source, &plan.target, plan.index) {
            GestureOutcome::Moved {
                item_id: plan.item_id,
                from: plan.source,
                to: plan.target,
                index: plan.index,
            }
        } else {
            GestureOutcome::Stale
        }
    }

    /// Abort the gesture without touching the board
    pub fn cancel(&mut self) -> GestureOutcome {
        match std::mem::take(&mut self.phase) {
            DragPhase::Idle => GestureOutcome::Ignored,
            DragPhase::Dragging(_) => GestureOutcome::Cancelled,
        }
    }
}
