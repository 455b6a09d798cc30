//! Tier List State Container
//!
//! Single owner of the tiers and the unassigned pool. Every mutation goes
//! through [`TierListStore`], and every mutation either commits completely or
//! leaves the board untouched.
//!
//! Lookups are tolerant: an unknown tier or item id turns the operation into
//! a no-op that returns `false`, never an error. Drag state held by the UI can
//! go stale between gesture start and release, so a missing id is expected.

use serde::{Deserialize, Serialize};

use crate::domain::{
    ContainerId, DomainError, DomainResult, Item, ItemContent, ItemId, ItemPatch, Tier, TierId,
    TierPatch,
};
use crate::ids::{IdGenerator, UuidIdGenerator};
use crate::presets::DEFAULT_TIERS;

/// Read-only view of the board
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierListSnapshot {
    /// Tiers in ranking order
    pub tiers: Vec<Tier>,
    /// Unassigned items
    pub pool: Vec<Item>,
}

impl TierListSnapshot {
    pub fn tier(&self, id: &TierId) -> Option<&Tier> {
        self.tiers.iter().find(|tier| &tier.id == id)
    }

    /// Index of a tier in ranking order
    pub fn tier_position(&self, id: &TierId) -> DomainResult<usize> {
        self.tiers
            .iter()
            .position(|tier| &tier.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("tier {}", id)))
    }

    /// Tier whose item list holds `item_id`
    pub fn tier_containing(&self, item_id: &ItemId) -> Option<&Tier> {
        self.tiers.iter().find(|tier| tier.contains(item_id))
    }

    /// Container and index of an item
    pub fn locate(&self, item_id: &ItemId) -> Option<(ContainerId, usize)> {
        if let Some(index) = self.pool.iter().position(|item| &item.id == item_id) {
            return Some((ContainerId::Pool, index));
        }
        self.tiers.iter().find_map(|tier| {
            tier.position_of(item_id)
                .map(|index| (ContainerId::Tier(tier.id.clone()), index))
        })
    }

    pub fn container_of(&self, item_id: &ItemId) -> Option<ContainerId> {
        self.locate(item_id).map(|(container, _)| container)
    }

    pub fn find_item(&self, item_id: &ItemId) -> Option<&Item> {
        self.pool
            .iter()
            .chain(self.tiers.iter().flat_map(|tier| tier.items.iter()))
            .find(|item| &item.id == item_id)
    }

    /// Items held by a container, `None` if the tier does not exist
    pub fn items_in(&self, container: &ContainerId) -> Option<&[Item]> {
        match container {
            ContainerId::Pool => Some(&self.pool),
            ContainerId::Tier(id) => self.tier(id).map(|tier| tier.items.as_slice()),
        }
    }

    /// Total number of items across the pool and all tiers
    pub fn item_count(&self) -> usize {
        self.pool.len() + self.tiers.iter().map(|tier| tier.items.len()).sum::<usize>()
    }

    fn tier_mut(&mut self, id: &TierId) -> Option<&mut Tier> {
        self.tiers.iter_mut().find(|tier| &tier.id == id)
    }

    fn items_in_mut(&mut self, container: &ContainerId) -> Option<&mut Vec<Item>> {
        match container {
            ContainerId::Pool => Some(&mut self.pool),
            ContainerId::Tier(id) => self.tier_mut(id).map(|tier| &mut tier.items),
        }
    }

    fn item_mut(&mut self, item_id: &ItemId) -> Option<&mut Item> {
        self.pool
            .iter_mut()
            .chain(self.tiers.iter_mut().flat_map(|tier| tier.items.iter_mut()))
            .find(|item| &item.id == item_id)
    }
}

/// The board's state container
#[derive(Debug, Clone)]
pub struct TierListStore<G = UuidIdGenerator> {
    state: TierListSnapshot,
    ids: G,
}

impl Default for TierListStore<UuidIdGenerator> {
    fn default() -> Self {
        Self::with_default_tiers(UuidIdGenerator)
    }
}

impl<G: IdGenerator> TierListStore<G> {
    /// Empty board: no tiers, empty pool
    pub fn new(ids: G) -> Self {
        Self::from_snapshot(TierListSnapshot::default(), ids)
    }

    /// Board seeded with the S..C preset tiers
    pub fn with_default_tiers(ids: G) -> Self {
        let tiers = DEFAULT_TIERS
            .iter()
            .map(|(id, label, color)| Tier::new(TierId::new(*id), *label, *color))
            .collect();
        Self::from_snapshot(TierListSnapshot { tiers, pool: Vec::new() }, ids)
    }

    pub fn from_snapshot(state: TierListSnapshot, ids: G) -> Self {
        Self { state, ids }
    }

    pub fn snapshot(&self) -> &TierListSnapshot {
        &self.state
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.state.tiers
    }

    pub fn pool(&self) -> &[Item] {
        &self.state.pool
    }

    pub fn tier(&self, id: &TierId) -> Option<&Tier> {
        self.state.tier(id)
    }

    pub fn find_item(&self, item_id: &ItemId) -> Option<&Item> {
        self.state.find_item(item_id)
    }

    pub fn container_of(&self, item_id: &ItemId) -> Option<ContainerId> {
        self.state.container_of(item_id)
    }

    pub fn item_count(&self) -> usize {
        self.state.item_count()
    }

    // ========================
    // Tier Operations
    // ========================

    /// Append an empty tier
    pub fn add_tier(&mut self, label: impl Into<String>, color: impl Into<String>) -> TierId {
        let id = TierId::new(self.ids.next_id());
        self.state.tiers.push(Tier::new(id.clone(), label, color));
        log::debug!("added tier {}", id);
        id
    }

    /// Remove a tier, handing its items back to the end of the pool
    pub fn remove_tier(&mut self, id: &TierId) -> bool {
        let Ok(index) = self.state.tier_position(id) else {
            log::debug!("remove_tier: tier {} not found", id);
            return false;
        };
        let tier = self.state.tiers.remove(index);
        log::debug!("removed tier {}, returning {} items to pool", id, tier.items.len());
        self.state.pool.extend(tier.items);
        true
    }

    pub fn update_tier(&mut self, id: &TierId, patch: TierPatch) -> bool {
        match self.state.tier_mut(id) {
            Some(tier) => {
                tier.apply(patch);
                true
            }
            None => {
                log::debug!("update_tier: tier {} not found", id);
                false
            }
        }
    }

    /// Move the tier at `from` so it ends up at `to`
    ///
    /// An out-of-range `from` is a no-op; `to` is clamped to the last slot.
    pub fn reorder_tiers(&mut self, from: usize, to: usize) -> bool {
        let len = self.state.tiers.len();
        if from >= len {
            log::debug!("reorder_tiers: index {} out of range ({} tiers)", from, len);
            return false;
        }
        let to = to.min(len - 1);
        if from == to {
            return false;
        }
        let tier = self.state.tiers.remove(from);
        self.state.tiers.insert(to, tier);
        true
    }

    // ========================
    // Item Operations
    // ========================

    /// Append a new item to the pool
    pub fn add_item(&mut self, content: ItemContent, font_size: Option<f32>) -> ItemId {
        let id = ItemId::new(self.ids.next_id());
        let item = Item::new(id.clone(), content).with_font_size(font_size);
        log::debug!("added {} item {}", item.kind().as_str(), id);
        self.state.pool.push(item);
        id
    }

    /// Patch an item wherever it lives
    pub fn update_item(&mut self, id: &ItemId, patch: ItemPatch) -> bool {
        match self.state.item_mut(id) {
            Some(item) => {
                item.apply(patch);
                true
            }
            None => {
                log::debug!("update_item: item {} not found", id);
                false
            }
        }
    }

    /// Delete an item from whichever container holds it
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        let Some((container, index)) = self.state.locate(id) else {
            log::debug!("remove_item: item {} not found", id);
            return false;
        };
        match self.state.items_in_mut(&container) {
            Some(items) => {
                items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Transfer an item from `source` into `target` at `index`
    ///
    /// The item must currently sit in `source` and `target` must exist,
    /// otherwise nothing changes. `index` is clamped to the target length
    /// measured after the item has left its source.
    pub fn move_item(
        &mut self,
        item_id: &ItemId,
        source: &ContainerId,
        target: &ContainerId,
        index: usize,
    ) -> bool {
        let from = self
            .state
            .items_in(source)
            .and_then(|items| items.iter().position(|item| &item.id == item_id));
        let Some(from) = from else {
            log::debug!("move_item: item {} not in {}", item_id, source);
            return false;
        };
        if self.state.items_in(target).is_none() {
            log::debug!("move_item: target {} not found", target);
            return false;
        }

        let Some(item) = self.state.items_in_mut(source).map(|items| items.remove(from)) else {
            return false;
        };
        if let Some(items) = self.state.items_in_mut(target) {
            let at = index.min(items.len());
            items.insert(at, item);
            log::debug!("moved item {} from {} to {}[{}]", item_id, source, target, at);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdGenerator;

    fn empty_store() -> TierListStore<SequentialIdGenerator> {
        TierListStore::new(SequentialIdGenerator::new("id"))
    }

    fn text(s: &str) -> ItemContent {
        ItemContent::text(s)
    }

    fn labels(store: &TierListStore<SequentialIdGenerator>) -> Vec<String> {
        store.tiers().iter().map(|tier| tier.label.clone()).collect()
    }

    fn pool_ids(store: &TierListStore<SequentialIdGenerator>) -> Vec<String> {
        store.pool().iter().map(|item| item.id.to_string()).collect()
    }

    #[test]
    fn test_default_tiers() {
        let store = TierListStore::with_default_tiers(SequentialIdGenerator::default());
        assert_eq!(labels(&store), vec!["S", "A+", "A", "A-", "B+", "B", "B-", "C"]);
        assert_eq!(store.tiers()[0].id.as_str(), "s");
        assert!(store.pool().is_empty());
    }

    #[test]
    fn test_add_tier_appends_empty() {
        let mut store = empty_store();
        let a = store.add_tier("A", "#FFDF7F");
        let b = store.add_tier("B", "#7FFF7F");
        assert_ne!(a, b);
        assert_eq!(labels(&store), vec!["A", "B"]);
        assert!(store.tier(&b).unwrap().items.is_empty());
    }

    #[test]
    fn test_remove_tier_returns_items_to_pool() {
        let mut store = empty_store();
        let tier = store.add_tier("S", "#FF7F7F");
        let existing = store.add_item(text("P"), None);
        let x = store.add_item(text("X"), None);
        let y = store.add_item(text("Y"), None);
        assert!(store.move_item(&x, &ContainerId::Pool, &ContainerId::Tier(tier.clone()), 0));
        assert!(store.move_item(&y, &ContainerId::Pool, &ContainerId::Tier(tier.clone()), 1));

        assert!(store.remove_tier(&tier));
        assert!(store.tier(&tier).is_none());
        assert_eq!(pool_ids(&store), vec![existing.to_string(), x.to_string(), y.to_string()]);
    }

    #[test]
    fn test_update_tier_partial() {
        let mut store = empty_store();
        let id = store.add_tier("S", "#FF7F7F");
        assert!(store.update_tier(&id, TierPatch::color("#123456")));
        let tier = store.tier(&id).unwrap();
        assert_eq!(tier.label, "S");
        assert_eq!(tier.color, "#123456");
    }

    #[test]
    fn test_update_item_in_tier() {
        let mut store = empty_store();
        let tier = store.add_tier("S", "#FF7F7F");
        let item = store.add_item(text("Foo"), Some(14.0));
        store.move_item(&item, &ContainerId::Pool, &ContainerId::Tier(tier.clone()), 0);

        assert!(store.update_item(&item, ItemPatch::content("Bar")));
        let updated = &store.tier(&tier).unwrap().items[0];
        assert_eq!(updated.content, text("Bar"));
        assert_eq!(updated.font_size, Some(14.0));
    }

    #[test]
    fn test_remove_item_from_tier() {
        let mut store = empty_store();
        let tier = store.add_tier("S", "#FF7F7F");
        let item = store.add_item(text("Foo"), None);
        store.move_item(&item, &ContainerId::Pool, &ContainerId::Tier(tier.clone()), 0);

        assert!(store.remove_item(&item));
        assert_eq!(store.item_count(), 0);
        assert!(!store.remove_item(&item));
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut store = TierListStore::with_default_tiers(SequentialIdGenerator::default());
        let item = store.add_item(text("Foo"), None);
        let before = store.snapshot().clone();

        let ghost_tier = TierId::from("ghost");
        let ghost_item = ItemId::from("ghost");
        assert!(!store.remove_tier(&ghost_tier));
        assert!(!store.update_tier(&ghost_tier, TierPatch::label("X")));
        assert!(!store.update_item(&ghost_item, ItemPatch::content("X")));
        assert!(!store.remove_item(&ghost_item));
        assert!(!store.move_item(&ghost_item, &ContainerId::Pool, &ContainerId::Tier("s".into()), 0));
        // item exists but not in the claimed source
        assert!(!store.move_item(&item, &ContainerId::Tier("s".into()), &ContainerId::Pool, 0));
        // target tier missing
        assert!(!store.move_item(&item, &ContainerId::Pool, &ContainerId::Tier(ghost_tier), 0));

        assert_eq!(store.snapshot(), &before);
    }

    #[test]
    fn test_move_index_clamped() {
        let mut store = empty_store();
        let tier = store.add_tier("S", "#FF7F7F");
        let a = store.add_item(text("A"), None);
        let b = store.add_item(text("B"), None);
        store.move_item(&a, &ContainerId::Pool, &ContainerId::Tier(tier.clone()), 99);
        store.move_item(&b, &ContainerId::Pool, &ContainerId::Tier(tier.clone()), 99);
        let ids: Vec<_> = store.tier(&tier).unwrap().items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_move_within_same_container() {
        let mut store = empty_store();
        let a = store.add_item(text("A"), None);
        let b = store.add_item(text("B"), None);
        let c = store.add_item(text("C"), None);
        // length after removal is 2, so index 3 clamps to the end
        assert!(store.move_item(&a, &ContainerId::Pool, &ContainerId::Pool, 3));
        assert_eq!(pool_ids(&store), vec![b.to_string(), c.to_string(), a.to_string()]);
        assert_eq!(store.item_count(), 3);
    }

    #[test]
    fn test_reorder_tiers() {
        let mut store = empty_store();
        for label in ["S", "A", "B", "C"] {
            store.add_tier(label, "#FFFFFF");
        }
        assert!(store.reorder_tiers(0, 2));
        assert_eq!(labels(&store), vec!["A", "B", "S", "C"]);
        assert!(store.reorder_tiers(3, 0));
        assert_eq!(labels(&store), vec!["C", "A", "B", "S"]);
    }

    #[test]
    fn test_reorder_tiers_out_of_range() {
        let mut store = empty_store();
        for label in ["S", "A", "B"] {
            store.add_tier(label, "#FFFFFF");
        }
        assert!(!store.reorder_tiers(5, 0));
        assert_eq!(labels(&store), vec!["S", "A", "B"]);
        assert!(store.reorder_tiers(0, 10));
        assert_eq!(labels(&store), vec!["A", "B", "S"]);
        assert!(!store.reorder_tiers(1, 1));
    }

    #[test]
    fn test_locate_and_tier_position() {
        let mut store = TierListStore::with_default_tiers(SequentialIdGenerator::default());
        let item = store.add_item(text("Foo"), None);
        assert_eq!(store.snapshot().locate(&item), Some((ContainerId::Pool, 0)));
        store.move_item(&item, &ContainerId::Pool, &ContainerId::Tier("b".into()), 0);
        assert_eq!(store.container_of(&item), Some(ContainerId::Tier("b".into())));
        assert_eq!(store.snapshot().tier_position(&"b".into()), Ok(5));
        assert!(matches!(
            store.snapshot().tier_position(&"z".into()),
            Err(DomainError::NotFound(_))
        ));
    }
}
