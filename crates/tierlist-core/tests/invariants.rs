//! Property tests: ids stay unique and every item has exactly one home,
//! whatever sequence of operations the UI throws at the board.

use std::collections::HashSet;

use proptest::prelude::*;
use tierlist_core::{
    ContainerId, DragCoordinator, GestureEvent, ItemContent, ItemId, ItemPatch,
    SequentialIdGenerator, TierId, TierListSnapshot, TierListStore, TierPatch,
};

#[derive(Debug, Clone)]
enum Op {
    AddTier,
    RemoveTier(usize),
    RenameTier(usize),
    AddItem,
    UpdateItem(usize),
    RemoveItem(usize),
    Move { item: usize, source: usize, target: usize, index: usize },
    Reorder(usize, usize),
    Gesture { item: usize, target: Option<usize> },
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::AddTier),
        (0..12usize).prop_map(Op::RemoveTier),
        (0..12usize).prop_map(Op::RenameTier),
        Just(Op::AddItem),
        (0..24usize).prop_map(Op::UpdateItem),
        (0..24usize).prop_map(Op::RemoveItem),
        (0..24usize, 0..13usize, 0..13usize, 0..30usize)
            .prop_map(|(item, source, target, index)| Op::Move { item, source, target, index }),
        (0..12usize, 0..12usize).prop_map(|(a, b)| Op::Reorder(a, b)),
        (0..24usize, proptest::option::of(0..40usize))
            .prop_map(|(item, target)| Op::Gesture { item, target }),
    ]
}

/// Ids of every item currently on the board
fn all_ids(snapshot: &TierListSnapshot) -> Vec<ItemId> {
    snapshot
        .pool
        .iter()
        .chain(snapshot.tiers.iter().flat_map(|t| t.items.iter()))
        .map(|item| item.id.clone())
        .collect()
}

/// Index 0 is the pool, 1.. are tiers; out-of-range picks a missing tier
fn container(snapshot: &TierListSnapshot, n: usize) -> ContainerId {
    if n == 0 {
        return ContainerId::Pool;
    }
    snapshot
        .tiers
        .get(n - 1)
        .map(|t| ContainerId::Tier(t.id.clone()))
        .unwrap_or_else(|| ContainerId::Tier(TierId::from("missing")))
}

/// Ids handed out so far; removed ones stay in the list to exercise stale lookups
fn pick(seen: &[ItemId], n: usize) -> ItemId {
    seen.get(n).cloned().unwrap_or_else(|| ItemId::from("missing"))
}

fn apply(store: &mut TierListStore<SequentialIdGenerator>, seen: &mut Vec<ItemId>, op: Op) {
    let snapshot = store.snapshot().clone();
    match op {
        Op::AddTier => {
            store.add_tier("T", "#000");
        }
        Op::RemoveTier(n) => {
            if let Some(t) = snapshot.tiers.get(n) {
                store.remove_tier(&t.id);
            }
        }
        Op::RenameTier(n) => {
            if let Some(t) = snapshot.tiers.get(n) {
                store.update_tier(&t.id, TierPatch::label("renamed"));
            }
        }
        Op::AddItem => {
            let id = store.add_item(ItemContent::text("x"), None);
            seen.push(id);
        }
        Op::UpdateItem(n) => {
            store.update_item(&pick(seen, n), ItemPatch::image("data:image/png;base64,AA"));
        }
        Op::RemoveItem(n) => {
            store.remove_item(&pick(seen, n));
        }
        Op::Move { item, source, target, index } => {
            let source = container(&snapshot, source);
            let target = container(&snapshot, target);
            store.move_item(&pick(seen, item), &source, &target, index);
        }
        Op::Reorder(a, b) => {
            store.reorder_tiers(a, b);
        }
        Op::Gesture { item, target } => {
            let mut dnd = DragCoordinator::new();
            dnd.handle(store, GestureEvent::Start { item_id: pick(seen, item) });
            // targets alternate between tier ids and item ids
            let target = target.map(|n| match n % 2 {
                0 => snapshot
                    .tiers
                    .get(n / 2)
                    .map(|t| t.id.to_string())
                    .unwrap_or_else(|| "nowhere".to_string()),
                _ => pick(seen, n / 2).to_string(),
            });
            dnd.handle(store, GestureEvent::Release { target });
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn ids_stay_unique_and_singly_owned(ops in proptest::collection::vec(op(), 1..60)) {
        let mut store = TierListStore::with_default_tiers(SequentialIdGenerator::new("i"));
        let mut seen = Vec::new();
        for op in ops {
            let before: HashSet<ItemId> = all_ids(store.snapshot()).into_iter().collect();
            apply(&mut store, &mut seen, op.clone());

            let ids = all_ids(store.snapshot());
            let unique: HashSet<_> = ids.iter().collect();
            prop_assert_eq!(unique.len(), ids.len());

            let tier_ids: HashSet<_> = store.tiers().iter().map(|t| t.id.clone()).collect();
            prop_assert_eq!(tier_ids.len(), store.tiers().len());

            let after: HashSet<ItemId> = ids.into_iter().collect();
            match op {
                Op::AddItem => {
                    prop_assert_eq!(after.len(), before.len() + 1);
                    prop_assert!(after.is_superset(&before));
                }
                Op::RemoveItem(n) => {
                    let removed = pick(&seen, n);
                    let mut expected = before.clone();
                    expected.remove(&removed);
                    prop_assert_eq!(after, expected);
                }
                // moves, gestures and tier edits never create or drop items
                _ => {
                    prop_assert_eq!(after, before);
                }
            }
        }
    }

    #[test]
    fn unknown_ids_never_change_state(n_items in 0..6usize, index in 0..10usize) {
        let mut store = TierListStore::with_default_tiers(SequentialIdGenerator::new("i"));
        for _ in 0..n_items {
            store.add_item(ItemContent::text("x"), None);
        }
        let before = store.snapshot().clone();
        let ghost = ItemId::from("ghost");
        let ghost_tier = TierId::from("ghost");

        store.remove_tier(&ghost_tier);
        store.update_tier(&ghost_tier, TierPatch::color("#fff"));
        store.update_item(&ghost, ItemPatch::content("y"));
        store.remove_item(&ghost);
        store.move_item(&ghost, &ContainerId::Pool, &ContainerId::Tier("s".into()), index);

        prop_assert_eq!(store.snapshot(), &before);
    }
}
