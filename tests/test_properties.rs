//! Property-based tests for draws and the history ledger.

use proptest::prelude::*;

use lucky_lots::history::{HISTORY_KEY, MAX_HISTORY};
use lucky_lots::persistence::{MemoryStore, load_json};
use lucky_lots::{DrawEngine, DrawError, DrawResult, HistoryEntry, HistoryLedger, Range};

/// Strategy: a valid range with a modest domain.
fn range_strategy() -> impl Strategy<Value = Range> {
    (-500i32..500, 0i32..120).prop_map(|(min, span)| Range {
        min,
        max: min + span,
    })
}

/// Strategy: a draw result shaped like the preset games.
fn result_strategy() -> impl Strategy<Value = DrawResult> {
    (
        prop::collection::btree_set(1i32..=49, 0..=6),
        prop::option::of(prop::collection::vec(1i32..=8, 1..=2)),
    )
        .prop_map(|(primary, secondary)| DrawResult {
            primary: primary.into_iter().collect(),
            secondary,
        })
}

proptest! {
    // 1. Unique draws are distinct, in range, ascending, and exactly clamped in size
    #[test]
    fn unique_draw_shape(seed in any::<u64>(), range in range_strategy(), count in 0usize..200) {
        let mut engine = DrawEngine::seeded(seed);
        let values = engine.draw_unique(range, count).unwrap();

        let domain = range.domain_size() as usize;
        prop_assert_eq!(values.len(), count.min(domain));
        prop_assert!(values.iter().all(|v| range.contains(*v)));
        prop_assert!(values.windows(2).all(|w| w[0] < w[1]), "values={values:?}");
    }

    // 2. Oversized requests return the whole domain
    #[test]
    fn oversized_draw_is_full_domain(seed in any::<u64>(), range in range_strategy(), extra in 1usize..50) {
        let mut engine = DrawEngine::seeded(seed);
        let count = range.domain_size() as usize + extra;
        let values = engine.draw_unique(range, count).unwrap();
        prop_assert_eq!(values, (range.min..=range.max).collect::<Vec<_>>());
    }

    // 3. Draws with replacement have the requested length and stay in range
    #[test]
    fn replacement_draw_shape(seed in any::<u64>(), range in range_strategy(), count in 0usize..64) {
        let mut engine = DrawEngine::seeded(seed);
        let values = engine.draw_with_replacement(range, count).unwrap();
        prop_assert_eq!(values.len(), count);
        prop_assert!(values.iter().all(|v| range.contains(*v)));
    }

    // 4. Inverted ranges are rejected, never clamped
    #[test]
    fn inverted_range_rejected(min in -1000i32..1000, gap in 1i32..100, count in 0usize..10) {
        let mut engine = DrawEngine::seeded(0);
        let range = Range { min, max: min - gap };
        prop_assert_eq!(
            engine.draw_unique(range, count),
            Err(DrawError::InvalidRange { min, max: min - gap })
        );
    }

    // 5. The ledger keeps the newest entries, newest first, and survives a reload
    #[test]
    fn ledger_keeps_most_recent(results in prop::collection::vec(result_strategy(), 0..25)) {
        let mut store = MemoryStore::new();
        let mut ledger = HistoryLedger::load(&mut store);
        for (i, result) in results.iter().enumerate() {
            ledger.record(format!("draw {i}"), result, i as f64);
        }

        let expected: Vec<_> = results.iter().rev().take(MAX_HISTORY).cloned().collect();
        let kept: Vec<_> = ledger.entries().iter().map(HistoryEntry::result).collect();
        prop_assert_eq!(&kept, &expected);

        let entries = ledger.entries().to_vec();
        drop(ledger);
        let stored: Vec<HistoryEntry> = load_json(&store, HISTORY_KEY).unwrap_or_default();
        prop_assert_eq!(stored, entries);
    }
}

#[test]
fn serialized_history_round_trips() {
    let mut ledger = HistoryLedger::load(MemoryStore::new());
    let mut engine = DrawEngine::seeded(77);
    for game in lucky_lots::GameConfig::presets() {
        let result = engine.draw_game(&game).unwrap();
        ledger.record(game.name.as_str(), &result, 1_700_000_000_000.0);
    }

    let json = serde_json::to_string(ledger.entries()).unwrap();
    let decoded: Vec<HistoryEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, ledger.entries());
}
