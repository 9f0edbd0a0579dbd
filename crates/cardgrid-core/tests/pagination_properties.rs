//! Property-based tests for the pagination engine.
//!
//! Random sequences of layout changes, navigation and reloads must never
//! leave the engine outside `1..=page_count` or produce a bad window.

use cardgrid_core::{Layout, LayoutUpdate, PaginationEngine};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Step {
    Navigate(i64),
    GoTo(i64),
    Rows(i64),
    Columns(i64),
    Reload(usize),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (-50i64..50).prop_map(Step::Navigate),
        (-10i64..1000).prop_map(Step::GoTo),
        (-5i64..30).prop_map(Step::Rows),
        (-5i64..15).prop_map(Step::Columns),
        (0usize..500).prop_map(Step::Reload),
    ]
}

proptest! {
    #[test]
    fn prop_page_count_formula(
        item_count in 0usize..2000,
        rows in 1usize..=20,
        cols in 1usize..=10,
    ) {
        let engine = PaginationEngine::new(item_count, rows * cols);
        let expected = item_count.div_ceil(rows * cols).max(1);
        prop_assert_eq!(engine.state().page_count, expected);
    }

    #[test]
    fn prop_page_stays_in_bounds(
        initial in 0usize..500,
        steps in prop::collection::vec(step(), 0..40)
    ) {
        let mut layout = Layout::default();
        let mut engine = PaginationEngine::new(initial, layout.current().page_size());
        let mut items = initial;

        for step in steps {
            match step {
                Step::Navigate(delta) => engine.navigate(delta),
                Step::GoTo(target) => engine.go_to(target),
                Step::Rows(rows) => {
                    layout.update(LayoutUpdate::default().rows(rows));
                    engine.set_page_size(layout.current().page_size());
                }
                Step::Columns(cols) => {
                    layout.update(LayoutUpdate::default().columns(cols));
                    engine.set_page_size(layout.current().page_size());
                }
                Step::Reload(count) => {
                    items = count;
                    engine.recompute(items);
                }
            }

            let info = engine.state();
            prop_assert!(info.page >= 1);
            prop_assert!(info.page <= info.page_count);

            let range = engine.visible_range();
            prop_assert!(range.start <= range.end);
            prop_assert!(range.end <= items);
            prop_assert!(range.len() <= engine.page_size());
        }
    }

    #[test]
    fn prop_recompute_is_idempotent(
        item_count in 0usize..1000,
        page_size in 1usize..200,
        target in -5i64..100
    ) {
        let mut engine = PaginationEngine::new(item_count, page_size);
        engine.go_to(target);
        engine.recompute(item_count);
        let once = engine.clone();
        engine.recompute(item_count);
        prop_assert_eq!(engine, once);
    }

    #[test]
    fn prop_pages_cover_every_item_once(item_count in 0usize..300, page_size in 1usize..40) {
        let mut engine = PaginationEngine::new(item_count, page_size);
        let mut seen = Vec::new();
        for page in 1..=engine.state().page_count {
            engine.go_to(page as i64);
            seen.extend(engine.visible_range());
        }
        prop_assert_eq!(seen, (0..item_count).collect::<Vec<_>>());
    }
}
