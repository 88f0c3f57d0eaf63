//! Property-based invariant tests for the slider engine.
//!
//! 1. clamp_to_step lands in [min, max] on the step grid.
//! 2. clamp_to_step is idempotent.
//! 3. fraction_to_value(value_to_fraction(v)) == v on the grid.
//! 4. lower <= upper, at least the separation apart, after any sequence of
//!    drags, keys and external sets.
//! 5. Committing one handle never moves the other.
//! 6. Re-sending the current value externally publishes nothing.

use std::sync::Arc;

use parking_lot::Mutex;
use proptest::prelude::*;
use strata_components::slider::{
    HandleId, KeyDirection, SliderChange, SliderConfig, SliderEngine, SliderValue,
    TrackCoordinator, TrackGeometry, ValueModel,
};
use strata_ui::accesskit::Action;

// ── Helpers ─────────────────────────────────────────────────────────────

fn value_model() -> impl Strategy<Value = ValueModel> {
    (-1_000.0f64..1_000.0, 1.0f64..2_000.0, 0.01f64..50.0, 1.0f64..20.0).prop_map(
        |(min, span, step, multiplier)| {
            ValueModel::new(min, min + span, step, multiplier).expect("generated model is valid")
        },
    )
}

fn on_grid(model: &ValueModel, value: f64) -> bool {
    let position = (value - model.min()) / model.step();
    (position - position.round()).abs() < 1e-6
}

#[derive(Debug, Clone)]
enum Op {
    PointerDown(f64),
    PointerMove(f64),
    PointerUp,
    Key(bool, KeyDirection, bool),
    External(f64, f64),
    Resize(f64),
}

fn op() -> impl Strategy<Value = Op> {
    let direction = prop_oneof![
        Just(KeyDirection::Increase),
        Just(KeyDirection::Decrease),
        Just(KeyDirection::ToMinimum),
        Just(KeyDirection::ToMaximum),
    ];
    prop_oneof![
        (-50.0f64..350.0).prop_map(Op::PointerDown),
        (-50.0f64..350.0).prop_map(Op::PointerMove),
        Just(Op::PointerUp),
        (any::<bool>(), direction, any::<bool>())
            .prop_map(|(upper, d, large)| Op::Key(upper, d, large)),
        (-20.0f64..120.0, -20.0f64..120.0).prop_map(|(a, b)| Op::External(a, b)),
        (1.0f64..600.0).prop_map(Op::Resize),
    ]
}

fn handle(upper: bool) -> HandleId {
    if upper { HandleId::Upper } else { HandleId::Lower }
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. Value model
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn clamp_to_step_stays_in_range_on_grid(model in value_model(), raw in -5_000.0f64..5_000.0) {
        let snapped = model.clamp_to_step(raw);
        prop_assert!(snapped >= model.min() && snapped <= model.max(), "{snapped} outside range");
        prop_assert!(on_grid(&model, snapped), "{snapped} off grid");
    }

    #[test]
    fn clamp_to_step_is_idempotent(model in value_model(), raw in -5_000.0f64..5_000.0) {
        let once = model.clamp_to_step(raw);
        prop_assert_eq!(model.clamp_to_step(once), once);
    }

    #[test]
    fn fraction_round_trip_on_grid(model in value_model(), raw in -5_000.0f64..5_000.0) {
        let value = model.clamp_to_step(raw);
        let fraction = model.value_to_fraction(value).expect("non-degenerate model");
        let back = model.fraction_to_value(fraction);
        prop_assert!((back - value).abs() <= model.step() * 1e-9, "{value} came back as {back}");
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Ordering under arbitrary input
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn range_stays_ordered(
        lower in 0.0f64..100.0,
        upper in 0.0f64..100.0,
        separation in 0.0f64..20.0,
        ops in proptest::collection::vec(op(), 1..60),
    ) {
        let config = SliderConfig::default().step(2.5).min_separation(separation);
        let mut geometry = TrackGeometry::new(0.0, 300.0, false);
        let mut engine = SliderEngine::attach((lower, upper), config, geometry).expect("attach");
        let model = config.value_model().expect("valid model");
        let gap = config.resolved_separation(&model).expect("separation fits");

        for op in ops {
            match op {
                Op::PointerDown(pos) => { engine.on_pointer_down(pos, geometry); }
                Op::PointerMove(pos) => { engine.on_pointer_move(pos, geometry); }
                Op::PointerUp => { engine.on_pointer_up(); }
                Op::Key(upper, direction, large) => { engine.on_key_down(handle(upper), direction, large); }
                Op::External(a, b) => { engine.set_value_externally((a, b)); }
                Op::Resize(length) => {
                    geometry = TrackGeometry::new(0.0, length, length > 300.0);
                    engine.resize(geometry);
                }
            }
            let SliderValue::Range(lo, hi) = engine.value() else {
                return Err(TestCaseError::fail("range slider lost its upper handle"));
            };
            prop_assert!(lo <= hi, "lower {lo} above upper {hi}");
            prop_assert!(lo >= 0.0 && hi <= 100.0);
            prop_assert!(hi - lo >= gap - 1e-9, "gap {} below separation {gap}", hi - lo);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. No side effects on the sibling handle
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn commit_never_moves_sibling(
        lower in 0.0f64..100.0,
        upper in 0.0f64..100.0,
        proposals in proptest::collection::vec((any::<bool>(), -50.0f64..150.0), 1..40),
    ) {
        let config = SliderConfig::default();
        let mut engine = SliderEngine::attach((lower, upper), config, TrackGeometry::new(0.0, 100.0, false))
            .expect("attach");

        for (upper, proposed) in proposals {
            let before = engine.value();
            let id = handle(upper);
            engine.on_accessibility_action(id, Action::SetValue, Some(proposed));
            let after = engine.value();
            let sibling = if upper { HandleId::Lower } else { HandleId::Upper };
            prop_assert_eq!(before.get(sibling), after.get(sibling));
        }
    }

    #[test]
    fn coordinator_commit_never_moves_sibling(
        lower in 0.0f64..100.0,
        upper in 0.0f64..100.0,
        proposed in -50.0f64..150.0,
        commit_upper in any::<bool>(),
    ) {
        let config = SliderConfig::default().step(5.0);
        let engine = SliderEngine::attach((lower, upper), config, TrackGeometry::new(0.0, 100.0, false))
            .expect("attach");
        let mut coordinator: TrackCoordinator = engine.document().coordinator().clone();

        let before = coordinator.value();
        let id = handle(commit_upper);
        let after = coordinator.commit(id, proposed);
        let sibling = if commit_upper { HandleId::Lower } else { HandleId::Upper };
        prop_assert_eq!(before.get(sibling), after.get(sibling));
        prop_assert!(after.lower() <= after.upper().unwrap_or(f64::INFINITY));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Controlled-mode echo is silent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn echoing_value_publishes_nothing(
        lower in -20.0f64..120.0,
        upper in -20.0f64..120.0,
        repeats in 1usize..5,
    ) {
        let log = Arc::new(Mutex::new(Vec::<SliderChange>::new()));
        let sink = Arc::clone(&log);
        let mut engine = SliderEngine::attach(
            (lower, upper),
            SliderConfig::default().step(4.0),
            TrackGeometry::new(0.0, 100.0, false),
        )
        .expect("attach")
        .with_on_change(move |change| sink.lock().push(change));

        let current = engine.value();
        for _ in 0..repeats {
            prop_assert_eq!(engine.set_value_externally(current), None);
        }
        prop_assert!(log.lock().is_empty());
    }
}
