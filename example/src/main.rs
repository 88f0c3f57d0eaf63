//! Scripted host session for the range slider.
//!
//! Plays the part of a rendering layer: attaches a two-handle slider to a
//! 320px track, replays pointer, keyboard and controlled-mode input, and
//! "redraws" by logging handle positions and accessibility values.
//!
//! Run with `RUST_LOG=debug cargo run -p example` to see engine internals.

use strata_components::slider::{
    ConfigurationError, HandleId, SliderConfig, SliderEngine, SliderKey, SliderLabels,
    SliderValue, TrackGeometry,
};
use strata_ui::logging::init_tracing;
use tracing::info;

fn main() -> Result<(), ConfigurationError> {
    init_tracing();

    let config = SliderConfig::default()
        .min(0.0)
        .max(100.0)
        .step(5.0)
        .step_multiplier(5.0)
        .min_separation(10.0);
    let geometry = TrackGeometry::new(16.0, 320.0, false);
    let labels = SliderLabels::default()
        .lower_label("Lower bound")
        .upper_label("Upper bound")
        .format_value(|value| format!("{value:.0}%"));

    let mut engine = SliderEngine::attach((10.0, 90.0), config, geometry)?.with_on_change(
        |change| {
            info!(
                values = ?change.values,
                changed = ?change.changed,
                committed = change.committed,
                "host re-render"
            );
        },
    );
    redraw(&engine, &labels);

    // Grab the lower handle slightly off-centre and drag it past the upper one.
    let lower_center = engine.handle_position(HandleId::Lower).unwrap_or(16.0);
    engine.on_pointer_down(lower_center + 3.0, geometry);
    for x in [80.0, 160.0, 240.0, 320.0, 330.0] {
        engine.on_pointer_move(x, geometry);
    }
    engine.on_pointer_up();
    redraw(&engine, &labels);

    // Keyboard: large step down on the upper handle, then jump it to the end.
    engine.on_focus(HandleId::Upper);
    engine.on_key(HandleId::Upper, SliderKey::ArrowLeft, true);
    engine.on_key(HandleId::Upper, SliderKey::End, false);
    redraw(&engine, &labels);

    // Controlled mode: the host pushes a value, then echoes it back.
    engine.set_value_externally((25.0, 60.0));
    engine.set_value_externally(engine.value());

    // The window shrinks and flips to right-to-left; values stay put.
    engine.resize(TrackGeometry::new(8.0, 200.0, true));
    redraw(&engine, &labels);

    let outcome = engine.on_text_input(HandleId::Lower, "33");
    info!(validity = ?outcome.validity, "number input");

    let last: SliderValue = engine.detach();
    info!(value = ?last, "slider detached");
    Ok(())
}

fn redraw(engine: &SliderEngine, labels: &SliderLabels) {
    for node in engine.accessibility_nodes(labels) {
        let handle = match node.key.as_deref() {
            Some("upper") => HandleId::Upper,
            _ => HandleId::Lower,
        };
        info!(
            handle = ?handle,
            position_px = engine.handle_position(handle),
            aria_valuenow = node.numeric_value,
            aria_valuemin = node.min_numeric_value,
            aria_valuemax = node.max_numeric_value,
            aria_valuetext = node.value.as_deref(),
            "draw handle"
        );
    }
}
