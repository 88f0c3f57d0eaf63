//! Per-handle interaction state.
//!
//! A [`HandleController`] turns raw pointer and keyboard input into proposed
//! values for its handle. It never commits a proposal on its own: the
//! [`TrackCoordinator`](super::TrackCoordinator) first checks it against the
//! sibling handle.

use tracing::trace;

use super::{
    geometry::TrackGeometry,
    value_model::{KeyDirection, ValueModel},
};

/// Identifies one handle on the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleId {
    /// The only handle of a single-value slider, or the lower bound of a
    /// range slider.
    Lower,
    /// The upper bound of a range slider.
    Upper,
}

impl HandleId {
    /// Stable key used for accessibility ids and logs.
    pub fn key(self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
        }
    }
}

/// Interaction phase of a handle.
///
/// `KeyAdjusting` only exists for the duration of a single
/// [`HandleController::apply_key`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandlePhase {
    /// Not interacting.
    #[default]
    Idle,
    /// Following the pointer between pointer-down and pointer-up.
    Dragging,
    /// Computing a keyboard proposal.
    KeyAdjusting,
}

/// Host-supplied flags restricting a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandleInteractivity {
    /// Disabled handles ignore input and cannot take focus.
    pub disabled: bool,
    /// Read-only handles ignore input but can still take focus.
    pub read_only: bool,
}

impl HandleInteractivity {
    /// Whether drags and key presses may change the value.
    pub fn accepts_input(&self) -> bool {
        !self.disabled && !self.read_only
    }
}

/// Live state of one handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleState {
    /// Which handle this is.
    pub id: HandleId,
    /// Current value, always on the step grid within `[min, max]`.
    pub value: f64,
    /// Pointer position minus rendered handle centre, captured at
    /// pointer-down.
    pub drag_offset: f64,
    /// Whether the handle currently follows the pointer.
    pub is_dragging: bool,
    /// Whether the handle holds keyboard focus.
    pub is_focused: bool,
}

/// Owns a [`HandleState`] and translates input into proposed values.
#[derive(Debug, Clone, PartialEq)]
pub struct HandleController {
    state: HandleState,
    phase: HandlePhase,
    interactivity: HandleInteractivity,
}

impl HandleController {
    pub(crate) fn new(id: HandleId, value: f64, interactivity: HandleInteractivity) -> Self {
        Self {
            state: HandleState {
                id,
                value,
                drag_offset: 0.0,
                is_dragging: false,
                is_focused: false,
            },
            phase: HandlePhase::Idle,
            interactivity,
        }
    }

    /// Which handle this controller owns.
    pub fn id(&self) -> HandleId {
        self.state.id
    }

    /// Current committed value.
    pub fn value(&self) -> f64 {
        self.state.value
    }

    /// Read-only view of the handle state.
    pub fn state(&self) -> &HandleState {
        &self.state
    }

    /// Current interaction phase.
    pub fn phase(&self) -> HandlePhase {
        self.phase
    }

    /// Host-supplied restrictions.
    pub fn interactivity(&self) -> HandleInteractivity {
        self.interactivity
    }

    /// Pixel centre of the handle for its current value.
    pub fn rendered_center(&self, model: &ValueModel, geometry: &TrackGeometry) -> Option<f64> {
        let fraction = model.value_to_fraction(self.state.value).ok()?;
        geometry.position_of(fraction)
    }

    /// Starts following the pointer.
    ///
    /// Records the distance between the pointer and the handle centre so
    /// later moves keep the grab point under the pointer instead of snapping
    /// the centre to it. Returns `false` without changing anything when the
    /// handle does not accept input or the position cannot be mapped.
    pub fn begin_drag(
        &mut self,
        pointer_pos: f64,
        geometry: &TrackGeometry,
        model: &ValueModel,
    ) -> bool {
        if !self.interactivity.accepts_input() || !pointer_pos.is_finite() {
            return false;
        }
        let Some(center) = self.rendered_center(model, geometry) else {
            return false;
        };

        self.state.drag_offset = pointer_pos - center;
        self.state.is_dragging = true;
        self.phase = HandlePhase::Dragging;
        trace!(
            handle = self.state.id.key(),
            offset = self.state.drag_offset,
            "drag started"
        );
        true
    }

    /// Value the handle would take with the pointer at `pointer_pos`.
    ///
    /// Nothing is committed. Returns `None` when the handle is not dragging
    /// or the geometry/position is malformed.
    pub fn update_drag(
        &self,
        pointer_pos: f64,
        geometry: &TrackGeometry,
        model: &ValueModel,
    ) -> Option<f64> {
        if !self.state.is_dragging {
            return None;
        }
        let fraction = geometry.fraction_at(pointer_pos - self.state.drag_offset)?;
        let proposed = model.fraction_to_value(fraction);
        proposed.is_finite().then_some(proposed)
    }

    /// Stops following the pointer. The value is left untouched.
    pub fn end_drag(&mut self) {
        self.state.is_dragging = false;
        self.state.drag_offset = 0.0;
        self.phase = HandlePhase::Idle;
    }

    /// Value the handle would take after one key press. Nothing is committed.
    pub fn apply_key(
        &mut self,
        direction: KeyDirection,
        large_step: bool,
        model: &ValueModel,
    ) -> Option<f64> {
        if !self.interactivity.accepts_input() {
            return None;
        }
        let resumed = self.phase;
        self.phase = HandlePhase::KeyAdjusting;
        let proposed =
            model.clamp_to_step(self.state.value + model.keyboard_delta(direction, large_step));
        self.phase = resumed;
        Some(proposed)
    }

    pub(crate) fn set_value(&mut self, value: f64) {
        self.state.value = value;
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.state.is_focused = focused;
    }

    pub(crate) fn set_interactivity(&mut self, interactivity: HandleInteractivity) {
        self.interactivity = interactivity;
        if interactivity.disabled {
            self.state.is_focused = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ValueModel {
        ValueModel::new(0.0, 100.0, 1.0, 4.0).expect("valid model")
    }

    #[test]
    fn test_drag_keeps_grab_offset() {
        let model = model();
        let geometry = TrackGeometry::new(0.0, 200.0, false);
        let mut handle = HandleController::new(HandleId::Lower, 50.0, Default::default());

        // Centre is at 100px; grab 6px to its right.
        assert!(handle.begin_drag(106.0, &geometry, &model));
        assert_eq!(handle.state().drag_offset, 6.0);
        assert_eq!(handle.phase(), HandlePhase::Dragging);

        assert_eq!(handle.update_drag(106.0, &geometry, &model), Some(50.0));
        assert_eq!(handle.update_drag(126.0, &geometry, &model), Some(60.0));
        // Proposals are not committed.
        assert_eq!(handle.value(), 50.0);

        handle.end_drag();
        assert!(!handle.state().is_dragging);
        assert_eq!(handle.phase(), HandlePhase::Idle);
        assert_eq!(handle.value(), 50.0);
        assert_eq!(handle.update_drag(126.0, &geometry, &model), None);
    }

    #[test]
    fn test_drag_right_to_left() {
        let model = model();
        let geometry = TrackGeometry::new(0.0, 100.0, true);
        let mut handle = HandleController::new(HandleId::Lower, 30.0, Default::default());

        assert_eq!(handle.rendered_center(&model, &geometry), Some(70.0));
        assert!(handle.begin_drag(70.0, &geometry, &model));
        assert_eq!(handle.update_drag(60.0, &geometry, &model), Some(40.0));
    }

    #[test]
    fn test_disabled_handle_rejects_input() {
        let model = model();
        let geometry = TrackGeometry::new(0.0, 100.0, false);
        let flags = HandleInteractivity {
            disabled: true,
            read_only: false,
        };
        let mut handle = HandleController::new(HandleId::Lower, 30.0, flags);

        assert!(!handle.begin_drag(30.0, &geometry, &model));
        assert!(!handle.state().is_dragging);
        assert_eq!(handle.apply_key(KeyDirection::Increase, false, &model), None);
    }

    #[test]
    fn test_read_only_handle_rejects_input() {
        let model = model();
        let flags = HandleInteractivity {
            disabled: false,
            read_only: true,
        };
        let mut handle = HandleController::new(HandleId::Lower, 30.0, flags);
        assert_eq!(handle.apply_key(KeyDirection::Decrease, true, &model), None);
    }

    #[test]
    fn test_malformed_geometry_blocks_drag() {
        let model = model();
        let mut handle = HandleController::new(HandleId::Lower, 30.0, Default::default());
        let broken = TrackGeometry::new(0.0, 0.0, false);
        assert!(!handle.begin_drag(30.0, &broken, &model));

        let geometry = TrackGeometry::new(0.0, 100.0, false);
        assert!(handle.begin_drag(30.0, &geometry, &model));
        assert_eq!(handle.update_drag(f64::NAN, &geometry, &model), None);
        assert_eq!(handle.update_drag(40.0, &broken, &model), None);
    }

    #[test]
    fn test_apply_key_proposes_without_committing() {
        let model = model();
        let mut handle = HandleController::new(HandleId::Upper, 99.0, Default::default());
        assert_eq!(
            handle.apply_key(KeyDirection::Increase, false, &model),
            Some(100.0)
        );
        assert_eq!(
            handle.apply_key(KeyDirection::Increase, true, &model),
            Some(100.0)
        );
        assert_eq!(
            handle.apply_key(KeyDirection::ToMinimum, false, &model),
            Some(0.0)
        );
        assert_eq!(handle.value(), 99.0);
        assert_eq!(handle.phase(), HandlePhase::Idle);
    }
}
