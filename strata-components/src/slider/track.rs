//! Cross-handle arbitration for a shared track.

use tracing::warn;

use super::{
    ChangedHandle, SliderValue,
    geometry::TrackGeometry,
    handle::{HandleController, HandleId, HandleInteractivity},
    value_model::{GRID_EPSILON, ValueModel},
};

/// Owns the handles of one track and keeps their values ordered.
///
/// With two handles, `lower <= upper` and `upper - lower >= min_separation`
/// hold after every mutation. A commit only ever moves the handle being
/// committed; the sibling's value is never changed as a side effect.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackCoordinator {
    model: ValueModel,
    min_separation: f64,
    lower: HandleController,
    upper: Option<HandleController>,
}

impl TrackCoordinator {
    /// Creates one handle for [`SliderValue::Single`] and two for
    /// [`SliderValue::Range`]. Initial values are clamped, stepped and
    /// ordered rather than rejected.
    ///
    /// `min_separation` must already lie on the step grid.
    pub(crate) fn new(
        model: ValueModel,
        min_separation: f64,
        initial: SliderValue,
        interactivity: HandleInteractivity,
    ) -> Self {
        let mut coordinator = Self {
            model,
            min_separation,
            lower: HandleController::new(HandleId::Lower, model.min(), interactivity),
            upper: initial
                .is_range()
                .then(|| HandleController::new(HandleId::Upper, model.grid_max(), interactivity)),
        };
        let normalized = coordinator.normalize(initial);
        coordinator.replace(normalized);
        coordinator
    }

    /// The shared value model.
    pub fn model(&self) -> &ValueModel {
        &self.model
    }

    /// Minimum distance kept between the two handles, on the step grid.
    pub fn min_separation(&self) -> f64 {
        self.min_separation
    }

    /// Whether the track has an upper handle.
    pub fn is_range(&self) -> bool {
        self.upper.is_some()
    }

    /// Current committed value(s).
    pub fn value(&self) -> SliderValue {
        match &self.upper {
            Some(upper) => SliderValue::Range(self.lower.value(), upper.value()),
            None => SliderValue::Single(self.lower.value()),
        }
    }

    /// Controller of the lower (or only) handle.
    pub fn lower(&self) -> &HandleController {
        &self.lower
    }

    /// Controller for `id`, if the track has that handle.
    pub fn handle(&self, id: HandleId) -> Option<&HandleController> {
        match id {
            HandleId::Lower => Some(&self.lower),
            HandleId::Upper => self.upper.as_ref(),
        }
    }

    pub(crate) fn handle_mut(&mut self, id: HandleId) -> Option<&mut HandleController> {
        match id {
            HandleId::Lower => Some(&mut self.lower),
            HandleId::Upper => self.upper.as_mut(),
        }
    }

    /// All handles, lower first.
    pub fn handles(&self) -> impl Iterator<Item = &HandleController> {
        std::iter::once(&self.lower).chain(self.upper.as_ref())
    }

    pub(crate) fn handles_mut(&mut self) -> impl Iterator<Item = &mut HandleController> {
        std::iter::once(&mut self.lower).chain(self.upper.as_mut())
    }

    /// Picks the handle a pointer-down at `pointer_pos` should grab.
    ///
    /// The handle whose rendered centre is closer wins. An exact tie goes to
    /// the lower handle unless it already sits at the top of the range, where
    /// it could not move further. When only one of the two handles accepts
    /// input, that handle is chosen.
    ///
    /// Handles stacked below the top tie on every press and resolve to the
    /// lower one, which cannot pass its sibling. Dragging right from such a
    /// stack leaves the value unchanged; the lower handle has to move left
    /// first, or the upper handle is moved from the keyboard.
    pub fn resolve_pointer_target(&self, pointer_pos: f64, geometry: &TrackGeometry) -> HandleId {
        let Some(upper) = &self.upper else {
            return HandleId::Lower;
        };

        match (
            self.lower.interactivity().accepts_input(),
            upper.interactivity().accepts_input(),
        ) {
            (true, false) => return HandleId::Lower,
            (false, true) => return HandleId::Upper,
            _ => {}
        }

        let (Some(lower_center), Some(upper_center)) = (
            self.lower.rendered_center(&self.model, geometry),
            upper.rendered_center(&self.model, geometry),
        ) else {
            return HandleId::Lower;
        };

        let to_lower = (pointer_pos - lower_center).abs();
        let to_upper = (pointer_pos - upper_center).abs();
        if to_lower < to_upper {
            HandleId::Lower
        } else if to_upper < to_lower {
            HandleId::Upper
        } else if self.lower.value() >= self.model.grid_max() {
            HandleId::Upper
        } else {
            HandleId::Lower
        }
    }

    /// Commits `proposed` for `id` and returns the resulting value(s).
    ///
    /// The lower handle is held at or below `upper - min_separation`, the
    /// upper handle at or above `lower + min_separation`. Committing a
    /// handle the track does not have leaves everything unchanged, as does a
    /// non-finite proposal.
    pub fn commit(&mut self, id: HandleId, proposed: f64) -> SliderValue {
        if !proposed.is_finite() {
            warn!(handle = id.key(), proposed, "ignoring non-finite commit");
            return self.value();
        }
        let proposed = self.model.clamp_to_step(proposed);
        let value = match (id, &self.upper) {
            (HandleId::Lower, None) => proposed,
            (HandleId::Lower, Some(upper)) => proposed.min(self.lower_limit(upper.value())),
            (HandleId::Upper, Some(_)) => proposed.max(self.upper_limit(self.lower.value())),
            (HandleId::Upper, None) => {
                warn!("ignoring commit for the upper handle of a single-value slider");
                return self.value();
            }
        };

        if let Some(handle) = self.handle_mut(id) {
            handle.set_value(value);
        }
        self.value()
    }

    /// Clamps, steps and orders an externally supplied value against the
    /// current state, exactly as input would be.
    ///
    /// A single value on a range track moves only the lower handle. A pair on
    /// a single-value track uses its first component. A reversed pair is
    /// swapped; a pair closer than `min_separation` first raises the upper
    /// value, then lowers the lower one.
    pub(crate) fn normalize(&self, value: SliderValue) -> SliderValue {
        let model = &self.model;
        match (value, &self.upper) {
            (SliderValue::Single(v), None) | (SliderValue::Range(v, _), None) => {
                SliderValue::Single(model.clamp_to_step(v))
            }
            (SliderValue::Single(v), Some(upper)) => SliderValue::Range(
                model.clamp_to_step(v).min(self.lower_limit(upper.value())),
                upper.value(),
            ),
            (SliderValue::Range(a, b), Some(_)) => {
                let (a, b) = if b < a { (b, a) } else { (a, b) };
                let mut lower = model.clamp_to_step(a);
                let mut upper = model.clamp_to_step(b);
                if !self.separated(lower, upper) {
                    upper = self.upper_limit(lower);
                    if !self.separated(lower, upper) {
                        lower = self.lower_limit(upper);
                    }
                }
                SliderValue::Range(lower, upper)
            }
        }
    }

    /// Overwrites handle values with an already normalized value.
    pub(crate) fn replace(&mut self, value: SliderValue) {
        self.lower.set_value(value.lower());
        if let (Some(upper), Some(v)) = (self.upper.as_mut(), value.upper()) {
            upper.set_value(v);
        }
    }

    /// Highest value the lower handle may take while the upper one sits at
    /// `upper`.
    pub(crate) fn lower_limit(&self, upper: f64) -> f64 {
        self.model.clamp_to_step(upper - self.min_separation)
    }

    /// Lowest value the upper handle may take while the lower one sits at
    /// `lower`.
    pub(crate) fn upper_limit(&self, lower: f64) -> f64 {
        self.model.clamp_to_step(lower + self.min_separation)
    }

    fn separated(&self, lower: f64, upper: f64) -> bool {
        upper - lower >= self.min_separation - GRID_EPSILON * self.model.step()
    }
}

impl SliderValue {
    /// Which handle(s) differ between `previous` and `self`, compared by
    /// value. `None` when nothing changed.
    pub fn changed_from(&self, previous: &SliderValue) -> Option<ChangedHandle> {
        let lower_changed = self.lower() != previous.lower();
        let upper_changed = self.upper() != previous.upper();
        match (lower_changed, upper_changed) {
            (false, false) => None,
            (true, false) => Some(ChangedHandle::Lower),
            (false, true) => Some(ChangedHandle::Upper),
            (true, true) => Some(ChangedHandle::Both),
        }
    }
}
