//! Public entry point of the slider: receives host input and publishes
//! change notifications.

use strata_ui::CallbackWith;
use tracing::{debug, trace, warn};

use super::{
    ConfigurationError, SliderChange, SliderConfig, SliderValue,
    geometry::TrackGeometry,
    handle::{HandleId, HandleInteractivity, HandleState},
    keyboard::SliderKey,
    track::TrackCoordinator,
    value_model::{InputValidity, KeyDirection},
};

/// Everything one slider instance knows: its handles, the latest geometry
/// snapshot and its configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderDocument {
    coordinator: TrackCoordinator,
    geometry: TrackGeometry,
    config: SliderConfig,
}

impl SliderDocument {
    /// Handle coordinator, including both handle controllers.
    pub fn coordinator(&self) -> &TrackCoordinator {
        &self.coordinator
    }

    /// State of the lower (or only) handle.
    pub fn lower(&self) -> &HandleState {
        self.coordinator.lower().state()
    }

    /// State of the upper handle, if this is a range slider.
    pub fn upper(&self) -> Option<&HandleState> {
        self.coordinator
            .handle(HandleId::Upper)
            .map(|handle| handle.state())
    }

    /// Latest geometry snapshot supplied by the host.
    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    /// Configuration the slider was attached with.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }
}

/// Outcome of typing into the companion number input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextInputOutcome {
    /// How the typed text relates to the slider domain.
    pub validity: InputValidity,
    /// Notification published if the text was accepted.
    pub change: Option<SliderChange>,
}

/// Slider interaction engine.
///
/// Every mutating entry point returns the notification it published, if
/// any, after handing the same notification to the `on_change` listener.
/// Only one handle can be dragged at a time; a new pointer-down settles the
/// previous drag first.
pub struct SliderEngine {
    document: SliderDocument,
    dragging: Option<HandleId>,
    on_change: CallbackWith<SliderChange>,
}

impl SliderEngine {
    /// Validates `config` and builds the initial document.
    ///
    /// A single initial value creates one handle, a pair creates two.
    /// Out-of-range or off-step initial values are clamped, not rejected.
    pub fn attach(
        initial: impl Into<SliderValue>,
        config: SliderConfig,
        geometry: TrackGeometry,
    ) -> Result<Self, ConfigurationError> {
        let model = config.value_model()?;
        let min_separation = config.resolved_separation(&model)?;

        let mut initial = initial.into();
        if !initial.is_finite() {
            warn!(?initial, "non-finite initial slider value, using the range bounds");
            initial = match initial {
                SliderValue::Single(_) => SliderValue::Single(model.min()),
                SliderValue::Range(..) => SliderValue::Range(model.min(), model.grid_max()),
            };
        }

        let coordinator =
            TrackCoordinator::new(model, min_separation, initial, config.interactivity());
        debug!(value = ?coordinator.value(), "slider attached");

        Ok(Self {
            document: SliderDocument {
                coordinator,
                geometry,
                config,
            },
            dragging: None,
            on_change: CallbackWith::default(),
        })
    }

    /// Sets the change listener.
    pub fn with_on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(SliderChange) + Send + Sync + 'static,
    {
        self.on_change = CallbackWith::new(on_change);
        self
    }

    /// Sets the change listener using a shared callback.
    pub fn set_on_change(&mut self, on_change: impl Into<CallbackWith<SliderChange>>) {
        self.on_change = on_change.into();
    }

    /// Current document.
    pub fn document(&self) -> &SliderDocument {
        &self.document
    }

    /// Current committed value(s).
    pub fn value(&self) -> SliderValue {
        self.document.coordinator.value()
    }

    /// State of one handle.
    pub fn handle(&self, handle: HandleId) -> Option<&HandleState> {
        self.document
            .coordinator
            .handle(handle)
            .map(|controller| controller.state())
    }

    /// Track fraction of a handle's value.
    pub fn handle_fraction(&self, handle: HandleId) -> Option<f64> {
        let controller = self.document.coordinator.handle(handle)?;
        self.document
            .coordinator
            .model()
            .value_to_fraction(controller.value())
            .ok()
    }

    /// Pixel centre of a handle, recomputed from its value against the latest
    /// geometry.
    pub fn handle_position(&self, handle: HandleId) -> Option<f64> {
        let coordinator = &self.document.coordinator;
        coordinator
            .handle(handle)?
            .rendered_center(coordinator.model(), &self.document.geometry)
    }

    /// The handle currently owning pointer input.
    pub fn dragging_handle(&self) -> Option<HandleId> {
        self.dragging
    }

    /// Latest geometry snapshot.
    pub fn geometry(&self) -> &TrackGeometry {
        &self.document.geometry
    }

    /// Configuration the slider was attached with.
    pub fn config(&self) -> &SliderConfig {
        &self.document.config
    }

    /// Pointer pressed at `pointer_pos` (track-local pixels).
    ///
    /// Settles any drag still in progress, then starts dragging whichever
    /// handle is closest. The grabbed handle also takes focus.
    pub fn on_pointer_down(
        &mut self,
        pointer_pos: f64,
        geometry: TrackGeometry,
    ) -> Option<SliderChange> {
        self.document.geometry = geometry;
        let settled = self.end_active_drag();

        if !pointer_pos.is_finite() {
            warn!(pointer_pos, "ignoring pointer-down at a non-finite position");
            return settled;
        }

        let target = self
            .document
            .coordinator
            .resolve_pointer_target(pointer_pos, &geometry);
        let model = *self.document.coordinator.model();
        let Some(handle) = self.document.coordinator.handle_mut(target) else {
            return settled;
        };

        if handle.begin_drag(pointer_pos, &geometry, &model) {
            debug!(handle = target.key(), pointer_pos, "pointer captured");
            self.dragging = Some(target);
            self.focus_handle(target);
        } else {
            trace!(handle = target.key(), "pointer-down rejected by handle");
        }
        settled
    }

    /// Pointer moved while pressed.
    ///
    /// Publishes an intermediate (`committed = false`) notification only when
    /// the committed value(s) actually change.
    pub fn on_pointer_move(
        &mut self,
        pointer_pos: f64,
        geometry: TrackGeometry,
    ) -> Option<SliderChange> {
        self.document.geometry = geometry;
        let handle = self.dragging?;

        let coordinator = &self.document.coordinator;
        let Some(proposed) = coordinator.handle(handle).and_then(|controller| {
            controller.update_drag(pointer_pos, &geometry, coordinator.model())
        }) else {
            trace!(pointer_pos, "pointer-move could not be mapped onto the track");
            return None;
        };
        trace!(handle = handle.key(), proposed, "drag proposal");
        self.commit_and_notify(handle, proposed, false)
    }

    /// Pointer released. Publishes a settle notification (`committed =
    /// true`) carrying the final value(s) of the dragged handle.
    pub fn on_pointer_up(&mut self) -> Option<SliderChange> {
        self.end_active_drag()
    }

    /// Pointer capture lost. Handled exactly like [`Self::on_pointer_up`].
    pub fn on_pointer_cancel(&mut self) -> Option<SliderChange> {
        self.end_active_drag()
    }

    /// One key press on `handle`.
    pub fn on_key_down(
        &mut self,
        handle: HandleId,
        direction: KeyDirection,
        large_step: bool,
    ) -> Option<SliderChange> {
        let model = *self.document.coordinator.model();
        let Some(controller) = self.document.coordinator.handle_mut(handle) else {
            warn!(handle = handle.key(), "key press for a handle this slider does not have");
            return None;
        };
        let proposed = controller.apply_key(direction, large_step, &model)?;
        self.commit_and_notify(handle, proposed, true)
    }

    /// One navigation key press on `handle`, mapped through the current
    /// layout direction.
    pub fn on_key(&mut self, handle: HandleId, key: SliderKey, shift: bool) -> Option<SliderChange> {
        let (direction, large_step) = key.resolve(shift, self.document.geometry.is_right_to_left);
        self.on_key_down(handle, direction, large_step)
    }

    /// Controlled-mode value push.
    ///
    /// The value is clamped and ordered exactly like input. Nothing is
    /// published when the result equals the current state, so echoing a
    /// notification back into the engine never loops.
    pub fn set_value_externally(&mut self, value: impl Into<SliderValue>) -> Option<SliderChange> {
        let value = value.into();
        if !value.is_finite() {
            warn!(?value, "ignoring non-finite external slider value");
            return None;
        }
        let coordinator = &mut self.document.coordinator;
        if value.is_range() != coordinator.is_range() {
            warn!(?value, "external value shape does not match the slider's handles");
        }

        let previous = coordinator.value();
        let next = coordinator.normalize(value);
        coordinator.replace(next);
        let changed = next.changed_from(&previous)?;
        self.emit(SliderChange {
            values: next,
            changed,
            committed: true,
        })
    }

    /// New geometry snapshot. Never changes a value.
    pub fn resize(&mut self, geometry: TrackGeometry) {
        if !geometry.is_valid() {
            trace!(?geometry, "track geometry cannot map positions yet");
        }
        self.document.geometry = geometry;
    }

    /// Updates the restrictions on one handle. Settles the handle's drag if
    /// it can no longer accept input.
    pub fn set_interactivity(
        &mut self,
        handle: HandleId,
        interactivity: HandleInteractivity,
    ) -> Option<SliderChange> {
        let controller = self.document.coordinator.handle_mut(handle)?;
        controller.set_interactivity(interactivity);
        if self.dragging == Some(handle) && !interactivity.accepts_input() {
            return self.end_active_drag();
        }
        None
    }

    /// `handle` received keyboard focus. Disabled handles cannot be focused.
    pub fn on_focus(&mut self, handle: HandleId) {
        let accepts_focus = self
            .document
            .coordinator
            .handle(handle)
            .is_some_and(|controller| !controller.interactivity().disabled);
        if accepts_focus {
            self.focus_handle(handle);
        }
    }

    /// `handle` lost keyboard focus.
    pub fn on_blur(&mut self, handle: HandleId) {
        if let Some(controller) = self.document.coordinator.handle_mut(handle) {
            controller.set_focused(false);
        }
    }

    /// Text typed into the number input paired with `handle`.
    ///
    /// Valid entries are committed right away; anything else is reported and
    /// left for the host to flag as invalid.
    pub fn on_text_input(&mut self, handle: HandleId, text: &str) -> TextInputOutcome {
        let parsed = text.trim().parse::<f64>().unwrap_or(f64::NAN);
        let validity = self.document.coordinator.model().validate(parsed);
        let accepts_input = self
            .document
            .coordinator
            .handle(handle)
            .is_some_and(|controller| controller.interactivity().accepts_input());

        let change = if validity.is_valid() && accepts_input {
            self.commit_and_notify(handle, parsed, true)
        } else {
            None
        };
        TextInputOutcome { validity, change }
    }

    /// Number input for `handle` confirmed (blur or Enter). Any finite number
    /// is clamped onto the grid and committed.
    pub fn commit_text_input(&mut self, handle: HandleId, text: &str) -> Option<SliderChange> {
        let Ok(parsed) = text.trim().parse::<f64>() else {
            trace!(text, "number input left unparsable");
            return None;
        };
        let accepts_input = self
            .document
            .coordinator
            .handle(handle)
            .is_some_and(|controller| controller.interactivity().accepts_input());
        if !accepts_input {
            return None;
        }
        self.commit_and_notify(handle, parsed, true)
    }

    /// Host detached the widget. Any drag ends without a notification.
    pub fn detach(mut self) -> SliderValue {
        if let Some(handle) = self.dragging.take()
            && let Some(controller) = self.document.coordinator.handle_mut(handle)
        {
            controller.end_drag();
        }
        let value = self.value();
        debug!(?value, "slider detached");
        value
    }

    pub(super) fn commit_and_notify(
        &mut self,
        handle: HandleId,
        proposed: f64,
        committed: bool,
    ) -> Option<SliderChange> {
        if !proposed.is_finite() {
            warn!(handle = handle.key(), proposed, "ignoring non-finite proposal");
            return None;
        }
        let coordinator = &mut self.document.coordinator;
        coordinator.handle(handle)?;

        let previous = coordinator.value();
        let next = coordinator.commit(handle, proposed);
        let changed = next.changed_from(&previous)?;
        self.emit(SliderChange {
            values: next,
            changed,
            committed,
        })
    }

    fn end_active_drag(&mut self) -> Option<SliderChange> {
        let handle = self.dragging.take()?;
        if let Some(controller) = self.document.coordinator.handle_mut(handle) {
            controller.end_drag();
        }
        debug!(handle = handle.key(), "pointer released");
        self.emit(SliderChange {
            values: self.value(),
            changed: handle.into(),
            committed: true,
        })
    }

    fn focus_handle(&mut self, handle: HandleId) {
        for controller in self.document.coordinator.handles_mut() {
            let focused = controller.id() == handle;
            controller.set_focused(focused);
        }
    }

    fn emit(&self, change: SliderChange) -> Option<SliderChange> {
        debug!(
            values = ?change.values,
            changed = ?change.changed,
            committed = change.committed,
            "slider changed"
        );
        self.on_change.call(change);
        Some(change)
    }
}

impl std::fmt::Debug for SliderEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderEngine")
            .field("document", &self.document)
            .field("dragging", &self.dragging)
            .finish_non_exhaustive()
    }
}
