//! Interaction engine for single-value and dual-handle range sliders.
//!
//! ## Usage
//!
//! The host rendering layer attaches a [`SliderEngine`], forwards raw input
//! to it, and redraws whenever a [`SliderChange`] is published. Handle
//! positions are read back from the engine and never written into it.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use strata_components::slider::{
//!     ChangedHandle, SliderChange, SliderConfig, SliderEngine, SliderValue, TrackGeometry,
//! };
//!
//! let seen = Arc::new(Mutex::new(Vec::<SliderChange>::new()));
//! let sink = Arc::clone(&seen);
//! let geometry = TrackGeometry::new(0.0, 100.0, false);
//! let mut engine = SliderEngine::attach((10.0, 90.0), SliderConfig::default(), geometry)?
//!     .with_on_change(move |change| sink.lock().unwrap().push(change));
//!
//! engine.on_pointer_down(10.0, geometry);
//! engine.on_pointer_move(40.0, geometry);
//! engine.on_pointer_up();
//!
//! let seen = seen.lock().unwrap();
//! assert_eq!(seen.len(), 2);
//! assert_eq!(seen[0].values, SliderValue::Range(40.0, 90.0));
//! assert_eq!(seen[0].changed, ChangedHandle::Lower);
//! assert!(!seen[0].committed);
//! assert!(seen[1].committed);
//! # Ok::<(), strata_components::slider::ConfigurationError>(())
//! ```
use derive_setters::Setters;

mod accessibility;
mod engine;
mod error;
mod geometry;
mod handle;
mod keyboard;
mod track;
mod value_model;

pub use accessibility::SliderLabels;
pub use engine::{SliderDocument, SliderEngine, TextInputOutcome};
pub use error::{ConfigurationError, DomainError};
pub use geometry::TrackGeometry;
pub use handle::{HandleController, HandleId, HandleInteractivity, HandlePhase, HandleState};
pub use keyboard::SliderKey;
pub use track::TrackCoordinator;
pub use value_model::{InputValidity, KeyDirection, ValueModel};

use value_model::GRID_EPSILON;

/// Value(s) held by a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderValue {
    /// One handle.
    Single(f64),
    /// Lower and upper handle of a range slider.
    Range(f64, f64),
}

impl SliderValue {
    /// The single value, or the lower bound of a range.
    pub fn lower(&self) -> f64 {
        match *self {
            Self::Single(value) | Self::Range(value, _) => value,
        }
    }

    /// The upper bound of a range.
    pub fn upper(&self) -> Option<f64> {
        match *self {
            Self::Single(_) => None,
            Self::Range(_, upper) => Some(upper),
        }
    }

    /// Value of the given handle.
    pub fn get(&self, handle: HandleId) -> Option<f64> {
        match handle {
            HandleId::Lower => Some(self.lower()),
            HandleId::Upper => self.upper(),
        }
    }

    /// Whether this holds two values.
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range(..))
    }

    /// Whether every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.lower().is_finite() && self.upper().is_none_or(f64::is_finite)
    }
}

impl From<f64> for SliderValue {
    fn from(value: f64) -> Self {
        Self::Single(value)
    }
}

impl From<(f64, f64)> for SliderValue {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::Range(lower, upper)
    }
}

impl From<[f64; 2]> for SliderValue {
    fn from([lower, upper]: [f64; 2]) -> Self {
        Self::Range(lower, upper)
    }
}

/// Which handle(s) a notification reports as changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangedHandle {
    /// Only the lower (or only) handle.
    Lower,
    /// Only the upper handle.
    Upper,
    /// Both handles.
    Both,
}

impl From<HandleId> for ChangedHandle {
    fn from(handle: HandleId) -> Self {
        match handle {
            HandleId::Lower => Self::Lower,
            HandleId::Upper => Self::Upper,
        }
    }
}

/// Notification published to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderChange {
    /// All current values after the change.
    pub values: SliderValue,
    /// Handle(s) the notification is about.
    pub changed: ChangedHandle,
    /// `false` for intermediate drag frames; `true` for drag settle,
    /// keyboard, accessibility, text input and external sets.
    pub committed: bool,
}

/// Static configuration of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct SliderConfig {
    /// Lowest value.
    pub min: f64,
    /// Highest value.
    pub max: f64,
    /// Granularity values snap to, measured from `min`.
    pub step: f64,
    /// Large keyboard steps move by `(max - min) / step_multiplier`.
    pub step_multiplier: f64,
    /// Minimum distance between the two handles of a range slider. Rounded
    /// up to the step grid.
    pub min_separation: f64,
    /// Disables both handles.
    pub disabled: bool,
    /// Makes both handles read-only.
    pub read_only: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            step_multiplier: 4.0,
            min_separation: 0.0,
            disabled: false,
            read_only: false,
        }
    }
}

impl SliderConfig {
    /// Validates the numeric part of the configuration.
    pub fn value_model(&self) -> Result<ValueModel, ConfigurationError> {
        ValueModel::new(self.min, self.max, self.step, self.step_multiplier)
    }

    /// Minimum separation rounded up to a whole number of steps.
    pub fn resolved_separation(&self, model: &ValueModel) -> Result<f64, ConfigurationError> {
        let usable = model.grid_max() - model.min();
        let invalid = ConfigurationError::InvalidSeparation {
            separation: self.min_separation,
            span: usable,
        };
        if !self.min_separation.is_finite() || self.min_separation < 0.0 {
            return Err(invalid);
        }
        let steps = (self.min_separation / model.step() - GRID_EPSILON).ceil().max(0.0);
        let separation = steps * model.step();
        if separation > usable + GRID_EPSILON * model.step() {
            return Err(invalid);
        }
        Ok(separation)
    }

    fn interactivity(&self) -> HandleInteractivity {
        HandleInteractivity {
            disabled: self.disabled,
            read_only: self.read_only,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_setters() {
        let config = SliderConfig::default()
            .min(-10.0)
            .max(10.0)
            .step(0.5)
            .read_only(true);
        assert_eq!(config.min, -10.0);
        assert_eq!(config.max, 10.0);
        assert_eq!(config.step, 0.5);
        assert_eq!(config.step_multiplier, 4.0);
        assert!(config.read_only);
    }

    #[test]
    fn test_resolved_separation_rounds_up() {
        let config = SliderConfig::default().step(5.0).min_separation(7.0);
        let model = config.value_model().expect("valid model");
        assert_eq!(config.resolved_separation(&model), Ok(10.0));

        let config = SliderConfig::default().step(5.0).min_separation(10.0);
        assert_eq!(config.resolved_separation(&model), Ok(10.0));
    }

    #[test]
    fn test_resolved_separation_rejects_oversized() {
        let config = SliderConfig::default().max(10.0).step(4.0).min_separation(9.0);
        let model = config.value_model().expect("valid model");
        assert!(matches!(
            config.resolved_separation(&model),
            Err(ConfigurationError::InvalidSeparation { .. })
        ));

        let config = SliderConfig::default().min_separation(-1.0);
        let model = config.value_model().expect("valid model");
        assert!(config.resolved_separation(&model).is_err());
    }

    #[test]
    fn test_slider_value_accessors() {
        let single = SliderValue::from(3.0);
        assert_eq!(single.lower(), 3.0);
        assert_eq!(single.upper(), None);
        assert_eq!(single.get(HandleId::Upper), None);

        let range = SliderValue::from([1.0, 2.0]);
        assert!(range.is_range());
        assert_eq!(range.get(HandleId::Upper), Some(2.0));
        assert!(!SliderValue::Range(1.0, f64::NAN).is_finite());
    }
}
