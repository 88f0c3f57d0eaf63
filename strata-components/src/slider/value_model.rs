//! Pure numeric domain of a slider: clamping, step snapping and the mapping
//! between value space and track fractions.

use super::error::{ConfigurationError, DomainError};

/// Absolute tolerance, in step units, for treating a value as on the grid.
pub(crate) const GRID_EPSILON: f64 = 1e-9;

/// Direction of a keyboard adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyDirection {
    /// One step (or one large step) towards `max`.
    Increase,
    /// One step (or one large step) towards `min`.
    Decrease,
    /// Straight to the lowest value on the grid.
    ToMinimum,
    /// Straight to the highest value on the grid.
    ToMaximum,
}

/// Result of validating a typed value against the slider domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputValidity {
    /// In range and on the step grid.
    Valid,
    /// Finite but outside `[min, max]`.
    OutOfRange,
    /// In range but not a multiple of `step` from `min`.
    OffStep,
    /// Not a finite number.
    NotANumber,
}

impl InputValidity {
    /// Returns `true` for [`InputValidity::Valid`].
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

/// Numeric configuration of a slider track.
///
/// Construction guarantees `min < max`, a finite span, and a positive finite
/// `step` and `step_multiplier`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueModel {
    min: f64,
    max: f64,
    step: f64,
    step_multiplier: f64,
}

impl ValueModel {
    /// Validates and builds a value model.
    pub fn new(
        min: f64,
        max: f64,
        step: f64,
        step_multiplier: f64,
    ) -> Result<Self, ConfigurationError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigurationError::NonFiniteBound { min, max });
        }
        if min >= max {
            return Err(ConfigurationError::EmptyRange { min, max });
        }
        if !(max - min).is_finite() {
            return Err(ConfigurationError::RangeOverflow { min, max });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigurationError::InvalidStep(step));
        }
        if !step_multiplier.is_finite() || step_multiplier <= 0.0 {
            return Err(ConfigurationError::InvalidStepMultiplier(step_multiplier));
        }
        Ok(Self {
            min,
            max,
            step,
            step_multiplier,
        })
    }

    /// Lower bound of the domain.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the domain.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Step granularity.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Divisor of the range used for large keyboard steps.
    pub fn step_multiplier(&self) -> f64 {
        self.step_multiplier
    }

    /// `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Highest value on the step grid. Equals `max` when the range is a
    /// whole number of steps.
    pub fn grid_max(&self) -> f64 {
        self.grid_value(self.grid_top())
    }

    /// Clamps `raw` to `[min, max]`, then rounds it to the nearest multiple
    /// of `step` measured from `min`.
    ///
    /// An exact tie between two grid candidates goes to the one closer to
    /// the unclamped `raw`, then to the upper one. Grid points above `max`
    /// are never produced. NaN maps to `min`.
    pub fn clamp_to_step(&self, raw: f64) -> f64 {
        if raw.is_nan() {
            return self.min;
        }
        let clamped = raw.clamp(self.min, self.max);
        let top = self.grid_top();
        let position = snap_index((clamped - self.min) / self.step);
        let below = position.floor().min(top);
        let above = (below + 1.0).min(top);
        if below == above {
            return self.grid_value(below);
        }

        let low = self.grid_value(below);
        let high = self.grid_value(above);
        let to_low = clamped - low;
        let to_high = high - clamped;
        let index = if to_low < to_high {
            below
        } else if to_high < to_low {
            above
        } else if (raw - low).abs() < (raw - high).abs() {
            below
        } else {
            above
        };
        self.grid_value(index)
    }

    /// Maps a value to its fraction of the track, `(v - min) / (max - min)`,
    /// clamped to `[0, 1]`.
    pub fn value_to_fraction(&self, value: f64) -> Result<f64, DomainError> {
        let span = self.span();
        if !span.is_finite() || span <= 0.0 {
            return Err(DomainError::DegenerateRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(((value - self.min) / span).clamp(0.0, 1.0))
    }

    /// Maps a track fraction back to a stepped value.
    pub fn fraction_to_value(&self, fraction: f64) -> f64 {
        self.clamp_to_step(self.min + fraction * self.span())
    }

    /// Signed value delta for one keyboard adjustment.
    ///
    /// A regular step is `step`; a large step is `(max - min) / step_multiplier`
    /// rounded to a whole number of steps (at least one). The extreme
    /// directions move by the full span, which clamping turns into the grid
    /// bounds.
    pub fn keyboard_delta(&self, direction: KeyDirection, large_step: bool) -> f64 {
        let magnitude = match direction {
            KeyDirection::ToMinimum | KeyDirection::ToMaximum => self.span(),
            KeyDirection::Increase | KeyDirection::Decrease if large_step => self.large_step(),
            KeyDirection::Increase | KeyDirection::Decrease => self.step,
        };
        match direction {
            KeyDirection::Increase | KeyDirection::ToMaximum => magnitude,
            KeyDirection::Decrease | KeyDirection::ToMinimum => -magnitude,
        }
    }

    /// Magnitude of a large keyboard step.
    pub fn large_step(&self) -> f64 {
        let raw = self.span() / self.step_multiplier;
        ((raw / self.step).round() * self.step).max(self.step)
    }

    /// Classifies a typed value without changing it.
    pub fn validate(&self, raw: f64) -> InputValidity {
        if !raw.is_finite() {
            return InputValidity::NotANumber;
        }
        if raw < self.min || raw > self.max {
            return InputValidity::OutOfRange;
        }
        let position = (raw - self.min) / self.step;
        if (position - position.round()).abs() > GRID_EPSILON {
            return InputValidity::OffStep;
        }
        InputValidity::Valid
    }

    /// Whether `value` lies on the step grid within tolerance.
    pub fn is_on_grid(&self, value: f64) -> bool {
        self.validate(value).is_valid()
    }

    fn grid_top(&self) -> f64 {
        snap_index(self.span() / self.step).floor()
    }

    fn grid_value(&self, index: f64) -> f64 {
        (self.min + index * self.step).min(self.max)
    }
}

fn snap_index(position: f64) -> f64 {
    let nearest = position.round();
    if (position - nearest).abs() <= GRID_EPSILON {
        nearest
    } else {
        position
    }
}
