use thiserror::Error;

/// Invalid static slider configuration, reported by
/// [`SliderEngine::attach`](super::SliderEngine::attach).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigurationError {
    /// `min` or `max` is NaN or infinite.
    #[error("slider bounds must be finite (min = {min}, max = {max})")]
    NonFiniteBound {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// `min >= max`.
    #[error("slider min ({min}) must be less than max ({max})")]
    EmptyRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// `max - min` overflows to infinity.
    #[error("slider range {min}..{max} is too wide to map onto a track")]
    RangeOverflow {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// `step` is not a finite positive number.
    #[error("slider step must be finite and positive, got {0}")]
    InvalidStep(f64),
    /// `step_multiplier` is not a finite positive number.
    #[error("slider step multiplier must be finite and positive, got {0}")]
    InvalidStepMultiplier(f64),
    /// Minimum separation is negative, non-finite, or cannot fit between the
    /// lowest and highest values on the step grid.
    #[error("minimum separation {separation} does not fit in a slider range of {span}")]
    InvalidSeparation {
        /// Configured separation.
        separation: f64,
        /// Usable span of the step grid.
        span: f64,
    },
}

/// A value mapping was attempted on a degenerate range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// `max - min` is zero, negative or not finite.
    #[error("cannot map values onto a degenerate range {min}..{max}")]
    DegenerateRange {
        /// Range minimum.
        min: f64,
        /// Range maximum.
        max: f64,
    },
}
