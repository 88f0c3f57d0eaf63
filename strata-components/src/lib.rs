//! Headless interaction engines for strata design-system widgets.
//!
//! Each component in this crate owns the value and gesture model of one
//! widget. The embedding rendering layer feeds it raw input (pointer
//! positions in track-local pixels, key presses, geometry snapshots) and
//! redraws whenever the component publishes a change notification.
//!
//! # Example
//!
//! ```
//! use strata_components::slider::{
//!     HandleId, KeyDirection, SliderConfig, SliderEngine, TrackGeometry,
//! };
//!
//! let config = SliderConfig::default().max(100.0).step(5.0);
//! let geometry = TrackGeometry::new(0.0, 200.0, false);
//! let mut engine = SliderEngine::attach(50.0, config, geometry)?;
//!
//! let change = engine.on_key_down(HandleId::Lower, KeyDirection::Increase, false);
//! assert_eq!(change.map(|c| c.values.lower()), Some(55.0));
//! # Ok::<(), strata_components::slider::ConfigurationError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod slider;
