//! Shared primitives for the strata component library.
//!
//! strata components are headless: they own interaction state and numeric
//! models, while a host rendering layer owns DOM/window attachment and redraw.
//! This crate holds the pieces every component shares with its host:
//!
//! - [`CallbackWith`]: identity-compared notification handles, so component
//!   configuration can stay `PartialEq` without comparing closures.
//! - [`AccessibilityNode`]: semantic metadata a component publishes for its
//!   host to forward to assistive technologies through AccessKit.
//! - [`logging::init_tracing`]: the default `tracing` subscriber used by
//!   hosts and demos.
//!
//! ```
//! use strata_ui::CallbackWith;
//!
//! let on_change = CallbackWith::new(|value: f64| {
//!     assert!(value >= 0.0);
//! });
//! on_change.call(42.0);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod accessibility;
pub mod logging;
pub mod prop;

pub use accesskit;
pub use accessibility::AccessibilityNode;
pub use prop::{CallbackWith, Slot};
