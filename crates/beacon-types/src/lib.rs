//! Foundation types for beacon.
//!
//! This crate provides the value types shared by every other beacon crate.
//! Everything here is a pure value or function; the crate performs no I/O.
//!
//! # Key Types
//!
//! - [`ParameterSet`] — Decoded measurement-protocol query parameters
//! - [`Event`] — One tracked user interaction, ready for storage
//! - [`build_event`] — Maps validated parameters onto an [`Event`]

pub mod builder;
pub mod error;
pub mod event;
pub mod params;

pub use builder::build_event;
pub use error::TypeError;
pub use event::Event;
pub use params::{keys, ParameterSet};
