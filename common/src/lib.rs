//! Common types and constants for the statusface watch face.
//!
//! This crate contains platform-agnostic code shared between the core state
//! machines and any renderer (desktop simulator or hardware):
//!
//! - [`icons`]: The weather icon table and untrusted-code clamping
//! - [`layout`]: Screen geometry and region frames
//! - [`payload`]: The integer-keyed data payload delivered by the phone
//! - [`units`]: Unit-system preference sent with data requests
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` and can be used on embedded targets. It avoids
//! any dependency on `std::time` or platform-specific types.

#![no_std]

pub mod icons;
pub mod layout;
pub mod payload;
pub mod units;

// Re-export commonly used items
pub use icons::WeatherIcon;
pub use payload::{ActivationCode, Payload, Value};
pub use units::UnitSystem;
