//! Core state machines for the statusface watch face.
//!
//! This library contains all face logic that does not depend on a real
//! display or a real phone link, so it can be tested on the host machine:
//!
//! - [`connectivity`]: Link-health tracking with error-code filtering
//! - [`statusboard`]: The overlay state machine for the status region
//! - [`coordinator`]: Location/data refresh scheduling and payload routing
//! - [`clockface`]: Time and date text formatting
//! - [`surface`]: The retained-mode display boundary the board draws into
//! - [`transport`]: The outbound request boundary toward the phone
//! - [`app`]: Single-threaded event dispatch tying the components together
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p statusface
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the
//! standard test framework while embedded builds stay `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod clockface;
pub mod connectivity;
pub mod coordinator;
pub mod statusboard;
pub mod surface;
pub mod transport;

#[cfg(test)]
mod testutil;

// Re-export at top level for convenience
pub use app::{App, Event};
pub use connectivity::{ConnectivityMonitor, LinkHealth};
pub use coordinator::RefreshCoordinator;
pub use statusboard::StatusBoard;
pub use surface::Surface;
pub use transport::Transport;
