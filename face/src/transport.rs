//! The outbound request boundary toward the phone bridge.
//!
//! All requests are fire-and-forget: issuing one returns immediately and
//! the outcome arrives later as a separate [`Event`](crate::app::Event).
//! Completions may arrive in any order, so data requests carry an id that
//! the coordinator checks before acting on a result.

use statusface_common::UnitSystem;

/// Error code delivered when the companion app on the phone is not running.
/// An authoritative link failure.
pub const ERR_REMOTE_APP_NOT_RUNNING: i32 = 1008;

/// Error code for transient bridge backpressure. More likely a temporary
/// condition than a lost watch, so never treated as a link failure.
pub const ERR_BRIDGE_BUSY: i32 = 1064;

/// The bridge forwards its HTTP-layer errors offset by 1000; code 14 is an
/// invalid upstream response. The phone may have no internet connection,
/// but the link to it is fine.
pub const ERR_INVALID_BRIDGE_RESPONSE: i32 = 1014;

/// Immediate send failure reported by the bridge.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// The outbound queue is full; try again on a later tick.
    #[error("outbound queue busy")]
    Busy,
    /// No bridge session is currently established.
    #[error("bridge not connected")]
    NotConnected,
}

/// The phone-facing request channel.
pub trait Transport {
    /// Ask the phone for a fresh location fix. Resolves asynchronously to
    /// [`Event::Location`](crate::app::Event::Location).
    fn request_location(&mut self) -> Result<(), TransportError>;

    /// Ask the phone for a status payload for the given fixed-point
    /// coordinates. Resolves asynchronously to `Event::RequestSuccess` or
    /// `Event::RequestFailure` carrying the same `request_id`.
    fn request_data(
        &mut self,
        latitude: i32,
        longitude: i32,
        units: UnitSystem,
        request_id: u32,
    ) -> Result<(), TransportError>;
}
