//! Link-health tracking for the phone bridge.
//!
//! The bridge surfaces low-level delivery errors that are orthogonal to
//! "is the companion link alive": backpressure and upstream-service
//! failures must not be conflated with a dead link. The monitor filters
//! those out and keeps a single tri-state health value; everything else it
//! hears marks the link failed until the next delivered message.

use crate::transport::{ERR_BRIDGE_BUSY, ERR_INVALID_BRIDGE_RESPONSE, Transport};

/// Health of the phone link.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkHealth {
    /// No delivery result observed yet.
    #[default]
    Unknown,
    /// An authoritative delivery failure was the last word.
    Failed,
    /// The last delivery succeeded.
    Ok,
}

/// Hooks fired on health transitions.
///
/// Both default to no-ops: the transitions are intended extension points
/// (alerting, glyph swaps) rather than required behavior.
pub trait LinkEvents {
    /// The link was healthy and just failed.
    fn link_lost(&mut self) {}

    /// The link was failed and just recovered.
    fn link_restored(&mut self) {}
}

/// The default observer: both transitions remain no-ops.
#[derive(Default)]
pub struct NullLinkEvents;

impl LinkEvents for NullLinkEvents {}

/// Latching transition recorder, for callers that poll after dispatching
/// an event instead of reacting inside the hook.
#[derive(Default)]
pub struct LinkFlags {
    lost: bool,
    restored: bool,
}

impl LinkFlags {
    /// Consume the pending lost transition, if any.
    pub fn take_lost(&mut self) -> bool { core::mem::take(&mut self.lost) }

    /// Consume the pending restored transition, if any.
    pub fn take_restored(&mut self) -> bool { core::mem::take(&mut self.restored) }
}

impl LinkEvents for LinkFlags {
    fn link_lost(&mut self) { self.lost = true; }

    fn link_restored(&mut self) { self.restored = true; }
}

/// Tracks link health from asynchronous delivery results.
///
/// All calls arrive serialized on the single-threaded event context; the
/// monitor never reads or writes any other component's state.
pub struct ConnectivityMonitor<E: LinkEvents = NullLinkEvents> {
    health: LinkHealth,
    events: E,
}

impl Default for ConnectivityMonitor<NullLinkEvents> {
    fn default() -> Self { Self::new() }
}

impl ConnectivityMonitor<NullLinkEvents> {
    pub fn new() -> Self { Self::with_events(NullLinkEvents) }
}

impl<E: LinkEvents> ConnectivityMonitor<E> {
    /// Create a monitor with a transition observer.
    pub fn with_events(events: E) -> Self {
        Self {
            health: LinkHealth::Unknown,
            events,
        }
    }

    /// Current health value.
    pub fn health(&self) -> LinkHealth { self.health }

    /// Access the transition observer (e.g. to poll a [`LinkFlags`]).
    pub fn events_mut(&mut self) -> &mut E { &mut self.events }

    /// Provoke a channel-health signal from the bridge.
    ///
    /// Any outbound message will do: its delivery result comes back
    /// through the normal callbacks. A send error here is itself such a
    /// signal, so the result is deliberately ignored.
    pub fn ping<T: Transport>(&mut self, transport: &mut T) {
        let _ = transport.request_location();
    }

    /// Record a delivery failure.
    ///
    /// Non-authoritative codes (backpressure, upstream unreachable) leave
    /// the health untouched; everything else marks the link failed.
    pub fn handle_failure(&mut self, error_code: i32) {
        match error_code {
            ERR_BRIDGE_BUSY | ERR_INVALID_BRIDGE_RESPONSE => return,
            _ => {}
        }

        if self.health == LinkHealth::Ok {
            log::warn!("link lost (code {error_code})");
            self.events.link_lost();
        }
        self.health = LinkHealth::Failed;
    }

    /// Record a successful delivery.
    pub fn handle_success(&mut self) {
        if self.health == LinkHealth::Failed {
            log::info!("link restored");
            self.events.link_restored();
        }
        self.health = LinkHealth::Ok;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
