//! Refresh scheduling and payload routing.
//!
//! The coordinator is a small state machine over {no location, located}.
//! Each minute tick either refreshes the location (no fix yet, or the
//! quarter-hour cadence) or requests fresh data for the stored fix. All
//! requests are fire-and-forget; completions come back through
//! [`on_data_success`]/[`on_data_failure`] and are matched against the
//! most recently issued request id, so a superseded request can never act.
//!
//! [`on_data_success`]: RefreshCoordinator::on_data_success
//! [`on_data_failure`]: RefreshCoordinator::on_data_failure

use statusface_common::{Payload, UnitSystem, WeatherIcon};

use crate::connectivity::{ConnectivityMonitor, LinkEvents};
use crate::statusboard::StatusBoard;
use crate::surface::Surface;
use crate::transport::Transport;

/// Wall-clock minute multiple that forces a location refresh.
pub const LOCATION_REFRESH_MINUTES: u8 = 15;

/// Consecutive data failures tolerated before the no-data sentinel shows.
pub const MAX_DATA_FAILURES: u8 = 10;

/// Decides, per tick and per location fix, what to ask the phone for, and
/// routes inbound payloads into the status board.
pub struct RefreshCoordinator {
    /// Fixed-point coordinates, scaled by 10000 and truncated.
    latitude: i32,
    longitude: i32,
    located: bool,
    failed_count: u8,
    /// Id of the in-flight data request; completions with any other id
    /// are stale and ignored.
    pending_data: Option<u32>,
    next_request_id: u32,
    units: UnitSystem,
}

impl RefreshCoordinator {
    pub fn new(units: UnitSystem) -> Self {
        Self {
            latitude: 0,
            longitude: 0,
            located: false,
            failed_count: 0,
            pending_data: None,
            next_request_id: 1,
            units,
        }
    }

    /// Whether a location fix has been stored.
    pub fn located(&self) -> bool { self.located }

    /// Stored fixed-point coordinates, if located.
    pub fn coordinates(&self) -> Option<(i32, i32)> {
        self.located.then_some((self.latitude, self.longitude))
    }

    /// Consecutive data failures since the last success.
    pub fn failed_count(&self) -> u8 { self.failed_count }

    /// Minute tick: refresh the location when there is no fix yet or on
    /// the quarter-hour; otherwise request data for the stored fix.
    pub fn on_tick<T, S>(&mut self, minute: u8, transport: &mut T, board: &mut StatusBoard, surface: &mut S)
    where
        T: Transport,
        S: Surface,
    {
        if !self.located || minute % LOCATION_REFRESH_MINUTES == 0 {
            let _ = transport.request_location();
        } else {
            self.request_data(transport, board, surface);
        }
    }

    /// Issue a data request for the stored fix, tagged with a fresh id.
    ///
    /// Without a fix this degrades to a location request. An immediate
    /// send error shows the no-data sentinel; the clock keeps ticking.
    pub fn request_data<T, S>(&mut self, transport: &mut T, board: &mut StatusBoard, surface: &mut S)
    where
        T: Transport,
        S: Surface,
    {
        if !self.located {
            let _ = transport.request_location();
            return;
        }

        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);
        self.pending_data = Some(request_id);

        if let Err(err) = transport.request_data(self.latitude, self.longitude, self.units, request_id) {
            log::warn!("data request not sent: {err}");
            board.set_weather_icon(surface, WeatherIcon::NoWeather);
        }
    }

    /// Location fix delivered by the phone. Stores the fix and requests
    /// data immediately rather than waiting for the next tick.
    pub fn on_location<T, S>(
        &mut self,
        latitude: f32,
        longitude: f32,
        transport: &mut T,
        board: &mut StatusBoard,
        surface: &mut S,
    ) where
        T: Transport,
        S: Surface,
    {
        self.latitude = (latitude * 10000.0) as i32;
        self.longitude = (longitude * 10000.0) as i32;
        self.located = true;
        log::debug!("location fix stored ({}, {})", self.latitude, self.longitude);
        self.request_data(transport, board, surface);
    }

    /// The bridge session was re-established; the old fix may be far
    /// stale, so drop it and ask for a new one right away.
    pub fn on_reconnect<T: Transport>(&mut self, transport: &mut T) {
        self.located = false;
        let _ = transport.request_location();
    }

    /// Successful data completion.
    ///
    /// Stale ids are discarded in their entirety. Otherwise the failure
    /// streak resets, the monitor hears the success, and the payload
    /// routes to exactly one path: the activation code when present takes
    /// total precedence over every data field.
    pub fn on_data_success<S, E>(
        &mut self,
        request_id: u32,
        payload: &Payload,
        board: &mut StatusBoard,
        surface: &mut S,
        monitor: &mut ConnectivityMonitor<E>,
    ) where
        S: Surface,
        E: LinkEvents,
    {
        if self.pending_data != Some(request_id) {
            log::debug!("discarding stale data response (id {request_id})");
            return;
        }
        self.pending_data = None;
        self.failed_count = 0;
        monitor.handle_success();

        if let Some(code) = payload.activation_code() {
            board.set_activation_code(surface, code);
            return;
        }

        if let Some(code) = payload.weather_icon() {
            board.set_weather_icon(surface, WeatherIcon::from_code(code));
        }
        if let Some(value) = payload.temperature() {
            board.set_temperature(surface, value);
        }
        if let Some(count) = payload.unread_mail() {
            board.set_unread_mail(surface, count, payload.vibrate());
        }
        if let Some(count) = payload.unread_social() {
            board.set_unread_social(surface, count);
        }
    }

    /// Failed data completion.
    ///
    /// Counts the failure and, past the tolerance, shows the no-data
    /// sentinel. The code is always forwarded to the monitor, whose
    /// filter decides whether it says anything about the link.
    pub fn on_data_failure<S, E>(
        &mut self,
        request_id: u32,
        status: i32,
        board: &mut StatusBoard,
        surface: &mut S,
        monitor: &mut ConnectivityMonitor<E>,
    ) where
        S: Surface,
        E: LinkEvents,
    {
        if self.pending_data != Some(request_id) {
            log::debug!("discarding stale data failure (id {request_id})");
            return;
        }
        self.pending_data = None;
        self.failed_count = self.failed_count.saturating_add(1);
        if self.failed_count > MAX_DATA_FAILURES {
            log::warn!("{} consecutive data failures, showing no-data sentinel", self.failed_count);
            board.set_weather_icon(surface, WeatherIcon::NoWeather);
        }
        monitor.handle_failure(status);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
