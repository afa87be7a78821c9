//! Scripted phone bridge.
//!
//! Stands in for the real phone app: requests resolve one simulated
//! minute later as queued events, and a fixed script walks the face
//! through a busy hiccup, an upstream outage long enough to trip the
//! no-data sentinel, a dead-companion window, a reconnect, and an
//! activation-code delivery. Deterministic, so a run is reproducible.

use std::collections::VecDeque;

use micromath::F32;
use statusface::app::Event;
use statusface::transport::{
    ERR_BRIDGE_BUSY,
    ERR_INVALID_BRIDGE_RESPONSE,
    ERR_REMOTE_APP_NOT_RUNNING,
    Transport,
    TransportError,
};
use statusface_common::payload::{
    KEY_ACTIVATION_CODE,
    KEY_TEMPERATURE,
    KEY_UNREAD_MAIL,
    KEY_UNREAD_SOCIAL,
    KEY_VIBRATE,
    KEY_WEATHER_ICON,
    Value,
};
use statusface_common::{Payload, UnitSystem};

/// Simulated location fix delivered for every location request.
const FIX_LATITUDE: f32 = 47.6062;
const FIX_LONGITUDE: f32 = -122.3321;

/// Step with transient bridge backpressure.
const BUSY_STEP: u32 = 7;

/// Steps where the phone has no internet but the link is fine.
const UPSTREAM_OUTAGE: core::ops::RangeInclusive<u32> = 25..=39;

/// Steps where the companion app on the phone is not running.
const COMPANION_OUTAGE: core::ops::RangeInclusive<u32> = 55..=64;

/// Step at which the bridge session is re-established.
const RECONNECT_STEP: u32 = 65;

/// Steps delivering the account activation code instead of data.
const ACTIVATION_WINDOW: core::ops::RangeInclusive<u32> = 75..=77;

/// Weather icon codes cycled through the day (night-ish conditions).
const ICON_CYCLE: [i8; 4] = [1, 7, 2, 9];

/// The scripted bridge. Owns the delivery queue; the simulator drains it
/// each minute with [`take_due`](ScriptedPhone::take_due).
pub struct ScriptedPhone {
    now: u32,
    inbox: VecDeque<(u32, Event)>,
}

impl ScriptedPhone {
    pub fn new() -> Self {
        Self {
            now: 0,
            inbox: VecDeque::new(),
        }
    }

    /// Advance the script clock and drain every due delivery.
    pub fn take_due(&mut self, step: u32) -> Vec<Event> {
        self.now = step;
        let mut due: Vec<Event> = Vec::new();
        if step == RECONNECT_STEP {
            due.push(Event::Reconnect);
        }
        while self.inbox.front().is_some_and(|(at, _)| *at <= step) {
            if let Some((_, event)) = self.inbox.pop_front() {
                due.push(event);
            }
        }
        due
    }

    fn deliver_next_minute(&mut self, event: Event) {
        self.inbox.push_back((self.now + 1, event));
    }

    fn unread_mail(step: u32) -> i16 {
        match step {
            0..=4 => 0,
            5..=15 => 3,
            16..=44 => 5,
            45..=69 => 2,
            _ => 6,
        }
    }

    fn weather_payload(step: u32) -> Payload {
        let t = step as f32;
        let temperature = (15.0 + 9.0 * F32(t * 0.35).sin().0) as i16;
        let icon = ICON_CYCLE[(step / 3) as usize % ICON_CYCLE.len()];

        let mut payload = Payload::new();
        payload.insert(KEY_WEATHER_ICON, Value::Int8(icon)).expect("payload space");
        payload
            .insert(KEY_TEMPERATURE, Value::Int16(temperature))
            .expect("payload space");
        // Mail and social alternate; they share the badge region on the
        // face, so the phone app sends one or the other.
        if (step % 10) < 7 {
            payload
                .insert(KEY_UNREAD_MAIL, Value::Int16(Self::unread_mail(step)))
                .expect("payload space");
            payload.insert(KEY_VIBRATE, Value::Int16(1)).expect("payload space");
        } else {
            payload
                .insert(KEY_UNREAD_SOCIAL, Value::Int16(((step / 7) % 4) as i16))
                .expect("payload space");
        }
        payload
    }

    fn activation_payload() -> Payload {
        let mut payload = Payload::new();
        payload
            .insert(KEY_ACTIVATION_CODE, Value::Text4(*b"7G2K"))
            .expect("payload space");
        payload
    }
}

impl Default for ScriptedPhone {
    fn default() -> Self { Self::new() }
}

impl Transport for ScriptedPhone {
    fn request_location(&mut self) -> Result<(), TransportError> {
        // With the companion app down, the request vanishes into the
        // bridge; nothing ever comes back for it.
        if !COMPANION_OUTAGE.contains(&self.now) {
            self.deliver_next_minute(Event::Location {
                latitude: FIX_LATITUDE,
                longitude: FIX_LONGITUDE,
                altitude: 56.0,
                accuracy: 10.0,
            });
        }
        Ok(())
    }

    fn request_data(
        &mut self,
        _latitude: i32,
        _longitude: i32,
        _units: UnitSystem,
        request_id: u32,
    ) -> Result<(), TransportError> {
        let step = self.now;
        let event = if step == BUSY_STEP {
            Event::RequestFailure {
                request_id,
                status: ERR_BRIDGE_BUSY,
            }
        } else if UPSTREAM_OUTAGE.contains(&step) {
            Event::RequestFailure {
                request_id,
                status: ERR_INVALID_BRIDGE_RESPONSE,
            }
        } else if COMPANION_OUTAGE.contains(&step) {
            Event::RequestFailure {
                request_id,
                status: ERR_REMOTE_APP_NOT_RUNNING,
            }
        } else if ACTIVATION_WINDOW.contains(&step) {
            Event::RequestSuccess {
                request_id,
                payload: Self::activation_payload(),
            }
        } else {
            Event::RequestSuccess {
                request_id,
                payload: Self::weather_payload(step),
            }
        };
        self.deliver_next_minute(event);
        Ok(())
    }
}
