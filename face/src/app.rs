//! Single-threaded event dispatch.
//!
//! The platform delivers exactly one event at a time (a minute tick, a
//! location fix, a reconnect, or a request completion) and never
//! preempts a handler. [`App`] owns every component and routes events by
//! explicit calls; there is no shared mutable state and no locking.

use statusface_common::{Payload, UnitSystem};

use crate::clockface::{self, HourStyle, TickTime};
use crate::connectivity::{ConnectivityMonitor, LinkFlags, LinkHealth};
use crate::coordinator::RefreshCoordinator;
use crate::statusboard::StatusBoard;
use crate::surface::Surface;
use crate::transport::Transport;

/// An event delivered by the platform.
#[derive(Clone, Debug)]
pub enum Event {
    /// Minute tick with the current clock components.
    Tick(TickTime),
    /// Asynchronous result of a location request.
    Location {
        latitude: f32,
        longitude: f32,
        altitude: f32,
        accuracy: f32,
    },
    /// The bridge session was re-established.
    Reconnect,
    /// Successful completion of a data request.
    RequestSuccess { request_id: u32, payload: Payload },
    /// Failed completion of a data request.
    RequestFailure { request_id: u32, status: i32 },
}

/// The assembled watch face.
pub struct App<T: Transport, S: Surface> {
    transport: T,
    surface: S,
    monitor: ConnectivityMonitor<LinkFlags>,
    board: StatusBoard,
    coordinator: RefreshCoordinator,
    hour_style: HourStyle,
}

impl<T: Transport, S: Surface> App<T, S> {
    pub fn new(transport: T, surface: S, units: UnitSystem, hour_style: HourStyle) -> Self {
        Self {
            transport,
            surface,
            monitor: ConnectivityMonitor::with_events(LinkFlags::default()),
            board: StatusBoard::new(),
            coordinator: RefreshCoordinator::new(units),
            hour_style,
        }
    }

    /// Populate the face immediately instead of waiting for the first
    /// minute boundary: one forced tick with the date line refreshed.
    pub fn startup(&mut self, now: TickTime) {
        let mut first = now;
        first.day_changed = true;
        self.handle_event(Event::Tick(first));
    }

    /// Process one platform event to completion.
    pub fn handle_event(&mut self, event: Event) {
        let Self {
            transport,
            surface,
            monitor,
            board,
            coordinator,
            hour_style,
        } = self;

        match event {
            Event::Tick(t) => {
                clockface::render(&t, *hour_style, surface);
                coordinator.on_tick(t.minute, transport, board, surface);
            }
            Event::Location {
                latitude, longitude, ..
            } => {
                coordinator.on_location(latitude, longitude, transport, board, surface);
            }
            Event::Reconnect => coordinator.on_reconnect(transport),
            Event::RequestSuccess { request_id, payload } => {
                coordinator.on_data_success(request_id, &payload, board, surface, monitor);
            }
            Event::RequestFailure { request_id, status } => {
                coordinator.on_data_failure(request_id, status, board, surface, monitor);
            }
        }

        // The health-transition hooks are wired to the display: a lost
        // link raises the no-link glyph. Restoration leaves the glyph for
        // the next routed overlay to displace.
        if monitor.events_mut().take_lost() {
            board.set_no_link_glyph(surface);
        }
        let _ = monitor.events_mut().take_restored();
    }

    /// Release every display resource. Called once at shutdown.
    pub fn shutdown(&mut self) {
        self.board.detach_all(&mut self.surface);
    }

    pub fn board(&self) -> &StatusBoard { &self.board }

    pub fn link_health(&self) -> LinkHealth { self.monitor.health() }

    pub fn surface(&self) -> &S { &self.surface }

    pub fn transport_mut(&mut self) -> &mut T { &mut self.transport }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use statusface_common::WeatherIcon;
    use statusface_common::payload::{KEY_TEMPERATURE, KEY_UNREAD_MAIL, KEY_VIBRATE, KEY_WEATHER_ICON, Value};

    use super::*;
    use crate::clockface::{Month, Weekday};
    use crate::surface::TextSlot;
    use crate::testutil::{MockTransport, RecordingSurface, SentRequest};
    use crate::transport::ERR_REMOTE_APP_NOT_RUNNING;

    fn tick(hour: u8, minute: u8) -> TickTime {
        TickTime {
            weekday: Weekday::Fri,
            month: Month::Aug,
            day: 7,
            hour,
            minute,
            day_changed: false,
        }
    }

    fn new_app() -> App<MockTransport, RecordingSurface> {
        App::new(
            MockTransport::default(),
            RecordingSurface::default(),
            UnitSystem::Metric,
            HourStyle::H24,
        )
    }

    #[test]
    fn test_startup_populates_clock_and_requests_location() {
        let mut app = new_app();
        app.startup(tick(9, 41));

        assert_eq!(app.surface().text(TextSlot::Hour), Some("9"));
        assert_eq!(app.surface().text(TextSlot::Minute), Some(":41"));
        assert_eq!(app.surface().text(TextSlot::Date), Some("Fri, Aug 07"));
        assert_eq!(app.transport_mut().sent, vec![SentRequest::Location]);
    }

    #[test]
    fn test_payload_flows_through_to_board() {
        let mut app = new_app();
        app.startup(tick(9, 41));
        app.handle_event(Event::Location {
            latitude: 47.6062,
            longitude: -122.3321,
            altitude: 56.0,
            accuracy: 10.0,
        });

        let request_id = match app.transport_mut().sent.last() {
            Some(SentRequest::Data { request_id, .. }) => *request_id,
            other => panic!("expected a data request, got {other:?}"),
        };

        let mut payload = Payload::new();
        payload.insert(KEY_WEATHER_ICON, Value::Int8(2)).unwrap();
        payload.insert(KEY_TEMPERATURE, Value::Int16(18)).unwrap();
        payload.insert(KEY_UNREAD_MAIL, Value::Int16(4)).unwrap();
        payload.insert(KEY_VIBRATE, Value::Int16(0)).unwrap();
        app.handle_event(Event::RequestSuccess { request_id, payload });

        assert_eq!(app.board().weather_icon(), Some(WeatherIcon::Rain));
        assert_eq!(app.board().temperature(), Some(18));
        assert_eq!(app.board().unread_mail(), 4);
        assert_eq!(app.link_health(), LinkHealth::Ok);
    }

    #[test]
    fn test_authoritative_failure_raises_no_link_glyph() {
        let mut app = new_app();
        app.startup(tick(9, 41));
        app.handle_event(Event::Location {
            latitude: 47.6062,
            longitude: -122.3321,
            altitude: 56.0,
            accuracy: 10.0,
        });

        // Establish a healthy link first, so the lost hook can fire.
        let request_id = match app.transport_mut().sent.last() {
            Some(SentRequest::Data { request_id, .. }) => *request_id,
            other => panic!("expected a data request, got {other:?}"),
        };
        app.handle_event(Event::RequestSuccess {
            request_id,
            payload: Payload::new(),
        });
        assert_eq!(app.link_health(), LinkHealth::Ok);

        app.handle_event(Event::Tick(tick(9, 42)));
        let request_id = match app.transport_mut().sent.last() {
            Some(SentRequest::Data { request_id, .. }) => *request_id,
            other => panic!("expected a data request, got {other:?}"),
        };
        app.handle_event(Event::RequestFailure {
            request_id,
            status: ERR_REMOTE_APP_NOT_RUNNING,
        });

        assert_eq!(app.link_health(), LinkHealth::Failed);
        assert!(app.board().has_no_link_glyph());
    }

    #[test]
    fn test_clock_keeps_ticking_through_failures() {
        let mut app = new_app();
        app.startup(tick(9, 41));

        for minute in 42..50 {
            app.handle_event(Event::Tick(tick(9, minute)));
            app.handle_event(Event::RequestFailure {
                request_id: 9999,
                status: ERR_REMOTE_APP_NOT_RUNNING,
            });
        }

        assert_eq!(app.surface().text(TextSlot::Minute), Some(":49"));
    }

    #[test]
    fn test_shutdown_releases_resources() {
        let mut app = new_app();
        app.startup(tick(9, 41));
        app.handle_event(Event::Location {
            latitude: 1.0,
            longitude: 2.0,
            altitude: 0.0,
            accuracy: 1.0,
        });
        let request_id = match app.transport_mut().sent.last() {
            Some(SentRequest::Data { request_id, .. }) => *request_id,
            other => panic!("expected a data request, got {other:?}"),
        };
        let mut payload = Payload::new();
        payload.insert(KEY_WEATHER_ICON, Value::Int8(0)).unwrap();
        payload.insert(KEY_UNREAD_MAIL, Value::Int16(1)).unwrap();
        app.handle_event(Event::RequestSuccess { request_id, payload });

        app.shutdown();
        assert!(!app.board().has_weather_icon());
        assert!(!app.board().has_mail_icon());
        assert_eq!(app.surface().weather, None);
        assert_eq!(app.surface().primary, None);
    }
}
