//! Desktop simulator for the statusface watch face.
//!
//! Runs the full app against a scripted phone bridge for a 90-minute day
//! fragment spanning midnight, printing ASCII frames at the interesting
//! moments: first weather, the date rollover, the no-data sentinel, the
//! no-link glyph, the activation code, and recovery.
//!
//! ```bash
//! cargo run --bin simulator
//! ```

mod framebuffer;
mod phone;
mod styles;
mod surface;

use statusface::app::{App, Event};
use statusface::clockface::{HourStyle, Month, TickTime, Weekday};
use statusface_common::UnitSystem;

use crate::framebuffer::FaceBuffer;
use crate::phone::ScriptedPhone;
use crate::surface::RetainedSurface;

/// Simulated minutes after the startup tick.
const TOTAL_STEPS: u32 = 89;

/// Steps at which a frame is rendered and printed.
const PRINT_STEPS: [u32; 7] = [2, 11, 38, 43, 60, 77, 85];

/// Minute-resolution wall clock starting just before midnight.
struct SimClock {
    now: TickTime,
}

impl SimClock {
    fn new() -> Self {
        Self {
            now: TickTime {
                weekday: Weekday::Fri,
                month: Month::Aug,
                day: 7,
                hour: 23,
                minute: 50,
                day_changed: false,
            },
        }
    }

    fn now(&self) -> TickTime { self.now }

    /// Advance one minute, rolling hour and day as needed.
    fn tick(&mut self) -> TickTime {
        let t = &mut self.now;
        t.day_changed = false;
        t.minute += 1;
        if t.minute == 60 {
            t.minute = 0;
            t.hour += 1;
            if t.hour == 24 {
                t.hour = 0;
                t.day += 1;
                t.weekday = t.weekday.next();
                t.day_changed = true;
            }
        }
        *t
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut app = App::new(
        ScriptedPhone::new(),
        RetainedSurface::new(),
        UnitSystem::Metric,
        HourStyle::H24,
    );
    let mut clock = SimClock::new();
    let mut fb = FaceBuffer::new();

    app.startup(clock.now());

    for step in 1..=TOTAL_STEPS {
        for event in app.transport_mut().take_due(step) {
            app.handle_event(event);
        }
        let t = clock.tick();
        app.handle_event(Event::Tick(t));

        if PRINT_STEPS.contains(&step) {
            app.surface().draw(&mut fb);
            println!(
                "--- step {step:>2}  {:02}:{:02}  link {:?}",
                t.hour,
                t.minute,
                app.link_health(),
            );
            println!("{}", fb.to_ascii());
        }
    }

    let pulses = app.surface().pulses;
    app.shutdown();
    println!("done: {TOTAL_STEPS} minutes simulated, {pulses} haptic pulses");
}
