//! Time and date text formatting.
//!
//! Pure formatting over clock components supplied by the platform: an
//! hour string with the leading zero stripped in both 12h and 24h modes,
//! a zero-padded minute string with its leading colon, and a date line
//! ("Fri, Aug 07") refreshed only when the day changes.

use core::fmt::Write;

use heapless::String;

use crate::surface::{Surface, TextSlot};

/// 12-hour or 24-hour display preference, supplied by the clock source.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourStyle {
    H12,
    H24,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Self::Mon => Self::Tue,
            Self::Tue => Self::Wed,
            Self::Wed => Self::Thu,
            Self::Thu => Self::Fri,
            Self::Fri => Self::Sat,
            Self::Sat => Self::Sun,
            Self::Sun => Self::Mon,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Jan => "Jan",
            Self::Feb => "Feb",
            Self::Mar => "Mar",
            Self::Apr => "Apr",
            Self::May => "May",
            Self::Jun => "Jun",
            Self::Jul => "Jul",
            Self::Aug => "Aug",
            Self::Sep => "Sep",
            Self::Oct => "Oct",
            Self::Nov => "Nov",
            Self::Dec => "Dec",
        }
    }
}

/// Clock components delivered with each tick.
#[derive(Clone, Copy, Debug)]
pub struct TickTime {
    pub weekday: Weekday,
    pub month: Month,
    /// Day of month, 1..=31.
    pub day: u8,
    /// Hour, 0..=23.
    pub hour: u8,
    /// Minute, 0..=59.
    pub minute: u8,
    /// Set when this tick crossed a day boundary (and on the forced
    /// startup tick), prompting a date-line refresh.
    pub day_changed: bool,
}

/// Hour text with the leading zero stripped, in either mode.
pub fn hour_text(hour: u8, style: HourStyle) -> String<4> {
    let display = match style {
        HourStyle::H24 => hour,
        HourStyle::H12 => {
            let h = hour % 12;
            if h == 0 { 12 } else { h }
        }
    };
    let mut text = String::new();
    let _ = write!(text, "{display}");
    text
}

/// Minute text, zero-padded, with its leading colon.
pub fn minute_text(minute: u8) -> String<4> {
    let mut text = String::new();
    let _ = write!(text, ":{minute:02}");
    text
}

/// Date line, e.g. "Fri, Aug 07".
pub fn date_text(t: &TickTime) -> String<16> {
    let mut text = String::new();
    let _ = write!(text, "{}, {} {:02}", t.weekday.abbrev(), t.month.abbrev(), t.day);
    text
}

/// Write the tick's time (and, on day changes, date) onto the surface.
pub fn render<S: Surface>(t: &TickTime, style: HourStyle, surface: &mut S) {
    if t.day_changed {
        surface.set_text(TextSlot::Date, &date_text(t));
    }
    surface.set_text(TextSlot::Hour, &hour_text(t.hour, style));
    surface.set_text(TextSlot::Minute, &minute_text(t.minute));
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::RecordingSurface;

    #[test]
    fn test_24h_hours_drop_leading_zero() {
        assert_eq!(hour_text(0, HourStyle::H24).as_str(), "0");
        assert_eq!(hour_text(5, HourStyle::H24).as_str(), "5");
        assert_eq!(hour_text(9, HourStyle::H24).as_str(), "9");
        assert_eq!(hour_text(10, HourStyle::H24).as_str(), "10");
        assert_eq!(hour_text(23, HourStyle::H24).as_str(), "23");
    }

    #[test]
    fn test_12h_hours_wrap_and_drop_leading_zero() {
        assert_eq!(hour_text(0, HourStyle::H12).as_str(), "12");
        assert_eq!(hour_text(1, HourStyle::H12).as_str(), "1");
        assert_eq!(hour_text(9, HourStyle::H12).as_str(), "9");
        assert_eq!(hour_text(12, HourStyle::H12).as_str(), "12");
        assert_eq!(hour_text(13, HourStyle::H12).as_str(), "1");
        assert_eq!(hour_text(23, HourStyle::H12).as_str(), "11");
    }

    #[test]
    fn test_minutes_keep_leading_zero() {
        assert_eq!(minute_text(0).as_str(), ":00");
        assert_eq!(minute_text(7).as_str(), ":07");
        assert_eq!(minute_text(59).as_str(), ":59");
    }

    #[test]
    fn test_date_line_format() {
        let t = TickTime {
            weekday: Weekday::Fri,
            month: Month::Aug,
            day: 7,
            hour: 12,
            minute: 0,
            day_changed: true,
        };
        assert_eq!(date_text(&t).as_str(), "Fri, Aug 07");
    }

    #[test]
    fn test_render_updates_date_only_on_day_change() {
        let mut surface = RecordingSurface::default();
        let mut t = TickTime {
            weekday: Weekday::Sat,
            month: Month::Dec,
            day: 31,
            hour: 23,
            minute: 58,
            day_changed: false,
        };

        render(&t, HourStyle::H24, &mut surface);
        assert_eq!(surface.text(TextSlot::Date), None);
        assert_eq!(surface.text(TextSlot::Hour), Some("23"));
        assert_eq!(surface.text(TextSlot::Minute), Some(":58"));

        t.weekday = t.weekday.next();
        t.month = Month::Jan;
        t.day = 1;
        t.hour = 0;
        t.minute = 0;
        t.day_changed = true;
        render(&t, HourStyle::H24, &mut surface);
        assert_eq!(surface.text(TextSlot::Date), Some("Sun, Jan 01"));
        assert_eq!(surface.text(TextSlot::Hour), Some("0"));
        assert_eq!(surface.text(TextSlot::Minute), Some(":00"));
    }
}
