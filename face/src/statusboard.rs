//! The status board: one visual region multiplexed between weather,
//! unread counts, an activation code, and a link-failure glyph.
//!
//! Overlays arrive from asynchronous, unordered network events, so every
//! setter follows the same discipline: tear down whatever the new overlay
//! displaces, then build. Teardown is always guarded by the attachment
//! state, so tearing down a slot that is not attached is a no-op, never a
//! fault, and no resource is ever leaked or released twice.
//!
//! # Region policy
//!
//! The weather icon and the temperature text are independent slots and may
//! both be visible. Mail, social, activation, and no-link share the
//! primary icon region; attaching one displaces the others, per
//! [`DISPLACED_BY`].

use core::fmt::Write;

use heapless::String;
use statusface_common::{ActivationCode, WeatherIcon};

use crate::surface::{FontSize, Glyph, GlyphSlot, Surface, TextAlign, TextSlot};

// =============================================================================
// Primary-Region Exclusivity
// =============================================================================

/// Overlays that compete for the primary icon region.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PrimaryOverlay {
    Mail = 0,
    Social = 1,
    Activation = 2,
    NoLink = 3,
}

/// The region-exclusivity policy as data: attaching the keyed overlay
/// displaces the listed overlays. With a single shared region every
/// overlay displaces the other three; a layout giving some overlays their
/// own region would only need different rows here.
const DISPLACED_BY: [(PrimaryOverlay, [PrimaryOverlay; 3]); 4] = [
    (
        PrimaryOverlay::Mail,
        [PrimaryOverlay::Social, PrimaryOverlay::Activation, PrimaryOverlay::NoLink],
    ),
    (
        PrimaryOverlay::Social,
        [PrimaryOverlay::Mail, PrimaryOverlay::Activation, PrimaryOverlay::NoLink],
    ),
    (
        PrimaryOverlay::Activation,
        [PrimaryOverlay::Mail, PrimaryOverlay::Social, PrimaryOverlay::NoLink],
    ),
    (
        PrimaryOverlay::NoLink,
        [PrimaryOverlay::Mail, PrimaryOverlay::Social, PrimaryOverlay::Activation],
    ),
];

fn displaced_by(overlay: PrimaryOverlay) -> &'static [PrimaryOverlay; 3] {
    &DISPLACED_BY[overlay as usize].1
}

// =============================================================================
// Temperature Layout Heuristic
// =============================================================================

/// Layout selected for a temperature reading.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TempLayout {
    pub align: TextAlign,
    pub size: FontSize,
}

/// Pick the temperature layout by magnitude.
///
/// A hand-tuned fit table standing in for text measurement, keyed by the
/// rendered digit string:
/// - one digit, or two digits not starting with '1' (0–9, 20–99, and the
///   two-character negatives -9..-1): centered, large font
/// - two digits starting with '1' (10–19): nudged left, large font
/// - three or more characters (>= 100 or <= -10): centered, small font
pub fn temperature_layout(value: i16) -> TempLayout {
    match value {
        10..=19 => TempLayout {
            align: TextAlign::Left,
            size: FontSize::Large,
        },
        -9..=9 | 20..=99 => TempLayout {
            align: TextAlign::Centered,
            size: FontSize::Large,
        },
        _ => TempLayout {
            align: TextAlign::Centered,
            size: FontSize::Small,
        },
    }
}

// =============================================================================
// Status Board State
// =============================================================================

/// Owns the status region's overlay state.
///
/// For every icon-bearing slot the attachment state here is kept in exact
/// sync with the surface: `weather_icon` is `Some` iff a weather glyph is
/// attached, and `primary` names the sole occupant of the primary region.
#[derive(Default)]
pub struct StatusBoard {
    weather_icon: Option<WeatherIcon>,
    temperature: Option<i16>,
    unread_mail: i16,
    unread_social: Option<i16>,
    activation: Option<ActivationCode>,
    primary: Option<PrimaryOverlay>,
}

impl StatusBoard {
    pub fn new() -> Self { Self::default() }

    // --- accessors -----------------------------------------------------------

    pub fn weather_icon(&self) -> Option<WeatherIcon> { self.weather_icon }

    pub fn temperature(&self) -> Option<i16> { self.temperature }

    /// Last delivered mail count; 0 until any mail data arrives.
    pub fn unread_mail(&self) -> i16 { self.unread_mail }

    /// Last delivered social count; `None` until any social data arrives.
    pub fn unread_social(&self) -> Option<i16> { self.unread_social }

    pub fn activation_code(&self) -> Option<ActivationCode> { self.activation }

    /// Current occupant of the primary icon region.
    pub fn primary_overlay(&self) -> Option<PrimaryOverlay> { self.primary }

    pub fn has_weather_icon(&self) -> bool { self.weather_icon.is_some() }

    pub fn has_mail_icon(&self) -> bool { self.primary == Some(PrimaryOverlay::Mail) }

    pub fn has_social_icon(&self) -> bool { self.primary == Some(PrimaryOverlay::Social) }

    pub fn has_activation_banner(&self) -> bool { self.primary == Some(PrimaryOverlay::Activation) }

    pub fn has_no_link_glyph(&self) -> bool { self.primary == Some(PrimaryOverlay::NoLink) }

    // --- setters -------------------------------------------------------------

    /// Show a weather condition icon.
    ///
    /// Callers validate payload codes first ([`WeatherIcon::from_code`]
    /// clamps unknown codes to the no-weather sentinel).
    pub fn set_weather_icon<S: Surface>(&mut self, surface: &mut S, icon: WeatherIcon) {
        if self.weather_icon.take().is_some() {
            surface.detach_glyph(GlyphSlot::Weather);
        }
        surface.attach_glyph(GlyphSlot::Weather, Glyph::Weather(icon));
        self.weather_icon = Some(icon);
    }

    /// Show a temperature reading.
    pub fn set_temperature<S: Surface>(&mut self, surface: &mut S, value: i16) {
        let layout = temperature_layout(value);
        surface.set_temperature_layout(layout.align, layout.size);

        let mut text: String<12> = String::new();
        let _ = write!(text, "{value}°");
        surface.set_text(TextSlot::Temperature, &text);
        self.temperature = Some(value);
    }

    /// Show the unread mail badge.
    ///
    /// Zero renders as an explicit "0"; the icon stays up once mail data
    /// has been seen. A change between two different nonzero counts with
    /// the payload's vibrate flag set fires one haptic pulse; transitions
    /// to or from zero never vibrate.
    pub fn set_unread_mail<S: Surface>(&mut self, surface: &mut S, count: i16, vibrate: bool) {
        if !self.claim_primary(surface, PrimaryOverlay::Mail) {
            surface.attach_glyph(GlyphSlot::Primary, Glyph::Mail);
            self.primary = Some(PrimaryOverlay::Mail);
        }

        if self.unread_mail != 0 && count != 0 && self.unread_mail != count && vibrate {
            surface.vibrate_pulse();
        }
        self.unread_mail = count;

        let mut text: String<8> = String::new();
        let _ = write!(text, "{count}");
        surface.set_text(TextSlot::Badge, &text);
    }

    /// Show the unread social-notification badge. Same discipline as mail;
    /// zero renders as "0" once any social data has been received.
    pub fn set_unread_social<S: Surface>(&mut self, surface: &mut S, count: i16) {
        if !self.claim_primary(surface, PrimaryOverlay::Social) {
            surface.attach_glyph(GlyphSlot::Primary, Glyph::Social);
            self.primary = Some(PrimaryOverlay::Social);
        }
        self.unread_social = Some(count);

        let mut text: String<8> = String::new();
        let _ = write!(text, "{count}");
        surface.set_text(TextSlot::Badge, &text);
    }

    /// Show the account activation code in the banner region.
    pub fn set_activation_code<S: Surface>(&mut self, surface: &mut S, code: ActivationCode) {
        if !self.claim_primary(surface, PrimaryOverlay::Activation) {
            self.primary = Some(PrimaryOverlay::Activation);
        }
        surface.set_text(TextSlot::Banner, code.as_str());
        self.activation = Some(code);
    }

    /// Show the link-failure glyph. Idempotent: calling this while the
    /// glyph is already up attaches nothing.
    pub fn set_no_link_glyph<S: Surface>(&mut self, surface: &mut S) {
        if self.claim_primary(surface, PrimaryOverlay::NoLink) {
            return;
        }
        surface.attach_glyph(GlyphSlot::Primary, Glyph::NoLink);
        self.primary = Some(PrimaryOverlay::NoLink);
    }

    /// Detach and release everything currently attached. Called once at
    /// app shutdown.
    pub fn detach_all<S: Surface>(&mut self, surface: &mut S) {
        if self.weather_icon.take().is_some() {
            surface.detach_glyph(GlyphSlot::Weather);
        }
        if let Some(overlay) = self.primary {
            self.tear_down(surface, overlay);
        }
    }

    // --- internals -----------------------------------------------------------

    /// Tear down whatever the wanted overlay displaces.
    ///
    /// Returns `true` when the wanted overlay is already attached, in
    /// which case nothing was torn down and the caller must not re-attach.
    fn claim_primary<S: Surface>(&mut self, surface: &mut S, wanted: PrimaryOverlay) -> bool {
        if self.primary == Some(wanted) {
            return true;
        }
        for &victim in displaced_by(wanted) {
            self.tear_down(surface, victim);
        }
        false
    }

    fn tear_down<S: Surface>(&mut self, surface: &mut S, overlay: PrimaryOverlay) {
        if self.primary != Some(overlay) {
            return;
        }
        match overlay {
            PrimaryOverlay::Mail | PrimaryOverlay::Social => {
                surface.clear_text(TextSlot::Badge);
                surface.detach_glyph(GlyphSlot::Primary);
            }
            PrimaryOverlay::NoLink => surface.detach_glyph(GlyphSlot::Primary),
            PrimaryOverlay::Activation => surface.clear_text(TextSlot::Banner),
        }
        self.primary = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
