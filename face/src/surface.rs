//! The retained-mode display boundary.
//!
//! The status board and clock face never draw pixels. They attach and
//! detach named elements on a [`Surface`] and write text into its slots;
//! the renderer behind the trait owns resource loading and blitting. This
//! keeps the state machines host-testable against a recording mock.

use statusface_common::WeatherIcon;

/// Slots that hold an attachable glyph resource.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphSlot {
    /// The weather condition icon.
    Weather,
    /// The shared region multiplexed between mail, social, and no-link.
    Primary,
}

/// A glyph resource that can occupy a slot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    Weather(WeatherIcon),
    Mail,
    Social,
    NoLink,
}

/// Text slots on the face.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSlot {
    Hour,
    Minute,
    Date,
    Temperature,
    /// Unread count beside the primary glyph.
    Badge,
    /// Activation-code banner.
    Banner,
}

/// Horizontal alignment for the temperature text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAlign {
    Centered,
    Left,
}

/// Font size class for the temperature text.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    Large,
    Small,
}

/// A display the face renders into.
///
/// Contract: callers detach a slot's current occupant before attaching a
/// replacement; implementations may assume a slot is empty on attach and
/// occupied on detach. [`StatusBoard`](crate::statusboard::StatusBoard)
/// upholds this via its has-flags.
pub trait Surface {
    /// Load the glyph's resource and attach it to the slot.
    fn attach_glyph(&mut self, slot: GlyphSlot, glyph: Glyph);

    /// Detach the slot's glyph and release its resource.
    fn detach_glyph(&mut self, slot: GlyphSlot);

    /// Replace the text in a slot.
    fn set_text(&mut self, slot: TextSlot, text: &str);

    /// Remove the text from a slot.
    fn clear_text(&mut self, slot: TextSlot);

    /// Apply the temperature layout selected by the fit heuristic.
    fn set_temperature_layout(&mut self, align: TextAlign, size: FontSize);

    /// Fire a short haptic pulse.
    fn vibrate_pulse(&mut self);
}
