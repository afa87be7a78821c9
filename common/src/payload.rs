//! The data payload delivered by the phone bridge.
//!
//! A payload is a small mapping from integer keys to typed values. The face
//! recognizes a handful of keys; anything else is carried but ignored, so a
//! newer phone app can ship extra fields without breaking older watches.

use heapless::Vec;

/// Weather icon code (int8, one of the known table indices).
pub const KEY_WEATHER_ICON: u8 = 1;
/// Temperature reading (int16).
pub const KEY_TEMPERATURE: u8 = 2;
/// Unread mail count (int16).
pub const KEY_UNREAD_MAIL: u8 = 3;
/// Haptic pulse preference paired with the mail count (int16, 0/1).
pub const KEY_VIBRATE: u8 = 4;
/// Account activation code (fixed 4-byte text).
pub const KEY_ACTIVATION_CODE: u8 = 5;
/// Unread social-notification count (int16).
pub const KEY_UNREAD_SOCIAL: u8 = 6;

/// Maximum number of entries a payload can carry.
pub const MAX_PAYLOAD_ENTRIES: usize = 8;

/// A typed payload value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Value {
    Int8(i8),
    Int16(i16),
    Text4([u8; 4]),
}

/// A 4-character activation code.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActivationCode([u8; 4]);

impl ActivationCode {
    pub const fn new(bytes: [u8; 4]) -> Self { Self(bytes) }

    /// The code as text. Non-UTF-8 bytes render as a placeholder rather
    /// than faulting, since the code arrives from the remote side.
    pub fn as_str(&self) -> &str { core::str::from_utf8(&self.0).unwrap_or("????") }
}

/// Error returned when a payload has no room for another entry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PayloadFull;

/// An integer-keyed payload, as decoded from an inbound message.
#[derive(Clone, Default, Debug)]
pub struct Payload {
    entries: Vec<(u8, Value), MAX_PAYLOAD_ENTRIES>,
}

impl Payload {
    pub const fn new() -> Self { Self { entries: Vec::new() } }

    /// Add an entry. Lookups return the first match for a key, mirroring
    /// the bridge's own dictionary semantics.
    pub fn insert(&mut self, key: u8, value: Value) -> Result<(), PayloadFull> {
        self.entries.push((key, value)).map_err(|_| PayloadFull)
    }

    fn find(&self, key: u8) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    fn int8(&self, key: u8) -> Option<i8> {
        match self.find(key) {
            Some(Value::Int8(v)) => Some(*v),
            _ => None,
        }
    }

    fn int16(&self, key: u8) -> Option<i16> {
        match self.find(key) {
            Some(Value::Int16(v)) => Some(*v),
            _ => None,
        }
    }

    /// Weather icon code, if present and well-typed.
    pub fn weather_icon(&self) -> Option<i8> { self.int8(KEY_WEATHER_ICON) }

    /// Temperature reading, if present and well-typed.
    pub fn temperature(&self) -> Option<i16> { self.int16(KEY_TEMPERATURE) }

    /// Unread mail count, if present and well-typed.
    pub fn unread_mail(&self) -> Option<i16> { self.int16(KEY_UNREAD_MAIL) }

    /// Vibrate preference paired with the mail count; absent means off.
    pub fn vibrate(&self) -> bool { self.int16(KEY_VIBRATE).unwrap_or(0) != 0 }

    /// Unread social-notification count, if present and well-typed.
    pub fn unread_social(&self) -> Option<i16> { self.int16(KEY_UNREAD_SOCIAL) }

    /// Activation code, if present and well-typed.
    pub fn activation_code(&self) -> Option<ActivationCode> {
        match self.find(KEY_ACTIVATION_CODE) {
            Some(Value::Text4(bytes)) => Some(ActivationCode::new(*bytes)),
            _ => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
