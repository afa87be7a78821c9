//! Recording test doubles shared by the unit tests.
//!
//! [`RecordingSurface`] enforces the attach/detach contract: attaching
//! into an occupied slot or detaching an empty one fails the test, which
//! is exactly a leaked or double-released resource.

use statusface_common::UnitSystem;

use crate::surface::{FontSize, Glyph, GlyphSlot, Surface, TextAlign, TextSlot};
use crate::transport::{Transport, TransportError};

/// One recorded surface call.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SurfaceOp {
    AttachGlyph(GlyphSlot, Glyph),
    DetachGlyph(GlyphSlot),
    SetText(TextSlot, String),
    ClearText(TextSlot),
    TemperatureLayout(TextAlign, FontSize),
    Pulse,
}

/// A surface that records every call and tracks attachment state.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
    pub weather: Option<Glyph>,
    pub primary: Option<Glyph>,
    pub pulses: usize,
    pub temperature_layout: Option<(TextAlign, FontSize)>,
    texts: [Option<String>; 6],
}

impl RecordingSurface {
    fn slot_index(slot: TextSlot) -> usize {
        match slot {
            TextSlot::Hour => 0,
            TextSlot::Minute => 1,
            TextSlot::Date => 2,
            TextSlot::Temperature => 3,
            TextSlot::Badge => 4,
            TextSlot::Banner => 5,
        }
    }

    fn glyph_slot(&mut self, slot: GlyphSlot) -> &mut Option<Glyph> {
        match slot {
            GlyphSlot::Weather => &mut self.weather,
            GlyphSlot::Primary => &mut self.primary,
        }
    }

    /// Current text in a slot, if any.
    pub fn text(&self, slot: TextSlot) -> Option<&str> {
        self.texts[Self::slot_index(slot)].as_deref()
    }

    pub fn attach_count(&self, slot: GlyphSlot) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::AttachGlyph(s, _) if *s == slot))
            .count()
    }

    pub fn detach_count(&self, slot: GlyphSlot) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::DetachGlyph(s) if *s == slot))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn attach_glyph(&mut self, slot: GlyphSlot, glyph: Glyph) {
        let occupant = self.glyph_slot(slot);
        assert!(occupant.is_none(), "attach into occupied slot {slot:?} (resource leak)");
        *occupant = Some(glyph);
        self.ops.push(SurfaceOp::AttachGlyph(slot, glyph));
    }

    fn detach_glyph(&mut self, slot: GlyphSlot) {
        let occupant = self.glyph_slot(slot);
        assert!(occupant.is_some(), "detach from empty slot {slot:?} (double release)");
        *occupant = None;
        self.ops.push(SurfaceOp::DetachGlyph(slot));
    }

    fn set_text(&mut self, slot: TextSlot, text: &str) {
        self.texts[Self::slot_index(slot)] = Some(text.to_owned());
        self.ops.push(SurfaceOp::SetText(slot, text.to_owned()));
    }

    fn clear_text(&mut self, slot: TextSlot) {
        self.texts[Self::slot_index(slot)] = None;
        self.ops.push(SurfaceOp::ClearText(slot));
    }

    fn set_temperature_layout(&mut self, align: TextAlign, size: FontSize) {
        self.temperature_layout = Some((align, size));
        self.ops.push(SurfaceOp::TemperatureLayout(align, size));
    }

    fn vibrate_pulse(&mut self) {
        self.pulses += 1;
        self.ops.push(SurfaceOp::Pulse);
    }
}

/// One recorded outbound request.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SentRequest {
    Location,
    Data {
        latitude: i32,
        longitude: i32,
        units: UnitSystem,
        request_id: u32,
    },
}

/// A transport that records requests and can fail the next send.
#[derive(Default)]
pub struct MockTransport {
    pub sent: Vec<SentRequest>,
    pub fail_next: Option<TransportError>,
}

impl Transport for MockTransport {
    fn request_location(&mut self) -> Result<(), TransportError> {
        self.sent.push(SentRequest::Location);
        match self.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn request_data(
        &mut self,
        latitude: i32,
        longitude: i32,
        units: UnitSystem,
        request_id: u32,
    ) -> Result<(), TransportError> {
        self.sent.push(SentRequest::Data {
            latitude,
            longitude,
            units,
            request_id,
        });
        match self.fail_next.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
