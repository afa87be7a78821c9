//! Retained-mode surface for the simulator.
//!
//! The core attaches glyphs and writes text through the [`Surface`]
//! trait; this implementation retains that state and redraws the whole
//! face into the framebuffer on demand. Bitmap resources are stood in for
//! by bordered boxes with short labels.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;
use statusface::surface::{FontSize, Glyph, GlyphSlot, Surface, TextAlign, TextSlot};
use statusface_common::layout::{
    BADGE_FRAME,
    BANNER_FRAME,
    DATE_FRAME,
    PRIMARY_ICON_FRAME,
    TEMPERATURE_FRAME,
    TIME_FRAME,
    WEATHER_ICON_FRAME,
};

use crate::framebuffer::FaceBuffer;
use crate::styles::{CENTERED, LABEL_STYLE, LEFT_ALIGNED, VALUE_STYLE_LARGE, VALUE_STYLE_SMALL};

const BOX_STYLE: PrimitiveStyle<BinaryColor> = PrimitiveStyle::with_stroke(BinaryColor::On, 1);

/// Capacity of each retained text slot; longer text is truncated.
const TEXT_CAP: usize = 24;

/// Display state retained between frames.
pub struct RetainedSurface {
    hour: String<TEXT_CAP>,
    minute: String<TEXT_CAP>,
    date: String<TEXT_CAP>,
    temperature: String<TEXT_CAP>,
    badge: String<TEXT_CAP>,
    banner: String<TEXT_CAP>,
    temp_align: TextAlign,
    temp_size: FontSize,
    weather: Option<Glyph>,
    primary: Option<Glyph>,
    /// Haptic pulses fired so far (the simulator just counts them).
    pub pulses: u32,
}

impl RetainedSurface {
    pub fn new() -> Self {
        Self {
            hour: String::new(),
            minute: String::new(),
            date: String::new(),
            temperature: String::new(),
            badge: String::new(),
            banner: String::new(),
            temp_align: TextAlign::Centered,
            temp_size: FontSize::Large,
            weather: None,
            primary: None,
            pulses: 0,
        }
    }

    fn slot(&mut self, slot: TextSlot) -> &mut String<TEXT_CAP> {
        match slot {
            TextSlot::Hour => &mut self.hour,
            TextSlot::Minute => &mut self.minute,
            TextSlot::Date => &mut self.date,
            TextSlot::Temperature => &mut self.temperature,
            TextSlot::Badge => &mut self.badge,
            TextSlot::Banner => &mut self.banner,
        }
    }

    const fn glyph_label(glyph: Glyph) -> &'static str {
        match glyph {
            Glyph::Weather(icon) => icon.label(),
            Glyph::Mail => "MAIL",
            Glyph::Social => "SOC",
            Glyph::NoLink => "X",
        }
    }

    fn draw_glyph_box(fb: &mut FaceBuffer, frame: Rectangle, label: &str) {
        frame.into_styled(BOX_STYLE).draw(fb).ok();
        Text::with_text_style(label, frame.center(), LABEL_STYLE, CENTERED)
            .draw(fb)
            .ok();
    }

    /// Redraw the whole face into the framebuffer.
    pub fn draw(&self, fb: &mut FaceBuffer) {
        fb.clear_all();

        // Clock: hour and minute side by side, centered in the time frame.
        let mut time: String<TEXT_CAP> = String::new();
        let _ = time.push_str(&self.hour);
        let _ = time.push_str(&self.minute);
        Text::with_text_style(&time, TIME_FRAME.center(), VALUE_STYLE_LARGE, CENTERED)
            .draw(fb)
            .ok();

        Text::with_text_style(&self.date, DATE_FRAME.center(), LABEL_STYLE, CENTERED)
            .draw(fb)
            .ok();

        if let Some(glyph) = self.weather {
            Self::draw_glyph_box(fb, WEATHER_ICON_FRAME, Self::glyph_label(glyph));
        }

        if !self.temperature.is_empty() {
            let style = match self.temp_size {
                FontSize::Large => VALUE_STYLE_LARGE,
                FontSize::Small => VALUE_STYLE_SMALL,
            };
            let (origin, text_style) = match self.temp_align {
                TextAlign::Centered => (TEMPERATURE_FRAME.center(), CENTERED),
                TextAlign::Left => {
                    let y = TEMPERATURE_FRAME.center().y;
                    (Point::new(TEMPERATURE_FRAME.top_left.x, y), LEFT_ALIGNED)
                }
            };
            Text::with_text_style(&self.temperature, origin, style, text_style)
                .draw(fb)
                .ok();
        }

        if let Some(glyph) = self.primary {
            Self::draw_glyph_box(fb, PRIMARY_ICON_FRAME, Self::glyph_label(glyph));
        }

        if !self.badge.is_empty() {
            let origin = Point::new(BADGE_FRAME.top_left.x, BADGE_FRAME.center().y);
            Text::with_text_style(&self.badge, origin, LABEL_STYLE, LEFT_ALIGNED)
                .draw(fb)
                .ok();
        }

        if !self.banner.is_empty() {
            BANNER_FRAME.into_styled(BOX_STYLE).draw(fb).ok();
            Text::with_text_style(&self.banner, BANNER_FRAME.center(), LABEL_STYLE, CENTERED)
                .draw(fb)
                .ok();
        }
    }
}

impl Default for RetainedSurface {
    fn default() -> Self { Self::new() }
}

impl Surface for RetainedSurface {
    fn attach_glyph(&mut self, slot: GlyphSlot, glyph: Glyph) {
        debug_assert!(
            match slot {
                GlyphSlot::Weather => self.weather.is_none(),
                GlyphSlot::Primary => self.primary.is_none(),
            },
            "attach into occupied slot"
        );
        match slot {
            GlyphSlot::Weather => self.weather = Some(glyph),
            GlyphSlot::Primary => self.primary = Some(glyph),
        }
    }

    fn detach_glyph(&mut self, slot: GlyphSlot) {
        match slot {
            GlyphSlot::Weather => self.weather = None,
            GlyphSlot::Primary => self.primary = None,
        }
    }

    fn set_text(&mut self, slot: TextSlot, text: &str) {
        let retained = self.slot(slot);
        retained.clear();
        let _ = retained.push_str(text);
    }

    fn clear_text(&mut self, slot: TextSlot) { self.slot(slot).clear(); }

    fn set_temperature_layout(&mut self, align: TextAlign, size: FontSize) {
        self.temp_align = align;
        self.temp_size = size;
    }

    fn vibrate_pulse(&mut self) {
        self.pulses += 1;
        log::info!("bzzt (haptic pulse #{})", self.pulses);
    }
}
