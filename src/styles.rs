//! Pre-computed static text styles to avoid per-frame object construction.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::text::{Alignment, TextStyle, TextStyleBuilder};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

/// Centered text. Used for the clock, date, and banner.
pub const CENTERED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).build();

/// Left-aligned text. Used for the nudged temperature layout and badges.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new().alignment(Alignment::Left).build();

/// Large white-on-black style for the time and temperature.
pub const VALUE_STYLE_LARGE: MonoTextStyle<'static, BinaryColor> =
    MonoTextStyle::new(&PROFONT_24_POINT, BinaryColor::On);

/// Smaller style for long temperature strings.
pub const VALUE_STYLE_SMALL: MonoTextStyle<'static, BinaryColor> =
    MonoTextStyle::new(&PROFONT_18_POINT, BinaryColor::On);

/// Small label style for the date line, badges, and glyph labels.
pub const LABEL_STYLE: MonoTextStyle<'static, BinaryColor> = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
