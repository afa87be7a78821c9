//! Screen geometry and region frames.
//!
//! The face targets a 144x168 monochrome display split into three stacked
//! regions: the time, the date line, and the status board. Frames are
//! pre-computed constants so renderers never do layout math per frame.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 144;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

/// Hour/minute region at the top of the face.
pub const TIME_FRAME: Rectangle = Rectangle::new(Point::new(0, 2), Size::new(144, 62));

/// Date line below the time.
pub const DATE_FRAME: Rectangle = Rectangle::new(Point::new(1, 65), Size::new(143, 24));

/// The status board occupies the lower part of the face.
pub const STATUS_FRAME: Rectangle = Rectangle::new(Point::new(0, 90), Size::new(144, 78));

/// Weather icon slot on the left of the status board.
pub const WEATHER_ICON_FRAME: Rectangle = Rectangle::new(Point::new(9, 103), Size::new(60, 60));

/// Temperature text to the right of the weather icon.
pub const TEMPERATURE_FRAME: Rectangle = Rectangle::new(Point::new(70, 109), Size::new(72, 50));

/// Primary icon region shared by the mail, social, and no-link glyphs.
pub const PRIMARY_ICON_FRAME: Rectangle = Rectangle::new(Point::new(10, 109), Size::new(30, 30));

/// Badge count text beside the primary icon.
pub const BADGE_FRAME: Rectangle = Rectangle::new(Point::new(44, 140), Size::new(56, 22));

/// Activation-code banner spanning the status board.
pub const BANNER_FRAME: Rectangle = Rectangle::new(Point::new(0, 138), Size::new(144, 26));

// =============================================================================
// Unit Tests
// =============================================================================
