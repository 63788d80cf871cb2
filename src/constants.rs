//! Shared constants for canvas geometry and generation defaults
//!

/// Canvas width in pixels, portrait aspect suited to a phone lockscreen.
pub const CANVAS_WIDTH: u32 = 1320;

/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 2868;

/// Inset of the decorative border frame from every canvas edge.
pub const BORDER_MARGIN: u32 = 60;

/// Stroke width of the border frame.
pub const BORDER_STROKE: u32 = 4;

/// Fraction of the canvas height where the quote block starts.
pub const QUOTE_START_RATIO: f64 = 0.35;

/// Vertical contribution of each wrapped quote line to downstream placement.
pub const PER_LINE_HEIGHT: u32 = 100;

/// Gap between the bottom of the quote block and the separator bar.
pub const SEPARATOR_GAP: u32 = 40;

/// Gap between the bottom of the quote block and the author baseline.
pub const AUTHOR_GAP: u32 = 140;

/// Distance of the footer label from the bottom edge.
pub const FOOTER_OFFSET: u32 = 150;

/// Wrap target for the quote, in characters per line.
pub const MAX_CHARS_PER_LINE: usize = 20;

/// Footer label text rendered near the bottom of every wallpaper.
pub const FOOTER_LABEL: &str = "PROPHECY";

/// Quote substituted when the text-generation call fails.
pub const FALLBACK_QUOTE: &str =
    "The light shines in the darkness, and the darkness has not overcome it.";

/// Attribution for the fallback quote.
pub const FALLBACK_AUTHOR: &str = "John 1:5";

/// Default source text when the caller does not pick one.
pub const DEFAULT_SOURCE: &str = "Bible";

/// Default generation mode when the caller does not pick one.
pub const DEFAULT_MODE: &str = "Prophecy";

/// Default Gemini model identifier, overridable via `GEMINI_MODEL`.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-lite";

/// Base URL of the Gemini API.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
