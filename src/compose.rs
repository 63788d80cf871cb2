//! SVG document composition.
//!
//! The wallpaper is built as literal markup with direct coordinate
//! arithmetic, not a layout engine: the output has to be paintable by a
//! lightweight rasterizer and embeddable inline without a browser. Centering
//! and wrapping are character-count approximations; no glyph metrics are
//! consulted, so output geometry is a pure function of the inputs.

use crate::constants::{
    AUTHOR_GAP, BORDER_MARGIN, BORDER_STROKE, FOOTER_LABEL, FOOTER_OFFSET, MAX_CHARS_PER_LINE,
    PER_LINE_HEIGHT, QUOTE_START_RATIO, SEPARATOR_GAP,
};
use crate::theme::{Background, Theme};
use crate::wrap::wrap;

const QUOTE_FONT_SIZE: u32 = 84;
const AUTHOR_FONT_SIZE: u32 = 42;
const FOOTER_FONT_SIZE: u32 = 32;
const SEPARATOR_WIDTH: u32 = 120;
const SEPARATOR_HEIGHT: u32 = 6;

/// Vertical placement of everything below the quote block.
///
/// The separator and author offsets depend on how many lines the quote
/// wrapped into; longer quotes push them further down. Keeping the
/// arithmetic here, as a pure function of `(height, line_count)`, makes the
/// placement law testable without scraping attribute values out of markup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Baseline of the first quote line.
    pub quote_start_y: f64,
    /// Top edge of the separator bar.
    pub separator_y: f64,
    /// Baseline of the author line.
    pub author_y: f64,
    /// Baseline of the footer label.
    pub footer_y: f64,
}

impl Layout {
    /// Computes vertical offsets for a canvas of `height` holding a quote
    /// wrapped into `line_count` lines.
    pub fn new(height: u32, line_count: usize) -> Layout {
        let quote_start_y = f64::from(height) * QUOTE_START_RATIO;
        let quote_block = line_count as f64 * f64::from(PER_LINE_HEIGHT);
        Layout {
            quote_start_y,
            separator_y: quote_start_y + quote_block + f64::from(SEPARATOR_GAP),
            author_y: quote_start_y + quote_block + f64::from(AUTHOR_GAP),
            footer_y: f64::from(height) - f64::from(FOOTER_OFFSET),
        }
    }
}

/// Background fill for the canvas rect, plus the `<defs>` block when the
/// theme uses a gradient. CSS gradient functions are not valid SVG paint, so
/// gradients are emitted as proper gradient elements referenced by id.
fn background_paint(background: Background) -> (String, &'static str) {
    match background {
        Background::Solid(color) => (String::new(), color),
        Background::Radial { center, edge } => (
            format!(
                concat!(
                    "<defs><radialGradient id=\"bg\" cx=\"0.5\" cy=\"0.5\" r=\"0.75\">",
                    "<stop offset=\"0%\" stop-color=\"{}\"/>",
                    "<stop offset=\"100%\" stop-color=\"{}\"/>",
                    "</radialGradient></defs>"
                ),
                center, edge
            ),
            "url(#bg)",
        ),
        Background::Linear { top, bottom } => (
            format!(
                concat!(
                    "<defs><linearGradient id=\"bg\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">",
                    "<stop offset=\"0%\" stop-color=\"{}\"/>",
                    "<stop offset=\"100%\" stop-color=\"{}\"/>",
                    "</linearGradient></defs>"
                ),
                top, bottom
            ),
            "url(#bg)",
        ),
    }
}

/// Composes the complete wallpaper document for one theme and quote.
///
/// Pure function of its arguments: no timestamps, no randomness. Text is
/// escaped before interpolation so a quote containing `&` or `<` still
/// yields well-formed markup.
pub fn compose(theme: &Theme, quote: &str, author: &str, width: u32, height: u32) -> String {
    let lines = wrap(quote, MAX_CHARS_PER_LINE);
    let layout = Layout::new(height, lines.len());
    let center_x = f64::from(width) / 2.0;
    let font = theme.font.as_str();

    let mut tspans = String::new();
    for (i, line) in lines.iter().enumerate() {
        let dy = if i == 0 { "0" } else { "1.2em" };
        tspans.push_str(&format!(
            "<tspan x=\"{}\" dy=\"{}\">{}</tspan>",
            center_x,
            dy,
            html_escape::encode_text(line)
        ));
    }

    let (defs, bg_fill) = background_paint(theme.background);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\">",
        w = width,
        h = height,
    ));
    svg.push_str(&defs);
    svg.push_str(&format!(
        "<rect width=\"{}\" height=\"{}\" fill=\"{}\"/>",
        width, height, bg_fill
    ));
    // Decorative frame, inset by the margin on every edge.
    svg.push_str(&format!(
        "<rect x=\"{m}\" y=\"{m}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" opacity=\"0.5\"/>",
        width - 2 * BORDER_MARGIN,
        height - 2 * BORDER_MARGIN,
        theme.accent,
        BORDER_STROKE,
        m = BORDER_MARGIN,
    ));
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"{}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"700\">{}</text>",
        center_x, layout.quote_start_y, theme.text, font, QUOTE_FONT_SIZE, tspans
    ));
    svg.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"3\"/>",
        (f64::from(width) - f64::from(SEPARATOR_WIDTH)) / 2.0,
        layout.separator_y,
        SEPARATOR_WIDTH,
        SEPARATOR_HEIGHT,
        theme.accent,
    ));
    // SVG has no text-transform, so the uppercase treatment happens here.
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"{}\" font-family=\"{}\" font-size=\"{}\" font-weight=\"400\" letter-spacing=\"2\">{}</text>",
        center_x,
        layout.author_y,
        theme.sub,
        font,
        AUTHOR_FONT_SIZE,
        html_escape::encode_text(&author.to_uppercase()),
    ));
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" fill=\"{}\" opacity=\"0.3\" font-family=\"sans-serif\" font-size=\"{}\" letter-spacing=\"8\">{}</text>",
        center_x, layout.footer_y, theme.text, FOOTER_FONT_SIZE, FOOTER_LABEL
    ));
    svg.push_str("</svg>");
    svg
}
