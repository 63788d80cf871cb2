//! SVG rasterization to PNG via resvg.

use std::sync::{Arc, LazyLock};

use resvg::usvg::fontdb;
use resvg::{tiny_skia, usvg};

use crate::error::ProphecyError;

/// System fonts are scanned once per process and shared across requests.
static FONTDB: LazyLock<Arc<fontdb::Database>> = LazyLock::new(|| {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    Arc::new(db)
});

/// Rasterizes an SVG document to an encoded PNG at the document's own size.
///
/// There is no fallback image: any parse or render failure surfaces as
/// [`ProphecyError::Render`].
pub fn svg_to_png(svg: &str) -> Result<Vec<u8>, ProphecyError> {
    let options = usvg::Options {
        fontdb: FONTDB.clone(),
        ..usvg::Options::default()
    };

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|err| ProphecyError::Render(format!("SVG parse error: {err}")))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        ProphecyError::Render(format!(
            "Cannot allocate a {}x{} canvas",
            size.width(),
            size.height()
        ))
    })?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|err| ProphecyError::Render(format!("PNG encoding error: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn minimal_document_renders_to_png() {
        let svg = "<svg width='10' height='10' xmlns='http://www.w3.org/2000/svg'></svg>";
        let png = svg_to_png(svg).expect("render minimal svg");
        assert_eq!(&png[..8], &PNG_MAGIC);
    }

    #[test]
    fn broken_markup_is_a_render_error() {
        let result = svg_to_png("<svg width='10'");
        assert!(matches!(result, Err(ProphecyError::Render(_))));
    }

    #[test]
    fn non_svg_content_is_a_render_error() {
        let result = svg_to_png("{\"not\": \"svg\"}");
        assert!(matches!(result, Err(ProphecyError::Render(_))));
    }
}
