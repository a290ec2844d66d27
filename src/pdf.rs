//! Single-page PDF output.
//!
//! The page is not re-typeset as PDF text: the finished canvas is embedded as one
//! Flate-compressed RGB image that fills the page, sized so that one canvas pixel is one dot
//! at the requested resolution.

use crate::canvas::Canvas;
use crate::info::Info;
use crate::units::Px;
use crate::RenderError;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Name, Pdf, Rect, Ref};
use std::io::Write;
use std::path::Path;

const CATALOG_ID: Ref = Ref::new(1);
const PAGE_TREE_ID: Ref = Ref::new(2);
const PAGE_ID: Ref = Ref::new(3);
const IMAGE_ID: Ref = Ref::new(4);
const CONTENT_ID: Ref = Ref::new(5);
const INFO_ID: Ref = Ref::new(6);

const IMAGE_NAME: &[u8] = b"I0";

/// Write `canvas` as a one-page PDF at `dpi` dots per inch
pub fn write_pdf<W: Write>(
    canvas: &Canvas,
    dpi: f32,
    info: &Info,
    mut w: W,
) -> Result<(), RenderError> {
    let width = Px::from(canvas.width()).to_pt(dpi).0;
    let height = Px::from(canvas.height()).to_pt(dpi).0;

    let mut writer = Pdf::new();
    info.write(INFO_ID, &mut writer);

    writer.catalog(CATALOG_ID).pages(PAGE_TREE_ID);
    writer.pages(PAGE_TREE_ID).kids([PAGE_ID]).count(1);

    let mut page = writer.page(PAGE_ID);
    page.media_box(Rect::new(0.0, 0.0, width, height));
    page.parent(PAGE_TREE_ID);
    page.contents(CONTENT_ID);
    let mut resources = page.resources();
    let mut resource_xobjects = resources.x_objects();
    resource_xobjects.pair(Name(IMAGE_NAME), IMAGE_ID);
    resource_xobjects.finish();
    resources.finish();
    page.finish();

    let level = CompressionLevel::DefaultLevel as u8;
    let pixels = compress_to_vec_zlib(canvas.image.as_raw(), level);
    let mut image = writer.image_xobject(IMAGE_ID, pixels.as_slice());
    image.filter(Filter::FlateDecode);
    image.width(canvas.width() as i32);
    image.height(canvas.height() as i32);
    image.color_space().device_rgb();
    image.bits_per_component(8);
    image.finish();

    let content = render_contents(width, height)?;
    writer.stream(CONTENT_ID, content.as_slice());

    w.write_all(writer.finish().as_slice())?;
    w.flush()?;
    Ok(())
}

/// Write `canvas` as a one-page PDF file at `path`
pub fn save_pdf<P: AsRef<Path>>(
    canvas: &Canvas,
    dpi: f32,
    info: &Info,
    path: P,
) -> Result<(), RenderError> {
    let file = std::fs::File::create(path)?;
    write_pdf(canvas, dpi, info, std::io::BufWriter::new(file))
}

/// Scale the unit-square image up to the whole media box
#[allow(clippy::write_with_newline)]
fn render_contents(width: f32, height: f32) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();
    write!(&mut content, "q\n")?;
    write!(&mut content, "{width} 0 0 {height} 0 0 cm\n")?;
    content.push(b'/');
    content.write_all(IMAGE_NAME)?;
    write!(&mut content, " Do\n")?;
    write!(&mut content, "Q\n")?;
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;

    fn pdf_of(canvas: &Canvas, dpi: f32) -> Vec<u8> {
        let mut out = Vec::new();
        write_pdf(canvas, dpi, &Info::new().with_title("Teste"), &mut out).unwrap();
        out
    }

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack
            .windows(needle.len())
            .any(|window| window == needle.as_bytes())
    }

    #[test]
    fn writes_a_single_page_with_one_image() {
        let canvas = Canvas::new(200, 100, colours::WHITE);
        let pdf = pdf_of(&canvas, 200.0);

        assert!(pdf.starts_with(b"%PDF-"));
        assert!(contains(&pdf, "/Count 1"));
        assert!(contains(&pdf, "/Subtype /Image"));
        assert!(contains(&pdf, "/Width 200"));
        assert!(contains(&pdf, "/Height 100"));
        assert!(contains(&pdf, "/ColorSpace /DeviceRGB"));
        assert!(contains(&pdf, "/Filter /FlateDecode"));
        assert!(contains(&pdf, "/I0 Do"));
        assert!(contains(&pdf, "/Title (Teste)"));
    }

    #[test]
    fn media_box_follows_the_resolution() {
        let canvas = Canvas::new(200, 100, colours::WHITE);
        // 200 px at 200 dpi is one inch
        assert!(contains(&pdf_of(&canvas, 200.0), "/MediaBox [0 0 72 36]"));
        assert!(contains(&pdf_of(&canvas, 100.0), "/MediaBox [0 0 144 72]"));
    }

    /// Accepts every write and fails on flush, like a buffered file on a full disk
    struct FailingFlush;

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("disk full"))
        }
    }

    #[test]
    fn failed_flush_is_reported() {
        let canvas = Canvas::new(4, 4, colours::WHITE);
        let result = write_pdf(&canvas, 200.0, &Info::new(), FailingFlush);
        assert!(matches!(result, Err(RenderError::Io(_))));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn small_pdf_on_a_full_device_is_an_error() {
        let canvas = Canvas::new(4, 4, colours::WHITE);
        let result = save_pdf(&canvas, 200.0, &Info::new(), "/dev/full");
        assert!(matches!(result, Err(RenderError::Io(_))), "{result:?}");
    }

    #[test]
    fn image_stream_inflates_to_the_canvas_pixels() {
        let canvas = Canvas::new(3, 2, colours::NAVY);
        let level = CompressionLevel::DefaultLevel as u8;
        let compressed = compress_to_vec_zlib(canvas.image.as_raw(), level);
        let inflated = miniz_oxide::inflate::decompress_to_vec_zlib(&compressed).unwrap();
        assert_eq!(inflated.len(), 3 * 2 * 3);
        assert_eq!(&inflated[..3], &[0x0E, 0x22, 0x35]);
        assert!(contains(&pdf_of(&canvas, 200.0), "/Width 3"));
    }
}
