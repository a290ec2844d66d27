use crate::canvas::Canvas;
use crate::colour::colours;
use crate::document::Document;
use crate::fonts::{FontProvider, FontSet};
use crate::layout::{PageGeometry, DEFAULT_DPI};
use crate::pdf::save_pdf;
use crate::render::Renderer;
use crate::style::Stylesheet;
use crate::units::Px;
use crate::RenderError;
use std::path::{Path, PathBuf};

/// Where and how a document is rendered
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub png_path: PathBuf,
    pub pdf_path: PathBuf,
    /// Resolution the PDF page is sized for; the canvas itself is sized by `geometry`
    pub dpi: f32,
    pub geometry: PageGeometry,
    pub stylesheet: Stylesheet,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            png_path: PathBuf::from("tmp/pdfs/kinevo_app_summary_pt_preview.png"),
            pdf_path: PathBuf::from("output/pdf/kinevo_app_summary_pt.pdf"),
            dpi: DEFAULT_DPI,
            geometry: PageGeometry::default(),
            stylesheet: Stylesheet::default(),
        }
    }
}

impl BuildOptions {
    /// Default options with both outputs placed relative to `root` instead of the working
    /// directory
    pub fn rooted_at<P: AsRef<Path>>(root: P) -> BuildOptions {
        let defaults = BuildOptions::default();
        BuildOptions {
            png_path: root.as_ref().join(&defaults.png_path),
            pdf_path: root.as_ref().join(&defaults.pdf_path),
            ..defaults
        }
    }
}

/// What a successful build produced
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    /// Absolute path of the written PDF
    pub pdf_path: PathBuf,
    /// Absolute path of the written PNG preview
    pub png_path: PathBuf,
    /// Where the cursor ended up after the last block
    pub cursor: Px,
}

/// Draw `document` onto a fresh canvas, failing with [RenderError::Overflow] if it does not fit
/// on the page. Nothing is written to disk.
pub fn render<P: FontProvider + ?Sized>(
    document: &Document,
    provider: &P,
    options: &BuildOptions,
) -> Result<(Canvas, Px), RenderError> {
    let fonts = FontSet::resolve(provider, &options.stylesheet)?;
    let geometry = &options.geometry;
    let mut canvas = Canvas::new(geometry.width, geometry.height, colours::WHITE);

    let mut renderer = Renderer::new(&mut canvas, &fonts, &options.stylesheet, geometry);
    let mut cursor = renderer.start();
    document.draw(&mut renderer, &mut cursor);
    let cursor = renderer.finish(cursor)?;

    Ok((canvas, cursor))
}

/// Render `document` and write the PNG preview and the PDF, creating their parent
/// directories as needed. Existing files are overwritten.
pub fn build<P: FontProvider + ?Sized>(
    document: &Document,
    provider: &P,
    options: &BuildOptions,
) -> Result<BuildReport, RenderError> {
    let (canvas, cursor) = render(document, provider, options)?;

    for path in [&options.pdf_path, &options.png_path] {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
    }

    canvas.save_png(&options.png_path)?;
    tracing::info!(path = %options.png_path.display(), "wrote PNG preview");

    save_pdf(&canvas, options.dpi, &document.info, &options.pdf_path)?;
    tracing::info!(path = %options.pdf_path.display(), dpi = options.dpi, "wrote PDF");

    Ok(BuildReport {
        pdf_path: std::fs::canonicalize(&options.pdf_path)?,
        png_path: std::fs::canonicalize(&options.png_path)?,
        cursor,
    })
}
