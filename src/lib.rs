//! Renders a fixed, single-page document to a PNG preview and a PDF.
//!
//! A [Document] is an ordered list of blocks (title, headings, paragraphs, bullets and gaps).
//! It is drawn onto a raster [Canvas] the size of one page, with paragraphs and bullets
//! greedily word-wrapped to the text column, and then saved twice: as a PNG and as a PDF
//! embedding the same pixels. If the content runs past the bottom margin the build fails with
//! [RenderError::Overflow] instead of paginating.
//!
//! ```no_run
//! use onepage::{build, content, BuildOptions, SystemFonts};
//!
//! let report = build(&content::kinevo_summary(), &SystemFonts::default(), &BuildOptions::default())
//!     .expect("summary fits on one page");
//! println!("{}", report.pdf_path.display());
//! ```

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

/// The fixed Portuguese summary the binary renders
pub mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod fonts;
pub use fonts::*;

mod info;
pub use info::*;

/// Page geometry and word wrapping
pub mod layout;

mod output;
pub use output::*;

pub mod pagesize;

mod pdf;
pub use pdf::*;

mod render;
pub use render::*;

mod style;
pub use style::*;

mod units;
pub use units::*;
