//! Page geometry and text wrapping.
//!
//! Layout happens in pixels on a fixed-size page. [`PageGeometry`](crate::layout::PageGeometry)
//! describes the page and its margins, and [`wrap_text`](crate::layout::wrap_text) splits text
//! into lines that fit the text column, measuring candidate lines with anything that implements
//! [`Measure`](crate::layout::Measure) (usually a [`Font`](crate::Font)).
//!
//! # Example
//!
//! ```
//! use onepage::layout::{wrap_text, PageGeometry};
//! use onepage::{EmbeddedFonts, FontProvider, FontWeight, Px};
//!
//! let geometry = PageGeometry::default();
//! let body = EmbeddedFonts.font(FontWeight::Regular, Px(28.0)).expect("can load font");
//!
//! let lines = wrap_text("Kinevo é um monorepo SaaS de treino.", &body, geometry.max_text_width());
//! assert_eq!(lines, vec!["Kinevo é um monorepo SaaS de treino."]);
//! ```

mod geometry;
mod margins;
mod wrap;

pub use geometry::*;
pub use margins::*;
pub use wrap::*;
