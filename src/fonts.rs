//! Font resolution.
//!
//! Drawing code never opens font files itself; it asks a [FontProvider] for a font of a given
//! weight and pixel size. Two providers ship with the crate:
//!
//! * [SystemFonts] probes a ranked list of well-known font paths and loads the first one that
//!   exists, falling back to the embedded fonts when none do
//! * [EmbeddedFonts] only ever uses the DejaVu Sans faces compiled into the binary, which makes
//!   layout reproducible across machines
//!
//! ```
//! use onepage::{EmbeddedFonts, FontProvider, FontWeight, Px};
//!
//! let body = EmbeddedFonts.font(FontWeight::Regular, Px(28.0)).expect("embedded font loads");
//! assert_eq!(body.size(), Px(28.0));
//! ```

use crate::{Font, Px, RenderError, Stylesheet};
use id_arena::{Arena, Id};
use std::ops::Index;
use std::path::{Path, PathBuf};

/// DejaVu Sans, used whenever no system font can be found
pub const EMBEDDED_REGULAR: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");
/// DejaVu Sans Bold, used whenever no bold system font can be found
pub const EMBEDDED_BOLD: &[u8] = include_bytes!("../assets/fonts/DejaVuSans-Bold.ttf");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// Maps a weight and a pixel size to a loaded [Font]
pub trait FontProvider {
    fn font(&self, weight: FontWeight, size: Px) -> Result<Font, RenderError>;
}

impl<P: FontProvider + ?Sized> FontProvider for &P {
    fn font(&self, weight: FontWeight, size: Px) -> Result<Font, RenderError> {
        (**self).font(weight, size)
    }
}

/// Fonts compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedFonts;

impl FontProvider for EmbeddedFonts {
    fn font(&self, weight: FontWeight, size: Px) -> Result<Font, RenderError> {
        let bytes = match weight {
            FontWeight::Regular => EMBEDDED_REGULAR,
            FontWeight::Bold => EMBEDDED_BOLD,
        };
        Font::load(bytes.to_vec(), size)
    }
}

const REGULAR_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Helvetica.ttc",
    "/usr/share/fonts/truetype/msttcorefonts/Arial.ttf",
    // metric-compatible with Arial
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

const BOLD_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/System/Library/Fonts/Supplemental/Helvetica.ttc",
    "/usr/share/fonts/truetype/msttcorefonts/Arial_Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Probes ranked lists of font files, one list per weight. The first path that exists wins;
/// a missing file is never an error, but a file that exists and cannot be parsed is.
#[derive(Debug, Clone)]
pub struct SystemFonts {
    pub regular: Vec<PathBuf>,
    pub bold: Vec<PathBuf>,
}

impl Default for SystemFonts {
    fn default() -> Self {
        SystemFonts {
            regular: REGULAR_CANDIDATES.iter().map(PathBuf::from).collect(),
            bold: BOLD_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl SystemFonts {
    /// Use custom candidate lists instead of the platform defaults
    pub fn with_candidates<R, B>(regular: R, bold: B) -> SystemFonts
    where
        R: IntoIterator,
        R::Item: Into<PathBuf>,
        B: IntoIterator,
        B::Item: Into<PathBuf>,
    {
        SystemFonts {
            regular: regular.into_iter().map(Into::into).collect(),
            bold: bold.into_iter().map(Into::into).collect(),
        }
    }

    fn candidates(&self, weight: FontWeight) -> &[PathBuf] {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }

    /// The first candidate for `weight` that exists on disk
    pub fn locate(&self, weight: FontWeight) -> Option<&Path> {
        self.candidates(weight)
            .iter()
            .inspect(|path| tracing::debug!(path = %path.display(), "probing font candidate"))
            .find(|path| path.exists())
            .map(PathBuf::as_path)
    }
}

impl FontProvider for SystemFonts {
    fn font(&self, weight: FontWeight, size: Px) -> Result<Font, RenderError> {
        match self.locate(weight) {
            Some(path) => {
                let font = Font::load(std::fs::read(path)?, size)?;
                tracing::debug!(
                    path = %path.display(),
                    family = font.family().as_deref().unwrap_or("unknown"),
                    %size,
                    "loaded system font"
                );
                Ok(font)
            }
            None => {
                tracing::warn!(?weight, %size, "no system font found, using embedded font");
                EmbeddedFonts.font(weight, size)
            }
        }
    }
}

/// The three fonts a document is drawn with, resolved once and shared by every block of the
/// same kind
pub struct FontSet {
    pub fonts: Arena<Font>,
    pub title: Id<Font>,
    pub heading: Id<Font>,
    pub body: Id<Font>,
}

impl FontSet {
    /// Ask `provider` for the title, heading and body fonts the stylesheet calls for
    pub fn resolve<P: FontProvider + ?Sized>(
        provider: &P,
        stylesheet: &Stylesheet,
    ) -> Result<FontSet, RenderError> {
        let mut fonts = Arena::new();
        let title = fonts.alloc(provider.font(stylesheet.title.weight, stylesheet.title.size)?);
        let heading =
            fonts.alloc(provider.font(stylesheet.heading.weight, stylesheet.heading.size)?);
        let body = fonts.alloc(provider.font(stylesheet.body.weight, stylesheet.body.size)?);

        Ok(FontSet {
            fonts,
            title,
            heading,
            body,
        })
    }
}

impl Index<Id<Font>> for FontSet {
    type Output = Font;

    fn index(&self, id: Id<Font>) -> &Font {
        &self.fonts[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_fonts_honour_weight_and_size() {
        let regular = EmbeddedFonts.font(FontWeight::Regular, Px(28.0)).unwrap();
        let bold = EmbeddedFonts.font(FontWeight::Bold, Px(37.0)).unwrap();
        assert_eq!(regular.weight(), 400);
        assert_eq!(bold.weight(), 700);
        assert_eq!(bold.size(), Px(37.0));
    }

    #[test]
    fn missing_candidates_fall_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let fonts = SystemFonts::with_candidates(
            [dir.path().join("nope.ttf")],
            [dir.path().join("nope-bold.ttf")],
        );
        assert!(fonts.locate(FontWeight::Regular).is_none());

        let font = fonts.font(FontWeight::Bold, Px(20.0)).unwrap();
        assert_eq!(font.family().as_deref(), Some("DejaVu Sans"));
        assert_eq!(font.weight(), 700);
    }

    #[test]
    fn first_existing_candidate_wins() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("present.ttf");
        let later = dir.path().join("later.ttf");
        std::fs::write(&present, EMBEDDED_BOLD).unwrap();
        std::fs::write(&later, EMBEDDED_REGULAR).unwrap();

        let fonts = SystemFonts::with_candidates(
            [dir.path().join("absent.ttf"), present.clone(), later],
            Vec::<PathBuf>::new(),
        );
        assert_eq!(fonts.locate(FontWeight::Regular), Some(present.as_path()));

        // the bold face sits in the regular list on purpose; the path decides, not the weight
        let font = fonts.font(FontWeight::Regular, Px(12.0)).unwrap();
        assert_eq!(font.weight(), 700);
    }

    #[test]
    fn unparseable_candidate_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.ttf");
        std::fs::write(&broken, b"definitely not a font").unwrap();

        let fonts = SystemFonts::with_candidates([broken], Vec::<PathBuf>::new());
        assert!(matches!(
            fonts.font(FontWeight::Regular, Px(12.0)),
            Err(RenderError::FaceParsingError(_))
        ));
    }

    #[test]
    fn font_set_resolves_one_font_per_role() {
        let set = FontSet::resolve(&EmbeddedFonts, &Stylesheet::default()).unwrap();
        assert_eq!(set.fonts.len(), 3);
        assert_eq!(set[set.title].size(), Px(56.0));
        assert_eq!(set[set.heading].size(), Px(37.0));
        assert_eq!(set[set.body].size(), Px(28.0));
        assert_eq!(set[set.body].weight(), 400);
    }
}
