use crate::{Px, RenderError};
use ab_glyph::{Font as _, FontVec, GlyphId, OutlinedGlyph, PxScale};
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use std::sync::Arc;

/// A parsed font face fixed at a pixel size. Fonts can be TTF or OTF fonts, or the first face
/// of a TTC collection.
///
/// The face is parsed twice: once by [owned_ttf_parser] for metrics and text measurement, and
/// once by [ab_glyph] to rasterise glyph outlines. Both views index the same glyph table, so a
/// glyph is always drawn with exactly the advance it was measured with.
///
/// The parsed data is shared, so [Font::resized] copies of a font are cheap.
pub struct Font {
    face: Arc<OwnedFace>,
    outlines: Arc<FontVec>,
    size: Px,
}

impl Font {
    /// Load a font from raw bytes at the given pixel size (em height), returning an error if
    /// the font could not be parsed
    pub fn load(bytes: Vec<u8>, size: Px) -> Result<Font, RenderError> {
        let face = OwnedFace::from_vec(bytes.clone(), 0)?;
        let outlines = FontVec::try_from_vec_and_index(bytes, 0)?;

        Ok(Font {
            face: Arc::new(face),
            outlines: Arc::new(outlines),
            size,
        })
    }

    /// The same face at another pixel size
    pub fn resized(&self, size: Px) -> Font {
        Font {
            face: Arc::clone(&self.face),
            outlines: Arc::clone(&self.outlines),
            size,
        }
    }

    /// The pixel size this font was loaded at
    pub fn size(&self) -> Px {
        self.size
    }

    /// Obtain the full name of the font, if the font carries one
    pub fn name(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FULL_NAME && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the family name of the font, if the font carries one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the weight of the font, 400 being normal and 700 bold
    pub fn weight(&self) -> u16 {
        self.face.as_face_ref().weight().to_number()
    }

    fn scaling(&self) -> f32 {
        self.size.0 / self.face.as_face_ref().units_per_em() as f32
    }

    /// Distance from the top of the line to the baseline
    pub fn ascent(&self) -> Px {
        Px(self.scaling() * self.face.as_face_ref().ascender() as f32)
    }

    /// Distance from the baseline to the bottom of the font. Note: this is usually negative
    pub fn descent(&self) -> Px {
        Px(self.scaling() * self.face.as_face_ref().descender() as f32)
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    /// Horizontal advance of a character, or [None] if the font has no glyph for it
    pub fn advance(&self, ch: char) -> Option<Px> {
        let gid = self.face.as_face_ref().glyph_index(ch)?;
        let advance = self.face.as_face_ref().glyph_hor_advance(gid).unwrap_or_default();
        Some(Px(self.scaling() * advance as f32))
    }

    /// Calculate the width of a string of text. Characters the font has no glyph for
    /// (including newlines) contribute nothing.
    pub fn width_of_text(&self, text: &str) -> Px {
        text.chars().filter_map(|ch| self.advance(ch)).sum()
    }

    /// ab_glyph scales by the ascent-to-descent height rather than by the em square
    fn raster_scale(&self) -> PxScale {
        let units_per_em = self
            .outlines
            .units_per_em()
            .unwrap_or(self.face.as_face_ref().units_per_em() as f32);
        PxScale::from(self.size.0 * self.outlines.height_unscaled() / units_per_em)
    }

    /// Outline a glyph with its origin on the baseline at `(x, baseline)`. Returns [None] for
    /// glyphs without an outline, such as spaces.
    pub(crate) fn outline(&self, gid: u16, x: f32, baseline: f32) -> Option<OutlinedGlyph> {
        let glyph = GlyphId(gid)
            .with_scale_and_position(self.raster_scale(), ab_glyph::point(x, baseline));
        self.outlines.outline_glyph(glyph)
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("name", &self.name())
            .field("size", &self.size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{EMBEDDED_BOLD, EMBEDDED_REGULAR};

    fn regular(size: f32) -> Font {
        Font::load(EMBEDDED_REGULAR.to_vec(), Px(size)).expect("can load embedded font")
    }

    #[test]
    fn embedded_fonts_have_names_and_weights() {
        let font = regular(28.0);
        assert_eq!(font.family().as_deref(), Some("DejaVu Sans"));
        assert_eq!(font.weight(), 400);

        let bold = Font::load(EMBEDDED_BOLD.to_vec(), Px(28.0)).expect("can load embedded font");
        assert_eq!(bold.weight(), 700);
    }

    #[test]
    fn width_is_the_sum_of_advances() {
        let font = regular(28.0);
        let h = font.advance('h').expect("has h");
        let i = font.advance('i').expect("has i");
        assert_eq!(font.width_of_text("hi"), h + i);
        assert_eq!(font.width_of_text(""), Px(0.0));
    }

    #[test]
    fn width_scales_linearly_with_size() {
        let small = regular(20.0).width_of_text("Supabase");
        let large = regular(40.0).width_of_text("Supabase");
        assert!((large.0 - small.0 * 2.0).abs() < 1e-3);
    }

    #[test]
    fn resized_font_shares_the_face() {
        let font = regular(56.0);
        let smaller = font.resized(Px(28.0));
        assert_eq!(smaller.size(), Px(28.0));
        assert_eq!(smaller.family(), font.family());
        let halved = font.width_of_text("Kinevo").0 / 2.0;
        assert!((smaller.width_of_text("Kinevo").0 - halved).abs() < 1e-3);
    }

    #[test]
    fn ascent_is_above_the_baseline() {
        let font = regular(28.0);
        assert!(font.ascent() > Px(0.0));
        assert!(font.descent() < Px(0.0));
        assert!(font.ascent() < Px(28.0 * 1.2));
    }

    #[test]
    fn spaces_have_no_outline() {
        let font = regular(28.0);
        let space = font.glyph_id(' ').expect("has space");
        let letter = font.glyph_id('K').expect("has K");
        assert!(font.outline(space, 0.0, 30.0).is_none());
        assert!(font.outline(letter, 0.0, 30.0).is_some());
    }
}
