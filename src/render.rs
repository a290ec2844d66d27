use crate::canvas::Surface;
use crate::fonts::FontSet;
use crate::layout::{wrap_text, PageGeometry};
use crate::style::{Stylesheet, TextStyle};
use crate::units::Px;
use crate::{Font, RenderError};
use id_arena::Id;

/// The next free y position on the page. It only ever moves down.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Cursor {
    y: Px,
}

impl Cursor {
    pub fn at(y: Px) -> Cursor {
        Cursor { y }
    }

    pub fn y(&self) -> Px {
        self.y
    }

    /// Move down by `by`; negative amounts are ignored
    pub fn advance(&mut self, by: Px) {
        if by > Px(0.0) {
            self.y += by;
        }
    }
}

/// Draws blocks of text onto a [Surface], one line at a time, starting wherever the
/// [Cursor] handed to each operation points and leaving it below what was drawn.
pub struct Renderer<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    fonts: &'a FontSet,
    stylesheet: &'a Stylesheet,
    geometry: &'a PageGeometry,
}

impl<'a, S: Surface + ?Sized> Renderer<'a, S> {
    pub fn new(
        surface: &'a mut S,
        fonts: &'a FontSet,
        stylesheet: &'a Stylesheet,
        geometry: &'a PageGeometry,
    ) -> Self {
        Renderer {
            surface,
            fonts,
            stylesheet,
            geometry,
        }
    }

    /// A cursor sitting on the top margin
    pub fn start(&self) -> Cursor {
        Cursor::at(self.geometry.margins.top)
    }

    fn line(&mut self, cursor: &mut Cursor, x: Px, text: &str, font: &Font, style: TextStyle) {
        self.surface.draw_text((x, cursor.y()), text, font, style.colour);
        cursor.advance(style.line_height);
    }

    /// Draw `text` on one line at the left margin. Text wider than the column is drawn with
    /// the font scaled down until it fits; the line advance stays the same.
    fn single_line(&mut self, cursor: &mut Cursor, text: &str, font: Id<Font>, style: TextStyle) {
        let fonts = self.fonts;
        let mut font = &fonts[font];
        let max_width = self.geometry.max_text_width();
        let width = font.width_of_text(text);

        let fitted;
        if width > max_width {
            fitted = font.resized(font.size() * (max_width.0 / width.0));
            tracing::debug!(text, %width, size = %fitted.size(), "shrank line to the text column");
            font = &fitted;
        }

        let left = self.geometry.margins.left;
        self.line(cursor, left, text, font, style);
    }

    /// Draw a single unwrapped line in the title style
    pub fn title(&mut self, cursor: &mut Cursor, text: &str) {
        let before = cursor.y();
        self.single_line(cursor, text, self.fonts.title, self.stylesheet.title);
        tracing::debug!(%before, after = %cursor.y(), "drew title");
    }

    /// Draw a single unwrapped line in the heading style
    pub fn heading(&mut self, cursor: &mut Cursor, text: &str) {
        let before = cursor.y();
        self.single_line(cursor, text, self.fonts.heading, self.stylesheet.heading);
        tracing::debug!(%before, after = %cursor.y(), text, "drew heading");
    }

    /// Wrap `text` to the text column and draw each line at the left margin
    pub fn paragraph(&mut self, cursor: &mut Cursor, text: &str) {
        let before = cursor.y();
        let fonts = self.fonts;
        let body = &fonts[fonts.body];
        let lines = wrap_text(text, body, self.geometry.max_text_width());
        let left = self.geometry.margins.left;
        for line in lines.iter() {
            self.line(cursor, left, line, body, self.stylesheet.body);
        }
        tracing::debug!(%before, after = %cursor.y(), lines = lines.len(), "drew paragraph");
    }

    /// Wrap `text` to the text column less the bullet indent. The first line is drawn at the
    /// margin behind the bullet prefix, continuation lines are indented without one.
    pub fn bullet(&mut self, cursor: &mut Cursor, text: &str) {
        let before = cursor.y();
        let fonts = self.fonts;
        let body = &fonts[fonts.body];
        let indent = self.stylesheet.bullet_indent;
        let lines = wrap_text(text, body, self.geometry.max_text_width() - indent);

        let Some((first, rest)) = lines.split_first() else {
            return;
        };

        let left = self.geometry.margins.left;
        let first = format!("{}{}", self.stylesheet.bullet_prefix, first);
        self.line(cursor, left, &first, body, self.stylesheet.body);
        for line in rest.iter() {
            self.line(cursor, left + indent, line, body, self.stylesheet.body);
        }
        tracing::debug!(%before, after = %cursor.y(), lines = lines.len(), "drew bullet");
    }

    /// Leave `by` pixels of empty space
    pub fn gap(&mut self, cursor: &mut Cursor, by: Px) {
        cursor.advance(by);
    }

    /// Check that everything drawn so far ends above the bottom margin, returning the final
    /// cursor position if it does
    pub fn finish(&self, cursor: Cursor) -> Result<Px, RenderError> {
        if cursor.y() > self.geometry.bottom_limit() {
            return Err(RenderError::Overflow { cursor: cursor.y() });
        }
        Ok(cursor.y())
    }
}
