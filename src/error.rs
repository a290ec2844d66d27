use crate::units::Px;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    /// An I/O error occurred while reading a font or writing an output file
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [ab_glyph] could not prepare the font for rasterisation
    InvalidFont(#[from] ab_glyph::InvalidFont),

    #[error(transparent)]
    /// [image] failed to encode the canvas
    Image(#[from] image::ImageError),

    #[error("content overflows a single page (final y = {cursor})")]
    /// The laid out content ran past the bottom margin of the page
    Overflow { cursor: Px },
}
