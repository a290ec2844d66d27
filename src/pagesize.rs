//! Paper sizes and their raster dimensions.
//!
//! Sizes are given in portrait orientation as (width, height) in points and
//! are converted to whole pixels for a given rendering resolution.
//!
//! ```
//! use onepage::pagesize::{self, A4};
//!
//! assert_eq!(pagesize::pixels(A4, 200.0), (1654, 2339));
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

// iso a-series (converted from mm to points)
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));

// north american
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));

/// Whole-pixel dimensions of a page rasterised at `dpi` dots per inch
pub fn pixels(size: PageSize, dpi: f32) -> (u32, u32) {
    (
        size.0.to_px(dpi).round_to_pixels(),
        size.1.to_px(dpi).round_to_pixels(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_matches_millimetre_definition() {
        let (w, h) = A4;
        let expected_w: Pt = Mm(210.0).into();
        let expected_h: Pt = Mm(297.0).into();
        assert!((w.0 - expected_w.0).abs() < 1e-3);
        assert!((h.0 - expected_h.0).abs() < 1e-3);
    }

    #[test]
    fn raster_sizes_scale_with_dpi() {
        assert_eq!(pixels(A4, 72.0), (595, 842));
        assert_eq!(pixels(LETTER, 100.0), (850, 1100));
        assert_eq!(pixels(A5, 200.0), (1165, 1654));
    }
}
