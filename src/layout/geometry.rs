use super::Margins;
use crate::pagesize::{self, PageSize};
use crate::units::Px;

/// Resolution the summary is rasterised at; A4 at this resolution is 1654 x 2339 pixels
pub const DEFAULT_DPI: f32 = 200.0;

/// Fixed dimensions of the single page being drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
}

impl PageGeometry {
    /// A page of `width` x `height` pixels. The horizontal margins must leave room for text.
    pub fn new(width: u32, height: u32, margins: Margins) -> PageGeometry {
        let geometry = PageGeometry {
            width,
            height,
            margins,
        };
        debug_assert!(
            geometry.max_text_width() > Px(0.0),
            "margins leave no room for text"
        );
        geometry
    }

    /// A paper size rasterised at `dpi`, rounded to whole pixels
    pub fn from_page_size(size: PageSize, dpi: f32, margins: Margins) -> PageGeometry {
        let (width, height) = pagesize::pixels(size, dpi);
        PageGeometry::new(width, height, margins)
    }

    /// Width available to text between the left and right margins
    pub fn max_text_width(&self) -> Px {
        Px::from(self.width) - self.margins.horizontal()
    }

    /// The lowest y the cursor may finish at
    pub fn bottom_limit(&self) -> Px {
        Px::from(self.height) - self.margins.bottom
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::from_page_size(pagesize::A4, DEFAULT_DPI, Margins::all(Px(95.0)))
    }
}
