use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul};

/// PDF points; 72 points make up an inch
#[derive(
    Debug, Default, Clone, Copy, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, Sum, From, Into, Display,
)]
pub struct Pt(pub f32);

/// Millimetres, mostly used to describe paper sizes
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Add, Sub, From, Into, Display)]
pub struct Mm(pub f32);

/// Device pixels on the raster canvas. Positions, font sizes, line advances and
/// measured text widths are all expressed in pixels.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, PartialOrd, Add, AddAssign, Sub, SubAssign, Sum, From, Into, Display,
)]
pub struct Px(pub f32);

impl From<Mm> for Pt {
    fn from(mm: Mm) -> Pt {
        Pt(mm.0 * 72.0 / 25.4)
    }
}

impl Pt {
    /// Convert to pixels for a raster rendered at `dpi` dots per inch
    pub fn to_px(self, dpi: f32) -> Px {
        Px(self.0 * dpi / 72.0)
    }
}

impl Px {
    /// Convert to PDF points for a raster rendered at `dpi` dots per inch
    pub fn to_pt(self, dpi: f32) -> Pt {
        Pt(self.0 * 72.0 / dpi)
    }

    /// The nearest whole pixel count, clamped at zero
    pub fn round_to_pixels(self) -> u32 {
        self.0.round().max(0.0) as u32
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}

impl Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl From<u32> for Px {
    fn from(px: u32) -> Px {
        Px(px as f32)
    }
}
