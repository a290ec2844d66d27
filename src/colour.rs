use image::Rgb;

/// A colour used to paint text or fill the canvas
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// RGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// Gray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub const fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub const fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub const fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Quantise the colour to an 8-bit canvas pixel
    pub fn to_rgb8(self) -> Rgb<u8> {
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        match self {
            Colour::RGB { r, g, b } => Rgb([channel(r), channel(g), channel(b)]),
            Colour::Grey { g } => {
                let g = channel(g);
                Rgb([g, g, g])
            }
        }
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };

    /// Body copy, `#111111`
    pub const INK: Colour = Colour::new_rgb_bytes(0x11, 0x11, 0x11);
    /// Section headings, `#1F3A56`
    pub const SLATE: Colour = Colour::new_rgb_bytes(0x1F, 0x3A, 0x56);
    /// Document title, `#0E2235`
    pub const NAVY: Colour = Colour::new_rgb_bytes(0x0E, 0x22, 0x35);
}
