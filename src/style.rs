use crate::colour::{colours, Colour};
use crate::fonts::FontWeight;
use crate::units::Px;

/// How one kind of block is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub weight: FontWeight,
    /// Font size in pixels (em height)
    pub size: Px,
    pub colour: Colour,
    /// How far the cursor moves down after each drawn line
    pub line_height: Px,
}

/// Fonts, colours and spacing for every block kind
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    pub title: TextStyle,
    pub heading: TextStyle,
    pub body: TextStyle,
    /// Drawn in front of the first line of every bullet
    pub bullet_prefix: String,
    /// Horizontal offset of a bullet's continuation lines; also narrows the wrap width
    pub bullet_indent: Px,
}

impl Default for Stylesheet {
    fn default() -> Self {
        Stylesheet {
            title: TextStyle {
                weight: FontWeight::Bold,
                size: Px(56.0),
                colour: colours::NAVY,
                line_height: Px(86.0),
            },
            heading: TextStyle {
                weight: FontWeight::Bold,
                size: Px(37.0),
                colour: colours::SLATE,
                line_height: Px(52.0),
            },
            body: TextStyle {
                weight: FontWeight::Regular,
                size: Px(28.0),
                colour: colours::INK,
                line_height: Px(39.0),
            },
            bullet_prefix: "- ".to_string(),
            bullet_indent: Px(42.0),
        }
    }
}
