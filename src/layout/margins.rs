use crate::units::Px;

/// Distances from each page edge to the text area. Nothing stops a wide unwrapped line from
/// running into the right margin; the bottom margin is where the overflow check draws the line.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Margins {
    /// The same margin on every side
    pub fn all<D: Into<Px>>(value: D) -> Margins {
        let value: Px = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Left and right margins together
    pub fn horizontal(&self) -> Px {
        self.left + self.right
    }
}
