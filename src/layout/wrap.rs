use crate::font::Font;
use crate::units::Px;

/// Anything that can tell how wide a run of text renders.
///
/// A [Font] measures the sum of its glyph advances, which is where the pen stops, not the right
/// edge of the inked glyphs. Lines are wrapped and drawn with the same number.
pub trait Measure {
    fn measure(&self, text: &str) -> Px;
}

impl Measure for Font {
    fn measure(&self, text: &str) -> Px {
        self.width_of_text(text)
    }
}

impl<M: Measure + ?Sized> Measure for &M {
    fn measure(&self, text: &str) -> Px {
        (**self).measure(text)
    }
}

/// Greedily wraps `text` into lines no wider than `max_width`, breaking only between
/// whitespace-separated words.
///
/// Each word is tentatively appended to the current line with a single space; if the measured
/// result no longer fits, the current line is closed and the word starts the next one. There is
/// no backtracking, no hyphenation, and a word wider than `max_width` is never split: it gets a
/// line of its own and overflows it.
///
/// Runs of whitespace collapse to a single space. Empty or all-whitespace input produces a
/// single empty line rather than no lines at all.
///
/// ```
/// use onepage::layout::{wrap_text, Measure};
/// use onepage::Px;
///
/// struct Mono;
/// impl Measure for Mono {
///     fn measure(&self, text: &str) -> Px {
///         Px(text.chars().count() as f32 * 10.0)
///     }
/// }
///
/// assert_eq!(wrap_text("hello world", &Mono, Px(60.0)), vec!["hello", "world"]);
/// assert_eq!(wrap_text("hello world", &Mono, Px(110.0)), vec!["hello world"]);
/// assert_eq!(wrap_text("   ", &Mono, Px(60.0)), vec![""]);
/// ```
pub fn wrap_text<M: Measure + ?Sized>(text: &str, measure: &M, max_width: Px) -> Vec<String> {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return vec![String::new()];
    };

    let mut lines: Vec<String> = Vec::new();
    let mut current = first.to_string();

    for word in words {
        let trial = format!("{current} {word}");
        if measure.measure(&trial) <= max_width {
            current = trial;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    lines.push(current);
    lines
}
