//! The set of emojis that can be displayed over a face.

use std::fmt;

/// The emoji to display over a detected face.
///
/// One of these is selected per detected face per frame by
/// [`ExpressionSample::classify`][crate::expression::ExpressionSample::classify].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emoji {
    /// 😂 – laughing with an open mouth.
    Joy,
    /// 😀 – grinning.
    Grin,
    /// 🙂 – slight smile.
    Smile,
    /// 😐 – neutral expression, also the fallback when features are missing.
    Neutral,
    /// 😉 – exactly one eye closed.
    Wink,
    /// 😴 – both eyes closed.
    Sleep,
}

impl Emoji {
    /// Every displayable emoji.
    ///
    /// Useful for preloading glyph textures before the first frame arrives.
    pub const ALL: [Emoji; 6] = [
        Emoji::Joy,
        Emoji::Grin,
        Emoji::Smile,
        Emoji::Neutral,
        Emoji::Wink,
        Emoji::Sleep,
    ];

    /// Returns the Unicode glyph to hand to the text renderer.
    pub fn glyph(&self) -> &'static str {
        match self {
            Emoji::Joy => "\u{1F602}",
            Emoji::Grin => "\u{1F600}",
            Emoji::Smile => "\u{1F642}",
            Emoji::Neutral => "\u{1F610}",
            Emoji::Wink => "\u{1F609}",
            Emoji::Sleep => "\u{1F634}",
        }
    }
}

/// Displays the emoji's glyph, so values can be formatted straight into a draw call.
impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_are_distinct() {
        for (i, a) in Emoji::ALL.iter().enumerate() {
            for b in &Emoji::ALL[i + 1..] {
                assert_ne!(a.glyph(), b.glyph(), "{a:?} and {b:?} share a glyph");
            }
        }
    }

    #[test]
    fn display_matches_glyph() {
        assert_eq!(Emoji::Joy.to_string(), "😂");
        assert_eq!(Emoji::Sleep.to_string(), Emoji::Sleep.glyph());
    }
}
