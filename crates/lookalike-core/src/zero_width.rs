//! Invisible format characters that must never survive into a skeleton.

/// Canonical representation of a filtered zero-width character.
pub const ZERO_WIDTH: &str = "";

const ZERO_WIDTHS: &[char] = &[
    '\u{200B}', // zero width space
    '\u{200C}', // zero width non-joiner
    '\u{200D}', // zero width joiner
    '\u{FEFF}', // zero width no-break space / byte order mark
    '\u{2028}', // line separator
    '\u{2029}', // paragraph separator
];

/// The full zero-width set, used to seed table construction.
pub fn all() -> &'static [char] {
    ZERO_WIDTHS
}

pub fn is_zero_width(ch: char) -> bool {
    ZERO_WIDTHS.contains(&ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_width_members() {
        assert!(is_zero_width('\u{200B}'));
        assert!(is_zero_width('\u{200D}'));
        assert!(is_zero_width('\u{FEFF}'));
        assert!(is_zero_width('\u{2029}'));
    }

    #[test]
    fn test_visible_chars_excluded() {
        assert!(!is_zero_width('a'));
        assert!(!is_zero_width(' '));
        assert!(!is_zero_width('\u{00A0}')); // no-break space is visible width
    }

    #[test]
    fn test_canonical_form_is_empty() {
        assert!(ZERO_WIDTH.is_empty());
    }
}
