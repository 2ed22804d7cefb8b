//! Element types a sequence can be segmented over.

/// One element of a segmentable sequence: a `char` of text or a `u8` of
/// binary data.
pub trait Unit: Copy + PartialEq + std::fmt::Debug {
    /// The unit equal to `c`, if `c` is representable.
    fn from_char(c: char) -> Option<Self>;

    /// Space or control characters, which separate words.
    fn is_blank(self) -> bool;

    fn is_cr(self) -> bool;

    fn is_lf(self) -> bool;

    /// Any single-unit line terminator: CR, LF, or a Unicode line or
    /// paragraph separator.
    fn is_line_break(self) -> bool;

    /// `.`, `!` or `?`.
    fn is_sentence_end(self) -> bool;
}

impl Unit for char {
    #[inline]
    fn from_char(c: char) -> Option<Self> {
        Some(c)
    }

    #[inline]
    fn is_blank(self) -> bool {
        self.is_whitespace() || self.is_control()
    }

    #[inline]
    fn is_cr(self) -> bool {
        self == '\r'
    }

    #[inline]
    fn is_lf(self) -> bool {
        self == '\n'
    }

    #[inline]
    fn is_line_break(self) -> bool {
        matches!(self, '\r' | '\n' | '\u{2028}' | '\u{2029}')
    }

    #[inline]
    fn is_sentence_end(self) -> bool {
        matches!(self, '.' | '!' | '?')
    }
}

impl Unit for u8 {
    #[inline]
    fn from_char(c: char) -> Option<Self> {
        u8::try_from(c).ok()
    }

    #[inline]
    fn is_blank(self) -> bool {
        self.is_ascii_whitespace() || self.is_ascii_control()
    }

    #[inline]
    fn is_cr(self) -> bool {
        self == b'\r'
    }

    #[inline]
    fn is_lf(self) -> bool {
        self == b'\n'
    }

    #[inline]
    fn is_line_break(self) -> bool {
        matches!(self, b'\r' | b'\n')
    }

    #[inline]
    fn is_sentence_end(self) -> bool {
        matches!(self, b'.' | b'!' | b'?')
    }
}

/// Length of the line terminator starting at `at`, treating CRLF as one.
pub(crate) fn line_break_len<U: Unit>(units: &[U], at: usize) -> usize {
    match units.get(at) {
        Some(u) if u.is_cr() && units.get(at + 1).is_some_and(|next| next.is_lf()) => 2,
        Some(u) if u.is_line_break() => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_covers_controls_and_unicode_spaces() {
        assert!(' '.is_blank());
        assert!('\u{0}'.is_blank());
        assert!('\u{a0}'.is_blank());
        assert!(!'a'.is_blank());
        assert!(b'\t'.is_blank());
        assert!(!b'x'.is_blank());
    }

    #[test]
    fn crlf_is_one_terminator() {
        let text: Vec<char> = "a\r\nb\rc\u{2028}".chars().collect();
        assert_eq!(line_break_len(&text, 1), 2);
        assert_eq!(line_break_len(&text, 2), 1);
        assert_eq!(line_break_len(&text, 4), 1);
        assert_eq!(line_break_len(&text, 6), 1);
        assert_eq!(line_break_len(&text, 0), 0);
        assert_eq!(line_break_len(b"\r\n".as_slice(), 0), 2);
    }

    #[test]
    fn bytes_only_from_latin1_chars() {
        assert_eq!(u8::from_char(','), Some(b','));
        assert_eq!(u8::from_char('\u{2028}'), None);
    }
}
