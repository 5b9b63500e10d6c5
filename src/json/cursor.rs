//! Read position over the unparsed input.

/// A borrowed view of the input and a byte offset into it.
///
/// The input is null-terminated: the view ends at the first `'\0'`. The
/// cursor only ever steps over ASCII, so `pos` always sits on a char boundary.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `input`.
    pub(crate) fn new(input: &'a str) -> Self {
        let input = match input.find('\0') {
            Some(end) => &input[..end],
            None => input,
        };
        Self { input, pos: 0 }
    }

    /// Byte offset from the start of the input.
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// The unparsed remainder.
    pub(crate) fn rest(&self) -> &'a str {
        self.input.get(self.pos..).unwrap_or("")
    }

    /// Peek at the current byte without consuming it.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Step over `n` bytes, stopping at the end of the input.
    pub(crate) fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Skip space, tab, newline and carriage return.
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_whitespace() {
        let mut cursor = Cursor::new(" \t\r\n x");
        cursor.skip_whitespace();
        assert_eq!(cursor.position(), 5);
        assert_eq!(cursor.peek(), Some(b'x'));

        // Nothing to skip is fine.
        cursor.skip_whitespace();
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn test_other_space_is_not_whitespace() {
        let mut cursor = Cursor::new("\u{000B}\u{000C}1");
        cursor.skip_whitespace();
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_advance_clamps_to_end() {
        let mut cursor = Cursor::new("ab");
        cursor.advance(10);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.rest(), "");
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_nul_terminates_input() {
        let mut cursor = Cursor::new("1\0 garbage");
        assert_eq!(cursor.rest(), "1");
        cursor.advance(1);
        assert!(cursor.is_at_end());
    }
}
