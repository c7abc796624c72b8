// SPDX-License-Identifier: Apache-2.0

/// A read-only position into the document text.
///
/// Borrows the input bytes and tracks how far parsing has advanced. Every
/// sub-parser moves the same cursor forward; input is never copied.
#[derive(Debug)]
pub struct SliceCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceCursor<'a> {
    /// Creates a cursor at the start of the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the byte at the current position without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Advances past the current byte.
    pub fn advance(&mut self) {
        self.pos = self.pos.saturating_add(1);
    }

    /// Advances past the next `n` bytes.
    pub fn advance_by(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n);
    }

    /// Current position, in bytes from the start of the input.
    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// Returns the unconsumed remainder of the input.
    pub fn rest(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or(&[])
    }

    /// True once every input byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Skips zero or more JSON whitespace bytes (space, tab, LF, CR).
    ///
    /// A zero-length skip is valid; this never fails.
    pub fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.advance();
        }
    }
}
