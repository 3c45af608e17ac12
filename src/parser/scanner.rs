//! Byte cursor shared by the block and inline phases.
//!
//! The scanner has two access modes. Sequential calls (`next_byte`,
//! `next_line`, `skip_bytes`) move the cursor. Random-access calls (`at`,
//! `scan`, `look_ahead`) are read-only and address bytes relative to an
//! [`Anchor`]. A flush point marks where the pending, not yet committed span
//! begins; [`Scanner::current_line`] returns everything between the flush
//! point and the cursor.
//!
//! Out-of-range access never panics. The byte just before the buffer and the
//! byte at its end read as a space, so flanking checks at the edges of a
//! block need no special casing. Anything further out returns `None`.

/// Reference position for random access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Start of the buffer.
    Start,
    /// Last flush point (the start of the current line in the block phase).
    Flush,
    /// Current cursor position.
    Cursor,
    /// End of the buffer.
    End,
}

/// A run of identical bytes found by [`Scanner::look_ahead`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub byte: u8,
    pub len: usize,
    /// Byte following the run, `None` when the run reaches the end.
    pub next: Option<u8>,
}

impl Run {
    pub fn followed_by_space(&self) -> bool {
        self.next == Some(b' ')
    }

    pub fn at_end(&self) -> bool {
        self.next.is_none()
    }
}

const BOUNDARY: u8 = b' ';

#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    data: &'a str,
    flushed: usize,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            data,
            flushed: 0,
            pos: 0,
        }
    }

    pub fn data(&self) -> &'a str {
        self.data
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    pub fn position(&self, anchor: Anchor) -> usize {
        match anchor {
            Anchor::Start => 0,
            Anchor::Flush => self.flushed,
            Anchor::Cursor => self.pos,
            Anchor::End => self.data.len(),
        }
    }

    /// Returns the byte under the cursor and advances past it.
    pub fn next_byte(&mut self) -> Option<u8> {
        let byte = self.data.as_bytes().get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }

    /// The byte just before the cursor, if it lies in the pending span.
    ///
    /// Right after [`Scanner::next_byte`] this is the byte it returned. A
    /// flush empties the pending span, so this is `None` until the cursor
    /// moves again.
    pub fn current_byte(&self) -> Option<u8> {
        if self.pos == self.flushed {
            return None;
        }
        self.pos
            .checked_sub(1)
            .and_then(|idx| self.data.as_bytes().get(idx).copied())
    }

    /// Advances to the next line and returns it without its newline.
    ///
    /// The flush point moves to the start of the returned line. Returns
    /// `None` once the cursor has reached the end of the buffer.
    pub fn next_line(&mut self) -> Option<&'a str> {
        if self.is_at_end() {
            return None;
        }
        self.flushed = self.pos;
        let rest = &self.data[self.pos..];
        let (line, consumed) = match rest.find('\n') {
            Some(idx) => (&rest[..idx], idx + 1),
            None => (rest, rest.len()),
        };
        self.pos += consumed;
        Some(line)
    }

    /// Span between the flush point and the cursor, trailing newlines removed.
    pub fn current_line(&self) -> &'a str {
        let start = self.flushed.min(self.pos);
        self.data[start..self.pos].trim_end_matches('\n')
    }

    /// Commits everything before the cursor.
    pub fn flush(&mut self) {
        self.flushed = self.pos;
    }

    /// Commits `n` bytes past the flush point and moves the cursor there.
    pub fn flush_bytes(&mut self, n: usize) {
        self.flushed = self.flushed.saturating_add(n).min(self.data.len());
        self.pos = self.flushed;
    }

    pub fn skip_bytes(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.data.len());
    }

    /// Single-byte random access relative to `anchor`.
    pub fn at(&self, anchor: Anchor, offset: isize) -> Option<u8> {
        let idx = self.position(anchor) as isize + offset;
        let len = self.data.len() as isize;
        if idx == -1 || idx == len {
            return Some(BOUNDARY);
        }
        if idx < 0 || idx > len {
            return None;
        }
        self.data.as_bytes().get(idx as usize).copied()
    }

    /// Sub-span of `len` bytes starting at `anchor + offset`.
    pub fn scan(&self, anchor: Anchor, offset: isize, len: usize) -> Option<&'a str> {
        let start = self.resolve(anchor, offset)?;
        let end = start.checked_add(len)?;
        self.data.get(start..end)
    }

    /// Measures the run of identical bytes starting at `anchor + offset`.
    pub fn look_ahead(&self, anchor: Anchor, offset: isize) -> Option<Run> {
        let start = self.resolve(anchor, offset)?;
        let bytes = self.data.as_bytes();
        let byte = *bytes.get(start)?;
        let len = bytes[start..].iter().take_while(|&&b| b == byte).count();
        Some(Run {
            byte,
            len,
            next: bytes.get(start + len).copied(),
        })
    }

    fn resolve(&self, anchor: Anchor, offset: isize) -> Option<usize> {
        let idx = self.position(anchor).checked_add_signed(offset)?;
        (idx <= self.data.len()).then_some(idx)
    }
}
