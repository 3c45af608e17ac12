//! Flat token sequence shared by the collection, emphasis and emission stages.

/// Kind of an inline token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Text,
    Softbreak,
    /// A `*` or `_` run that is still a candidate for emphasis.
    DelimiterRun,
    EmphOpen,
    EmphClose,
    StrongOpen,
    StrongClose,
}

impl TokenKind {
    pub fn is_open_marker(self) -> bool {
        matches!(self, TokenKind::EmphOpen | TokenKind::StrongOpen)
    }

    pub fn is_close_marker(self) -> bool {
        matches!(self, TokenKind::EmphClose | TokenKind::StrongClose)
    }

    /// The close marker pairing with an open marker.
    pub fn closing(self) -> Option<TokenKind> {
        match self {
            TokenKind::EmphOpen => Some(TokenKind::EmphClose),
            TokenKind::StrongOpen => Some(TokenKind::StrongClose),
            _ => None,
        }
    }
}

/// A token viewing a slice of the block text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    pub fn text(text: &'a str) -> Self {
        Self::new(TokenKind::Text, text)
    }
}

#[derive(Debug)]
struct Slot<'a> {
    before: Vec<Token<'a>>,
    token: Token<'a>,
    /// Stored in insertion order, which is the reverse of document order.
    after: Vec<Token<'a>>,
}

/// Token sequence whose indices stay valid while markers are inserted.
///
/// Each collected token owns a slot. Inserted markers are kept beside the
/// slot they were inserted at and only spliced in by
/// [`TokenBuffer::into_tokens`], so indices handed out by `push` never shift.
#[derive(Debug, Default)]
pub struct TokenBuffer<'a> {
    slots: Vec<Slot<'a>>,
}

impl<'a> TokenBuffer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token and returns its stable index.
    pub fn push(&mut self, token: Token<'a>) -> usize {
        self.slots.push(Slot {
            before: Vec::new(),
            token,
            after: Vec::new(),
        });
        self.slots.len() - 1
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token<'a>> {
        self.slots.get(index).map(|slot| &slot.token)
    }

    /// Builds a token of `kind` from the first `len` bytes of token `index`.
    pub fn marker(&self, index: usize, kind: TokenKind, len: usize) -> Option<Token<'a>> {
        self.get(index)
            .map(|token| Token::new(kind, prefix(token.text, len)))
    }

    /// Replaces token `index` by a token of `kind` covering its first `len` bytes.
    pub fn retype(&mut self, index: usize, kind: TokenKind, len: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.token = Token::new(kind, prefix(slot.token.text, len));
        }
    }

    /// Turns token `index` into literal text of at most `len` bytes.
    pub fn demote(&mut self, index: usize, len: usize) {
        self.retype(index, TokenKind::Text, len);
    }

    /// Inserts `token` directly after token `index`, ahead of earlier insertions.
    pub fn insert_after(&mut self, index: usize, token: Token<'a>) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.after.push(token);
        }
    }

    /// Inserts `token` directly before token `index`, behind earlier insertions.
    pub fn insert_before(&mut self, index: usize, token: Token<'a>) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.before.push(token);
        }
    }

    /// Flattens the buffer in document order, dropping empty text.
    pub fn into_tokens(self) -> Vec<Token<'a>> {
        self.slots
            .into_iter()
            .flat_map(|slot| {
                slot.before
                    .into_iter()
                    .chain(std::iter::once(slot.token))
                    .chain(slot.after.into_iter().rev())
            })
            .filter(|token| !(token.kind == TokenKind::Text && token.text.is_empty()))
            .collect()
    }
}

fn prefix(text: &str, len: usize) -> &str {
    text.get(..len).unwrap_or(text)
}
