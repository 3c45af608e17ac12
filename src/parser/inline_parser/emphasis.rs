//! Emphasis resolution using the CommonMark delimiter stack algorithm.
//!
//! The collector pushes one [`Delimiter`] per `*`/`_` run that can open or
//! close. [`DelimiterStack::process_emphasis`] then pairs closers with the
//! nearest compatible opener, left to right, rewriting the annotated tokens
//! into emphasis markers.
//!
//! Key rules:
//! - Delimiters match by character (`*` with `*`, `_` with `_`).
//! - Strong (2 delimiters) takes precedence over emphasis (1 delimiter)
//!   when both sides have at least two left.
//! - "Rule of 3s": if either side can both open and close, the original
//!   run lengths must not sum to a multiple of 3 unless both are multiples
//!   of 3 (prevents `*foo**bar*` from closing at `**`).
//!
//! Items live in an arena with `prev`/`next` links and two sentinels, so
//! unlinking is O(1) and never invalidates indices held by the walk.

use super::tokens::{TokenBuffer, TokenKind};

/// Delimiter character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterKind {
    Asterisk,
    Underscore,
}

impl DelimiterKind {
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'*' => Some(DelimiterKind::Asterisk),
            b'_' => Some(DelimiterKind::Underscore),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            DelimiterKind::Asterisk => 0,
            DelimiterKind::Underscore => 1,
        }
    }
}

/// What a delimiter run may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterClass {
    Open,
    Close,
    Both,
}

impl DelimiterClass {
    /// `None` for runs that can neither open nor close.
    pub fn from_flanking(can_open: bool, can_close: bool) -> Option<Self> {
        match (can_open, can_close) {
            (true, true) => Some(DelimiterClass::Both),
            (true, false) => Some(DelimiterClass::Open),
            (false, true) => Some(DelimiterClass::Close),
            (false, false) => None,
        }
    }

    pub fn can_open(self) -> bool {
        matches!(self, DelimiterClass::Open | DelimiterClass::Both)
    }

    pub fn can_close(self) -> bool {
        matches!(self, DelimiterClass::Close | DelimiterClass::Both)
    }
}

fn is_whitespace(byte: u8) -> bool {
    byte.is_ascii_whitespace()
}

fn is_punctuation(byte: u8) -> bool {
    byte.is_ascii_punctuation()
}

/// Determine if a delimiter run can open/close emphasis based on flanking rules.
///
/// `prev` and `next` are the bytes around the run; buffer boundaries are
/// passed in as a space.
pub fn analyze_delimiter_run(kind: DelimiterKind, prev: u8, next: u8) -> Option<DelimiterClass> {
    let followed_by_whitespace = is_whitespace(next);
    let followed_by_punctuation = is_punctuation(next);
    let preceded_by_whitespace = is_whitespace(prev);
    let preceded_by_punctuation = is_punctuation(prev);

    let left_flanking = !followed_by_whitespace
        && (!followed_by_punctuation || preceded_by_whitespace || preceded_by_punctuation);

    let right_flanking = !preceded_by_whitespace
        && (!preceded_by_punctuation || followed_by_whitespace || followed_by_punctuation);

    let (can_open, can_close) = match kind {
        DelimiterKind::Asterisk => (left_flanking, right_flanking),
        DelimiterKind::Underscore => (
            left_flanking && (!right_flanking || preceded_by_punctuation),
            right_flanking && (!left_flanking || followed_by_punctuation),
        ),
    };
    DelimiterClass::from_flanking(can_open, can_close)
}

/// A delimiter run in the stack.
#[derive(Debug, Clone)]
struct Delimiter {
    kind: DelimiterKind,
    original_len: usize, // for rule of 3s
    remaining: usize,
    class: DelimiterClass,
    active: bool, // false once unlinked
    token: usize,
    prev: usize,
    next: usize,
}

impl Delimiter {
    fn sentinel(prev: usize, next: usize) -> Self {
        Self {
            kind: DelimiterKind::Asterisk,
            original_len: 0,
            remaining: 0,
            class: DelimiterClass::Open,
            active: false,
            token: usize::MAX,
            prev,
            next,
        }
    }

    /// Rule of 3s.
    fn is_compatible(&self, closer: &Delimiter) -> bool {
        let either_both =
            self.class == DelimiterClass::Both || closer.class == DelimiterClass::Both;
        if !either_both {
            return true;
        }
        let sum = self.original_len + closer.original_len;
        !sum.is_multiple_of(3)
            || (self.original_len.is_multiple_of(3) && closer.original_len.is_multiple_of(3))
    }

    /// Slot in the openers-bottom table: kind, whether the closer can also
    /// open, and its original length modulo 3.
    fn bottom_key(&self) -> (usize, usize, usize) {
        (
            self.kind.index(),
            usize::from(self.class.can_open()),
            self.original_len % 3,
        )
    }
}

const HEAD: usize = 0;
const TAIL: usize = 1;

/// Arena-backed doubly-linked list of delimiter runs for one block.
#[derive(Debug, Clone)]
pub struct DelimiterStack {
    items: Vec<Delimiter>,
}

impl Default for DelimiterStack {
    fn default() -> Self {
        Self::new()
    }
}

impl DelimiterStack {
    pub fn new() -> Self {
        Self {
            items: vec![Delimiter::sentinel(HEAD, TAIL), Delimiter::sentinel(HEAD, TAIL)],
        }
    }

    /// Number of runs still linked.
    pub fn len(&self) -> usize {
        self.iter_linked().count()
    }

    pub fn is_empty(&self) -> bool {
        self.items[HEAD].next == TAIL
    }

    /// Appends a run annotating token `token`.
    pub fn push(&mut self, kind: DelimiterKind, len: usize, class: DelimiterClass, token: usize) {
        let idx = self.items.len();
        let last = self.items[TAIL].prev;
        self.items.push(Delimiter {
            kind,
            original_len: len,
            remaining: len,
            class,
            active: true,
            token,
            prev: last,
            next: TAIL,
        });
        self.items[last].next = idx;
        self.items[TAIL].prev = idx;
        log::trace!("Pushed {:?} run of {} ({:?}) at token {}", kind, len, class, token);
    }

    /// Pairs openers with closers and rewrites `tokens` accordingly.
    ///
    /// Every run left over afterwards becomes literal text and the stack is
    /// cleared for the next block.
    pub fn process_emphasis(&mut self, tokens: &mut TokenBuffer<'_>) {
        let mut openers_bottom = [[[HEAD; 3]; 2]; 2];
        let mut matches = 0;

        let mut cur = self.items[HEAD].next;
        while cur != TAIL {
            if !self.items[cur].class.can_close() {
                cur = self.items[cur].next;
                continue;
            }

            let (kind, can_open, modulo) = self.items[cur].bottom_key();
            let bottom = openers_bottom[kind][can_open][modulo];

            match self.find_opener(cur, bottom) {
                Some(opener) => {
                    matches += 1;
                    if self.match_pair(opener, cur, tokens) {
                        cur = self.items[cur].next;
                    }
                    // Otherwise the closer has delimiters left; process it again.
                }
                None => {
                    openers_bottom[kind][can_open][modulo] = self.items[cur].prev;
                    let next = self.items[cur].next;
                    if !self.items[cur].class.can_open() {
                        self.discard(cur, tokens);
                    }
                    cur = next;
                }
            }
        }

        log::debug!("Resolved {} emphasis pair(s)", matches);
        self.finish(tokens);
    }

    /// Look backwards from `closer` for a matching opener, stopping at `bottom`.
    fn find_opener(&self, closer: usize, bottom: usize) -> Option<usize> {
        let target = &self.items[closer];
        let mut idx = target.prev;
        while idx != bottom && idx != HEAD {
            let opener = &self.items[idx];
            if opener.kind == target.kind && opener.class.can_open() {
                if opener.is_compatible(target) {
                    return Some(idx);
                }
                log::trace!("Rule of 3s rejects opener {} for closer {}", idx, closer);
            }
            idx = opener.prev;
        }
        None
    }

    /// Consumes delimiters from a matched pair. Returns true once the closer
    /// is exhausted.
    fn match_pair(&mut self, opener: usize, closer: usize, tokens: &mut TokenBuffer<'_>) -> bool {
        // Runs between the pair can no longer match anything.
        let mut idx = self.items[opener].next;
        while idx != closer {
            let next = self.items[idx].next;
            self.discard(idx, tokens);
            idx = next;
        }

        let used = if self.items[opener].remaining >= 2 && self.items[closer].remaining >= 2 {
            2
        } else {
            1
        };
        let (open_kind, close_kind) = if used == 2 {
            (TokenKind::StrongOpen, TokenKind::StrongClose)
        } else {
            (TokenKind::EmphOpen, TokenKind::EmphClose)
        };
        log::trace!("Matched opener {} with closer {} using {}", opener, closer, used);

        self.items[opener].remaining -= used;
        let opener_token = self.items[opener].token;
        if self.items[opener].remaining == 0 {
            tokens.retype(opener_token, open_kind, used);
            self.unlink(opener);
        } else if let Some(marker) = tokens.marker(opener_token, open_kind, used) {
            tokens.insert_after(opener_token, marker);
        }

        self.items[closer].remaining -= used;
        let closer_token = self.items[closer].token;
        if self.items[closer].remaining == 0 {
            tokens.retype(closer_token, close_kind, used);
            self.unlink(closer);
            true
        } else {
            if let Some(marker) = tokens.marker(closer_token, close_kind, used) {
                tokens.insert_before(closer_token, marker);
            }
            false
        }
    }

    /// Demotes a run to literal text and unlinks it.
    fn discard(&mut self, idx: usize, tokens: &mut TokenBuffer<'_>) {
        let item = &self.items[idx];
        tokens.demote(item.token, item.remaining);
        self.unlink(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.items[idx].prev, self.items[idx].next);
        self.items[prev].next = next;
        self.items[next].prev = prev;
        self.items[idx].active = false;
    }

    fn finish(&mut self, tokens: &mut TokenBuffer<'_>) {
        let leftovers: Vec<usize> = self.iter_linked().collect();
        for idx in leftovers {
            self.discard(idx, tokens);
        }
        debug_assert!(self.items.iter().skip(2).all(|item| !item.active));
        self.clear();
    }

    /// Drops every run, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.truncate(2);
        self.items[HEAD].next = TAIL;
        self.items[TAIL].prev = HEAD;
    }

    fn iter_linked(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(self.items[HEAD].next), move |&idx| {
            Some(self.items[idx].next)
        })
        .take_while(|&idx| idx != TAIL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::inline_parser::tokens::Token;

    fn run(kind: DelimiterKind, prev: u8, next: u8) -> Option<DelimiterClass> {
        analyze_delimiter_run(kind, prev, next)
    }

    #[test]
    fn test_asterisk_flanking() {
        use DelimiterKind::Asterisk;
        assert_eq!(run(Asterisk, b' ', b'a'), Some(DelimiterClass::Open));
        assert_eq!(run(Asterisk, b'a', b' '), Some(DelimiterClass::Close));
        assert_eq!(run(Asterisk, b'a', b'b'), Some(DelimiterClass::Both));
        assert_eq!(run(Asterisk, b' ', b' '), None);
        // Punctuation after the run requires whitespace or punctuation before.
        assert_eq!(run(Asterisk, b'a', b'"'), Some(DelimiterClass::Close));
        assert_eq!(run(Asterisk, b' ', b'"'), Some(DelimiterClass::Open));
    }

    #[test]
    fn test_underscore_flanking() {
        use DelimiterKind::Underscore;
        assert_eq!(run(Underscore, b' ', b'a'), Some(DelimiterClass::Open));
        assert_eq!(run(Underscore, b'a', b' '), Some(DelimiterClass::Close));
        // Intraword underscores neither open nor close.
        assert_eq!(run(Underscore, b'a', b'b'), None);
        assert_eq!(run(Underscore, b'(', b'a'), Some(DelimiterClass::Open));
        assert_eq!(run(Underscore, b'.', b'.'), None);
    }

    /// Builds a token buffer from `(text, delimiter)` pieces and runs the algorithm.
    fn resolve<'a>(pieces: &[(&'a str, Option<DelimiterClass>)]) -> Vec<Token<'a>> {
        let mut stack = DelimiterStack::new();
        let mut tokens = TokenBuffer::new();
        for &(text, class) in pieces {
            match class {
                Some(class) => {
                    let idx = tokens.push(Token::new(TokenKind::DelimiterRun, text));
                    let kind = DelimiterKind::from_byte(text.as_bytes()[0]).unwrap();
                    stack.push(kind, text.len(), class, idx);
                }
                None => {
                    tokens.push(Token::text(text));
                }
            }
        }
        stack.process_emphasis(&mut tokens);
        assert!(stack.is_empty());
        tokens.into_tokens()
    }

    fn render(tokens: &[Token<'_>]) -> String {
        tokens
            .iter()
            .map(|t| match t.kind {
                TokenKind::EmphOpen => "<em>".to_string(),
                TokenKind::EmphClose => "</em>".to_string(),
                TokenKind::StrongOpen => "<strong>".to_string(),
                TokenKind::StrongClose => "</strong>".to_string(),
                _ => t.text.to_string(),
            })
            .collect()
    }

    const OPEN: Option<DelimiterClass> = Some(DelimiterClass::Open);
    const CLOSE: Option<DelimiterClass> = Some(DelimiterClass::Close);
    const BOTH: Option<DelimiterClass> = Some(DelimiterClass::Both);

    #[test]
    fn test_simple_emphasis() {
        let tokens = resolve(&[("*", OPEN), ("a", None), ("*", CLOSE)]);
        assert_eq!(render(&tokens), "<em>a</em>");
    }

    #[test]
    fn test_simple_strong() {
        let tokens = resolve(&[("**", OPEN), ("a", None), ("**", CLOSE)]);
        assert_eq!(render(&tokens), "<strong>a</strong>");
    }

    #[test]
    fn test_triple_is_emph_around_strong() {
        let tokens = resolve(&[("***", OPEN), ("a", None), ("***", CLOSE)]);
        assert_eq!(render(&tokens), "<em><strong>a</strong></em>");
    }

    #[test]
    fn test_unbalanced_opener_keeps_literal() {
        let tokens = resolve(&[("**", OPEN), ("a", None), ("*", CLOSE)]);
        assert_eq!(render(&tokens), "*<em>a</em>");
    }

    #[test]
    fn test_unbalanced_closer_keeps_literal() {
        let tokens = resolve(&[("*", OPEN), ("a", None), ("**", CLOSE)]);
        assert_eq!(render(&tokens), "<em>a</em>*");
    }

    #[test]
    fn test_rule_of_three() {
        let tokens = resolve(&[
            ("*", OPEN),
            ("foo", None),
            ("**", BOTH),
            ("bar", None),
            ("*", CLOSE),
        ]);
        assert_eq!(render(&tokens), "<em>foo**bar</em>");
    }

    #[test]
    fn test_mismatched_kinds_do_not_pair() {
        let tokens = resolve(&[("*", OPEN), ("a", None), ("_", CLOSE)]);
        assert_eq!(render(&tokens), "*a_");
    }

    #[test]
    fn test_nested_strong_in_emph() {
        let tokens = resolve(&[
            ("*", OPEN),
            ("a ", None),
            ("**", OPEN),
            ("b", None),
            ("**", CLOSE),
            (" c", None),
            ("*", CLOSE),
        ]);
        assert_eq!(render(&tokens), "<em>a <strong>b</strong> c</em>");
    }

    #[test]
    fn test_runs_between_pair_become_text() {
        let tokens = resolve(&[
            ("*", OPEN),
            ("a", None),
            ("_", OPEN),
            ("b", None),
            ("*", CLOSE),
        ]);
        assert_eq!(render(&tokens), "<em>a_b</em>");
    }

    #[test]
    fn test_stack_reusable_after_clear() {
        let mut stack = DelimiterStack::new();
        let mut tokens = TokenBuffer::new();
        let idx = tokens.push(Token::new(TokenKind::DelimiterRun, "*"));
        stack.push(DelimiterKind::Asterisk, 1, DelimiterClass::Open, idx);
        assert_eq!(stack.len(), 1);
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }
}
