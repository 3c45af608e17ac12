//! Collection stage - split block text into tokens and delimiter runs.

use super::emphasis::{DelimiterKind, DelimiterStack, analyze_delimiter_run};
use super::tokens::{Token, TokenBuffer, TokenKind};
use crate::parser::scanner::{Anchor, Scanner};

/// Tokenize `text` without resolving emphasis.
///
/// Line breaks become soft breaks. Every `*`/`_` run that can open or close
/// becomes a [`TokenKind::DelimiterRun`] token with a matching entry pushed
/// onto `stack`; other runs stay inside the surrounding text.
pub fn collect_tokens<'a>(text: &'a str, stack: &mut DelimiterStack) -> TokenBuffer<'a> {
    log::trace!("Collecting tokens from {} bytes", text.len());

    let mut scanner = Scanner::new(text);
    let mut tokens = TokenBuffer::new();

    while let Some(byte) = scanner.next_byte() {
        if byte == b'\n' {
            push_pending_text(&scanner, &mut tokens, 1);
            if let Some(newline) = scanner.scan(Anchor::Cursor, -1, 1) {
                tokens.push(Token::new(TokenKind::Softbreak, newline));
            }
            scanner.flush();
            continue;
        }

        let Some(kind) = DelimiterKind::from_byte(byte) else {
            continue;
        };
        let Some(run) = scanner.look_ahead(Anchor::Cursor, -1) else {
            continue;
        };

        let prev = scanner.at(Anchor::Cursor, -2).unwrap_or(b' ');
        let next = run.next.unwrap_or(b' ');
        scanner.skip_bytes(run.len - 1);

        let Some(class) = analyze_delimiter_run(kind, prev, next) else {
            log::trace!("Run of {} {:?} stays literal", run.len, kind);
            continue;
        };

        push_pending_text(&scanner, &mut tokens, run.len);
        if let Some(delims) = scanner.scan(Anchor::Cursor, -(run.len as isize), run.len) {
            let idx = tokens.push(Token::new(TokenKind::DelimiterRun, delims));
            stack.push(kind, run.len, class, idx);
        }
        scanner.flush();
    }

    push_pending_text(&scanner, &mut tokens, 0);
    tokens
}

/// Pushes the text between the flush point and `excluded` bytes before the cursor.
fn push_pending_text<'a>(scanner: &Scanner<'a>, tokens: &mut TokenBuffer<'a>, excluded: usize) {
    let start = scanner.position(Anchor::Flush);
    let end = scanner.position(Anchor::Cursor).saturating_sub(excluded);
    if end > start
        && let Some(pending) = scanner.scan(Anchor::Flush, 0, end - start)
    {
        tokens.push(Token::text(pending));
    }
}
