//! Paragraph collection.

use crate::parser::scanner::{Anchor, Scanner};

use super::utils::is_blank_line;

/// Collects a paragraph whose first line has just been read from `scanner`.
///
/// Subsequent non-blank lines are absorbed until a blank line or the end of
/// input. Returns the contiguous source span of all absorbed lines with
/// surrounding ASCII whitespace trimmed. The terminating blank line, if any,
/// is consumed.
pub(crate) fn collect_paragraph<'a>(scanner: &mut Scanner<'a>, first_line: &'a str) -> &'a str {
    let start = scanner.position(Anchor::Flush);
    let mut end = start + first_line.len();
    let mut line_count = 1;

    while let Some(line) = scanner.next_line() {
        if is_blank_line(line) {
            break;
        }
        end = scanner.position(Anchor::Flush) + line.len();
        line_count += 1;
    }

    let text = scanner.data()[start..end].trim_ascii();
    log::trace!("Paragraph spans {} line(s): {:?}", line_count, text);
    text
}
