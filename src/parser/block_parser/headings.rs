//! ATX heading recognition.

use crate::parser::scanner::{Anchor, Scanner};
use crate::syntax::HeadingLevel;

/// Try to parse an ATX heading from a single line.
///
/// Returns the level and the heading text with surrounding spaces and tabs
/// removed. Indentation before the marker is allowed.
pub(crate) fn try_parse_atx_heading(line: &str) -> Option<(HeadingLevel, &str)> {
    let indent = line.len() - line.trim_start_matches([' ', '\t']).len();

    let scanner = Scanner::new(line);
    let run = scanner.look_ahead(Anchor::Start, indent as isize)?;
    if run.byte != b'#' {
        return None;
    }
    let level = HeadingLevel::from_marker_len(run.len)?;

    // After hashes, must be end of line, space, or tab
    if !matches!(run.next, None | Some(b' ' | b'\t')) {
        return None;
    }

    let text = line[indent + run.len..].trim_matches([' ', '\t']);
    Some((level, text))
}
