/// A line is blank when it is empty or holds only spaces and tabs.
pub(crate) fn is_blank_line(line: &str) -> bool {
    line.bytes().all(|b| b == b' ' || b == b'\t')
}
