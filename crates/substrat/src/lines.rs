//! Line splitting shared by the scanner and the splicer.

/// Separator used whenever lines are joined back together.
pub const LINE_SEPARATOR: &str = "\n";

/// Split text into lines on `\r\n`, `\r` or `\n`, in any mix.
///
/// A trailing line ending yields a final empty line, and empty text is a
/// single empty line, so the result is never empty.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&text[start..]);
    lines
}

/// Join lines with [`LINE_SEPARATOR`].
pub fn join_lines(lines: &[&str]) -> String {
    lines.join(LINE_SEPARATOR)
}
