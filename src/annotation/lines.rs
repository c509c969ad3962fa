//! Line splitting that keeps byte offsets into the original content.

use std::ops::Range;

/// One physical line of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// Zero-based line index.
    pub index: usize,
    /// Line text without its terminator (`\n` or `\r\n`).
    pub text: &'a str,
    /// Byte range of `text` within the content.
    pub range: Range<usize>,
    /// Byte range of the line including its terminator, if any.
    pub full_range: Range<usize>,
}

/// Splits content into lines, recording where each line sits in the content.
///
/// A trailing terminator does not produce an extra empty line.
///
/// ```
/// use todoly::annotation::lines;
///
/// let all: Vec<_> = lines("a\r\nb\n").collect();
/// assert_eq!(all[0].text, "a");
/// assert_eq!(all[0].full_range, 0..3);
/// assert_eq!(all[1].text, "b");
/// assert_eq!(all.len(), 2);
/// ```
pub fn lines(content: &str) -> impl Iterator<Item = Line<'_>> {
    let mut offset = 0;
    content
        .split_inclusive('\n')
        .enumerate()
        .map(move |(index, raw)| {
            let start = offset;
            offset += raw.len();

            let text = raw
                .strip_suffix('\n')
                .map(|t| t.strip_suffix('\r').unwrap_or(t))
                .unwrap_or(raw);

            Line {
                index,
                text,
                range: start..start + text.len(),
                full_range: start..offset,
            }
        })
}
