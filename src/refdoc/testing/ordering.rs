//! Ordered line containment
//!
//! Each expected line is searched only in the text after the previous line's
//! match, so a later line can never be satisfied by text that precedes an
//! earlier one. Lines need not be contiguous.

use tracing::trace;

use crate::refdoc::error::LineOrderError;

/// Find each of `lines` in `contents`, in order.
///
/// Returns the byte offset of every match. Fails on the first line that does
/// not occur in the text remaining after the previous match.
pub fn find_lines_in_order<S: AsRef<str>>(
    lines: &[S],
    contents: &str,
) -> Result<Vec<usize>, LineOrderError> {
    let mut cursor = 0;
    let mut positions = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let offset = contents[cursor..]
            .find(line)
            .ok_or(LineOrderError { index })?;
        positions.push(cursor + offset);
        cursor += offset + line.len();
    }

    trace!(count = lines.len(), "lines found in order");
    Ok(positions)
}

/// Assert that `lines` occur in `contents` in the given relative order.
///
/// # Panics
///
/// Panics with `Lines are not found in order in contents` as soon as one line
/// is missing from the remaining text.
#[track_caller]
pub fn assert_contains_lines_in_order<S: AsRef<str>>(lines: &[S], contents: &str) {
    if let Err(err) = find_lines_in_order(lines, contents) {
        panic!("{}", err);
    }
}
