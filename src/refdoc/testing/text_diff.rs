//! Line diffs for block comparisons
//!
//! A failed `assert_eq!` on two multi-line blocks prints both strings escaped on
//! one line each, which is unreadable for documentation fragments. These helpers
//! render a unified diff instead.

use similar::TextDiff;

/// Compare an extracted block with the expected text.
///
/// Returns `None` when they are equal, or a unified diff (`expected` as the old
/// side, `actual` as the new side) when they differ.
pub fn diff_block(expected: &str, actual: &str) -> Option<String> {
    if expected == actual {
        return None;
    }

    let report = TextDiff::from_lines(expected, actual)
        .unified_diff()
        .context_radius(3)
        .header("expected", "actual")
        .to_string();
    Some(report)
}

/// Assert that a block matches the expected text, with a line diff on failure
///
/// # Panics
///
/// Panics if the strings differ. The message contains the unified diff.
#[track_caller]
pub fn assert_block_eq(expected: &str, actual: &str) {
    if let Some(report) = diff_block(expected, actual) {
        panic!("\n\nBlock comparison failed:\n{}", report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_block_eq_identical() {
        assert_block_eq("  .. py:method:: a(\n", "  .. py:method:: a(\n");
    }

    #[test]
    fn test_assert_block_eq_empty() {
        assert_block_eq("", "");
    }

    #[test]
    #[should_panic(expected = "Block comparison failed")]
    fn test_assert_block_eq_different() {
        assert_block_eq("hello\nworld\n", "hello\nplanet\n");
    }

    #[test]
    fn test_diff_block_identical() {
        assert_eq!(diff_block("hello\nworld\n", "hello\nworld\n"), None);
    }

    #[test]
    fn test_diff_block_marks_changed_lines() {
        let diff = diff_block("hello\nworld\n", "hello\nplanet\n").unwrap();
        assert!(diff.contains("--- expected"));
        assert!(diff.contains("+++ actual"));
        assert!(diff.contains("-world"));
        assert!(diff.contains("+planet"));
        assert!(diff.contains(" hello"));
    }
}
