//! Block extraction over generated documentation text
//!
//! Every block is cut the same way: find the start marker, then find the nearest
//! end marker searched from just past the start marker's own text (so a block
//! whose start and end markers share a prefix does not end on itself), and
//! slice between the two. Without an end marker the block runs to the end of
//! the document.
//!
//! The `find_*` functions return [BlockError] when the start marker is missing.
//! The `get_*_document_block` functions are their test-facing counterparts and
//! panic with the error's message instead.

use serde::Serialize;
use std::ops::Range;
use tracing::trace;

use super::markers::BlockKind;
use crate::refdoc::error::BlockError;

/// Byte range of a block within the document it was cut from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockSpan {
    pub start: usize,
    pub end: usize,
}

impl BlockSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice `contents` to this span. `contents` must be the document the span
    /// was computed from.
    pub fn slice<'a>(&self, contents: &'a str) -> &'a str {
        &contents[self.range()]
    }
}

/// Locate the block of `kind` within `contents`.
pub fn extract_block_span(kind: &BlockKind<'_>, contents: &str) -> Result<BlockSpan, BlockError> {
    // The parameter itself is still searched from the top of the document,
    // not from where the required section starts.
    if let Some(section) = kind.required_section() {
        if !contents.contains(section) {
            return Err(BlockError::MissingResponseStructure);
        }
    }

    let start_marker = kind.start_marker();
    let start = contents
        .find(&start_marker)
        .ok_or_else(|| missing_start(kind))?;

    let body_start = start + start_marker.len();
    let end = contents[body_start..]
        .find(kind.end_marker())
        .map_or(contents.len(), |offset| body_start + offset);

    trace!(
        kind = kind.label(),
        name = kind.name(),
        start,
        end,
        "extracted documentation block"
    );
    Ok(BlockSpan { start, end })
}

/// Cut the block of `kind` out of `contents`.
pub fn extract_block<'a>(kind: &BlockKind<'_>, contents: &'a str) -> Result<&'a str, BlockError> {
    extract_block_span(kind, contents).map(|span| span.slice(contents))
}

fn missing_start(kind: &BlockKind<'_>) -> BlockError {
    match *kind {
        BlockKind::Class(name) => BlockError::ClassNotFound {
            class_name: name.to_string(),
        },
        BlockKind::Method(name) => BlockError::MethodNotFound {
            method_name: name.to_string(),
        },
        BlockKind::RequestSyntax => BlockError::MissingRequestSyntax,
        BlockKind::ResponseSyntax => BlockError::MissingResponseSyntax,
        BlockKind::RequestParameter(name) | BlockKind::ResponseParameter(name) => {
            BlockError::ParamNotFound {
                param_name: name.to_string(),
            }
        }
    }
}

#[track_caller]
fn must<T>(result: Result<T, BlockError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

// ===== Fallible extractors =====

pub fn find_class_block<'a>(class_name: &str, contents: &'a str) -> Result<&'a str, BlockError> {
    extract_block(&BlockKind::Class(class_name), contents)
}

pub fn find_method_block<'a>(method_name: &str, contents: &'a str) -> Result<&'a str, BlockError> {
    extract_block(&BlockKind::Method(method_name), contents)
}

pub fn find_request_syntax_block(contents: &str) -> Result<&str, BlockError> {
    extract_block(&BlockKind::RequestSyntax, contents)
}

pub fn find_response_syntax_block(contents: &str) -> Result<&str, BlockError> {
    extract_block(&BlockKind::ResponseSyntax, contents)
}

pub fn find_request_parameter_block<'a>(
    param_name: &str,
    contents: &'a str,
) -> Result<&'a str, BlockError> {
    extract_block(&BlockKind::RequestParameter(param_name), contents)
}

/// Requires a `**Response Structure**` section somewhere in `contents`, then
/// finds `- **<param_name>**` searching from the start of `contents`.
pub fn find_response_parameter_block<'a>(
    param_name: &str,
    contents: &'a str,
) -> Result<&'a str, BlockError> {
    extract_block(&BlockKind::ResponseParameter(param_name), contents)
}

// ===== Test-facing extractors =====

/// Documentation for one class, up to the next nested class directive.
///
/// # Panics
///
/// Panics with `Class is not found in contents` if the class directive is missing.
#[track_caller]
pub fn get_class_document_block<'a>(class_name: &str, contents: &'a str) -> &'a str {
    must(find_class_block(class_name, contents))
}

/// Documentation for one method, up to the next method directive.
///
/// # Panics
///
/// Panics with `Method is not found in contents` if the method directive is missing.
#[track_caller]
pub fn get_method_document_block<'a>(method_name: &str, contents: &'a str) -> &'a str {
    must(find_method_block(method_name, contents))
}

/// # Panics
///
/// Panics with `There is no request syntax section`.
#[track_caller]
pub fn get_request_syntax_document_block(contents: &str) -> &str {
    must(find_request_syntax_block(contents))
}

/// # Panics
///
/// Panics with `There is no response syntax section`.
#[track_caller]
pub fn get_response_syntax_document_block(contents: &str) -> &str {
    must(find_response_syntax_block(contents))
}

/// # Panics
///
/// Panics with `Param is not found in contents`.
#[track_caller]
pub fn get_request_parameter_document_block<'a>(param_name: &str, contents: &'a str) -> &'a str {
    must(find_request_parameter_block(param_name, contents))
}

/// # Panics
///
/// Panics with `There is no response structure` when the document has no
/// response structure section, and `Param is not found in contents` when the
/// parameter bullet is missing.
#[track_caller]
pub fn get_response_parameter_document_block<'a>(param_name: &str, contents: &'a str) -> &'a str {
    must(find_response_parameter_block(param_name, contents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_syntax_stops_before_first_type() {
        let doc = "**Request Syntax**\n  Foo()\n:type x:";
        assert_eq!(
            get_request_syntax_document_block(doc),
            "**Request Syntax**\n  Foo()\n"
        );
    }

    #[test]
    fn test_class_block_stops_at_next_class() {
        let doc = ".. py:class:: A\n\n  Docs for A.\n\n  .. py:class:: B\n\n  Docs for B.\n";
        assert_eq!(get_class_document_block("A", doc), ".. py:class:: A\n\n  Docs for A.\n\n");
    }

    #[test]
    fn test_last_class_runs_to_end_of_document() {
        let doc = ".. py:class:: A\n\n  Docs for A.\n\n  .. py:class:: B\n\n  Docs for B.\n";
        assert_eq!(get_class_document_block("B", doc), ".. py:class:: B\n\n  Docs for B.\n");
    }

    #[test]
    fn test_end_marker_is_searched_past_start_marker() {
        // The start marker itself begins with the end marker.
        let doc = "  .. py:method:: first(a)\n  body\n";
        assert_eq!(get_method_document_block("first", doc), doc);
    }

    #[test]
    fn test_method_name_requires_open_paren() {
        let doc = "  .. py:method:: get_object_acl(**kwargs)\n";
        assert_eq!(
            find_method_block("get_object", doc),
            Err(BlockError::MethodNotFound {
                method_name: "get_object".to_string()
            })
        );
    }

    #[test]
    fn test_span_matches_slice() {
        let doc = "intro\n**Response Syntax**\n{}\n**Response Structure**\n";
        let span = extract_block_span(&BlockKind::ResponseSyntax, doc).unwrap();
        assert_eq!(span.start, 6);
        assert_eq!(span.slice(doc), "**Response Syntax**\n{}\n");
        assert_eq!(span.len(), span.slice(doc).len());
        assert!(!span.is_empty());
    }

    #[test]
    fn test_response_parameter_searches_from_document_start() {
        // The bullet sits before the response structure section and is still found.
        let doc = "- **Name** early\n- **Other**\n**Response Structure**\n";
        assert_eq!(get_response_parameter_document_block("Name", doc), "- **Name** early\n");
    }

    #[test]
    fn test_response_parameter_requires_response_structure() {
        let doc = "- **Name** (string)\n";
        assert_eq!(
            find_response_parameter_block("Name", doc),
            Err(BlockError::MissingResponseStructure)
        );
    }

    #[test]
    #[should_panic(expected = "Class is not found in contents")]
    fn test_missing_class_panics() {
        get_class_document_block("Missing", ".. py:class:: Present\n");
    }

    #[test]
    #[should_panic(expected = "There is no request syntax section")]
    fn test_missing_request_syntax_panics() {
        get_request_syntax_document_block("no sections here");
    }

    #[test]
    #[should_panic(expected = "There is no response syntax section")]
    fn test_missing_response_syntax_panics() {
        get_response_syntax_document_block("**Response Structure**");
    }

    #[test]
    #[should_panic(expected = "Param is not found in contents")]
    fn test_missing_request_param_panics() {
        get_request_parameter_document_block("Bucket", ":type Key: string\n");
    }

    #[test]
    #[should_panic(expected = "There is no response structure")]
    fn test_missing_response_structure_panics() {
        get_response_parameter_document_block("ETag", "- **ETag** *(string) --*\n");
    }
}
