//! Helpers for testing generated reference documentation
//!
//! # Documentation Testing Guidelines
//!
//! A generated service page is long, and most of it is irrelevant to any single
//! test. Asserting `contents.contains("...")` against the whole page passes when
//! the text shows up under the wrong method, which is exactly the bug these tests
//! exist to catch.
//!
//! ## Rule 1: Generate into a DocFixture
//!
//! Every test gets its own [DocFixture], a temporary directory laid out like the
//! real output tree. The directory is removed when the fixture is dropped, on
//! both the passing and the panicking path.
//!
//! ```rust-example
//! let fixture = DocFixture::setup();
//! generate_docs(fixture.root());
//! let contents = fixture.get_nested_file_contents("s3", "client", "put_object")?;
//! ```
//!
//! ## Rule 2: Narrow to a block before asserting
//!
//! Cut the page down to the fragment under test, then assert on that:
//!
//! ```rust-example
//! let method = get_method_document_block("put_object", &contents);
//! let param = get_request_parameter_document_block("Bucket", method);
//! assert!(param.contains("**[REQUIRED]**"));
//! ```
//!
//! Blocks are plain `&str` slices of the page, so they nest: a parameter block can
//! be cut from a method block, which can be cut from a class block.
//!
//! ## Rule 3: Check ordering, not just presence
//!
//! [assert_contains_lines_in_order] verifies each line appears after the previous
//! one. Use it for syntax sections where field order matters.
//!
//! ## Block markers
//!
//! | Block               | Starts at                      | Ends before              |
//! |---------------------|--------------------------------|--------------------------|
//! | class               | `.. py:class:: <name>`         | `  .. py:class::`        |
//! | method              | `  .. py:method:: <name>(`     | `  .. py:method::`       |
//! | request syntax      | `**Request Syntax**`           | `:type`                  |
//! | response syntax     | `**Response Syntax**`          | `**Response Structure**` |
//! | request parameter   | `:type <name>:`                | `:type`                  |
//! | response parameter  | `- **<name>**`                 | `- **`                   |
//!
//! When no end marker follows, the block runs to the end of the document.
//!
//! Each block has a fallible `find_*` form returning [BlockError] and a
//! panicking `get_*_document_block` form for use directly in tests.

mod blocks;
mod fixture;
pub mod markers;
mod ordering;
mod text_diff;

pub use blocks::{
    extract_block, extract_block_span, find_class_block, find_method_block,
    find_request_parameter_block, find_request_syntax_block, find_response_parameter_block,
    find_response_syntax_block, get_class_document_block, get_method_document_block,
    get_request_parameter_document_block, get_request_syntax_document_block,
    get_response_parameter_document_block, get_response_syntax_document_block, BlockSpan,
};
pub use fixture::DocFixture;
pub use markers::BlockKind;
pub use ordering::{assert_contains_lines_in_order, find_lines_in_order};
pub use text_diff::{assert_block_eq, diff_block};

pub use crate::refdoc::error::{BlockError, FixtureError, LineOrderError};

