//! # refdoc
//!
//! Test helpers for generated reference documentation.
//!
//! A documentation generator writes one reStructuredText file per service page.
//! Asserting against a whole page is brittle, so these helpers cut a page into
//! blocks (one class, one method, a request or response syntax section, a single
//! parameter) and let tests assert against the isolated fragment instead.
//!
//! Layout
//!
//! src/refdoc
//!   ├── config     Layout and fixture defaults, layered with the `config` crate
//!   ├── error      Error types shared by the helpers
//!   └── testing    Fixture directory, block extraction and ordered-line checks
//!
//! For how to write documentation tests, see the [testing module](refdoc::testing).

pub mod refdoc;
