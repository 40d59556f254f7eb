//! Reference documentation test support
//!
//! The [testing] module is the entry point for tests; [config] controls where a
//! fixture looks for generated files and [error] collects the failure types.

pub mod config;
pub mod error;
pub mod testing;
