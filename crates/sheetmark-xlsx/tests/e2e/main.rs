//! End-to-end tests for sheetmark-xlsx.
//!
//! Each test zips the exact parts it needs into an archive, writes it to a
//! temporary file, then reads it back with `XlsxReader` and asserts on the
//! parsed model.

mod common;

// Re-export common utilities for submodules
pub use common::*;
