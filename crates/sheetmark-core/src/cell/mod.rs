//! Cell-related types
//!
//! This module contains:
//! - [`CellCoordinate`] - A cell's location (e.g., "A1")
//! - [`MergeSpan`] - A rectangular merged range (e.g., "A1:B2")
//! - [`CellRecord`] - One parsed `<c>` element with its typed value

mod coordinate;
mod record;

pub use coordinate::{CellCoordinate, MergeSpan};
pub use record::{CellKind, CellRecord, CellValue};
