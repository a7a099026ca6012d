#![forbid(unsafe_code)]

//! Grid layout for Trellis: maps cell indices to center points.
//!
//! # Role in Trellis
//! `trellis-grid` is the layout component. A [`Table`] owns per-row heights
//! and per-column widths, centers the grid on a point in the caller's
//! drawing space, and answers "where is cell N" — sequentially, by linear
//! index, by `(row, col)`, or by whole row/column.
//!
//! # Primary responsibilities
//! - **Table**: validated construction from ragged or uniform sizes.
//! - **Cells**: stateless row-major traversal yielding `(center, index)`.
//! - **Checked access**: every out-of-range index fails with
//!   [`IndexOutOfRange`] carrying the offending value and the valid bound.
//!
//! # How it fits in the system
//! Consumers take each produced [`Point`](trellis_geometry::Point) and hand
//! it to the drawing primitives of whatever rendering backend embeds this
//! layout. Nothing here draws, rasterizes, or writes files.

/// Error types for table construction and cell access.
pub mod error;
/// The table layout component and its builder/iterator.
pub mod table;

pub use error::{IndexOutOfRange, TableError};
pub use table::{Cells, DEFAULT_CELL_SIZE, Table, TableBuilder};
