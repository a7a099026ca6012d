#![forbid(unsafe_code)]

//! Trellis: centered grid layouts for vector-graphics drawing.
//!
//! This crate re-exports the public surface of the Trellis workspace:
//! - [`Point`] — the 2D coordinate contract (`trellis-geometry`)
//! - [`Table`] — the grid layout component (`trellis-grid`)
//!
//! A [`Table`] takes per-row heights and per-column widths (ragged sizing is
//! fine), centers the grid on a point in your drawing space, and maps cell
//! numbers to center coordinates. Feed each produced point to whatever
//! shape-drawing primitive your rendering backend provides; Trellis itself
//! never draws.
//!
//! # Example
//!
//! ```
//! use trellis::{Point, Table};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Four rows of three 80x30 cells, centered on the origin.
//! let table = Table::with_cell_size(4, 3, 80.0, 30.0, Point::ORIGIN)?;
//! assert_eq!(table.len(), 12);
//!
//! // Row-major traversal with 1-based cell numbers.
//! for (center, index) in &table {
//!     let _ = (center, index); // e.g. draw_circle(center, 5.0)
//! }
//!
//! // Random access by cell number or (row, col).
//! let sixth = table.cell(6)?;
//! assert_eq!(sixth, table.cell_at(2, 3)?);
//!
//! // Ragged sizing with labeled cells.
//! let chart = Table::builder()
//!     .row_heights([60.0, 40.0, 100.0])
//!     .col_widths([100.0, 60.0, 40.0])
//!     .center((0.0, 0.0))
//!     .label("header", 1)
//!     .build()?;
//! let (header, _) = chart.label("header").unwrap();
//! assert_eq!(header, chart.cell(1)?);
//! # Ok(())
//! # }
//! ```

pub use trellis_geometry::Point;
pub use trellis_grid::{Cells, DEFAULT_CELL_SIZE, IndexOutOfRange, Table, TableBuilder, TableError};
