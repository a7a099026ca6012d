//! Ragged grid layout producing cell center points.
//!
//! A [`Table`] owns a sequence of row heights and a sequence of column
//! widths, centers the whole grid on a point, and maps cell numbers to
//! center coordinates in the caller's drawing space. Rows and columns need
//! not be uniform.
//!
//! Cells are numbered from 1, row-major: cell 1 is the top-left, cell
//! `ncols` ends the first row, and cell `nrows * ncols` is the bottom-right.
//!
//! # Example
//!
//! ```
//! use trellis_geometry::Point;
//! use trellis_grid::Table;
//!
//! # fn main() -> Result<(), trellis_grid::TableError> {
//! // Three ragged rows by three ragged columns, centered on the origin.
//! let table = Table::new([60.0, 40.0, 100.0], [100.0, 60.0, 40.0], Point::ORIGIN)?;
//!
//! assert_eq!(table.shape(), (3, 3));
//! for (center, index) in &table {
//!     // Hand `center` to a drawing primitive; `index` runs 1..=9.
//!     let _ = (center, index);
//! }
//! # Ok(())
//! # }
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use trellis_geometry::Point;

use crate::error::{IndexOutOfRange, TableError};

/// Cell size used when no explicit size is given.
pub const DEFAULT_CELL_SIZE: f64 = 100.0;

/// A grid of cells with per-row heights and per-column widths, centered on a
/// point in drawing space.
///
/// Immutable after construction. Every access path — sequential iteration,
/// linear index, `(row, col)`, whole-row or whole-column selection — reduces
/// to the same center formula, so they always agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Height of each row, top to bottom.
    row_heights: Vec<f64>,
    /// Width of each column, left to right.
    col_widths: Vec<f64>,
    /// Layout origin in the embedding coordinate space.
    center: Point,
    /// Top offset of each row from the grid's top edge (cumulative).
    row_tops: Vec<f64>,
    /// Left offset of each column from the grid's left edge (cumulative).
    col_lefts: Vec<f64>,
    /// Sum of all row heights.
    height: f64,
    /// Sum of all column widths.
    width: f64,
    /// Build-time labels, name to linear cell index.
    labels: FxHashMap<String, usize>,
}

impl Table {
    /// Create a table from explicit row heights and column widths.
    ///
    /// This is the canonical constructor; every convenience form normalizes
    /// to it. Both axes must be non-empty and every size strictly positive,
    /// otherwise the matching [`TableError`] is returned.
    pub fn new<R, C>(row_heights: R, col_widths: C, center: Point) -> Result<Self, TableError>
    where
        R: IntoIterator<Item = f64>,
        C: IntoIterator<Item = f64>,
    {
        Self::from_parts(
            row_heights.into_iter().collect(),
            col_widths.into_iter().collect(),
            center,
            Vec::new(),
        )
    }

    /// Create a table of uniform cells sized [`DEFAULT_CELL_SIZE`] square.
    pub fn uniform(nrows: usize, ncols: usize, center: Point) -> Result<Self, TableError> {
        Self::with_cell_size(nrows, ncols, DEFAULT_CELL_SIZE, DEFAULT_CELL_SIZE, center)
    }

    /// Create a table of uniform cells with an explicit cell size.
    pub fn with_cell_size(
        nrows: usize,
        ncols: usize,
        cell_width: f64,
        cell_height: f64,
        center: Point,
    ) -> Result<Self, TableError> {
        Self::from_parts(
            vec![cell_height; nrows],
            vec![cell_width; ncols],
            center,
            Vec::new(),
        )
    }

    /// Create a single-column table: ragged row heights, one column of the
    /// given width.
    pub fn single_column<R>(row_heights: R, col_width: f64, center: Point) -> Result<Self, TableError>
    where
        R: IntoIterator<Item = f64>,
    {
        Self::new(row_heights, [col_width], center)
    }

    /// Create a single-row table: one row of the given height, ragged column
    /// widths.
    pub fn single_row<C>(row_height: f64, col_widths: C, center: Point) -> Result<Self, TableError>
    where
        C: IntoIterator<Item = f64>,
    {
        Self::new([row_height], col_widths, center)
    }

    /// Start building a table.
    #[must_use]
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    fn from_parts(
        row_heights: Vec<f64>,
        col_widths: Vec<f64>,
        center: Point,
        labels: Vec<(String, usize)>,
    ) -> Result<Self, TableError> {
        if row_heights.is_empty() {
            return Err(TableError::NoRows);
        }
        if col_widths.is_empty() {
            return Err(TableError::NoColumns);
        }
        for (i, &height) in row_heights.iter().enumerate() {
            if height <= 0.0 || height.is_nan() {
                return Err(TableError::NonPositiveHeight { row: i + 1, height });
            }
        }
        for (i, &width) in col_widths.iter().enumerate() {
            if width <= 0.0 || width.is_nan() {
                return Err(TableError::NonPositiveWidth { col: i + 1, width });
            }
        }

        let (row_tops, height) = cumulative(&row_heights);
        let (col_lefts, width) = cumulative(&col_widths);

        let cells = row_heights.len() * col_widths.len();
        let mut label_map = FxHashMap::default();
        for (name, index) in labels {
            if index == 0 || index > cells {
                return Err(TableError::UnknownLabelTarget { name, index, cells });
            }
            label_map.insert(name, index);
        }

        let table = Self {
            row_heights,
            col_widths,
            center,
            row_tops,
            col_lefts,
            height,
            width,
            labels: label_map,
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            rows = table.nrows(),
            cols = table.ncols(),
            width = table.width,
            height = table.height,
            "table constructed"
        );

        Ok(table)
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn nrows(&self) -> usize {
        self.row_heights.len()
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub fn ncols(&self) -> usize {
        self.col_widths.len()
    }

    /// `(nrows, ncols)`.
    #[inline]
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nrows() * self.ncols()
    }

    /// A table always has at least one cell, so this is always `false`.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The point the grid is centered on.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Sum of all column widths.
    #[inline]
    #[must_use]
    pub fn total_width(&self) -> f64 {
        self.width
    }

    /// Sum of all row heights.
    #[inline]
    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.height
    }

    /// Offset from the center to the grid's left edge (always negative).
    #[inline]
    #[must_use]
    pub fn left_edge(&self) -> f64 {
        -self.width / 2.0
    }

    /// Offset from the center to the grid's top edge (always negative).
    #[inline]
    #[must_use]
    pub fn top_edge(&self) -> f64 {
        -self.height / 2.0
    }

    /// All row heights, top to bottom.
    #[inline]
    #[must_use]
    pub fn row_heights(&self) -> &[f64] {
        &self.row_heights
    }

    /// All column widths, left to right.
    #[inline]
    #[must_use]
    pub fn col_widths(&self) -> &[f64] {
        &self.col_widths
    }

    /// Height of row `row` (1-based).
    pub fn row_height(&self, row: usize) -> Result<f64, IndexOutOfRange> {
        self.check_row(row)?;
        Ok(self.row_heights[row - 1])
    }

    /// Width of column `col` (1-based).
    pub fn col_width(&self, col: usize) -> Result<f64, IndexOutOfRange> {
        self.check_col(col)?;
        Ok(self.col_widths[col - 1])
    }

    /// Center of the cell with linear index `index` (1-based, row-major).
    pub fn cell(&self, index: usize) -> Result<Point, IndexOutOfRange> {
        self.check_cell(index)?;
        let (row, col) = self.row_col_unchecked(index);
        Ok(self.center_of(row, col))
    }

    /// Center of the cell at `(row, col)` (both 1-based).
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Point, IndexOutOfRange> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(self.center_of(row, col))
    }

    /// Centers of the given linear indices, in the order given.
    ///
    /// The first invalid index aborts the whole lookup with its error.
    pub fn cells<I>(&self, indices: I) -> Result<Vec<Point>, IndexOutOfRange>
    where
        I: IntoIterator<Item = usize>,
    {
        indices.into_iter().map(|i| self.cell(i)).collect()
    }

    /// Centers of every cell in row `row`, left to right.
    pub fn row(&self, row: usize) -> Result<Vec<Point>, IndexOutOfRange> {
        self.check_row(row)?;
        Ok((1..=self.ncols()).map(|col| self.center_of(row, col)).collect())
    }

    /// Centers of every cell in column `col`, top to bottom.
    pub fn column(&self, col: usize) -> Result<Vec<Point>, IndexOutOfRange> {
        self.check_col(col)?;
        Ok((1..=self.nrows()).map(|row| self.center_of(row, col)).collect())
    }

    /// `(row, col)` of the cell with linear index `index`.
    ///
    /// Pure query; the inverse of row-major numbering.
    pub fn row_col(&self, index: usize) -> Result<(usize, usize), IndexOutOfRange> {
        self.check_cell(index)?;
        Ok(self.row_col_unchecked(index))
    }

    /// Resolve a build-time label to its cell center and linear index.
    #[must_use]
    pub fn label(&self, name: &str) -> Option<(Point, usize)> {
        let index = *self.labels.get(name)?;
        let (row, col) = self.row_col_unchecked(index);
        Some((self.center_of(row, col), index))
    }

    /// All labels and the cells they name, in arbitrary order.
    pub fn labels(&self) -> impl Iterator<Item = (&str, usize)> {
        self.labels.iter().map(|(name, &index)| (name.as_str(), index))
    }

    /// Iterate over every cell center with its linear index, row-major.
    ///
    /// Each call starts a fresh traversal; the table itself holds no
    /// iteration state.
    #[must_use]
    pub fn iter(&self) -> Cells<'_> {
        Cells {
            table: self,
            front: 1,
            back: self.len(),
        }
    }

    #[inline]
    fn row_col_unchecked(&self, index: usize) -> (usize, usize) {
        let ncols = self.ncols();
        ((index - 1) / ncols + 1, (index - 1) % ncols + 1)
    }

    /// The one center formula every access path reduces to.
    #[inline]
    fn center_of(&self, row: usize, col: usize) -> Point {
        let x = self.center.x + self.left_edge()
            + self.col_lefts[col - 1]
            + self.col_widths[col - 1] / 2.0;
        let y = self.center.y + self.top_edge()
            + self.row_tops[row - 1]
            + self.row_heights[row - 1] / 2.0;
        Point::new(x, y)
    }

    #[inline]
    fn check_cell(&self, index: usize) -> Result<(), IndexOutOfRange> {
        if index == 0 || index > self.len() {
            return Err(IndexOutOfRange::Cell {
                index,
                cells: self.len(),
            });
        }
        Ok(())
    }

    #[inline]
    fn check_row(&self, row: usize) -> Result<(), IndexOutOfRange> {
        if row == 0 || row > self.nrows() {
            return Err(IndexOutOfRange::Row {
                row,
                rows: self.nrows(),
            });
        }
        Ok(())
    }

    #[inline]
    fn check_col(&self, col: usize) -> Result<(), IndexOutOfRange> {
        if col == 0 || col > self.ncols() {
            return Err(IndexOutOfRange::Column {
                col,
                cols: self.ncols(),
            });
        }
        Ok(())
    }
}

/// Prefix sums of `sizes`: offset of each track from the start, plus the
/// total extent.
fn cumulative(sizes: &[f64]) -> (Vec<f64>, f64) {
    let mut offsets = Vec::with_capacity(sizes.len());
    let mut total = 0.0;
    for &size in sizes {
        offsets.push(total);
        total += size;
    }
    (offsets, total)
}

impl<'a> IntoIterator for &'a Table {
    type Item = (Point, usize);
    type IntoIter = Cells<'a>;

    fn into_iter(self) -> Cells<'a> {
        self.iter()
    }
}

/// Row-major traversal over a table's cell centers.
///
/// Yields `(center, index)` with `index` running 1 through
/// [`Table::len`]. Double-ended and exact-sized.
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    table: &'a Table,
    /// Next index to yield from the front.
    front: usize,
    /// Last index still unyielded at the back.
    back: usize,
}

impl Iterator for Cells<'_> {
    type Item = (Point, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let index = self.front;
        self.front += 1;
        let (row, col) = self.table.row_col_unchecked(index);
        Some((self.table.center_of(row, col), index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back + 1 - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Cells<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front > self.back {
            return None;
        }
        let index = self.back;
        self.back -= 1;
        let (row, col) = self.table.row_col_unchecked(index);
        Some((self.table.center_of(row, col), index))
    }
}

impl ExactSizeIterator for Cells<'_> {}

impl std::iter::FusedIterator for Cells<'_> {}

/// Builder for [`Table`], covering the convenience forms: uniform counts
/// with a shared cell size, explicit ragged sizes per axis, and labels.
///
/// Explicit sizes win over counts on the same axis.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    row_heights: Vec<f64>,
    col_widths: Vec<f64>,
    nrows: usize,
    ncols: usize,
    cell_width: f64,
    cell_height: f64,
    center: Point,
    labels: Vec<(String, usize)>,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self {
            row_heights: Vec::new(),
            col_widths: Vec::new(),
            nrows: 0,
            ncols: 0,
            cell_width: DEFAULT_CELL_SIZE,
            cell_height: DEFAULT_CELL_SIZE,
            center: Point::ORIGIN,
            labels: Vec::new(),
        }
    }
}

impl TableBuilder {
    /// Set the row count for a uniform vertical axis.
    #[must_use]
    pub fn rows(mut self, nrows: usize) -> Self {
        self.nrows = nrows;
        self
    }

    /// Set the column count for a uniform horizontal axis.
    #[must_use]
    pub fn columns(mut self, ncols: usize) -> Self {
        self.ncols = ncols;
        self
    }

    /// Set explicit row heights, top to bottom.
    #[must_use]
    pub fn row_heights(mut self, heights: impl IntoIterator<Item = f64>) -> Self {
        self.row_heights = heights.into_iter().collect();
        self
    }

    /// Set explicit column widths, left to right.
    #[must_use]
    pub fn col_widths(mut self, widths: impl IntoIterator<Item = f64>) -> Self {
        self.col_widths = widths.into_iter().collect();
        self
    }

    /// Set the cell size used for axes given as counts.
    #[must_use]
    pub fn cell_size(mut self, width: f64, height: f64) -> Self {
        self.cell_width = width;
        self.cell_height = height;
        self
    }

    /// Set the point the grid is centered on.
    #[must_use]
    pub fn center(mut self, center: impl Into<Point>) -> Self {
        self.center = center.into();
        self
    }

    /// Name a cell by its linear index so it can be looked up later with
    /// [`Table::label`]. A repeated name keeps the last target.
    #[must_use]
    pub fn label(mut self, name: impl Into<String>, index: usize) -> Self {
        self.labels.push((name.into(), index));
        self
    }

    /// Validate and build the table.
    pub fn build(self) -> Result<Table, TableError> {
        let row_heights = if self.row_heights.is_empty() {
            vec![self.cell_height; self.nrows]
        } else {
            self.row_heights
        };
        let col_widths = if self.col_widths.is_empty() {
            vec![self.cell_width; self.ncols]
        } else {
            self.col_widths
        };
        Table::from_parts(row_heights, col_widths, self.center, self.labels)
    }
}
