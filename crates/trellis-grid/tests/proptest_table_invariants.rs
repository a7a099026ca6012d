//! Property-based invariant tests for the table layout.
//!
//! These verify structural invariants that must hold for **any** combination
//! of ragged sizes and center point:
//!
//! 1. Linear and (row, col) access agree on every cell.
//! 2. Sequential traversal is row-major, complete, and matches linear access.
//! 3. Row/column selectors match per-cell access.
//! 4. Adjacent column centers are separated by the mean of their widths.
//! 5. Grid edges sit half the total extent away from the center.
//! 6. The index mapping is bijective over the whole grid.
//! 7. Out-of-range indices always fail, in-range ones never do.
//! 8. Traversal is restartable and reversible.

use proptest::prelude::*;
use trellis_geometry::Point;
use trellis_grid::{IndexOutOfRange, Table};

// ── Helpers ─────────────────────────────────────────────────────────────

fn sizes(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(0.5f64..=200.0, 1..=max_len)
}

fn center_strategy() -> impl Strategy<Value = Point> {
    (-1000.0f64..=1000.0, -1000.0f64..=1000.0).prop_map(|(x, y)| Point::new(x, y))
}

fn table_strategy() -> impl Strategy<Value = Table> {
    (sizes(8), sizes(8), center_strategy())
        .prop_map(|(rows, cols, center)| Table::new(rows, cols, center).unwrap())
}

/// Tolerant float equality for values computed along different paths.
fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Linear and (row, col) access agree
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn linear_matches_row_col(table in table_strategy()) {
        for index in 1..=table.len() {
            let (row, col) = table.row_col(index).unwrap();
            prop_assert_eq!(table.cell(index).unwrap(), table.cell_at(row, col).unwrap());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Traversal is row-major, complete, and matches linear access
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn traversal_is_complete_and_ordered(table in table_strategy()) {
        let cells: Vec<_> = table.iter().collect();
        prop_assert_eq!(cells.len(), table.len());
        for (k, (center, index)) in cells.iter().enumerate() {
            prop_assert_eq!(*index, k + 1);
            prop_assert_eq!(*center, table.cell(*index).unwrap());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Row/column selectors match per-cell access
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn selectors_match_cell_access(table in table_strategy()) {
        for row in 1..=table.nrows() {
            let points = table.row(row).unwrap();
            prop_assert_eq!(points.len(), table.ncols());
            for (i, point) in points.iter().enumerate() {
                prop_assert_eq!(*point, table.cell_at(row, i + 1).unwrap());
            }
        }
        for col in 1..=table.ncols() {
            let points = table.column(col).unwrap();
            prop_assert_eq!(points.len(), table.nrows());
            for (i, point) in points.iter().enumerate() {
                prop_assert_eq!(*point, table.cell_at(i + 1, col).unwrap());
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Adjacent column centers are separated by the mean of their widths
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn column_center_gaps(table in table_strategy()) {
        let first_row = table.row(1).unwrap();
        for col in 1..table.ncols() {
            let gap = first_row[col].x - first_row[col - 1].x;
            let expected = (table.col_width(col).unwrap() + table.col_width(col + 1).unwrap()) / 2.0;
            prop_assert!(
                close(gap, expected),
                "gap between columns {} and {}: got {gap}, expected {expected}",
                col, col + 1
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Grid edges sit half the total extent away from the center
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn edges_are_symmetric_about_center(table in table_strategy()) {
        let first = table.cell_at(1, 1).unwrap();
        let last = table.cell_at(table.nrows(), table.ncols()).unwrap();
        let half_w = table.total_width() / 2.0;
        let half_h = table.total_height() / 2.0;
        let center = table.center();

        // Left edge of the first column and right edge of the last column.
        prop_assert!(close(
            first.x - table.col_width(1).unwrap() / 2.0,
            center.x - half_w
        ));
        prop_assert!(close(
            last.x + table.col_width(table.ncols()).unwrap() / 2.0,
            center.x + half_w
        ));
        // Top edge of the first row and bottom edge of the last row.
        prop_assert!(close(
            first.y - table.row_height(1).unwrap() / 2.0,
            center.y - half_h
        ));
        prop_assert!(close(
            last.y + table.row_height(table.nrows()).unwrap() / 2.0,
            center.y + half_h
        ));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. The index mapping is bijective over the whole grid
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn index_mapping_is_bijective(table in table_strategy()) {
        let mut seen = std::collections::BTreeSet::new();
        for index in 1..=table.len() {
            let (row, col) = table.row_col(index).unwrap();
            prop_assert!((1..=table.nrows()).contains(&row));
            prop_assert!((1..=table.ncols()).contains(&col));
            prop_assert!(seen.insert((row, col)), "duplicate cell ({row}, {col})");
        }
        prop_assert_eq!(seen.len(), table.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Out-of-range indices always fail, in-range ones never do
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bounds_are_exact(table in table_strategy()) {
        let cells = table.len();
        prop_assert_eq!(
            table.cell(0).unwrap_err(),
            IndexOutOfRange::Cell { index: 0, cells }
        );
        prop_assert_eq!(
            table.cell(cells + 1).unwrap_err(),
            IndexOutOfRange::Cell { index: cells + 1, cells }
        );
        prop_assert!(table.cell_at(0, 1).is_err());
        prop_assert!(table.cell_at(table.nrows() + 1, 1).is_err());
        prop_assert!(table.cell_at(1, table.ncols() + 1).is_err());

        for index in 1..=cells {
            prop_assert!(table.cell(index).is_ok());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Traversal is restartable and reversible
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn traversal_restartable_and_reversible(table in table_strategy()) {
        let first: Vec<_> = table.iter().collect();
        let second: Vec<_> = table.iter().collect();
        prop_assert_eq!(&first, &second);

        let mut reversed: Vec<_> = table.iter().rev().collect();
        reversed.reverse();
        prop_assert_eq!(&first, &reversed);
    }
}
