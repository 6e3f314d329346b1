//! Dashboard layout: equally sized cells with balanced whitespace.
//!
//! Every visible child occupies one cell of the same size. The layout tries
//! each possible column count and keeps the one whose horizontal and vertical
//! gaps are closest to each other, preferring grids whose last row is full.
//! Callers may pin the column and/or row count; a square grid wins whenever
//! one is eligible and not a single row or column.
//!
//! All arithmetic is integer. Divisions truncate, and the trailing column/row
//! absorbs the rounding remainder when the gap on that axis is zero.

use crate::geometry::{Region, Size};

use super::{Layout, WidgetPlacement};

/// Score multiplier applied to candidates whose last row is not full.
pub const UNEVEN_GRID_PENALTY: i64 = 10;

/// Rows needed to hold `count` items in `cols` columns.
fn rows_for(cols: usize, count: usize) -> usize {
    count.div_ceil(cols)
}

/// `count` as a multiplier, saturating instead of wrapping.
fn span(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

/// Narrow a length computed in `i64` back to cells, saturating at the `i32` range.
fn narrow(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Whitespace between `count` cells of `cell` length (and at both edges).
///
/// Computed in `i64`: an unbounded measurement can hand in cells whose
/// total exceeds `i32`.
fn gap(available: i32, cell: i32, count: usize) -> i32 {
    let count = span(count);
    let used = i64::from(cell).saturating_mul(count);
    narrow(i64::from(available).saturating_sub(used) / count.saturating_add(1))
}

/// Length of one cell box once `count` cells and their gaps share `available`.
fn cell_box(available: i32, gap: i32, count: usize) -> i32 {
    let count = span(count);
    let whitespace = i64::from(gap).saturating_mul(count.saturating_add(1));
    narrow(i64::from(available).saturating_sub(whitespace) / count).max(0)
}

/// The resolved grid for one placement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrangement {
    pub rows: usize,
    pub cols: usize,
    /// Horizontal whitespace between columns and at the left/right edges.
    pub h_gap: i32,
    /// Vertical whitespace between rows and at the top/bottom edges.
    pub v_gap: i32,
    /// Width of one cell box.
    pub cell_width: i32,
    /// Height of one cell box.
    pub cell_height: i32,
    /// The container size this arrangement was computed for.
    pub container: Size,
}

impl Arrangement {
    /// Region of the item at `visible_index`, relative to the container origin.
    ///
    /// Items fill the grid row-major. When a gap is zero, the last column
    /// (or row) extends to the container edge so integer rounding never
    /// leaves a sliver uncovered.
    pub fn region_for(&self, visible_index: usize) -> Region {
        let row = visible_index / self.cols;
        let col = visible_index % self.cols;

        let left = self.h_gap * (col as i32 + 1) + self.cell_width * col as i32;
        let top = self.v_gap * (row as i32 + 1) + self.cell_height * row as i32;

        let right = if self.h_gap == 0 && col == self.cols - 1 {
            self.container.width
        } else {
            left + self.cell_width
        };
        let bottom = if self.v_gap == 0 && row == self.rows - 1 {
            self.container.height
        } else {
            top + self.cell_height
        };

        Region::from_corners(left, top, right, bottom)
    }
}

/// Dashboard layout algorithm with configurable properties.
///
/// `cell` is the uniform child size found during measurement. A desired
/// count of zero means "no preference".
#[derive(Debug, Clone, Default)]
pub struct DashboardLayout {
    pub cell: Size,
    pub desired_cols: usize,
    pub desired_rows: usize,
}

impl DashboardLayout {
    /// Create a new DashboardLayout for the given cell size.
    pub fn new(cell: Size) -> Self {
        Self {
            cell,
            ..Self::default()
        }
    }

    pub fn with_desired_cols(mut self, cols: usize) -> Self {
        self.desired_cols = cols;
        self
    }

    pub fn with_desired_rows(mut self, rows: usize) -> Self {
        self.desired_rows = rows;
        self
    }

    /// Whitespace imbalance of every candidate column count (index `c - 1`),
    /// plus the square-grid root if one is eligible.
    ///
    /// Square eligibility is tied to the caller's desired counts being equal
    /// (both unset counts as equal), not only to the candidate itself.
    fn score_candidates(&self, count: usize, container: Size) -> (Vec<i64>, Option<usize>) {
        let mut scores = Vec::with_capacity(count);
        let mut square_root = None;

        for cols in 1..=count {
            let rows = rows_for(cols, count);
            if cols == rows {
                let eligible = self.desired_cols == self.desired_rows && count == cols * rows;
                square_root = eligible.then_some(cols);
            }

            let h_gap = gap(container.width, self.cell.width, cols);
            let v_gap = gap(container.height, self.cell.height, rows);
            let mut score = (i64::from(v_gap) - i64::from(h_gap)).abs();
            if rows * cols != count {
                score *= UNEVEN_GRID_PENALTY;
            }
            scores.push(score);
        }

        (scores, square_root)
    }

    /// Walk the candidates, honoring desired counts. Returns the chosen
    /// column count and the row count if an override locked it.
    fn select(&self, scores: &[i64], count: usize) -> (usize, Option<usize>) {
        let mut best_score = i64::MAX;
        let mut best = 1;

        for (i, &score) in scores.iter().enumerate() {
            let cols = i + 1;
            if score < best_score {
                best_score = score;
                best = cols;
            }

            if self.desired_cols > 0 && cols == self.desired_cols {
                let rows = rows_for(cols, count);
                if self.desired_rows == 0 || rows == self.desired_rows {
                    return (cols, Some(rows));
                }
            } else if self.desired_cols == 0 && self.desired_rows > 0 {
                let rows = rows_for(best, count);
                if rows == self.desired_rows {
                    return (cols, Some(rows));
                }
            }
        }

        (best, None)
    }

    /// Compute the grid for `count` visible items in a container of `container` size.
    ///
    /// Returns `None` when there is nothing to place.
    pub fn arrangement(&self, count: usize, container: Size) -> Option<Arrangement> {
        if count == 0 {
            return None;
        }

        let (scores, square_root) = self.score_candidates(count, container);
        let (mut cols, mut rows) = self.select(&scores, count);

        if let Some(root) = square_root {
            if cols > 1 && cols < count {
                cols = root;
                rows = Some(root);
            }
        }
        let rows = rows.unwrap_or_else(|| rows_for(cols, count));

        // Cells larger than the container collapse the gap instead of going negative.
        let h_gap = gap(container.width, self.cell.width, cols).max(0);
        let v_gap = gap(container.height, self.cell.height, rows).max(0);
        let cell_width = cell_box(container.width, h_gap, cols);
        let cell_height = cell_box(container.height, v_gap, rows);

        log::trace!("dashboard scores: {:?}", scores);
        log::debug!(
            "dashboard arrangement: {} items -> {}x{} (cols x rows), gaps {}/{}, cell {}x{}",
            count,
            cols,
            rows,
            h_gap,
            v_gap,
            cell_width,
            cell_height
        );

        Some(Arrangement {
            rows,
            cols,
            h_gap,
            v_gap,
            cell_width,
            cell_height,
            container,
        })
    }
}

impl Layout for DashboardLayout {
    fn arrange(&mut self, visible: &[usize], available: Region) -> Vec<WidgetPlacement> {
        let Some(arrangement) = self.arrangement(visible.len(), available.size()) else {
            return Vec::new();
        };

        visible
            .iter()
            .enumerate()
            .map(|(visible_index, &child_index)| {
                let local = arrangement.region_for(visible_index);
                WidgetPlacement {
                    child_index,
                    region: Region::new(
                        available.x + local.x,
                        available.y + local.y,
                        local.width,
                        local.height,
                    ),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(cell: i32) -> DashboardLayout {
        DashboardLayout::new(Size::new(cell, cell))
    }

    #[test]
    fn test_huge_cells_do_not_overflow() {
        // An unbounded height lets a child report a very tall natural size.
        // One column would need four of them: far beyond i32.
        let layout = DashboardLayout::new(Size::new(10, i32::MAX / 2));
        let a = layout.arrangement(4, Size::new(100, 100)).unwrap();
        assert_eq!((a.cols, a.rows), (4, 1));
        assert_eq!((a.h_gap, a.v_gap), (12, 0));
        assert_eq!((a.cell_width, a.cell_height), (10, 100));

        // (100 - 3 * i32::MAX) / 4, which only fits once divided.
        assert_eq!(gap(100, i32::MAX, 3), -1_610_612_710);
    }

    #[test]
    fn test_no_items_means_no_arrangement() {
        assert_eq!(layout(100).arrangement(0, Size::new(720, 520)), None);
        assert!(layout(100).arrange(&[], Region::new(0, 0, 720, 520)).is_empty());
    }

    #[test]
    fn test_six_items_pick_most_balanced_even_grid() {
        // c=3 -> h=(720-300)/4=105, v=(520-200)/3=106, score 1.
        let a = layout(100).arrangement(6, Size::new(720, 520)).unwrap();
        assert_eq!((a.cols, a.rows), (3, 2));
        assert_eq!((a.h_gap, a.v_gap), (105, 106));
        assert_eq!(a.cell_width, (720 - 105 * 4) / 3);
        assert_eq!(a.cell_height, (520 - 106 * 3) / 2);
    }

    #[test]
    fn test_scores_penalize_uneven_grids() {
        let (scores, square) = layout(100).score_candidates(6, Size::new(720, 520));
        // c=1: |(-80/7) - 310| = 321
        // c=4: |106 - 64| * 10 = 420
        assert_eq!(scores, vec![321, 118, 1, 420, 700, 193]);
        assert_eq!(square, None);
    }

    #[test]
    fn test_desired_cols_locks_immediately() {
        let a = layout(100)
            .with_desired_cols(2)
            .arrangement(5, Size::new(720, 520))
            .unwrap();
        assert_eq!((a.cols, a.rows), (2, 3));
    }

    #[test]
    fn test_desired_cols_with_mismatched_rows_falls_back() {
        // c=2 gives 2 rows, not the desired 3, so the whitespace search decides.
        let a = layout(100)
            .with_desired_cols(2)
            .with_desired_rows(3)
            .arrangement(4, Size::new(1000, 200))
            .unwrap();
        // c=4: h=(1000-400)/5=120, v=(200-100)/2=50, score 70 beats everything else.
        assert_eq!((a.cols, a.rows), (4, 1));
    }

    #[test]
    fn test_unlocked_rows_are_recomputed_for_chosen_cols() {
        let a = layout(100)
            .with_desired_cols(2)
            .with_desired_rows(3)
            .arrangement(4, Size::new(400, 400))
            .unwrap();
        assert_eq!((a.cols, a.rows), (2, 2));
    }

    #[test]
    fn test_desired_rows_only() {
        // Best-so-far reaches 7 columns (2 rows) at c=7.
        let a = layout(100)
            .with_desired_rows(2)
            .arrangement(9, Size::new(1000, 300))
            .unwrap();
        assert_eq!((a.cols, a.rows), (7, 2));
    }

    #[test]
    fn test_square_preferred_when_desired_counts_unset() {
        // Best score is c=7 (|33-37| * 10 = 40), but 3x3 is available.
        let a = layout(100).arrangement(9, Size::new(1000, 300)).unwrap();
        assert_eq!((a.cols, a.rows), (3, 3));
    }

    #[test]
    fn test_square_eligibility_follows_desired_counts() {
        // Unequal desired counts disable the square even though 3x3 fits exactly.
        let a = layout(100)
            .with_desired_cols(7)
            .arrangement(9, Size::new(1000, 300))
            .unwrap();
        assert_eq!((a.cols, a.rows), (7, 2));

        // Equal desired counts keep it eligible even when neither matches the square.
        let a = layout(100)
            .with_desired_cols(7)
            .with_desired_rows(7)
            .arrangement(9, Size::new(1000, 300))
            .unwrap();
        assert_eq!((a.cols, a.rows), (3, 3));
    }

    #[test]
    fn test_square_not_forced_on_single_row() {
        // Best is a single row of 4; the 2x2 square does not override it.
        let a = layout(100).arrangement(4, Size::new(1000, 200)).unwrap();
        assert_eq!((a.cols, a.rows), (4, 1));
    }

    #[test]
    fn test_ties_prefer_fewer_columns() {
        // Two items in a square container: c=1 and c=2 mirror each other.
        let (scores, _) = layout(100).score_candidates(2, Size::new(400, 400));
        assert_eq!(scores[0], scores[1]);
        let a = layout(100).arrangement(2, Size::new(400, 400)).unwrap();
        assert_eq!(a.cols, 1);
    }

    #[test]
    fn test_overflow_clamps_gap_and_box() {
        let a = layout(100)
            .with_desired_cols(3)
            .arrangement(3, Size::new(150, 400))
            .unwrap();
        assert_eq!((a.cols, a.rows), (3, 1));
        assert_eq!(a.h_gap, 0);
        assert_eq!(a.cell_width, 50);
        assert_eq!(a.v_gap, 150);
        assert_eq!(a.cell_height, 100);
    }

    #[test]
    fn test_zero_sized_container_produces_empty_boxes() {
        let a = layout(100).arrangement(3, Size::ZERO).unwrap();
        assert_eq!((a.h_gap, a.v_gap), (0, 0));
        assert_eq!((a.cell_width, a.cell_height), (0, 0));
        for i in 0..3 {
            assert!(a.region_for(i).is_empty());
        }
    }

    #[test]
    fn test_trailing_edge_snaps_when_gap_is_zero() {
        let a = layout(100)
            .with_desired_cols(3)
            .arrangement(3, Size::new(151, 100))
            .unwrap();
        assert_eq!(a.cell_width, 50);
        assert_eq!(a.region_for(0), Region::new(0, 0, 50, 100));
        assert_eq!(a.region_for(1), Region::new(50, 0, 50, 100));
        // Last column absorbs the rounding remainder.
        assert_eq!(a.region_for(2), Region::new(100, 0, 51, 100));
    }

    #[test]
    fn test_arrange_offsets_by_available_origin() {
        let placements =
            layout(100).arrange(&[0, 2, 5], Region::new(10, 20, 720, 520));
        // Single row of three: h=(720-300)/4=105, v=(520-100)/2=210.
        assert_eq!(placements.len(), 3);
        assert_eq!(placements[1].child_index, 2);
        assert_eq!(placements[0].region, Region::new(115, 230, 100, 100));
        assert_eq!(placements[2].region, Region::new(10 + 105 * 3 + 200, 230, 100, 100));
    }

    #[test]
    fn test_arrangement_is_idempotent() {
        let layout = layout(37).with_desired_rows(2);
        let first = layout.arrangement(11, Size::new(500, 300));
        let second = layout.arrangement(11, Size::new(500, 300));
        assert_eq!(first, second);
    }
}
