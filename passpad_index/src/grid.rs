// Copyright 2025 the Passpad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-cell neighbour grid: per-cell candidate lists for proximity hit testing.

use alloc::vec::Vec;

use crate::types::Bounds;

/// A `columns × rows` partition of the keyboard area where each cell lists the
/// entries whose centre lies within the proximity threshold of any cell corner.
///
/// The grid is a bounding query made once per cell, so per-touch lookups only
/// visit a handful of entries regardless of how many there are in total.
/// Cell sizes are the keyboard dimensions divided by the cell counts, rounded up,
/// so no pixel of the keyboard falls outside the grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighborGrid {
    columns: usize,
    rows: usize,
    width: i32,
    height: i32,
    cell_width: i32,
    cell_height: i32,
    cells: Vec<Vec<usize>>,
}

impl NeighborGrid {
    /// Build the grid for an area of `width × height`.
    ///
    /// `threshold` is a squared distance. Entries are identified by their position
    /// in `entries`. A non-positive area or zero cell count yields an empty grid
    /// whose queries return no candidates.
    pub fn build(
        columns: usize,
        rows: usize,
        width: i32,
        height: i32,
        threshold: i32,
        entries: &[Bounds],
    ) -> Self {
        if columns == 0 || rows == 0 || width <= 0 || height <= 0 {
            return Self::default();
        }
        let (Ok(cols), Ok(rws)) = (i32::try_from(columns), i32::try_from(rows)) else {
            return Self::default();
        };
        let cell_width = (width + cols - 1) / cols;
        let cell_height = (height + rws - 1) / rws;
        let mut cells = Vec::with_capacity(columns * rows);
        for row in 0..rws {
            for col in 0..cols {
                let x = col * cell_width;
                let y = row * cell_height;
                let corners = [
                    (x, y),
                    (x + cell_width - 1, y),
                    (x + cell_width - 1, y + cell_height - 1),
                    (x, y + cell_height - 1),
                ];
                let near: Vec<usize> = entries
                    .iter()
                    .enumerate()
                    .filter(|(_, b)| {
                        corners
                            .iter()
                            .any(|&(cx, cy)| b.squared_distance_from_center(cx, cy) < threshold)
                    })
                    .map(|(i, _)| i)
                    .collect();
                cells.push(near);
            }
        }
        Self {
            columns,
            rows,
            width,
            height,
            cell_width,
            cell_height,
            cells,
        }
    }

    /// Candidate entries for a point, in ascending entry order.
    ///
    /// Points outside `[0, width) × [0, height)` have no candidates.
    pub fn candidates(&self, x: i32, y: i32) -> &[usize] {
        if self.cells.is_empty() || x < 0 || y < 0 || x >= self.width || y >= self.height {
            return &[];
        }
        let (Ok(col), Ok(row)) = (
            usize::try_from(x / self.cell_width),
            usize::try_from(y / self.cell_height),
        ) else {
            return &[];
        };
        if col >= self.columns || row >= self.rows {
            return &[];
        }
        self.cells
            .get(row * self.columns + col)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Cell size as `(width, height)`.
    pub fn cell_size(&self) -> (i32, i32) {
        (self.cell_width, self.cell_height)
    }

    /// Covered area as `(width, height)`.
    pub fn extent(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// True if the grid has no cells (degenerate area).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_by_four(side: i32) -> Vec<Bounds> {
        let mut out = Vec::new();
        for row in 0..4 {
            for col in 0..3 {
                out.push(Bounds::new(col * side, row * side, side, side));
            }
        }
        out
    }

    #[test]
    fn corner_cell_lists_nearby_keys() {
        let keys = three_by_four(100);
        let threshold = 140 * 140;
        let grid = NeighborGrid::build(3, 4, 300, 400, threshold, &keys);
        assert_eq!(grid.cell_size(), (100, 100));
        let top_left = grid.candidates(10, 10);
        assert!(top_left.contains(&0));
        assert!(top_left.contains(&1));
        assert!(top_left.contains(&3));
        assert!(
            !top_left.contains(&11),
            "far corner key must not be a neighbour of the top-left cell"
        );
    }

    #[test]
    fn cell_size_rounds_up() {
        let keys = three_by_four(33);
        let grid = NeighborGrid::build(3, 4, 100, 133, 46 * 46, &keys);
        assert_eq!(grid.cell_size(), (34, 34));
        assert!(!grid.candidates(99, 132).is_empty());
    }

    #[test]
    fn out_of_bounds_is_empty() {
        let keys = three_by_four(100);
        let grid = NeighborGrid::build(3, 4, 300, 400, 140 * 140, &keys);
        assert!(grid.candidates(-1, 5).is_empty());
        assert!(grid.candidates(5, -1).is_empty());
        assert!(grid.candidates(300, 5).is_empty());
        assert!(grid.candidates(5, 400).is_empty());
    }

    #[test]
    fn degenerate_area_builds_empty_grid() {
        let grid = NeighborGrid::build(3, 4, 0, 400, 100, &[Bounds::new(0, 0, 1, 1)]);
        assert!(grid.is_empty());
        assert_eq!(grid.candidates(0, 0), &[] as &[usize]);
        let grid = NeighborGrid::build(0, 4, 300, 400, 100, &[Bounds::new(0, 0, 1, 1)]);
        assert!(grid.is_empty());
    }
}
