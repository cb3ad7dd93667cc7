//! The resistance grid and its georeferencing transform.

use geo::{Coord, Point};
use ndarray::Array2;

use crate::Crs;

/// North-up affine transform between world coordinates and cell indices.
///
/// Cell (0, 0) corresponds to the top-left corner (minx, maxy); y decreases
/// with increasing row. Rotation is always zero and cells are square.
///
/// One convention is applied uniformly: `world_to_cell` truncates to the
/// containing cell, `cell_center` returns cell-center world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTransform {
    /// World x of the grid's left edge (minx).
    pub origin_x: f64,
    /// World y of the grid's top edge (maxy).
    pub origin_y: f64,
    /// Cell edge length in CRS units (meters).
    pub cell_size: f64,
}

impl GridTransform {
    pub fn new(origin_x: f64, origin_y: f64, cell_size: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_size,
        }
    }

    /// The (row, col) cell containing a world point, unchecked against any
    /// grid bounds. Negative results mean the point lies above or left of
    /// the origin.
    pub fn world_to_cell(&self, point: Point<f64>) -> (i64, i64) {
        let col = ((point.x() - self.origin_x) / self.cell_size).floor() as i64;
        let row = ((self.origin_y - point.y()) / self.cell_size).floor() as i64;
        (row, col)
    }

    /// World coordinates of a cell's center.
    pub fn cell_center(&self, row: usize, col: usize) -> Coord<f64> {
        Coord {
            x: self.origin_x + (col as f64 + 0.5) * self.cell_size,
            y: self.origin_y - (row as f64 + 0.5) * self.cell_size,
        }
    }
}

/// Uniform grid of movement-cost values.
///
/// Immutable after construction; the corridor network stage shares it
/// read-only across all path computations, so it is `Sync` by design and
/// free of interior mutability.
#[derive(Debug, Clone)]
pub struct ResistanceGrid {
    data: Array2<f32>,
    transform: GridTransform,
    crs: Crs,
}

impl ResistanceGrid {
    pub fn new(data: Array2<f32>, transform: GridTransform, crs: Crs) -> Self {
        Self {
            data,
            transform,
            crs,
        }
    }

    /// (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    pub fn transform(&self) -> &GridTransform {
        &self.transform
    }

    pub fn crs(&self) -> &Crs {
        &self.crs
    }

    pub fn data(&self) -> &Array2<f32> {
        &self.data
    }

    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        let (rows, cols) = self.shape();
        row >= 0 && col >= 0 && (row as usize) < rows && (col as usize) < cols
    }

    pub fn cost(&self, row: usize, col: usize) -> f32 {
        self.data[(row, col)]
    }

    /// The cell containing a world point, or `None` when the point falls
    /// outside the grid.
    pub fn cell_at(&self, point: Point<f64>) -> Option<(usize, usize)> {
        let (row, col) = self.transform.world_to_cell(point);
        self.in_bounds(row, col)
            .then_some((row as usize, col as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn world_to_cell_truncates_to_containing_cell() {
        let t = GridTransform::new(100.0, 500.0, 50.0);
        assert_eq!(t.world_to_cell(Point::new(100.0, 500.0)), (0, 0));
        assert_eq!(t.world_to_cell(Point::new(149.9, 450.1)), (0, 0));
        assert_eq!(t.world_to_cell(Point::new(150.0, 450.0)), (1, 1));
        // Above/left of the origin goes negative rather than clamping.
        assert_eq!(t.world_to_cell(Point::new(99.0, 501.0)), (-1, -1));
    }

    #[test]
    fn cell_center_round_trips() {
        let t = GridTransform::new(0.0, 1000.0, 50.0);
        let c = t.cell_center(3, 7);
        assert_eq!(c.x, 375.0);
        assert_eq!(c.y, 825.0);
        assert_eq!(t.world_to_cell(c.into()), (3, 7));
    }

    #[test]
    fn cell_at_rejects_out_of_bounds() {
        let grid = ResistanceGrid::new(
            Array2::from_elem((4, 4), 1.0),
            GridTransform::new(0.0, 200.0, 50.0),
            Crs::epsg(2154),
        );
        assert_eq!(grid.cell_at(Point::new(25.0, 175.0)), Some((0, 0)));
        assert_eq!(grid.cell_at(Point::new(-1.0, 175.0)), None);
        assert_eq!(grid.cell_at(Point::new(25.0, 201.0)), None);
    }
}
