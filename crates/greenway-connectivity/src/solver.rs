//! Least-cost paths on the resistance grid.
//!
//! Dijkstra on the 8-connected grid graph. The cost of stepping into a
//! cell is that cell's resistance multiplied by the geometric step length
//! (1 for orthogonal moves, √2 for diagonal moves, in cell units) - the
//! minimum-cost-path raster traversal model, not a plain edge-weighted
//! graph. All weights are non-negative, ties are broken by cell index so
//! identical inputs always produce identical paths.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use greenway_structures::{PathResult, ResistanceGrid};
use thiserror::Error;

/// Why a path computation failed.
#[derive(Debug, Clone, Error)]
pub enum PathError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    #[error("destination is unreachable from the source")]
    Unreachable,
}

/// Neighbor offsets in fixed traversal order (row, col, step length).
const NEIGHBORS: [(i64, i64, f64); 8] = [
    (-1, -1, std::f64::consts::SQRT_2),
    (-1, 0, 1.0),
    (-1, 1, std::f64::consts::SQRT_2),
    (0, -1, 1.0),
    (0, 1, 1.0),
    (1, -1, std::f64::consts::SQRT_2),
    (1, 0, 1.0),
    (1, 1, std::f64::consts::SQRT_2),
];

#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    cost: f64,
    idx: usize,
}

impl Eq for Candidate {}

// Min-heap ordering on cost; index breaks ties deterministically.
// Costs are finite (the grid carries no NaN/inf), so the partial
// comparison never actually falls back.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Minimum accumulated-cost path between two grid cells.
///
/// Returns the ordered cell sequence (source and destination inclusive)
/// and the accumulated cost. The source cell's own resistance is not
/// paid; every subsequent cell is paid on entry.
pub fn solve(
    grid: &ResistanceGrid,
    source: (i64, i64),
    destination: (i64, i64),
) -> Result<PathResult, PathError> {
    let (rows, cols) = grid.shape();
    let src = check_bounds(grid, source)?;
    let dst = check_bounds(grid, destination)?;

    let src_idx = src.0 * cols + src.1;
    let dst_idx = dst.0 * cols + dst.1;

    let n = rows * cols;
    let mut dist = vec![f64::INFINITY; n];
    let mut prev = vec![usize::MAX; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    dist[src_idx] = 0.0;
    heap.push(Candidate {
        cost: 0.0,
        idx: src_idx,
    });

    while let Some(Candidate { cost, idx }) = heap.pop() {
        if settled[idx] {
            continue;
        }
        settled[idx] = true;
        if idx == dst_idx {
            break;
        }

        let row = (idx / cols) as i64;
        let col = (idx % cols) as i64;
        for (dr, dc, step) in NEIGHBORS {
            let (nr, nc) = (row + dr, col + dc);
            if !grid.in_bounds(nr, nc) {
                continue;
            }
            let nidx = nr as usize * cols + nc as usize;
            if settled[nidx] {
                continue;
            }
            let next = cost + f64::from(grid.cost(nr as usize, nc as usize)) * step;
            if next < dist[nidx] {
                dist[nidx] = next;
                prev[nidx] = idx;
                heap.push(Candidate {
                    cost: next,
                    idx: nidx,
                });
            }
        }
    }

    if !settled[dst_idx] {
        return Err(PathError::Unreachable);
    }

    let mut cells = Vec::new();
    let mut idx = dst_idx;
    loop {
        cells.push((idx / cols, idx % cols));
        if idx == src_idx {
            break;
        }
        idx = prev[idx];
    }
    cells.reverse();

    Ok(PathResult {
        cells,
        cost: dist[dst_idx],
    })
}

fn check_bounds(grid: &ResistanceGrid, cell: (i64, i64)) -> Result<(usize, usize), PathError> {
    let (rows, cols) = grid.shape();
    if grid.in_bounds(cell.0, cell.1) {
        Ok((cell.0 as usize, cell.1 as usize))
    } else {
        Err(PathError::OutOfBounds {
            row: cell.0,
            col: cell.1,
            rows,
            cols,
        })
    }
}
