//! Floyd–Warshall relaxation for a single pivot.
//!
//! One round with pivot `k` updates every cell to
//! `min(d[i][j], d[i][k] + d[k][j])`. Every strategy calls one of the shapes
//! below exactly once per pivot; they differ only in how the cells are visited.
//!
//! With non-negative weights row `k` and column `k` cannot improve during round
//! `k` (`d[k][k] >= 0`), so snapshotting row `k` before the round gives the same
//! result as reading it live.

use rayon::{iter::ParallelIterator, slice::ParallelSliceMut};

use crate::{
    constants::INF,
    distance_matrix::{DistanceMatrix, Weight},
    shared_matrix::SharedDistanceMatrix,
};

/// Weight of the path `from -> pivot -> to`, or `None` when either half is
/// missing or the sum does not fit below [`INF`].
#[inline(always)]
pub fn relaxed_sum(to_pivot: Weight, from_pivot: Weight) -> Option<Weight> {
    if to_pivot == INF || from_pivot == INF {
        return None;
    }

    to_pivot
        .checked_add(from_pivot)
        .filter(|&weight| weight < INF)
}

#[inline(always)]
fn relax_row(row: &mut [Weight], pivot: usize, pivot_row: &[Weight]) {
    let to_pivot = row[pivot];
    if to_pivot == INF {
        return;
    }

    for (weight, &from_pivot) in row.iter_mut().zip(pivot_row) {
        if let Some(candidate) = relaxed_sum(to_pivot, from_pivot) {
            if candidate < *weight {
                *weight = candidate;
            }
        }
    }
}

/// Relaxes every cell through `pivot` on the calling thread.
pub fn relax_pivot(matrix: &mut DistanceMatrix, pivot: usize) {
    let n = matrix.num_vertices();
    if n == 0 {
        return;
    }

    let pivot_row = matrix.row(pivot).to_vec();
    for row in matrix.as_mut_slice().chunks_exact_mut(n) {
        relax_row(row, pivot, &pivot_row);
    }
}

/// Relaxes every cell through `pivot`, distributing rows over the current rayon
/// pool. Each row is written by exactly one worker and the call returns once
/// every row is done, which orders this round before the next one.
pub fn relax_pivot_rows(matrix: &mut DistanceMatrix, pivot: usize) {
    let n = matrix.num_vertices();
    if n == 0 {
        return;
    }

    let pivot_row = matrix.row(pivot).to_vec();
    matrix
        .as_mut_slice()
        .par_chunks_exact_mut(n)
        .for_each(|row| relax_row(row, pivot, &pivot_row));
}

/// Relaxes every cell through `pivot` on a matrix other rounds may be touching
/// at the same time.
///
/// Cells are read live, so a concurrent round can change `d[i][pivot]` or
/// `d[pivot][j]` between two reads, and the load-compare-store can overwrite a
/// smaller value another round just stored.
pub fn relax_pivot_shared(matrix: &SharedDistanceMatrix, pivot: usize) {
    let n = matrix.num_vertices();

    for from in 0..n {
        for to in 0..n {
            let candidate = relaxed_sum(matrix.load(from, pivot), matrix.load(pivot, to));
            if let Some(candidate) = candidate {
                if candidate < matrix.load(from, to) {
                    matrix.store(from, to, candidate);
                }
            }
        }
    }
}
