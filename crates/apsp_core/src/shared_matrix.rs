use std::sync::atomic::{AtomicU32, Ordering};

use crate::distance_matrix::{DistanceMatrix, Weight};

/// Distance matrix whose cells can be read and written from several rounds at
/// once.
///
/// Every access uses [`Ordering::Relaxed`], so nothing orders one round's writes
/// before another round's reads. Values stay well formed, but a reader can see
/// any mix of old and new cells and concurrent writers can overwrite each other.
/// Only across-round strategies use this type.
pub struct SharedDistanceMatrix {
    weights: Vec<AtomicU32>,
    num_vertices: usize,
}

impl SharedDistanceMatrix {
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    #[inline(always)]
    pub fn load(&self, from: usize, to: usize) -> Weight {
        self.weights[from * self.num_vertices + to].load(Ordering::Relaxed)
    }

    #[inline(always)]
    pub fn store(&self, from: usize, to: usize, weight: Weight) {
        self.weights[from * self.num_vertices + to].store(weight, Ordering::Relaxed);
    }

    pub fn into_matrix(self) -> DistanceMatrix {
        let weights = self
            .weights
            .into_iter()
            .map(AtomicU32::into_inner)
            .collect();
        DistanceMatrix::from_flat(weights, self.num_vertices)
    }
}

impl From<DistanceMatrix> for SharedDistanceMatrix {
    fn from(matrix: DistanceMatrix) -> Self {
        Self {
            num_vertices: matrix.num_vertices(),
            weights: matrix.as_slice().iter().map(|&w| AtomicU32::new(w)).collect(),
        }
    }
}
