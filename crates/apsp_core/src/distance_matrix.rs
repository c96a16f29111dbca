use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{constants::INF, error::ApspError};

pub type Weight = u32;

/// Dense n×n matrix of path weights.
/// Weights are stored row-major in a flat vector, the cell `(from, to)` lives at
/// `from * num_vertices + to`. [`INF`] marks a missing edge.
///
/// Serialized as one array per row with `null` for [`INF`].
#[derive(Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    weights: Vec<Weight>,
    num_vertices: usize,
}

impl DistanceMatrix {
    /// Matrix with every cell set to [`INF`].
    pub fn new(num_vertices: usize) -> Self {
        Self {
            weights: vec![INF; num_vertices * num_vertices],
            num_vertices,
        }
    }

    pub fn from_rows(rows: Vec<Vec<Weight>>) -> Result<Self, ApspError> {
        let num_vertices = rows.len();
        let mut weights = Vec::with_capacity(num_vertices * num_vertices);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != num_vertices {
                return Err(ApspError::NonSquareMatrix {
                    row,
                    len: values.len(),
                    expected: num_vertices,
                });
            }
            weights.extend(values);
        }

        Ok(Self {
            weights,
            num_vertices,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ApspError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn is_empty(&self) -> bool {
        self.num_vertices == 0
    }

    #[inline(always)]
    fn index(&self, from: usize, to: usize) -> usize {
        from * self.num_vertices + to
    }

    #[inline(always)]
    pub fn get(&self, from: usize, to: usize) -> Weight {
        self.weights[self.index(from, to)]
    }

    #[inline(always)]
    pub fn set(&mut self, from: usize, to: usize, weight: Weight) {
        let index = self.index(from, to);
        self.weights[index] = weight;
    }

    pub fn row(&self, from: usize) -> &[Weight] {
        let start = self.index(from, 0);
        &self.weights[start..start + self.num_vertices]
    }

    pub fn as_slice(&self) -> &[Weight] {
        &self.weights
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Weight] {
        &mut self.weights
    }

    pub(crate) fn from_flat(weights: Vec<Weight>, num_vertices: usize) -> Self {
        debug_assert_eq!(weights.len(), num_vertices * num_vertices);
        Self {
            weights,
            num_vertices,
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<Weight>> {
        (0..self.num_vertices)
            .map(|from| self.row(from).to_vec())
            .collect()
    }

    /// Cells where `self` and `other` disagree, as `(from, to)` pairs.
    /// Matrices of different sizes disagree everywhere in the larger one.
    pub fn mismatched_cells(&self, other: &DistanceMatrix) -> Vec<(usize, usize)> {
        let n = self.num_vertices.max(other.num_vertices);
        if self.num_vertices != other.num_vertices {
            return (0..n).flat_map(|i| (0..n).map(move |j| (i, j))).collect();
        }

        self.weights
            .iter()
            .zip(other.weights.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(index, _)| (index / n, index % n))
            .collect()
    }
}

impl Serialize for DistanceMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<Vec<Option<Weight>>> = (0..self.num_vertices)
            .map(|from| {
                self.row(from)
                    .iter()
                    .map(|&weight| (weight != INF).then_some(weight))
                    .collect()
            })
            .collect();
        rows.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DistanceMatrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<Option<Weight>>>::deserialize(deserializer)?;
        DistanceMatrix::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(|cell| cell.unwrap_or(INF)).collect())
                .collect(),
        )
        .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for from in 0..self.num_vertices {
            for &weight in self.row(from) {
                if weight == INF {
                    write!(f, "{:<10}", "INF")?;
                } else {
                    write!(f, "{:<10}", weight)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.num_vertices).map(|from| self.row(from)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_rejects_non_square() {
        let result = DistanceMatrix::from_rows(vec![vec![0, 1], vec![1]]);

        assert!(matches!(
            result,
            Err(ApspError::NonSquareMatrix {
                row: 1,
                len: 1,
                expected: 2
            })
        ));
    }

    #[test]
    fn test_json_uses_null_for_inf() {
        let matrix = DistanceMatrix::from_json("[[0, null], [4, 0]]").unwrap();

        assert_eq!(matrix.get(0, 1), INF);
        assert_eq!(matrix.get(1, 0), 4);
        assert_eq!(serde_json::to_string(&matrix).unwrap(), "[[0,null],[4,0]]");
    }

    #[test]
    fn test_display_pads_cells() {
        let matrix = DistanceMatrix::from_rows(vec![vec![0, INF], vec![12, 0]]).unwrap();

        assert_eq!(
            matrix.to_string(),
            "0         INF       \n12        0         \n"
        );
    }

    #[test]
    fn test_mismatched_cells() {
        let a = DistanceMatrix::from_rows(vec![vec![0, 1], vec![2, 0]]).unwrap();
        let b = DistanceMatrix::from_rows(vec![vec![0, 1], vec![3, 0]]).unwrap();

        assert_eq!(a.mismatched_cells(&b), vec![(1, 0)]);
        assert!(a.mismatched_cells(&a.clone()).is_empty());
        assert_eq!(a.mismatched_cells(&DistanceMatrix::new(0)).len(), 4);
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = DistanceMatrix::from_rows(vec![]).unwrap();

        assert!(matrix.is_empty());
        assert_eq!(matrix.to_string(), "");
        assert_eq!(format!("{:?}", matrix), "[]");
    }
}
