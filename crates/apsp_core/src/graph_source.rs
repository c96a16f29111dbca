use rand::Rng;
use tracing::debug;

use crate::{
    constants::INF, distance_matrix::DistanceMatrix, error::ApspError, params::GraphParams,
};

/// Fills a matrix with independent uniform draws, see [`GraphParams`].
pub fn generate_random_graph<R: Rng>(
    params: &GraphParams,
    rng: &mut R,
) -> Result<DistanceMatrix, ApspError> {
    params.validate()?;

    let n = params.vertices;
    let mut matrix = DistanceMatrix::new(n);
    let mut missing_edges = 0;

    for from in 0..n {
        for to in 0..n {
            let weight = rng.random_range(params.min_weight..=params.max_weight);
            if weight <= params.inf_threshold {
                matrix.set(from, to, INF);
                missing_edges += 1;
            } else {
                matrix.set(from, to, weight);
            }
        }

        if params.zero_diagonal {
            matrix.set(from, from, 0);
        }
    }

    debug!(
        "Generated graph with {} vertices, {} missing edges",
        n, missing_edges
    );

    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;

    #[test]
    fn test_cells_are_in_range_or_inf() {
        let mut rng = SmallRng::seed_from_u64(7);
        let params = GraphParams {
            vertices: 30,
            ..Default::default()
        };

        let matrix = generate_random_graph(&params, &mut rng).unwrap();

        assert_eq!(matrix.num_vertices(), 30);
        assert!(
            matrix
                .as_slice()
                .iter()
                .all(|&w| w == INF || (3..=20).contains(&w))
        );

        // ~10% of 900 cells
        let missing = matrix.as_slice().iter().filter(|&&w| w == INF).count();
        assert!(missing > 30 && missing < 180, "missing = {missing}");
    }

    #[test]
    fn test_same_seed_same_graph() {
        let params = GraphParams::default();

        let a = generate_random_graph(&params, &mut SmallRng::seed_from_u64(42)).unwrap();
        let b = generate_random_graph(&params, &mut SmallRng::seed_from_u64(42)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_diagonal() {
        let params = GraphParams {
            vertices: 8,
            zero_diagonal: true,
            ..Default::default()
        };

        let matrix = generate_random_graph(&params, &mut SmallRng::seed_from_u64(1)).unwrap();

        assert!((0..8).all(|vertex| matrix.get(vertex, vertex) == 0));
    }

    #[test]
    fn test_invalid_params() {
        let params = GraphParams {
            min_weight: 30,
            ..Default::default()
        };

        assert!(generate_random_graph(&params, &mut SmallRng::seed_from_u64(1)).is_err());
    }
}
