use std::path::Path;

use anyhow::Context;
use apsp_core::{
    distance_matrix::DistanceMatrix, graph_source::generate_random_graph, params::GraphParams,
};
use rand::{SeedableRng, rngs::SmallRng};
use tracing::info;

/// Reads a matrix from a JSON file of rows, `null` marking a missing edge.
pub fn read_graph(path: &Path) -> Result<DistanceMatrix, anyhow::Error> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let matrix = DistanceMatrix::from_json(&json)
        .with_context(|| format!("Invalid distance matrix in {}", path.display()))?;

    info!(
        "Loaded graph with {} vertices from {}",
        matrix.num_vertices(),
        path.display()
    );

    Ok(matrix)
}

pub fn random_graph(
    params: &GraphParams,
    seed: Option<u64>,
) -> Result<DistanceMatrix, anyhow::Error> {
    let seed = seed.unwrap_or_else(rand::random);
    info!("Generating graph with {} vertices, seed {}", params.vertices, seed);

    let mut rng = SmallRng::seed_from_u64(seed);
    Ok(generate_random_graph(params, &mut rng)?)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use apsp_core::constants::INF;

    use super::*;

    #[test]
    fn test_read_canonical_graph() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../demos/canonical_graph.json");

        let graph = read_graph(&path).unwrap();

        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.get(0, 2), INF);
        assert_eq!(graph.get(3, 2), 2);
    }

    #[test]
    fn test_missing_file() {
        assert!(read_graph(Path::new("does/not/exist.json")).is_err());
    }

    #[test]
    fn test_seeded_graph_is_reproducible() {
        let params = GraphParams::default();

        assert_eq!(
            random_graph(&params, Some(9)).unwrap(),
            random_graph(&params, Some(9)).unwrap()
        );
    }
}
