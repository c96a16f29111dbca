use crate::{constants::INF, distance_matrix::DistanceMatrix};

//  0 --3--> 1, 0 --5--> 3
//  1 --2--> 0, 1 --4--> 3
//  2 --1--> 1
//  3 --2--> 2
pub fn canonical_graph() -> DistanceMatrix {
    DistanceMatrix::from_rows(vec![
        vec![0, 3, INF, 5],
        vec![2, 0, INF, 4],
        vec![INF, 1, 0, INF],
        vec![INF, INF, 2, 0],
    ])
    .unwrap()
}

pub fn canonical_shortest_paths() -> DistanceMatrix {
    DistanceMatrix::from_rows(vec![
        vec![0, 3, 7, 5],
        vec![2, 0, 6, 4],
        vec![3, 1, 0, 5],
        vec![5, 3, 2, 0],
    ])
    .unwrap()
}

/// `0 -> 1 -> ... -> n-1`, every edge of weight 1, zero diagonal.
pub fn chain_graph(n: usize) -> DistanceMatrix {
    let mut matrix = DistanceMatrix::new(n);
    for vertex in 0..n {
        matrix.set(vertex, vertex, 0);
        if vertex + 1 < n {
            matrix.set(vertex, vertex + 1, 1);
        }
    }
    matrix
}
