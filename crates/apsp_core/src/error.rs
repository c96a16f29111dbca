use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApspError {
    #[error("Row {row} has {len} columns, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
    #[error("Failed to build thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("A worker panicked while relaxing pivots: {0}")]
    WorkerPanic(String),
    #[error("Failed to spawn round thread")]
    Spawn(#[source] std::io::Error),
    #[error("Failed to decode distance matrix")]
    Decode(#[from] serde_json::Error),
}
