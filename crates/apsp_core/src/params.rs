use crate::{
    constants::{
        DEFAULT_INF_THRESHOLD, DEFAULT_MAX_WEIGHT, DEFAULT_MIN_WEIGHT, DEFAULT_VERTICES, INF,
    },
    distance_matrix::Weight,
    error::ApspError,
};

#[derive(Clone, Debug)]
pub enum Threads {
    Single,
    Auto,
    Multi(usize),
}

impl Threads {
    pub fn number_of_threads(&self) -> usize {
        match self {
            Threads::Single => 1,
            Threads::Multi(num) => (*num).max(1),
            Threads::Auto => std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApspParams {
    pub threads: Threads,

    /// Pivots per range for the chunked strategy. `None` derives it from the
    /// pivot count and the number of threads.
    pub chunk_size: Option<usize>,
}

impl Default for ApspParams {
    fn default() -> Self {
        Self {
            threads: Threads::Auto,
            chunk_size: None,
        }
    }
}

impl ApspParams {
    pub fn validate(&self) -> Result<(), ApspError> {
        if self.chunk_size == Some(0) {
            return Err(ApspError::InvalidParams(
                "chunk size must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Shape of a randomly generated graph.
///
/// Every cell, the diagonal included, is drawn uniformly from
/// `[min_weight, max_weight]`. Draws at or below `inf_threshold` become [`INF`].
#[derive(Clone, Debug)]
pub struct GraphParams {
    pub vertices: usize,
    pub min_weight: Weight,
    pub max_weight: Weight,
    pub inf_threshold: Weight,
    pub zero_diagonal: bool,
}

impl Default for GraphParams {
    fn default() -> Self {
        Self {
            vertices: DEFAULT_VERTICES,
            min_weight: DEFAULT_MIN_WEIGHT,
            max_weight: DEFAULT_MAX_WEIGHT,
            inf_threshold: DEFAULT_INF_THRESHOLD,
            zero_diagonal: false,
        }
    }
}

impl GraphParams {
    pub fn validate(&self) -> Result<(), ApspError> {
        if self.max_weight == 0 {
            return Err(ApspError::InvalidParams(
                "max weight must be greater than 0".to_owned(),
            ));
        }

        if self.min_weight > self.max_weight {
            return Err(ApspError::InvalidParams(format!(
                "min weight {} is greater than max weight {}",
                self.min_weight, self.max_weight
            )));
        }

        // Two finite edges must always sum below the sentinel.
        let fits = self
            .max_weight
            .checked_mul(2)
            .is_some_and(|double| double < INF);
        if !fits {
            return Err(ApspError::InvalidParams(format!(
                "max weight {} is too close to INF",
                self.max_weight
            )));
        }

        Ok(())
    }
}
