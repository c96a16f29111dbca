use crate::distance_matrix::Weight;

/// Sentinel for "no path known".
pub const INF: Weight = Weight::MAX;

pub const DEFAULT_VERTICES: usize = 5;

pub const DEFAULT_MIN_WEIGHT: Weight = 1;
pub const DEFAULT_MAX_WEIGHT: Weight = 20;

/// Draws at or below this value are replaced with [`INF`], roughly 10% of the
/// cells with the default weight range.
pub const DEFAULT_INF_THRESHOLD: Weight = 2;

/// Ranges per worker used by the chunked partitioner when no chunk size is given.
pub(crate) const RANGES_PER_THREAD: usize = 3;
