/// Controls how filtering operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Pick serial or parallel execution based on the number of pixels.
    ///
    /// Regions of at least 100k pixels are processed in parallel on the
    /// global Rayon thread pool, smaller ones on the current thread.
    #[default]
    Auto,

    /// Process rows in parallel on the global Rayon thread pool.
    Parallel,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small regions, debugging, or when the overhead of
    /// parallelization outweighs the benefits.
    Serial,
}

impl ExecutionStrategy {
    /// Pixel count at which [`ExecutionStrategy::Auto`] switches to parallel execution.
    pub const AUTO_PARALLEL_THRESHOLD: usize = 100_000;

    /// Whether an operation over `num_pixels` pixels should run in parallel.
    pub fn is_parallel(&self, num_pixels: usize) -> bool {
        match self {
            Self::Auto => num_pixels >= Self::AUTO_PARALLEL_THRESHOLD,
            Self::Parallel => true,
            Self::Serial => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_strategies() {
        assert!(ExecutionStrategy::Parallel.is_parallel(1));
        assert!(!ExecutionStrategy::Serial.is_parallel(usize::MAX));
    }

    #[test]
    fn test_auto_threshold() {
        let auto = ExecutionStrategy::default();
        assert_eq!(auto, ExecutionStrategy::Auto);
        assert!(!auto.is_parallel(ExecutionStrategy::AUTO_PARALLEL_THRESHOLD - 1));
        assert!(auto.is_parallel(ExecutionStrategy::AUTO_PARALLEL_THRESHOLD));
    }
}
