//! Engine configuration

use std::num::NonZeroUsize;

/// Tunables for [`Engine`](super::Engine)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Partitions of the embedded scan
    pub workers: usize,
    /// Completions collected per walk direction
    pub completion_limit: usize,
    /// Completions listed in a transition message
    pub message_completions: usize,
}

impl EngineConfig {
    /// Default configuration with an explicit worker count
    ///
    /// A worker count of zero is treated as one.
    #[must_use]
    pub fn with_workers(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            workers: std::thread::available_parallelism().map_or(1, NonZeroUsize::get),
            completion_limit: 5,
            message_completions: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_hardware_parallelism() {
        let config = EngineConfig::default();
        assert!(config.workers >= 1);
        assert_eq!(config.completion_limit, 5);
        assert_eq!(config.message_completions, 3);
    }

    #[test]
    fn zero_workers_clamped() {
        assert_eq!(EngineConfig::with_workers(0).workers, 1);
        assert_eq!(EngineConfig::with_workers(8).workers, 8);
    }
}
