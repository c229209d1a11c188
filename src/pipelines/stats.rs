use std::time::{Duration, Instant};

/// Statistics for one scoring run (single line, batch, or annotated file).
#[derive(Debug, Clone)]
pub struct PipelineStats {
    /// Total execution time.
    pub total_time: Duration,
    /// Number of items processed.
    pub items_processed: usize,
}

impl PipelineStats {
    /// Create a new stats tracker (call at start of operation).
    pub(crate) fn start() -> PipelineStatsBuilder {
        PipelineStatsBuilder {
            start_time: Instant::now(),
        }
    }

    /// Items per second, or `0.0` when no time elapsed.
    pub fn items_per_second(&self) -> f64 {
        let secs = self.total_time.as_secs_f64();
        if secs > 0.0 {
            self.items_processed as f64 / secs
        } else {
            0.0
        }
    }
}

/// Builder for PipelineStats - tracks timing from creation to finalize.
pub(crate) struct PipelineStatsBuilder {
    start_time: Instant,
}

impl PipelineStatsBuilder {
    /// Finalize stats with the number of items processed.
    pub fn finish(self, items_processed: usize) -> PipelineStats {
        PipelineStats {
            total_time: self.start_time.elapsed(),
            items_processed,
        }
    }
}
