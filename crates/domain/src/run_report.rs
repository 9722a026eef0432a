use crate::Statistic;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Everything a finished run hands to the report renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    #[serde(rename = "Duration")]
    pub duration_ms: u64,
    #[serde(rename = "QPS")]
    pub qps: f64,
    #[serde(rename = "Summary")]
    pub summary: Statistic,
    /// Per-worker results in the order they were collected.
    #[serde(rename = "Detail")]
    pub detail: Vec<Statistic>,
}

impl RunReport {
    pub fn new(elapsed: Duration, detail: Vec<Statistic>) -> Self {
        let summary = Statistic::aggregate(&detail);
        let secs = elapsed.as_secs_f64();
        let qps = if secs > 0.0 {
            summary.success as f64 / secs
        } else {
            0.0
        };

        Self {
            duration_ms: elapsed.as_millis() as u64,
            qps,
            summary,
            detail,
        }
    }
}
