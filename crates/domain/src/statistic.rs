//! Per-worker counters and latency bookkeeping.
//!
//! Latencies are whole milliseconds. `rtt_min` and `rtt_max` hold
//! [`RTT_UNSET`] until the first successful sample; `rtt_avg` holds it until
//! [`Statistic::finalize`] runs and stays there when nothing succeeded.

use serde::{Deserialize, Serialize};

/// Sentinel for "no successful sample yet".
pub const RTT_UNSET: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistic {
    #[serde(rename = "Errors")]
    pub errors: u64,
    #[serde(rename = "Noanswer")]
    pub no_answer: u64,
    #[serde(rename = "Success")]
    pub success: u64,
    #[serde(rename = "Rtttotal")]
    pub rtt_total: i64,
    #[serde(rename = "Rttmin")]
    pub rtt_min: i64,
    #[serde(rename = "Rttmax")]
    pub rtt_max: i64,
    #[serde(rename = "Rttavg")]
    pub rtt_avg: i64,
    #[serde(rename = "Verified")]
    pub verified: u64,
    #[serde(rename = "Incorrect")]
    pub incorrect: u64,
}

impl Default for Statistic {
    fn default() -> Self {
        Self {
            errors: 0,
            no_answer: 0,
            success: 0,
            rtt_total: 0,
            rtt_min: RTT_UNSET,
            rtt_max: RTT_UNSET,
            rtt_avg: RTT_UNSET,
            verified: 0,
            incorrect: 0,
        }
    }
}

impl Statistic {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_error(&mut self) {
        self.errors += 1;
    }

    pub fn record_no_answer(&mut self) {
        self.no_answer += 1;
    }

    pub fn record_success(&mut self, rtt_ms: i64) {
        self.success += 1;
        self.update_min_max(rtt_ms);
        self.rtt_total += rtt_ms;
    }

    pub fn record_verified(&mut self) {
        self.verified += 1;
    }

    pub fn record_incorrect(&mut self) {
        self.incorrect += 1;
    }

    /// Sentinel-aware running min/max.
    pub fn update_min_max(&mut self, rtt_ms: i64) {
        if self.rtt_min == RTT_UNSET || rtt_ms < self.rtt_min {
            self.rtt_min = rtt_ms;
        }
        if rtt_ms > self.rtt_max {
            self.rtt_max = rtt_ms;
        }
    }

    /// Computes the average and freezes the snapshot.
    pub fn finalize(mut self) -> Self {
        self.rtt_avg = if self.success == 0 {
            RTT_UNSET
        } else {
            self.rtt_total / self.success as i64
        };
        self
    }

    pub fn attempted(&self) -> u64 {
        self.errors + self.no_answer + self.success
    }

    /// Folds finalized per-worker snapshots into one overall statistic.
    ///
    /// Workers that never succeeded carry `RTT_UNSET` in their min/max and are
    /// left out of the latency fold, so they cannot drag the overall minimum
    /// down to the sentinel. The average is recomputed from the summed totals
    /// rather than averaged across workers.
    pub fn aggregate<'a>(stats: impl IntoIterator<Item = &'a Statistic>) -> Self {
        let mut agg = Self::new();
        for s in stats {
            agg.errors += s.errors;
            agg.no_answer += s.no_answer;
            agg.success += s.success;
            agg.rtt_total += s.rtt_total;
            agg.verified += s.verified;
            agg.incorrect += s.incorrect;
            for rtt in [s.rtt_min, s.rtt_max] {
                if rtt != RTT_UNSET {
                    agg.update_min_max(rtt);
                }
            }
        }
        agg.finalize()
    }
}
