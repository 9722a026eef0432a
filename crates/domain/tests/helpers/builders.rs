#![allow(dead_code)]
use dnsload_domain::Statistic;

/// Builds a finalized statistic from a list of successful latencies.
pub struct StatisticBuilder {
    stat: Statistic,
}

impl StatisticBuilder {
    pub fn new() -> Self {
        Self {
            stat: Statistic::new(),
        }
    }

    pub fn successes(mut self, rtts: &[i64]) -> Self {
        for rtt in rtts {
            self.stat.record_success(*rtt);
        }
        self
    }

    pub fn errors(mut self, count: u64) -> Self {
        for _ in 0..count {
            self.stat.record_error();
        }
        self
    }

    pub fn no_answers(mut self, count: u64) -> Self {
        for _ in 0..count {
            self.stat.record_no_answer();
        }
        self
    }

    pub fn verified(mut self, count: u64) -> Self {
        for _ in 0..count {
            self.stat.record_verified();
        }
        self
    }

    pub fn incorrect(mut self, count: u64) -> Self {
        for _ in 0..count {
            self.stat.record_incorrect();
        }
        self
    }

    pub fn build(self) -> Statistic {
        self.stat.finalize()
    }
}
