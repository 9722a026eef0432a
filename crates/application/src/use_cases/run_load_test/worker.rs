use crate::ports::DnsExchangePort;
use crate::services::{AnswerValidator, StartGate, StopSignal, Validation};
use dnsload_domain::{QueryRecord, RunConfig, RunMode, Statistic};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// One simulated client. Owns its statistic outright until it hands the
/// finalized snapshot back.
pub(super) struct LoadWorker {
    pub id: usize,
    pub exchange: Arc<dyn DnsExchangePort>,
    pub queries: Arc<[QueryRecord]>,
    pub config: Arc<RunConfig>,
    pub start: StartGate,
    pub stop: StopSignal,
}

impl LoadWorker {
    pub async fn run(self) -> Statistic {
        let mode = self.config.mode();
        let delay = self.config.delay();
        let mut stats = Statistic::new();

        self.start.wait().await;

        'passes: loop {
            for query in self.queries.iter() {
                if !mode.is_fixed_work() && self.stop.is_triggered() {
                    break 'passes;
                }
                self.issue(query, &mut stats).await;
                self.pause(mode, delay).await;
            }
            if mode.is_fixed_work() {
                break;
            }
        }

        let stats = stats.finalize();
        debug!(
            worker = self.id,
            attempted = stats.attempted(),
            success = stats.success,
            "Worker finished"
        );
        stats
    }

    async fn issue(&self, query: &QueryRecord, stats: &mut Statistic) {
        match self.exchange.exchange(query).await {
            Err(e) => {
                debug!(
                    worker = self.id,
                    name = %query.name,
                    record_type = %query.record_type,
                    error = %e,
                    "Failure for DNS query"
                );
                stats.record_error();
            }
            Ok(outcome) if outcome.answers.is_empty() => {
                debug!(
                    worker = self.id,
                    name = %query.name,
                    record_type = %query.record_type,
                    "No answers found for query"
                );
                stats.record_no_answer();
            }
            Ok(outcome) => {
                let rtt_ms = outcome.rtt.as_millis() as i64;
                debug!(
                    worker = self.id,
                    name = %query.name,
                    record_type = %query.record_type,
                    answers = outcome.answers.len(),
                    rtt_ms,
                    "Successful answers for query"
                );
                stats.record_success(rtt_ms);

                if self.config.validate {
                    match AnswerValidator::validate(query, &outcome.answers) {
                        Validation::Verified => stats.record_verified(),
                        Validation::Incorrect { observed } => {
                            stats.record_incorrect();
                            warn!(
                                worker = self.id,
                                name = %query.name,
                                record_type = %query.record_type,
                                first_answer = %observed,
                                expected = ?query.expected,
                                "Answer does not match expected response"
                            );
                        }
                    }
                }
            }
        }
    }

    /// Inter-query delay. In fixed-time mode a stop cuts the wait short;
    /// with no delay the task still yields so timers keep firing under load.
    async fn pause(&self, mode: RunMode, delay: Duration) {
        if delay.is_zero() {
            tokio::task::yield_now().await;
            return;
        }

        if mode.is_fixed_work() {
            tokio::time::sleep(delay).await;
        } else {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = self.stop.triggered() => {}
            }
        }
    }
}
