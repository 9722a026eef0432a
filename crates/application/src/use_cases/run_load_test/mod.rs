mod worker;

use crate::ports::DnsExchangePort;
use crate::services::{StartGate, StopSignal};
use dnsload_domain::{DomainError, QueryRecord, RunConfig, RunMode, RunReport, Statistic};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, info};
use worker::LoadWorker;

/// Drives one complete load-test run.
///
/// Spawns `clients` workers over the shared query list, releases them
/// together, stops them after the configured duration (fixed-time mode) and
/// collects exactly one finalized [`Statistic`] from each.
pub struct RunLoadTestUseCase {
    exchange: Arc<dyn DnsExchangePort>,
    config: Arc<RunConfig>,
}

impl RunLoadTestUseCase {
    pub fn new(exchange: Arc<dyn DnsExchangePort>, config: RunConfig) -> Self {
        Self {
            exchange,
            config: Arc::new(config),
        }
    }

    /// Runs the test to completion.
    ///
    /// `stop` may also be triggered from outside (e.g. on Ctrl-C) to end a
    /// fixed-time run early. Fixed-work runs ignore it.
    pub async fn execute(
        &self,
        queries: Arc<[QueryRecord]>,
        stop: StopSignal,
    ) -> Result<RunReport, DomainError> {
        if queries.is_empty() {
            return Err(DomainError::EmptyQueryList);
        }
        let clients = self.config.clients;
        if clients == 0 {
            return Err(DomainError::NoClients);
        }
        let mode = self.config.mode();

        let start = StartGate::new();
        let (stats_tx, mut stats_rx) = mpsc::channel::<Statistic>(clients);

        for id in 0..clients {
            let worker = LoadWorker {
                id,
                exchange: Arc::clone(&self.exchange),
                queries: Arc::clone(&queries),
                config: Arc::clone(&self.config),
                start: start.clone(),
                stop: stop.clone(),
            };
            let stats_tx = stats_tx.clone();
            tokio::spawn(async move {
                let stats = worker.run().await;
                if stats_tx.send(stats).await.is_err() {
                    debug!(worker = id, "Result receiver dropped, discarding statistics");
                }
            });
        }
        drop(stats_tx);

        start.release();
        let started = Instant::now();
        info!(
            clients,
            queries = queries.len(),
            mode = ?mode,
            delay_ms = self.config.delay_ms,
            validate = self.config.validate,
            "Load test started"
        );

        if let RunMode::FixedTime(Some(limit)) = mode {
            tokio::select! {
                _ = tokio::time::sleep(limit) => {
                    debug!(duration_ms = limit.as_millis() as u64, "Run duration elapsed, signalling stop");
                }
                _ = stop.triggered() => {
                    info!("Stop requested before run duration elapsed");
                }
            }
            stop.trigger();
        }

        let mut detail = Vec::with_capacity(clients);
        while detail.len() < clients {
            match stats_rx.recv().await {
                Some(stats) => detail.push(stats),
                None => {
                    return Err(DomainError::WorkerLost {
                        expected: clients,
                        missing: clients - detail.len(),
                    })
                }
            }
        }
        let elapsed = started.elapsed();

        let report = RunReport::new(elapsed, detail);
        info!(
            duration_ms = report.duration_ms,
            qps = report.qps,
            success = report.summary.success,
            errors = report.summary.errors,
            "Load test finished"
        );

        Ok(report)
    }
}
