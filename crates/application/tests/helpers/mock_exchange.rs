#![allow(dead_code)]

use async_trait::async_trait;
use dnsload_application::ports::{DnsExchangePort, ExchangeOutcome};
use dnsload_application::services::StopSignal;
use dnsload_domain::{Answer, DomainError, QueryRecord};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum MockReply {
    Answers(Vec<Answer>),
    Empty,
    Fail,
    /// Panics inside the exchange, killing the worker task.
    Panic,
}

impl MockReply {
    pub fn a(addr: [u8; 4]) -> Self {
        let [a, b, c, d] = addr;
        MockReply::Answers(vec![Answer::A(Ipv4Addr::new(a, b, c, d))])
    }
}

/// Scriptable exchange: replies per query name, with a fixed reported RTT
/// and an optional real delay before answering.
pub struct MockExchange {
    default_reply: MockReply,
    replies: HashMap<String, MockReply>,
    reported_rtt: Duration,
    latency: Duration,
    stop_after: Option<(usize, StopSignal)>,
    calls: AtomicUsize,
    log: Mutex<Vec<String>>,
}

impl MockExchange {
    pub fn new(default_reply: MockReply) -> Self {
        Self {
            default_reply,
            replies: HashMap::new(),
            reported_rtt: Duration::from_millis(10),
            latency: Duration::ZERO,
            stop_after: None,
            calls: AtomicUsize::new(0),
            log: Mutex::new(Vec::new()),
        }
    }

    pub fn with_reply(mut self, name: &str, reply: MockReply) -> Self {
        self.replies.insert(name.to_string(), reply);
        self
    }

    pub fn with_rtt_ms(mut self, ms: u64) -> Self {
        self.reported_rtt = Duration::from_millis(ms);
        self
    }

    /// Actually waits this long inside every exchange.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Triggers `stop` while serving the `n`th call (1-based).
    pub fn stop_after(mut self, n: usize, stop: StopSignal) -> Self {
        self.stop_after = Some((n, stop));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsExchangePort for MockExchange {
    async fn exchange(&self, query: &QueryRecord) -> Result<ExchangeOutcome, DomainError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.log.lock().unwrap().push(query.name.to_string());

        if let Some((n, stop)) = &self.stop_after {
            if call == *n {
                stop.trigger();
            }
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let reply = self
            .replies
            .get(query.name.as_ref())
            .unwrap_or(&self.default_reply);

        match reply {
            MockReply::Answers(answers) => {
                Ok(ExchangeOutcome::new(answers.clone(), self.reported_rtt))
            }
            MockReply::Empty => Ok(ExchangeOutcome::new(vec![], self.reported_rtt)),
            MockReply::Fail => Err(DomainError::TransportTimeout {
                server: "mock".to_string(),
            }),
            MockReply::Panic => panic!("mock exchange panicked on {}", query.name),
        }
    }
}
