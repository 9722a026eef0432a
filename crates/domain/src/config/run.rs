use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Immutable settings for one load-test run.
///
/// Built once at startup (file values, then command-line overrides) and shared
/// read-only by the orchestrator and every worker.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunConfig {
    /// Number of concurrent clients.
    #[serde(default = "default_clients")]
    pub clients: usize,

    /// Target resolver, `ip:port` or `host:port`.
    #[serde(default)]
    pub server: String,

    /// Run length in milliseconds. Negative means a single pass over the
    /// query list; zero means run until interrupted.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: i64,

    /// Pause after every query, per client.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Check the first answer of each response against the expected set.
    #[serde(default)]
    pub validate: bool,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default)]
    pub protocol: TransportProtocol,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            clients: default_clients(),
            server: String::new(),
            duration_ms: default_duration_ms(),
            delay_ms: default_delay_ms(),
            validate: false,
            timeout_ms: default_timeout_ms(),
            protocol: TransportProtocol::default(),
        }
    }
}

impl RunConfig {
    pub fn mode(&self) -> RunMode {
        RunMode::from_duration_ms(self.duration_ms)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// How a run decides when to stop. Selected by the sign of the configured
/// duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Each worker makes exactly one pass over the query list; the stop
    /// signal is never consulted.
    FixedWork,
    /// Workers loop over the query list until stopped. `None` means no timer:
    /// only an external interrupt ends the run.
    FixedTime(Option<Duration>),
}

impl RunMode {
    pub fn from_duration_ms(duration_ms: i64) -> Self {
        match duration_ms {
            ms if ms < 0 => RunMode::FixedWork,
            0 => RunMode::FixedTime(None),
            ms => RunMode::FixedTime(Some(Duration::from_millis(ms as u64))),
        }
    }

    pub fn is_fixed_work(&self) -> bool {
        matches!(self, RunMode::FixedWork)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportProtocol {
    #[default]
    Udp,
    Tcp,
}

impl TransportProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Udp => "udp",
            Self::Tcp => "tcp",
        }
    }
}

impl fmt::Display for TransportProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportProtocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "udp" => Ok(Self::Udp),
            "tcp" => Ok(Self::Tcp),
            _ => Err(format!("Unknown protocol '{}', expected udp or tcp", s)),
        }
    }
}

fn default_clients() -> usize {
    1
}

fn default_duration_ms() -> i64 {
    -1
}

fn default_delay_ms() -> u64 {
    100
}

fn default_timeout_ms() -> u64 {
    2000
}
