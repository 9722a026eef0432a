//! Run-wide synchronization points shared by the orchestrator and its
//! workers.

use tokio_util::sync::CancellationToken;

/// One-shot broadcast gate that holds every worker until the whole pool
/// has been spawned.
///
/// `release` wakes all current waiters at once; waiting on a released gate
/// returns immediately.
#[derive(Debug, Clone, Default)]
pub struct StartGate {
    token: CancellationToken,
}

impl StartGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn release(&self) {
        self.token.cancel();
    }

    pub fn is_released(&self) -> bool {
        self.token.is_cancelled()
    }

    pub async fn wait(&self) {
        self.token.cancelled().await;
    }
}

/// Cooperative stop flag for fixed-time runs.
///
/// Workers poll it between queries; triggering it never interrupts a query in
/// flight. Triggering more than once is harmless.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    token: CancellationToken,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&self) {
        self.token.cancel();
    }

    pub fn is_triggered(&self) -> bool {
        self.token.is_cancelled()
    }

    pub async fn triggered(&self) {
        self.token.cancelled().await;
    }
}
