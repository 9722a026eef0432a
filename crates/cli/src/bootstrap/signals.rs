use dnsload_application::services::StopSignal;
use tracing::{info, warn};

/// Triggers `stop` on the first Ctrl-C.
pub fn stop_on_ctrl_c(stop: StopSignal) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupt received, stopping clients");
                stop.trigger();
            }
            Err(e) => warn!(error = %e, "Failed to listen for Ctrl-C"),
        }
    });
}
