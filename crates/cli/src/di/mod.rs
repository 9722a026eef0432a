mod target;

use dnsload_application::use_cases::{LoadQueriesUseCase, RunLoadTestUseCase};
use dnsload_domain::Config;
use dnsload_infrastructure::dns::{create_transport, HickoryExchange};
use dnsload_infrastructure::input::CsvQuerySource;
use std::sync::Arc;
use tracing::{info, warn};

pub use target::resolve_server;

pub struct UseCases {
    pub load_queries: Arc<LoadQueriesUseCase>,
    pub run_load_test: Arc<RunLoadTestUseCase>,
}

impl UseCases {
    pub async fn new(config: &Config, input: &str) -> anyhow::Result<Self> {
        let server_addr = resolve_server(&config.run.server).await?;
        let transport = create_transport(config.run.protocol, server_addr);

        info!(
            server = %transport.server_addr(),
            protocol = transport.protocol_name(),
            timeout_ms = config.run.timeout_ms,
            "DNS transport ready"
        );

        if config.run.delay_ms == 0 {
            warn!("Delay is 0 - clients will send queries back to back and may overload the target");
        }

        let exchange = Arc::new(HickoryExchange::new(transport, config.run.timeout()));
        let source = Arc::new(CsvQuerySource::new(input));

        Ok(Self {
            load_queries: Arc::new(LoadQueriesUseCase::new(source)),
            run_load_test: Arc::new(RunLoadTestUseCase::new(exchange, config.run.clone())),
        })
    }
}
