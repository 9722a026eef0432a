use clap::Parser;
use dnsload_application::services::StopSignal;
use dnsload_domain::{CliOverrides, TransportProtocol};
use output::OutputFormat;
use tracing::info;

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "dnsload")]
#[command(version)]
#[command(about = "dnsload - concurrent DNS load and answer validation tester")]
#[command(
    after_help = "Output: per-client and overall statistics. Errors, Noanswer and Success count \
                  queries; Verified and Incorrect count validated answers; RTT values are in \
                  milliseconds, -1 when no query succeeded."
)]
struct Cli {
    /// CSV query file: <type>,<name>[,<expected>...]
    #[arg(short = 'i', long, value_name = "FILE")]
    input: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Number of concurrent clients
    #[arg(long)]
    clients: Option<usize>,

    /// Target DNS server (ip:port or host:port)
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Test duration in ms; negative runs the query list once, 0 runs until Ctrl-C
    #[arg(short = 'd', long, allow_hyphen_values = true)]
    duration: Option<i64>,

    /// Delay between a client's queries in ms
    #[arg(long)]
    delay: Option<u64>,

    /// Validate the first answer against the expected values
    #[arg(long)]
    validate: bool,

    /// Per-query timeout in ms
    #[arg(long)]
    timeout: Option<u64>,

    /// Transport protocol (udp, tcp)
    #[arg(long)]
    protocol: Option<TransportProtocol>,

    /// Output in JSON format
    #[arg(long)]
    json: bool,

    /// Debug logging, same as --log-level debug
    #[arg(long)]
    debug: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        Some("debug".to_string())
    } else {
        cli.log_level.clone()
    };

    // Load configuration
    let cli_overrides = CliOverrides {
        clients: cli.clients,
        server: cli.server.clone(),
        duration_ms: cli.duration,
        delay_ms: cli.delay,
        validate: cli.validate,
        timeout_ms: cli.timeout,
        protocol: cli.protocol,
        log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    // Initialize logging
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        clients = config.run.clients,
        server = %config.run.server,
        mode = ?config.run.mode(),
        delay_ms = config.run.delay_ms,
        validate = config.run.validate,
        "Configuration loaded"
    );

    let use_cases = di::UseCases::new(&config, &cli.input).await?;
    let queries = use_cases.load_queries.execute().await?;

    let stop = StopSignal::new();
    if !config.run.mode().is_fixed_work() {
        bootstrap::stop_on_ctrl_c(stop.clone());
    }

    let report = use_cases.run_load_test.execute(queries, stop).await?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    println!("{}", output::render(&report, format)?);

    Ok(())
}
