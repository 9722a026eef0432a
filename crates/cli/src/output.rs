//! Report rendering for stdout.

use dnsload_domain::{RunReport, Statistic};
use std::fmt::Write;

const RULE: &str = "--------------------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render(report: &RunReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Text => Ok(render_text(report)),
    }
}

fn render_text(report: &RunReport) -> String {
    let mut out = String::new();
    let summary = &report.summary;

    let _ = writeln!(out, "Client Results");
    for (client, stat) in report.detail.iter().enumerate() {
        let _ = writeln!(out, "  client {:>3}: {}", client, stat_line(stat));
    }
    let _ = writeln!(out, "Overall Results");
    let _ = writeln!(out, "  {}", stat_line(summary));

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Result Summary");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  Errors: {}", summary.errors);
    let _ = writeln!(out, "  Noanswer: {}", summary.no_answer);
    let _ = writeln!(out, "  Success: {}", summary.success);
    let _ = writeln!(out, "  Verified: {}", summary.verified);
    let _ = writeln!(out, "  Incorrect: {}", summary.incorrect);
    let _ = writeln!(out, "  QPS: {:.6}", report.qps);
    let _ = writeln!(out, "  RTT-min: {}", summary.rtt_min);
    let _ = writeln!(out, "  RTT-max: {}", summary.rtt_max);
    let _ = writeln!(out, "  RTT-avg: {}", summary.rtt_avg);
    let _ = writeln!(out, "  Test duration(ms): {}", report.duration_ms);

    out
}

fn stat_line(stat: &Statistic) -> String {
    format!(
        "errors={} noanswer={} success={} verified={} incorrect={} rtt_total={} rtt_min={} rtt_max={} rtt_avg={}",
        stat.errors,
        stat.no_answer,
        stat.success,
        stat.verified,
        stat.incorrect,
        stat.rtt_total,
        stat.rtt_min,
        stat.rtt_max,
        stat.rtt_avg,
    )
}
