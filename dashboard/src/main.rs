use anyhow::Context;
use bridge::bridge::DashboardBridge;
use clap::Parser;
use geocore::analysis::{AnalysisClient, HttpChatTransport};
use geocore::prelude::ModuleKind;
use session::config::{api_key_from_env, DashboardConfig};
use session::orchestrator::PageOrchestrator;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;

mod bridge;
mod session;

#[derive(Parser)]
#[command(author, version, about = "GeoInsight dashboard driver")]
struct Args {
    /// Render each module once and append a plain-text report
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a dashboard config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the configured bridge port
    #[arg(long)]
    port: Option<u16>,
    /// Keep the HTTP bridge alive for incoming dashboard requests
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = if let Some(path) = args.config {
        DashboardConfig::load(path)?
    } else {
        DashboardConfig::default()
    };
    if let Some(port) = args.port {
        config.bind_port = port;
    }

    let api_key = api_key_from_env()?;
    let transport = HttpChatTransport::new(
        config.endpoint.clone(),
        api_key,
        Duration::from_secs(config.request_timeout_secs),
    )
    .context("building analysis transport")?;
    let client = Arc::new(AnalysisClient::new(
        transport,
        config.model.clone(),
        config.max_output_tokens,
    ));
    let orchestrator = Arc::new(PageOrchestrator::new());
    let dashboard_bridge =
        DashboardBridge::serve(orchestrator.clone(), client.clone(), config.bind_port);

    if args.offline {
        let mut report_lines = Vec::new();
        for kind in ModuleKind::ALL {
            if let Some(view) = orchestrator.dispatch(kind) {
                println!(
                    "Offline render -> {}: charts {}, notes {}",
                    view.title,
                    view.charts.len(),
                    view.notes.len()
                );
                report_lines.push(format!(
                    "module={} charts={} notes={}\n",
                    kind.slug(),
                    view.charts.len(),
                    view.notes.len()
                ));
            }
        }

        let report_path = PathBuf::from("tools/data/offline_dashboard.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        for line in &report_lines {
            file.write_all(line.as_bytes())?;
        }
        dashboard_bridge.publish_status("Offline dashboard report ready.");
    }
    if args.serve {
        dashboard_bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for signal handling")?;
        runtime.block_on(async {
            signal::ctrl_c().await.context("awaiting Ctrl+C to exit")?;
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
