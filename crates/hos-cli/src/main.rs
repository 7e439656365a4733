use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use hos_config::HosFileConfig;
use hos_core::HosStatus;
use hos_runtime::tracing_init::init_tracing;
use hos_runtime::{Clock, ComplianceMonitor, JsonlEventSource, SystemClock, VirtualClock};

mod as_of;

#[derive(Parser)]
#[command(name = "hos", about = "Hours-of-service compliance engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the compliance snapshot as JSON
    Eval(EvalArgs),
    /// Summarise alerts and exit non-zero on any violation
    Check(EvalArgs),
}

#[derive(Args)]
struct EvalArgs {
    /// Path to hos.toml (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// JSON Lines duty-status event log
    #[arg(short, long)]
    events: PathBuf,
    /// Driver to evaluate; every driver in the log when omitted
    #[arg(short, long)]
    driver: Option<String>,
    /// Evaluation time: epoch millis or RFC 3339 (default: now)
    #[arg(long)]
    as_of: Option<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Eval(args) => {
            let snapshots = run(&args)?;
            let json = match (&args.driver, snapshots.as_slice()) {
                (Some(_), [(_, status)]) => serde_json::to_string_pretty(status)?,
                _ => {
                    let by_driver: BTreeMap<&str, &HosStatus> =
                        snapshots.iter().map(|(d, s)| (d.as_str(), s)).collect();
                    serde_json::to_string_pretty(&by_driver)?
                }
            };
            println!("{json}");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check(args) => {
            let snapshots = run(&args)?;
            for (driver, status) in &snapshots {
                for alert in &status.alerts {
                    eprintln!("{driver}: {} {}", alert.severity, alert.message);
                }
            }
            let violating = snapshots.iter().filter(|(_, s)| !s.is_compliant()).count();
            eprintln!(
                "checked {} driver(s): {violating} with violations",
                snapshots.len()
            );
            Ok(if violating == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn run(args: &EvalArgs) -> Result<Vec<(String, HosStatus)>> {
    let (file_config, base_dir) = match &args.config {
        Some(path) => {
            let path = path
                .canonicalize()
                .map_err(|e| anyhow::anyhow!("config path '{}': {e}", path.display()))?;
            let config = HosFileConfig::load(&path)?;
            let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
            (config, base_dir)
        }
        None => (HosFileConfig::default(), std::env::current_dir()?),
    };
    let _guard = init_tracing(&file_config.logging, &base_dir)?;

    let source = JsonlEventSource::load(&args.events).map_err(|e| anyhow::anyhow!("{e}"))?;
    tracing::info!(
        domain = "sys",
        events = source.event_count(),
        file = %args.events.display(),
        "evaluating event log"
    );

    let driver = args.driver.as_deref();
    match &args.as_of {
        Some(raw) => {
            let clock = VirtualClock::starting_at(as_of::parse_as_of(raw)?);
            let monitor = ComplianceMonitor::new(file_config.hos, source, clock)
                .map_err(|e| anyhow::anyhow!("{e}"))?;
            evaluate(&monitor, driver)
        }
        None => {
            let monitor = ComplianceMonitor::new(file_config.hos, source, SystemClock)
                .map_err(|e| anyhow::anyhow!("{e}"))?;
            evaluate(&monitor, driver)
        }
    }
}

fn evaluate<C: Clock>(
    monitor: &ComplianceMonitor<JsonlEventSource, C>,
    driver: Option<&str>,
) -> Result<Vec<(String, HosStatus)>> {
    match driver {
        Some(driver) => {
            let status = monitor.snapshot(driver).map_err(|e| {
                anyhow::anyhow!("cannot determine compliance for {driver:?}: {e}")
            })?;
            Ok(vec![(driver.to_string(), status)])
        }
        None => monitor
            .snapshot_all()
            .map_err(|e| anyhow::anyhow!("cannot determine compliance: {e}")),
    }
}
