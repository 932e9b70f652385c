use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use intern_attendance::api::{AppState, create_router};
use intern_attendance::calculation::{
    absence_limit_for_working_days, alert_level, classify_severity, count_working_days,
};
use intern_attendance::config::ConfigLoader;
use intern_attendance::error::AttendanceError;
use intern_attendance::models::EnrollmentInterval;
use intern_attendance::telemetry::{self, TelemetryError};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Attendance(#[from] AttendanceError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("invalid listen address '{address}'")]
    Address {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "intern-attendance",
    about = "Absence limits and activity reports for internship management",
    version
)]
struct Cli {
    /// Directory holding calendar.yaml and roster.yaml
    #[arg(long, global = true, default_value = "./config/default")]
    config: PathBuf,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the absence limit for an interval as JSON
    Limit(LimitArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// Port to bind the HTTP server to
    #[arg(long, default_value_t = 3000)]
    port: u16,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Args, Debug)]
struct LimitArgs {
    /// First day of the interval (YYYY-MM-DD)
    #[arg(long)]
    start: String,
    /// Last day of the interval (YYYY-MM-DD)
    #[arg(long)]
    end: String,
    /// Absences taken so far
    #[arg(long, default_value_t = 0)]
    absences: u32,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;

    let config = ConfigLoader::load(&cli.config)?;
    info!(
        config = %cli.config.display(),
        calendar = %config.calendar().name,
        holidays = config.holidays().len(),
        "Configuration loaded"
    );

    match cli.command.unwrap_or_else(|| Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => run_server(config, args).await,
        Command::Limit(args) => run_limit(&config, args),
    }
}

async fn run_server(config: ConfigLoader, args: ServeArgs) -> Result<(), AppError> {
    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    let address = format!("{}:{}", args.host, args.port);
    let addr: SocketAddr = address
        .parse()
        .map_err(|source| AppError::Address { address, source })?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "Attendance service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_limit(config: &ConfigLoader, args: LimitArgs) -> Result<(), AppError> {
    let interval = EnrollmentInterval::parse(&args.start, &args.end)?;
    let working_days = count_working_days(&interval, config.holidays());
    let absence_limit = absence_limit_for_working_days(working_days.working_days);
    let severity = classify_severity(args.absences, absence_limit);

    let output = serde_json::json!({
        "interval": interval,
        "working_days": working_days,
        "absence_limit": absence_limit,
        "severity": severity,
        "alert": alert_level(severity.percentage),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
