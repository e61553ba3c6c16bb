//! curvectl - Command Line Operations for Curve and Bell Editing
//!
//! # Commands
//!
//! - `curvectl eval --x <X>` - Evaluate a snapshot at one x
//! - `curvectl sample` - Fixed-grid samples across the snapshot domain
//! - `curvectl adaptive` - Error-bounded adaptive samples
//! - `curvectl bell-set --param <NAME> --value <V>` - Write one bell parameter
//! - `curvectl bell-drag --handle <ID> --x <X> --y <Y>` - Apply a bell handle drag
//! - `curvectl snapshot <add|move|remove|retag|reset>` - Edit a points file

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use curve_cli::commands::{self, snapshot::Edit};
use curve_cli::config::{build_config, CliArgs, CliConfig};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Curve and bell-filter editor CLI
#[derive(Parser, Debug)]
#[command(name = "curvectl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE", env = "CURVE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (json, table)
    #[arg(short, long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Where a read-only command takes its snapshot from
#[derive(Args, Debug)]
struct InputArgs {
    /// JSON points file
    #[arg(short, long, value_name = "FILE")]
    points: Option<PathBuf>,

    /// JSON bell parameters file
    #[arg(short, long, value_name = "FILE", conflicts_with = "points")]
    bell: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the snapshot at one x
    Eval {
        /// Query position
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Evaluate on an evenly spaced grid
    Sample {
        /// Number of samples (at least 2)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Sample densely where the function bends
    Adaptive {
        /// Inverse deviation tolerance
        #[arg(short, long)]
        sensitivity: Option<f64>,

        #[command(flatten)]
        input: InputArgs,
    },

    /// Write one bell parameter
    BellSet {
        /// Parameter name (centerX, centerY, leftRangeX, rightRangeX, curvature)
        #[arg(long)]
        param: String,

        /// New value, clamped into the valid range
        #[arg(long, allow_negative_numbers = true)]
        value: f64,

        /// JSON bell parameters file
        #[arg(short, long, value_name = "FILE")]
        bell: Option<PathBuf>,

        /// Print the handle points instead of the parameters
        #[arg(long)]
        emit_points: bool,
    },

    /// Apply a bell handle drag
    BellDrag {
        /// Handle id (bell_left_range, bell_right_range, bell_center, bell_curvature)
        #[arg(long)]
        handle: String,

        /// Dragged x
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Dragged y
        #[arg(long, allow_negative_numbers = true)]
        y: f64,

        /// JSON bell parameters file
        #[arg(short, long, value_name = "FILE")]
        bell: Option<PathBuf>,

        /// Print the handle points instead of the parameters
        #[arg(long)]
        emit_points: bool,
    },

    /// Edit a points file and print the new snapshot
    Snapshot {
        /// JSON points file (defaults to the built-in curve)
        #[arg(short, long, value_name = "FILE", global = true)]
        points: Option<PathBuf>,

        #[command(subcommand)]
        action: SnapshotAction,
    },
}

#[derive(Subcommand, Debug)]
enum SnapshotAction {
    /// Add a cubic-spline control point
    Add {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
    /// Move a point
    Move {
        #[arg(long)]
        id: String,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
    /// Remove a point
    Remove {
        #[arg(long)]
        id: String,
    },
    /// Change a point's interpolation tag
    Retag {
        #[arg(long)]
        id: String,
        /// linear, cubic_spline, bezier, bell_smooth, step
        #[arg(long)]
        interpolation: String,
    },
    /// Restore the default three-point curve
    Reset,
}

impl From<SnapshotAction> for Edit {
    fn from(action: SnapshotAction) -> Self {
        match action {
            SnapshotAction::Add { x, y } => Edit::Add { x, y },
            SnapshotAction::Move { id, x, y } => Edit::Move { id, x, y },
            SnapshotAction::Remove { id } => Edit::Remove { id },
            SnapshotAction::Retag { id, interpolation } => Edit::Retag { id, interpolation },
            SnapshotAction::Reset => Edit::Reset,
        }
    }
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        let (sample_count, sensitivity) = match &self.command {
            Commands::Sample { count, .. } => (*count, None),
            Commands::Adaptive { sensitivity, .. } => (None, *sensitivity),
            _ => (None, None),
        };
        CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            sample_count,
            sensitivity,
            output_format: self.format.clone(),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn dispatch(command: Commands, config: &CliConfig, out: &mut impl Write) -> curve_cli::Result<()> {
    let format = config.output_format;
    match command {
        Commands::Eval { x, input } => commands::evaluate::run(
            x,
            input.points.as_deref(),
            input.bell.as_deref(),
            format,
            out,
        ),
        Commands::Sample { input, .. } => commands::sample::run(
            config.sample_count,
            input.points.as_deref(),
            input.bell.as_deref(),
            format,
            out,
        ),
        Commands::Adaptive { input, .. } => commands::adaptive::run(
            config.sensitivity,
            input.points.as_deref(),
            input.bell.as_deref(),
            format,
            out,
        ),
        Commands::BellSet {
            param,
            value,
            bell,
            emit_points,
        } => commands::bell::set(bell.as_deref(), &param, value, emit_points, format, out),
        Commands::BellDrag {
            handle,
            x,
            y,
            bell,
            emit_points,
        } => commands::bell::drag(bell.as_deref(), &handle, x, y, emit_points, format, out),
        Commands::Snapshot { points, action } => {
            commands::snapshot::run(points.as_deref(), &action.into(), format, out)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.config_args()).context("Failed to load configuration")?;

    init_tracing(config.log_level.as_filter_str());

    info!("curvectl v{}", curve_cli::VERSION);
    debug!(
        log_level = %config.log_level,
        sample_count = config.sample_count,
        sensitivity = config.sensitivity,
        output_format = %config.output_format,
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(cli.command, &config, &mut out).context("Command failed")?;
    out.flush()?;

    Ok(())
}
