//! masscal: weighing-instrument calibration and conformity engine
//!
//! Command-line front-end over the pure calculation library.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use masscal::cli;
use masscal::model::{DecisionRule, PrecisionClass, VerificationType};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with regime support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported regime:",
        "\n  OIML R76-1 accuracy classes I, II, III, IIII",
        "\n  Verification types: initial, subsequent, in-use (doubled MPE)",
        "\n  Decision rules: simple, guard_band, shared_risk",
        "\n\nSnapshot format:",
        "\n  JSON calibration record (see the repository README)"
    )
}

#[derive(Parser)]
#[command(name = "masscal")]
#[command(version, long_version = build_long_version())]
#[command(about = "Weighing-instrument calibration and conformity engine", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  All evaluated rows conforming, checklist complete
    1  Non-conforming readings or incomplete record
    3  Error occurred

EXAMPLES:
    # Assess a calibration record snapshot
    masscal assess record.json

    # JSON output for the certificate generator
    masscal assess record.json --json > assessment.json

    # Force the guard-band decision rule
    masscal assess record.json --rule guard_band

    # Print the MPE table for a class III scale
    masscal mpe --class III --division 0.005 --max 15

    # What is still missing from the record
    masscal checklist record.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assess a full calibration record snapshot
    Assess {
        /// Path to the snapshot JSON file
        snapshot: PathBuf,

        /// Override the decision rule recorded in the snapshot
        #[arg(long, value_enum)]
        rule: Option<RuleArg>,

        /// Reference date for certificate-expiry checks (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Emit the assessment as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the maximum-permissible-error table for an instrument
    Mpe {
        /// Accuracy class (I, II, III, IIII)
        #[arg(long)]
        class: PrecisionClass,

        /// Verification division e
        #[arg(long)]
        division: f64,

        /// Maximum capacity Max
        #[arg(long)]
        max: f64,

        /// Verification type
        #[arg(long, value_enum, default_value = "initial")]
        verification: VerificationArg,

        /// Capacity unit
        #[arg(long, default_value = "kg")]
        unit: String,

        /// Specific loads to evaluate
        loads: Vec<f64>,
    },

    /// Score a snapshot against the completeness checklist
    Checklist {
        /// Path to the snapshot JSON file
        snapshot: PathBuf,

        /// Reference date for certificate-expiry checks (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum RuleArg {
    Simple,
    #[value(name = "guard_band")]
    GuardBand,
    #[value(name = "shared_risk")]
    SharedRisk,
}

impl From<RuleArg> for DecisionRule {
    fn from(arg: RuleArg) -> Self {
        match arg {
            RuleArg::Simple => Self::Simple,
            RuleArg::GuardBand => Self::GuardBand,
            RuleArg::SharedRisk => Self::SharedRisk,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum VerificationArg {
    Initial,
    Subsequent,
    #[value(name = "in_use")]
    InUse,
}

impl From<VerificationArg> for VerificationType {
    fn from(arg: VerificationArg) -> Self {
        match arg {
            VerificationArg::Initial => Self::Initial,
            VerificationArg::Subsequent => Self::Subsequent,
            VerificationArg::InUse => Self::InUse,
        }
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose, args.quiet);

    let outcome = match args.command {
        Command::Assess {
            snapshot,
            rule,
            date,
            json,
        } => {
            let today = date.unwrap_or_else(|| chrono::Utc::now().date_naive());
            cli::run_assess(&snapshot, rule.map(DecisionRule::from), today, json)
        }
        Command::Mpe {
            class,
            division,
            max,
            verification,
            unit,
            loads,
        } => cli::run_mpe(
            class,
            division,
            max,
            VerificationType::from(verification),
            &unit,
            &loads,
        ),
        Command::Checklist {
            snapshot,
            date,
            json,
        } => {
            let today = date.unwrap_or_else(|| chrono::Utc::now().date_naive());
            cli::run_checklist(&snapshot, today, json)
        }
    };

    match outcome {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            std::process::exit(cli::exit_codes::ERROR);
        }
    }
}
