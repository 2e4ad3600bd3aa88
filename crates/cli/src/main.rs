// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use club_ledger::{
    CoreError, EngineConfig, MonthlyRollup, ProgramPeriodInput, RollupPeriod, VenueBalance,
    calculate_monthly_rollup, reconcile_venue_payments,
};
use club_ledger_domain::{Cadence, Money, MonthPeriod, PaymentPeriod, Season, VenuePayment};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Club Ledger - monthly revenue, venue cost and payroll report
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON snapshot of seasons, programs and venue payments.
    #[arg(short, long)]
    input: PathBuf,

    /// Path to a JSON engine configuration file. Defaults apply if omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Employer overhead rate, overriding the configuration file (e.g. 0.18).
    #[arg(long)]
    overhead_rate: Option<f64>,

    /// The calendar year to report on.
    #[arg(short, long)]
    year: i32,

    /// The month (1-12) to report on.
    #[arg(short, long)]
    month: u8,
}

/// Everything the report is computed from, already fetched from storage.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct Snapshot {
    /// All configured seasons.
    seasons: Vec<Season>,
    /// Every program with its registrations and assignments.
    programs: Vec<ProgramPeriodInput>,
    /// Every recorded venue payment.
    venue_payments: Vec<VenuePayment>,
}

/// The venue balance of one settlement period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct VenueReconciliation {
    /// The settled period.
    period: PaymentPeriod,
    /// Expected costs against payments.
    #[serde(flatten)]
    balance: VenueBalance,
}

/// The printed report.
#[derive(Debug, Clone, Serialize)]
struct Report {
    /// The reported month.
    month: MonthPeriod,
    /// The season the month belongs to, if any.
    season: Option<Season>,
    /// The dashboard figures.
    rollup: MonthlyRollup,
    /// Venue balances of the month and of its season.
    venue: Vec<VenueReconciliation>,
}

/// Loads the engine configuration and applies command-line overrides.
fn load_config(args: &Args) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    let mut config: EngineConfig = match &args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            EngineConfig::from_json(&std::fs::read_to_string(path)?)?
        }
        None => EngineConfig::default(),
    };

    if let Some(rate) = args.overhead_rate {
        config = config.with_employer_overhead_rate(rate);
        config.validate()?;
    }

    Ok(config)
}

/// Sums the full-period venue costs of the programs of one cadence.
fn expected_venue_costs(rollup: &MonthlyRollup, cadence: Cadence) -> Money {
    rollup
        .per_program
        .iter()
        .filter(|breakdown| breakdown.cadence == cadence)
        .map(|breakdown| breakdown.summary.venue_costs)
        .sum()
}

/// Computes the report for one month.
///
/// Monthly venue payments are reconciled against the month's monthly
/// programs, seasonal payments against the full-season costs of the seasonal
/// programs.
fn build_report(
    snapshot: &Snapshot,
    year: i32,
    month: u8,
    config: &EngineConfig,
) -> Result<Report, CoreError> {
    let period: RollupPeriod = RollupPeriod::resolve(year, month, &snapshot.seasons)?;
    let rollup: MonthlyRollup = calculate_monthly_rollup(&snapshot.programs, &period, config)?;

    let mut venue: Vec<VenueReconciliation> = Vec::with_capacity(2);

    let month_period: PaymentPeriod = PaymentPeriod::Month(period.month());
    venue.push(VenueReconciliation {
        balance: reconcile_venue_payments(
            expected_venue_costs(&rollup, Cadence::Monthly),
            &snapshot.venue_payments,
            &month_period,
        )?,
        period: month_period,
    });

    if let Some(season_id) = period.season_id() {
        let season_period: PaymentPeriod = PaymentPeriod::Season {
            season_id: season_id.to_string(),
        };
        venue.push(VenueReconciliation {
            balance: reconcile_venue_payments(
                expected_venue_costs(&rollup, Cadence::Seasonal),
                &snapshot.venue_payments,
                &season_period,
            )?,
            period: season_period,
        });
    }

    Ok(Report {
        month: period.month(),
        season: period.season().cloned(),
        rollup,
        venue,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config: EngineConfig = load_config(&args)?;

    info!("Reading snapshot from: {}", args.input.display());
    let snapshot: Snapshot = serde_json::from_str(&std::fs::read_to_string(&args.input)?)?;
    info!(
        programs = snapshot.programs.len(),
        seasons = snapshot.seasons.len(),
        "Loaded snapshot"
    );

    let report: Report = build_report(&snapshot, args.year, args.month, &config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
