use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use vital_core::*;

#[derive(Parser)]
#[command(name = "vital")]
#[command(about = "Health dashboard calculations: BMI, durations and daily status", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Advisory JSONL log (defaults to <data-dir>/advisories.jsonl)
    #[arg(long, global = true)]
    advisory_log: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute BMI from a profile file or explicit measurements
    Bmi {
        /// Height in centimeters
        #[arg(long, allow_negative_numbers = true)]
        height: Option<f64>,

        /// Weight in kilograms
        #[arg(long, allow_negative_numbers = true)]
        weight: Option<f64>,

        /// Profile JSON file (defaults to <data-dir>/profile.json)
        #[arg(long, conflicts_with_all = ["height", "weight"])]
        profile: Option<PathBuf>,
    },

    /// Classify a BMI value
    Classify {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// Format a minute count for display
    Minutes { total: u32 },

    /// Show today's status cells
    Today {
        /// Activity JSON file (defaults to <data-dir>/today.json)
        #[arg(long)]
        activity: Option<PathBuf>,
    },

    /// List advisories recorded in the advisory log
    Advisories,
}

fn main() -> Result<()> {
    vital_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(data_dir) = cli.data_dir {
        config.data.data_dir = data_dir;
    }
    tracing::debug!("Using data dir {:?}", config.data.data_dir);

    let advisory_log = cli
        .advisory_log
        .unwrap_or_else(|| config.data.advisory_log_path());

    match cli.command {
        Commands::Bmi {
            height,
            weight,
            profile,
        } => cmd_bmi(&config, height, weight, profile, advisory_log),
        Commands::Classify { value } => {
            println!("{}", classify(value));
            Ok(())
        }
        Commands::Minutes { total } => {
            println!("{}", format_minutes(total));
            Ok(())
        }
        Commands::Today { activity } => cmd_today(&config, activity),
        Commands::Advisories => cmd_advisories(&advisory_log),
    }
}

fn cmd_bmi(
    config: &Config,
    height: Option<f64>,
    weight: Option<f64>,
    profile: Option<PathBuf>,
    advisory_log: PathBuf,
) -> Result<()> {
    // Explicit values act as an already-fetched profile
    let snapshot = if height.is_some() || weight.is_some() {
        ProfileSnapshot::Loaded(ProfileMeasurement { height, weight })
    } else {
        let path = profile.unwrap_or_else(|| config.data.profile_path());
        load_profile(&path)?
    };

    if snapshot == ProfileSnapshot::NotLoaded {
        println!("Profile not loaded - BMI not computed.");
        return Ok(());
    }

    let mut sink = (
        Advisories::new(),
        (TracingSink, JsonlAdvisorySink::new(advisory_log)),
    );
    let mut dashboard = Dashboard::new(config.bmi);
    let result = *dashboard.on_profile(snapshot, &mut sink);

    for advisory in sink.0.items() {
        println!("[{}] {}", advisory.severity, advisory.message);
    }

    println!("BMI: {}", result.value);
    println!("{}", describe(&result));

    Ok(())
}

fn cmd_today(config: &Config, activity: Option<PathBuf>) -> Result<()> {
    let path = activity.unwrap_or_else(|| config.data.activity_path());
    let activity = load_activity(&path)?;

    if let Some(date) = activity.date {
        println!("Today status ({})", date);
    } else {
        println!("Today status");
    }

    for cell in status_cells(&activity) {
        println!("  {}: {}", cell.kind, cell.render());
    }

    Ok(())
}

fn cmd_advisories(advisory_log: &Path) -> Result<()> {
    let advisories = read_advisories(advisory_log)?;

    if advisories.is_empty() {
        println!("No advisories logged.");
        return Ok(());
    }

    for advisory in &advisories {
        println!("[{}] {}", advisory.severity, advisory.message);
    }
    println!("{} advisories in {}", advisories.len(), advisory_log.display());

    Ok(())
}
