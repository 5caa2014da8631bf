//! # HealthSathi CLI (`sathi`)
//!
//! Browse and filter the HealthSathi catalog, run the symptom checker, and
//! start the HTTP API.
//!
//! ## Usage
//!
//! ```bash
//! sathi --config ./config/sathi.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `sathi doctors` | Filter the doctor directory |
//! | `sathi articles` | Filter health education articles |
//! | `sathi videos` | Filter health education videos |
//! | `sathi records` | Filter health records |
//! | `sathi symptoms [search]` | Look up symptoms by name |
//! | `sathi assess <symptom>...` | Run the symptom checker |
//! | `sathi emergency` | Emergency numbers and nearby hospitals |
//! | `sathi bmi` | Body-mass index from weight and height |
//! | `sathi catalog` | Catalog source and collection sizes |
//! | `sathi serve` | Start the HTTP API |
//!
//! ## Examples
//!
//! ```bash
//! # Cardiologists
//! sathi doctors --specialty cardiology
//!
//! # Affordable Hindi-speaking doctors, as JSON
//! sathi doctors --language hindi --price low --json
//!
//! # Articles in Hindi about maternal health
//! sathi articles --category maternal --language hindi
//!
//! # Lab reports mentioning "blood"
//! sathi records --type lab_report blood
//!
//! # Symptom checker
//! sathi assess --age 42 --gender male Fever "Chest Pain"
//! ```

use clap::{Parser, Subcommand};
use healthsathi::{catalog, config, emergency, logging, search, server, stats, symptoms, vitals};
use healthsathi_core::criteria::{
    ArticleCriteria, DoctorCriteria, PriceBracket, RecordCriteria, VideoCriteria,
};
use healthsathi_core::filter::Selection;
use healthsathi_core::models::{Difficulty, RecordType, Specialty, Topic};
use healthsathi_core::Catalog;
use std::path::{Path, PathBuf};

/// HealthSathi CLI: catalog filtering and guided health flows.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. When the file does not exist, built-in defaults and the sample
/// catalog are used.
#[derive(Parser)]
#[command(
    name = "sathi",
    about = "HealthSathi: catalog filtering and guided health flows",
    version,
    long_about = "HealthSathi filters the doctor directory, health education content and \
    health records by combinable criteria, runs the symptom checker, and serves the same \
    operations over a JSON HTTP API."
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/sathi.toml")]
    config: PathBuf,

    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the doctor directory.
    ///
    /// Every filter defaults to `all`. Results keep catalog order.
    Doctors {
        /// Specialty: general, cardiology, neurology, pediatrics, ophthalmology.
        #[arg(long, default_value = "all")]
        specialty: Selection<Specialty>,

        /// Spoken language (substring, case-insensitive).
        #[arg(long, default_value = "all")]
        language: Selection<String>,

        /// Fee bracket: low (<= 200), medium (200-300), high (> 300).
        #[arg(long, default_value = "all")]
        price: Selection<PriceBracket>,

        /// Free text matched against name and specialty.
        #[arg(default_value = "")]
        search: String,
    },

    /// Filter health education articles.
    Articles {
        /// Topic: general, nutrition, fitness, maternal, mental, prevention.
        #[arg(long, default_value = "all")]
        category: Selection<Topic>,

        /// Article language (case-insensitive).
        #[arg(long, default_value = "all")]
        language: Selection<String>,

        /// Reading level: beginner, intermediate, advanced.
        #[arg(long, default_value = "all")]
        difficulty: Selection<Difficulty>,

        /// Free text matched against title and summary.
        #[arg(default_value = "")]
        search: String,
    },

    /// Filter health education videos.
    Videos {
        /// Topic: general, nutrition, fitness, maternal, mental, prevention.
        #[arg(long, default_value = "all")]
        category: Selection<Topic>,

        /// Video language (case-insensitive).
        #[arg(long, default_value = "all")]
        language: Selection<String>,

        /// Free text matched against the title.
        #[arg(default_value = "")]
        search: String,
    },

    /// Filter health records.
    Records {
        /// Record type: prescription, lab_report, consultation, vaccination, vitals.
        #[arg(long = "type", default_value = "all")]
        kind: Selection<RecordType>,

        /// Free text matched against title, doctor and summary.
        #[arg(default_value = "")]
        search: String,
    },

    /// Look up symptoms by name.
    Symptoms {
        /// Part of a symptom name. Lists every symptom when omitted.
        #[arg(default_value = "")]
        search: String,
    },

    /// Run the symptom checker over the given symptoms.
    ///
    /// Symptoms are catalog ids or names. The result is a fixed rule, not
    /// a diagnosis.
    Assess {
        /// Patient age in years.
        #[arg(long)]
        age: Option<u32>,

        /// Patient gender.
        #[arg(long, default_value = "")]
        gender: String,

        /// Village or town.
        #[arg(long, default_value = "")]
        location: String,

        /// Symptom ids or names.
        symptoms: Vec<String>,
    },

    /// Emergency numbers and nearby hospitals, nearest first.
    Emergency {
        /// Only hospitals listing this facility (e.g. `icu`).
        #[arg(long)]
        facility: Option<String>,
    },

    /// Body-mass index from weight and height.
    Bmi {
        /// Weight in kilograms.
        #[arg(long)]
        weight: String,

        /// Height in centimetres.
        #[arg(long)]
        height: String,
    },

    /// Show where the catalog was loaded from and its collection sizes.
    Catalog,

    /// Start the HTTP API on `[server].bind`.
    Serve,
}

/// Load configuration, start logging, then load the catalog it names.
fn load(config_path: &Path) -> anyhow::Result<(config::Config, Catalog)> {
    let cfg = config::load_or_minimal(config_path)?;
    logging::init_logging(&cfg.logging.filter);
    tracing::debug!(config = %config_path.display(), "configuration loaded");

    let catalog = catalog::load_catalog(&cfg)?;
    Ok((cfg, catalog))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let json = cli.json;

    match cli.command {
        Commands::Doctors {
            specialty,
            language,
            price,
            search,
        } => {
            let (_, catalog) = load(&cli.config)?;
            let criteria = DoctorCriteria {
                specialty,
                language,
                price,
                search,
            };
            search::run_doctors(&catalog, &criteria, json)?;
        }
        Commands::Articles {
            category,
            language,
            difficulty,
            search,
        } => {
            let (_, catalog) = load(&cli.config)?;
            let criteria = ArticleCriteria {
                category,
                language,
                difficulty,
                search,
            };
            search::run_articles(&catalog, &criteria, json)?;
        }
        Commands::Videos {
            category,
            language,
            search,
        } => {
            let (_, catalog) = load(&cli.config)?;
            let criteria = VideoCriteria {
                category,
                language,
                search,
            };
            search::run_videos(&catalog, &criteria, json)?;
        }
        Commands::Records { kind, search } => {
            let (_, catalog) = load(&cli.config)?;
            search::run_records(&catalog, &RecordCriteria { kind, search }, json)?;
        }
        Commands::Symptoms { search } => {
            let (_, catalog) = load(&cli.config)?;
            symptoms::run_symptoms(&catalog, &search, json)?;
        }
        Commands::Assess {
            age,
            gender,
            location,
            symptoms: names,
        } => {
            let (_, catalog) = load(&cli.config)?;
            let request = symptoms::CheckRequest {
                age,
                gender,
                location,
                symptoms: names,
            };
            symptoms::run_assess(&catalog, &request, json)?;
        }
        Commands::Emergency { facility } => {
            let (_, catalog) = load(&cli.config)?;
            emergency::run_emergency(&catalog, facility.as_deref(), json)?;
        }
        // BMI needs neither config nor catalog
        Commands::Bmi { weight, height } => {
            vitals::run_bmi(&weight, &height, json)?;
        }
        Commands::Catalog => {
            let (cfg, catalog) = load(&cli.config)?;
            stats::run_stats(&cfg, &catalog, json)?;
        }
        Commands::Serve => {
            let (cfg, catalog) = load(&cli.config)?;
            server::run_server(cfg, catalog).await?;
        }
    }

    Ok(())
}
