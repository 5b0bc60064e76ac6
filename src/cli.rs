//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use rental_store::config::TariffConfig;
use rental_store::output::OutputMode;

/// rental-store - Video rental pricing and customer statements
#[derive(Parser, Debug)]
#[command(
    name = "rental-store",
    version,
    about = "Video rental pricing and customer statements",
    long_about = "Price video rentals and print customer statements.\n\n\
                  Each movie category has a tariff: a base charge covering some days,\n\
                  a daily rate after that, and frequent renter points per rental."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Tariff file to use instead of the default lookup
    #[arg(long, global = true, value_name = "PATH")]
    pub tariffs: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the statement for a rental sheet
    Statement {
        /// Path to the rental sheet (TOML)
        sheet: PathBuf,
    },

    /// Price a single rental
    Charge {
        /// Category: regular, new_release, childrens
        category: String,

        /// Days rented
        #[arg(allow_negative_numbers = true)]
        days: i64,
    },

    /// Add a rental to a rental sheet (created if missing)
    Rent {
        /// Path to the rental sheet (TOML)
        sheet: PathBuf,

        /// Customer the sheet belongs to (must match an existing sheet)
        #[arg(short, long)]
        customer: String,

        /// Movie title
        #[arg(short, long)]
        title: String,

        /// Category: regular, new_release, childrens
        #[arg(short = 'k', long, default_value = "regular")]
        category: String,

        /// Days rented
        #[arg(short, long)]
        days: i64,
    },

    /// Manage tariffs (list, init)
    Tariff {
        #[command(subcommand)]
        action: TariffAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum TariffAction {
    /// List the active tariffs
    List,

    /// Write the standard tariffs to a file for editing
    Init {
        /// Destination (defaults to ./.rental-store.toml)
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let tariff_file = cli.tariffs.as_deref();

    match cli.command {
        Some(Command::Statement { sheet }) => {
            let config = TariffConfig::resolve(tariff_file)?;
            commands::statement(&sheet, &config, output_mode)
        },
        Some(Command::Charge { category, days }) => {
            let config = TariffConfig::resolve(tariff_file)?;
            commands::charge(&category, days, &config, output_mode)
        },
        Some(Command::Rent {
            sheet,
            customer,
            title,
            category,
            days,
        }) => commands::rent(&sheet, &customer, &title, &category, days, output_mode),
        Some(Command::Tariff { action }) => match action {
            TariffAction::List => {
                let config = TariffConfig::resolve(tariff_file)?;
                commands::tariff_list(&config, output_mode)
            },
            TariffAction::Init { path, force } => {
                commands::tariff_init(path.as_deref(), force, output_mode)
            },
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": rental_store::VERSION
                    })
                );
            } else {
                println!("rental-store v{}", rental_store::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": rental_store::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("rental-store v{}", rental_store::VERSION);
                println!("\nRun 'rental-store --help' for usage");
                println!("Run 'rental-store statement <SHEET>' to bill a customer");
            }
            Ok(())
        },
    }
}
