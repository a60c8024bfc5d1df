use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod build;
mod commands;
mod config;
mod legacy;
mod post;
mod util;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The command to execute (defaults to `build`)
    #[command(subcommand)]
    command: Option<ClubsiteCommand>,
}

#[derive(Parser)]
struct InitArgs {
    /// The path to initialize the project in
    path: PathBuf,

    /// Whether to create the directory if it doesn't exist
    #[arg(short, long, default_value = "false")]
    create: bool,
}

#[derive(Parser, Default)]
struct BuildArgs {
    /// The path to the configuration file (default: clubsite.yaml, optional)
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

#[derive(Parser)]
struct JekyllArgs {
    /// The path to the configuration file (default: clubsite.yaml, optional)
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

#[derive(Parser)]
struct ExtractArgs {
    /// The path to the configuration file (default: clubsite.yaml, optional)
    #[arg(short, long)]
    config_file: Option<PathBuf>,

    /// The SQLite database to read (overrides `legacy.database`)
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Where to write the JSON file (default: next to the config file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

#[derive(Parser)]
struct CleanArgs {
    /// The path to the configuration file (default: clubsite.yaml, optional)
    #[arg(short, long)]
    config_file: Option<PathBuf>,

    /// Only print what would be deleted
    #[arg(long, default_value = "false")]
    dry_run: bool,
}

#[derive(Subcommand)]
enum ClubsiteCommand {
    /// Write a default clubsite.yaml
    Init(InitArgs),

    /// Build the static HTML site
    Build(BuildArgs),

    /// Generate the Jekyll source tree
    Jekyll(JekyllArgs),

    /// Extract posts from the legacy SQLite database to JSON
    Extract(ExtractArgs),

    /// Delete the generated output directories
    Clean(CleanArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match args.command {
        Some(ClubsiteCommand::Init(args)) => {
            commands::init::run(&args).await?;
        }
        Some(ClubsiteCommand::Build(args)) => {
            commands::build::run(&args).await?;
        }
        Some(ClubsiteCommand::Jekyll(args)) => {
            commands::jekyll::run(&args).await?;
        }
        Some(ClubsiteCommand::Extract(args)) => {
            commands::extract::run(&args).await?;
        }
        Some(ClubsiteCommand::Clean(args)) => {
            commands::clean::run(&args).await?;
        }
        None => {
            commands::build::run(&BuildArgs::default()).await?;
        }
    }

    Ok(())
}
