use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use streamkit::config::RunConfig;
use streamkit::runtime;

#[derive(Parser)]
#[command(name = "streamkit")]
#[command(about = "Streamkit - polymorphic record processing and stream analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run processors and streams from a YAML run file
    Run {
        /// Path to run YAML file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Validate a run configuration
    Validate {
        /// Path to run YAML file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config } => {
            let run_config = RunConfig::from_yaml_file(&config)?;
            let base_dir = config.parent().unwrap_or_else(|| Path::new("."));
            runtime::run(&run_config, base_dir)?;
        }
        Commands::Validate { config } => {
            let _run_config = RunConfig::from_yaml_file(&config)?;
            println!("✓ Run configuration is valid");
        }
        Commands::Version => {
            println!("streamkit version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
