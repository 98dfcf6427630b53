mod commands;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pipestack",
    version,
    about = "Declarative SQS-to-Step-Functions event pipe synthesizer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a deployment template from a pipeline definition
    Synth {
        /// Path to pipeline definition YAML file
        definition: PathBuf,
        /// Write the template here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a pipeline definition
    Validate {
        /// Path to pipeline definition YAML file
        definition: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level);

    match cli.command {
        Commands::Synth { definition, output } => {
            commands::synth::execute(&definition, output.as_deref())
        }
        Commands::Validate { definition } => commands::validate::execute(&definition),
    }
}
