//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use lintstep::VERSION;
use lintstep::output::OutputMode;

/// lintstep - Run an external linter as a pre-build step
#[derive(Parser, Debug)]
#[command(
    name = "lintstep",
    version,
    about = "Run an external linter as a pre-build step",
    long_about = "Discovers the sources of a build target and synthesizes the linter\n\
                  invocation a host build system runs before compiling it.\n\n\
                  `plan` prints the step, `run` also executes it."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Tool configuration file (defaults to <project-dir>/.lintstep.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the pre-build steps for a target
    Plan(TargetArgs),

    /// Synthesize and execute the pre-build steps for a target
    Run(TargetArgs),

    /// Show version
    Version,
}

/// Describes the target being built
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Project root, exported to the linter
    #[arg(long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Scratch directory for the linter cache and declared outputs
    #[arg(long)]
    pub work_dir: PathBuf,

    /// Target name
    #[arg(long, default_value = "target")]
    pub target_name: String,

    /// Source directory of a package target (omit, with no inputs, for a
    /// target without sources)
    #[arg(long, conflicts_with = "inputs")]
    pub target_dir: Option<PathBuf>,

    /// Input files of a project target (repeatable)
    #[arg(long = "input", value_name = "PATH")]
    pub inputs: Vec<PathBuf>,

    /// Linter executable, bypassing PATH lookup
    #[arg(long)]
    pub tool_path: Option<PathBuf>,
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

    match cli.command {
        Some(Command::Plan(args)) => commands::plan(&args, cli.config.as_deref(), output_mode),
        Some(Command::Run(args)) => commands::run(&args, cli.config.as_deref(), output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": VERSION
                    })
                );
            } else {
                println!("lintstep v{VERSION}");
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("lintstep v{VERSION}");
                println!("\nRun 'lintstep --help' for usage");
            }
            Ok(())
        },
    }
}
