//! CLI entry point for the `tgraph` command-line tool.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use tinygraph::cli::repl_commands::{self, ReplState};
use tinygraph::cli::{commands, repl};
use tinygraph::{GraphError, OutputFormat, SessionConfig};

#[derive(Parser)]
#[command(
    name = "tgraph",
    version,
    about = "Build and query a small graph (10 vertices, 20 edges) from slash commands"
)]
struct Cli {
    /// Create a directed graph (default: undirected)
    #[arg(long)]
    directed: bool,

    /// Output format: "text" (default) or "json"
    #[arg(long)]
    format: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not load or save REPL history
    #[arg(long)]
    no_history: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run slash commands from a file, one per line
    Run {
        /// Script file; `#` starts a comment line
        script: PathBuf,
        /// Stop at the first failing command
        #[arg(long)]
        strict: bool,
    },
    /// Print the predefined template graph
    Template,
}

fn exit_code(e: &GraphError) -> i32 {
    match e {
        GraphError::Io(_) => 1,
        GraphError::Config(_) | GraphError::Json(_) => 2,
        GraphError::NotFound(_)
        | GraphError::UnknownVertex(_)
        | GraphError::MissingEndpoint(_) => 4,
        _ => 5,
    }
}

fn init_logging(verbose: bool, level: &str) {
    let default = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_target(false)
        .format_timestamp(None)
        .init();
}

fn run_script(
    path: &Path,
    config: &SessionConfig,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let script = std::fs::read_to_string(path).map_err(GraphError::from)?;
    let mut state = ReplState::new(config.mode(), config.output.format == OutputFormat::Json);
    let report = repl_commands::execute_script(&script, &mut state, strict)?;
    log::info!(
        "{}: {} command(s), {} failed",
        path.display(),
        report.executed,
        report.failed
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let (mut config, source) = match SessionConfig::load(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(exit_code(&e));
        }
    };
    if cli.directed {
        config.directed = true;
    }
    if cli.no_history {
        config.repl.history = false;
    }
    if let Some(name) = &cli.format {
        match OutputFormat::from_name(name) {
            Some(format) => config.output.format = format,
            None => {
                eprintln!("Invalid output format: {name}");
                process::exit(3);
            }
        }
    }

    init_logging(cli.verbose, &config.log_level);
    source.log();
    log::debug!("session config: {config:?}");

    let json = config.output.format == OutputFormat::Json;
    let result = match cli.command {
        None => repl::run(&config),
        Some(Commands::Run { script, strict }) => run_script(&script, &config, strict),
        Some(Commands::Template) => commands::cmd_show_template(json).map_err(Into::into),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        let code = e.downcast_ref::<GraphError>().map(exit_code).unwrap_or(5);
        process::exit(code);
    }
}
