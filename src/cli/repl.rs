//! Interactive REPL for tgraph with a slash command interface.
//!
//! Launch with `tgraph` (no subcommand) to enter interactive mode.
//! Type `/help` for available commands, Tab for completion.

use std::cell::RefCell;
use std::rc::Rc;

use rustyline::config::CompletionType;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};

use crate::cli::repl_commands::{self, ReplState};
use crate::cli::repl_complete;
use crate::config::{OutputFormat, SessionConfig};
use crate::types::{MAX_EDGES, MAX_VERTICES};

/// Print the welcome banner.
fn print_banner(state: &ReplState) {
    eprintln!();
    eprintln!(
        "  \x1b[32m\u{25c9}\x1b[0m \x1b[1mtgraph v{}\x1b[0m \x1b[90m\u{2014} {} graph, up to {} vertices and {} edges\x1b[0m",
        env!("CARGO_PKG_VERSION"),
        state.graph.mode(),
        MAX_VERTICES,
        MAX_EDGES
    );
    eprintln!();
    eprintln!(
        "    Type \x1b[36m/help\x1b[0m for commands, \x1b[90mTab\x1b[0m to complete, \x1b[90m/exit\x1b[0m to quit."
    );
    eprintln!();
}

/// Run the interactive REPL.
pub fn run(config: &SessionConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = ReplState::new(config.mode(), config.output.format == OutputFormat::Json);
    print_banner(&state);

    let rl_config = Config::builder()
        .history_ignore_space(true)
        .auto_add_history(true)
        .completion_type(CompletionType::List)
        .completion_prompt_limit(20)
        .build();

    let names: repl_complete::VertexNames = Rc::new(RefCell::new(Vec::new()));
    let helper = repl_complete::GraphHelper::new(Rc::clone(&names));
    let mut rl: Editor<repl_complete::GraphHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(rl_config)?;
    rl.set_helper(Some(helper));
    repl_complete::bind_keys(&mut rl);

    let hist_path = config.repl.history.then(|| config.history_path());
    if let Some(path) = hist_path.as_ref().filter(|p| p.exists()) {
        if let Err(e) = rl.load_history(path) {
            log::warn!("could not load history from {}: {e}", path.display());
        }
    }

    loop {
        match rl.readline(&config.repl.prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match repl_commands::execute(line, &mut state) {
                    Ok(true) => {
                        eprintln!("  Goodbye!");
                        break;
                    }
                    Ok(false) => {}
                    Err(e) => {
                        eprintln!("  Error: {e}");
                    }
                }
                *names.borrow_mut() = state.graph.vertices().to_vec();
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("  \x1b[90m(Ctrl+C)\x1b[0m Type \x1b[1m/exit\x1b[0m to quit.");
            }
            Err(ReadlineError::Eof) => {
                eprintln!("  Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("  Error: {err}");
                break;
            }
        }
    }

    if let Some(path) = hist_path {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = rl.save_history(&path) {
            log::warn!("could not save history to {}: {e}", path.display());
        }
    }

    Ok(())
}
