//! Slash command dispatch for the tgraph REPL and scripts.

use std::path::Path;

use crate::cli::commands;
use crate::cli::repl_complete::{suggest_command, COMMANDS};
use crate::graph::{Graph, LoadMode};
use crate::types::{GraphError, GraphMode, GraphResult};

/// Session state: the one graph the session owns.
pub struct ReplState {
    pub graph: Graph,
    /// Print command output as JSON.
    pub json: bool,
}

impl ReplState {
    pub fn new(mode: GraphMode, json: bool) -> Self {
        Self {
            graph: Graph::new(mode),
            json,
        }
    }
}

/// Numeric shortcuts, in menu order.
fn menu_command(number: &str) -> Option<&'static str> {
    let cmd = match number {
        "1" => "add-vertex",
        "2" => "add-edge",
        "3" => "remove-vertex",
        "4" => "remove-edge",
        "5" => "vertices",
        "6" => "edges",
        "7" => "render",
        "8" => "info",
        "9" => "path",
        "10" => "bfs",
        "11" => "template",
        "0" => "exit",
        _ => return None,
    };
    Some(cmd)
}

/// Execute a slash command. Returns `true` if the session should end.
///
/// Malformed input (bad arguments, an unparsable weight, an unknown command)
/// is a [`GraphError::Usage`] error, so scripts count it as a failure.
pub fn execute(input: &str, state: &mut ReplState) -> Result<bool, Box<dyn std::error::Error>> {
    let result = dispatch(input, state);
    if let Err(e) = &result {
        log::debug!("rejected '{}': {e}", input.trim());
    }
    result
}

fn usage(text: &str) -> GraphError {
    GraphError::Usage(format!("Usage: {text}"))
}

fn dispatch(input: &str, state: &mut ReplState) -> Result<bool, Box<dyn std::error::Error>> {
    let input = input.trim();
    if input.is_empty() || input.starts_with('#') {
        return Ok(false);
    }

    let input = input.strip_prefix('/').unwrap_or(input);
    if input.is_empty() {
        cmd_help();
        return Ok(false);
    }

    let mut parts = input.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let cmd = menu_command(cmd).unwrap_or(cmd);
    let args: Vec<&str> = parts.next().unwrap_or("").split_whitespace().collect();
    let json = state.json;
    let graph = &mut state.graph;

    match cmd {
        "exit" | "quit" | "q" => return Ok(true),
        "help" | "h" | "?" => cmd_help(),
        "clear" => commands::cmd_clear(graph, json)?,
        "add-vertex" | "av" => match args.as_slice() {
            [id] => commands::cmd_add_vertex(graph, id, json)?,
            _ => return Err(usage("/add-vertex <id>").into()),
        },
        "add-edge" | "ae" => match args.as_slice() {
            [u, v] => commands::cmd_add_edge(graph, u, v, None, json)?,
            [u, v, w] => {
                let weight = parse_weight(w).ok_or_else(|| {
                    GraphError::Usage(format!("Invalid weight '{w}': expected a finite number"))
                })?;
                commands::cmd_add_edge(graph, u, v, Some(weight), json)?
            }
            _ => return Err(usage("/add-edge <u> <v> [weight]").into()),
        },
        "remove-vertex" | "rv" => match args.as_slice() {
            [id] => commands::cmd_remove_vertex(graph, id, json)?,
            _ => return Err(usage("/remove-vertex <id>").into()),
        },
        "remove-edge" | "re" => match args.as_slice() {
            [u, v] => commands::cmd_remove_edge(graph, u, v, json)?,
            _ => return Err(usage("/remove-edge <u> <v>").into()),
        },
        "vertices" | "lv" => commands::cmd_vertices(graph, json)?,
        "edges" | "le" => commands::cmd_edges(graph, json)?,
        "render" | "draw" => match args.as_slice() {
            [] => commands::cmd_render(graph, None)?,
            [file] => commands::cmd_render(graph, Some(Path::new(file)))?,
            _ => return Err(usage("/render [file.dot]").into()),
        },
        "info" | "stats" => commands::cmd_info(graph, json)?,
        "path" => match args.as_slice() {
            [source, target] => commands::cmd_path(graph, source, target, json)?,
            _ => return Err(usage("/path <source> <target>").into()),
        },
        "bfs" => match args.as_slice() {
            [source] => commands::cmd_bfs(graph, source, json)?,
            _ => return Err(usage("/bfs <source>").into()),
        },
        "template" => cmd_template(&args, graph, json)?,
        "export" => match args.as_slice() {
            [file] => commands::cmd_export(graph, Path::new(file))?,
            _ => return Err(usage("/export <file.json>").into()),
        },
        _ => {
            let message = match suggest_command(cmd) {
                Some(suggestion) => format!("Unknown command '/{cmd}'. Did you mean {suggestion}?"),
                None => format!("Unknown command '/{cmd}'. Type /help for commands."),
            };
            return Err(GraphError::Usage(message).into());
        }
    }

    Ok(false)
}

/// Parse a user-supplied weight. Rejects NaN and infinities.
pub fn parse_weight(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|w| w.is_finite())
}

fn cmd_help() {
    eprintln!();
    eprintln!("  Commands:");
    eprintln!();
    for (cmd, desc) in COMMANDS {
        eprintln!("    {cmd:<20} {desc}");
    }
    eprintln!();
    eprintln!("  Menu numbers: 1 add-vertex, 2 add-edge, 3 remove-vertex, 4 remove-edge,");
    eprintln!("  5 vertices, 6 edges, 7 render, 8 info, 9 path, 10 bfs, 11 template, 0 exit.");
    eprintln!();
}

fn cmd_template(args: &[&str], graph: &mut Graph, json: bool) -> GraphResult<()> {
    let choice = match args {
        [choice] => *choice,
        _ => return Err(usage("/template overwrite | merge | cancel")),
    };
    if choice.eq_ignore_ascii_case("cancel") {
        eprintln!("  Template load cancelled.");
        return Ok(());
    }
    match LoadMode::from_name(choice) {
        Some(mode) => commands::cmd_template(graph, mode, json),
        None => Err(GraphError::Usage(format!(
            "Unknown template mode '{choice}'. Use overwrite, merge or cancel."
        ))),
    }
}

/// Outcome of running a script.
#[derive(Debug, Default)]
pub struct ScriptReport {
    /// Lines that ran a command.
    pub executed: usize,
    /// Lines whose command returned an error.
    pub failed: usize,
    /// The script ended with an exit command.
    pub exited: bool,
}

/// Run every line of `script` through [`execute`].
///
/// Errors are reported on stderr with their line number. With `strict`, the
/// first error stops the script and is returned.
pub fn execute_script(
    script: &str,
    state: &mut ReplState,
    strict: bool,
) -> Result<ScriptReport, Box<dyn std::error::Error>> {
    let mut report = ScriptReport::default();

    for (n, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        report.executed += 1;
        match execute(line, state) {
            Ok(true) => {
                report.exited = true;
                break;
            }
            Ok(false) => {}
            Err(e) => {
                report.failed += 1;
                eprintln!("  line {}: Error: {e}", n + 1);
                if strict {
                    return Err(e);
                }
            }
        }
    }

    Ok(report)
}
