//! Tab completion for the tgraph interactive REPL.

use std::cell::RefCell;
use std::rc::Rc;

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{
    Cmd, ConditionalEventHandler, Event, EventContext, EventHandler, Helper, KeyEvent, RepeatCount,
};

/// All available REPL slash commands.
pub const COMMANDS: &[(&str, &str)] = &[
    ("/add-vertex", "Add a vertex: /add-vertex <id>"),
    ("/add-edge", "Add an edge: /add-edge <u> <v> [weight]"),
    ("/remove-vertex", "Remove a vertex and its edges"),
    ("/remove-edge", "Remove an edge: /remove-edge <u> <v>"),
    ("/vertices", "List vertices with degrees"),
    ("/edges", "List edges"),
    ("/render", "Render as Graphviz DOT: /render [file.dot]"),
    ("/info", "Graph summary"),
    ("/path", "Shortest path: /path <source> <target>"),
    ("/bfs", "Breadth-first order: /bfs <source>"),
    ("/template", "Load the predefined graph: overwrite | merge | cancel"),
    ("/export", "Write a JSON snapshot: /export <file.json>"),
    ("/clear", "Remove every vertex and edge"),
    ("/help", "Show available commands"),
    ("/exit", "Quit the REPL"),
];

/// Template modes for completion.
pub const TEMPLATE_MODES: &[&str] = &["overwrite", "merge", "cancel"];

/// Commands whose arguments are vertex names.
const VERTEX_COMMANDS: &[&str] = &[
    "/add-edge",
    "/remove-vertex",
    "/remove-edge",
    "/path",
    "/bfs",
    "/ae",
    "/rv",
    "/re",
];

/// Vertex names shared between the session and the completer.
pub type VertexNames = Rc<RefCell<Vec<String>>>;

/// REPL helper providing tab completion and hints.
pub struct GraphHelper {
    vertices: VertexNames,
}

impl GraphHelper {
    pub fn new(vertices: VertexNames) -> Self {
        Self { vertices }
    }
}

fn pairs<'a>(candidates: impl Iterator<Item = &'a str>, prefix: &str) -> Vec<Pair> {
    candidates
        .filter(|c| c.starts_with(prefix))
        .map(|c| Pair {
            display: c.to_string(),
            replacement: format!("{c} "),
        })
        .collect()
}

impl Completer for GraphHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let input = &line[..pos];

        // Complete command names
        if !input.contains(' ') {
            let matches: Vec<Pair> = COMMANDS
                .iter()
                .filter(|(cmd, _)| cmd.starts_with(input))
                .map(|(cmd, desc)| Pair {
                    display: format!("{cmd:<18} {desc}"),
                    replacement: format!("{cmd} "),
                })
                .collect();
            return Ok((0, matches));
        }

        let cmd = input.split(' ').next().unwrap_or("");
        // Only the word under the cursor is replaced.
        let word_start = input.rfind(' ').map(|i| i + 1).unwrap_or(0);
        let word = &input[word_start..];

        if cmd == "/template" {
            return Ok((word_start, pairs(TEMPLATE_MODES.iter().copied(), word)));
        }
        if VERTEX_COMMANDS.contains(&cmd) {
            let names = self.vertices.borrow();
            return Ok((word_start, pairs(names.iter().map(String::as_str), word)));
        }
        Ok((pos, Vec::new()))
    }
}

impl Hinter for GraphHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() {
            return None;
        }
        if line.starts_with('/') && !line.contains(' ') {
            for (cmd, _) in COMMANDS {
                if cmd.starts_with(line) && *cmd != line {
                    return Some(cmd[line.len()..].to_string());
                }
            }
        }
        None
    }
}

impl Highlighter for GraphHelper {}
impl Validator for GraphHelper {}
impl Helper for GraphHelper {}

/// Tab accepts hint if present, else triggers completion.
pub struct TabCompleteOrAcceptHint;

impl ConditionalEventHandler for TabCompleteOrAcceptHint {
    fn handle(
        &self,
        _evt: &Event,
        _n: RepeatCount,
        _positive: bool,
        ctx: &EventContext<'_>,
    ) -> Option<Cmd> {
        if ctx.has_hint() {
            Some(Cmd::CompleteHint)
        } else {
            Some(Cmd::Complete)
        }
    }
}

/// Bind custom key sequences.
pub fn bind_keys(rl: &mut rustyline::Editor<GraphHelper, rustyline::history::DefaultHistory>) {
    rl.bind_sequence(
        KeyEvent::from('\t'),
        EventHandler::Conditional(Box::new(TabCompleteOrAcceptHint)),
    );
}

/// Find closest matching command (Levenshtein).
pub fn suggest_command(input: &str) -> Option<&'static str> {
    let input_lower = input.to_lowercase();
    let mut best: Option<(&'static str, usize)> = None;

    for (cmd, _) in COMMANDS {
        let dist = levenshtein(&input_lower, &cmd[1..]);
        let closer = best.map_or(true, |(_, d)| dist < d);
        if dist <= 3 && closer {
            best = Some((*cmd, dist));
        }
    }

    best.map(|(cmd, _)| cmd)
}

fn levenshtein(a: &str, b: &str) -> usize {
    let b_len = b.chars().count();
    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }
    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];
    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.chars().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b_len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn suggests_near_miss() {
        assert_eq!(suggest_command("edgs"), Some("/edges"));
        assert_eq!(suggest_command("bsf"), Some("/bfs"));
        assert_eq!(suggest_command("completely-unrelated"), None);
    }
}
