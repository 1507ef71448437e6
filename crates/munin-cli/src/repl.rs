// Interactive console with tab completion
use std::sync::Arc;

use munin_completion::{CompletionEngine, Invalidate};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing::debug;

use crate::app::App;
use crate::error::CliResult;

/// Console words handled by the console itself rather than the dispatcher
const EXIT_WORDS: [&str; 2] = ["exit", "quit"];
const RELOAD_WORD: &str = "reload";

/// Completion helper; filters the engine's candidates by the token being typed
pub struct MuninHelper {
    engine: Arc<CompletionEngine>,
    root: String,
}

impl MuninHelper {
    pub fn new(engine: Arc<CompletionEngine>, root: impl Into<String>) -> Self {
        Self {
            engine,
            root: root.into(),
        }
    }

    /// Start of the current token and the matching candidates
    pub fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let before = line.get(..pos).unwrap_or(line);
        let start = before
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        let prefix = before[start..].to_lowercase();

        let starts_with_root = before
            .split_whitespace()
            .next()
            .is_some_and(|word| word.eq_ignore_ascii_case(&self.root))
            && before.trim_start().len() > self.root.len();
        let query = if starts_with_root {
            before.to_string()
        } else {
            format!("{} {}", self.root, before)
        };

        let names = self
            .engine
            .suggest(&query)
            .into_iter()
            .filter(|name| name.to_lowercase().starts_with(&prefix))
            .collect();
        (start, names)
    }
}

impl Completer for MuninHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, names) = self.candidates(line, pos);
        let pairs = names
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: name,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for MuninHelper {
    type Hint = String;
}

impl Highlighter for MuninHelper {}

impl Validator for MuninHelper {}

impl Helper for MuninHelper {}

/// Run the console until `exit`, `quit`, Ctrl-C or Ctrl-D
pub fn run(app: &App) -> CliResult<()> {
    let mut editor: Editor<MuninHelper, DefaultHistory> = Editor::new()?;
    editor.set_helper(Some(MuninHelper::new(
        Arc::clone(app.engine()),
        app.root_command(),
    )));

    println!(
        "Connected as {}. Type 'help' for commands, Tab to complete, 'exit' to quit.",
        app.caller().name
    );
    let prompt = format!("{}> ", app.root_command());

    loop {
        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                editor.add_history_entry(line)?;

                if EXIT_WORDS.iter().any(|word| line.eq_ignore_ascii_case(word)) {
                    break;
                }
                if line.eq_ignore_ascii_case(RELOAD_WORD) {
                    app.engine().invalidate();
                    println!("Suggestion caches cleared.");
                    continue;
                }

                if let Some(output) = app.execute_line(line) {
                    println!("{}", output);
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                debug!("Console closed");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
