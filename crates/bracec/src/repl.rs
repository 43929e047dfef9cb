//! Interactive tokenizer prompt.
//!
//! Every entry is tokenized with a fresh lexer. An entry whose line ends in
//! a backslash continues on the next line, so one entry can span several
//! lines.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

use brace_lexer::LexerConfig;

use crate::diagnostics::DiagnosticOptions;

/// Configuration for the REPL.
pub struct ReplConfig {
    /// The primary prompt string (default: "brace> ").
    pub prompt: String,
    /// The prompt for continued lines (default: "  ... ").
    pub continuation: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "brace> ".to_string(),
            continuation: "  ... ".to_string(),
        }
    }
}

/// Lines of an entry being typed.
#[derive(Debug, Default)]
struct Entry {
    lines: Vec<String>,
}

impl Entry {
    /// Add a typed line. Returns `true` when the entry is complete.
    fn push(&mut self, line: &str) -> bool {
        match line.strip_suffix('\\') {
            Some(rest) => {
                self.lines.push(rest.to_string());
                false
            }
            None => {
                self.lines.push(line.to_string());
                true
            }
        }
    }

    fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim(), ":quit" | ":q")
}

/// Run the prompt until `:quit` or end of input.
pub fn run_repl(config: &ReplConfig, lexer_config: &LexerConfig, diag_opts: &DiagnosticOptions) -> Result<(), String> {
    let mut editor = DefaultEditor::new().map_err(|e| format!("Readline error: {}", e))?;
    let mut entry = Entry::default();

    loop {
        let prompt = if entry.is_empty() {
            &config.prompt
        } else {
            &config.continuation
        };

        match editor.readline(prompt) {
            Ok(line) => {
                if entry.is_empty() && is_quit(&line) {
                    break;
                }
                let _ = editor.add_history_entry(line.as_str());
                if !entry.push(&line) {
                    continue;
                }

                let lines = entry.take();
                let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
                debug!(lines = lines.len(), "repl entry");
                crate::tokenize_unit("<repl>", &lines, lexer_config, diag_opts);
            }
            Err(ReadlineError::Interrupted) => {
                entry.take();
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline error: {}", e)),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prompts() {
        let config = ReplConfig::default();
        assert_eq!(config.prompt, "brace> ");
        assert_eq!(config.continuation, "  ... ");
    }

    #[test]
    fn single_line_entry_completes() {
        let mut entry = Entry::default();
        assert!(entry.push("x := 1"));
        assert_eq!(entry.take(), vec!["x := 1"]);
        assert!(entry.is_empty());
    }

    #[test]
    fn trailing_backslash_continues() {
        let mut entry = Entry::default();
        assert!(!entry.push("f := {\\"));
        assert!(!entry.is_empty());
        assert!(entry.push("}"));
        assert_eq!(entry.take(), vec!["f := {", "}"]);
    }

    #[test]
    fn quit_commands() {
        assert!(is_quit(":quit"));
        assert!(is_quit("  :q "));
        assert!(!is_quit("quit"));
    }
}
