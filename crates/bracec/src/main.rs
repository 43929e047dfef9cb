//! The Brace tokenizer CLI.
//!
//! - `bracec <files>...` - Tokenize each file and print its token stream
//! - `bracec -c <source>` - Tokenize inline source (`\n` separates lines)
//! - `bracec` - Start an interactive prompt; each entry is tokenized alone
//!
//! Options:
//! - `--json` - One JSON object per token / diagnostic
//! - `--no-color` - Disable colorized diagnostics
//! - `--interpolate` - String delimiters that allow interpolation
//! - `-v` - Raise log verbosity (repeatable)

mod diagnostics;
mod logging;
mod output;
mod repl;

use std::path::PathBuf;
use std::process;

use brace_lexer::{Lexer, LexerConfig};
use clap::Parser;
use tracing::{debug, info};

use diagnostics::DiagnosticOptions;

#[derive(Parser)]
#[command(name = "bracec", version, about = "Tokenize Brace source code")]
struct Cli {
    /// Source files to tokenize
    files: Vec<PathBuf>,

    /// Tokenize the given string as Brace code (a literal `\n` separates lines)
    #[arg(short, long, conflicts_with = "files")]
    command: Option<String>,

    /// Output tokens and diagnostics as JSON (one object per line)
    #[arg(long)]
    json: bool,

    /// Disable colorized output
    #[arg(long = "no-color")]
    no_color: bool,

    /// String delimiters whose strings may contain `...` interpolation
    #[arg(long, default_value = "\"")]
    interpolate: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let diag_opts = DiagnosticOptions {
        color: !cli.no_color && !cli.json,
        json: cli.json,
    };
    logging::init(cli.verbose, diag_opts.color);

    let config = LexerConfig::default().with_interpolation_delimiters(cli.interpolate.chars());
    debug!(delimiters = ?config.interpolation_delimiters, "lexer configured");

    match run(&cli, &config, &diag_opts) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            if cli.json {
                let msg = serde_json::json!({
                    "code": "C0001",
                    "severity": "error",
                    "message": e,
                });
                eprintln!("{}", msg);
            } else {
                eprintln!("error: {}", e);
            }
            process::exit(1);
        }
    }
}

/// Dispatch on the input source. Returns `Ok(false)` when a lexical error
/// was reported.
fn run(cli: &Cli, config: &LexerConfig, diag_opts: &DiagnosticOptions) -> Result<bool, String> {
    if let Some(command) = &cli.command {
        let lines: Vec<&str> = command.split("\\n").collect();
        return Ok(tokenize_unit("<command>", &lines, config, diag_opts));
    }

    if cli.files.is_empty() {
        repl::run_repl(&repl::ReplConfig::default(), config, diag_opts)?;
        return Ok(true);
    }

    let mut clean = true;
    for path in &cli.files {
        let source = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;
        let lines: Vec<&str> = source.lines().collect();
        let name = path.display().to_string();
        clean &= tokenize_unit(&name, &lines, config, diag_opts);
    }
    Ok(clean)
}

/// Feed `lines` to a fresh lexer in order, printing each line's tokens as
/// soon as it is scanned.
///
/// Stops at the first lexical error, which is reported against `lines`.
/// Returns `false` if that happened.
fn tokenize_unit(name: &str, lines: &[&str], config: &LexerConfig, diag_opts: &DiagnosticOptions) -> bool {
    info!(unit = name, lines = lines.len(), "tokenizing");
    let mut lexer = Lexer::with_config(config.clone());

    for (index, text) in lines.iter().enumerate() {
        let line = index as u32 + 1;
        let before = lexer.tokens().len();
        if let Err(error) = lexer.scan_line(text, line) {
            diagnostics::report(&error, name, lines, diag_opts);
            return false;
        }
        for token in &lexer.tokens()[before..] {
            println!("{}", output::format_token(line, token, diag_opts.json));
        }
    }

    info!(unit = name, tokens = lexer.tokens().len(), "done");
    true
}
