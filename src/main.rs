// Lame - A lexical front end for a Spin-like block language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Lame CLI
//!
//! Dumps the token stream or the block structure of a source file.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use lame::error::{format_error, SourceLocation};
use lame::lexer::{Lexer, Token, TokenKind};
use lame::parser::helpers::lexical_error;
use lame::Block;

/// Lame - A lexical front end for a Spin-like block language
#[derive(Parser, Debug)]
#[command(name = "lame")]
#[command(author = "Lame Team")]
#[command(version)]
#[command(about = "Tokenize and parse CON/DAT/OBJ/PRI/PUB/VAR source files")]
#[command(long_about = r#"
Lame reads source files made of CON, DAT, OBJ, PRI, PUB and VAR blocks and
prints what the front end sees in them.

Example usage:
  lame tokens blink.spin
  lame parse blink.spin
  lame fmt blink.spin > formatted.spin
  lame --verbose tokens blink.spin

Set RUST_LOG (e.g. RUST_LOG=lame=trace) to control log output.
"#)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one line per token: region, kind, line/column and literal
    Tokens {
        /// Source file to tokenize
        file: PathBuf,
    },
    /// Parse the file and print its blocks and constants
    Parse {
        /// Source file to parse
        file: PathBuf,
    },
    /// Print the file with PRI/PUB bodies re-indented
    Fmt {
        /// Source file to format
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let path = match &cli.command {
        Command::Tokens { file } | Command::Parse { file } | Command::Fmt { file } => {
            file.as_path()
        }
    };

    let source = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: Cannot read {}: {}", path.display(), e);
            return ExitCode::from(3);
        }
    };
    tracing::debug!(path = %path.display(), bytes = source.len(), "read source");

    let filename = display_name(path);
    match cli.command {
        Command::Tokens { .. } => dump_tokens(&source, &filename),
        Command::Parse { .. } => dump_object(&source, &filename),
        Command::Fmt { .. } => print_formatted(&source, &filename),
    }
}

/// Install the log subscriber; `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("<input>")
        .to_string()
}

/// Print every token until EOF, stopping at the first lexical error.
fn dump_tokens(source: &str, filename: &str) -> ExitCode {
    let mut lexer = Lexer::new(source);
    let mut depth = 0usize;

    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::Dedent {
            depth = depth.saturating_sub(1);
        }

        println!("{}", format_token(&token, depth));

        if let Some(error) = lexical_error(&token) {
            eprint!("{}", format_error(&error, source, Some(filename)));
            return ExitCode::from(1);
        }

        match token.kind {
            TokenKind::Indent => depth += 1,
            TokenKind::Eof => break,
            _ => {}
        }
    }

    ExitCode::SUCCESS
}

/// One dump line: region, kind, 1-based position, literal indented by depth.
fn format_token(token: &Token, depth: usize) -> String {
    format!(
        "{:<3} {:<16} ({:>4}, {:>4}): {}'{}'",
        token.region.abbreviation(),
        token.kind.name(),
        token.line + 1,
        token.column + 1,
        "  ".repeat(depth),
        token.text.escape_debug()
    )
}

/// Print the parsed blocks, or the first error.
fn dump_object(source: &str, filename: &str) -> ExitCode {
    let object = match lame::parse_source(source) {
        Ok(object) => object,
        Err(e) => {
            eprint!("{}", format_error(&e, source, Some(filename)));
            return ExitCode::from(1);
        }
    };

    for block in &object.blocks {
        let location = SourceLocation::from_offset(source, block.span().start);
        println!("{} (line {})", block.keyword().as_str(), location.line);

        if let Block::Con(con) = block {
            for constant in &con.declarations {
                println!("  {} ({})", constant, constant.value.value);
            }
        }
    }

    ExitCode::SUCCESS
}

/// Print the re-indented source, or the first lexical error.
fn print_formatted(source: &str, filename: &str) -> ExitCode {
    match lame::format_source(source) {
        Ok(formatted) => {
            print!("{}", formatted);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprint!("{}", format_error(&e, source, Some(filename)));
            ExitCode::from(1)
        }
    }
}
