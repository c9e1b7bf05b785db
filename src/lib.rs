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

//! Lame Front End Library
//!
//! This library tokenizes and parses source files of a Spin-like language
//! made of `CON`, `DAT`, `OBJ`, `PRI`, `PUB` and `VAR` blocks.
//!
//! # Modules
//!
//! - [`error`] - Error types and error reporting
//! - [`formatter`] - Re-indenting method bodies
//! - [`lexer`] - Tokenization of source code
//! - [`parser`] - Parsing the token stream into an AST
//! - [`ast`] - Abstract Syntax Tree definitions
//!
//! # Example
//!
//! ```
//! use lame::lexer::{tokenize, TokenKind};
//!
//! let tokens = tokenize("CON\n  x = %%0123\n");
//! assert_eq!(tokens[0].kind.name(), "CON");
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//!
//! let object = lame::parse_source("CON\n  x = %%0123\n").unwrap();
//! assert_eq!(object.find_constant("X").map(|c| c.value.value), Some(27));
//! ```

pub mod ast;
pub mod error;
pub mod formatter;
pub mod lexer;
pub mod parser;

// Re-export commonly used types
pub use ast::{Block, Object};
pub use error::{format_error, CompileError, ErrorCode, Result, SourceLocation, Span};
pub use formatter::format_source;
pub use lexer::{Keyword, Region, Token, TokenKind};

/// The version of the Lame front end.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the front end.
pub const NAME: &str = "Lame";

/// Parse source code into an object.
///
/// Runs the lexer and the parser in one pass. The first lexical or
/// structural error stops parsing.
///
/// # Example
///
/// ```
/// match lame::parse_source("PUB main\n  return\n") {
///     Ok(object) => println!("{} block(s)", object.blocks.len()),
///     Err(e) => eprintln!("Parse error: {}", e),
/// }
/// ```
pub fn parse_source(source: &str) -> Result<Object> {
    parser::parse(source)
}
