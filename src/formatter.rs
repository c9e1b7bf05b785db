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

//! Source formatter.
//!
//! Re-indents `PRI`/`PUB` bodies from the lexer's INDENT/DEDENT stream:
//! a body line at nesting depth `d` starts with `d + 1` indentation units.
//! Every other token keeps its source text, so lines outside methods and
//! whitespace inside lines are left alone. Trailing whitespace is dropped.

use crate::error::Result;
use crate::lexer::{Lexer, Region, TokenKind};
use crate::parser::helpers::lexical_error;

/// One level of method-body indentation.
pub const INDENT_UNIT: &str = "  ";

/// Re-indent a source file.
///
/// Stops at the first ILLEGAL or UNEXPECTED_EOF token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn format_source(source: &str) -> Result<String> {
    let mut lexer = Lexer::new(source);
    let mut output = String::with_capacity(source.len());
    let mut depth = 0usize;
    let mut line_start = true;
    // Leading whitespace of the current line, kept until the first token
    // shows whether the line belongs to a method body
    let mut leading = "";

    loop {
        let token = lexer.next_token();
        if let Some(error) = lexical_error(&token) {
            return Err(error);
        }

        let text = &source[token.span.start..token.span.end];
        match token.kind {
            TokenKind::Eof => break,
            TokenKind::Indent => depth += 1,
            TokenKind::Dedent => depth = depth.saturating_sub(1),
            TokenKind::Newline => {
                trim_trailing_whitespace(&mut output);
                output.push('\n');
                line_start = true;
                leading = "";
            }
            TokenKind::Space if line_start => leading = text,
            _ => {
                if line_start {
                    if token.region == Region::Function && !token.kind.is_block_keyword() {
                        output.push_str(&INDENT_UNIT.repeat(depth + 1));
                    } else {
                        output.push_str(leading);
                    }
                    line_start = false;
                }
                output.push_str(text);
            }
        }
    }

    trim_trailing_whitespace(&mut output);
    tracing::debug!(bytes = output.len(), "formatted");
    Ok(output)
}

fn trim_trailing_whitespace(output: &mut String) {
    let len = output.trim_end_matches([' ', '\t']).len();
    output.truncate(len);
}
