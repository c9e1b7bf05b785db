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

//! Lexer helpers: character classes and token construction.

use super::cursor::Position;
use super::Lexer;
use super::{Token, TokenKind};
use crate::error::Span;

pub fn is_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

pub fn is_newline(c: char) -> bool {
    c == '\n'
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || is_decimal_digit(c)
}

pub fn is_group_separator(c: char) -> bool {
    c == '_'
}

pub fn is_binary_digit(c: char) -> bool {
    matches!(c, '0'..='1')
}

pub fn is_quaternary_digit(c: char) -> bool {
    matches!(c, '0'..='3')
}

pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_hexadecimal_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

pub fn is_line_comment_start(c: char) -> bool {
    c == '\''
}

pub fn is_block_comment_start(c: char) -> bool {
    c == '{'
}

pub fn is_block_comment_end(c: char) -> bool {
    c == '}'
}

/// Characters that end indentation measurement on a line.
///
/// Whitespace and comments leave a line's indentation provisional.
pub fn is_significant(c: char) -> bool {
    !is_space(c) && !is_newline(c) && !is_line_comment_start(c) && !is_block_comment_start(c)
}

/// Trait for token construction.
pub trait LexerHelpers<'source> {
    /// Position of the next character to be read.
    fn mark(&self) -> Position;

    /// Build a token spanning from `start` to the current position.
    fn make_token(&self, kind: TokenKind, text: impl Into<String>, start: Position) -> Token;

    /// Build a zero-width token at the current position.
    fn make_synthetic(&self, kind: TokenKind) -> Token;

    /// Consume the next character if it is `expected`.
    fn next_is(&mut self, expected: char) -> bool;
}

impl<'source> LexerHelpers<'source> for Lexer<'source> {
    fn mark(&self) -> Position {
        self.cursor.position()
    }

    fn make_token(&self, kind: TokenKind, text: impl Into<String>, start: Position) -> Token {
        Token {
            kind,
            text: text.into(),
            region: self.region,
            line: start.line,
            column: start.column,
            span: Span::new(start.offset, self.cursor.position().offset),
        }
    }

    fn make_synthetic(&self, kind: TokenKind) -> Token {
        self.make_token(kind, "", self.mark())
    }

    fn next_is(&mut self, expected: char) -> bool {
        match self.cursor.read() {
            Some(c) if c == expected => true,
            _ => {
                self.cursor.unread();
                false
            }
        }
    }
}

/// Run `f` with a DEBUG-level subscriber and return what it logged.
#[cfg(test)]
pub(crate) fn capture_debug_logs(f: impl FnOnce()) -> String {
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8_lossy(&bytes).into_owned()
}
