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

//! String literal scanning for the lexer.
//!
//! Strings are delimited by `"` and may span lines. Supported escapes:
//! `\n`, `\t`, `\"` and `\<decimal digits>` for a character code. The token
//! text is the decoded value without the quotes.

use super::cursor::Position;
use super::helpers::{is_decimal_digit, LexerHelpers};
use super::{Lexer, Token, TokenKind};

/// Trait for string scanning operations.
pub trait StringScanner<'source> {
    /// Scan a string literal whose opening quote was consumed.
    fn scan_string(&mut self, start: Position) -> Token;

    /// Decode a `\<digits>` escape whose first digit was consumed.
    ///
    /// On failure the digits are returned so they can be reported.
    fn scan_character_code(&mut self, first: char) -> Result<char, String>;
}

impl<'source> StringScanner<'source> for Lexer<'source> {
    fn scan_string(&mut self, start: Position) -> Token {
        let mut value = String::new();

        loop {
            match self.cursor.read() {
                None => return self.make_token(TokenKind::UnexpectedEof, "", start),
                Some('"') => break,
                Some('\\') => match self.cursor.read() {
                    None => return self.make_token(TokenKind::UnexpectedEof, "", start),
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('"') => value.push('"'),
                    Some(c) if is_decimal_digit(c) => match self.scan_character_code(c) {
                        Ok(decoded) => value.push(decoded),
                        Err(digits) => {
                            tracing::debug!(
                                code = %digits,
                                line = start.line,
                                column = start.column,
                                "invalid character code"
                            );
                            return self.make_token(TokenKind::Illegal, digits, start);
                        }
                    },
                    Some(c) => {
                        tracing::debug!(
                            escape = ?c,
                            line = start.line,
                            column = start.column,
                            "unknown escape sequence"
                        );
                        return self.make_token(TokenKind::Illegal, c.to_string(), start);
                    }
                },
                Some(c) => value.push(c),
            }
        }

        self.make_token(TokenKind::String, value, start)
    }

    fn scan_character_code(&mut self, first: char) -> Result<char, String> {
        let mut digits = String::from(first);

        while let Some(c) = self.cursor.read() {
            if is_decimal_digit(c) {
                digits.push(c);
            } else {
                self.cursor.unread();
                break;
            }
        }

        digits
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .ok_or(digits)
    }
}
