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

//! Number literal scanning for the lexer.
//!
//! Supported formats:
//! - Decimal: `123`, `1_000`
//! - Binary: `%1010`, `%1010_0101`
//! - Quaternary: `%%0123`
//! - Hexadecimal: `$FF`, `$ff_00`
//!
//! Scanning is greedy: a literal ends at the first character outside its
//! digit alphabet and `_`, which is left for the next token. The token text
//! holds the digits without the radix prefix. Values are not computed here.

use super::cursor::Position;
use super::helpers::{
    is_binary_digit, is_decimal_digit, is_group_separator, is_hexadecimal_digit,
    is_quaternary_digit, LexerHelpers,
};
use super::{Lexer, Token, TokenKind};

/// Trait for number scanning operations.
pub trait NumberScanner<'source> {
    /// Scan a decimal literal whose first digit was consumed.
    fn scan_decimal_number(&mut self, first: char, start: Position) -> Token;

    /// Scan after a consumed `$`: a hex literal, or a lone DOLLAR.
    fn scan_hexadecimal_number(&mut self, start: Position) -> Token;

    /// Scan after a consumed `%`: binary, quaternary, `%=` or MODULO.
    fn scan_percent(&mut self, start: Position) -> Token;

    /// Append digits of one alphabet (plus group separators) to `text`.
    fn scan_digits(&mut self, text: &mut String, is_digit: fn(char) -> bool);
}

impl<'source> NumberScanner<'source> for Lexer<'source> {
    fn scan_decimal_number(&mut self, first: char, start: Position) -> Token {
        let mut text = String::from(first);
        self.scan_digits(&mut text, is_decimal_digit);
        self.make_token(TokenKind::DecimalNumber, text, start)
    }

    fn scan_hexadecimal_number(&mut self, start: Position) -> Token {
        match self.cursor.read() {
            Some(c) if is_hexadecimal_digit(c) => {
                let mut text = String::from(c);
                self.scan_digits(&mut text, is_hexadecimal_digit);
                self.make_token(TokenKind::HexadecimalNumber, text, start)
            }
            _ => {
                self.cursor.unread();
                self.make_token(TokenKind::Dollar, "$", start)
            }
        }
    }

    fn scan_percent(&mut self, start: Position) -> Token {
        match self.cursor.read() {
            Some('%') => {
                // May stay empty; the parser rejects that
                let mut text = String::new();
                self.scan_digits(&mut text, is_quaternary_digit);
                self.make_token(TokenKind::QuaternaryNumber, text, start)
            }
            Some('=') => self.make_token(TokenKind::ModuloAssign, "%=", start),
            Some(c) if is_binary_digit(c) => {
                let mut text = String::from(c);
                self.scan_digits(&mut text, is_binary_digit);
                self.make_token(TokenKind::BinaryNumber, text, start)
            }
            _ => {
                self.cursor.unread();
                self.make_token(TokenKind::Modulo, "%", start)
            }
        }
    }

    fn scan_digits(&mut self, text: &mut String, is_digit: fn(char) -> bool) {
        while let Some(c) = self.cursor.read() {
            if is_digit(c) || is_group_separator(c) {
                text.push(c);
            } else {
                self.cursor.unread();
                break;
            }
        }
    }
}
