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

//! Operator and punctuation scanning for the lexer.
//!
//! Two-character operators win over their one-character prefixes. `%`, `$`,
//! `'` and `{` never reach this scanner; they start literals or comments.

use super::cursor::Position;
use super::helpers::LexerHelpers;
use super::{Lexer, Token, TokenKind};

/// Trait for operator scanning operations.
pub trait OperatorScanner<'source> {
    /// Scan an operator or punctuation whose first character was consumed.
    ///
    /// Unknown characters become an ILLEGAL token carrying the character.
    fn scan_operator(&mut self, first: char, start: Position) -> Token;
}

impl<'source> OperatorScanner<'source> for Lexer<'source> {
    fn scan_operator(&mut self, first: char, start: Position) -> Token {
        let kind = match first {
            '+' if self.next_is('=') => TokenKind::AddAssign,
            '+' => TokenKind::Add,
            '-' if self.next_is('=') => TokenKind::SubtractAssign,
            '-' if self.next_is('>') => TokenKind::BitwiseRotateRight,
            '-' => TokenKind::Subtract,
            '*' if self.next_is('=') => TokenKind::MultiplyAssign,
            '*' => TokenKind::Multiply,
            '/' if self.next_is('=') => TokenKind::DivideAssign,
            '/' => TokenKind::Divide,
            '=' if self.next_is('=') => TokenKind::EqualTo,
            '=' => TokenKind::Assign,
            '<' if self.next_is('=') => TokenKind::LessThanEqualTo,
            '<' if self.next_is('<') => TokenKind::BitwiseShiftLeft,
            '<' if self.next_is('-') => TokenKind::BitwiseRotateLeft,
            '<' => TokenKind::LessThan,
            '>' if self.next_is('=') => TokenKind::GreaterThanEqualTo,
            '>' if self.next_is('>') => TokenKind::BitwiseShiftRight,
            '>' if self.next_is('<') => TokenKind::BitwiseReverse,
            '>' => TokenKind::GreaterThan,
            '&' if self.next_is('=') => TokenKind::BitwiseAndAssign,
            '&' => TokenKind::BitwiseAnd,
            '|' if self.next_is('=') => TokenKind::BitwiseOrAssign,
            '|' => TokenKind::BitwiseOr,
            '^' if self.next_is('=') => TokenKind::BitwiseXorAssign,
            '^' => TokenKind::BitwiseXor,
            '~' if self.next_is('>') => TokenKind::BitwiseSignedShiftRight,
            '~' if self.next_is('~') => TokenKind::BitwiseSignExtend15,
            '~' => TokenKind::BitwiseSignExtend7,
            '.' if self.next_is('.') => TokenKind::Range,
            '.' => TokenKind::Dot,
            '!' => TokenKind::BitwiseNot,
            '@' => TokenKind::At,
            '#' => TokenKind::Pound,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '(' => TokenKind::ParenOpen,
            ')' => TokenKind::ParenClose,
            '[' => TokenKind::BracketOpen,
            ']' => TokenKind::BracketClose,
            '}' => TokenKind::BraceClose,
            _ => {
                tracing::debug!(character = ?first, line = start.line, column = start.column, "illegal character");
                TokenKind::Illegal
            }
        };

        let text = self.cursor.slice_from(start);
        self.make_token(kind, text, start)
    }
}
