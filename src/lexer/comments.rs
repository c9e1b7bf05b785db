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

//! Comment scanning for the lexer.
//!
//! - `' text` is a line comment and `'' text` a line doc comment; both end
//!   before the newline.
//! - `{ text }` is a block comment and `{{ text }}` a block doc comment; both
//!   may span lines and do not nest.
//!
//! The token text is the comment body without its delimiters.

use super::cursor::Position;
use super::helpers::{is_block_comment_end, is_newline, LexerHelpers};
use super::{Lexer, Token, TokenKind};

/// Trait for comment scanning operations.
pub trait CommentScanner<'source> {
    /// Scan after a consumed `'`.
    fn scan_quote_comment(&mut self, start: Position) -> Token;

    /// Scan a line comment body up to (not including) the newline.
    fn scan_line_comment(&mut self, start: Position) -> Token;

    /// Scan a line doc comment body after `''`.
    fn scan_line_doc_comment(&mut self, start: Position) -> Token;

    /// Scan after a consumed `{`.
    fn scan_brace_comment(&mut self, start: Position) -> Token;

    /// Scan a block comment body through the closing `}`.
    fn scan_block_comment(&mut self, start: Position) -> Token;

    /// Scan a block doc comment body after `{{` through the closing `}}`.
    fn scan_block_doc_comment(&mut self, start: Position) -> Token;
}

impl<'source> CommentScanner<'source> for Lexer<'source> {
    fn scan_quote_comment(&mut self, start: Position) -> Token {
        if self.next_is('\'') {
            self.scan_line_doc_comment(start)
        } else {
            self.scan_line_comment(start)
        }
    }

    fn scan_line_comment(&mut self, start: Position) -> Token {
        let mut text = String::new();

        while let Some(c) = self.cursor.read() {
            if is_newline(c) {
                self.cursor.unread();
                break;
            }
            text.push(c);
        }

        self.make_token(TokenKind::Comment, text, start)
    }

    fn scan_line_doc_comment(&mut self, start: Position) -> Token {
        let mut token = self.scan_line_comment(start);
        token.kind = TokenKind::DocComment;
        token
    }

    fn scan_brace_comment(&mut self, start: Position) -> Token {
        if self.next_is('{') {
            self.scan_block_doc_comment(start)
        } else {
            self.scan_block_comment(start)
        }
    }

    fn scan_block_comment(&mut self, start: Position) -> Token {
        let mut text = String::new();

        loop {
            match self.cursor.read() {
                None => return self.make_token(TokenKind::UnexpectedEof, "", start),
                Some(c) if is_block_comment_end(c) => break,
                Some(c) => text.push(c),
            }
        }

        self.make_token(TokenKind::Comment, text, start)
    }

    fn scan_block_doc_comment(&mut self, start: Position) -> Token {
        let body = self.scan_block_comment(start);
        let found = if body.kind == TokenKind::UnexpectedEof {
            None
        } else {
            // The body ended at one `}`; a doc comment needs a second
            match self.cursor.read() {
                Some(c) if is_block_comment_end(c) => {
                    return self.make_token(TokenKind::DocComment, body.text, start);
                }
                found => found,
            }
        };

        tracing::debug!(
            found = ?found,
            line = start.line,
            column = start.column,
            "unterminated doc comment"
        );
        let text = found.map(String::from).unwrap_or_default();
        self.make_token(TokenKind::Illegal, text, start)
    }
}
