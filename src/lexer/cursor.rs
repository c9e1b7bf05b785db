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

//! Character cursor for the lexer.
//!
//! Delivers one character at a time with exactly one character of pushback
//! and keeps 0-based line/column bookkeeping in step with the byte offset.

/// A point in the source: byte offset plus 0-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset into the source.
    pub offset: usize,
    /// 0-based line number.
    pub line: usize,
    /// 0-based column, counted in characters.
    pub column: usize,
}

/// Reads characters from a source string.
#[derive(Debug, Clone)]
pub struct Cursor<'source> {
    source: &'source str,
    position: Position,
    /// The character returned by the last `read`, if it can be pushed back.
    last: Option<char>,
    /// Column before the last newline was read, restored by `unread`.
    last_column: usize,
}

impl<'source> Cursor<'source> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            position: Position::default(),
            last: None,
            last_column: 0,
        }
    }

    /// Where the next `read` will start.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Check if every character has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position.offset >= self.source.len()
    }

    /// Read the next character, or `None` once the input is exhausted.
    ///
    /// Reading past the end keeps returning `None`.
    pub fn read(&mut self) -> Option<char> {
        let next = self.source[self.position.offset..].chars().next();
        self.last = next;

        let c = next?;
        self.position.offset += c.len_utf8();
        if c == '\n' {
            self.last_column = self.position.column;
            self.position.line += 1;
            self.position.column = 0;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }

    /// Push back the character returned by the last `read`.
    ///
    /// Only one level of pushback exists; a second `unread` without an
    /// intervening `read`, or an `unread` after `read` returned `None`,
    /// does nothing.
    pub fn unread(&mut self) {
        let Some(c) = self.last.take() else {
            return;
        };
        self.position.offset -= c.len_utf8();
        if c == '\n' {
            self.position.line -= 1;
            self.position.column = self.last_column;
        } else {
            self.position.column -= 1;
        }
    }

    /// Slice the source between `start` and the current position.
    pub fn slice_from(&self, start: Position) -> &'source str {
        &self.source[start.offset..self.position.offset]
    }
}
