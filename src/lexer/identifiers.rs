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

//! Identifier and keyword scanning for the lexer.
//!
//! This module handles scanning of:
//! - Identifiers (`[A-Za-z_][A-Za-z0-9_]*`)
//! - Keywords, matched case-insensitively
//! - Block keywords, which also switch the lexer's region

use super::cursor::Position;
use super::helpers::{is_identifier_continue, LexerHelpers};
use super::{Keyword, Lexer, Region, Token, TokenKind};

/// Trait for identifier scanning operations.
pub trait IdentifierScanner<'source> {
    /// Scan an identifier or keyword whose first character was consumed.
    fn scan_identifier(&mut self, first: char, start: Position) -> Token;

    /// Switch to a new block region.
    fn enter_region(&mut self, region: Region);
}

impl<'source> IdentifierScanner<'source> for Lexer<'source> {
    fn scan_identifier(&mut self, first: char, start: Position) -> Token {
        let mut text = String::from(first);

        while let Some(c) = self.cursor.read() {
            if is_identifier_continue(c) {
                text.push(c);
            } else {
                self.cursor.unread();
                break;
            }
        }

        let Some(keyword) = Keyword::lookup(&text.to_ascii_uppercase()) else {
            return self.make_token(TokenKind::Identifier, text, start);
        };

        // The block keyword itself already belongs to the new region
        if let Some(region) = keyword.region() {
            self.enter_region(region);
        }

        self.make_token(TokenKind::Keyword(keyword), text, start)
    }

    fn enter_region(&mut self, region: Region) {
        tracing::debug!(from = %self.region, to = %region, "entering block");
        self.region = region;
        self.block_start = true;
    }
}
