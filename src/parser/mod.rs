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

//! Parser module for the Lame front end.
//!
//! This module pulls tokens from a [`Lexer`] on demand and builds an
//! [`Object`]. It keeps exactly one token of pushback, which is all the
//! grammar needs: a block runs until the next block keyword, and a `CON`
//! body is a list of `NAME = NUMBER` declarations.
//!
//! # Module Structure
//!
//! - `blocks` - Block dispatch, `CON` bodies, number literals (BlockParser trait)
//! - `helpers` - Token pulling, pushback and error handling (ParserHelpers trait)

// Submodules
pub mod blocks;
pub mod helpers;

// Internal imports from submodules
use blocks::BlockParser;
use helpers::ParserHelpers;

use crate::ast::Object;
use crate::error::{CompileError, ErrorCode};
use crate::lexer::{Lexer, Token, TokenKind};

/// The parser state.
pub struct Parser<'source> {
    /// The token source.
    pub(crate) lexer: Lexer<'source>,
    /// A token returned by `unscan`, handed out by the next `scan`.
    pub(crate) pushed_back: Option<Token>,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source code.
    pub fn new(source: &'source str) -> Self {
        Self {
            lexer: Lexer::new(source),
            pushed_back: None,
        }
    }

    // ========================================
    // Object Parsing
    // ========================================

    /// Parse the complete source into its blocks.
    #[tracing::instrument(skip_all)]
    pub fn parse(&mut self) -> Result<Object, CompileError> {
        let mut object = Object::new();

        loop {
            let token = self.next_significant()?;
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::Keyword(keyword) if keyword.is_block() => {
                    let block = self.parse_block(keyword, token)?;
                    object.add_block(block);
                }
                _ => {
                    return Err(self
                        .error_at(
                            &token,
                            ErrorCode::ExpectedBlock,
                            format!("Expected a block keyword, found {}", token),
                        )
                        .with_hint("Code must be inside a CON, DAT, OBJ, PRI, PUB or VAR block"));
                }
            }
        }

        tracing::debug!(blocks = object.blocks.len(), "parsed object");
        Ok(object)
    }
}

/// Parse source code into an object AST.
pub fn parse(source: &str) -> Result<Object, CompileError> {
    let mut parser = Parser::new(source);
    parser.parse()
}
