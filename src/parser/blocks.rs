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

//! Block parsing for the parser.
//!
//! This module provides block-level parsing:
//! - Dispatch on the block keyword
//! - `CON` bodies (`NAME = NUMBER` declarations)
//! - Skipping the bodies of all other blocks
//! - Number literal conversion

use super::helpers::ParserHelpers;
use super::Parser;
use crate::ast::{Block, ConBlock, ConstantDeclaration, NumberLiteral, Radix, RawBlock};
use crate::error::{CompileError, ErrorCode};
use crate::lexer::{Keyword, Token, TokenKind};
use std::num::IntErrorKind;

/// Extension trait for block parsing.
pub trait BlockParser {
    /// Parse the block opened by `keyword`.
    fn parse_block(&mut self, keyword: Keyword, start: Token) -> Result<Block, CompileError>;

    /// Parse a `CON` body.
    fn parse_con_block(&mut self, start: Token) -> Result<ConBlock, CompileError>;

    /// Parse `= NUMBER` after a constant name.
    fn parse_constant_declaration(
        &mut self,
        name: Token,
    ) -> Result<ConstantDeclaration, CompileError>;

    /// Skip a block body up to the next block keyword or end of input.
    fn skip_block_body(&mut self, start: Token) -> Result<RawBlock, CompileError>;

    /// Convert a number token into a literal with its value.
    fn parse_number_literal(&self, token: &Token) -> Result<NumberLiteral, CompileError>;
}

/// Check if a token ends the current block.
fn ends_block(token: &Token) -> bool {
    token.kind == TokenKind::Eof || token.kind.is_block_keyword()
}

impl<'source> BlockParser for Parser<'source> {
    fn parse_block(&mut self, keyword: Keyword, start: Token) -> Result<Block, CompileError> {
        tracing::trace!(block = keyword.as_str(), line = start.line, "block");
        let block = match keyword {
            Keyword::Con => Block::Con(self.parse_con_block(start)?),
            Keyword::Dat => Block::Dat(self.skip_block_body(start)?),
            Keyword::Obj => Block::Obj(self.skip_block_body(start)?),
            Keyword::Pri => Block::Pri(self.skip_block_body(start)?),
            Keyword::Pub => Block::Pub(self.skip_block_body(start)?),
            Keyword::Var => Block::Var(self.skip_block_body(start)?),
            _ => {
                return Err(self.error_at(
                    &start,
                    ErrorCode::ExpectedBlock,
                    format!("Expected a block keyword, found {}", start),
                ))
            }
        };
        Ok(block)
    }

    fn parse_con_block(&mut self, start: Token) -> Result<ConBlock, CompileError> {
        let mut declarations = Vec::new();
        let mut span = start.span;

        loop {
            let token = self.next_significant()?;
            if ends_block(&token) {
                self.unscan(token);
                break;
            }
            if token.kind != TokenKind::Identifier {
                return Err(self
                    .error_at(
                        &token,
                        ErrorCode::ExpectedIdentifier,
                        format!("Expected constant name, found {}", token),
                    )
                    .with_hint("Constants are declared as NAME = VALUE"));
            }

            let declaration = self.parse_constant_declaration(token)?;
            span = span.merge(&declaration.span);
            declarations.push(declaration);
        }

        Ok(ConBlock { declarations, span })
    }

    fn parse_constant_declaration(
        &mut self,
        name: Token,
    ) -> Result<ConstantDeclaration, CompileError> {
        self.expect(
            TokenKind::Assign,
            ErrorCode::ExpectedAssignment,
            "Expected '=' after constant name",
        )?;

        let token = self.next_significant()?;
        if !token.kind.is_number() {
            return Err(self.error_at(
                &token,
                ErrorCode::ExpectedConstantValue,
                format!("Expected number literal for constant '{}', found {}", name.text, token),
            ));
        }

        let value = self.parse_number_literal(&token)?;
        Ok(ConstantDeclaration {
            name: name.text,
            value,
            span: name.span.merge(&token.span),
        })
    }

    fn skip_block_body(&mut self, start: Token) -> Result<RawBlock, CompileError> {
        let mut span = start.span;

        loop {
            let token = self.scan();
            let token = self.check_lexical(token)?;
            if ends_block(&token) {
                self.unscan(token);
                break;
            }
            if !token.kind.is_trivia() && !token.span.is_empty() {
                span = span.merge(&token.span);
            }
        }

        Ok(RawBlock { span })
    }

    fn parse_number_literal(&self, token: &Token) -> Result<NumberLiteral, CompileError> {
        let Some(radix) = Radix::from_token_kind(token.kind) else {
            return Err(self.error_at(
                token,
                ErrorCode::UnexpectedToken,
                format!("Expected number literal, found {}", token),
            ));
        };

        let digits: String = token.text.chars().filter(|&c| c != '_').collect();
        if digits.is_empty() {
            return Err(self
                .error_at(
                    token,
                    ErrorCode::EmptyNumberLiteral,
                    "Number literal has no digits",
                )
                .with_hint(format!("Write at least one digit after '{}'", radix.prefix())));
        }

        let value = u32::from_str_radix(&digits, radix.base()).map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow => self
                .error_at(
                    token,
                    ErrorCode::IntegerTooLarge,
                    format!("Number literal {} does not fit in 32 bits", token),
                )
                .with_hint("The largest value is 4294967295 ($FFFF_FFFF)"),
            _ => self.error_at(
                token,
                ErrorCode::InvalidDigitInNumber,
                format!("Invalid digit in base-{} literal {}", radix.base(), token),
            ),
        })?;

        Ok(NumberLiteral {
            radix,
            digits: token.text.clone(),
            value,
        })
    }
}
