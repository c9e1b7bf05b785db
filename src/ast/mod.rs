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

//! Abstract Syntax Tree (AST) definitions for the Lame front end.
//!
//! An [`Object`] is one source file: a sequence of top-level blocks. Only
//! `CON` bodies are parsed into declarations; every other block is kept as
//! a span over its source.

use crate::error::Span;
use crate::lexer::{Keyword, Region, TokenKind};
use std::fmt;

/// A parsed source file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Object {
    /// Blocks in source order.
    pub blocks: Vec<Block>,
}

impl Object {
    /// Create a new empty object.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Add a block to the object.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// All constant declarations, across every `CON` block.
    pub fn constants(&self) -> impl Iterator<Item = &ConstantDeclaration> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Con(con) => Some(con),
                _ => None,
            })
            .flat_map(|con| con.declarations.iter())
    }

    /// Find a constant by name. Names compare case-insensitively.
    pub fn find_constant(&self, name: &str) -> Option<&ConstantDeclaration> {
        self.constants()
            .find(|constant| constant.name.eq_ignore_ascii_case(name))
    }
}

/// A top-level block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A `CON` block with its constant declarations.
    Con(ConBlock),
    /// A `DAT` block.
    Dat(RawBlock),
    /// An `OBJ` block.
    Obj(RawBlock),
    /// A `PRI` method.
    Pri(RawBlock),
    /// A `PUB` method.
    Pub(RawBlock),
    /// A `VAR` block.
    Var(RawBlock),
}

impl Block {
    /// The keyword that opens this block.
    pub fn keyword(&self) -> Keyword {
        match self {
            Block::Con(_) => Keyword::Con,
            Block::Dat(_) => Keyword::Dat,
            Block::Obj(_) => Keyword::Obj,
            Block::Pri(_) => Keyword::Pri,
            Block::Pub(_) => Keyword::Pub,
            Block::Var(_) => Keyword::Var,
        }
    }

    /// The region the block's tokens belong to.
    pub fn region(&self) -> Region {
        self.keyword().region().unwrap_or_default()
    }

    /// Source span from the block keyword to the last token of the body.
    pub fn span(&self) -> Span {
        match self {
            Block::Con(con) => con.span,
            Block::Dat(raw)
            | Block::Obj(raw)
            | Block::Pri(raw)
            | Block::Pub(raw)
            | Block::Var(raw) => raw.span,
        }
    }
}

/// A `CON` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConBlock {
    pub declarations: Vec<ConstantDeclaration>,
    pub span: Span,
}

/// A block whose body is not parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock {
    pub span: Span,
}

/// `NAME = VALUE` inside a `CON` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantDeclaration {
    /// The constant name as written.
    pub name: String,
    /// The assigned literal.
    pub value: NumberLiteral,
    /// Span from the name to the end of the value.
    pub span: Span,
}

impl fmt::Display for ConstantDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// The radix of a number literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Quaternary,
    Decimal,
    Hexadecimal,
}

impl Radix {
    /// Numeric base.
    pub fn base(&self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Quaternary => 4,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// Source prefix introducing a literal of this radix.
    pub fn prefix(&self) -> &'static str {
        match self {
            Radix::Binary => "%",
            Radix::Quaternary => "%%",
            Radix::Decimal => "",
            Radix::Hexadecimal => "$",
        }
    }

    /// The radix of a number token kind.
    pub fn from_token_kind(kind: TokenKind) -> Option<Radix> {
        match kind {
            TokenKind::BinaryNumber => Some(Radix::Binary),
            TokenKind::QuaternaryNumber => Some(Radix::Quaternary),
            TokenKind::DecimalNumber => Some(Radix::Decimal),
            TokenKind::HexadecimalNumber => Some(Radix::Hexadecimal),
            _ => None,
        }
    }
}

/// A number literal with its 32-bit value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
    pub radix: Radix,
    /// Digits as written, group separators included, prefix excluded.
    pub digits: String,
    pub value: u32,
}

impl fmt::Display for NumberLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.radix.prefix(), self.digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(name: &str, value: u32) -> ConstantDeclaration {
        ConstantDeclaration {
            name: name.to_string(),
            value: NumberLiteral {
                radix: Radix::Decimal,
                digits: value.to_string(),
                value,
            },
            span: Span::default(),
        }
    }

    #[test]
    fn test_object_constants_across_blocks() {
        let mut object = Object::new();
        object.add_block(Block::Con(ConBlock {
            declarations: vec![constant("A", 1)],
            span: Span::new(0, 10),
        }));
        object.add_block(Block::Pub(RawBlock {
            span: Span::new(11, 20),
        }));
        object.add_block(Block::Con(ConBlock {
            declarations: vec![constant("B", 2), constant("C", 3)],
            span: Span::new(21, 40),
        }));

        let names: Vec<_> = object.constants().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(object.find_constant("b").map(|c| c.value.value), Some(2));
        assert!(object.find_constant("D").is_none());
    }

    #[test]
    fn test_block_keyword_and_region() {
        let block = Block::Pri(RawBlock {
            span: Span::new(3, 9),
        });
        assert_eq!(block.keyword(), Keyword::Pri);
        assert_eq!(block.region(), Region::Function);
        assert_eq!(block.span(), Span::new(3, 9));
    }

    #[test]
    fn test_radix_from_token_kind() {
        assert_eq!(
            Radix::from_token_kind(TokenKind::QuaternaryNumber),
            Some(Radix::Quaternary)
        );
        assert_eq!(Radix::from_token_kind(TokenKind::Identifier), None);
        assert_eq!(Radix::Hexadecimal.base(), 16);
    }

    #[test]
    fn test_literal_display_restores_prefix() {
        let literal = NumberLiteral {
            radix: Radix::Hexadecimal,
            digits: "FF_00".to_string(),
            value: 0xFF00,
        };
        assert_eq!(literal.to_string(), "$FF_00");
        let declaration = ConstantDeclaration {
            name: "MASK".to_string(),
            value: literal,
            span: Span::default(),
        };
        assert_eq!(declaration.to_string(), "MASK = $FF_00");
    }
}
