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

//! Token definitions for the Lame language.

use crate::error::Span;

/// The block region the lexer is currently scanning.
///
/// Entered when a block keyword is recognized and kept until the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    /// Before the first block keyword.
    #[default]
    Default,
    /// Inside a `CON` block.
    Constant,
    /// Inside a `DAT` block.
    Data,
    /// Inside an `OBJ` block.
    Object,
    /// Inside a `PRI` or `PUB` block.
    Function,
    /// Inside a `VAR` block.
    Variable,
}

impl Region {
    /// Upper-case name of the region.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Default => "DEFAULT",
            Region::Constant => "CONSTANT",
            Region::Data => "DATA",
            Region::Object => "OBJECT",
            Region::Function => "FUNCTION",
            Region::Variable => "VARIABLE",
        }
    }

    /// Three-letter abbreviation used by the token dump.
    pub fn abbreviation(&self) -> &'static str {
        &self.as_str()[..3]
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reserved word.
///
/// Lookup is case-insensitive; see [`Keyword::lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Blocks
    Con,
    Dat,
    Obj,
    Pri,
    Pub,
    Var,

    // Constants
    True,
    False,
    Posx,
    Negx,
    Pi,
    Rcfast,
    Rcslow,
    Xinput,
    Xtal1,
    Xtal2,
    Xtal3,
    Pll1x,
    Pll2x,
    Pll4x,
    Pll8x,
    Pll16x,

    // Variables
    Result,

    // Flow control
    Abort,
    Case,
    If,
    Ifnot,
    Elseif,
    Else,
    Next,
    Quit,
    Repeat,
    From,
    To,
    Step,
    While,
    Until,
    Return,

    // Memory
    Byte,
    Word,
    Long,
    Bytefill,
    Wordfill,
    Longfill,
    Bytemove,
    Wordmove,
    Longmove,
    Lookup,
    Lookupz,
    Lookdown,
    Lookdownz,
    Strsize,
    Strcomp,

    // Directives
    String,
    Constant,
    Float,
    Round,
    Trunc,
    File,

    // Locks
    Locknew,
    Lockret,
    Lockclr,
    Lockset,

    // Chip configuration
    Chipver,
    Clkmode,
    ClkmodeSetting,
    Clkfreq,
    ClkfreqSetting,
    Clkset,
    XinfreqSetting,
    StackSetting,
    FreeSetting,

    // Registers
    Cnt,
    Ctra,
    Ctrb,
    Dira,
    Dirb,
    Ina,
    Inb,
    Outa,
    Outb,
    Frqa,
    Frqb,
    Phsa,
    Phsb,
    Vcfg,
    Vscl,
    Par,
    Spr,

    // Process control
    Waitcnt,
    Waitpeq,
    Waitpne,
    Waitvid,

    // Cog control
    Cogid,
    Cognew,
    Coginit,
    Cogstop,
    Reboot,

    // Logical
    Not,
    And,
    Or,
}

impl Keyword {
    /// Look up an already upper-cased spelling.
    pub fn lookup(upper: &str) -> Option<Keyword> {
        let keyword = match upper {
            "CON" => Keyword::Con,
            "DAT" => Keyword::Dat,
            "OBJ" => Keyword::Obj,
            "PRI" => Keyword::Pri,
            "PUB" => Keyword::Pub,
            "VAR" => Keyword::Var,

            "TRUE" => Keyword::True,
            "FALSE" => Keyword::False,
            "POSX" => Keyword::Posx,
            "NEGX" => Keyword::Negx,
            "PI" => Keyword::Pi,
            "RCFAST" => Keyword::Rcfast,
            "RCSLOW" => Keyword::Rcslow,
            "XINPUT" => Keyword::Xinput,
            "XTAL1" => Keyword::Xtal1,
            "XTAL2" => Keyword::Xtal2,
            "XTAL3" => Keyword::Xtal3,
            "PLL1X" => Keyword::Pll1x,
            "PLL2X" => Keyword::Pll2x,
            "PLL4X" => Keyword::Pll4x,
            "PLL8X" => Keyword::Pll8x,
            "PLL16X" => Keyword::Pll16x,

            "RESULT" => Keyword::Result,

            "ABORT" => Keyword::Abort,
            "CASE" => Keyword::Case,
            "IF" => Keyword::If,
            "IFNOT" => Keyword::Ifnot,
            "ELSEIF" => Keyword::Elseif,
            "ELSE" => Keyword::Else,
            "NEXT" => Keyword::Next,
            "QUIT" => Keyword::Quit,
            "REPEAT" => Keyword::Repeat,
            "FROM" => Keyword::From,
            "TO" => Keyword::To,
            "STEP" => Keyword::Step,
            "WHILE" => Keyword::While,
            "UNTIL" => Keyword::Until,
            "RETURN" => Keyword::Return,

            "BYTE" => Keyword::Byte,
            "WORD" => Keyword::Word,
            "LONG" => Keyword::Long,
            "BYTEFILL" => Keyword::Bytefill,
            "WORDFILL" => Keyword::Wordfill,
            "LONGFILL" => Keyword::Longfill,
            "BYTEMOVE" => Keyword::Bytemove,
            "WORDMOVE" => Keyword::Wordmove,
            "LONGMOVE" => Keyword::Longmove,
            "LOOKUP" => Keyword::Lookup,
            "LOOKUPZ" => Keyword::Lookupz,
            "LOOKDOWN" => Keyword::Lookdown,
            "LOOKDOWNZ" => Keyword::Lookdownz,
            "STRSIZE" => Keyword::Strsize,
            "STRCOMP" => Keyword::Strcomp,

            "STRING" => Keyword::String,
            "CONSTANT" => Keyword::Constant,
            "FLOAT" => Keyword::Float,
            "ROUND" => Keyword::Round,
            "TRUNC" => Keyword::Trunc,
            "FILE" => Keyword::File,

            "LOCKNEW" => Keyword::Locknew,
            "LOCKRET" => Keyword::Lockret,
            "LOCKCLR" => Keyword::Lockclr,
            "LOCKSET" => Keyword::Lockset,

            "CHIPVER" => Keyword::Chipver,
            "CLKMODE" => Keyword::Clkmode,
            "_CLKMODE" => Keyword::ClkmodeSetting,
            "CLKFREQ" => Keyword::Clkfreq,
            "_CLKFREQ" => Keyword::ClkfreqSetting,
            "CLKSET" => Keyword::Clkset,
            "_XINFREQ" => Keyword::XinfreqSetting,
            "_STACK" => Keyword::StackSetting,
            "_FREE" => Keyword::FreeSetting,

            "CNT" => Keyword::Cnt,
            "CTRA" => Keyword::Ctra,
            "CTRB" => Keyword::Ctrb,
            "DIRA" => Keyword::Dira,
            "DIRB" => Keyword::Dirb,
            "INA" => Keyword::Ina,
            "INB" => Keyword::Inb,
            "OUTA" => Keyword::Outa,
            "OUTB" => Keyword::Outb,
            "FRQA" => Keyword::Frqa,
            "FRQB" => Keyword::Frqb,
            "PHSA" => Keyword::Phsa,
            "PHSB" => Keyword::Phsb,
            "VCFG" => Keyword::Vcfg,
            "VSCL" => Keyword::Vscl,
            "PAR" => Keyword::Par,
            "SPR" => Keyword::Spr,

            "WAITCNT" => Keyword::Waitcnt,
            "WAITPEQ" => Keyword::Waitpeq,
            "WAITPNE" => Keyword::Waitpne,
            "WAITVID" => Keyword::Waitvid,

            "COGID" => Keyword::Cogid,
            "COGNEW" => Keyword::Cognew,
            "COGINIT" => Keyword::Coginit,
            "COGSTOP" => Keyword::Cogstop,
            "REBOOT" => Keyword::Reboot,

            "NOT" => Keyword::Not,
            "AND" => Keyword::And,
            "OR" => Keyword::Or,

            _ => return None,
        };
        Some(keyword)
    }

    /// Canonical upper-case spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Con => "CON",
            Keyword::Dat => "DAT",
            Keyword::Obj => "OBJ",
            Keyword::Pri => "PRI",
            Keyword::Pub => "PUB",
            Keyword::Var => "VAR",

            Keyword::True => "TRUE",
            Keyword::False => "FALSE",
            Keyword::Posx => "POSX",
            Keyword::Negx => "NEGX",
            Keyword::Pi => "PI",
            Keyword::Rcfast => "RCFAST",
            Keyword::Rcslow => "RCSLOW",
            Keyword::Xinput => "XINPUT",
            Keyword::Xtal1 => "XTAL1",
            Keyword::Xtal2 => "XTAL2",
            Keyword::Xtal3 => "XTAL3",
            Keyword::Pll1x => "PLL1X",
            Keyword::Pll2x => "PLL2X",
            Keyword::Pll4x => "PLL4X",
            Keyword::Pll8x => "PLL8X",
            Keyword::Pll16x => "PLL16X",

            Keyword::Result => "RESULT",

            Keyword::Abort => "ABORT",
            Keyword::Case => "CASE",
            Keyword::If => "IF",
            Keyword::Ifnot => "IFNOT",
            Keyword::Elseif => "ELSEIF",
            Keyword::Else => "ELSE",
            Keyword::Next => "NEXT",
            Keyword::Quit => "QUIT",
            Keyword::Repeat => "REPEAT",
            Keyword::From => "FROM",
            Keyword::To => "TO",
            Keyword::Step => "STEP",
            Keyword::While => "WHILE",
            Keyword::Until => "UNTIL",
            Keyword::Return => "RETURN",

            Keyword::Byte => "BYTE",
            Keyword::Word => "WORD",
            Keyword::Long => "LONG",
            Keyword::Bytefill => "BYTEFILL",
            Keyword::Wordfill => "WORDFILL",
            Keyword::Longfill => "LONGFILL",
            Keyword::Bytemove => "BYTEMOVE",
            Keyword::Wordmove => "WORDMOVE",
            Keyword::Longmove => "LONGMOVE",
            Keyword::Lookup => "LOOKUP",
            Keyword::Lookupz => "LOOKUPZ",
            Keyword::Lookdown => "LOOKDOWN",
            Keyword::Lookdownz => "LOOKDOWNZ",
            Keyword::Strsize => "STRSIZE",
            Keyword::Strcomp => "STRCOMP",

            Keyword::String => "STRING",
            Keyword::Constant => "CONSTANT",
            Keyword::Float => "FLOAT",
            Keyword::Round => "ROUND",
            Keyword::Trunc => "TRUNC",
            Keyword::File => "FILE",

            Keyword::Locknew => "LOCKNEW",
            Keyword::Lockret => "LOCKRET",
            Keyword::Lockclr => "LOCKCLR",
            Keyword::Lockset => "LOCKSET",

            Keyword::Chipver => "CHIPVER",
            Keyword::Clkmode => "CLKMODE",
            Keyword::ClkmodeSetting => "_CLKMODE",
            Keyword::Clkfreq => "CLKFREQ",
            Keyword::ClkfreqSetting => "_CLKFREQ",
            Keyword::Clkset => "CLKSET",
            Keyword::XinfreqSetting => "_XINFREQ",
            Keyword::StackSetting => "_STACK",
            Keyword::FreeSetting => "_FREE",

            Keyword::Cnt => "CNT",
            Keyword::Ctra => "CTRA",
            Keyword::Ctrb => "CTRB",
            Keyword::Dira => "DIRA",
            Keyword::Dirb => "DIRB",
            Keyword::Ina => "INA",
            Keyword::Inb => "INB",
            Keyword::Outa => "OUTA",
            Keyword::Outb => "OUTB",
            Keyword::Frqa => "FRQA",
            Keyword::Frqb => "FRQB",
            Keyword::Phsa => "PHSA",
            Keyword::Phsb => "PHSB",
            Keyword::Vcfg => "VCFG",
            Keyword::Vscl => "VSCL",
            Keyword::Par => "PAR",
            Keyword::Spr => "SPR",

            Keyword::Waitcnt => "WAITCNT",
            Keyword::Waitpeq => "WAITPEQ",
            Keyword::Waitpne => "WAITPNE",
            Keyword::Waitvid => "WAITVID",

            Keyword::Cogid => "COGID",
            Keyword::Cognew => "COGNEW",
            Keyword::Coginit => "COGINIT",
            Keyword::Cogstop => "COGSTOP",
            Keyword::Reboot => "REBOOT",

            Keyword::Not => "NOT",
            Keyword::And => "AND",
            Keyword::Or => "OR",
        }
    }

    /// The region a block keyword opens, or `None` for every other keyword.
    pub fn region(&self) -> Option<Region> {
        match self {
            Keyword::Con => Some(Region::Constant),
            Keyword::Dat => Some(Region::Data),
            Keyword::Obj => Some(Region::Object),
            Keyword::Pri | Keyword::Pub => Some(Region::Function),
            Keyword::Var => Some(Region::Variable),
            _ => None,
        }
    }

    /// Check if this keyword opens a block.
    pub fn is_block(&self) -> bool {
        self.region().is_some()
    }
}

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Special
    /// End of input; repeated forever once reached.
    Eof,
    /// A character or construct the lexer cannot accept.
    Illegal,
    /// Input ended inside a construct that needs more input.
    UnexpectedEof,

    // Layout
    /// A run of spaces and tabs.
    Space,
    /// A single `\n`.
    Newline,
    /// Synthetic, zero-width: indentation increased.
    Indent,
    /// Synthetic, zero-width: indentation decreased.
    Dedent,

    // Literals
    Identifier,
    DecimalNumber,
    BinaryNumber,
    QuaternaryNumber,
    HexadecimalNumber,
    String,
    Comment,
    DocComment,

    /// A reserved word (case-insensitive).
    Keyword(Keyword),

    // Arithmetic
    Add,
    AddAssign,
    Subtract,
    SubtractAssign,
    Multiply,
    MultiplyAssign,
    Divide,
    DivideAssign,
    Modulo,
    ModuloAssign,

    // Comparison and assignment
    Assign,
    EqualTo,
    LessThan,
    LessThanEqualTo,
    GreaterThan,
    GreaterThanEqualTo,

    // Bitwise
    BitwiseAnd,
    BitwiseAndAssign,
    BitwiseOr,
    BitwiseOrAssign,
    BitwiseXor,
    BitwiseXorAssign,
    BitwiseNot,
    BitwiseShiftLeft,
    BitwiseShiftRight,
    BitwiseRotateLeft,
    BitwiseRotateRight,
    BitwiseReverse,
    BitwiseSignedShiftRight,
    BitwiseSignExtend7,
    BitwiseSignExtend15,

    // Punctuation
    At,
    Pound,
    Dollar,
    Dot,
    Range,
    Comma,
    Colon,
    ParenOpen,
    ParenClose,
    BracketOpen,
    BracketClose,
    /// Reserved: `{` always opens a comment.
    BraceOpen,
    BraceClose,
}

impl TokenKind {
    /// Upper-case name of this token kind, as shown in token dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::UnexpectedEof => "UNEXPECTED_EOF",
            TokenKind::Space => "SPACE",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::DecimalNumber => "DECIMAL_NUMBER",
            TokenKind::BinaryNumber => "BINARY_NUMBER",
            TokenKind::QuaternaryNumber => "QUATERNARY_NUMBER",
            TokenKind::HexadecimalNumber => "HEXADECIMAL_NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Comment => "COMMENT",
            TokenKind::DocComment => "DOC_COMMENT",
            TokenKind::Keyword(keyword) => keyword.as_str(),
            TokenKind::Add => "ADD",
            TokenKind::AddAssign => "ADD_ASSIGN",
            TokenKind::Subtract => "SUBTRACT",
            TokenKind::SubtractAssign => "SUBTRACT_ASSIGN",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::MultiplyAssign => "MULTIPLY_ASSIGN",
            TokenKind::Divide => "DIVIDE",
            TokenKind::DivideAssign => "DIVIDE_ASSIGN",
            TokenKind::Modulo => "MODULO",
            TokenKind::ModuloAssign => "MODULO_ASSIGN",
            TokenKind::Assign => "ASSIGN",
            TokenKind::EqualTo => "EQUAL_TO",
            TokenKind::LessThan => "LESS_THAN",
            TokenKind::LessThanEqualTo => "LESS_THAN_EQUAL_TO",
            TokenKind::GreaterThan => "GREATER_THAN",
            TokenKind::GreaterThanEqualTo => "GREATER_THAN_EQUAL_TO",
            TokenKind::BitwiseAnd => "BITWISE_AND",
            TokenKind::BitwiseAndAssign => "BITWISE_AND_ASSIGN",
            TokenKind::BitwiseOr => "BITWISE_OR",
            TokenKind::BitwiseOrAssign => "BITWISE_OR_ASSIGN",
            TokenKind::BitwiseXor => "BITWISE_XOR",
            TokenKind::BitwiseXorAssign => "BITWISE_XOR_ASSIGN",
            TokenKind::BitwiseNot => "BITWISE_NOT",
            TokenKind::BitwiseShiftLeft => "BITWISE_SHIFT_LEFT",
            TokenKind::BitwiseShiftRight => "BITWISE_SHIFT_RIGHT",
            TokenKind::BitwiseRotateLeft => "BITWISE_ROTATE_LEFT",
            TokenKind::BitwiseRotateRight => "BITWISE_ROTATE_RIGHT",
            TokenKind::BitwiseReverse => "BITWISE_REVERSE",
            TokenKind::BitwiseSignedShiftRight => "BITWISE_SIGNED_SHIFT_RIGHT",
            TokenKind::BitwiseSignExtend7 => "BITWISE_SIGN_EXTEND_7",
            TokenKind::BitwiseSignExtend15 => "BITWISE_SIGN_EXTEND_15",
            TokenKind::At => "AT",
            TokenKind::Pound => "POUND",
            TokenKind::Dollar => "DOLLAR",
            TokenKind::Dot => "DOT",
            TokenKind::Range => "RANGE",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::ParenOpen => "PAREN_OPEN",
            TokenKind::ParenClose => "PAREN_CLOSE",
            TokenKind::BracketOpen => "BRACKET_OPEN",
            TokenKind::BracketClose => "BRACKET_CLOSE",
            TokenKind::BraceOpen => "BRACE_OPEN",
            TokenKind::BraceClose => "BRACE_CLOSE",
        }
    }

    /// Check if this is one of the four numeric literal kinds.
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            TokenKind::DecimalNumber
                | TokenKind::BinaryNumber
                | TokenKind::QuaternaryNumber
                | TokenKind::HexadecimalNumber
        )
    }

    /// Check if this token opens a block.
    pub fn is_block_keyword(&self) -> bool {
        matches!(self, TokenKind::Keyword(keyword) if keyword.is_block())
    }

    /// Check if the parser may skip this token outside significant layout.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Space | TokenKind::Newline | TokenKind::Comment | TokenKind::DocComment
        )
    }

    /// Check if this token reports a lexical error.
    pub fn is_error(&self) -> bool {
        matches!(self, TokenKind::Illegal | TokenKind::UnexpectedEof)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A token with its literal, region and source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What was scanned.
    pub kind: TokenKind,
    /// Literal value: the source slice, the digits of a number without its
    /// prefix, the decoded contents of a string, or the body of a comment.
    pub text: String,
    /// Region active when the token was produced.
    pub region: Region,
    /// 0-based line of the first character.
    pub line: usize,
    /// 0-based column (in characters) of the first character.
    pub column: usize,
    /// Consumed input; empty for synthetic tokens.
    pub span: Span,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Eof => f.write_str("end of input"),
            TokenKind::Indent | TokenKind::Dedent => f.write_str(self.kind.name()),
            TokenKind::Newline => f.write_str("newline"),
            TokenKind::String => write!(f, "\"{}\"", self.text),
            _ => write!(f, "'{}'", self.text),
        }
    }
}
