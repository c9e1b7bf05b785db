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

//! Lexer module for the Lame front end.
//!
//! This module turns source text into a stream of tokens, pulled one at a
//! time with [`Lexer::next_token`]. It handles:
//! - Keywords (case-insensitive) and identifiers
//! - Block regions (`CON`, `DAT`, `OBJ`, `PRI`/`PUB`, `VAR`)
//! - Number literals (decimal, `%` binary, `%%` quaternary, `$` hex)
//! - String literals with escapes
//! - Line (`'`) and block (`{ }`) comments, plus their doc variants
//! - Operators and punctuation
//! - Indentation tracking inside `PRI`/`PUB` blocks (INDENT/DEDENT tokens)
//!
//! Whitespace and comments are tokens too, so every consumed byte belongs to
//! exactly one token. Lexical errors never abort the scan; they come back as
//! `ILLEGAL` or `UNEXPECTED_EOF` tokens.
//!
//! # Module Structure
//!
//! - `cursor` - Character reading with one character of pushback
//! - `helpers` - Character classes and token construction (LexerHelpers trait)
//! - `indentation` - INDENT/DEDENT resolution (IndentationHandler trait)
//! - `identifiers` - Identifier and keyword scanning (IdentifierScanner trait)
//! - `numbers` - Numeric literal scanning (NumberScanner trait)
//! - `strings` - String literal scanning (StringScanner trait)
//! - `comments` - Comment scanning (CommentScanner trait)
//! - `operators` - Operator and punctuation scanning (OperatorScanner trait)
//! - `tokens` - Token, TokenKind, Keyword and Region definitions

pub mod comments;
pub mod cursor;
pub mod helpers;
pub mod identifiers;
pub mod indentation;
pub mod numbers;
pub mod operators;
pub mod strings;
mod tokens;

pub use tokens::{Keyword, Region, Token, TokenKind};

use comments::CommentScanner;
use cursor::{Cursor, Position};
use helpers::{is_decimal_digit, is_identifier_start, is_significant, is_space, LexerHelpers};
use identifiers::IdentifierScanner;
use indentation::IndentationHandler;
use numbers::NumberScanner;
use operators::OperatorScanner;
use strings::StringScanner;

/// The lexer state for tokenizing source code.
pub struct Lexer<'source> {
    /// Character source.
    cursor: Cursor<'source>,
    /// Block region set by the last block keyword.
    region: Region,
    /// Absolute indentation widths, innermost last. The first entry is the
    /// baseline of the current block.
    indent_stack: Vec<usize>,
    /// Set by a block keyword; the next measured line re-seats the baseline.
    block_start: bool,
    /// A newline was consumed inside a function block and the line's
    /// indentation has not been resolved yet.
    at_line_start: bool,
    /// Width of the first whitespace run on the pending line.
    line_indent: Option<usize>,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'source str) -> Self {
        Self {
            cursor: Cursor::new(source),
            region: Region::Default,
            indent_stack: Vec::new(),
            block_start: false,
            at_line_start: false,
            line_indent: None,
        }
    }

    /// The region the next token will be tagged with.
    pub fn region(&self) -> Region {
        self.region
    }

    /// The current indentation stack, innermost last.
    pub fn indent_levels(&self) -> &[usize] {
        &self.indent_stack
    }

    /// Get the next token from the source.
    ///
    /// Once the input is exhausted and the indentation stack drained, every
    /// further call returns `EOF`.
    pub fn next_token(&mut self) -> Token {
        let start = self.mark();
        let Some(c) = self.cursor.read() else {
            return self.end_of_input();
        };

        // Resolve pending indentation before the first real token of a line
        if self.at_line_start && is_significant(c) {
            self.cursor.unread();
            if let Some(token) = self.handle_line_start() {
                return token;
            }
            // Consume `c` again
            self.cursor.read();
        }

        match c {
            '\n' => {
                self.begin_line();
                self.make_token(TokenKind::Newline, "\n", start)
            }
            c if is_space(c) => self.scan_space(c, start),
            c if is_identifier_start(c) => self.scan_identifier(c, start),
            c if is_decimal_digit(c) => self.scan_decimal_number(c, start),
            '$' => self.scan_hexadecimal_number(start),
            '%' => self.scan_percent(start),
            '"' => self.scan_string(start),
            '\'' => self.scan_quote_comment(start),
            '{' => self.scan_brace_comment(start),
            c => self.scan_operator(c, start),
        }
    }

    /// Scan a run of spaces and tabs.
    fn scan_space(&mut self, first: char, start: Position) -> Token {
        let mut text = String::from(first);

        while let Some(c) = self.cursor.read() {
            if is_space(c) {
                text.push(c);
            } else {
                self.cursor.unread();
                break;
            }
        }

        self.note_indentation(start.column, text.chars().count());
        self.make_token(TokenKind::Space, text, start)
    }
}

/// Tokenize source code into a vector of tokens, ending with `EOF`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }

    tracing::debug!(count = tokens.len(), "tokenized");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn first(source: &str) -> Token {
        Lexer::new(source).next_token()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    fn significant(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .into_iter()
            .filter(|t| !matches!(t.kind, TokenKind::Space | TokenKind::Newline))
            .map(|t| (t.kind, t.text))
            .collect()
    }

    // ========================================
    // Single Token Tests
    // ========================================

    #[test_case("", TokenKind::Eof, "" ; "empty input")]
    #[test_case(" ", TokenKind::Space, " " ; "space")]
    #[test_case("\t", TokenKind::Space, "\t" ; "tab")]
    #[test_case("\n", TokenKind::Newline, "\n" ; "newline")]
    #[test_case("+", TokenKind::Add, "+" ; "add")]
    #[test_case("+=", TokenKind::AddAssign, "+=" ; "add assign")]
    #[test_case("-", TokenKind::Subtract, "-" ; "subtract")]
    #[test_case("-=", TokenKind::SubtractAssign, "-=" ; "subtract assign")]
    #[test_case("*", TokenKind::Multiply, "*" ; "multiply")]
    #[test_case("*=", TokenKind::MultiplyAssign, "*=" ; "multiply assign")]
    #[test_case("/", TokenKind::Divide, "/" ; "divide")]
    #[test_case("/=", TokenKind::DivideAssign, "/=" ; "divide assign")]
    #[test_case("%", TokenKind::Modulo, "%" ; "modulo")]
    #[test_case("%=", TokenKind::ModuloAssign, "%=" ; "modulo assign")]
    #[test_case("&", TokenKind::BitwiseAnd, "&" ; "bitwise and")]
    #[test_case("&=", TokenKind::BitwiseAndAssign, "&=" ; "bitwise and assign")]
    #[test_case("|", TokenKind::BitwiseOr, "|" ; "bitwise or")]
    #[test_case("|=", TokenKind::BitwiseOrAssign, "|=" ; "bitwise or assign")]
    #[test_case("^", TokenKind::BitwiseXor, "^" ; "bitwise xor")]
    #[test_case("^=", TokenKind::BitwiseXorAssign, "^=" ; "bitwise xor assign")]
    #[test_case("!", TokenKind::BitwiseNot, "!" ; "bitwise not")]
    #[test_case("<<", TokenKind::BitwiseShiftLeft, "<<" ; "shift left")]
    #[test_case(">>", TokenKind::BitwiseShiftRight, ">>" ; "shift right")]
    #[test_case("~>", TokenKind::BitwiseSignedShiftRight, "~>" ; "signed shift right")]
    #[test_case("=", TokenKind::Assign, "=" ; "assign")]
    #[test_case("==", TokenKind::EqualTo, "==" ; "equal to")]
    #[test_case("<", TokenKind::LessThan, "<" ; "less than")]
    #[test_case("<=", TokenKind::LessThanEqualTo, "<=" ; "less than equal to")]
    #[test_case(">", TokenKind::GreaterThan, ">" ; "greater than")]
    #[test_case(">=", TokenKind::GreaterThanEqualTo, ">=" ; "greater than equal to")]
    #[test_case(".", TokenKind::Dot, "." ; "dot")]
    #[test_case("..", TokenKind::Range, ".." ; "range")]
    #[test_case("36564", TokenKind::DecimalNumber, "36564" ; "decimal")]
    #[test_case("36_564", TokenKind::DecimalNumber, "36_564" ; "decimal with group separator")]
    #[test_case("036", TokenKind::DecimalNumber, "036" ; "decimal zero padded")]
    #[test_case("036AF", TokenKind::DecimalNumber, "036" ; "decimal stops at letter")]
    #[test_case("101010", TokenKind::DecimalNumber, "101010" ; "binary digits without prefix")]
    #[test_case("%101010", TokenKind::BinaryNumber, "101010" ; "binary")]
    #[test_case("%101_010", TokenKind::BinaryNumber, "101_010" ; "binary with group separator")]
    #[test_case("%10123", TokenKind::BinaryNumber, "101" ; "binary stops at illegal digit")]
    #[test_case("10123", TokenKind::DecimalNumber, "10123" ; "quaternary digits without prefix")]
    #[test_case("%%10123", TokenKind::QuaternaryNumber, "10123" ; "quaternary")]
    #[test_case("%%101_010", TokenKind::QuaternaryNumber, "101_010" ; "quaternary with group separator")]
    #[test_case("%%10179", TokenKind::QuaternaryNumber, "101" ; "quaternary stops at illegal digit")]
    #[test_case("1ACD3", TokenKind::DecimalNumber, "1" ; "hex digits without prefix")]
    #[test_case("ACD3", TokenKind::Identifier, "ACD3" ; "hex letters are an identifier")]
    #[test_case("$1ACD3", TokenKind::HexadecimalNumber, "1ACD3" ; "hexadecimal")]
    #[test_case("$1acd3", TokenKind::HexadecimalNumber, "1acd3" ; "hexadecimal lower case")]
    #[test_case("$1ac_d3", TokenKind::HexadecimalNumber, "1ac_d3" ; "hexadecimal with group separator")]
    #[test_case("foobar", TokenKind::Identifier, "foobar" ; "identifier")]
    #[test_case("foo_bar", TokenKind::Identifier, "foo_bar" ; "identifier with underscore")]
    #[test_case("__foo__", TokenKind::Identifier, "__foo__" ; "identifier wrapped in underscores")]
    #[test_case("_36", TokenKind::Identifier, "_36" ; "identifier with digits")]
    fn test_first_token(source: &str, kind: TokenKind, text: &str) {
        let token = first(source);
        assert_eq!(token.kind, kind);
        assert_eq!(token.text, text);
    }

    #[test_case("con", Keyword::Con ; "con")]
    #[test_case("dat", Keyword::Dat ; "dat")]
    #[test_case("obj", Keyword::Obj ; "obj")]
    #[test_case("pri", Keyword::Pri ; "pri")]
    #[test_case("pub", Keyword::Pub ; "pub")]
    #[test_case("var", Keyword::Var ; "var")]
    #[test_case("true", Keyword::True ; "true")]
    #[test_case("false", Keyword::False ; "false")]
    #[test_case("case", Keyword::Case ; "case")]
    #[test_case("if", Keyword::If ; "if")]
    #[test_case("elseif", Keyword::Elseif ; "elseif")]
    #[test_case("else", Keyword::Else ; "else")]
    #[test_case("next", Keyword::Next ; "next")]
    #[test_case("quit", Keyword::Quit ; "quit")]
    #[test_case("repeat", Keyword::Repeat ; "repeat")]
    #[test_case("from", Keyword::From ; "from")]
    #[test_case("to", Keyword::To ; "to")]
    #[test_case("step", Keyword::Step ; "step")]
    #[test_case("while", Keyword::While ; "while")]
    #[test_case("until", Keyword::Until ; "until")]
    #[test_case("return", Keyword::Return ; "return")]
    #[test_case("byte", Keyword::Byte ; "byte")]
    #[test_case("word", Keyword::Word ; "word")]
    #[test_case("long", Keyword::Long ; "long")]
    #[test_case("not", Keyword::Not ; "not")]
    #[test_case("and", Keyword::And ; "and")]
    #[test_case("or", Keyword::Or ; "or")]
    #[test_case("_clkmode", Keyword::ClkmodeSetting ; "clock mode setting")]
    #[test_case("OUTA", Keyword::Outa ; "register")]
    #[test_case("cognew", Keyword::Cognew ; "cog control")]
    fn test_keyword(source: &str, keyword: Keyword) {
        let token = first(source);
        assert_eq!(token.kind, TokenKind::Keyword(keyword));
        assert_eq!(token.text, source);
    }

    // ========================================
    // Stream Tests
    // ========================================

    #[test]
    fn test_con_block_stream() {
        let tokens = tokenize("CON\n  x = 5\n");
        let stream: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
        assert_eq!(
            stream,
            vec![
                (TokenKind::Keyword(Keyword::Con), "CON"),
                (TokenKind::Newline, "\n"),
                (TokenKind::Space, "  "),
                (TokenKind::Identifier, "x"),
                (TokenKind::Space, " "),
                (TokenKind::Assign, "="),
                (TokenKind::Space, " "),
                (TokenKind::DecimalNumber, "5"),
                (TokenKind::Newline, "\n"),
                (TokenKind::Eof, ""),
            ]
        );
        assert!(tokens[1..].iter().all(|t| t.region == Region::Constant));
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(
            kinds(" \t\n  \n"),
            vec![
                TokenKind::Space,
                TokenKind::Newline,
                TokenKind::Space,
                TokenKind::Newline,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_eof_repeats() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_expression_stream() {
        assert_eq!(
            significant("x := y~>2"),
            vec![
                (TokenKind::Identifier, "x".to_string()),
                (TokenKind::Colon, ":".to_string()),
                (TokenKind::Assign, "=".to_string()),
                (TokenKind::Identifier, "y".to_string()),
                (TokenKind::BitwiseSignedShiftRight, "~>".to_string()),
                (TokenKind::DecimalNumber, "2".to_string()),
                (TokenKind::Eof, String::new()),
            ]
        );
    }

    #[test]
    fn test_range_between_numbers() {
        assert_eq!(
            kinds("0..7"),
            vec![
                TokenKind::DecimalNumber,
                TokenKind::Range,
                TokenKind::DecimalNumber,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_doc_comment_before_block() {
        let tokens = tokenize("'' Adds two numbers\nPUB add(a, b)\n");
        assert_eq!(tokens[0].kind, TokenKind::DocComment);
        assert_eq!(tokens[0].text, " Adds two numbers");
        assert_eq!(tokens[2].kind, TokenKind::Keyword(Keyword::Pub));
    }

    // ========================================
    // Region Tests
    // ========================================

    #[test]
    fn test_region_starts_default() {
        let token = first("foo");
        assert_eq!(token.region, Region::Default);
    }

    #[test]
    fn test_block_keywords_switch_region() {
        let tokens = tokenize("CON a\nVAR b\nOBJ c\nDAT d\nPRI e\nPUB f\n");
        let regions: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Identifier)
            .map(|t| t.region)
            .collect();
        assert_eq!(
            regions,
            vec![
                Region::Constant,
                Region::Variable,
                Region::Object,
                Region::Data,
                Region::Function,
                Region::Function
            ]
        );
    }

    #[test]
    fn test_block_keyword_token_carries_new_region() {
        let token = first("pub");
        assert_eq!(token.region, Region::Function);
    }

    #[test]
    fn test_keyword_case_preserved() {
        for source in ["pub", "PUB", "Pub"] {
            let token = first(source);
            assert_eq!(token.kind, TokenKind::Keyword(Keyword::Pub));
            assert_eq!(token.text, source);
        }
    }

    // ========================================
    // Position Tests
    // ========================================

    #[test]
    fn test_token_positions() {
        let tokens = tokenize("CON\n  x = 5");
        let x = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Identifier)
            .unwrap();
        assert_eq!((x.line, x.column), (1, 2));
        assert_eq!(x.span, crate::error::Span::new(6, 7));

        let five = tokens
            .iter()
            .find(|t| t.kind == TokenKind::DecimalNumber)
            .unwrap();
        assert_eq!((five.line, five.column), (1, 6));
    }

    #[test]
    fn test_spans_reconstruct_source() {
        let source = "CON\n  _clkmode = xtal1 + pll16x\n\nPUB main | i\n  repeat i from 0 to 3 ' loop\n    outa[i] := %%0123\n  {done}\n";
        let tokens = tokenize(source);
        let rebuilt: String = tokens.iter().map(|t| &source[t.span.start..t.span.end]).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_illegal_character() {
        let token = first("?");
        assert_eq!(token.kind, TokenKind::Illegal);
        assert_eq!(token.text, "?");
    }
}
