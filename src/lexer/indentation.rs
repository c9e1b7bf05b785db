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

//! Indentation handling for the lexer.
//!
//! Indentation is only significant inside `PRI`/`PUB` blocks. Each line's
//! width is the whitespace run that opens it (0 if the line starts with
//! anything else) and is compared against a stack of absolute widths:
//! - a wider line pushes its width and yields INDENT
//! - a narrower line pops one level per call and yields DEDENT
//! - a width between two stacked levels that matches neither yields ILLEGAL
//!
//! The first measured line after a block keyword sets the baseline, which
//! is never reported as INDENT. INDENT and DEDENT are zero-width tokens
//! positioned right before the line's first significant character.

use super::helpers::LexerHelpers;
use super::{Lexer, Region, Token, TokenKind};

/// Trait for indentation handling operations.
pub trait IndentationHandler<'source> {
    /// Arm indentation tracking after a newline.
    fn begin_line(&mut self);

    /// Record the width of a whitespace run starting at `column`.
    ///
    /// Only a run at column 0 is a line's indentation.
    fn note_indentation(&mut self, column: usize, width: usize);

    /// Resolve the pending line's indentation.
    ///
    /// Called with the cursor right before the line's first significant
    /// character. Returns `None` once nothing (more) needs to be emitted.
    fn handle_line_start(&mut self) -> Option<Token>;

    /// Produce the token for an exhausted input: outstanding DEDENTs first,
    /// then EOF.
    fn end_of_input(&mut self) -> Token;
}

impl<'source> IndentationHandler<'source> for Lexer<'source> {
    fn begin_line(&mut self) {
        if self.region == Region::Function {
            self.at_line_start = true;
            self.line_indent = None;
        }
    }

    fn note_indentation(&mut self, column: usize, width: usize) {
        if self.at_line_start && column == 0 {
            self.line_indent = Some(width);
        }
    }

    fn handle_line_start(&mut self) -> Option<Token> {
        let width = self.line_indent.unwrap_or(0);

        if self.block_start {
            if self.indent_stack.len() > 1 {
                self.indent_stack.pop();
                return Some(self.make_synthetic(TokenKind::Dedent));
            }
            self.indent_stack.clear();
            self.indent_stack.push(width);
            self.block_start = false;
            self.at_line_start = false;
            tracing::trace!(width, "indentation baseline");
            return None;
        }

        let Some(&top) = self.indent_stack.last() else {
            self.indent_stack.push(width);
            self.at_line_start = false;
            return None;
        };

        if width > top {
            self.indent_stack.push(width);
            self.at_line_start = false;
            tracing::trace!(width, depth = self.indent_stack.len(), "indent");
            return Some(self.make_synthetic(TokenKind::Indent));
        }

        if width == top {
            self.at_line_start = false;
            return None;
        }

        if self.indent_stack.len() == 1 {
            // Dedent below the baseline re-seats it
            self.indent_stack[0] = width;
            self.at_line_start = false;
            tracing::trace!(width, "indentation baseline moved");
            return None;
        }

        if width > self.indent_stack[0] && !self.indent_stack.contains(&width) {
            self.at_line_start = false;
            tracing::debug!(width, levels = ?self.indent_stack, "inconsistent dedent");
            return Some(self.make_synthetic(TokenKind::Illegal));
        }

        // One level per call; the line stays pending until it matches
        self.indent_stack.pop();
        tracing::trace!(width, depth = self.indent_stack.len(), "dedent");
        Some(self.make_synthetic(TokenKind::Dedent))
    }

    fn end_of_input(&mut self) -> Token {
        self.at_line_start = false;

        if self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            return self.make_synthetic(TokenKind::Dedent);
        }

        self.indent_stack.clear();
        self.make_synthetic(TokenKind::Eof)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tokenize;
    use super::*;
    use pretty_assertions::assert_eq;

    fn layout(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .into_iter()
            .map(|t| t.kind)
            .filter(|k| matches!(k, TokenKind::Indent | TokenKind::Dedent | TokenKind::Illegal))
            .collect()
    }

    fn drained(source: &str) -> Lexer<'_> {
        let mut lexer = Lexer::new(source);
        while lexer.next_token().kind != TokenKind::Eof {}
        lexer
    }

    // ========================================
    // Indent/Dedent Tests
    // ========================================

    #[test]
    fn test_nested_function_body() {
        let kinds: Vec<_> = tokenize("PUB main\n  a\n    b\n  c\nd\n")
            .into_iter()
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Keyword(crate::lexer::Keyword::Pub),
                TokenKind::Space,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Space,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Space,
                TokenKind::Indent,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Space,
                TokenKind::Dedent,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Identifier,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_baseline_is_not_an_indent() {
        assert_eq!(layout("PUB main\n    a\n    b\n"), vec![]);
    }

    #[test]
    fn test_multiple_dedents_on_one_line() {
        assert_eq!(
            layout("PUB main\n  a\n    b\n      c\n  d\n"),
            vec![
                TokenKind::Indent,
                TokenKind::Indent,
                TokenKind::Dedent,
                TokenKind::Dedent
            ]
        );
    }

    #[test]
    fn test_dedents_flushed_at_end_of_input() {
        assert_eq!(
            layout("PRI helper\n  a\n    b\n      c"),
            vec![
                TokenKind::Indent,
                TokenKind::Indent,
                TokenKind::Dedent,
                TokenKind::Dedent
            ]
        );
    }

    #[test]
    fn test_inconsistent_dedent_is_illegal() {
        let tokens = tokenize("PUB main\n  a\n      b\n    c\n");
        let illegal = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Illegal)
            .unwrap();
        assert!(illegal.span.is_empty());
        assert_eq!((illegal.line, illegal.column), (3, 4));
        assert_eq!(
            layout("PUB main\n  a\n      b\n    c\n"),
            vec![TokenKind::Indent, TokenKind::Illegal, TokenKind::Dedent]
        );
    }

    #[test]
    fn test_indent_positioned_before_first_character() {
        let tokens = tokenize("PUB main\n  a\n    b\n");
        let indent = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Indent)
            .unwrap();
        assert_eq!((indent.line, indent.column), (2, 4));
        assert_eq!(indent.span.start, 17);
        assert!(indent.span.is_empty());
    }

    #[test]
    fn test_comment_lines_do_not_change_indentation() {
        assert_eq!(
            layout("PUB main\n  a\n        ' note\n{ block }\n  b\n"),
            vec![]
        );
    }

    #[test]
    fn test_whitespace_after_leading_comment_is_not_indentation() {
        let positions: Vec<_> = tokenize("PUB main\n  a\n{c}    b\n  c\n")
            .into_iter()
            .filter(|t| matches!(t.kind, TokenKind::Indent | TokenKind::Dedent))
            .map(|t| (t.kind, t.line, t.column))
            .collect();
        // Line 2 has width 0 and re-seats the baseline; line 3 indents from it
        assert_eq!(
            positions,
            vec![(TokenKind::Indent, 3, 2), (TokenKind::Dedent, 4, 0)]
        );

        assert_eq!(layout("PUB main\n  a\n  {c}    b\n  c\n"), vec![]);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        assert_eq!(layout("PUB main\n  a\n\n   \n  b\n"), vec![]);
    }

    // ========================================
    // Region Gating Tests
    // ========================================

    #[test]
    fn test_no_indentation_outside_functions() {
        assert_eq!(layout("CON\n  a = 1\n    b = 2\n  c = 3\n"), vec![]);
        assert_eq!(layout("DAT\n  byte 1\n      byte 2\n"), vec![]);
    }

    #[test]
    fn test_new_block_resets_baseline() {
        assert_eq!(
            layout("PUB a\n  x\n    y\nPUB b\n      z\n        w\n"),
            vec![
                TokenKind::Indent,
                TokenKind::Dedent,
                TokenKind::Indent,
                TokenKind::Dedent
            ]
        );
    }

    #[test]
    fn test_stack_empty_after_drain() {
        let lexer = drained("PUB main\n  a\n    b\n      c");
        assert!(lexer.indent_levels().is_empty());

        let lexer = drained("PUB main\n  a\n");
        assert!(lexer.indent_levels().is_empty());
    }
}
