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

//! Property-based fuzz tests for the Lame front end.
//!
//! These tests use proptest to generate random inputs and verify that the
//! lexer and parser handle them gracefully (no panics, no hangs).
//!
//! Unlike cargo-fuzz, these tests run on stable Rust.

use lame::lexer::{Lexer, TokenKind};
use proptest::prelude::*;

// ============================================================================
// Lexer Fuzzing
// ============================================================================

proptest! {
    /// Fuzz the lexer with random ASCII strings.
    #[test]
    fn fuzz_lexer_ascii(s in "[ -~\\t\\n]{0,500}") {
        let tokens = lame::lexer::tokenize(&s);
        prop_assert!(!tokens.is_empty());
    }

    /// Fuzz the lexer with random bytes (skipping invalid UTF-8).
    #[test]
    fn fuzz_lexer_bytes(bytes in prop::collection::vec(any::<u8>(), 0..500)) {
        if let Ok(s) = String::from_utf8(bytes) {
            let _ = lame::lexer::tokenize(&s);
        }
    }

    /// Fuzz with strings that look like block source.
    #[test]
    fn fuzz_lexer_codelike(
        block in prop::sample::select(vec!["CON", "DAT", "OBJ", "PRI", "PUB", "VAR"]),
        ident in "[a-z_][a-z0-9_]{0,10}",
        num in prop::sample::select(vec!["0", "%1010", "%%0123", "$FF_FF", "1_000"]),
        op in prop::sample::select(vec!["+", "-", "*", "/", "=", ":=", "==", "<>", "<-", "->", "~>", "..", "#", "@"]),
        indent in "[ \\t]{0,8}",
    ) {
        let source = format!("{} {}\n{}{} {} {}\n", block, ident, indent, ident, op, num);
        let tokens = lame::lexer::tokenize(&source);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    /// The lexer keeps returning EOF once drained.
    #[test]
    fn fuzz_lexer_eof_is_sticky(s in "[ -~\\n]{0,100}", extra in 1usize..5) {
        let mut lexer = Lexer::new(&s);
        while lexer.next_token().kind != TokenKind::Eof {}
        for _ in 0..extra {
            prop_assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        }
    }
}

// ============================================================================
// Parser Fuzzing
// ============================================================================

proptest! {
    /// Fuzz the parser with random CON bodies.
    #[test]
    fn fuzz_parser_con(body in "[ a-zA-Z0-9_=%$\\n']{0,200}") {
        let source = format!("CON\n{}", body);
        let _ = lame::parse_source(&source);
    }

    /// Fuzz the parser with random function bodies.
    #[test]
    fn fuzz_parser_function(
        name in "[a-z_][a-z0-9_]{0,10}",
        lines in prop::collection::vec(("[ ]{0,8}", "[ a-z0-9:=+\\-*/()\"{}']{0,40}"), 0..20),
    ) {
        let mut source = format!("PUB {}\n", name);
        for (indent, line) in &lines {
            source.push_str(indent);
            source.push_str(line);
            source.push('\n');
        }
        let _ = lame::parse_source(&source);
    }

    /// Fuzz the parser with arbitrary text.
    #[test]
    fn fuzz_parser_any(s in "\\PC{0,300}") {
        let _ = lame::parse_source(&s);
    }
}

// ============================================================================
// Edge Case Fuzzing
// ============================================================================

proptest! {
    /// Long identifiers.
    #[test]
    fn fuzz_long_identifiers(name in "[a-z_]{1,200}") {
        let tokens = lame::lexer::tokenize(&name);
        prop_assert_eq!(tokens.len(), 2);
    }

    /// Long digit runs never panic during value conversion.
    #[test]
    fn fuzz_long_numbers(digits in "[0-9]{1,60}") {
        let source = format!("CON\n  n = {}\n", digits);
        let _ = lame::parse_source(&source);
    }

    /// Random escape sequences inside strings.
    #[test]
    fn fuzz_string_escapes(body in "([a-z ]|\\\\[nt\"0-9a-z]|\\\\[0-9]{1,12}){0,20}") {
        let source = format!("\"{}\"", body);
        let tokens = lame::lexer::tokenize(&source);
        prop_assert!(tokens.len() >= 2);
    }

    /// Deep indentation staircases.
    #[test]
    fn fuzz_deep_indentation(depth in 1usize..60) {
        let mut source = String::from("PRI deep\n");
        for level in 0..depth {
            source.push_str(&" ".repeat(level));
            source.push_str("x\n");
        }
        let tokens = lame::lexer::tokenize(&source);
        let indents = tokens.iter().filter(|t| t.kind == TokenKind::Indent).count();
        prop_assert_eq!(indents, depth - 1);
    }
}
