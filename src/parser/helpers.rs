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

//! Parser helper methods for token stream navigation and error handling.
//!
//! This module provides utility methods for the parser including:
//! - Pulling tokens from the lexer with one token of pushback
//! - Skipping whitespace and comments
//! - Turning in-band lexical errors into `CompileError`s
//! - Token expectation

use super::Parser;
use crate::error::{CompileError, ErrorCode};
use crate::lexer::{Token, TokenKind};

/// The error carried in-band by an ILLEGAL or UNEXPECTED_EOF token.
pub fn lexical_error(token: &Token) -> Option<CompileError> {
    let error = match token.kind {
        TokenKind::Illegal if token.span.is_empty() && token.text.is_empty() => {
            CompileError::new(
                ErrorCode::IllegalToken,
                "Inconsistent indentation",
                token.span,
            )
            .with_hint("Dedent to a column used by an enclosing line")
        }
        TokenKind::Illegal => CompileError::new(
            ErrorCode::IllegalToken,
            format!("Illegal token {}", token),
            token.span,
        ),
        TokenKind::UnexpectedEof => CompileError::new(
            ErrorCode::UnexpectedEndOfInput,
            "Unexpected end of input",
            token.span,
        )
        .with_hint("A string or block comment is not terminated"),
        _ => return None,
    };
    Some(error)
}

/// Trait for parser helper operations.
pub trait ParserHelpers<'source> {
    /// Take the pushed-back token, or pull the next one from the lexer.
    fn scan(&mut self) -> Token;

    /// Push a token back; the next `scan` returns it.
    ///
    /// Exactly one token of pushback exists.
    fn unscan(&mut self, token: Token);

    /// Scan, skipping SPACE, NEWLINE, COMMENT and DOC_COMMENT.
    fn scan_ignore_trivia(&mut self) -> Token;

    /// Scan the next non-trivia token, failing on lexical errors.
    fn next_significant(&mut self) -> Result<Token, CompileError>;

    /// Reject ILLEGAL and UNEXPECTED_EOF tokens.
    fn check_lexical(&self, token: Token) -> Result<Token, CompileError>;

    /// Expect the next significant token to be of `kind`.
    fn expect(
        &mut self,
        kind: TokenKind,
        code: ErrorCode,
        message: &str,
    ) -> Result<Token, CompileError>;

    /// Create an error located at a token.
    fn error_at(&self, token: &Token, code: ErrorCode, message: impl Into<String>) -> CompileError;
}

impl<'source> ParserHelpers<'source> for Parser<'source> {
    fn scan(&mut self) -> Token {
        match self.pushed_back.take() {
            Some(token) => token,
            None => self.lexer.next_token(),
        }
    }

    fn unscan(&mut self, token: Token) {
        self.pushed_back = Some(token);
    }

    fn scan_ignore_trivia(&mut self) -> Token {
        loop {
            let token = self.scan();
            if !token.kind.is_trivia() {
                return token;
            }
        }
    }

    fn next_significant(&mut self) -> Result<Token, CompileError> {
        let token = self.scan_ignore_trivia();
        self.check_lexical(token)
    }

    fn check_lexical(&self, token: Token) -> Result<Token, CompileError> {
        match lexical_error(&token) {
            Some(error) => Err(error),
            None => Ok(token),
        }
    }

    fn expect(
        &mut self,
        kind: TokenKind,
        code: ErrorCode,
        message: &str,
    ) -> Result<Token, CompileError> {
        let token = self.next_significant()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(self.error_at(&token, code, format!("{}, found {}", message, token)))
        }
    }

    fn error_at(&self, token: &Token, code: ErrorCode, message: impl Into<String>) -> CompileError {
        CompileError::new(code, message, token.span)
    }
}
