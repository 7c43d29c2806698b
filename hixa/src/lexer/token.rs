// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use crate::{FileLocation, FileRange};

use super::{Keyword, Punctuator, TokenKind};

/// A token compares equal to another token when kind, lexeme and starting
/// position match. The end position is derived bookkeeping and is ignored.
#[derive(Clone, Debug)]
pub struct Token {
    pub kind: TokenKind,

    /// The source text of the token, except for string literals, which have
    /// their quotes stripped.
    pub lexeme: String,

    pub begin: FileLocation,
    pub end: FileLocation,
}

impl Token {
    #[must_use]
    pub fn range(&self) -> FileRange {
        FileRange::new(self.begin, self.end)
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.begin.line()
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        self.begin.column()
    }

    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self.kind {
            TokenKind::Identifier => Some(&self.lexeme),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_punctuator(&self, punctuator: Punctuator) -> bool {
        self.kind == TokenKind::Punctuator(punctuator)
    }

    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.lexeme == other.lexeme
            && self.begin == other.begin
    }
}

impl Eq for Token {}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfFile => f.write_str("end of file"),
            TokenKind::StringLiteral => f.write_fmt(format_args!("\"{}\"", self.lexeme)),
            _ => f.write_str(&self.lexeme),
        }
    }
}
