// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::{Keyword, Punctuator};

/// The value of a literal lives in the lexeme of its [`Token`](super::Token),
/// which keeps every kind `Copy`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword(Keyword),

    Identifier,
    StringLiteral,
    Integer,
    Float,

    Punctuator(Punctuator),
    EndOfFile,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Keyword(..) => "keyword",

            Self::Identifier => "identifier",
            Self::StringLiteral => "string",
            Self::Integer => "integer",
            Self::Float => "float",

            Self::Punctuator(punctuator) => punctuator.name(),
            Self::EndOfFile => "end of file",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword(keyword) => keyword.fmt(f),
            Self::Punctuator(punctuator) => punctuator.fmt(f),
            _ => f.write_str(self.name()),
        }
    }
}
