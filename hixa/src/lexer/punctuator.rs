// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum Punctuator {
    #[strum(serialize = "arrow")]
    Arrow,
    #[strum(serialize = "colon")]
    Colon,
    #[strum(serialize = "comma")]
    Comma,
    #[strum(serialize = "left parenthesis")]
    LeftParenthesis,
    #[strum(serialize = "right parenthesis")]
    RightParenthesis,
    #[strum(serialize = "left curly bracket")]
    LeftCurlyBracket,
    #[strum(serialize = "right curly bracket")]
    RightCurlyBracket,
    #[strum(serialize = "left square bracket")]
    LeftSquareBracket,
    #[strum(serialize = "right square bracket")]
    RightSquareBracket,
    #[strum(serialize = "semicolon")]
    Semicolon,
    #[strum(serialize = "plus")]
    PlusSign,
    #[strum(serialize = "assignment")]
    Assignment,
    #[strum(serialize = "equals")]
    Equals,
    #[strum(serialize = "not equals")]
    NotEquals,
    #[strum(serialize = "minus")]
    HyphenMinus,
    #[strum(serialize = "solidus")]
    Solidus,
    #[strum(serialize = "asterisk")]
    Asterisk,
    #[strum(serialize = "percentage sign")]
    PercentageSign,
    #[strum(serialize = "period")]
    Period,
    #[strum(serialize = "less-than")]
    LessThan,
    #[strum(serialize = "less-than-or-equal")]
    LessThanOrEqual,
    #[strum(serialize = "greater-than")]
    GreaterThan,
    #[strum(serialize = "greater-than-or-equal")]
    GreaterThanOrEqual,
    #[strum(serialize = "logical-and")]
    LogicalAnd,
    #[strum(serialize = "logical-or")]
    LogicalOr,
    #[strum(serialize = "not")]
    Not,
    #[strum(serialize = "pipe")]
    Pipe,
}

impl Punctuator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Arrow => "->",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::LeftCurlyBracket => "{",
            Self::RightCurlyBracket => "}",
            Self::LeftSquareBracket => "[",
            Self::RightSquareBracket => "]",
            Self::Semicolon => ";",
            Self::PlusSign => "+",
            Self::Assignment => "=",
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::HyphenMinus => "-",
            Self::Solidus => "/",
            Self::Asterisk => "*",
            Self::PercentageSign => "%",
            Self::Period => ".",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::Not => "!",
            Self::Pipe => "|",
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl Display for Punctuator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
