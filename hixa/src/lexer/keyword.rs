// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use strum::IntoEnumIterator;

/// Every keyword has a primary (Assamese) spelling, and most also carry an
/// English alias. Both spellings lex to the same [`Keyword`], so nothing past
/// the lexer ever sees which one was written.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Keyword {
    Function,
    Return,
    If,
    Else,
    ElseIf,
    While,
    For,
    Let,
    True,
    False,
    Null,
    And,
    Or,
    Not,
    End,
    Break,
    Continue,
    Pass,
    Import,
    Try,
    Catch,
    Finally,
    In,
    Class,
    SelfValue,
}

impl Keyword {
    pub fn iter_variants() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|x| x.spellings().contains(&input))
    }

    /// The primary spelling comes first.
    #[must_use]
    pub const fn spellings(&self) -> &'static [&'static str] {
        match self {
            Self::Function => &["kam", "fn"],
            Self::Return => &["ghurai_diya", "return"],
            Self::If => &["jodi", "if"],
            Self::Else => &["nohole", "else"],
            Self::ElseIf => &["nahole"],
            Self::While => &["jetialoike", "while"],
            Self::For => &["karone", "for"],
            Self::Let => &["dhora", "let"],
            Self::True => &["hosa", "true"],
            Self::False => &["misa", "false"],
            Self::Null => &["nai", "null"],
            Self::And => &["aru"],
            Self::Or => &["ba"],
            Self::Not => &["not_kora"],
            Self::End => &["hekh"],
            Self::Break => &["break_kora"],
            Self::Continue => &["continue_kora"],
            Self::Pass => &["pass_kora"],
            Self::Import => &["import"],
            Self::Try => &["try_kora"],
            Self::Catch => &["catch_kora"],
            Self::Finally => &["finally_kora"],
            Self::In => &["in"],
            Self::Class => &["class"],
            Self::SelfValue => &["self"],
        }
    }

    #[must_use]
    pub const fn primary_spelling(&self) -> &'static str {
        self.spellings()[0]
    }

    /// Keywords the parser resynchronizes on after a syntax error.
    #[must_use]
    pub const fn starts_declaration(&self) -> bool {
        matches!(self, Self::Function | Self::Let | Self::If | Self::While | Self::For | Self::Return)
    }

    /// Keywords that are reserved, but have no grammar attached to them.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        matches!(
            self,
            Self::End | Self::Break | Self::Continue | Self::Pass | Self::Import
                | Self::Try | Self::Catch | Self::Finally | Self::In | Self::Class | Self::SelfValue
        )
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.primary_spelling())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("kam", Keyword::Function)]
    #[case("fn", Keyword::Function)]
    #[case("ghurai_diya", Keyword::Return)]
    #[case("return", Keyword::Return)]
    #[case("nahole", Keyword::ElseIf)]
    #[case("not_kora", Keyword::Not)]
    #[case("self", Keyword::SelfValue)]
    fn parse_spelling(#[case] input: &str, #[case] expected: Keyword) {
        assert_eq!(Keyword::parse(input), Some(expected));
    }

    #[rstest]
    #[case("print")]
    #[case("error_kora")]
    #[case("Kam")]
    #[case("")]
    fn parse_non_keyword(#[case] input: &str) {
        assert_eq!(Keyword::parse(input), None);
    }

    #[test]
    fn spellings_are_unique() {
        let mut all: Vec<&str> = Keyword::iter_variants()
            .flat_map(|keyword| keyword.spellings().iter().copied())
            .collect();
        let count = all.len();

        all.sort_unstable();
        all.dedup();

        assert_eq!(all.len(), count);
    }
}
