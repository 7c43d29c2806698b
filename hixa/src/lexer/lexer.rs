// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display, str::CharIndices};

use log::trace;
use strum::AsRefStr;
use thiserror::Error;

use crate::{FileLocation, Keyword, Punctuator, Token, TokenKind};

/// Converts the source into tokens. Every error is collected; if there were
/// any, no tokens are returned at all.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Vec<LexerError>> {
    let (tokens, errors) = Lexer::new(source).collect_all();
    trace!("Lexed {} tokens with {} errors", tokens.len(), errors.len());

    if errors.is_empty() {
        Ok(tokens)
    } else {
        Err(errors)
    }
}

pub struct Lexer<'source_code> {
    input: &'source_code str,
    chars: CharIndices<'source_code>,

    current: Option<(FileLocation, char)>,
    line: usize,
    column: usize,
    errors: Vec<LexerError>,
    emitted_end_of_file: bool,
}

impl<'source_code> Lexer<'source_code> {
    pub fn new(input: &'source_code str) -> Self {
        Self {
            input,
            chars: input.char_indices(),
            current: None,
            line: 1,
            column: 1,
            errors: Vec::new(),
            emitted_end_of_file: false,
        }
    }

    pub fn next(&mut self) -> Option<Token> {
        loop {
            self.skip_whitespace();

            let Some(ch) = self.peek_char() else {
                return self.consume_end_of_file();
            };

            let token = match ch {
                '"' => self.consume_string(),

                'a'..='z' | 'A'..='Z' | '_' => self.consume_identifier_or_keyword(),
                '0'..='9' => self.consume_number(),

                '(' => self.consume_single_char_token(Punctuator::LeftParenthesis),
                ')' => self.consume_single_char_token(Punctuator::RightParenthesis),
                '{' => self.consume_single_char_token(Punctuator::LeftCurlyBracket),
                '}' => self.consume_single_char_token(Punctuator::RightCurlyBracket),
                '[' => self.consume_single_char_token(Punctuator::LeftSquareBracket),
                ']' => self.consume_single_char_token(Punctuator::RightSquareBracket),
                ';' => self.consume_single_char_token(Punctuator::Semicolon),
                ',' => self.consume_single_char_token(Punctuator::Comma),
                '.' => self.consume_single_char_token(Punctuator::Period),
                ':' => self.consume_single_char_token(Punctuator::Colon),
                '+' => self.consume_single_char_token(Punctuator::PlusSign),
                '*' => self.consume_single_char_token(Punctuator::Asterisk),
                '%' => self.consume_single_char_token(Punctuator::PercentageSign),
                '-' => self.consume_minus(),
                '/' => self.handle_solidus(),
                '=' => self.consume_with_optional_equals(Punctuator::Assignment, Punctuator::Equals),
                '!' => self.consume_with_optional_equals(Punctuator::Not, Punctuator::NotEquals),
                '<' => self.consume_with_optional_equals(Punctuator::LessThan, Punctuator::LessThanOrEqual),
                '>' => self.consume_with_optional_equals(Punctuator::GreaterThan, Punctuator::GreaterThanOrEqual),
                '|' => self.consume_single_or_double_char_token(Some(Punctuator::Pipe), Punctuator::LogicalOr),
                '&' => self.consume_single_or_double_char_token(None, Punctuator::LogicalAnd),

                _ => {
                    let location = self.current_location();
                    self.consume_char();
                    self.errors.push(LexerError {
                        location,
                        kind: LexerErrorKind::UnexpectedCharacter { character: ch },
                    });
                    None
                }
            };

            if token.is_some() {
                return token;
            }
        }
    }

    fn make_token(&mut self, kind: TokenKind, begin: FileLocation) -> Token {
        let end = self.current_location();

        Token {
            kind,
            lexeme: self.input[begin.offset()..end.offset()].to_string(),
            begin,
            end,
        }
    }

    fn consume_end_of_file(&mut self) -> Option<Token> {
        if self.emitted_end_of_file {
            return None;
        }

        self.emitted_end_of_file = true;

        let location = self.current_location();
        Some(Token {
            kind: TokenKind::EndOfFile,
            lexeme: String::new(),
            begin: location,
            end: location,
        })
    }

    #[must_use]
    fn consume_single_char_token(&mut self, punctuator: Punctuator) -> Option<Token> {
        let begin = self.current_location();
        self.consume_char();
        Some(self.make_token(TokenKind::Punctuator(punctuator), begin))
    }

    /// Handles `&&` and `||`. A lone `&` has no meaning, which is signalled by
    /// `single` being `None`.
    fn consume_single_or_double_char_token(&mut self, single: Option<Punctuator>, double: Punctuator) -> Option<Token> {
        let begin = self.current_location();
        let char = self.next_char()?;

        if self.peek_char() == Some(char) {
            self.consume_char();
            return Some(self.make_token(TokenKind::Punctuator(double), begin));
        }

        match single {
            Some(single) => Some(self.make_token(TokenKind::Punctuator(single), begin)),
            None => {
                self.errors.push(LexerError {
                    location: begin,
                    kind: LexerErrorKind::UnexpectedCharacter { character: char },
                });
                None
            }
        }
    }

    fn consume_with_optional_equals(&mut self, normal: Punctuator, with_equals: Punctuator) -> Option<Token> {
        let begin = self.current_location();
        self.consume_char();

        let punctuator = if self.peek_char() == Some('=') {
            self.consume_char();
            with_equals
        } else {
            normal
        };

        Some(self.make_token(TokenKind::Punctuator(punctuator), begin))
    }

    fn consume_minus(&mut self) -> Option<Token> {
        let begin = self.current_location();
        self.consume_char();

        let punctuator = if self.peek_char() == Some('>') {
            self.consume_char();
            Punctuator::Arrow
        } else {
            Punctuator::HyphenMinus
        };

        Some(self.make_token(TokenKind::Punctuator(punctuator), begin))
    }

    fn handle_solidus(&mut self) -> Option<Token> {
        let begin = self.current_location();
        self.consume_char();

        if self.peek_char() == Some('/') {
            self.consume_until_end_of_line();
            return None;
        }

        Some(self.make_token(TokenKind::Punctuator(Punctuator::Solidus), begin))
    }

    fn consume_until_end_of_line(&mut self) {
        while let Some(c) = self.next_char() {
            if c == '\n' {
                break;
            }
        }
    }

    fn consume_string(&mut self) -> Option<Token> {
        let begin = self.current_location();
        self.consume_char();

        let content_begin = self.current_location().offset();

        loop {
            match self.peek_char() {
                Some('"') => break,
                Some(..) => self.consume_char(),
                None => {
                    self.errors.push(LexerError {
                        location: begin,
                        kind: LexerErrorKind::UnterminatedString,
                    });
                    return None;
                }
            }
        }

        let content_end = self.current_location().offset();
        self.consume_char();

        Some(Token {
            kind: TokenKind::StringLiteral,
            lexeme: self.input[content_begin..content_end].to_string(),
            begin,
            end: self.current_location(),
        })
    }

    fn consume_identifier_or_keyword(&mut self) -> Option<Token> {
        let begin = self.current_location();

        while let Some(c) = self.peek_char() {
            if !is_identifier_char(c) {
                break;
            }

            self.consume_char();
        }

        let end = self.current_location();
        let kind = match Keyword::parse(&self.input[begin.offset()..end.offset()]) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        };

        Some(self.make_token(kind, begin))
    }

    fn consume_number(&mut self) -> Option<Token> {
        let begin = self.current_location();
        self.consume_digits();

        let mut kind = TokenKind::Integer;

        if self.peek_char() == Some('.') && self.char_after_current().is_some_and(|c| c.is_ascii_digit()) {
            self.consume_char();
            self.consume_digits();
            kind = TokenKind::Float;
        }

        let token = self.make_token(kind, begin);

        let valid = match kind {
            TokenKind::Integer => token.lexeme.parse::<i64>().is_ok(),
            _ => token.lexeme.parse::<f64>().is_ok(),
        };

        if !valid {
            self.errors.push(LexerError {
                location: begin,
                kind: LexerErrorKind::InvalidNumber { literal: token.lexeme },
            });
            return None;
        }

        Some(token)
    }

    fn consume_digits(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_ascii_digit() {
                break;
            }

            self.consume_char();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }

            self.consume_char();
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        if let Some((_, c)) = self.current {
            return Some(c);
        }

        self.current = self.chars.next()
            .map(|(offset, char)| {
                let location = FileLocation::new(offset, self.line, self.column);

                if char == '\n' {
                    self.line += 1;
                    self.column = 1;
                } else {
                    self.column += 1;
                }

                (location, char)
            });
        Some(self.current?.1)
    }

    /// Looks one character past the peeked one, without moving.
    fn char_after_current(&mut self) -> Option<char> {
        let (location, current) = self.current?;
        self.input[location.offset() + current.len_utf8()..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.consume_char();
        Some(c)
    }

    fn consume_char(&mut self) {
        self.current = None;
        _ = self.peek_char();
    }

    fn current_location(&mut self) -> FileLocation {
        _ = self.peek_char();
        match self.current {
            Some((location, _)) => location,
            None => FileLocation::new(self.input.len(), self.line, self.column),
        }
    }

    pub fn collect_all(mut self) -> (Vec<Token>, Vec<LexerError>) {
        let mut tokens = Vec::new();

        while let Some(token) = self.next() {
            tokens.push(token);
        }

        (tokens, self.errors)
    }
}

impl<'source_code> Iterator for Lexer<'source_code> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next()
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerError {
    pub location: FileLocation,
    pub kind: LexerErrorKind,
}

impl Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

impl Error for LexerError {}

#[derive(Debug, Clone, PartialEq, Eq, Error, AsRefStr)]
pub enum LexerErrorKind {
    #[error("Unexpected character `{character}`")]
    UnexpectedCharacter { character: char },

    #[error("Unterminated string literal")]
    UnterminatedString,

    #[error("Invalid number `{literal}`")]
    InvalidNumber { literal: String },
}

impl LexerErrorKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn token(kind: TokenKind, lexeme: &str, begin: (usize, usize, usize), end: (usize, usize, usize)) -> Token {
        Token {
            kind,
            lexeme: lexeme.to_string(),
            begin: FileLocation::new(begin.0, begin.1, begin.2),
            end: FileLocation::new(end.0, end.1, end.2),
        }
    }

    #[rstest]
    #[case("h", token(TokenKind::Identifier, "h", (0, 1, 1), (1, 1, 2)))]
    #[case("  s ", token(TokenKind::Identifier, "s", (2, 1, 3), (3, 1, 4)))]
    #[case("\"Hal\\nlo\" ", token(TokenKind::StringLiteral, "Hal\\nlo", (0, 1, 1), (9, 1, 10)))]
    #[case("42", token(TokenKind::Integer, "42", (0, 1, 1), (2, 1, 3)))]
    #[case("3.14", token(TokenKind::Float, "3.14", (0, 1, 1), (4, 1, 5)))]
    #[case("< 1", token(TokenKind::Punctuator(Punctuator::LessThan), "<", (0, 1, 1), (1, 1, 2)))]
    #[case("<= 1", token(TokenKind::Punctuator(Punctuator::LessThanOrEqual), "<=", (0, 1, 1), (2, 1, 3)))]
    #[case(">= 1", token(TokenKind::Punctuator(Punctuator::GreaterThanOrEqual), ">=", (0, 1, 1), (2, 1, 3)))]
    #[case("!= 1", token(TokenKind::Punctuator(Punctuator::NotEquals), "!=", (0, 1, 1), (2, 1, 3)))]
    #[case("== 1", token(TokenKind::Punctuator(Punctuator::Equals), "==", (0, 1, 1), (2, 1, 3)))]
    #[case("= 1", token(TokenKind::Punctuator(Punctuator::Assignment), "=", (0, 1, 1), (1, 1, 2)))]
    #[case("->", token(TokenKind::Punctuator(Punctuator::Arrow), "->", (0, 1, 1), (2, 1, 3)))]
    #[case("- 1", token(TokenKind::Punctuator(Punctuator::HyphenMinus), "-", (0, 1, 1), (1, 1, 2)))]
    #[case("&&", token(TokenKind::Punctuator(Punctuator::LogicalAnd), "&&", (0, 1, 1), (2, 1, 3)))]
    #[case("||", token(TokenKind::Punctuator(Punctuator::LogicalOr), "||", (0, 1, 1), (2, 1, 3)))]
    #[case("|", token(TokenKind::Punctuator(Punctuator::Pipe), "|", (0, 1, 1), (1, 1, 2)))]
    #[case("/ 1", token(TokenKind::Punctuator(Punctuator::Solidus), "/", (0, 1, 1), (1, 1, 2)))]
    #[case("// comment\nx", token(TokenKind::Identifier, "x", (11, 2, 1), (12, 2, 2)))]
    #[case("\n\n  dhora", token(TokenKind::Keyword(Keyword::Let), "dhora", (4, 3, 3), (9, 3, 8)))]
    fn next_text(#[case] input: &'static str, #[case] expected: Token) {
        let mut lexer = Lexer::new(input);
        let actual = lexer.next();

        assert_eq!(lexer.errors, Vec::new());
        assert_eq!(actual.as_ref().map(|x| x.end), Some(expected.end));
        assert_eq!(actual, Some(expected));
    }

    #[test]
    fn string_lexeme_has_quotes_stripped() {
        let tokens = tokenize("\"hello world\"").unwrap();
        assert_eq!(tokens[0].lexeme, "hello world");
    }

    #[test]
    fn string_may_span_lines() {
        let tokens = tokenize("\"a\nb\" c").unwrap();
        assert_eq!(tokens[0].lexeme, "a\nb");
        assert_eq!(tokens[1].line(), 2);
        assert_eq!(tokens[1].column(), 4);
    }

    #[test]
    fn integer_followed_by_period_without_digit() {
        let kinds: Vec<TokenKind> = tokenize("1.x").unwrap().into_iter().map(|x| x.kind).collect();
        assert_eq!(kinds, vec![
            TokenKind::Integer,
            TokenKind::Punctuator(Punctuator::Period),
            TokenKind::Identifier,
            TokenKind::EndOfFile,
        ]);
    }

    #[rstest]
    #[case("")]
    #[case("   \n\t")]
    #[case("// only a comment")]
    #[case("dhora x = 42;")]
    #[case("kam f(a, b) { ghurai_diya a + b }")]
    fn ends_with_exactly_one_end_of_file(#[case] input: &str) {
        let tokens = tokenize(input).unwrap();
        let end_count = tokens.iter().filter(|x| x.kind == TokenKind::EndOfFile).count();

        assert_eq!(end_count, 1);
        assert_eq!(tokens.last().map(|x| x.kind), Some(TokenKind::EndOfFile));
    }

    #[rstest]
    #[case("kam", "fn")]
    #[case("dhora", "let")]
    #[case("jodi", "if")]
    #[case("nohole", "else")]
    #[case("ghurai_diya", "return")]
    #[case("hosa", "true")]
    #[case("nai", "null")]
    fn alias_spellings_produce_same_token(#[case] primary: &str, #[case] alias: &str) {
        let primary = tokenize(primary).unwrap().remove(0);
        let alias = tokenize(alias).unwrap().remove(0);

        assert_eq!(primary.kind, alias.kind);
        assert_eq!(primary.begin, alias.begin);
        assert_ne!(primary.lexeme, alias.lexeme);
    }

    #[rstest]
    #[case("dhora x = 5 @ 3", LexerErrorKind::UnexpectedCharacter { character: '@' }, (12, 1, 13))]
    #[case("x = \"abc", LexerErrorKind::UnterminatedString, (4, 1, 5))]
    #[case("\n  &", LexerErrorKind::UnexpectedCharacter { character: '&' }, (3, 2, 3))]
    #[case("99999999999999999999", LexerErrorKind::InvalidNumber { literal: "99999999999999999999".into() }, (0, 1, 1))]
    fn errors(#[case] input: &str, #[case] kind: LexerErrorKind, #[case] location: (usize, usize, usize)) {
        let errors = tokenize(input).unwrap_err();
        assert_eq!(errors, vec![LexerError {
            location: FileLocation::new(location.0, location.1, location.2),
            kind,
        }]);
    }

    #[test]
    fn collects_every_error_and_keeps_scanning() {
        let (tokens, errors) = Lexer::new("a # b $ c").collect_all();

        assert_eq!(errors.len(), 2);
        let identifiers: Vec<&str> = tokens.iter().filter_map(|x| x.as_identifier()).collect();
        assert_eq!(identifiers, vec!["a", "b", "c"]);
    }
}
