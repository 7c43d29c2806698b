// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use log::debug;
use strum::AsRefStr;

use crate::{parse, FileLocation, FileRange, Lexer, LexerError, ParseDiagnostic, Program, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum DiagnosticStage {
    Lexical,
    Syntax,
}

/// A lexical or syntax error, flattened so that a consumer can display it
/// without knowing where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    stage: DiagnosticStage,
    message: String,
    range: FileRange,
}

impl Diagnostic {
    #[must_use]
    pub fn stage(&self) -> DiagnosticStage {
        self.stage
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn range(&self) -> FileRange {
        self.range
    }

    #[must_use]
    pub fn location(&self) -> FileLocation {
        self.range.start()
    }

    #[must_use]
    pub fn line(&self) -> usize {
        self.location().line()
    }

    #[must_use]
    pub fn column(&self) -> usize {
        self.location().column()
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}: {}", self.location(), self.message))
    }
}

impl From<&LexerError> for Diagnostic {
    fn from(value: &LexerError) -> Self {
        Self {
            stage: DiagnosticStage::Lexical,
            message: value.to_string(),
            range: value.location.as_zero_range(),
        }
    }
}

impl From<&ParseDiagnostic> for Diagnostic {
    fn from(value: &ParseDiagnostic) -> Self {
        Self {
            stage: DiagnosticStage::Syntax,
            message: value.to_string(),
            range: value.range(),
        }
    }
}

/// The output of running the lexer and parser over a source file.
#[derive(Debug, Clone)]
pub struct SourceAnalysis {
    pub tokens: Vec<Token>,
    pub program: Program,
    pub diagnostics: Vec<Diagnostic>,
}

impl SourceAnalysis {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Lexes and parses the source. The parser also runs when the lexer found
/// errors, so that every diagnostic is reported at once; the program must not
/// be executed when any diagnostic is present.
#[must_use]
pub fn analyze(source: &str) -> SourceAnalysis {
    let (tokens, lexer_errors) = Lexer::new(source).collect_all();
    let (program, parse_diagnostics) = parse(&tokens);

    let diagnostics: Vec<Diagnostic> = lexer_errors.iter().map(Diagnostic::from)
        .chain(parse_diagnostics.iter().map(Diagnostic::from))
        .collect();

    debug!("Analyzed {} tokens into {} statements, found {} diagnostics", tokens.len(), program.len(), diagnostics.len());

    SourceAnalysis {
        tokens,
        program,
        diagnostics,
    }
}
