// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod ast;
mod config;
mod diagnostic;
mod lexer;
mod parser;
mod util;

pub use self::{
    ast::*,
    config::{ConfigRoot, ConfigSectionInterpreter, ConfigSectionLog, CONFIG_FILE_NAME},
    diagnostic::{analyze, Diagnostic, DiagnosticStage, SourceAnalysis},
    lexer::{tokenize, Keyword, Lexer, LexerError, LexerErrorKind, Punctuator, Token, TokenKind},
    parser::{parse, ParseDiagnostic, ParseResult, Parser},
    util::{FileLocation, FileRange, Ranged},
};
