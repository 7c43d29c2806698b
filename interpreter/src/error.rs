// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::Display, io::Write, path::Path};

use colored::{Color, ColoredString, Colorize};
use hixa::FileRange;

/// Prints a message together with the offending source line and a caret
/// under the reported range.
pub struct ErrorPrinter<'source> {
    path: &'source Path,
    source: &'source str,
    range: FileRange,
    message: String,
    hint: Option<String>,

    color: Color,
    line_number: ColoredString,
}

impl<'source> ErrorPrinter<'source> {
    #[must_use = "Use the `print` method to actually print"]
    pub fn new(path: &'source Path, source: &'source str, range: FileRange, message: impl Display) -> Self {
        Self {
            path,
            source,
            range,
            message: message.to_string(),
            hint: None,

            color: Color::Red,
            line_number: range.start().line().to_string().blue().bold(),
        }
    }

    #[must_use]
    pub fn hint(self, hint: impl Into<Option<String>>) -> Self {
        Self {
            hint: hint.into(),
            ..self
        }
    }

    pub fn print(self) {
        let mut stderr = std::io::stderr().lock();
        _ = self.write_to(&mut stderr);
    }

    pub fn write_to(&self, out: &mut impl Write) -> std::io::Result<()> {
        self.write_prelude(out)?;
        self.write_lines(out)?;
        self.write_postlude(out)
    }

    fn write_prelude(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "{}: {}", "error".red().bold(), self.message.bold())?;
        writeln!(out)
    }

    fn write_lines(&self, out: &mut impl Write) -> std::io::Result<()> {
        let line_index = self.range.start().line().saturating_sub(1);
        let lines: Vec<&str> = self.source.lines().collect();

        if let Some(previous) = line_index.checked_sub(1).and_then(|idx| lines.get(idx)) {
            if !previous.trim().is_empty() {
                self.write_line(out, false, previous)?;
            }
        }

        let primary = lines.get(line_index).copied().unwrap_or_default();
        self.write_line(out, true, primary)?;
        self.write_error_indicator(out)?;

        if let Some(next) = lines.get(line_index + 1) {
            if !next.trim().is_empty() {
                self.write_line(out, false, next)?;
            }
        }

        Ok(())
    }

    fn write_line(&self, out: &mut impl Write, is_primary: bool, line: &str) -> std::io::Result<()> {
        self.write_line_prefix(out, is_primary)?;
        writeln!(out, "{line}")
    }

    fn write_error_indicator(&self, out: &mut impl Write) -> std::io::Result<()> {
        let spaces = " ".repeat(self.range.start().column().saturating_sub(1));
        let caret = "^".color(self.color).bold();

        // Only underline ranges that stay on a single line.
        let tildes = if self.range.start().line() == self.range.end().line() {
            self.range.len().saturating_sub(1)
        } else {
            0
        };
        let tildes = "~".repeat(tildes).color(self.color);

        let hint = match &self.hint {
            Some(hint) => format!("hint: {hint}").color(self.color).bold(),
            None => "".bold(),
        };

        self.write_line_prefix(out, false)?;
        writeln!(out, "{spaces}{caret}{tildes} {hint}")
    }

    fn write_line_prefix(&self, out: &mut impl Write, is_primary: bool) -> std::io::Result<()> {
        let separator = " | ".blue().bold();

        if is_primary {
            write!(out, "{} {separator}", self.line_number)
        } else {
            write!(out, "{} {separator}", " ".repeat(self.line_number.chars().count()))
        }
    }

    fn write_postlude(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out)?;

        let path = self.path.display();
        let location = self.range.start();

        writeln!(out, "In {path}:{location}\n")
    }
}

/// The single error category raised while evaluating a program.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct RuntimeError {
    message: String,
}

impl RuntimeError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn undefined_variable(name: &str) -> Self {
        Self::new(format!("Undefined variable `{name}`"))
    }

    #[must_use]
    pub fn arity_mismatch(function: &str, expected: usize, actual: usize) -> Self {
        Self::new(format!("Function `{function}` expected {expected} arguments but got {actual}"))
    }

    #[must_use]
    pub fn binary_type_mismatch(operator: &str, lhs: &str, rhs: &str) -> Self {
        Self::new(format!("Unsupported operand types for `{operator}`: {lhs} and {rhs}"))
    }

    #[must_use]
    pub fn unary_type_mismatch(operator: &str, operand: &str) -> Self {
        Self::new(format!("Unsupported operand type for `{operator}`: {operand}"))
    }

    #[must_use]
    pub fn division_by_zero() -> Self {
        Self::new("Division by zero")
    }

    #[must_use]
    pub fn modulo_by_zero() -> Self {
        Self::new("Modulo by zero")
    }

    #[must_use]
    pub fn integer_overflow(operator: &str) -> Self {
        Self::new(format!("Integer overflow in `{operator}`"))
    }

    #[must_use]
    pub fn index_out_of_bounds(length: usize, index: i64) -> Self {
        Self::new(format!("Index {index} is out of bounds for length {length}"))
    }

    #[must_use]
    pub fn invalid_index_type(index: &str) -> Self {
        Self::new(format!("Index must be an int, but got {index}"))
    }

    #[must_use]
    pub fn invalid_property_key(key: &str) -> Self {
        Self::new(format!("Property name must be a string, but got {key}"))
    }

    #[must_use]
    pub fn not_indexable(value: &str) -> Self {
        Self::new(format!("Cannot index into a value of type {value}"))
    }

    #[must_use]
    pub fn not_callable(value: &str) -> Self {
        Self::new(format!("A value of type {value} is not callable"))
    }

    #[must_use]
    pub fn not_an_object(value: &str, member: &str) -> Self {
        Self::new(format!("Cannot access member `{member}` on a value of type {value}"))
    }

    #[must_use]
    pub fn unknown_property(member: &str) -> Self {
        Self::new(format!("Object has no property `{member}`"))
    }

    #[must_use]
    pub fn call_depth_exceeded(max_call_depth: usize) -> Self {
        Self::new(format!("Maximum call depth of {max_call_depth} exceeded"))
    }

    #[must_use]
    pub fn builtin_arity(function: &str, expected: &str, actual: usize) -> Self {
        Self::new(format!("Function `{function}` expected {expected} arguments but got {actual}"))
    }

    #[must_use]
    pub fn invalid_argument(function: &str, message: impl Display) -> Self {
        Self::new(format!("Invalid argument for `{function}`: {message}"))
    }

    #[must_use]
    pub fn user(message: impl Display) -> Self {
        Self::new(message.to_string())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
