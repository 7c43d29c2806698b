// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::slice::Iter;

use super::Statement;

/// The top-level statements of a source file, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Statement> {
        self.statements.iter()
    }
}

impl From<Vec<Statement>> for Program {
    fn from(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

impl<'program> IntoIterator for &'program Program {
    type Item = &'program Statement;
    type IntoIter = Iter<'program, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
