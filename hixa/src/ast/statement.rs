// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::rc::Rc;

use crate::{Expression, FileRange, Ranged};

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub range: FileRange,
    pub kind: StatementKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    Block(Vec<Statement>),
    Expression(Ranged<Expression>),
    For(ForStatement),

    /// Shared, since every function value created from this declaration
    /// keeps it alive.
    Function(Rc<FunctionStatement>),

    If(IfStatement),
    Return(ReturnStatement),
    Variable(VariableStatement),
    While(WhileStatement),
}

impl StatementKind {
    #[must_use]
    pub const fn is_expression(&self) -> bool {
        matches!(self, Self::Expression(..))
    }
}

/// Only the C-style `(initializer; condition; increment)` form exists. The
/// initializer binds in the enclosing frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ForStatement {
    pub initializer: Option<Box<Statement>>,
    pub condition: Option<Ranged<Expression>>,
    pub increment: Option<Ranged<Expression>>,
    pub body: Box<Statement>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionStatement {
    pub range: FileRange,
    pub name: Ranged<String>,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<Ranged<String>>,
    pub body: Vec<Statement>,
}

/// `nahole` branches are nested as an [`IfStatement`] inside the else branch.
#[derive(Clone, Debug, PartialEq)]
pub struct IfStatement {
    pub condition: Ranged<Expression>,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub name: Ranged<String>,
    pub type_annotation: Option<Ranged<String>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReturnStatement {
    pub keyword_range: FileRange,
    pub expression: Option<Ranged<Expression>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableStatement {
    pub name: Ranged<String>,
    pub type_annotation: Option<Ranged<String>>,
    pub expression: Option<Ranged<Expression>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WhileStatement {
    pub condition: Ranged<Expression>,
    pub body: Box<Statement>,
}
