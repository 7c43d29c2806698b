// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Debug, Display, Write};

use strum::AsRefStr;

use crate::Ranged;

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
}

impl Literal {
    #[must_use]
    pub const fn kind(&self) -> LiteralKind {
        match self {
            Self::Integer(..) => LiteralKind::Integer,
            Self::Float(..) => LiteralKind::Float,
            Self::String(..) => LiteralKind::String,
            Self::Boolean(..) => LiteralKind::Boolean,
            Self::Null => LiteralKind::Null,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(integer) => Display::fmt(integer, f),
            Self::Float(float) => Debug::fmt(float, f),
            Self::String(string) => {
                f.write_char('"')?;
                f.write_str(string)?;
                f.write_char('"')
            }
            Self::Boolean(boolean) => Display::fmt(boolean, f),
            Self::Null => f.write_str("null"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum LiteralKind {
    Integer,
    Float,
    String,
    Boolean,
    Null,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PrimaryExpression {
    Literal(Literal),
    Reference(Ranged<String>),
    Array(Vec<Ranged<Expression>>),
    Object(Vec<ObjectProperty>),
    Parenthesized(Box<Ranged<Expression>>),
}

impl Display for PrimaryExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(literal) => Display::fmt(literal, f),
            Self::Reference(name) => f.write_str(name.value()),
            Self::Array(elements) => {
                f.write_char('[')?;
                write_separated(f, elements.iter().map(|x| x.value()))?;
                f.write_char(']')
            }
            Self::Object(properties) => {
                f.write_char('{')?;
                for (idx, property) in properties.iter().enumerate() {
                    if idx != 0 {
                        f.write_str(", ")?;
                    }

                    f.write_fmt(format_args!("{}: {}", property.key.value(), property.value.value()))?;
                }
                f.write_char('}')
            }
            Self::Parenthesized(expression) => Display::fmt(expression.value(), f),
        }
    }
}

/// Keys are always bare identifiers; order is kept as written.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectProperty {
    pub key: Ranged<String>,
    pub value: Ranged<Expression>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    Assignment(AssignmentExpression),
    BiExpression(BiExpression),
    Postfix(PostfixExpression),
    Primary(PrimaryExpression),
    Unary(UnaryExpression),
}

impl Expression {
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Primary(PrimaryExpression::Reference(ident)) => Some(ident.value()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Primary(PrimaryExpression::Literal(literal)) => Some(literal),
            _ => None,
        }
    }
}

/// Binary, unary and assignment expressions are fully parenthesized, which
/// makes the grouping chosen by the parser visible.
impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assignment(expr) => Display::fmt(expr, f),
            Self::BiExpression(expr) => Display::fmt(expr, f),
            Self::Postfix(expr) => Display::fmt(expr, f),
            Self::Primary(expr) => Display::fmt(expr, f),
            Self::Unary(expr) => Display::fmt(expr, f),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssignmentExpression {
    pub target: Ranged<AssignmentTarget>,
    pub value: Box<Ranged<Expression>>,
}

impl Display for AssignmentExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("({} = {})", self.target.value(), self.value.value()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AssignmentTarget {
    Reference(String),
    Member {
        object: Box<Ranged<Expression>>,
        member: Ranged<String>,
    },
    Subscript {
        array: Box<Ranged<Expression>>,
        index: Box<Ranged<Expression>>,
    },
}

impl Display for AssignmentTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reference(name) => f.write_str(name),
            Self::Member { object, member } => f.write_fmt(format_args!("{}.{}", object.value(), member.value())),
            Self::Subscript { array, index } => f.write_fmt(format_args!("{}[{}]", array.value(), index.value())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostfixExpression {
    pub lhs: Box<Ranged<Expression>>,
    pub kind: Ranged<PostfixExpressionKind>,
}

impl Display for PostfixExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.lhs.value(), f)?;

        match self.kind.value() {
            PostfixExpressionKind::Call(call) => {
                Display::fmt(call, f)
            }

            PostfixExpressionKind::Member(member) => {
                f.write_char('.')?;
                f.write_str(member.value())
            }

            PostfixExpressionKind::Subscript(expr) => {
                f.write_char('[')?;
                Display::fmt(expr.value(), f)?;
                f.write_char(']')
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PostfixExpressionKind {
    Call(FunctionCallExpression),
    Member(Ranged<String>),
    Subscript(Box<Ranged<Expression>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub kind: Ranged<UnaryExpressionKind>,
    pub rhs: Box<Ranged<Expression>>,
}

impl Display for UnaryExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('(')?;

        match self.kind.value() {
            UnaryExpressionKind::Negate => f.write_char('-')?,
            UnaryExpressionKind::Not => f.write_char('!')?,
        }

        Display::fmt(self.rhs.value(), f)?;
        f.write_char(')')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryExpressionKind {
    Negate,
    Not,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionCallExpression {
    pub arguments: Vec<Ranged<Expression>>,
}

impl Display for FunctionCallExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('(')?;
        write_separated(f, self.arguments.iter().map(|x| x.value()))?;
        f.write_char(')')
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BiExpression {
    pub operator: Ranged<BiOperator>,
    pub lhs: Box<Ranged<Expression>>,
    pub rhs: Box<Ranged<Expression>>,
}

impl Display for BiExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('(')?;
        Display::fmt(self.lhs.value(), f)?;

        f.write_char(' ')?;
        f.write_str(self.operator.as_str())?;
        f.write_char(' ')?;

        Display::fmt(self.rhs.value(), f)?;
        f.write_char(')')
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BiOperator {
    Comparison(Comparison),
    Logical(LogicalOperator),
    Math(MathOperator),
}

impl BiOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Comparison(comp) => comp.as_str(),
            Self::Logical(logical) => logical.as_str(),
            Self::Math(math) => math.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl MathOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
        }
    }
}

impl From<MathOperator> for BiOperator {
    fn from(value: MathOperator) -> Self {
        Self::Math(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

impl From<LogicalOperator> for BiOperator {
    fn from(value: LogicalOperator) -> Self {
        Self::Logical(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equality,
    Inequality,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl From<Comparison> for BiOperator {
    fn from(value: Comparison) -> Self {
        Self::Comparison(value)
    }
}

impl Comparison {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equality => "==",
            Self::Inequality => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
        }
    }
}

fn write_separated<'a>(f: &mut std::fmt::Formatter<'_>, items: impl Iterator<Item = &'a Expression>) -> std::fmt::Result {
    for (idx, item) in items.enumerate() {
        if idx != 0 {
            f.write_str(", ")?;
        }

        Display::fmt(item, f)?;
    }

    Ok(())
}
