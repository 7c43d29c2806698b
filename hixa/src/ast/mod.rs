// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod expression;
mod program;
mod statement;

pub use self::{
    expression::{
        AssignmentExpression,
        AssignmentTarget,
        BiExpression,
        BiOperator,
        Comparison,
        Expression,
        FunctionCallExpression,
        Literal,
        LiteralKind,
        LogicalOperator,
        MathOperator,
        ObjectProperty,
        PostfixExpression,
        PostfixExpressionKind,
        PrimaryExpression,
        UnaryExpression,
        UnaryExpressionKind,
    },
    program::Program,
    statement::{
        ForStatement,
        FunctionStatement,
        IfStatement,
        Parameter,
        ReturnStatement,
        Statement,
        StatementKind,
        VariableStatement,
        WhileStatement,
    },
};
