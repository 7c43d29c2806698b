// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::rc::Rc;

use log::{debug, trace};
use strum::AsRefStr;

use crate::{
    AssignmentExpression, AssignmentTarget, BiExpression, BiOperator, Comparison, Expression, FileLocation,
    FileRange, ForStatement, FunctionCallExpression, FunctionStatement, IfStatement, Keyword, Literal,
    LogicalOperator, MathOperator, ObjectProperty, Parameter, PostfixExpression, PostfixExpressionKind,
    PrimaryExpression, Program, Punctuator, Ranged, ReturnStatement, Statement, StatementKind, Token, TokenKind,
    UnaryExpression, UnaryExpressionKind, VariableStatement, WhileStatement,
};

pub type ParseResult<T> = Result<T, ParseDiagnostic>;

/// Parses a whole token sequence, returning every recovered statement
/// together with the diagnostics found along the way.
pub fn parse(tokens: &[Token]) -> (Program, Vec<ParseDiagnostic>) {
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program();
    (program, parser.into_diagnostics())
}

#[derive(Clone)]
pub struct Parser<'tokens> {
    tokens: &'tokens [Token],
    pub cursor: usize,
    diagnostics: Vec<ParseDiagnostic>,
    end_of_file_token: Token,
    block_depth: usize,
}

impl<'tokens> Parser<'tokens> {
    pub fn new(tokens: &'tokens [Token]) -> Self {
        let end = tokens.last().map(|x| x.end).unwrap_or_default();

        Self {
            diagnostics: Vec::new(),
            tokens,
            cursor: 0,
            end_of_file_token: Token {
                kind: TokenKind::EndOfFile,
                lexeme: String::new(),
                begin: end,
                end,
            },
            block_depth: 0,
        }
    }

    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.is_at_end() {
            if let Some(statement) = self.parse_declaration_recovering() {
                program.push(statement);
            }
        }

        debug!("Parsed {} statements with {} diagnostics", program.len(), self.diagnostics.len());
        program
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Vec<ParseDiagnostic> {
        self.diagnostics
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.peek_token().kind == TokenKind::EndOfFile
    }

    /// Parses one statement. A failing statement is recorded as a diagnostic
    /// and skipped, contributing nothing.
    fn parse_declaration_recovering(&mut self) -> Option<Statement> {
        let start = self.cursor;

        match self.parse_statement() {
            Ok(statement) => Some(statement),
            Err(diagnostic) => {
                trace!("Recovering from {}: {diagnostic}", diagnostic.name());
                self.emit_diagnostic(diagnostic);
                self.synchronize();

                if self.cursor == start && !self.is_at_end() {
                    _ = self.consume_token();
                }

                None
            }
        }
    }

    /// Skips tokens until just after a `;`, or until the start of something
    /// that can begin a new statement.
    fn synchronize(&mut self) {
        while !self.is_at_end() {
            let token = self.peek_token();

            if let TokenKind::Keyword(keyword) = token.kind {
                if keyword.starts_declaration() {
                    return;
                }
            }

            if self.block_depth != 0 && token.is_punctuator(Punctuator::RightCurlyBracket) {
                return;
            }

            if self.consume_token().is_punctuator(Punctuator::Semicolon) {
                return;
            }
        }
    }

    fn emit_diagnostic(&mut self, diagnostic: ParseDiagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let start = self.peek_token().begin;

        let kind = match self.peek_token().kind {
            TokenKind::Keyword(Keyword::Function) => {
                _ = self.consume_token();
                StatementKind::Function(Rc::new(self.parse_function(start)?))
            }

            TokenKind::Keyword(Keyword::Let) => {
                _ = self.consume_token();
                let statement = self.parse_variable_statement()?;
                self.expect_statement_terminator()?;
                StatementKind::Variable(statement)
            }

            TokenKind::Keyword(Keyword::If) => {
                _ = self.consume_token();
                StatementKind::If(self.parse_if_statement()?)
            }

            TokenKind::Keyword(Keyword::While) => {
                _ = self.consume_token();
                StatementKind::While(self.parse_while_statement()?)
            }

            TokenKind::Keyword(Keyword::For) => {
                _ = self.consume_token();
                StatementKind::For(self.parse_for_statement()?)
            }

            TokenKind::Keyword(Keyword::Return) => {
                StatementKind::Return(self.parse_return_statement()?)
            }

            TokenKind::Punctuator(Punctuator::LeftCurlyBracket) => {
                _ = self.consume_token();
                StatementKind::Block(self.parse_block_body("block")?)
            }

            TokenKind::Keyword(keyword) if keyword.is_reserved() => {
                return Err(ParseDiagnostic::ReservedKeyword { token: self.peek_token().clone(), keyword });
            }

            _ => {
                let expression = self.parse_expression()?;
                self.expect_statement_terminator()?;
                StatementKind::Expression(expression)
            }
        };

        Ok(Statement {
            range: FileRange::new(start, self.previous_end()),
            kind,
        })
    }

    /// Parses the remainder of a block, right after its `{`.
    fn parse_block_body(&mut self, context: &'static str) -> ParseResult<Vec<Statement>> {
        self.block_depth += 1;
        let mut statements = Vec::new();

        let result = loop {
            let token = self.peek_token();

            if token.is_punctuator(Punctuator::RightCurlyBracket) {
                _ = self.consume_token();
                break Ok(statements);
            }

            if token.kind == TokenKind::EndOfFile {
                break Err(ParseDiagnostic::ExpectedRightCurlyBracket { token: token.clone(), context });
            }

            if let Some(statement) = self.parse_declaration_recovering() {
                statements.push(statement);
            }
        };

        self.block_depth -= 1;
        result
    }

    fn parse_function(&mut self, start: FileLocation) -> ParseResult<FunctionStatement> {
        let name = self.consume_identifier("function name")?;

        self.expect_left_paren("function name")?;
        let mut parameters = Vec::new();

        if !self.peek_token().is_punctuator(Punctuator::RightParenthesis) {
            loop {
                parameters.push(self.parse_parameter()?);

                if !self.consume_punctuator_if(Punctuator::Comma) {
                    break;
                }
            }
        }

        self.expect_right_paren("parameter list")?;

        let return_type = if self.consume_punctuator_if(Punctuator::Arrow) {
            Some(self.consume_identifier("return type")?)
        } else {
            None
        };

        self.expect_left_curly_bracket("function signature")?;
        let body = self.parse_block_body("function body")?;

        Ok(FunctionStatement {
            range: FileRange::new(start, self.previous_end()),
            name,
            parameters,
            return_type,
            body,
        })
    }

    fn parse_parameter(&mut self) -> ParseResult<Parameter> {
        let name = self.consume_identifier("parameter name")?;
        let type_annotation = self.parse_optional_type_annotation("parameter type")?;

        Ok(Parameter {
            name,
            type_annotation,
        })
    }

    fn parse_optional_type_annotation(&mut self, context: &'static str) -> ParseResult<Option<Ranged<String>>> {
        if self.consume_punctuator_if(Punctuator::Colon) {
            Ok(Some(self.consume_identifier(context)?))
        } else {
            Ok(None)
        }
    }

    /// Parses everything after the `dhora` keyword, except for the terminator.
    fn parse_variable_statement(&mut self) -> ParseResult<VariableStatement> {
        let name = self.consume_identifier("variable name")?;
        let type_annotation = self.parse_optional_type_annotation("variable type")?;

        let expression = if self.consume_punctuator_if(Punctuator::Assignment) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        Ok(VariableStatement {
            name,
            type_annotation,
            expression,
        })
    }

    fn parse_if_statement(&mut self) -> ParseResult<IfStatement> {
        let condition = self.parse_expression()?;
        let then_branch = Box::new(self.parse_statement()?);

        let else_branch = match self.peek_token().kind {
            TokenKind::Keyword(Keyword::Else) => {
                _ = self.consume_token();
                Some(Box::new(self.parse_statement()?))
            }

            TokenKind::Keyword(Keyword::ElseIf) => {
                let start = self.consume_token().begin;
                let kind = StatementKind::If(self.parse_if_statement()?);
                Some(Box::new(Statement {
                    range: FileRange::new(start, self.previous_end()),
                    kind,
                }))
            }

            _ => None,
        };

        Ok(IfStatement {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn parse_while_statement(&mut self) -> ParseResult<WhileStatement> {
        let condition = self.parse_expression()?;
        let body = Box::new(self.parse_statement()?);

        Ok(WhileStatement {
            condition,
            body,
        })
    }

    fn parse_for_statement(&mut self) -> ParseResult<ForStatement> {
        self.expect_left_paren("`karone`")?;

        let initializer = if self.consume_punctuator_if(Punctuator::Semicolon) {
            None
        } else {
            let start = self.peek_token().begin;

            let kind = if self.peek_token().is_keyword(Keyword::Let) {
                _ = self.consume_token();
                StatementKind::Variable(self.parse_variable_statement()?)
            } else {
                StatementKind::Expression(self.parse_expression()?)
            };

            let range = FileRange::new(start, self.previous_end());
            self.expect_semicolon("initializer of `karone`")?;
            Some(Box::new(Statement { range, kind }))
        };

        let condition = if self.peek_token().is_punctuator(Punctuator::Semicolon) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect_semicolon("condition of `karone`")?;

        let increment = if self.peek_token().is_punctuator(Punctuator::RightParenthesis) {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect_right_paren("clauses of `karone`")?;

        let body = Box::new(self.parse_statement()?);

        Ok(ForStatement {
            initializer,
            condition,
            increment,
            body,
        })
    }

    fn parse_return_statement(&mut self) -> ParseResult<ReturnStatement> {
        let keyword_range = self.consume_token().range();

        let expression = if self.is_at_statement_terminator() {
            None
        } else {
            Some(self.parse_expression()?)
        };

        self.expect_statement_terminator()?;

        Ok(ReturnStatement {
            keyword_range,
            expression,
        })
    }

    pub fn parse_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_assignment_expression()
    }

    fn parse_assignment_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        let expression = self.parse_logical_or_expression()?;

        if !self.peek_token().is_punctuator(Punctuator::Assignment) {
            return Ok(expression);
        }

        let equals = self.consume_token().clone();
        let value = self.parse_assignment_expression()?;

        let target_range = expression.range();
        let range = FileRange::new(target_range.start(), value.range().end());

        let target = match expression.into_value() {
            Expression::Primary(PrimaryExpression::Reference(name)) => {
                AssignmentTarget::Reference(name.into_value())
            }

            Expression::Postfix(PostfixExpression { lhs, kind }) => match kind.into_value() {
                PostfixExpressionKind::Member(member) => AssignmentTarget::Member { object: lhs, member },
                PostfixExpressionKind::Subscript(index) => AssignmentTarget::Subscript { array: lhs, index },
                PostfixExpressionKind::Call(..) => return Err(ParseDiagnostic::InvalidAssignmentTarget { token: equals }),
            },

            _ => return Err(ParseDiagnostic::InvalidAssignmentTarget { token: equals }),
        };

        Ok(Ranged::new(range, Expression::Assignment(AssignmentExpression {
            target: Ranged::new(target_range, target),
            value: Box::new(value),
        })))
    }

    fn parse_logical_or_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_logical_and_expression, &[
            (TokenKind::Punctuator(Punctuator::LogicalOr), LogicalOperator::Or.into()),
            (TokenKind::Keyword(Keyword::Or), LogicalOperator::Or.into()),
        ])
    }

    fn parse_logical_and_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_equality_expression, &[
            (TokenKind::Punctuator(Punctuator::LogicalAnd), LogicalOperator::And.into()),
            (TokenKind::Keyword(Keyword::And), LogicalOperator::And.into()),
        ])
    }

    fn parse_equality_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_relational_expression, &[
            (TokenKind::Punctuator(Punctuator::Equals), Comparison::Equality.into()),
            (TokenKind::Punctuator(Punctuator::NotEquals), Comparison::Inequality.into()),
        ])
    }

    fn parse_relational_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_additive_expression, &[
            (TokenKind::Punctuator(Punctuator::LessThan), Comparison::LessThan.into()),
            (TokenKind::Punctuator(Punctuator::LessThanOrEqual), Comparison::LessThanOrEqual.into()),
            (TokenKind::Punctuator(Punctuator::GreaterThan), Comparison::GreaterThan.into()),
            (TokenKind::Punctuator(Punctuator::GreaterThanOrEqual), Comparison::GreaterThanOrEqual.into()),
        ])
    }

    fn parse_additive_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_multiplicative_expression, &[
            (TokenKind::Punctuator(Punctuator::PlusSign), MathOperator::Add.into()),
            (TokenKind::Punctuator(Punctuator::HyphenMinus), MathOperator::Subtract.into()),
        ])
    }

    fn parse_multiplicative_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_bi_expression(Self::parse_unary_expression, &[
            (TokenKind::Punctuator(Punctuator::Asterisk), MathOperator::Multiply.into()),
            (TokenKind::Punctuator(Punctuator::PercentageSign), MathOperator::Modulo.into()),
            (TokenKind::Punctuator(Punctuator::Solidus), MathOperator::Divide.into()),
        ])
    }

    fn parse_bi_expression<F>(&mut self, mut operand: F, operators: &[(TokenKind, BiOperator)]) -> ParseResult<Ranged<Expression>>
            where F: FnMut(&mut Self) -> ParseResult<Ranged<Expression>> {
        let mut expr = operand(self)?;

        loop {
            let next = self.peek_token();

            let Some((_, operator)) = operators.iter().find(|(kind, _)| next.kind == *kind).copied() else {
                break;
            };

            let operator_range = self.consume_token().range();
            let operator = Ranged::new(operator_range, operator);

            let lhs = expr;
            let rhs = operand(self)?;
            let range = FileRange::new(lhs.range().start(), rhs.range().end());

            let expression = Expression::BiExpression(BiExpression {
                operator,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            });
            expr = Ranged::new(range, expression);
        }

        Ok(expr)
    }

    fn parse_unary_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        let kind = match self.peek_token().kind {
            TokenKind::Punctuator(Punctuator::HyphenMinus) => UnaryExpressionKind::Negate,
            TokenKind::Punctuator(Punctuator::Not) => UnaryExpressionKind::Not,
            TokenKind::Keyword(Keyword::Not) => UnaryExpressionKind::Not,
            _ => return self.parse_postfix_expression(),
        };

        let operator_range = self.consume_token().range();
        let rhs = self.parse_unary_expression()?;
        let range = FileRange::new(operator_range.start(), rhs.range().end());

        Ok(Ranged::new(range, Expression::Unary(UnaryExpression {
            kind: Ranged::new(operator_range, kind),
            rhs: Box::new(rhs),
        })))
    }

    fn parse_postfix_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        let mut expression = self.parse_primary_expression()?.map(Expression::Primary);
        let start = expression.range().start();

        loop {
            let token = self.peek_token();
            let token_kind = token.kind;

            // A bracket on a new line opens a new statement rather than
            // continuing the previous one.
            let on_new_line = token.begin.line() > self.previous_end().line();

            let kind = match token_kind {
                TokenKind::Punctuator(Punctuator::LeftParenthesis) if !on_new_line => {
                    let begin = self.consume_token().begin;
                    let call = self.parse_function_call_expression()?;
                    Ranged::new(FileRange::new(begin, self.previous_end()), PostfixExpressionKind::Call(call))
                }

                TokenKind::Punctuator(Punctuator::LeftSquareBracket) if !on_new_line => {
                    let begin = self.consume_token().begin;
                    let index = self.parse_expression()?;
                    self.expect_right_square_bracket("index")?;
                    Ranged::new(FileRange::new(begin, self.previous_end()), PostfixExpressionKind::Subscript(Box::new(index)))
                }

                TokenKind::Punctuator(Punctuator::Period) => {
                    let begin = self.consume_token().begin;
                    let member = self.consume_identifier("member name after `.`")?;
                    Ranged::new(FileRange::new(begin, self.previous_end()), PostfixExpressionKind::Member(member))
                }

                _ => break,
            };

            let range = FileRange::new(start, self.previous_end());
            expression = Ranged::new(range, Expression::Postfix(PostfixExpression {
                lhs: Box::new(expression),
                kind,
            }));
        }

        Ok(expression)
    }

    /// Parses the arguments of a call, right after its `(`.
    fn parse_function_call_expression(&mut self) -> ParseResult<FunctionCallExpression> {
        let mut arguments = Vec::new();

        if !self.consume_punctuator_if(Punctuator::RightParenthesis) {
            loop {
                arguments.push(self.parse_expression()?);

                if !self.consume_punctuator_if(Punctuator::Comma) {
                    break;
                }
            }

            self.expect_right_paren("arguments of call")?;
        }

        Ok(FunctionCallExpression {
            arguments,
        })
    }

    fn parse_primary_expression(&mut self) -> ParseResult<Ranged<PrimaryExpression>> {
        let token = self.peek_token().clone();

        let expression = match token.kind {
            TokenKind::Integer => {
                let integer = token.lexeme.parse()
                    .map_err(|_| ParseDiagnostic::InvalidNumber { token: token.clone() })?;
                _ = self.consume_token();
                PrimaryExpression::Literal(Literal::Integer(integer))
            }

            TokenKind::Float => {
                let float = token.lexeme.parse()
                    .map_err(|_| ParseDiagnostic::InvalidNumber { token: token.clone() })?;
                _ = self.consume_token();
                PrimaryExpression::Literal(Literal::Float(float))
            }

            TokenKind::StringLiteral => {
                _ = self.consume_token();
                PrimaryExpression::Literal(Literal::String(token.lexeme))
            }

            TokenKind::Keyword(Keyword::True) => {
                _ = self.consume_token();
                PrimaryExpression::Literal(Literal::Boolean(true))
            }

            TokenKind::Keyword(Keyword::False) => {
                _ = self.consume_token();
                PrimaryExpression::Literal(Literal::Boolean(false))
            }

            TokenKind::Keyword(Keyword::Null) => {
                _ = self.consume_token();
                PrimaryExpression::Literal(Literal::Null)
            }

            TokenKind::Identifier => {
                _ = self.consume_token();
                PrimaryExpression::Reference(Ranged::new(token.range(), token.lexeme))
            }

            TokenKind::Punctuator(Punctuator::LeftParenthesis) => {
                _ = self.consume_token();
                let expression = self.parse_expression()?;
                self.expect_right_paren("parenthesized expression")?;
                PrimaryExpression::Parenthesized(Box::new(expression))
            }

            TokenKind::Punctuator(Punctuator::LeftSquareBracket) => {
                _ = self.consume_token();
                PrimaryExpression::Array(self.parse_array_elements()?)
            }

            TokenKind::Punctuator(Punctuator::LeftCurlyBracket) => {
                _ = self.consume_token();
                PrimaryExpression::Object(self.parse_object_properties()?)
            }

            _ => return Err(ParseDiagnostic::ExpectedExpression { token }),
        };

        Ok(Ranged::new(FileRange::new(token.begin, self.previous_end()), expression))
    }

    fn parse_array_elements(&mut self) -> ParseResult<Vec<Ranged<Expression>>> {
        let mut elements = Vec::new();

        while !self.consume_punctuator_if(Punctuator::RightSquareBracket) {
            elements.push(self.parse_expression()?);

            if !self.consume_punctuator_if(Punctuator::Comma) {
                self.expect_right_square_bracket("array elements")?;
                break;
            }
        }

        Ok(elements)
    }

    fn parse_object_properties(&mut self) -> ParseResult<Vec<ObjectProperty>> {
        let mut properties = Vec::new();

        while !self.consume_punctuator_if(Punctuator::RightCurlyBracket) {
            let key = self.consume_identifier("property name")?;
            self.expect_colon("property name")?;
            let value = self.parse_expression()?;

            properties.push(ObjectProperty { key, value });

            if !self.consume_punctuator_if(Punctuator::Comma) {
                self.expect_right_curly_bracket("object properties")?;
                break;
            }
        }

        Ok(properties)
    }

    fn peek_token(&self) -> &Token {
        self.tokens.get(self.cursor).unwrap_or(&self.end_of_file_token)
    }

    /// Never moves past the end of file token.
    fn consume_token(&mut self) -> &Token {
        let cursor = self.cursor;

        if cursor < self.tokens.len() && self.tokens[cursor].kind != TokenKind::EndOfFile {
            self.cursor += 1;
        }

        self.tokens.get(cursor).unwrap_or(&self.end_of_file_token)
    }

    fn consume_punctuator_if(&mut self, punctuator: Punctuator) -> bool {
        if self.peek_token().is_punctuator(punctuator) {
            _ = self.consume_token();
            true
        } else {
            false
        }
    }

    fn consume_identifier(&mut self, context: &'static str) -> ParseResult<Ranged<String>> {
        let token = self.peek_token();

        if token.kind != TokenKind::Identifier {
            return Err(ParseDiagnostic::ExpectedIdentifier { token: token.clone(), context });
        }

        let token = self.consume_token();
        Ok(Ranged::new(token.range(), token.lexeme.clone()))
    }

    fn expect_punctuator(&mut self, punctuator: Punctuator, error: impl FnOnce(Token) -> ParseDiagnostic) -> ParseResult<()> {
        if self.consume_punctuator_if(punctuator) {
            Ok(())
        } else {
            Err(error(self.peek_token().clone()))
        }
    }

    fn expect_left_paren(&mut self, context: &'static str) -> ParseResult<()> {
        self.expect_punctuator(Punctuator::LeftParenthesis, |token| ParseDiagnostic::ExpectedLeftParen { token, context })
    }

    fn expect_right_paren(&mut self, context: &'static str) -> ParseResult<()> {
        self.expect_punctuator(Punctuator::RightParenthesis, |token| ParseDiagnostic::ExpectedRightParen { token, context })
    }

    fn expect_left_curly_bracket(&mut self, context: &'static str) -> ParseResult<()> {
        self.expect_punctuator(Punctuator::LeftCurlyBracket, |token| ParseDiagnostic::ExpectedLeftCurlyBracket { token, context })
    }

    fn expect_right_curly_bracket(&mut self, context: &'static str) -> ParseResult<()> {
        self.expect_punctuator(Punctuator::RightCurlyBracket, |token| ParseDiagnostic::ExpectedRightCurlyBracket { token, context })
    }

    fn expect_right_square_bracket(&mut self, context: &'static str) -> ParseResult<()> {
        self.expect_punctuator(Punctuator::RightSquareBracket, |token| ParseDiagnostic::ExpectedRightSquareBracket { token, context })
    }

    fn expect_colon(&mut self, context: &'static str) -> ParseResult<()> {
        self.expect_punctuator(Punctuator::Colon, |token| ParseDiagnostic::ExpectedColon { token, context })
    }

    fn expect_semicolon(&mut self, context: &'static str) -> ParseResult<()> {
        self.expect_punctuator(Punctuator::Semicolon, |token| ParseDiagnostic::ExpectedSemicolon { token, context })
    }

    /// A statement ends at a `;`, the end of the file or a line break. It also
    /// ends right before a `}` or an else keyword. Only the `;` is consumed.
    fn is_at_statement_terminator(&self) -> bool {
        let token = self.peek_token();

        match token.kind {
            TokenKind::Punctuator(Punctuator::Semicolon) => true,
            TokenKind::Punctuator(Punctuator::RightCurlyBracket) => true,
            TokenKind::Keyword(Keyword::Else | Keyword::ElseIf) => true,
            TokenKind::EndOfFile => true,
            _ => token.begin.line() > self.previous_end().line(),
        }
    }

    fn expect_statement_terminator(&mut self) -> ParseResult<()> {
        if !self.is_at_statement_terminator() {
            return Err(ParseDiagnostic::ExpectedStatementTerminator { token: self.peek_token().clone() });
        }

        _ = self.consume_punctuator_if(Punctuator::Semicolon);
        Ok(())
    }

    fn previous_end(&self) -> FileLocation {
        match self.cursor.checked_sub(1).and_then(|idx| self.tokens.get(idx)) {
            Some(token) => token.end,
            None => FileLocation::START,
        }
    }
}

#[derive(Clone, Debug, thiserror::Error, AsRefStr)]
pub enum ParseDiagnostic {
    #[error("Expected an expression, but got: {token}")]
    ExpectedExpression { token: Token },

    #[error("Expected {context}, but got: {token}")]
    ExpectedIdentifier { token: Token, context: &'static str },

    #[error("Expected `(` after {context}, but got: {token}")]
    ExpectedLeftParen { token: Token, context: &'static str },

    #[error("Expected `)` after {context}, but got: {token}")]
    ExpectedRightParen { token: Token, context: &'static str },

    #[error("Expected `{{` after {context}, but got: {token}")]
    ExpectedLeftCurlyBracket { token: Token, context: &'static str },

    #[error("Expected `}}` after {context}, but got: {token}")]
    ExpectedRightCurlyBracket { token: Token, context: &'static str },

    #[error("Expected `]` after {context}, but got: {token}")]
    ExpectedRightSquareBracket { token: Token, context: &'static str },

    #[error("Expected `:` after {context}, but got: {token}")]
    ExpectedColon { token: Token, context: &'static str },

    #[error("Expected `;` after {context}, but got: {token}")]
    ExpectedSemicolon { token: Token, context: &'static str },

    #[error("Expected `;` or a line break after statement, but got: {token}")]
    ExpectedStatementTerminator { token: Token },

    #[error("Invalid assignment target, only variables, members and indices can be assigned to")]
    InvalidAssignmentTarget { token: Token },

    #[error("Invalid number: {token}")]
    InvalidNumber { token: Token },

    #[error("`{keyword}` is a reserved keyword and cannot be used here")]
    ReservedKeyword { token: Token, keyword: Keyword },
}

impl ParseDiagnostic {
    pub fn token(&self) -> &Token {
        match self {
            Self::ExpectedExpression { token } => token,
            Self::ExpectedIdentifier { token, .. } => token,
            Self::ExpectedLeftParen { token, .. } => token,
            Self::ExpectedRightParen { token, .. } => token,
            Self::ExpectedLeftCurlyBracket { token, .. } => token,
            Self::ExpectedRightCurlyBracket { token, .. } => token,
            Self::ExpectedRightSquareBracket { token, .. } => token,
            Self::ExpectedColon { token, .. } => token,
            Self::ExpectedSemicolon { token, .. } => token,
            Self::ExpectedStatementTerminator { token } => token,
            Self::InvalidAssignmentTarget { token } => token,
            Self::InvalidNumber { token } => token,
            Self::ReservedKeyword { token, .. } => token,
        }
    }

    pub fn range(&self) -> FileRange {
        self.token().range()
    }

    pub fn location(&self) -> FileLocation {
        self.token().begin
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
