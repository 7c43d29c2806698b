// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{cell::RefCell, rc::Rc};

use hixa::*;
use log::{debug, trace};

use crate::{
    value::{resolve_index, set_property},
    Builtin, BuiltinFunction, Debugger, DebuggerFunction, DebuggerFunctionType, Environment, Function, RuntimeError,
    Value,
};

pub struct Interpreter<D>
        where D: Debugger {
    debugger: D,
    globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    call_depth: usize,
    max_call_depth: usize,
}

impl<D> Interpreter<D>
        where D: Debugger {
    pub fn new(debugger: D) -> Self {
        Self::with_builtins(debugger, Builtin::FUNCTIONS)
    }

    pub fn with_builtins(debugger: D, builtins: &'static [BuiltinFunction]) -> Self {
        let globals = Environment::new_global(builtins);

        Self {
            debugger,
            environment: Rc::clone(&globals),
            globals,
            call_depth: 0,
            max_call_depth: ConfigSectionInterpreter::DEFAULT_MAX_CALL_DEPTH,
        }
    }

    #[must_use]
    pub fn with_config(self, config: &ConfigSectionInterpreter) -> Self {
        Self {
            max_call_depth: config.max_call_depth,
            ..self
        }
    }

    /// Looks up a variable in the global frame.
    #[must_use]
    pub fn global(&self, name: &str) -> Option<Value> {
        self.globals.borrow().get(name)
    }

    pub fn interpret(&mut self, program: &Program) -> Result<(), RuntimeError> {
        self.evaluate_program(program).map(|_| ())
    }

    /// Runs every top-level statement and returns the value of the last
    /// expression statement, or `null` when there was none.
    pub fn evaluate_program(&mut self, program: &Program) -> Result<Value, RuntimeError> {
        debug!("Interpreting {} top-level statements", program.len());

        let result = self.execute_top_level(program);

        if let Err(error) = &result {
            debug!("Runtime error escaped to the top level: {error}");
            self.debugger.on_runtime_error(error);
        }

        result
    }

    fn execute_top_level(&mut self, program: &Program) -> Result<Value, RuntimeError> {
        let mut last_value = Value::Null;

        for statement in program {
            if let StatementKind::Expression(expression) = &statement.kind {
                self.debugger.on_statement(statement);
                last_value = self.execute_expression(expression)?;
                continue;
            }

            if let StatementResult::Return(value) = self.execute_statement(statement)? {
                trace!("Top-level return, skipping the remaining statements");
                return Ok(value.unwrap_or(Value::Null));
            }
        }

        Ok(last_value)
    }

    fn execute_statement(&mut self, statement: &Statement) -> Result<StatementResult, RuntimeError> {
        self.debugger.on_statement(statement);

        match &statement.kind {
            StatementKind::Block(statements) => {
                let environment = Environment::new_child(&self.environment);
                self.execute_block(statements, environment)
            }

            StatementKind::Expression(expression) => {
                self.execute_expression(expression)?;
                Ok(StatementResult::Continue)
            }

            StatementKind::For(statement) => {
                let environment = Environment::new_child(&self.environment);
                let previous = std::mem::replace(&mut self.environment, environment);

                let result = self.execute_for_statement(statement);

                self.environment = previous;
                result
            }

            StatementKind::Function(declaration) => {
                let function = Function {
                    declaration: Rc::clone(declaration),
                    closure: Rc::clone(&self.environment),
                };

                self.environment.borrow_mut().define(declaration.name.value().clone(), Value::Function(Rc::new(function)));
                Ok(StatementResult::Continue)
            }

            StatementKind::If(statement) => {
                self.execute_if_statement(statement)
            }

            StatementKind::Return(statement) => {
                let value = match &statement.expression {
                    Some(expression) => Some(self.execute_expression(expression)?),
                    None => None,
                };

                Ok(StatementResult::Return(value))
            }

            StatementKind::Variable(variable) => {
                let value = match &variable.expression {
                    Some(expression) => self.execute_expression(expression)?,
                    None => Value::Null,
                };

                self.environment.borrow_mut().define(variable.name.value().clone(), value);
                Ok(StatementResult::Continue)
            }

            StatementKind::While(statement) => {
                self.execute_while_statement(statement)
            }
        }
    }

    /// Runs the statements in the given frame. The previous frame is restored
    /// afterwards, also when a statement fails.
    fn execute_block(&mut self, statements: &[Statement], environment: Rc<RefCell<Environment>>) -> Result<StatementResult, RuntimeError> {
        let previous = std::mem::replace(&mut self.environment, environment);

        let result = self.execute_statements(statements);

        self.environment = previous;
        result
    }

    fn execute_statements(&mut self, statements: &[Statement]) -> Result<StatementResult, RuntimeError> {
        for statement in statements {
            if let StatementResult::Return(value) = self.execute_statement(statement)? {
                return Ok(StatementResult::Return(value));
            }
        }

        Ok(StatementResult::Continue)
    }

    fn execute_if_statement(&mut self, statement: &IfStatement) -> Result<StatementResult, RuntimeError> {
        if self.execute_expression(&statement.condition)?.is_truthy() {
            return self.execute_statement(&statement.then_branch);
        }

        match &statement.else_branch {
            Some(else_branch) => self.execute_statement(else_branch),
            None => Ok(StatementResult::Continue),
        }
    }

    fn execute_while_statement(&mut self, statement: &WhileStatement) -> Result<StatementResult, RuntimeError> {
        while self.execute_expression(&statement.condition)?.is_truthy() {
            if let StatementResult::Return(value) = self.execute_statement(&statement.body)? {
                return Ok(StatementResult::Return(value));
            }
        }

        Ok(StatementResult::Continue)
    }

    /// Expects to run in the frame created for the loop variables.
    fn execute_for_statement(&mut self, statement: &ForStatement) -> Result<StatementResult, RuntimeError> {
        if let Some(initializer) = &statement.initializer {
            if let StatementResult::Return(value) = self.execute_statement(initializer)? {
                return Ok(StatementResult::Return(value));
            }
        }

        loop {
            if let Some(condition) = &statement.condition {
                if !self.execute_expression(condition)?.is_truthy() {
                    break;
                }
            }

            if let StatementResult::Return(value) = self.execute_statement(&statement.body)? {
                return Ok(StatementResult::Return(value));
            }

            if let Some(increment) = &statement.increment {
                self.execute_expression(increment)?;
            }
        }

        Ok(StatementResult::Continue)
    }

    pub fn execute_expression(&mut self, expression: &Ranged<Expression>) -> Result<Value, RuntimeError> {
        match expression.value() {
            Expression::Assignment(expr) => self.execute_assignment(expr),
            Expression::BiExpression(expr) => self.execute_bi_expression(expr),
            Expression::Postfix(expr) => self.execute_postfix_expression(expr),
            Expression::Primary(expr) => self.execute_expression_primary(expr),
            Expression::Unary(expr) => self.execute_unary_expression(expr),
        }
    }

    fn execute_expression_primary(&mut self, expression: &PrimaryExpression) -> Result<Value, RuntimeError> {
        match expression {
            PrimaryExpression::Literal(literal) => Ok(Value::from(literal)),

            PrimaryExpression::Reference(reference) => {
                let value = self.environment.borrow().get(reference.value());
                value.ok_or_else(|| RuntimeError::undefined_variable(reference.value()))
            }

            PrimaryExpression::Array(elements) => {
                let mut values = Vec::with_capacity(elements.len());
                for element in elements {
                    values.push(self.execute_expression(element)?);
                }

                Ok(Value::new_array(values))
            }

            PrimaryExpression::Object(properties) => {
                let object = Rc::new(RefCell::new(Vec::with_capacity(properties.len())));
                for property in properties {
                    let value = self.execute_expression(&property.value)?;
                    set_property(&object, property.key.value(), value);
                }

                Ok(Value::Object(object))
            }

            PrimaryExpression::Parenthesized(expression) => self.execute_expression(expression),
        }
    }

    fn execute_assignment(&mut self, expression: &AssignmentExpression) -> Result<Value, RuntimeError> {
        match expression.target.value() {
            AssignmentTarget::Reference(name) => {
                let value = self.execute_expression(&expression.value)?;

                if self.environment.borrow_mut().assign(name, value.clone()) {
                    Ok(value)
                } else {
                    Err(RuntimeError::undefined_variable(name))
                }
            }

            AssignmentTarget::Member { object, member } => {
                let object = self.execute_expression(object)?;
                let value = self.execute_expression(&expression.value)?;

                let Value::Object(properties) = &object else {
                    return Err(RuntimeError::not_an_object(object.type_name(), member.value()));
                };

                set_property(properties, member.value(), value.clone());
                Ok(value)
            }

            AssignmentTarget::Subscript { array, index } => {
                let target = self.execute_expression(array)?;
                let index = self.execute_expression(index)?;
                let value = self.execute_expression(&expression.value)?;

                match (&target, &index) {
                    (Value::Array(values), Value::Integer(index)) => {
                        let mut values = values.borrow_mut();
                        let position = resolve_index(values.len(), *index)?;
                        values[position] = value.clone();
                    }

                    (Value::Array(..), _) => return Err(RuntimeError::invalid_index_type(index.type_name())),

                    (Value::Object(properties), Value::String(key)) => {
                        set_property(properties, key, value.clone());
                    }

                    (Value::Object(..), _) => return Err(RuntimeError::invalid_property_key(index.type_name())),

                    _ => return Err(RuntimeError::not_indexable(target.type_name())),
                }

                Ok(value)
            }
        }
    }

    fn execute_unary_expression(&mut self, expression: &UnaryExpression) -> Result<Value, RuntimeError> {
        let rhs = self.execute_expression(&expression.rhs)?;

        match expression.kind.value() {
            UnaryExpressionKind::Negate => match &rhs {
                Value::Integer(integer) => integer.checked_neg()
                    .map(Value::Integer)
                    .ok_or_else(|| RuntimeError::integer_overflow("-")),
                Value::Float(float) => Ok(Value::Float(-float)),
                _ => Err(RuntimeError::unary_type_mismatch("-", rhs.type_name())),
            },

            UnaryExpressionKind::Not => Ok(Value::Bool(!rhs.is_truthy())),
        }
    }

    /// Both operands are always evaluated, left to right, including for the
    /// logical operators.
    fn execute_bi_expression(&mut self, expression: &BiExpression) -> Result<Value, RuntimeError> {
        let lhs = self.execute_expression(&expression.lhs)?;
        let rhs = self.execute_expression(&expression.rhs)?;

        match *expression.operator.value() {
            BiOperator::Math(operator) => execute_math_operator(operator, &lhs, &rhs),

            BiOperator::Comparison(Comparison::Equality) => Ok(Value::Bool(lhs == rhs)),
            BiOperator::Comparison(Comparison::Inequality) => Ok(Value::Bool(lhs != rhs)),
            BiOperator::Comparison(comparison) => lhs.compare(&rhs, comparison)
                .map(Value::Bool)
                .ok_or_else(|| RuntimeError::binary_type_mismatch(comparison.as_str(), lhs.type_name(), rhs.type_name())),

            BiOperator::Logical(LogicalOperator::And) => Ok(Value::Bool(lhs.is_truthy() && rhs.is_truthy())),
            BiOperator::Logical(LogicalOperator::Or) => Ok(Value::Bool(lhs.is_truthy() || rhs.is_truthy())),
        }
    }

    fn execute_postfix_expression(&mut self, expression: &PostfixExpression) -> Result<Value, RuntimeError> {
        let lhs = self.execute_expression(&expression.lhs)?;

        match expression.kind.value() {
            PostfixExpressionKind::Call(call) => self.execute_function_call(lhs, call, expression.kind.range()),
            PostfixExpressionKind::Member(member) => execute_member_reference(&lhs, member),
            PostfixExpressionKind::Subscript(subscript) => {
                let index = self.execute_expression(subscript)?;
                execute_subscript(&lhs, &index)
            }
        }
    }

    fn execute_function_call(&mut self, callee: Value, call: &FunctionCallExpression, caller_location: FileRange) -> Result<Value, RuntimeError> {
        let mut arguments = Vec::with_capacity(call.arguments.len());
        for argument in &call.arguments {
            arguments.push(self.execute_expression(argument)?);
        }

        self.call_value(callee, arguments, caller_location)
    }

    /// Calls a user-defined function or a built-in with already evaluated
    /// arguments.
    pub fn call_value(&mut self, callee: Value, arguments: Vec<Value>, caller_location: FileRange) -> Result<Value, RuntimeError> {
        match callee {
            Value::Builtin(function) => self.execute_builtin(function, arguments, caller_location),
            Value::Function(function) => self.execute_function(&function, arguments, caller_location),
            other => Err(RuntimeError::not_callable(other.type_name())),
        }
    }

    fn execute_builtin(&mut self, function: &'static BuiltinFunction, arguments: Vec<Value>, caller_location: FileRange) -> Result<Value, RuntimeError> {
        let debugger_function = DebuggerFunction {
            ty: DebuggerFunctionType::Builtin,
            name: function.name,
            caller_location,
            callee_location: None,
        };

        self.debugger.enter_function(debugger_function, &arguments);
        let result = (function.function)(arguments);
        self.debugger.leave_function(debugger_function);

        result
    }

    fn execute_function(&mut self, function: &Rc<Function>, arguments: Vec<Value>, caller_location: FileRange) -> Result<Value, RuntimeError> {
        if arguments.len() != function.arity() {
            return Err(RuntimeError::arity_mismatch(function.name(), function.arity(), arguments.len()));
        }

        if self.call_depth >= self.max_call_depth {
            return Err(RuntimeError::call_depth_exceeded(self.max_call_depth));
        }

        let debugger_function = DebuggerFunction {
            ty: DebuggerFunctionType::Normal,
            name: function.name(),
            caller_location,
            callee_location: Some(function.declaration.name.range()),
        };

        trace!("Calling `{}` at depth {}", function.name(), self.call_depth + 1);
        self.debugger.enter_function(debugger_function, &arguments);

        // The frame is parented to the frame the function was declared in,
        // not to the frame of the caller.
        let environment = Environment::new_child(&function.closure);
        for (parameter, argument) in function.declaration.parameters.iter().zip(arguments) {
            environment.borrow_mut().define(parameter.name.value().clone(), argument);
        }
        trace!("Parameters of `{}`: {:?}", function.name(), environment.borrow());

        self.call_depth += 1;
        let result = self.execute_block(&function.declaration.body, environment);
        self.call_depth -= 1;

        self.debugger.leave_function(debugger_function);

        match result? {
            StatementResult::Continue => Ok(Value::Null),
            StatementResult::Return(value) => Ok(value.unwrap_or(Value::Null)),
        }
    }
}

#[must_use]
#[derive(Debug)]
enum StatementResult {
    Continue,
    Return(Option<Value>),
}

fn execute_member_reference(lhs: &Value, member: &Ranged<String>) -> Result<Value, RuntimeError> {
    if !matches!(lhs, Value::Object(..)) {
        return Err(RuntimeError::not_an_object(lhs.type_name(), member.value()));
    }

    lhs.get_property(member.value())
        .ok_or_else(|| RuntimeError::unknown_property(member.value()))
}

fn execute_subscript(lhs: &Value, index: &Value) -> Result<Value, RuntimeError> {
    match (lhs, index) {
        (Value::Array(values), Value::Integer(index)) => {
            let values = values.borrow();
            let position = resolve_index(values.len(), *index)?;
            Ok(values[position].clone())
        }

        (Value::String(string), Value::Integer(index)) => {
            let length = string.chars().count();
            let position = resolve_index(length, *index)?;
            Ok(string.chars().nth(position).map(String::from).map(Value::String).unwrap_or(Value::Null))
        }

        (Value::Array(..) | Value::String(..), _) => Err(RuntimeError::invalid_index_type(index.type_name())),

        (Value::Object(..), Value::String(key)) => {
            lhs.get_property(key).ok_or_else(|| RuntimeError::unknown_property(key))
        }

        (Value::Object(..), _) => Err(RuntimeError::invalid_property_key(index.type_name())),

        _ => Err(RuntimeError::not_indexable(lhs.type_name())),
    }
}

fn execute_math_operator(operator: MathOperator, lhs: &Value, rhs: &Value) -> Result<Value, RuntimeError> {
    let type_mismatch = || RuntimeError::binary_type_mismatch(operator.as_str(), lhs.type_name(), rhs.type_name());

    match operator {
        MathOperator::Add => match (lhs, rhs) {
            (Value::String(lhs), Value::String(rhs)) => Ok(Value::String(format!("{lhs}{rhs}"))),
            _ => execute_arithmetic(operator, lhs, rhs, i64::checked_add, |a, b| a + b),
        },

        MathOperator::Subtract => execute_arithmetic(operator, lhs, rhs, i64::checked_sub, |a, b| a - b),
        MathOperator::Multiply => execute_arithmetic(operator, lhs, rhs, i64::checked_mul, |a, b| a * b),

        MathOperator::Divide => {
            let (Some(dividend), Some(divisor)) = (lhs.as_f64(), rhs.as_f64()) else {
                return Err(type_mismatch());
            };

            if divisor == 0.0 {
                return Err(RuntimeError::division_by_zero());
            }

            Ok(Value::Float(dividend / divisor))
        }

        MathOperator::Modulo => {
            let (Some(_), Some(divisor)) = (lhs.as_f64(), rhs.as_f64()) else {
                return Err(type_mismatch());
            };

            if divisor == 0.0 {
                return Err(RuntimeError::modulo_by_zero());
            }

            execute_arithmetic(operator, lhs, rhs, modulo_integer, modulo_float)
        }
    }
}

fn execute_arithmetic(
    operator: MathOperator,
    lhs: &Value,
    rhs: &Value,
    integer: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
) -> Result<Value, RuntimeError> {
    if let (Value::Integer(lhs), Value::Integer(rhs)) = (lhs, rhs) {
        return integer(*lhs, *rhs)
            .map(Value::Integer)
            .ok_or_else(|| RuntimeError::integer_overflow(operator.as_str()));
    }

    match (lhs.as_f64(), rhs.as_f64()) {
        (Some(a), Some(b)) => Ok(Value::Float(float(a, b))),
        _ => Err(RuntimeError::binary_type_mismatch(operator.as_str(), lhs.type_name(), rhs.type_name())),
    }
}

/// The result takes the sign of the divisor.
fn modulo_integer(dividend: i64, divisor: i64) -> Option<i64> {
    let remainder = dividend.checked_rem(divisor)?;

    if remainder != 0 && (remainder < 0) != (divisor < 0) {
        Some(remainder + divisor)
    } else {
        Some(remainder)
    }
}

fn modulo_float(dividend: f64, divisor: f64) -> f64 {
    let remainder = dividend % divisor;

    if remainder != 0.0 && (remainder < 0.0) != (divisor < 0.0) {
        remainder + divisor
    } else {
        remainder
    }
}
