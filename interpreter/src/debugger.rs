// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use hixa::{FileRange, Statement};

use crate::{RuntimeError, Value};

#[derive(Debug, Clone, Copy)]
pub struct DebuggerFunction<'interpreter> {
    pub ty: DebuggerFunctionType,
    pub name: &'interpreter str,
    pub caller_location: FileRange,
    pub callee_location: Option<FileRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebuggerFunctionType {
    Builtin,
    Normal,
}

/// Observes the interpreter while it runs. Every method defaults to doing
/// nothing.
pub trait Debugger {
    fn on_statement(&mut self, statement: &Statement) { _ = statement }

    /// Called after the arguments are evaluated, before the body runs.
    fn enter_function(&mut self, function: DebuggerFunction<'_>, args: &[Value]) {
        _ = function;
        _ = args;
    }

    fn leave_function(&mut self, function: DebuggerFunction<'_>) {
        _ = function;
    }

    fn on_runtime_error(&mut self, error: &RuntimeError) {
        _ = error;
    }
}

impl Debugger for () {
}

impl<D> Debugger for &mut D
        where D: Debugger + ?Sized {
    fn on_statement(&mut self, statement: &Statement) {
        (**self).on_statement(statement)
    }

    fn enter_function(&mut self, function: DebuggerFunction<'_>, args: &[Value]) {
        (**self).enter_function(function, args)
    }

    fn leave_function(&mut self, function: DebuggerFunction<'_>) {
        (**self).leave_function(function)
    }

    fn on_runtime_error(&mut self, error: &RuntimeError) {
        (**self).on_runtime_error(error)
    }
}
