// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod builtin;
mod debugger;
mod environment;
mod error;
mod interpreter;
mod value;

pub use self::{
    builtin::{Builtin, BuiltinFunction, BuiltinFunctionSignature},
    debugger::{Debugger, DebuggerFunction, DebuggerFunctionType},
    environment::Environment,
    error::{ErrorPrinter, RuntimeError},
    interpreter::Interpreter,
    value::{ArrayValue, Function, ObjectValue, Value},
};
