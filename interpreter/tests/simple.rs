// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use hixa_interpreter::{Debugger, DebuggerFunction, DebuggerFunctionType, Interpreter, RuntimeError, Value};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct RecordingDebugger {
    events: Vec<String>,
    statements: usize,
    errors: Vec<String>,
}

impl Debugger for RecordingDebugger {
    fn on_statement(&mut self, _: &hixa::Statement) {
        self.statements += 1;
    }

    fn enter_function(&mut self, function: DebuggerFunction<'_>, args: &[Value]) {
        let kind = match function.ty {
            DebuggerFunctionType::Builtin => "builtin",
            DebuggerFunctionType::Normal => "fn",
        };

        let args: Vec<String> = args.iter().map(|x| x.to_string()).collect();
        self.events.push(format!("enter {kind} {}({})", function.name, args.join(", ")));
    }

    fn leave_function(&mut self, function: DebuggerFunction<'_>) {
        self.events.push(format!("leave {}", function.name));
    }

    fn on_runtime_error(&mut self, error: &RuntimeError) {
        self.errors.push(error.to_string());
    }
}

fn run(source: &str) -> (RecordingDebugger, Result<(), RuntimeError>) {
    let analysis = hixa::analyze(source);
    assert!(!analysis.has_errors(), "{:#?}", analysis.diagnostics);

    let mut debugger = RecordingDebugger::default();
    let result = Interpreter::new(&mut debugger).interpret(&analysis.program);
    (debugger, result)
}

#[test]
fn calls_are_reported_with_evaluated_arguments() {
    let (debugger, result) = run("
        kam square(x) {
            ghurai_diya x * x
        }

        len(square(3))
    ");

    assert!(result.is_err(), "len(9) should fail, an int has no length");
    assert_eq!(debugger.events, vec![
        "enter fn square(3)".to_string(),
        "leave square".to_string(),
        "enter builtin len(9)".to_string(),
        "leave len".to_string(),
    ]);
    assert_eq!(debugger.errors, vec!["Invalid argument for `len`: int has no length".to_string()]);
}

#[test]
fn builtins_report_their_primary_name() {
    let (debugger, result) = run("likha(1)\nprint_kora(2)");

    result.unwrap();
    assert_eq!(debugger.events, vec![
        "enter builtin print(1)".to_string(),
        "leave print".to_string(),
        "enter builtin print(2)".to_string(),
        "leave print".to_string(),
    ]);
    assert!(debugger.errors.is_empty());
}

#[test]
fn every_executed_statement_is_reported() {
    let (debugger, result) = run("
        dhora total = 0
        karone (dhora i = 0; i < 3; i = i + 1) {
            total = total + i
        }
    ");

    result.unwrap();

    // The `dhora`, the loop, its initializer, and three iterations of the
    // block with its single statement.
    assert_eq!(debugger.statements, 1 + 1 + 1 + 3 * 2);
}
