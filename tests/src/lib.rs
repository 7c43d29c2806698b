// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::sync::{Arc, Mutex};

use hixa::{ConfigSectionInterpreter, Expression, Parser, Program, Ranged};
use hixa_interpreter::{Debugger, DebuggerFunction, Interpreter, RuntimeError, Value};

fn init_logging() {
    _ = env_logger::builder().is_test(true).try_init();
}

fn parse(input: &str) -> Program {
    init_logging();

    let analysis = hixa::analyze(input);
    assert!(!analysis.has_errors(), "Diagnostics: {:#?}", analysis.diagnostics);

    analysis.program
}

fn parse_expression(input: &str) -> Ranged<Expression> {
    init_logging();

    let tokens = hixa::tokenize(input).expect("the input should lex");
    let mut parser = Parser::new(&tokens);

    let expression = parser.parse_expression().expect("the input should be an expression");
    assert!(parser.is_at_end());
    assert!(parser.diagnostics().is_empty(), "Diagnostics: {:#?}", parser.diagnostics());

    expression
}

pub fn interpret_statements(input: &str) {
    let program = parse(input);
    Interpreter::new(()).interpret(&program).unwrap();
}

pub fn interpret_expression(input: &str) -> Value {
    let expression = parse_expression(input);
    Interpreter::new(()).execute_expression(&expression).unwrap()
}

/// Runs the program and returns the value of its last expression statement.
pub fn evaluate(input: &str) -> Value {
    let program = parse(input);
    Interpreter::new(()).evaluate_program(&program).unwrap()
}

pub fn interpret_runtime_error(input: &str) -> RuntimeError {
    interpret_runtime_error_with_depth(input, ConfigSectionInterpreter::DEFAULT_MAX_CALL_DEPTH)
}

pub fn interpret_runtime_error_with_depth(input: &str, max_call_depth: usize) -> RuntimeError {
    let program = parse(input);
    let config = ConfigSectionInterpreter { max_call_depth };

    let mut interpreter = Interpreter::new(()).with_config(&config);
    match interpreter.interpret(&program) {
        Ok(()) => panic!("Expected a runtime error, but the program finished"),
        Err(e) => e,
    }
}

pub fn interpret_and_return_stdout(input: &str) -> Vec<String> {
    let program = parse(input);
    let buffer = Arc::new(Mutex::new(Vec::new()));

    {
        let mut interpreter = Interpreter::new(TestDebugger {
            buffer: Arc::clone(&buffer),
        });

        interpreter.interpret(&program).unwrap();
    }

    Arc::try_unwrap(buffer).unwrap().into_inner().unwrap()
}

struct TestDebugger {
    buffer: Arc<Mutex<Vec<String>>>,
}

impl Debugger for TestDebugger {
    fn enter_function(&mut self, function: DebuggerFunction<'_>, args: &[Value]) {
        if function.name == "print" {
            let line = args.iter()
                .map(|arg| arg.to_string())
                .collect::<Vec<_>>()
                .join(" ");

            self.buffer.lock().unwrap().push(line);
        }
    }
}
