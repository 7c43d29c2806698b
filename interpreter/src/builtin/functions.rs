// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{io::{BufRead, Write}, time::{SystemTime, UNIX_EPOCH}};

use crate::{RuntimeError, Value};

use super::arguments::{expect_arity, expect_arity_between};

pub fn print(args: Vec<Value>) -> Result<Value, RuntimeError> {
    let line = args.iter()
        .map(|arg| arg.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    println!("{line}");
    Ok(Value::Null)
}

pub fn input(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity_between("input", &args, 0, 1)?;

    if let Some(prompt) = args.first() {
        print!("{prompt}");
        _ = std::io::stdout().flush();
    }

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)
        .map_err(|e| RuntimeError::new(format!("Failed to read input: {e}")))?;

    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Value::String(line))
}

pub fn int(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("int", &args, 1)?;

    match &args[0] {
        Value::Integer(integer) => Ok(Value::Integer(*integer)),
        Value::Float(float) => float_to_int("int", *float),
        Value::Bool(boolean) => Ok(Value::Integer(i64::from(*boolean))),
        Value::String(string) => string.trim().parse()
            .map(Value::Integer)
            .map_err(|_| RuntimeError::invalid_argument("int", format!("cannot convert \"{string}\" to an int"))),
        other => Err(RuntimeError::invalid_argument("int", format!("cannot convert {} to an int", other.type_name()))),
    }
}

pub fn float(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("float", &args, 1)?;

    match &args[0] {
        Value::Integer(integer) => Ok(Value::Float(*integer as f64)),
        Value::Float(float) => Ok(Value::Float(*float)),
        Value::Bool(boolean) => Ok(Value::Float(if *boolean { 1.0 } else { 0.0 })),
        Value::String(string) => string.trim().parse()
            .map(Value::Float)
            .map_err(|_| RuntimeError::invalid_argument("float", format!("cannot convert \"{string}\" to a float"))),
        other => Err(RuntimeError::invalid_argument("float", format!("cannot convert {} to a float", other.type_name()))),
    }
}

pub fn string(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("string", &args, 1)?;
    Ok(Value::String(args[0].to_string()))
}

pub fn bool(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("bool", &args, 1)?;
    Ok(Value::Bool(args[0].is_truthy()))
}

pub fn type_of(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("type", &args, 1)?;
    Ok(Value::String(args[0].type_name().to_string()))
}

pub fn error(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("error", &args, 1)?;
    Err(RuntimeError::user(&args[0]))
}

pub fn time(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("time", &args, 0)?;

    let elapsed = SystemTime::now().duration_since(UNIX_EPOCH)
        .map_err(|e| RuntimeError::new(format!("System clock is before the Unix epoch: {e}")))?;
    Ok(Value::Float(elapsed.as_secs_f64()))
}

/// Truncates towards zero, failing for values outside the range of an int.
pub(super) fn float_to_int(function: &str, float: f64) -> Result<Value, RuntimeError> {
    let truncated = float.trunc();

    if truncated.is_finite() && truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        Ok(Value::Integer(truncated as i64))
    } else {
        Err(RuntimeError::invalid_argument(function, format!("{float:?} does not fit in an int")))
    }
}
