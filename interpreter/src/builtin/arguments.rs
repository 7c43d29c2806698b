// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{value::{ArrayValue, ObjectValue}, RuntimeError, Value};

pub fn expect_arity(function: &str, args: &[Value], expected: usize) -> Result<(), RuntimeError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::builtin_arity(function, &expected.to_string(), args.len()))
    }
}

pub fn expect_arity_between(function: &str, args: &[Value], min: usize, max: usize) -> Result<(), RuntimeError> {
    if (min..=max).contains(&args.len()) {
        Ok(())
    } else {
        Err(RuntimeError::builtin_arity(function, &format!("{min} to {max}"), args.len()))
    }
}

pub fn expect_at_least(function: &str, args: &[Value], min: usize) -> Result<(), RuntimeError> {
    if args.len() >= min {
        Ok(())
    } else {
        Err(RuntimeError::builtin_arity(function, &format!("at least {min}"), args.len()))
    }
}

pub fn expect_array(function: &str, value: &Value) -> Result<ArrayValue, RuntimeError> {
    match value {
        Value::Array(array) => Ok(ArrayValue::clone(array)),
        _ => Err(type_error(function, "an array", value)),
    }
}

pub fn expect_object(function: &str, value: &Value) -> Result<ObjectValue, RuntimeError> {
    match value {
        Value::Object(object) => Ok(ObjectValue::clone(object)),
        _ => Err(type_error(function, "an object", value)),
    }
}

pub fn expect_string<'value>(function: &str, value: &'value Value) -> Result<&'value str, RuntimeError> {
    match value {
        Value::String(string) => Ok(string),
        _ => Err(type_error(function, "a string", value)),
    }
}

pub fn expect_integer(function: &str, value: &Value) -> Result<i64, RuntimeError> {
    match value {
        Value::Integer(integer) => Ok(*integer),
        _ => Err(type_error(function, "an int", value)),
    }
}

pub fn expect_number(function: &str, value: &Value) -> Result<f64, RuntimeError> {
    value.as_f64().ok_or_else(|| type_error(function, "a number", value))
}

fn type_error(function: &str, expected: &str, actual: &Value) -> RuntimeError {
    RuntimeError::invalid_argument(function, format!("expected {expected}, but got {}", actual.type_name()))
}
