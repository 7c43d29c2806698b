// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{value::resolve_index, RuntimeError, Value};

use super::arguments::{
    expect_arity, expect_arity_between, expect_array, expect_at_least, expect_integer, expect_object,
    expect_string,
};

pub fn len(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("len", &args, 1)?;

    let length = match &args[0] {
        Value::String(string) => string.chars().count(),
        Value::Array(array) => array.borrow().len(),
        Value::Object(object) => object.borrow().len(),
        other => return Err(RuntimeError::invalid_argument("len", format!("{} has no length", other.type_name()))),
    };

    Ok(Value::Integer(length as i64))
}

pub fn range(args: Vec<Value>) -> Result<Value, RuntimeError> {
    let (start, end, step) = match args.as_slice() {
        [end] => (0, expect_integer("range", end)?, 1),
        [start, end] => (expect_integer("range", start)?, expect_integer("range", end)?, 1),
        [start, end, step] => (expect_integer("range", start)?, expect_integer("range", end)?, expect_integer("range", step)?),
        _ => return Err(RuntimeError::builtin_arity("range", "1 to 3", args.len())),
    };

    if step == 0 {
        return Err(RuntimeError::invalid_argument("range", "step must not be zero"));
    }

    let mut values = Vec::new();
    let mut current = start;

    while (step > 0 && current < end) || (step < 0 && current > end) {
        values.push(Value::Integer(current));

        let Some(next) = current.checked_add(step) else {
            break;
        };
        current = next;
    }

    Ok(Value::new_array(values))
}

pub fn push(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_at_least("push", &args, 2)?;

    let mut args = args.into_iter();
    let target = args.next().unwrap_or(Value::Null);

    let array = expect_array("push", &target)?;
    array.borrow_mut().extend(args);

    Ok(Value::Null)
}

pub fn pop(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("pop", &args, 1)?;

    let array = expect_array("pop", &args[0])?;
    let value = array.borrow_mut().pop();
    value.ok_or_else(|| RuntimeError::invalid_argument("pop", "the array is empty"))
}

pub fn remove(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("remove", &args, 2)?;

    match &args[0] {
        Value::Array(array) => {
            let mut array = array.borrow_mut();
            let index = resolve_index(array.len(), expect_integer("remove", &args[1])?)?;
            Ok(array.remove(index))
        }

        Value::Object(object) => {
            let key = expect_string("remove", &args[1])?;
            let mut object = object.borrow_mut();

            let position = object.iter().position(|(name, _)| name == key)
                .ok_or_else(|| RuntimeError::unknown_property(key))?;
            Ok(object.remove(position).1)
        }

        other => Err(RuntimeError::invalid_argument("remove", format!("cannot remove from {}", other.type_name()))),
    }
}

pub fn sort(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("sort", &args, 1)?;

    let array = expect_array("sort", &args[0])?;
    let mut values = array.borrow_mut();

    let all_numbers = values.iter().all(|x| x.as_f64().is_some());
    let all_strings = values.iter().all(|x| matches!(x, Value::String(..)));

    if !all_numbers && !all_strings {
        return Err(RuntimeError::invalid_argument("sort", "only arrays of numbers or of strings can be sorted"));
    }

    values.sort_by(|lhs, rhs| match (lhs, rhs) {
        (Value::String(lhs), Value::String(rhs)) => lhs.cmp(rhs),
        (Value::Integer(lhs), Value::Integer(rhs)) => lhs.cmp(rhs),
        _ => {
            let lhs = lhs.as_f64().unwrap_or_default();
            let rhs = rhs.as_f64().unwrap_or_default();
            lhs.total_cmp(&rhs)
        }
    });

    Ok(Value::Null)
}

pub fn reverse(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("reverse", &args, 1)?;

    match &args[0] {
        Value::Array(array) => {
            array.borrow_mut().reverse();
            Ok(Value::Null)
        }

        Value::String(string) => Ok(Value::String(string.chars().rev().collect())),

        other => Err(RuntimeError::invalid_argument("reverse", format!("cannot reverse {}", other.type_name()))),
    }
}

pub fn join(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity_between("join", &args, 1, 2)?;

    let array = expect_array("join", &args[0])?;
    let separator = match args.get(1) {
        Some(separator) => expect_string("join", separator)?,
        None => "",
    };

    let joined = array.borrow().iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(separator);

    Ok(Value::String(joined))
}

pub fn copy(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("copy", &args, 1)?;

    Ok(match &args[0] {
        Value::Array(array) => Value::new_array(array.borrow().clone()),
        Value::Object(object) => Value::new_object(object.borrow().clone()),
        other => other.clone(),
    })
}

pub fn keys(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("keys", &args, 1)?;

    let object = expect_object("keys", &args[0])?;
    let keys = object.borrow().iter()
        .map(|(key, _)| Value::String(key.clone()))
        .collect();

    Ok(Value::new_array(keys))
}
