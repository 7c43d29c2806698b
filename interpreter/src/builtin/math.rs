// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{RuntimeError, Value};

use super::{
    arguments::{expect_arity, expect_at_least, expect_array, expect_number},
    functions::float_to_int,
};

pub fn abs(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("abs", &args, 1)?;

    match &args[0] {
        Value::Integer(integer) => integer.checked_abs()
            .map(Value::Integer)
            .ok_or_else(|| RuntimeError::integer_overflow("abs")),
        other => Ok(Value::Float(expect_number("abs", other)?.abs())),
    }
}

pub fn sqrt(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("sqrt", &args, 1)?;

    let number = expect_number("sqrt", &args[0])?;
    if number < 0.0 {
        return Err(RuntimeError::invalid_argument("sqrt", "cannot take the square root of a negative number"));
    }

    Ok(Value::Float(number.sqrt()))
}

pub fn pow(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("pow", &args, 2)?;

    if let (Value::Integer(base), Value::Integer(exponent)) = (&args[0], &args[1]) {
        if let Ok(exponent) = u32::try_from(*exponent) {
            return base.checked_pow(exponent)
                .map(Value::Integer)
                .ok_or_else(|| RuntimeError::integer_overflow("pow"));
        }
    }

    let base = expect_number("pow", &args[0])?;
    let exponent = expect_number("pow", &args[1])?;
    Ok(Value::Float(base.powf(exponent)))
}

pub fn floor(args: Vec<Value>) -> Result<Value, RuntimeError> {
    round_with("floor", args, f64::floor)
}

pub fn ceil(args: Vec<Value>) -> Result<Value, RuntimeError> {
    round_with("ceil", args, f64::ceil)
}

pub fn round(args: Vec<Value>) -> Result<Value, RuntimeError> {
    round_with("round", args, f64::round)
}

fn round_with(function: &str, args: Vec<Value>, f: fn(f64) -> f64) -> Result<Value, RuntimeError> {
    expect_arity(function, &args, 1)?;

    match &args[0] {
        Value::Integer(integer) => Ok(Value::Integer(*integer)),
        other => float_to_int(function, f(expect_number(function, other)?)),
    }
}

pub fn min(args: Vec<Value>) -> Result<Value, RuntimeError> {
    extreme("min", args, |candidate, best| candidate < best)
}

pub fn max(args: Vec<Value>) -> Result<Value, RuntimeError> {
    extreme("max", args, |candidate, best| candidate > best)
}

/// Picks the number preferred by `is_better`, from either the arguments
/// themselves or a single array argument.
fn extreme(function: &str, args: Vec<Value>, is_better: fn(f64, f64) -> bool) -> Result<Value, RuntimeError> {
    expect_at_least(function, &args, 1)?;

    let single_array = match args.as_slice() {
        [Value::Array(array)] => Some(array.borrow().clone()),
        _ => None,
    };
    let values = single_array.unwrap_or(args);

    let mut best: Option<(f64, Value)> = None;
    for value in values {
        let number = expect_number(function, &value)?;

        if best.as_ref().map_or(true, |(current, _)| is_better(number, *current)) {
            best = Some((number, value));
        }
    }

    best.map(|(_, value)| value)
        .ok_or_else(|| RuntimeError::invalid_argument(function, "the array is empty"))
}

pub fn sum(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("sum", &args, 1)?;

    let array = expect_array("sum", &args[0])?;
    let mut total = Value::Integer(0);

    for value in array.borrow().iter() {
        let next = match (&total, value) {
            (Value::Integer(lhs), Value::Integer(rhs)) => lhs.checked_add(*rhs)
                .map(Value::Integer)
                .ok_or_else(|| RuntimeError::integer_overflow("sum"))?,
            _ => Value::Float(expect_number("sum", &total)? + expect_number("sum", value)?),
        };
        total = next;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(abs(vec![Value::Integer(-3)]), Value::Integer(3))]
    #[case(abs(vec![Value::Float(-2.5)]), Value::Float(2.5))]
    #[case(sqrt(vec![Value::Integer(9)]), Value::Float(3.0))]
    #[case(pow(vec![Value::Integer(2), Value::Integer(10)]), Value::Integer(1024))]
    #[case(pow(vec![Value::Integer(2), Value::Integer(-1)]), Value::Float(0.5))]
    #[case(floor(vec![Value::Float(2.7)]), Value::Integer(2))]
    #[case(ceil(vec![Value::Float(2.1)]), Value::Integer(3))]
    #[case(round(vec![Value::Float(2.5)]), Value::Integer(3))]
    #[case(round(vec![Value::Integer(7)]), Value::Integer(7))]
    #[case(min(vec![Value::Integer(3), Value::Float(1.5), Value::Integer(2)]), Value::Float(1.5))]
    #[case(max(vec![Value::new_array(vec![Value::Integer(3), Value::Integer(9)])]), Value::Integer(9))]
    #[case(sum(vec![Value::new_array(vec![Value::Integer(1), Value::Integer(2)])]), Value::Integer(3))]
    #[case(sum(vec![Value::new_array(vec![Value::Integer(1), Value::Float(0.5)])]), Value::Float(1.5))]
    #[case(sum(vec![Value::new_array(Vec::new())]), Value::Integer(0))]
    fn results(#[case] actual: Result<Value, RuntimeError>, #[case] expected: Value) {
        let actual = actual.unwrap();
        assert_eq!(actual.type_name(), expected.type_name());
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case(abs(vec![Value::Integer(i64::MIN)]))]
    #[case(sqrt(vec![Value::Integer(-1)]))]
    #[case(pow(vec![Value::Integer(10), Value::Integer(40)]))]
    #[case(min(vec![Value::new_array(Vec::new())]))]
    #[case(max(vec![Value::String("a".into())]))]
    #[case(sum(vec![Value::new_array(vec![Value::Integer(i64::MAX), Value::Integer(1)])]))]
    fn failures(#[case] actual: Result<Value, RuntimeError>) {
        assert!(actual.is_err());
    }
}
