// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{RuntimeError, Value};

use super::arguments::{expect_arity, expect_arity_between, expect_string};

pub fn split(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity_between("split", &args, 1, 2)?;

    let string = expect_string("split", &args[0])?;
    let parts: Vec<Value> = match args.get(1) {
        Some(separator) => {
            let separator = expect_string("split", separator)?;
            if separator.is_empty() {
                return Err(RuntimeError::invalid_argument("split", "separator must not be empty"));
            }

            string.split(separator).map(|x| Value::String(x.to_string())).collect()
        }

        None => string.split_whitespace().map(|x| Value::String(x.to_string())).collect(),
    };

    Ok(Value::new_array(parts))
}

pub fn upper(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("upper", &args, 1)?;
    Ok(Value::String(expect_string("upper", &args[0])?.to_uppercase()))
}

pub fn lower(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("lower", &args, 1)?;
    Ok(Value::String(expect_string("lower", &args[0])?.to_lowercase()))
}

pub fn replace(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("replace", &args, 3)?;

    let string = expect_string("replace", &args[0])?;
    let from = expect_string("replace", &args[1])?;
    let to = expect_string("replace", &args[2])?;

    Ok(Value::String(string.replace(from, to)))
}

pub fn contains(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("contains", &args, 2)?;

    let contains = match &args[0] {
        Value::String(string) => string.contains(expect_string("contains", &args[1])?),
        Value::Array(array) => array.borrow().contains(&args[1]),
        Value::Object(..) => args[0].get_property(expect_string("contains", &args[1])?).is_some(),
        other => return Err(RuntimeError::invalid_argument("contains", format!("cannot search in {}", other.type_name()))),
    };

    Ok(Value::Bool(contains))
}

/// Indices are counted in characters, not bytes.
pub fn find(args: Vec<Value>) -> Result<Value, RuntimeError> {
    expect_arity("find", &args, 2)?;

    let index = match &args[0] {
        Value::String(string) => {
            let needle = expect_string("find", &args[1])?;
            string.find(needle).map(|byte_index| string[..byte_index].chars().count())
        }

        Value::Array(array) => array.borrow().iter().position(|x| *x == args[1]),

        other => return Err(RuntimeError::invalid_argument("find", format!("cannot search in {}", other.type_name()))),
    };

    Ok(Value::Integer(index.map_or(-1, |index| index as i64)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn string(value: &str) -> Value {
        Value::String(value.to_string())
    }

    #[rstest]
    #[case(vec![string("a,b,,c"), string(",")], "[\"a\", \"b\", \"\", \"c\"]")]
    #[case(vec![string("  one two\tthree ")], "[\"one\", \"two\", \"three\"]")]
    fn split_forms(#[case] args: Vec<Value>, #[case] expected: &str) {
        assert_eq!(split(args).unwrap().to_string(), expected);
    }

    #[test]
    fn case_conversion() {
        assert_eq!(upper(vec![string("Hixa")]).unwrap(), string("HIXA"));
        assert_eq!(lower(vec![string("Hixa")]).unwrap(), string("hixa"));
        assert!(upper(vec![Value::Integer(1)]).is_err());
    }

    #[test]
    fn replace_every_occurrence() {
        assert_eq!(replace(vec![string("a-b-c"), string("-"), string("+")]).unwrap(), string("a+b+c"));
    }

    #[rstest]
    #[case(string("hello"), string("ell"), true)]
    #[case(string("hello"), string("xyz"), false)]
    #[case(Value::new_array(vec![Value::Integer(1), Value::Integer(2)]), Value::Float(2.0), true)]
    #[case(Value::new_object(vec![("a".into(), Value::Null)]), string("a"), true)]
    #[case(Value::new_object(vec![("a".into(), Value::Null)]), string("b"), false)]
    fn contains_forms(#[case] haystack: Value, #[case] needle: Value, #[case] expected: bool) {
        assert_eq!(contains(vec![haystack, needle]).unwrap(), Value::Bool(expected));
    }

    #[rstest]
    #[case(string("héllo"), string("llo"), 2)]
    #[case(string("hello"), string("z"), -1)]
    #[case(Value::new_array(vec![string("a"), string("b")]), string("b"), 1)]
    fn find_forms(#[case] haystack: Value, #[case] needle: Value, #[case] expected: i64) {
        assert_eq!(find(vec![haystack, needle]).unwrap(), Value::Integer(expected));
    }
}
