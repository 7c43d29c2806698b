// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{cell::RefCell, cmp::Ordering, fmt::{Debug, Display, Write}, rc::Rc};

use hixa::{Comparison, FunctionStatement, Literal};

use crate::{BuiltinFunction, Environment, RuntimeError};

pub type ArrayValue = Rc<RefCell<Vec<Value>>>;
pub type ObjectValue = Rc<RefCell<Vec<(String, Value)>>>;

/// A runtime value. Arrays and objects are shared by reference, so a mutation
/// through one binding is visible through every other binding.
#[derive(Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(ArrayValue),
    Object(ObjectValue),
    Function(Rc<Function>),
    Builtin(&'static BuiltinFunction),
}

impl Value {
    #[must_use]
    pub fn new_array(values: Vec<Value>) -> Self {
        Self::Array(Rc::new(RefCell::new(values)))
    }

    #[must_use]
    pub fn new_object(properties: Vec<(String, Value)>) -> Self {
        Self::Object(Rc::new(RefCell::new(properties)))
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(..) => "bool",
            Self::Integer(..) => "int",
            Self::Float(..) => "float",
            Self::String(..) => "string",
            Self::Array(..) => "array",
            Self::Object(..) => "object",
            Self::Function(..) => "function",
            Self::Builtin(..) => "function",
        }
    }

    /// Only `null` and `false` are falsy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(integer) => Some(*integer as f64),
            Self::Float(float) => Some(*float),
            _ => None,
        }
    }

    /// Compares two numbers, returning `None` when either side is not a
    /// number.
    #[must_use]
    pub fn compare(&self, other: &Self, comparison: Comparison) -> Option<bool> {
        let ordering = match (self, other) {
            (Self::Integer(lhs), Self::Integer(rhs)) => lhs.cmp(rhs),
            _ => {
                let lhs = self.as_f64()?;
                let rhs = other.as_f64()?;

                // NaN is unordered with everything.
                let Some(ordering) = lhs.partial_cmp(&rhs) else {
                    return Some(false);
                };
                ordering
            }
        };

        Some(match comparison {
            Comparison::Equality => ordering == Ordering::Equal,
            Comparison::Inequality => ordering != Ordering::Equal,
            Comparison::GreaterThan => ordering == Ordering::Greater,
            Comparison::GreaterThanOrEqual => ordering != Ordering::Less,
            Comparison::LessThan => ordering == Ordering::Less,
            Comparison::LessThanOrEqual => ordering != Ordering::Greater,
        })
    }

    /// Looks up a property of an object value.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<Value> {
        let Self::Object(properties) = self else {
            return None;
        };

        properties.borrow().iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    /// Writes the display form. A collection that contains itself is
    /// written as `[...]` or `{...}` where it reappears.
    fn write_display(&self, f: &mut std::fmt::Formatter<'_>, visiting: &mut Vec<*const ()>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(boolean) => Display::fmt(boolean, f),
            Self::Integer(integer) => Display::fmt(integer, f),
            Self::Float(float) => Debug::fmt(float, f),
            Self::String(string) => f.write_str(string),

            Self::Array(values) => {
                let address = Rc::as_ptr(values).cast::<()>();
                if visiting.contains(&address) {
                    return f.write_str("[...]");
                }

                visiting.push(address);
                f.write_char('[')?;
                for (idx, value) in values.borrow().iter().enumerate() {
                    if idx != 0 {
                        f.write_str(", ")?;
                    }
                    value.write_nested(f, visiting)?;
                }
                visiting.pop();
                f.write_char(']')
            }

            Self::Object(properties) => {
                let address = Rc::as_ptr(properties).cast::<()>();
                if visiting.contains(&address) {
                    return f.write_str("{...}");
                }

                visiting.push(address);
                f.write_char('{')?;
                for (idx, (key, value)) in properties.borrow().iter().enumerate() {
                    if idx != 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(key)?;
                    f.write_str(": ")?;
                    value.write_nested(f, visiting)?;
                }
                visiting.pop();
                f.write_char('}')
            }

            Self::Function(function) => f.write_fmt(format_args!("<fn {}>", function.name())),
            Self::Builtin(builtin) => f.write_fmt(format_args!("<builtin {}>", builtin.name)),
        }
    }

    fn write_nested(&self, f: &mut std::fmt::Formatter<'_>, visiting: &mut Vec<*const ()>) -> std::fmt::Result {
        match self {
            Self::String(string) => f.write_fmt(format_args!("{string:?}")),
            _ => self.write_display(f, visiting),
        }
    }

    /// Structural equality. A pair of collections that is already being
    /// compared further up counts as equal, so cyclic values terminate.
    fn equals(&self, other: &Self, comparing: &mut Vec<(*const (), *const ())>) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(lhs), Self::Bool(rhs)) => lhs == rhs,
            (Self::Integer(lhs), Self::Integer(rhs)) => lhs == rhs,
            (Self::Integer(..) | Self::Float(..), Self::Integer(..) | Self::Float(..)) => self.as_f64() == other.as_f64(),
            (Self::String(lhs), Self::String(rhs)) => lhs == rhs,

            (Self::Array(lhs), Self::Array(rhs)) => {
                if Rc::ptr_eq(lhs, rhs) {
                    return true;
                }

                let pair = (Rc::as_ptr(lhs).cast::<()>(), Rc::as_ptr(rhs).cast::<()>());
                if comparing.contains(&pair) {
                    return true;
                }

                comparing.push(pair);
                let (lhs, rhs) = (lhs.borrow(), rhs.borrow());
                let equal = lhs.len() == rhs.len()
                    && lhs.iter().zip(rhs.iter()).all(|(lhs, rhs)| lhs.equals(rhs, comparing));
                comparing.pop();
                equal
            }

            (Self::Object(lhs), Self::Object(rhs)) => {
                if Rc::ptr_eq(lhs, rhs) {
                    return true;
                }

                let pair = (Rc::as_ptr(lhs).cast::<()>(), Rc::as_ptr(rhs).cast::<()>());
                if comparing.contains(&pair) {
                    return true;
                }

                comparing.push(pair);
                let equal = objects_equal(&lhs.borrow(), &rhs.borrow(), comparing);
                comparing.pop();
                equal
            }

            (Self::Function(lhs), Self::Function(rhs)) => Rc::ptr_eq(lhs, rhs),
            (Self::Builtin(lhs), Self::Builtin(rhs)) => lhs.name == rhs.name,
            _ => false,
        }
    }
}

/// Checks that the index lies within `0..length`.
pub(crate) fn resolve_index(length: usize, index: i64) -> Result<usize, RuntimeError> {
    usize::try_from(index).ok()
        .filter(|index| *index < length)
        .ok_or_else(|| RuntimeError::index_out_of_bounds(length, index))
}

/// Sets or inserts a property, keeping insertion order.
pub(crate) fn set_property(object: &ObjectValue, name: &str, value: Value) {
    let mut properties = object.borrow_mut();

    match properties.iter_mut().find(|(key, _)| key == name) {
        Some((_, existing)) => *existing = value,
        None => properties.push((name.to_string(), value)),
    }
}

/// Objects are equal when they have the same keys with equal values,
/// regardless of insertion order.
fn objects_equal(lhs: &[(String, Value)], rhs: &[(String, Value)], comparing: &mut Vec<(*const (), *const ())>) -> bool {
    lhs.len() == rhs.len() && lhs.iter().all(|(key, value)| {
        rhs.iter().any(|(other_key, other_value)| key == other_key && value.equals(other_value, comparing))
    })
}

impl From<&Literal> for Value {
    fn from(value: &Literal) -> Self {
        match value {
            Literal::Integer(integer) => Self::Integer(*integer),
            Literal::Float(float) => Self::Float(*float),
            Literal::String(string) => Self::String(string.clone()),
            Literal::Boolean(boolean) => Self::Bool(*boolean),
            Literal::Null => Self::Null,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other, &mut Vec::new())
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_display(f, &mut Vec::new())
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(string) => f.write_fmt(format_args!("String({string:?})")),
            Self::Null | Self::Bool(..) | Self::Integer(..) | Self::Float(..) => {
                f.write_fmt(format_args!("{}({self})", self.type_name()))
            }
            _ => Display::fmt(self, f),
        }
    }
}

/// A user-defined function together with the frame it was declared in.
pub struct Function {
    pub declaration: Rc<FunctionStatement>,
    pub closure: Rc<RefCell<Environment>>,
}

impl Function {
    #[must_use]
    pub fn name(&self) -> &str {
        self.declaration.name.value()
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.declaration.parameters.len()
    }
}

impl Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name())
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Null, false)]
    #[case(Value::Bool(false), false)]
    #[case(Value::Bool(true), true)]
    #[case(Value::Integer(0), true)]
    #[case(Value::Float(0.0), true)]
    #[case(Value::String(String::new()), true)]
    #[case(Value::new_array(Vec::new()), true)]
    #[case(Value::new_object(Vec::new()), true)]
    fn truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    #[case(Value::Integer(3), "3")]
    #[case(Value::Float(3.0), "3.0")]
    #[case(Value::Float(2.5), "2.5")]
    #[case(Value::String("hi".into()), "hi")]
    #[case(Value::new_array(vec![Value::Integer(1), Value::String("a".into()), Value::Null]), "[1, \"a\", null]")]
    #[case(Value::new_object(vec![("b".into(), Value::Bool(true)), ("a".into(), Value::String("x".into()))]), "{b: true, a: \"x\"}")]
    fn display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn integers_and_floats_compare_numerically() {
        assert_eq!(Value::Integer(2), Value::Float(2.0));
        assert_ne!(Value::Integer(2), Value::String("2".into()));
        assert_eq!(Value::Integer(1).compare(&Value::Float(1.5), Comparison::LessThan), Some(true));
        assert_eq!(Value::Integer(1).compare(&Value::String("a".into()), Comparison::LessThan), None);
    }

    #[test]
    fn arrays_compare_structurally() {
        let a = Value::new_array(vec![Value::Integer(1), Value::Integer(2)]);
        let b = Value::new_array(vec![Value::Integer(1), Value::Float(2.0)]);
        assert_eq!(a, b);
    }

    #[test]
    fn objects_compare_regardless_of_order() {
        let a = Value::new_object(vec![("x".into(), Value::Integer(1)), ("y".into(), Value::Integer(2))]);
        let b = Value::new_object(vec![("y".into(), Value::Integer(2)), ("x".into(), Value::Integer(1))]);
        let c = Value::new_object(vec![("x".into(), Value::Integer(1))]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn set_property_keeps_order() {
        let object = Rc::new(RefCell::new(Vec::new()));
        set_property(&object, "x", Value::Integer(1));
        set_property(&object, "y", Value::Integer(2));
        set_property(&object, "x", Value::Integer(3));

        let value = Value::Object(object);
        assert_eq!(value.to_string(), "{x: 3, y: 2}");
        assert_eq!(value.get_property("x"), Some(Value::Integer(3)));
        assert_eq!(value.get_property("z"), None);
    }

    #[test]
    fn cyclic_collections_display_a_placeholder() {
        let array = Value::new_array(vec![Value::Integer(1)]);
        let Value::Array(values) = &array else { unreachable!() };
        values.borrow_mut().push(array.clone());
        assert_eq!(array.to_string(), "[1, [...]]");

        let object = Value::new_object(Vec::new());
        let Value::Object(properties) = &object else { unreachable!() };
        set_property(properties, "me", object.clone());
        assert_eq!(object.to_string(), "{me: {...}}");
    }

    #[test]
    fn shared_collections_are_not_mistaken_for_cycles() {
        let inner = Value::new_array(vec![Value::Integer(1)]);
        let outer = Value::new_array(vec![inner.clone(), inner]);
        assert_eq!(outer.to_string(), "[[1], [1]]");
    }

    #[test]
    fn cyclic_collections_compare_without_overflowing() {
        let make_cycle = || {
            let array = Value::new_array(vec![Value::Integer(1)]);
            let Value::Array(values) = &array else { unreachable!() };
            values.borrow_mut().push(array.clone());
            array
        };

        let a = make_cycle();
        let b = make_cycle();
        assert_eq!(a, b);
        assert_ne!(a, Value::new_array(vec![Value::Integer(1), Value::Null]));
    }
}
