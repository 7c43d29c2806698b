// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use hixa_interpreter::Value;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{evaluate, interpret_expression};

#[rstest]
#[case("1 + 2 * 3", Value::Integer(7))]
#[case("(1 + 2) * 3", Value::Integer(9))]
#[case("10 - 4 - 3", Value::Integer(3))]
#[case("7 / 2", Value::Float(3.5))]
#[case("4 / 2", Value::Float(2.0))]
#[case("7 % 3", Value::Integer(1))]
#[case("-7 % 3", Value::Integer(2))]
#[case("7 % -3", Value::Integer(-2))]
#[case("5.5 % 2", Value::Float(1.5))]
#[case("1 + 0.5", Value::Float(1.5))]
#[case("-(3)", Value::Integer(-3))]
#[case("--3", Value::Integer(3))]
#[case("\"ab\" + \"cd\"", Value::String("abcd".into()))]
fn math(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual.type_name(), expected.type_name());
    assert_eq!(actual, expected);
}

#[rstest]
#[case("1 == 1.0", true)]
#[case("1 != 2", true)]
#[case("\"a\" == \"a\"", true)]
#[case("\"1\" == 1", false)]
#[case("nai == nai", true)]
#[case("nai == misa", false)]
#[case("[1, [2]] == [1, [2.0]]", true)]
#[case("{a: 1, b: 2} == {b: 2, a: 1}", true)]
#[case("{a: 1} == {a: 1, b: 2}", false)]
#[case("2 < 3", true)]
#[case("2.5 >= 3", false)]
#[case("3 <= 3.0", true)]
#[case("1 < 2 == hosa", true)]
fn comparisons(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(interpret_expression(input), Value::Bool(expected));
}

#[rstest]
#[case("hosa aru misa", false)]
#[case("hosa && 1", true)]
#[case("misa ba nai", false)]
#[case("nai || 0", true)]
#[case("!nai", true)]
#[case("not_kora 0", false)]
#[case("hosa ba misa aru misa", true)]
fn logical_operators_give_booleans(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(interpret_expression(input), Value::Bool(expected));
}

#[test]
fn logical_operators_evaluate_both_sides() {
    let value = evaluate("
        dhora calls = 0
        kam touch() {
            calls = calls + 1
            ghurai_diya hosa
        }

        misa aru touch()
        hosa ba touch()
        calls
    ");

    assert_eq!(value, Value::Integer(2));
}

#[test]
fn assignment_is_an_expression() {
    let value = evaluate("
        dhora a = 0
        dhora b = 0
        a = b = 4
        a + b
    ");

    assert_eq!(value, Value::Integer(8));
}

#[rstest]
#[case("dhora xs = [1, 2, 3]\nxs[len(xs) - 1]", Value::Integer(3))]
#[case("dhora xs = [1, 2, 3]\nxs[0] = 10\nxs", Value::new_array(vec![Value::Integer(10), Value::Integer(2), Value::Integer(3)]))]
#[case("dhora o = {a: 1}\no.b = 2\no.a + o[\"b\"]", Value::Integer(3))]
#[case("dhora o = {}\no[\"k\"] = \"v\"\no.k", Value::String("v".into()))]
#[case("\"hixa\"[1]", Value::String("i".into()))]
#[case("dhora xs = [1]\ndhora ys = xs\npush(ys, 2)\nlen(xs)", Value::Integer(2))]
fn indexing_and_members(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(evaluate(input), expected);
}
