// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{interpret_runtime_error, interpret_runtime_error_with_depth};

#[rstest]
#[case("likha(missing)", "Undefined variable `missing`")]
#[case("missing = 1", "Undefined variable `missing`")]
#[case("1 / 0", "Division by zero")]
#[case("1.5 / 0.0", "Division by zero")]
#[case("1 % 0", "Modulo by zero")]
#[case("1 + \"a\"", "Unsupported operand types for `+`: int and string")]
#[case("\"a\" - \"b\"", "Unsupported operand types for `-`: string and string")]
#[case("[1] < [2]", "Unsupported operand types for `<`: array and array")]
#[case("-\"a\"", "Unsupported operand type for `-`: string")]
#[case("9223372036854775807 + 1", "Integer overflow in `+`")]
#[case("dhora xs = [1]\nxs[1]", "Index 1 is out of bounds for length 1")]
#[case("dhora xs = [1]\nxs[-1]", "Index -1 is out of bounds for length 1")]
#[case("dhora xs = [1]\nxs[\"0\"]", "Index must be an int, but got string")]
#[case("dhora o = {}\no[1] = 2", "Property name must be a string, but got int")]
#[case("5[0]", "Cannot index into a value of type int")]
#[case("dhora a = 3\na()", "A value of type int is not callable")]
#[case("dhora o = {a: 1}\no.b", "Object has no property `b`")]
#[case("dhora n = 1\nn.field", "Cannot access member `field` on a value of type int")]
#[case("kam add(a, b) { ghurai_diya a + b }\nadd(1)", "Function `add` expected 2 arguments but got 1")]
#[case("kam add(a, b) { ghurai_diya a + b }\nadd(1, 2, 3)", "Function `add` expected 2 arguments but got 3")]
#[case("error(\"custom failure\")", "custom failure")]
fn runtime_errors(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(interpret_runtime_error(input).message(), expected);
}

#[test]
fn statements_before_the_error_have_run() {
    let error = interpret_runtime_error("
        dhora a = 1
        a = a + 1
        jodi a == 2 {
            error(a)
        }
    ");

    assert_eq!(error.message(), "2");
}

#[test]
fn deep_recursion_is_a_runtime_error() {
    let error = interpret_runtime_error_with_depth("
        kam forever(n) {
            ghurai_diya forever(n + 1)
        }

        forever(0)
    ", 32);

    assert_eq!(error.message(), "Maximum call depth of 32 exceeded");
}
