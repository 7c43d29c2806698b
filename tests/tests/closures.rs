// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use hixa_interpreter::Value;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{evaluate, interpret_and_return_stdout, interpret_statements};

#[test]
fn counter_keeps_its_own_state() {
    let output = interpret_and_return_stdout("
        kam make_counter() {
            dhora count = 0
            kam increment() {
                count = count + 1
                ghurai_diya count
            }
            ghurai_diya increment
        }

        dhora first = make_counter()
        dhora second = make_counter()
        likha(first(), first(), first())
        likha(second())
    ");

    assert_eq!(output, vec!["1 2 3".to_string(), "1".to_string()]);
}

#[test]
fn closures_resolve_names_where_they_were_declared() {
    let value = evaluate("
        dhora x = \"global\"
        kam show() {
            ghurai_diya x
        }

        kam shadow() {
            dhora x = \"local\"
            ghurai_diya show()
        }

        shadow()
    ");

    assert_eq!(value, Value::String("global".into()));
}

#[test]
fn functions_see_later_globals() {
    let value = evaluate("
        kam read() {
            ghurai_diya later
        }

        dhora later = 42
        read()
    ");

    assert_eq!(value, Value::Integer(42));
}

#[test]
fn return_unwinds_nested_loops() {
    let value = evaluate("
        kam find_pair(target) {
            karone (dhora i = 0; i < 10; i = i + 1) {
                dhora j = 0
                jetialoike j < 10 {
                    jodi i * j == target {
                        ghurai_diya [i, j]
                    }
                    j = j + 1
                }
            }
            ghurai_diya nai
        }

        find_pair(12)
    ");

    assert_eq!(value, Value::new_array(vec![Value::Integer(2), Value::Integer(6)]));
}

#[rstest]
#[case("kam f() { }\nf()", Value::Null)]
#[case("kam f() { ghurai_diya }\nf()", Value::Null)]
#[case("kam f() { 5 }\nf()", Value::Null)]
fn functions_without_a_value_return_null(#[case] input: &str, #[case] expected: Value) {
    assert_eq!(evaluate(input), expected);
}

#[test]
fn block_scopes_do_not_leak() {
    let output = interpret_and_return_stdout("
        dhora a = 1
        {
            dhora a = 2
            likha(a)
        }
        likha(a)
    ");

    assert_eq!(output, vec!["2".to_string(), "1".to_string()]);
}

#[test]
fn functions_are_values() {
    interpret_statements("
        kam apply(f, x) {
            ghurai_diya f(x)
        }

        kam double(x) {
            ghurai_diya x * 2
        }

        jodi apply(double, 21) != 42 {
            error(\"apply should double\")
        }

        jodi apply(abs_kora, -3) != 3 {
            error(\"builtins are values too\")
        }
    ");
}

#[test]
fn recursion_within_the_default_depth() {
    let value = evaluate("
        kam count_down(n) {
            jodi n == 0 {
                ghurai_diya 0
            }
            ghurai_diya 1 + count_down(n - 1)
        }

        count_down(50)
    ");

    assert_eq!(value, Value::Integer(50));
}
