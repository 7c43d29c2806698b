// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::interpret_and_return_stdout;

#[rstest]
#[case("nai", "no")]
#[case("misa", "no")]
#[case("hosa", "yes")]
#[case("0", "yes")]
#[case("0.0", "yes")]
#[case("\"\"", "yes")]
#[case("[]", "yes")]
#[case("{}", "yes")]
#[case("likha", "yes")]
fn only_null_and_false_are_falsy(#[case] condition: &str, #[case] expected: &str) {
    let source = format!("
        jodi ({condition}) {{
            likha(\"yes\")
        }} nohole {{
            likha(\"no\")
        }}
    ");

    assert_eq!(interpret_and_return_stdout(&source), vec![expected.to_string()]);
}

#[test]
fn while_stops_on_null() {
    let output = interpret_and_return_stdout("
        dhora queue = [1, 2]
        dhora next = 0
        jetialoike next != nai {
            jodi len(queue) == 0 {
                next = nai
            } nohole {
                next = pop(queue)
                likha(next)
            }
        }
    ");

    assert_eq!(output, vec!["2".to_string(), "1".to_string()]);
}
