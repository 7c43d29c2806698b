// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::interpret_and_return_stdout;

#[rstest]
#[case(
    r#"
        likha("Namaskar!")
    "#,
    &[
        "Namaskar!",
    ],
)]
#[case(
    r#"
        dhora a = 5
        print_kora("a is", a, 2.0, nai, hosa)
    "#,
    &[
        "a is 5 2.0 null true",
    ],
)]
#[case(
    r#"
        kam times_five(a: int) {
            print(a * 5);
        }

        karone (dhora i = 0; i < 4; i = i + 1) {
            times_five(i)
        }
    "#,
    &[
        "0",
        "5",
        "10",
        "15",
    ],
)]
#[case(
    r#"
        dhora items = [1, "two", [3]]
        push(items, {name: "four"})
        likha(items)
        likha(len(items))
    "#,
    &[
        r#"[1, "two", [3], {name: "four"}]"#,
        "4",
    ],
)]
#[case(
    r#"
        dhora n = 3
        jetialoike n > 0 {
            likha(n)
            n = n - 1
        }
        likha("liftoff")
    "#,
    &[
        "3",
        "2",
        "1",
        "liftoff",
    ],
)]
#[case(
    r#"
        kam grade(score) {
            jodi score >= 90 {
                ghurai_diya "A"
            } nahole score >= 50 {
                ghurai_diya "B"
            } nohole {
                ghurai_diya "C"
            }
        }

        likha(grade(95), grade(70), grade(10))
    "#,
    &[
        "A B C",
    ],
)]
#[case(
    r#"
        fn fib(n) {
            if n < 2 { return n }
            return fib(n - 1) + fib(n - 2)
        }

        print(fib(15))
    "#,
    &[
        "610",
    ],
)]
#[case(
    r#"
        dhora a = [1]
        push(a, a)
        likha(a)
        likha(a == copy(a), string(a))
    "#,
    &[
        "[1, [...]]",
        "true [1, [...]]",
    ],
)]
fn interpret_and_return_stdout_tests(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[test]
fn arguments_are_evaluated_before_the_call() {
    let output = interpret_and_return_stdout(r#"
        kam loud(x) {
            likha("evaluating", x)
            ghurai_diya x
        }

        likha(loud(1), loud(2))
    "#);

    assert_eq!(output, vec![
        "evaluating 1".to_string(),
        "evaluating 2".to_string(),
        "1 2".to_string(),
    ]);
}
