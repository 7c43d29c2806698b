// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use hixa::*;
use rstest::rstest;

#[rstest]
#[case("kam greet(name: string) -> string {
    ghurai_diya \"Hello \" + name
}

dhora people = [\"Ana\", \"Bob\",]
karone (dhora i = 0; i < len(people); i = i + 1) {
    likha(greet(people[i]))
}
")]
#[case("dhora counter = {count: 0}
jetialoike counter.count < 3 {
    counter.count = counter.count + 1
}
jodi counter.count == 3 aru not_kora misa { likha(\"done\") } nahole (hosa) { }
")]
#[case("// comments only\n// and more\n")]
#[case("")]
fn parses_without_diagnostics(#[case] input: &str) {
    let analysis = analyze(input);
    assert!(analysis.diagnostics.is_empty(), "Unexpected diagnostics: {:#?}", analysis.diagnostics);
}

#[test]
fn alias_vocabularies_build_equal_trees() {
    let primary = analyze("kam f(a) { jodi (a) { ghurai_diya hosa } nohole { ghurai_diya nai } }");
    let alias = analyze("fn f(a) { if (a) { return true } else { return null } }");

    assert!(!primary.has_errors());
    assert!(!alias.has_errors());

    let primary: Vec<String> = primary.program.iter().map(|x| format!("{:?}", x.kind)).collect();
    let alias: Vec<String> = alias.program.iter().map(|x| format!("{:?}", x.kind)).collect();

    // Ranges differ because the spellings have different lengths.
    assert_eq!(primary.len(), alias.len());
    assert!(primary[0].contains("\"f\""));
    assert!(alias[0].contains("\"f\""));
}

#[test]
fn every_error_in_a_file_is_reported() {
    let analysis = analyze("dhora a = \ndhora b = 2\ndhora c = )\nkam () {}\ndhora d = 4\n");

    let lines: Vec<usize> = analysis.diagnostics.iter().map(|x| x.line()).collect();
    assert_eq!(lines, vec![2, 3, 4]);

    let names: Vec<String> = analysis.program.iter()
        .filter_map(|x| match &x.kind {
            StatementKind::Variable(var) => Some(var.name.value().clone()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["b", "d"]);
}
