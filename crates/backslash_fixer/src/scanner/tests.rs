use backslash_ir::testing::tokenize;
use pretty_assertions::assert_eq;

use super::*;

const BUILTINS: &[&str] = &[
    "strlen",
    "count",
    "in_array",
    "json_encode",
    "array_key_exists",
];

fn scan_names(source: &str, config: &FunctionInvocationConfig) -> Vec<String> {
    let tokens = tokenize(source);
    let catalog = TargetCatalog::build(config, BUILTINS);
    scan(&tokens, &catalog, config)
        .into_iter()
        .map(|i| tokens[i].text().to_owned())
        .collect()
}

fn default_names(source: &str) -> Vec<String> {
    scan_names(source, &FunctionInvocationConfig::new())
}

fn opcache_names(source: &str) -> Vec<String> {
    scan_names(source, &FunctionInvocationConfig::new().with_opcache_only(true))
}

#[test]
fn plain_call_qualifies() {
    assert_eq!(default_names("strlen($x);"), ["strlen"]);
}

#[test]
fn returns_ascending_indices_of_identifiers() {
    let tokens = tokenize("$a = strlen(count($b));");
    let config = FunctionInvocationConfig::new();
    let catalog = TargetCatalog::build(&config, BUILTINS);
    let indices = scan(&tokens, &catalog, &config);
    assert_eq!(indices, [4, 6]);
    assert!(indices.iter().all(|&i| tokens[i].is(TokenKind::Identifier)));
}

#[test]
fn trivia_between_name_and_paren_is_skipped() {
    assert_eq!(default_names("strlen /* why */ ($x);"), ["strlen"]);
    assert_eq!(default_names("strlen\n    ($x);"), ["strlen"]);
}

#[test]
fn call_name_is_case_insensitive() {
    assert_eq!(default_names("STRLEN($x);"), ["STRLEN"]);
}

#[test]
fn method_calls_are_skipped() {
    assert!(default_names("$obj->strlen($x);").is_empty());
    assert!(default_names("$obj?->strlen($x);").is_empty());
    assert!(default_names("$obj-> /* c */ strlen($x);").is_empty());
}

#[test]
fn static_calls_are_skipped() {
    assert!(default_names("Foo::strlen($x);").is_empty());
    assert!(default_names("static::count($x);").is_empty());
}

#[test]
fn constructor_calls_are_skipped() {
    assert!(default_names("new strlen($x);").is_empty());
    assert!(default_names("new Foo\\strlen();").is_empty());
}

#[test]
fn declarations_are_skipped() {
    assert!(default_names("function strlen($x) { return 1; }").is_empty());
    assert!(default_names("function &strlen($x) { return 1; }").is_empty());
}

#[test]
fn reference_assignment_still_qualifies() {
    assert_eq!(default_names("$a = &count($b);"), ["count"]);
}

#[test]
fn qualified_and_namespaced_calls_are_skipped() {
    assert!(default_names("\\strlen($x);").is_empty());
    assert!(default_names("Foo\\strlen($x);").is_empty());
    assert!(default_names("\\Foo\\Bar\\strlen($x);").is_empty());
    assert!(default_names("namespace\\strlen($x);").is_empty());
}

#[test]
fn names_not_followed_by_call_are_skipped() {
    assert!(default_names("$f = 'strlen'; $g = strlen;").is_empty());
    assert!(default_names("strlen").is_empty());
    assert!(default_names("const COUNT = 1;").is_empty());
}

#[test]
fn unknown_functions_are_skipped() {
    assert!(default_names("my_strlen($x); MyClass($y);").is_empty());
}

#[test]
fn language_constructs_are_not_identifiers() {
    assert!(default_names("isset($x); empty($y); array(1);").is_empty());
}

#[test]
fn excluded_names_are_skipped() {
    let config = FunctionInvocationConfig::new().with_exclude(["JSON_encode"]);
    assert_eq!(
        scan_names(
            "json_encode($options); array_key_exists('foo', $options);",
            &config
        ),
        ["array_key_exists"]
    );
}

#[test]
fn no_identifiers_no_call_sites() {
    assert!(default_names("<?php $a = 1 + 2;").is_empty());
    assert!(default_names("").is_empty());
}

#[test]
fn in_array_without_opcache_mode_always_qualifies() {
    assert_eq!(default_names("in_array($n, $a);"), ["in_array"]);
}

#[test]
fn opcache_in_array_requires_literal_true() {
    assert!(opcache_names("in_array($n, $a);").is_empty());
    assert_eq!(opcache_names("in_array($n, $a, true);"), ["in_array"]);
    assert!(opcache_names("in_array($n, $a, false);").is_empty());
    assert!(opcache_names("in_array($n, $a, $flag);").is_empty());
}

#[test]
fn opcache_in_array_true_is_case_insensitive() {
    assert_eq!(opcache_names("in_array($n, $a, TRUE);"), ["in_array"]);
    assert_eq!(opcache_names("IN_ARRAY($n, $a, True /* strict */ );"), ["IN_ARRAY"]);
}

#[test]
fn opcache_in_array_true_must_be_the_last_argument() {
    assert!(opcache_names("in_array($n, $a, f(true));").is_empty());
    assert_eq!(opcache_names("in_array(f($n), g($a, 1), true);"), ["in_array"]);
}

#[test]
fn opcache_in_array_unclosed_call_is_skipped() {
    assert!(opcache_names("in_array($n, $a, true").is_empty());
}

#[test]
fn opcache_mode_skips_uncurated_functions() {
    assert_eq!(opcache_names("json_encode(strlen($s));"), ["strlen"]);
}

#[test]
fn scanning_leaves_stream_untouched() {
    let tokens = tokenize("strlen($x); count($y);");
    let before = tokens.clone();
    let config = FunctionInvocationConfig::new();
    let catalog = TargetCatalog::build(&config, BUILTINS);
    let _ = scan(&tokens, &catalog, &config);
    assert_eq!(tokens, before);
}
