#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use backslash_ir::testing::tokenize;
use backslash_ir::{Token, TokenList};
use pretty_assertions::assert_eq;

use super::*;

const BUILTINS: &[&str] = &["strlen", "count", "json_encode", "array_key_exists", "is_array"];

fn rule(config: FunctionInvocationConfig) -> NativeFunctionInvocation {
    NativeFunctionInvocation::configure(config, BUILTINS).unwrap()
}

fn fixed(source: &str, config: FunctionInvocationConfig) -> String {
    let mut tokens = tokenize(source);
    rule(config).fix(&mut tokens);
    tokens.to_source()
}

#[test]
fn definition_metadata() {
    let rule = rule(FunctionInvocationConfig::new());
    assert_eq!(rule.name(), "native_function_invocation");
    assert!(rule.is_risky());

    let options: Vec<&str> = rule.definition().options.iter().map(|o| o.name).collect();
    assert_eq!(options, ["exclude", "opcache-only"]);
    assert!(!rule.definition().samples.is_empty());
}

#[test]
fn rule_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NativeFunctionInvocation>();

    let rule: Box<dyn Fixer> = Box::new(rule(FunctionInvocationConfig::new()));
    assert_eq!(rule.name(), "native_function_invocation");
}

#[test]
fn configure_rejects_invalid_exclude() {
    let config = FunctionInvocationConfig::new().with_exclude(["strlen", ""]);
    let err = NativeFunctionInvocation::configure(config, BUILTINS).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidExcludeEntry { .. }));
}

#[test]
fn configure_builds_catalog() {
    let rule = rule(FunctionInvocationConfig::new().with_exclude(["COUNT"]));
    assert_eq!(rule.catalog().len(), BUILTINS.len() - 1);
    assert!(!rule.catalog().contains("count"));
    assert_eq!(rule.config().exclude(), ["COUNT"]);
}

#[test]
fn candidate_requires_identifiers() {
    let rule = rule(FunctionInvocationConfig::new());
    assert!(rule.is_candidate(&tokenize("strlen($a);")));
    assert!(!rule.is_candidate(&tokenize("<?php $a = $b + 1;")));
    assert!(!rule.is_candidate(&TokenList::new()));
}

#[test]
fn fixes_calls() {
    assert_eq!(
        fixed(
            "<?php\nif (is_array($a)) { return count($a) + strlen($s); }\n",
            FunctionInvocationConfig::new()
        ),
        "<?php\nif (\\is_array($a)) { return \\count($a) + \\strlen($s); }\n"
    );
}

#[test]
fn fixes_nested_calls() {
    assert_eq!(
        fixed("strlen(json_encode(count($a)));", FunctionInvocationConfig::new()),
        "\\strlen(\\json_encode(\\count($a)));"
    );
}

#[test]
fn leaves_non_candidates_untouched() {
    let source = "<?php $a = [1, 2, 3];";
    assert_eq!(fixed(source, FunctionInvocationConfig::new()), source);
}

#[test]
fn leaves_other_tokens_untouched() {
    let source = "$x->count($a); Foo::strlen($b); new Foo\\json_encode(); function is_array() {}";
    assert_eq!(fixed(source, FunctionInvocationConfig::new()), source);
}

#[test]
fn call_sites_does_not_mutate() {
    let rule = rule(FunctionInvocationConfig::new());
    let tokens = tokenize("count($a); strlen($b);");
    assert_eq!(rule.call_sites(&tokens), [0, 6]);
    assert_eq!(tokens.to_source(), "count($a); strlen($b);");
}

#[test]
fn fixes_through_a_trait_object() {
    let fixer: &dyn Fixer = &rule(FunctionInvocationConfig::new());
    let mut tokens = tokenize("count($a);");
    fixer.fix(&mut tokens);
    assert_eq!(tokens[0], Token::ns_separator());
    assert_eq!(tokens.to_source(), "\\count($a);");
}
