use super::*;
use pretty_assertions::assert_eq;
use scm_indent::{IndentPolicy, PolicyParseError};

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn defaults_without_flags() {
    let parsed = parse_options(&args(&["file.scm"])).unwrap();
    assert_eq!(parsed.options, IndentOptions::default());
    assert_eq!(parsed.positional, vec!["file.scm".to_owned()]);
}

#[test]
fn flags_mix_with_positionals() {
    let parsed = parse_options(&args(&["--check", "a.scm", "--tab-width=4", "12"])).unwrap();
    assert!(parsed.options.check);
    assert_eq!(parsed.options.config.tab_width, 4);
    assert_eq!(parsed.positional, args(&["a.scm", "12"]));
}

#[test]
fn policy_overrides_extend_table() {
    let parsed = parse_options(&args(&[
        "--policy=my-let=with:1",
        "--policy=define=none",
        "--policy=define=if",
    ]))
    .unwrap();
    let table = &parsed.options.table;
    assert_eq!(
        table.policy_for("my-let"),
        IndentPolicy::Binding { threshold: 1 }
    );
    assert_eq!(table.policy_for("define"), IndentPolicy::Branch);
    assert_eq!(table.policy_for("lambda"), IndentPolicy::Definition);
}

#[test]
fn rejects_zero_tab_width() {
    let err = parse_options(&args(&["--tab-width=0"])).unwrap_err();
    assert!(matches!(err, CliError::InvalidTabWidth(ref w) if w == "0"));
}

#[test]
fn rejects_non_numeric_tab_width() {
    let err = parse_options(&args(&["--tab-width=wide"])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "tab width must be a positive integer, found 'wide'"
    );
}

#[test]
fn rejects_unknown_option() {
    let err = parse_options(&args(&["--verbose"])).unwrap_err();
    assert!(matches!(err, CliError::UnknownOption(ref o) if o == "--verbose"));
}

#[test]
fn reports_bad_policy() {
    let err = parse_options(&args(&["--policy=foo=sideways"])).unwrap_err();
    assert!(matches!(
        err,
        CliError::Policy(PolicyParseError::UnknownPolicy(ref p)) if p == "sideways"
    ));
    assert_eq!(err.to_string(), "unknown indentation policy `sideways`");
}

#[test]
fn reports_malformed_override() {
    let err = parse_options(&args(&["--policy=foo"])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "override `foo` is not of the form SYMBOL=POLICY"
    );
}

// === Positionals ===

#[test]
fn positionals_in_order() {
    let parsed = parse_options(&args(&["a.scm", "--check", "12"])).unwrap();
    assert_eq!(parsed.positionals(["file path", "offset"]).unwrap(), ["a.scm", "12"]);
}

#[test]
fn missing_positional_is_named() {
    let parsed = parse_options(&args(&["a.scm"])).unwrap();
    let err = parsed.positionals(["file path", "offset"]).unwrap_err();
    assert!(matches!(err, CliError::MissingArgument("offset")));
    assert_eq!(err.to_string(), "missing offset");

    let parsed = parse_options(&args(&["--check"])).unwrap();
    let err = parsed.positionals(["file path"]).unwrap_err();
    assert_eq!(err.to_string(), "missing file path");
}

#[test]
fn extra_positional_is_rejected() {
    let parsed = parse_options(&args(&["a.scm", "b.scm"])).unwrap();
    let err = parsed.positionals(["file path"]).unwrap_err();
    assert!(matches!(err, CliError::UnexpectedArgument(ref a) if a == "b.scm"));
    assert_eq!(err.to_string(), "unexpected argument 'b.scm'");
}
