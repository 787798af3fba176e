use super::*;
use crate::{indentation_string, leading_whitespace_length};
use pretty_assertions::assert_eq;

fn indent_with(text: &str, offset: u32, table: &FormTable, config: &IndentConfig) -> u32 {
    let source = SourceBuffer::new(text);
    Indenter::new(&source, table, config).indentation_for(offset)
}

fn indent(text: &str, offset: u32) -> u32 {
    indent_with(text, offset, &FormTable::scheme(), &IndentConfig::default())
}

fn indent_at_end(text: &str) -> u32 {
    indent(text, u32::try_from(text.len()).unwrap())
}

fn anchor(text: &str, offset: u32) -> String {
    let source = SourceBuffer::new(text);
    let table = FormTable::scheme();
    let mut indenter = Indenter::new(&source, &table, &IndentConfig::default());
    format!("{:?}", indenter.anchor(offset))
}

// === Anchors ===

#[test]
fn anchor_at_buffer_start() {
    assert_eq!(anchor("", 0), "BufferStart");
    assert_eq!(anchor("; only a comment\n", 17), "BufferStart");
}

#[test]
fn anchor_right_after_open() {
    assert_eq!(anchor("  (", 3), "FirstInList { open: 2 }");
}

#[test]
fn anchor_after_top_level_form() {
    assert_eq!(anchor("(a)\n(b)", 4), "TopLevel { previous: 0 }");
}

#[test]
fn anchor_under_symbol_head() {
    assert_eq!(
        anchor("(define foo", 11),
        r#"SymbolHead { previous: 8, open: 0, symbol: "define" }"#
    );
}

#[test]
fn anchor_under_list_head() {
    assert_eq!(anchor("((f x) y", 8), "ListHead { head: 1 }");
}

#[test]
fn anchor_under_leaf_head() {
    assert_eq!(anchor(r#"("str" a"#, 8), "LeafHead { previous: 7 }");
}

// === Fallbacks ===

#[test]
fn buffer_start_is_column_zero() {
    assert_eq!(indent("", 0), 0);
}

#[test]
fn empty_list_aligns_past_open() {
    assert_eq!(indent_at_end("("), 1);
    assert_eq!(indent_at_end("  ("), 3);
}

#[test]
fn consecutive_top_level_forms_start_at_zero() {
    let text = "(display 1)\n(display 2)\n";
    assert_eq!(indent(text, 12), 0);
    assert_eq!(indent_at_end(text), 0);
}

#[test]
fn list_head_aligns_under_head() {
    assert_eq!(indent_at_end("((f x) y"), 1);
    assert_eq!(indent_at_end("  ((lambda (x) x)\n   1"), 3);
}

#[test]
fn leaf_head_aligns_with_previous() {
    assert_eq!(indent_at_end(r#"("str" a"#), 7);
    // A quoted head is a datum, not a symbol.
    assert_eq!(indent_at_end("('foo a"), 6);
}

// === Policies ===

#[test]
fn definition_indents_body_by_two() {
    assert_eq!(indent("(define foo\n  1)", 12), 2);
    assert_eq!(indent_at_end("    (lambda (x)"), 6);
}

#[test]
fn sequence_indents_body_by_two() {
    assert_eq!(indent_at_end("(begin"), 2);
    assert_eq!(indent_at_end("(begin (a)\n  (b)"), 2);
}

#[test]
fn branch_indents_by_four() {
    let text = "(if #t\n    1\n    2)";
    assert_eq!(indent(text, 7), 4);
    assert_eq!(indent(text, 13), 4);
}

#[test]
fn binding_header_then_body() {
    // Head alone: one preceding form, within the header.
    assert_eq!(indent_at_end("(let"), 4);
    // Head and bindings: past the header, body indentation.
    assert_eq!(indent_at_end("(let ((x 1))"), 2);
    assert_eq!(indent_at_end("(let ((x 1))\n  (display x)"), 2);
}

#[test]
fn binding_threshold_two() {
    assert_eq!(indent_at_end("(do ((i 0))"), 4);
    assert_eq!(indent_at_end("(do ((i 0)) ((= i 3))"), 2);
}

#[test]
fn default_aligns_under_first_argument() {
    assert_eq!(indent_at_end("(foo a b"), 5);
}

#[test]
fn default_aligns_under_previous_line() {
    assert_eq!(indent_at_end("(foo a\n     b"), 5);
    assert_eq!(indent_at_end("(foo a\n  b c"), 2);
}

#[test]
fn default_head_alone_aligns_with_head() {
    assert_eq!(indent_at_end("(foo"), 1);
}

#[test]
fn verbatim_aligns_with_previous_form() {
    let table = FormTable::empty().with_overrides([("foo", IndentPolicy::Verbatim)]);
    let config = IndentConfig::default();
    assert_eq!(indent_with("(foo a b", 8, &table, &config), 7);
}

#[test]
fn overrides_change_dispatch() {
    let table =
        FormTable::scheme().with_overrides([("my-let", IndentPolicy::Binding { threshold: 1 })]);
    let config = IndentConfig::default();
    let text = "(my-let ((x 1))";
    assert_eq!(indent_with(text, 15, &table, &config), 2);
    assert_eq!(indent(text, 15), 8);
}

#[test]
fn tabs_use_configured_width() {
    let table = FormTable::scheme();
    assert_eq!(
        indent_with("\t(define x", 10, &table, &IndentConfig::default()),
        10
    );
    assert_eq!(
        indent_with("\t(define x", 10, &table, &IndentConfig::with_tab_width(4)),
        6
    );
}

#[test]
fn comments_and_strings_are_ignored() {
    assert_eq!(indent_at_end("(define (f) ; (\n  \"(\""), 2);
    assert_eq!(indent_at_end("(foo #\\( b"), 5);
}

#[test]
fn line_comment_ends_at_carriage_return() {
    assert_eq!(indent_at_end("(define (f) ; note\r(if #t\r"), 4);
}

#[test]
fn reindenting_is_idempotent() {
    let text = "(define foo\n1)";
    let line = 12;
    let column = indent(text, line);

    let source = SourceBuffer::new(text);
    let old = leading_whitespace_length(&source, line) as usize;
    let mut fixed = text.to_owned();
    fixed.replace_range(line as usize..line as usize + old, &indentation_string(column));

    assert_eq!(fixed, "(define foo\n  1)");
    assert_eq!(indent(&fixed, line), column);
}
