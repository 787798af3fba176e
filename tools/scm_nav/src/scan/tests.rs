//! Scans run on hand-built class tables, one character per byte:
//! `(` open, `)` close, `a` atom, `_` space, `;` comment, `'` prefix,
//! `"` string open, `s` string body.

use super::*;
use pretty_assertions::assert_eq;

fn table(shape: &str) -> Vec<ByteClass> {
    shape
        .chars()
        .map(|c| match c {
            '(' => ByteClass::Open,
            ')' => ByteClass::Close,
            'a' => ByteClass::Atom,
            '_' => ByteClass::Space,
            ';' => ByteClass::Comment,
            '\'' => ByteClass::Prefix,
            '"' => ByteClass::StringOpen,
            's' => ByteClass::String,
            other => panic!("unknown class marker {other:?}"),
        })
        .collect()
}

fn extent(start: usize, body: usize, end: usize, shape: Shape) -> Option<Extent> {
    Some(Extent {
        start,
        body,
        end,
        shape,
    })
}

// === Trivia ===

#[test]
fn skip_trivia_both_directions() {
    let t = table("a__;;_a");
    assert_eq!(skip_trivia_forward(&t, 1), 6);
    assert_eq!(skip_trivia_backward(&t, 6), 1);
    assert_eq!(skip_trivia_forward(&t, 0), 0);
    assert_eq!(skip_trivia_forward(&t, 99), t.len());
}

// === Depth-Threaded Matching ===

#[test]
fn close_forward_skips_nested_lists() {
    let t = table("(a(a)(a)a)_a");
    assert_eq!(close_forward(&t, 1, 0), Some(10));
}

#[test]
fn close_forward_resumes_at_depth() {
    // Starting inside the inner list at depth 1 returns past the outer close.
    let t = table("(a(a)a)");
    assert_eq!(close_forward(&t, 3, 1), Some(7));
    assert_eq!(close_forward(&t, 3, 0), Some(5));
}

#[test]
fn close_forward_unterminated() {
    assert_eq!(close_forward(&table("(a(a)"), 1, 0), None);
}

#[test]
fn open_backward_skips_nested_lists() {
    let t = table("(a(a)(a)a)");
    assert_eq!(open_backward(&t, 9, 0), Some(0));
    assert_eq!(open_backward(&t, 4, 0), Some(2));
}

#[test]
fn open_backward_resumes_at_depth() {
    let t = table("(a(a)a)");
    // One close already passed: the inner open is consumed, the outer is found.
    assert_eq!(open_backward(&t, 3, 1), Some(0));
}

#[test]
fn open_backward_at_top_level() {
    assert_eq!(open_backward(&table("(a)_a"), 5, 0), None);
}

// === Forward Forms ===

#[test]
fn form_forward_atom_after_trivia() {
    assert_eq!(form_forward(&table("_;_aa_"), 0), extent(3, 3, 5, Shape::Atom));
}

#[test]
fn form_forward_list_and_string() {
    assert_eq!(form_forward(&table("(a(a))a"), 0), extent(0, 0, 6, Shape::List));
    assert_eq!(form_forward(&table("\"ss_a"), 0), extent(0, 0, 3, Shape::String));
}

#[test]
fn form_forward_includes_prefix() {
    assert_eq!(form_forward(&table("''(a)"), 0), extent(0, 2, 5, Shape::List));
}

#[test]
fn form_forward_unterminated_list_runs_to_end() {
    assert_eq!(form_forward(&table("(a(a"), 0), extent(0, 0, 4, Shape::List));
}

#[test]
fn form_forward_fails_before_close_and_at_end() {
    assert_eq!(form_forward(&table("(a_)"), 2), None);
    assert_eq!(form_forward(&table("a__"), 1), None);
}

#[test]
fn form_forward_dangling_prefix() {
    assert_eq!(
        form_forward(&table("'_)"), 0),
        extent(0, 0, 1, Shape::DanglingPrefix)
    );
    assert_eq!(
        form_forward(&table("'_'__"), 0),
        extent(0, 0, 3, Shape::DanglingPrefix)
    );
}

#[test]
fn form_forward_prefix_skips_trivia_to_datum() {
    assert_eq!(form_forward(&table("'_a"), 0), extent(0, 2, 3, Shape::Atom));
    assert_eq!(
        form_forward(&table("';_'_(a)"), 0),
        extent(0, 5, 8, Shape::List)
    );
}

// === Backward Forms ===

#[test]
fn form_backward_atom_before_trivia() {
    assert_eq!(form_backward(&table("_aa_;"), 5), extent(1, 1, 3, Shape::Atom));
}

#[test]
fn form_backward_list_includes_prefix() {
    assert_eq!(form_backward(&table("a_'(a)_"), 7), extent(2, 3, 6, Shape::List));
}

#[test]
fn form_backward_string() {
    assert_eq!(form_backward(&table("a\"ss"), 4), extent(1, 1, 4, Shape::String));
}

#[test]
fn form_backward_fails_after_open_and_at_start() {
    assert_eq!(form_backward(&table("(_a"), 2), None);
    assert_eq!(form_backward(&table("__a"), 2), None);
}

#[test]
fn form_backward_unmatched_close_runs_to_start() {
    assert_eq!(form_backward(&table("a_a)"), 4), extent(0, 0, 4, Shape::List));
}

#[test]
fn form_backward_prefix_across_trivia() {
    assert_eq!(form_backward(&table("a_'_a"), 5), extent(2, 4, 5, Shape::Atom));
    assert_eq!(
        form_backward(&table("(';_'_(a)"), 9),
        extent(1, 6, 9, Shape::List)
    );
}

#[test]
fn form_backward_dangling_prefix() {
    assert_eq!(
        form_backward(&table("(a_'"), 4),
        extent(3, 3, 4, Shape::DanglingPrefix)
    );
}
