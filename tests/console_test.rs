// Output console buffer rules, including the empty-append no-op

use formdeck::console::OutputBuffer;

#[test]
fn test_append_grows_buffer_exactly() {
    let mut out = OutputBuffer::new();
    out.append("abc");
    out.append(42);
    assert_eq!(out.text(), "abc42");
}

#[test]
fn test_append_line_adds_newline() {
    let mut out = OutputBuffer::new();
    out.append_line("first");
    out.append_line("second");
    assert_eq!(out.text(), "first\nsecond\n");
}

#[test]
fn test_empty_append_is_a_complete_noop() {
    let mut out = OutputBuffer::new();
    out.append_line("seed");
    let before = out.revision();
    out.append("");
    out.append_line("");
    assert_eq!(out.text(), "seed\n");
    assert_eq!(out.revision(), before, "no refresh for empty output");
}

#[test]
fn test_blank_line_always_appends() {
    let mut out = OutputBuffer::new();
    let before = out.revision();
    out.append_blank_line();
    assert_eq!(out.text(), "\n");
    assert!(out.revision() > before);
}

#[test]
fn test_clear_empties_unconditionally() {
    let mut out = OutputBuffer::new();
    out.append_line("something");
    out.clear();
    assert!(out.is_empty());
    assert_eq!(out.text(), "");

    // clearing an already-empty buffer still refreshes
    let before = out.revision();
    out.clear();
    assert!(out.revision() > before);
}

#[test]
fn test_every_real_append_refreshes_once() {
    let mut out = OutputBuffer::new();
    let before = out.revision();
    out.append("a");
    out.append_line("b");
    out.append_blank_line();
    assert_eq!(out.revision(), before + 3);
}
