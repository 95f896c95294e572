use super::*;
use pretty_assertions::assert_eq;

fn error_at(code: ErrorCode, message: &str, start: u32) -> Diagnostic {
    Diagnostic::error(code)
        .with_message(message)
        .with_label(Span::new(start, start + 1), "here")
}

#[test]
fn test_flush_sorts_by_position() {
    let source = "int a;\nint b;\nint c;\n";
    let table = LineOffsetTable::build(source);
    let mut queue = DiagnosticQueue::new();

    assert!(queue.add_with_source(error_at(ErrorCode::E2003, "third", 18), source, &table));
    assert!(queue.add_with_source(error_at(ErrorCode::E2003, "first", 4), source, &table));
    assert!(queue.add_with_source(error_at(ErrorCode::E2003, "second", 11), source, &table));

    let messages: Vec<String> = queue.flush().into_iter().map(|d| d.message).collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
    assert_eq!(queue.error_count(), 0);
}

#[test]
fn test_unsorted_keeps_report_order() {
    let config = DiagnosticConfig {
        sort: false,
        ..DiagnosticConfig::unlimited()
    };
    let mut queue = DiagnosticQueue::with_config(config);
    queue.add(error_at(ErrorCode::E2001, "b", 0), 3, 1);
    queue.add(error_at(ErrorCode::E2001, "a", 0), 1, 1);
    let messages: Vec<String> = queue.flush().into_iter().map(|d| d.message).collect();
    assert_eq!(messages, vec!["b", "a"]);
}

#[test]
fn test_deduplicates_same_line_same_message() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(error_at(ErrorCode::E2003, "undefined symbol `y`", 3), 1, 4));
    assert!(!queue.add(error_at(ErrorCode::E2003, "undefined symbol `y`", 9), 1, 10));
    assert!(queue.add(error_at(ErrorCode::E2003, "undefined symbol `y`", 20), 2, 1));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn test_unlimited_keeps_duplicates() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    for _ in 0..25 {
        assert!(queue.add(error_at(ErrorCode::E2001, "same", 0), 1, 1));
    }
    assert!(!queue.limit_reached());
    assert_eq!(queue.flush().len(), 25);
}

#[test]
fn test_error_limit() {
    let config = DiagnosticConfig {
        error_limit: 2,
        deduplicate: false,
        sort: true,
    };
    let mut queue = DiagnosticQueue::with_config(config);
    assert!(queue.add(error_at(ErrorCode::E2001, "one", 0), 1, 1));
    assert!(queue.add(error_at(ErrorCode::E2001, "two", 0), 2, 1));
    assert!(queue.limit_reached());
    assert!(!queue.add(error_at(ErrorCode::E2001, "three", 0), 3, 1));
    assert_eq!(queue.suppressed_count(), 1);
    assert_eq!(queue.peek().count(), 2);
}

#[test]
fn test_warnings_bypass_limit() {
    let config = DiagnosticConfig {
        error_limit: 1,
        ..DiagnosticConfig::default()
    };
    let mut queue = DiagnosticQueue::with_config(config);
    assert!(queue.add(error_at(ErrorCode::E2001, "one", 0), 1, 1));
    let warning = Diagnostic::warning(ErrorCode::E2001).with_message("heads up");
    assert!(queue.add(warning, 2, 1));
}

#[test]
fn test_too_many_errors() {
    let diag = too_many_errors(10, 4, Span::new(0, 1));
    assert_eq!(diag.code, ErrorCode::E9002);
    assert_eq!(diag.notes, vec!["4 further errors were not shown".to_string()]);
}
