use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_builder_style_construction() {
    let diag = Diagnostic::error(ErrorCode::E1003)
        .with_message("constructor parameter `name` has no accessor")
        .with_label(Span::new(10, 14), "parameter declared here")
        .with_secondary_label(Span::new(0, 40), "in this value type")
        .with_note("looked for `name()`, `getName()` and `isName()`")
        .with_suggestion("add an accessor named `name`");

    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.primary_span(), Some(Span::new(10, 14)));
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_primary_span_skips_secondary_labels() {
    let diag = Diagnostic::error(ErrorCode::E1005)
        .with_secondary_label(Span::new(0, 3), "first hook")
        .with_label(Span::new(8, 12), "second hook");
    assert_eq!(diag.primary_span(), Some(Span::new(8, 12)));
}

#[test]
fn test_no_labels_no_primary_span() {
    let diag = Diagnostic::error(ErrorCode::E9001).with_message("boom");
    assert_eq!(diag.primary_span(), None);
}

#[test]
fn test_for_code_picks_severity_from_range() {
    assert_eq!(
        Diagnostic::for_code(ErrorCode::E3002).severity,
        Severity::Warning
    );
    assert_eq!(
        Diagnostic::for_code(ErrorCode::E1001).severity,
        Severity::Error
    );
    assert!(!Diagnostic::warning(ErrorCode::E3001).is_error());
}

#[test]
fn test_display_format() {
    let diag = Diagnostic::warning(ErrorCode::E3003)
        .with_message("setters fell back to parameter identifiers")
        .with_label(Span::new(4, 9), "here")
        .with_note("`setName` is produced twice")
        .with_suggestion("rename one of the accessors");

    let rendered = diag.to_string();
    assert_eq!(
        rendered,
        "warning [E3003]: setters fell back to parameter identifiers\n  \
         --> 4..9: here\n  \
         = note: `setName` is produced twice\n  \
         = help: rename one of the accessors"
    );
}

#[test]
fn test_severity_display() {
    assert_eq!(Severity::Error.to_string(), "error");
    assert_eq!(Severity::Warning.to_string(), "warning");
    assert_eq!(Severity::Note.to_string(), "note");
}
