//! Context variable tests
//!
//! Tests for registration, lazy resolution and the safe defaults used when no
//! document has focus.

mod common;

use common::focused;
use docvars::context::PositionContext;
use docvars::document::EditorDocument;
use docvars::util::PARAGRAPH_SEPARATOR;
use docvars::variables::{
    DocumentVariable, Value, VariableError, VariableKind, VariableRegistry,
    CURRENT_DOCUMENT_COLUMN, CURRENT_DOCUMENT_COLUMN_COUNT, CURRENT_DOCUMENT_FONT_SIZE,
    CURRENT_DOCUMENT_ROW, CURRENT_DOCUMENT_ROW_COUNT, CURRENT_DOCUMENT_SELECTION,
    CURRENT_DOCUMENT_WORD_UNDER_CURSOR,
};

fn registry() -> VariableRegistry {
    VariableRegistry::with_document_variables().unwrap()
}

// ========================================================================
// Registration
// ========================================================================

#[test]
fn test_builtin_names_in_order() {
    let names: Vec<_> = registry().names().map(str::to_string).collect();
    assert_eq!(
        names,
        vec![
            CURRENT_DOCUMENT_SELECTION,
            CURRENT_DOCUMENT_ROW,
            CURRENT_DOCUMENT_COLUMN,
            CURRENT_DOCUMENT_ROW_COUNT,
            CURRENT_DOCUMENT_COLUMN_COUNT,
            CURRENT_DOCUMENT_FONT_SIZE,
            CURRENT_DOCUMENT_WORD_UNDER_CURSOR,
        ]
    );
}

#[test]
fn test_builtins_have_descriptions() {
    for var in registry().variables() {
        assert!(
            !var.description().is_empty(),
            "{} has no description",
            var.name()
        );
    }
}

#[test]
fn test_registering_builtins_twice_fails() {
    let mut registry = registry();
    let err = registry.register_document_variables().unwrap_err();
    assert_eq!(
        err,
        VariableError::DuplicateName {
            name: CURRENT_DOCUMENT_SELECTION.to_string()
        }
    );
    assert_eq!(registry.len(), DocumentVariable::ALL.len());
}

#[test]
fn test_duplicate_name_keeps_original() {
    let mut registry = registry();
    let result = registry.register_int(
        CURRENT_DOCUMENT_ROW,
        "shadow",
        |_: &dyn PositionContext| Some(Value::Int(-1)),
    );
    assert!(matches!(result, Err(VariableError::DuplicateName { .. })));

    let doc = focused("a\nb\nc", None, 4);
    assert_eq!(registry.resolve(CURRENT_DOCUMENT_ROW, &doc), Ok(Value::Int(3)));
}

#[test]
fn test_unknown_variable_is_an_error() {
    let doc = focused("text", None, 0);
    assert_eq!(
        registry().resolve("CurrentDocument:Nope", &doc),
        Err(VariableError::UnknownVariable {
            name: "CurrentDocument:Nope".to_string()
        })
    );
}

#[test]
fn test_custom_resolver_reads_context() {
    let mut registry = VariableRegistry::new();
    registry
        .register_int(
            "CurrentDocument:Offset",
            "Cursor offset",
            |ctx: &dyn PositionContext| {
                let snapshot = ctx.snapshot();
                snapshot
                    .has_focused_document
                    .then(|| Value::Int(snapshot.cursor_offset as i64))
            },
        )
        .unwrap();

    let doc = focused("hello", None, 4);
    let nothing: Option<EditorDocument> = None;
    assert_eq!(registry.resolve("CurrentDocument:Offset", &doc), Ok(Value::Int(4)));
    assert_eq!(
        registry.resolve("CurrentDocument:Offset", &nothing),
        Ok(Value::Int(0))
    );
    assert_eq!(
        registry.get("CurrentDocument:Offset").map(|v| v.kind()),
        Some(VariableKind::Int)
    );
}

// ========================================================================
// Resolution against a focused document
// ========================================================================

#[test]
fn test_row_and_column() {
    let doc = focused("first\nsecond\nthird", None, 9);
    let registry = registry();
    assert_eq!(registry.resolve(CURRENT_DOCUMENT_ROW, &doc), Ok(Value::Int(2)));
    assert_eq!(registry.resolve(CURRENT_DOCUMENT_COLUMN, &doc), Ok(Value::Int(3)));
}

#[test]
fn test_first_position_is_row_one_column_zero() {
    let doc = focused("abc", None, 0);
    let registry = registry();
    assert_eq!(registry.resolve(CURRENT_DOCUMENT_ROW, &doc), Ok(Value::Int(1)));
    assert_eq!(registry.resolve(CURRENT_DOCUMENT_COLUMN, &doc), Ok(Value::Int(0)));
}

#[test]
fn test_viewport_and_font_size() {
    let doc = EditorDocument::with_text("abc")
        .with_viewport(33, 101)
        .with_font_point_size(17);
    let registry = registry();
    assert_eq!(registry.resolve(CURRENT_DOCUMENT_ROW_COUNT, &doc), Ok(Value::Int(33)));
    assert_eq!(
        registry.resolve(CURRENT_DOCUMENT_COLUMN_COUNT, &doc),
        Ok(Value::Int(101))
    );
    assert_eq!(registry.resolve(CURRENT_DOCUMENT_FONT_SIZE, &doc), Ok(Value::Int(17)));
}

#[test]
fn test_selection_text() {
    let doc = focused("hello world", Some(6), 11);
    assert_eq!(
        registry().resolve(CURRENT_DOCUMENT_SELECTION, &doc),
        Ok(Value::String("world".to_string()))
    );
}

#[test]
fn test_selection_normalizes_paragraph_separator() {
    let text = format!("one{}two{}three", PARAGRAPH_SEPARATOR, PARAGRAPH_SEPARATOR);
    let doc = focused(&text, Some(0), 7);
    assert_eq!(
        registry().resolve(CURRENT_DOCUMENT_SELECTION, &doc),
        Ok(Value::String("one\ntwo".to_string()))
    );
}

#[test]
fn test_no_selection_is_empty_string() {
    let doc = focused("hello world", None, 3);
    assert_eq!(
        registry().resolve(CURRENT_DOCUMENT_SELECTION, &doc),
        Ok(Value::String(String::new()))
    );
}

#[test]
fn test_word_under_cursor() {
    let registry = registry();
    let inside = focused("let value = 1;", None, 6);
    let after = focused("let value = 1;", None, 9);
    let between = focused("a  b", None, 2);
    assert_eq!(
        registry.resolve(CURRENT_DOCUMENT_WORD_UNDER_CURSOR, &inside),
        Ok(Value::String("value".to_string()))
    );
    assert_eq!(
        registry.resolve(CURRENT_DOCUMENT_WORD_UNDER_CURSOR, &after),
        Ok(Value::String("value".to_string()))
    );
    assert_eq!(
        registry.resolve(CURRENT_DOCUMENT_WORD_UNDER_CURSOR, &between),
        Ok(Value::String(String::new()))
    );
}

#[test]
fn test_resolution_is_never_cached() {
    let registry = registry();
    let mut doc = focused("one\ntwo\nthree", None, 0);
    assert_eq!(registry.resolve(CURRENT_DOCUMENT_ROW, &doc), Ok(Value::Int(1)));

    doc = doc.with_cursor(9);
    assert_eq!(registry.resolve(CURRENT_DOCUMENT_ROW, &doc), Ok(Value::Int(3)));
}

// ========================================================================
// No focused document
// ========================================================================

#[test]
fn test_unfocused_yields_safe_defaults() {
    let registry = registry();
    let nothing: Option<EditorDocument> = None;
    for var in registry.variables() {
        let value = registry.resolve(var.name(), &nothing).unwrap();
        match var.kind() {
            VariableKind::Int => assert_eq!(value, Value::Int(0), "{}", var.name()),
            VariableKind::String => {
                assert_eq!(value, Value::String(String::new()), "{}", var.name())
            }
        }
    }
}

// ========================================================================
// Process-wide registry
// ========================================================================

#[test]
fn test_global_registry_has_builtins() {
    let global = VariableRegistry::global();
    for var in DocumentVariable::ALL {
        assert!(global.contains(var.name()), "missing {}", var.name());
    }
    assert!(std::ptr::eq(global, VariableRegistry::global()));
}

#[test]
fn test_install_global_after_init_is_rejected() {
    VariableRegistry::global();
    let rejected = VariableRegistry::install_global(VariableRegistry::new());
    assert!(rejected.is_err());
}
