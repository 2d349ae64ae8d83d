//! Named context variables describing the focused document.
//!
//! A [`VariableRegistry`] maps a unique name to a resolver. Resolution is
//! always lazy: every lookup asks the resolver again against the context it is
//! handed, nothing is memoized. A resolver that cannot produce a value (no
//! focused document) yields the safe default for the variable's kind, `0` or
//! the empty string, so a template expanded without a focused document
//! degrades to empty substitutions instead of failing.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;
use thiserror::Error;

use crate::context::PositionContext;
use crate::util::normalize_paragraph_separators;

pub const CURRENT_DOCUMENT_SELECTION: &str = "CurrentDocument:Selection";
pub const CURRENT_DOCUMENT_ROW: &str = "CurrentDocument:Row";
pub const CURRENT_DOCUMENT_COLUMN: &str = "CurrentDocument:Column";
pub const CURRENT_DOCUMENT_ROW_COUNT: &str = "CurrentDocument:RowCount";
pub const CURRENT_DOCUMENT_COLUMN_COUNT: &str = "CurrentDocument:ColumnCount";
pub const CURRENT_DOCUMENT_FONT_SIZE: &str = "CurrentDocument:FontSize";
pub const CURRENT_DOCUMENT_WORD_UNDER_CURSOR: &str = "CurrentDocument:WordUnderCursor";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariableError {
    /// A variable with this name is already registered
    #[error("variable {name:?} is already registered")]
    DuplicateName { name: String },

    /// No variable with this name is registered
    #[error("unknown variable {name:?}")]
    UnknownVariable { name: String },
}

/// Value type a variable produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    String,
    Int,
}

/// A resolved variable value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Int(i64),
}

impl Value {
    /// Safe default substituted when a value cannot be computed
    pub fn default_for(kind: VariableKind) -> Self {
        match kind {
            VariableKind::String => Value::String(String::new()),
            VariableKind::Int => Value::Int(0),
        }
    }

    pub fn kind(&self) -> VariableKind {
        match self {
            Value::String(_) => VariableKind::String,
            Value::Int(_) => VariableKind::Int,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::String(_) => None,
        }
    }

    fn from_count(count: usize) -> Self {
        Value::Int(i64::try_from(count).unwrap_or(i64::MAX))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{}", n),
        }
    }
}

/// Computes a variable's value from the context at lookup time.
///
/// Returns None when the value cannot be computed; the registry substitutes
/// the kind's safe default.
pub trait Resolve: Send + Sync {
    fn resolve(&self, ctx: &dyn PositionContext) -> Option<Value>;
}

impl<F> Resolve for F
where
    F: Fn(&dyn PositionContext) -> Option<Value> + Send + Sync,
{
    fn resolve(&self, ctx: &dyn PositionContext) -> Option<Value> {
        self(ctx)
    }
}

/// Owned resolver as stored by the registry
pub type Resolver = Box<dyn Resolve>;

/// Built-in variables describing the focused document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentVariable {
    Selection,
    Row,
    Column,
    RowCount,
    ColumnCount,
    FontSize,
    WordUnderCursor,
}

impl DocumentVariable {
    /// All built-ins in registration order
    pub const ALL: [DocumentVariable; 7] = [
        DocumentVariable::Selection,
        DocumentVariable::Row,
        DocumentVariable::Column,
        DocumentVariable::RowCount,
        DocumentVariable::ColumnCount,
        DocumentVariable::FontSize,
        DocumentVariable::WordUnderCursor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DocumentVariable::Selection => CURRENT_DOCUMENT_SELECTION,
            DocumentVariable::Row => CURRENT_DOCUMENT_ROW,
            DocumentVariable::Column => CURRENT_DOCUMENT_COLUMN,
            DocumentVariable::RowCount => CURRENT_DOCUMENT_ROW_COUNT,
            DocumentVariable::ColumnCount => CURRENT_DOCUMENT_COLUMN_COUNT,
            DocumentVariable::FontSize => CURRENT_DOCUMENT_FONT_SIZE,
            DocumentVariable::WordUnderCursor => CURRENT_DOCUMENT_WORD_UNDER_CURSOR,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DocumentVariable::Selection => "Selected text within the current document.",
            DocumentVariable::Row => {
                "Line number of the text cursor position in current document (starts with 1)."
            }
            DocumentVariable::Column => {
                "Column number of the text cursor position in current document (starts with 0)."
            }
            DocumentVariable::RowCount => "Number of lines visible in current document.",
            DocumentVariable::ColumnCount => "Number of columns visible in current document.",
            DocumentVariable::FontSize => "Current document's font size in points.",
            DocumentVariable::WordUnderCursor => {
                "Word under the current document's text cursor."
            }
        }
    }

    pub fn kind(self) -> VariableKind {
        match self {
            DocumentVariable::Selection | DocumentVariable::WordUnderCursor => {
                VariableKind::String
            }
            _ => VariableKind::Int,
        }
    }
}

impl Resolve for DocumentVariable {
    fn resolve(&self, ctx: &dyn PositionContext) -> Option<Value> {
        let snapshot = ctx.snapshot();
        if !snapshot.has_focused_document {
            return None;
        }
        let value = match self {
            DocumentVariable::Selection => {
                Value::String(normalize_paragraph_separators(&ctx.selected_text()))
            }
            DocumentVariable::Row => Value::from_count(snapshot.line_number),
            DocumentVariable::Column => Value::from_count(snapshot.column_number),
            DocumentVariable::RowCount => Value::from_count(snapshot.visible_row_count),
            DocumentVariable::ColumnCount => Value::from_count(snapshot.visible_column_count),
            DocumentVariable::FontSize => Value::Int(i64::from(snapshot.font_point_size)),
            DocumentVariable::WordUnderCursor => Value::String(snapshot.word_under_cursor),
        };
        Some(value)
    }
}

/// A registered variable
pub struct Variable {
    name: String,
    description: String,
    kind: VariableKind,
    resolver: Resolver,
}

impl Variable {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description for UI display
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    /// Resolve against `ctx`, falling back to the kind's safe default
    pub fn resolve(&self, ctx: &dyn PositionContext) -> Value {
        match self.resolver.resolve(ctx) {
            Some(value) if value.kind() == self.kind => value,
            Some(value) => {
                tracing::warn!(
                    variable = %self.name,
                    expected = ?self.kind,
                    got = ?value.kind(),
                    "resolver produced a value of the wrong kind"
                );
                Value::default_for(self.kind)
            }
            None => Value::default_for(self.kind),
        }
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variable")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Mapping from variable name to resolver, in registration order
#[derive(Debug, Default)]
pub struct VariableRegistry {
    variables: Vec<Variable>,
    by_name: HashMap<String, usize>,
}

static GLOBAL: OnceLock<VariableRegistry> = OnceLock::new();

impl VariableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in document variables
    pub fn with_document_variables() -> Result<Self, VariableError> {
        let mut registry = Self::new();
        registry.register_document_variables()?;
        Ok(registry)
    }

    /// The process-wide registry.
    ///
    /// Holds the built-in document variables unless [`install_global`] ran
    /// first. Read-only once created.
    ///
    /// [`install_global`]: Self::install_global
    pub fn global() -> &'static VariableRegistry {
        GLOBAL.get_or_init(|| match Self::with_document_variables() {
            Ok(registry) => registry,
            Err(e) => panic!("cannot initialize the global variable registry: {}", e),
        })
    }

    /// Install `registry` as the process-wide registry.
    ///
    /// Fails, handing the registry back, if the global one already exists.
    pub fn install_global(registry: VariableRegistry) -> Result<&'static Self, VariableRegistry> {
        GLOBAL.set(registry)?;
        Ok(Self::global())
    }

    /// Register a variable. Names are unique; re-registering is an error.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: VariableKind,
        resolver: impl Resolve + 'static,
    ) -> Result<(), VariableError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(VariableError::DuplicateName { name });
        }
        tracing::debug!(variable = %name, ?kind, "registering variable");
        self.by_name.insert(name.clone(), self.variables.len());
        self.variables.push(Variable {
            name,
            description: description.into(),
            kind,
            resolver: Box::new(resolver),
        });
        Ok(())
    }

    /// Register a string variable
    pub fn register_string(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        resolver: impl Resolve + 'static,
    ) -> Result<(), VariableError> {
        self.register(name, description, VariableKind::String, resolver)
    }

    /// Register an integer variable
    pub fn register_int(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        resolver: impl Resolve + 'static,
    ) -> Result<(), VariableError> {
        self.register(name, description, VariableKind::Int, resolver)
    }

    /// Register every [`DocumentVariable`]
    pub fn register_document_variables(&mut self) -> Result<(), VariableError> {
        for var in DocumentVariable::ALL {
            self.register(var.name(), var.description(), var.kind(), var)?;
        }
        Ok(())
    }

    /// Resolve `name` against `ctx` now
    pub fn resolve(&self, name: &str, ctx: &dyn PositionContext) -> Result<Value, VariableError> {
        let variable = self
            .get(name)
            .ok_or_else(|| VariableError::UnknownVariable {
                name: name.to_string(),
            })?;
        let value = variable.resolve(ctx);
        tracing::debug!(variable = %name, %value, "resolved variable");
        Ok(value)
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.by_name.get(name).map(|&idx| &self.variables[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Registered variables in registration order
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(|v| v.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
