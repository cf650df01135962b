//! Exlint: exception-expectation analyzer for Java test code
//!
//! This library inspects typed Java test ASTs for a specific anti-pattern:
//! an exception-expectation block (try/catch ending in `fail()`, or an
//! `assertThrows` call with a lambda) whose guarded code contains more than
//! one statement able to throw the expected exception type. Such a test
//! cannot prove which statement actually threw.
//!
//! The host driver owns the parsed, type-resolved tree (see [`tree`] and
//! [`semantic`]); this crate only borrows nodes, analyzes them, and emits
//! [`Diagnostic`] values.

pub mod analyzer;
pub mod config;
pub mod semantic;
pub mod tree;

use serde::{Deserialize, Serialize};

use crate::tree::CompilationUnit;

/// An issue found during analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// Rule that found this issue
    pub rule: RuleId,
    /// Severity of the issue
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Primary location (the reporting anchor)
    pub location: Location,
    /// Supporting evidence: one entry per candidate throwing call site
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary: Vec<SecondaryLocation>,
}

/// An auxiliary source position attached to a diagnostic, pointing at
/// supporting evidence rather than the primary finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryLocation {
    /// Explanatory label for this location
    pub message: String,
    /// Location in the file
    pub location: Location,
}

/// Severity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// Analysis rules shipped with this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    /// More than one call in the guarded region may throw the expected
    /// checked exception
    OneExpectedCheckedException,
    /// More than one call in the guarded region may throw the expected
    /// runtime exception
    OneExpectedRuntimeException,
}

impl RuleId {
    /// Parse a kebab-case rule id as used in config files
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "one-expected-checked-exception" => Some(RuleId::OneExpectedCheckedException),
            "one-expected-runtime-exception" => Some(RuleId::OneExpectedRuntimeException),
            _ => None,
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleId::OneExpectedCheckedException => write!(f, "one-expected-checked-exception"),
            RuleId::OneExpectedRuntimeException => write!(f, "one-expected-runtime-exception"),
        }
    }
}

/// Location in a source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
    /// End line (optional)
    pub end_line: Option<usize>,
    /// End column (optional)
    pub end_column: Option<usize>,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            end_line: None,
            end_column: None,
        }
    }

    pub fn with_end(mut self, end_line: usize, end_column: usize) -> Self {
        self.end_line = Some(end_line);
        self.end_column = Some(end_column);
        self
    }
}

impl From<tree::Span> for Location {
    fn from(span: tree::Span) -> Self {
        Location::new(span.line, span.column).with_end(span.end_line, span.end_column)
    }
}

/// Public API: analyze a compilation unit with the default rule set and an
/// optional config for rule selection and severity overrides.
pub fn analyze_compilation_unit(
    unit: &CompilationUnit,
    config: Option<&config::Config>,
) -> anyhow::Result<Vec<Diagnostic>> {
    let analyzer = match config {
        Some(config) => analyzer::Analyzer::from_config(config)?,
        None => analyzer::Analyzer::new(),
    };
    Ok(analyzer.analyze(unit))
}
