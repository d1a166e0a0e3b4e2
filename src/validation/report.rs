//! Validation report types for structured error reporting.
//!
//! Reports can be printed for people or serialized for tools.

use std::fmt;

use serde::Serialize;

/// The result of validating a set of options.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ValidationReport {
    /// All issues found during validation.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    /// Adds an issue to the report.
    pub fn add(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    /// Returns the number of errors in the report.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Returns the number of warnings in the report.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Issues with error severity, in the order they were found.
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.error_count() == 0
    }

    /// Returns true if there are no issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return writeln!(f, "Validation passed: no issues found");
        }

        writeln!(
            f,
            "Validation completed with {} error(s) and {} warning(s):",
            self.error_count(),
            self.warning_count()
        )?;
        writeln!(f)?;

        for issue in &self.issues {
            writeln!(f, "  {}", issue)?;
        }

        Ok(())
    }
}

/// A single validation issue (error or warning).
#[derive(Clone, Debug, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,

    /// A stable code for the issue type.
    pub code: IssueCode,

    /// A human-readable description of the issue.
    pub message: String,

    /// The option the issue is about.
    pub field: &'static str,
}

impl ValidationIssue {
    /// Creates a new validation issue.
    pub fn new(
        severity: Severity,
        code: IssueCode,
        message: impl Into<String>,
        field: &'static str,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            field,
        }
    }

    /// Creates an error-severity issue.
    pub fn error(code: IssueCode, message: impl Into<String>, field: &'static str) -> Self {
        Self::new(Severity::Error, code, message, field)
    }

    /// Creates a warning-severity issue.
    pub fn warning(code: IssueCode, message: impl Into<String>, field: &'static str) -> Self {
        Self::new(Severity::Warning, code, message, field)
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN ",
        };
        write!(
            f,
            "[{}] {:?} in '{}': {}",
            severity, self.code, self.field, self.message
        )
    }
}

/// Severity level of a validation issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Severity {
    /// Usable, but probably not what was meant.
    Warning,
    /// A value a drawing or video call would reject.
    Error,
}

/// A stable code identifying the type of validation issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum IssueCode {
    // Draw defaults
    /// Thickness below -1 (-1 means filled).
    InvalidThickness,
    /// Point radius below zero.
    NegativePointRadius,
    /// Font scale that is zero, negative or not finite.
    InvalidScale,
    /// Default color name is not in the registry.
    UnknownColorName,
    /// Default color tuple does not have 1, 3 or 4 channels.
    InvalidColorChannels,
    /// Default color has a channel outside 0..=255.
    ColorOutOfRange,

    // Video defaults
    /// Frame rate that is zero, negative or not finite.
    InvalidFps,

    // Flags
    /// Experimental functionality is switched on.
    ExperimentalEnabled,
}
