//! User-facing diagnostic messages for configuration failures.
//!
//! A failed configuration pass should tell the user what broke, which
//! component it broke on, and what to change. Errors convert into a
//! `Diagnostic` before being shown.

use std::fmt;

/// Common suggestion messages for consistent error reporting.
pub mod suggestions {
    /// Suggestion when a configuration lookup fails.
    pub const UNKNOWN_CONFIGURATION: &str =
        "Register the configuration before referencing it, or check the name for a typo";

    /// Suggestion when a scope bucket already exists.
    pub const DUPLICATE_BUCKET: &str =
        "Each scope installs once per component; remove the second install";

    /// Suggestion when a wiring rule cannot find its target configuration.
    pub const MISSING_TARGET: &str =
        "Declare binaries through the conventions layer so their compile and link configurations exist";

    /// Suggestion when a binary name does not follow the naming convention.
    pub const MALFORMED_BINARY_NAME: &str =
        "Name test executable binaries with a trailing `Executable`";

    /// Suggestion when a declaration configuration cannot host scope names.
    pub const MISSING_TOKEN: &str =
        "Name the declaration configuration `implementation` or `<component>Implementation`";

    /// Suggestion when the extends graph loops.
    pub const EXTENDS_CYCLE: &str = "Remove one extends edge from the reported cycle";
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
    Help,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
            Severity::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Severity level
    pub severity: Severity,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Component the failure was observed on
    pub component: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity: Severity::Error,
            context: Vec::new(),
            suggestions: Vec::new(),
            component: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity: Severity::Warning,
            context: Vec::new(),
            suggestions: Vec::new(),
            component: None,
        }
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Name the component the failure was observed on.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let severity_str = if color {
            match self.severity {
                Severity::Error => "\x1b[1;31merror\x1b[0m",
                Severity::Warning => "\x1b[1;33mwarning\x1b[0m",
                Severity::Note => "\x1b[1;36mnote\x1b[0m",
                Severity::Help => "\x1b[1;32mhelp\x1b[0m",
            }
        } else {
            match self.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
                Severity::Note => "note",
                Severity::Help => "help",
            }
        };

        output.push_str(&format!("{}: {}\n", severity_str, self.message));

        if let Some(ref component) = self.component {
            output.push_str(&format!("  --> component `{}`\n", component));
        }

        for ctx in &self.context {
            output.push_str(&format!("  = note: {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            output.push('\n');
            let help_prefix = if color {
                "\x1b[1;32mhelp\x1b[0m"
            } else {
                "help"
            };
            output.push_str(&format!("{}: consider:\n", help_prefix));
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}
