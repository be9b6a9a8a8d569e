//! Non-fatal extraction diagnostics.
//!
//! A diagnostic explains why one marker was skipped. It never stops the
//! extraction of the rest of the file.

use std::fmt;

/// Why a marker could not be turned into a translation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// `id` or `description` attribute is not a static string.
    InvalidProp { prop: String },
    /// Component marker without children and without `id`.
    MissingId,
    /// Component children are not a single static text or expression.
    NonStaticContent,
    /// First argument of a function marker does not fold to an object.
    NonStaticArgument,
    /// Function marker called with the wrong number of arguments.
    InvalidArity { count: usize },
    /// Marker folded to an empty key (no message and no id).
    EmptyKey,
}

impl DiagnosticKind {
    /// Whether an alias-wrapper file drops this diagnostic.
    ///
    /// Usage mistakes (wrong arity, empty marker without id) are reported
    /// even inside wrappers.
    pub fn is_suppressible(&self) -> bool {
        !matches!(
            self,
            DiagnosticKind::InvalidArity { .. } | DiagnosticKind::MissingId
        )
    }

    /// Short rule name used by the reporter.
    pub fn rule(&self) -> &'static str {
        match self {
            DiagnosticKind::InvalidProp { .. } => "invalid-prop",
            DiagnosticKind::MissingId => "missing-id",
            DiagnosticKind::NonStaticContent => "non-static-content",
            DiagnosticKind::NonStaticArgument => "non-static-argument",
            DiagnosticKind::InvalidArity { .. } => "invalid-arity",
            DiagnosticKind::EmptyKey => "empty-key",
        }
    }

    /// Human-readable explanation for a marker named `marker`.
    pub fn message(&self, marker: &str) -> String {
        match self {
            DiagnosticKind::InvalidProp { prop } => format!(
                "<{marker}> prop={prop} should be a statically evaluable object.\n\
                 Example: <{marker} id=\"optional id\" description=\"optional description\">Message</{marker}>\n\
                 Dynamically constructed values are not allowed, because they prevent translations to be extracted."
            ),
            DiagnosticKind::MissingId => format!(
                "<{marker}> without children must have id prop.\n\
                 Example: <{marker} id=\"my-id\" />"
            ),
            DiagnosticKind::NonStaticContent => format!(
                "{marker} content could not be extracted. It has to be a static string and use optional but static props, \
                 like <{marker} id=\"my-id\" description=\"my-description\">text</{marker}>."
            ),
            DiagnosticKind::NonStaticArgument => format!(
                "{marker}() first arg should be a statically evaluable object.\n\
                 Example: {marker}({{message: \"text\", id: \"optional.id\", description: \"optional description\"}})\n\
                 Dynamically constructed values are not allowed, because they prevent translations to be extracted."
            ),
            DiagnosticKind::InvalidArity { count } => {
                format!("{marker} function only takes 1 or 2 args, got {count}")
            }
            DiagnosticKind::EmptyKey => format!(
                "{marker} must provide a non-empty message or id, because translations are keyed by them."
            ),
        }
    }
}

/// A human-readable warning attached to one marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file_path: String,
    /// 1-based line of the marker, when the span is known.
    pub line: Option<usize>,
    /// Source text of the whole marker.
    pub snippet: String,
    pub text: String,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(
        kind: DiagnosticKind,
        marker: &str,
        file_path: impl Into<String>,
        line: Option<usize>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            text: kind.message(marker),
            file_path: file_path.into(),
            line,
            snippet: snippet.into(),
            kind,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.text)?;
        match self.line {
            Some(line) => writeln!(f, "File: {} at line {}", self.file_path, line)?,
            None => writeln!(f, "File: {} at line ?", self.file_path)?,
        }
        write!(f, "Full code: {}", self.snippet)
    }
}
