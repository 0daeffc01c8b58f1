//! Per-declaration diagnostics collected during a generation round.
//!
//! A diagnostic names the offending declaration and is advisory: it never
//! stops processing of other declarations. The host decides what to do with
//! the collected entries after the round (fail the build, print warnings).

use std::fmt;

/// One error tied to a single marked declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub declaration: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. Error for {}", self.message, self.declaration)
    }
}

/// Ordered collection of the round's diagnostics.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for `declaration` and mirror it to the `log` facade.
    pub fn error(&mut self, declaration: impl Into<String>, message: impl Into<String>) {
        let diagnostic = Diagnostic {
            declaration: declaration.into(),
            message: message.into(),
        };
        log::error!("{diagnostic}");
        self.entries.push(diagnostic);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
