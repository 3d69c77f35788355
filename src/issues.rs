//! Diagnostic types produced during class extraction.
//!
//! Extraction never fails as a whole: a call site that cannot be evaluated or a
//! file that cannot be read is recorded as an [`ExtractionWarning`] and skipped.
//! The CLI reporter decides how to present them.

use std::fmt;

/// Why a call site or file was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WarningKind {
    /// The call argument is not a parseable expression.
    ParseError,
    /// The call's argument list was still open at end of file.
    UnterminatedCall,
    /// The file could not be read.
    UnreadableFile,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::ParseError => write!(f, "parse-error"),
            WarningKind::UnterminatedCall => write!(f, "unterminated-call"),
            WarningKind::UnreadableFile => write!(f, "unreadable-file"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExtractionWarning {
    pub file_path: String,
    /// 1-based line; 0 for file-level warnings.
    pub line: usize,
    pub column: usize,
    pub kind: WarningKind,
    /// Condensed preview of the offending call text (empty for file-level warnings).
    pub snippet: String,
    pub error: String,
}

impl ExtractionWarning {
    pub fn unreadable(file_path: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            file_path: file_path.into(),
            line: 0,
            column: 0,
            kind: WarningKind::UnreadableFile,
            snippet: String::new(),
            error: error.to_string(),
        }
    }

    /// `path:line:col`, or just the path for file-level warnings.
    pub fn location(&self) -> String {
        if self.line == 0 {
            self.file_path.clone()
        } else {
            format!("{}:{}:{}", self.file_path, self.line, self.column)
        }
    }
}

impl fmt::Display for ExtractionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location(), self.error)?;
        if !self.snippet.is_empty() {
            write!(f, " in `{}`", self.snippet)?;
        }
        write!(f, " [{}]", self.kind)
    }
}
