use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using CcdDiffError
pub type Result<T> = std::result::Result<T, CcdDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Comparison roots
    NotFound,

    // Input files
    Io,
    InvalidJson,
    UnsupportedStructure,
    Traversal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::InvalidJson => "ERR_INVALID_JSON",
            ExErrorKind::UnsupportedStructure => "ERR_UNSUPPORTED_STRUCTURE",
            ExErrorKind::Traversal => "ERR_TRAVERSAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling plus the
/// operation and file that produced the failure.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<PathBuf>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file or directory context
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for configuration comparison runs
///
/// Every variant is terminal for the run: a root that cannot be read or a
/// file that cannot be parsed is never treated as "no differences".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CcdDiffError {
    /// A comparison root is missing or is not a directory
    #[error("{label} directory not found: {}", path.display())]
    RootNotFound { label: String, path: PathBuf },

    /// A discovered file could not be read
    #[error("Failed to read {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// A discovered file is not valid JSON
    #[error("Failed to parse JSON from {}: {message}", path.display())]
    InvalidJson { path: PathBuf, message: String },

    /// A discovered file parsed, but its top level is neither an array nor an object
    #[error("Unsupported JSON structure in {}: {found}", path.display())]
    UnsupportedStructure { path: PathBuf, found: String },

    /// Walking a comparison root failed part way
    #[error("Failed to traverse {}: {message}", path.display())]
    Traversal { path: PathBuf, message: String },
}

impl CcdDiffError {
    /// Build an `Io` error from a `std::io::Error`
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        CcdDiffError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// Build an `InvalidJson` error from a `serde_json::Error`
    pub fn invalid_json(path: &Path, err: serde_json::Error) -> Self {
        CcdDiffError::InvalidJson {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

/// Conversion from CcdDiffError to the structured ExError
impl From<CcdDiffError> for ExError {
    fn from(err: CcdDiffError) -> Self {
        match err {
            CcdDiffError::RootNotFound { label, path } => ExError::new(ExErrorKind::NotFound)
                .with_op("ensure_directory")
                .with_path(path)
                .with_message(format!("{} directory not found", label)),

            CcdDiffError::Io { path, message } => ExError::new(ExErrorKind::Io)
                .with_op("load_records")
                .with_path(path)
                .with_message(message),

            CcdDiffError::InvalidJson { path, message } => ExError::new(ExErrorKind::InvalidJson)
                .with_op("load_records")
                .with_path(path)
                .with_message(message),

            CcdDiffError::UnsupportedStructure { path, found } => {
                ExError::new(ExErrorKind::UnsupportedStructure)
                    .with_op("load_records")
                    .with_path(path)
                    .with_message(format!("top-level JSON value is {}", found))
            }

            CcdDiffError::Traversal { path, message } => ExError::new(ExErrorKind::Traversal)
                .with_op("discover_files")
                .with_path(path)
                .with_message(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_unique() {
        let kinds = [
            ExErrorKind::NotFound,
            ExErrorKind::Io,
            ExErrorKind::InvalidJson,
            ExErrorKind::UnsupportedStructure,
            ExErrorKind::Traversal,
        ];
        let codes: std::collections::BTreeSet<&str> = kinds.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_ex_error_display_includes_context() {
        let err = ExError::new(ExErrorKind::InvalidJson)
            .with_op("load_records")
            .with_path("/tmp/x.json")
            .with_message("expected value at line 1 column 1");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_INVALID_JSON] in operation 'load_records'"));
        assert!(rendered.contains("expected value"));
        assert!(rendered.contains("/tmp/x.json"));
    }

    #[test]
    fn test_root_not_found_message() {
        let err = CcdDiffError::RootNotFound {
            label: "Base".to_string(),
            path: PathBuf::from("/nope"),
        };
        assert_eq!(err.to_string(), "Base directory not found: /nope");
    }
}
