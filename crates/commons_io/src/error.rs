//! Error types for properties file access.
//!
//! Every failure is reported as a [`ConfigurationError`]. The underlying I/O
//! cause, when there is one, stays reachable through
//! [`std::error::Error::source`].

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// The single error type for loading and saving properties.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct ConfigurationError {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    source: Option<io::Error>,
}

impl ConfigurationError {
    /// Creates a new error with the given kind and no cause.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Attaches the underlying I/O cause.
    #[must_use]
    pub fn with_source(mut self, source: io::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Returns the underlying I/O cause, if any.
    #[must_use]
    pub fn io_error(&self) -> Option<&io::Error> {
        self.source.as_ref()
    }

    /// Creates a blank path error.
    #[must_use]
    pub fn blank_path() -> Self {
        Self::new(ErrorKind::BlankPath)
    }

    /// Creates a missing stream error.
    #[must_use]
    pub fn missing_stream() -> Self {
        Self::new(ErrorKind::MissingStream)
    }

    /// Creates a missing properties error.
    #[must_use]
    pub fn missing_properties() -> Self {
        Self::new(ErrorKind::MissingProperties)
    }

    /// Creates a resource not found error.
    #[must_use]
    pub fn resource_not_found(path: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResourceNotFound { path: path.into() })
    }

    /// Creates a resource lookup failure wrapping its cause.
    #[must_use]
    pub fn lookup(path: impl Into<String>, source: io::Error) -> Self {
        Self::new(ErrorKind::Lookup { path: path.into() }).with_source(source)
    }

    /// Creates a file open failure wrapping its cause.
    #[must_use]
    pub fn open(path: &Path, source: io::Error) -> Self {
        Self::new(ErrorKind::Open {
            path: path.to_path_buf(),
        })
        .with_source(source)
    }

    /// Creates a stream read failure wrapping its cause.
    #[must_use]
    pub fn read(source: io::Error) -> Self {
        Self::new(ErrorKind::Read).with_source(source)
    }

    /// Creates a parse error at the given 1-indexed line.
    #[must_use]
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse {
            line,
            message: message.into(),
        })
    }

    /// Creates a directory creation failure wrapping its cause.
    #[must_use]
    pub fn create_directory(path: &Path, source: io::Error) -> Self {
        Self::new(ErrorKind::CreateDirectory {
            path: path.to_path_buf(),
        })
        .with_source(source)
    }

    /// Creates a serialization failure wrapping its cause.
    #[must_use]
    pub fn serialize(path: &Path, source: io::Error) -> Self {
        Self::new(ErrorKind::Serialize {
            path: path.to_path_buf(),
        })
        .with_source(source)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The path argument was empty or only whitespace.
    #[error("path is blank")]
    BlankPath,

    /// No input stream was supplied.
    #[error("no input stream was supplied")]
    MissingStream,

    /// No properties were supplied to save.
    #[error("no properties were supplied")]
    MissingProperties,

    /// The resource locator has no resource under this name.
    #[error("resource not found: {path}")]
    ResourceNotFound {
        /// The logical resource name.
        path: String,
    },

    /// The resource locator itself failed.
    #[error("failed to look up resource '{path}'")]
    Lookup {
        /// The logical resource name.
        path: String,
    },

    /// A file could not be opened or created.
    #[error("failed to open file '{}'", .path.display())]
    Open {
        /// The file path.
        path: PathBuf,
    },

    /// Reading from the input stream failed.
    #[error("failed to read properties stream")]
    Read,

    /// The input is not valid properties text.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// Line number (1-indexed) where the bad entry starts.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// A parent directory could not be created.
    #[error("failed to create directory '{}'", .path.display())]
    CreateDirectory {
        /// The directory that could not be created.
        path: PathBuf,
    },

    /// Writing the properties out failed.
    #[error("failed to write properties to '{}'", .path.display())]
    Serialize {
        /// The target file path.
        path: PathBuf,
    },
}
