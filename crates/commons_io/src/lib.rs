//! Java-style properties file access for Commons.
//!
//! This crate provides:
//! - [`Properties`] - An ordered string-to-string configuration set
//! - [`load_from_path`], [`load_from_stream`] - Read properties from a file or any reader
//! - [`save`], [`save_with`] - Write properties, optionally creating parent directories
//! - [`PropertiesFiles`] - Load and probe resources through a [`ResourceLocator`]
//! - [`SearchPath`], [`EmbeddedResources`] - Directory and in-memory locators
//! - [`ConfigurationError`] - The single error type, wrapping I/O causes
//!
//! ```
//! use commons_io::{EmbeddedResources, PropertiesFiles};
//!
//! let files = PropertiesFiles::new(
//!     EmbeddedResources::new().with("app.properties", b"host = localhost\n".as_slice()),
//! );
//! let props = files.load_from_classpath("app.properties")?;
//! assert_eq!(props.get("host"), Some("localhost"));
//! # Ok::<(), commons_io::ConfigurationError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod files;
pub mod properties;
pub mod resource;
pub mod text;

pub use error::{ConfigurationError, ErrorKind, Result};
pub use files::{
    HEADER_COMMENT, PropertiesFiles, SaveOptions, load_from_path, load_from_stream, save, save_with,
};
pub use properties::Properties;
pub use resource::{EmbeddedResources, ResourceLocator, SearchPath};
