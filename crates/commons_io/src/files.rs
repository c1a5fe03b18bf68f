//! Loading and saving properties files.
//!
//! Each call is a self-contained open, parse or serialize, close cycle. The
//! handle is dropped before the call returns on every path, including errors.
//! All path arguments are trimmed; a path that trims to nothing is rejected
//! with [`ErrorKind::BlankPath`](crate::ErrorKind::BlankPath).

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{ConfigurationError, Result};
use crate::properties::Properties;
use crate::resource::ResourceLocator;
use crate::text;

/// Comment written as the first line of every saved file.
pub const HEADER_COMMENT: &str = "IP Configurations";

/// Options for [`save_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveOptions {
    /// Create missing parent directories of the target file before writing.
    /// Loading never creates directories.
    pub create_parent_dirs: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            create_parent_dirs: true,
        }
    }
}

/// Loads properties through a [`ResourceLocator`], the counterpart of a
/// classpath lookup.
#[derive(Debug, Clone, Default)]
pub struct PropertiesFiles<L> {
    locator: L,
}

impl<L: ResourceLocator> PropertiesFiles<L> {
    /// Creates a loader resolving names through `locator`.
    #[must_use]
    pub fn new(locator: L) -> Self {
        Self { locator }
    }

    /// Returns the locator.
    #[must_use]
    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Loads the resource named `logical_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is blank, the locator fails or has no
    /// such resource, or the resource is not valid properties text.
    pub fn load_from_classpath(&self, logical_path: &str) -> Result<Properties> {
        let path = logical_path.trim();
        if path.is_empty() {
            return Err(ConfigurationError::blank_path());
        }

        let stream = self
            .locator
            .open(path)
            .map_err(|e| ConfigurationError::lookup(path, e))?
            .ok_or_else(|| ConfigurationError::resource_not_found(path))?;

        let properties = load_from_stream(Some(stream))?;
        debug!(path, entries = properties.len(), "loaded properties resource");
        Ok(properties)
    }

    /// Reports whether `path` resolves through the locator.
    ///
    /// Returns `false` for a blank path. Otherwise this returns `true` as soon
    /// as the lookup completes without error, **even when the locator found
    /// nothing**. A lookup error is swallowed and yields `false`. Existing
    /// callers rely on this behavior; use [`load_from_classpath`] to detect a
    /// missing resource.
    ///
    /// [`load_from_classpath`]: Self::load_from_classpath
    #[must_use]
    pub fn exists(&self, path: &str) -> bool {
        let path = path.trim();
        if path.is_empty() {
            return false;
        }
        match self.locator.open(path) {
            Ok(_resource) => true,
            Err(e) => {
                debug!(path, error = %e, "resource lookup failed");
                false
            }
        }
    }
}

fn normalize(path: &Path) -> Result<PathBuf> {
    let normalized = match path.to_str() {
        Some(s) => PathBuf::from(s.trim()),
        None => path.to_path_buf(),
    };
    if normalized.as_os_str().is_empty() {
        return Err(ConfigurationError::blank_path());
    }
    Ok(normalized)
}

/// Loads a properties file from the filesystem.
///
/// # Errors
///
/// Returns an error if the path is blank, the file cannot be opened or read,
/// or its contents are not valid properties text.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Properties> {
    let path = normalize(path.as_ref())?;
    let file = File::open(&path).map_err(|e| ConfigurationError::open(&path, e))?;

    let properties = load_from_stream(Some(file))?;
    debug!(path = %path.display(), entries = properties.len(), "loaded properties file");
    Ok(properties)
}

/// Decodes UTF-8, falling back to ISO-8859-1 where every byte is a code point.
fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| {
        trace!("stream is not UTF-8, decoding as ISO-8859-1");
        e.into_bytes().into_iter().map(char::from).collect()
    })
}

/// Parses properties from a stream, taking ownership of it.
///
/// The stream is dropped before this returns, whether parsing succeeds or
/// not. Input is decoded as UTF-8, or as ISO-8859-1 when it is not valid
/// UTF-8.
///
/// # Errors
///
/// Returns an error if `stream` is `None`, reading fails, or the contents are
/// not valid properties text.
pub fn load_from_stream<R: Read>(stream: Option<R>) -> Result<Properties> {
    let Some(mut stream) = stream else {
        return Err(ConfigurationError::missing_stream());
    };

    let mut bytes = Vec::new();
    let read = stream.read_to_end(&mut bytes);
    drop(stream);
    read.map_err(ConfigurationError::read)?;

    let input = decode(bytes);
    text::parse(&input)
}

/// Saves properties to `path`, creating missing parent directories.
///
/// # Errors
///
/// See [`save_with`].
pub fn save<P: AsRef<Path>>(properties: Option<&Properties>, path: P) -> Result<()> {
    save_with(properties, path, SaveOptions::default())
}

/// Saves properties to `path`, overwriting any existing file. The first line
/// is always the [`HEADER_COMMENT`].
///
/// # Errors
///
/// Returns an error if `properties` is `None`, the path is blank, a parent
/// directory cannot be created, the file cannot be created, or writing fails.
pub fn save_with<P: AsRef<Path>>(
    properties: Option<&Properties>,
    path: P,
    options: SaveOptions,
) -> Result<()> {
    let properties = properties.ok_or_else(ConfigurationError::missing_properties)?;
    let path = normalize(path.as_ref())?;

    if options.create_parent_dirs {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            trace!(dir = %parent.display(), "creating parent directories");
            fs::create_dir_all(parent)
                .map_err(|e| ConfigurationError::create_directory(parent, e))?;
        }
    }

    let file = File::create(&path).map_err(|e| ConfigurationError::open(&path, e))?;
    let mut writer = BufWriter::new(file);
    text::store(properties, &mut writer, Some(HEADER_COMMENT))
        .and_then(|()| writer.flush())
        .map_err(|e| ConfigurationError::serialize(&path, e))?;

    debug!(path = %path.display(), entries = properties.len(), "saved properties file");
    Ok(())
}
