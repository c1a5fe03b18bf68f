//! Classpath-style resource lookup.
//!
//! A [`ResourceLocator`] resolves a logical name such as
//! `config/app.properties` to a readable resource, independent of the
//! process working directory. [`SearchPath`] looks in an ordered list of
//! directories; [`EmbeddedResources`] serves bytes compiled into the binary.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};

use tracing::trace;

/// Resolves logical resource names.
pub trait ResourceLocator {
    /// Opens the resource named `path`.
    ///
    /// Returns `Ok(None)` when no such resource exists and `Err` when the
    /// lookup itself fails.
    ///
    /// # Errors
    ///
    /// Returns the I/O error that prevented the lookup.
    fn open(&self, path: &str) -> io::Result<Option<Box<dyn Read + '_>>>;
}

impl<L: ResourceLocator + ?Sized> ResourceLocator for &L {
    fn open(&self, path: &str) -> io::Result<Option<Box<dyn Read + '_>>> {
        (**self).open(path)
    }
}

impl<L: ResourceLocator + ?Sized> ResourceLocator for Box<L> {
    fn open(&self, path: &str) -> io::Result<Option<Box<dyn Read + '_>>> {
        (**self).open(path)
    }
}

/// Converts a logical name into a relative path that cannot leave its root.
fn relative_name(path: &str) -> Option<&Path> {
    let relative = Path::new(path.trim_start_matches('/'));
    let contained = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    (contained && relative.components().next().is_some()).then_some(relative)
}

/// An ordered list of resource root directories. The first root holding the
/// name as a regular file wins.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    roots: Vec<PathBuf>,
}

impl SearchPath {
    /// Creates an empty search path.
    #[must_use]
    pub fn new() -> Self {
        Self { roots: Vec::new() }
    }

    /// Appends a root directory.
    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// Returns the roots in search order.
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Returns the first existing file for `path`, without opening it.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<PathBuf> {
        let relative = relative_name(path)?;
        self.roots
            .iter()
            .map(|root| root.join(relative))
            .find(|candidate| candidate.is_file())
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for SearchPath {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            roots: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl ResourceLocator for SearchPath {
    fn open(&self, path: &str) -> io::Result<Option<Box<dyn Read + '_>>> {
        let Some(found) = self.find(path) else {
            trace!(path, "resource not on search path");
            return Ok(None);
        };
        trace!(path, file = %found.display(), "resolved resource");
        let file = File::open(found)?;
        Ok(Some(Box::new(file)))
    }
}

/// An in-memory table of named resources, typically filled from
/// `include_bytes!`. A leading `/` on a lookup name is ignored.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResources {
    entries: HashMap<String, Cow<'static, [u8]>>,
}

impl EmbeddedResources {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Adds a resource, replacing any previous one with the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        self.insert(name, bytes);
        self
    }

    /// Adds a resource, replacing any previous one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Cow<'static, [u8]>>) {
        let name = name.into();
        let name = name.trim_start_matches('/').to_string();
        self.entries.insert(name, bytes.into());
    }

    /// Returns true if a resource is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name.trim_start_matches('/'))
    }

    /// Returns the number of resources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ResourceLocator for EmbeddedResources {
    fn open(&self, path: &str) -> io::Result<Option<Box<dyn Read + '_>>> {
        Ok(self
            .entries
            .get(path.trim_start_matches('/'))
            .map(|bytes| Box::new(&**bytes) as Box<dyn Read + '_>))
    }
}
