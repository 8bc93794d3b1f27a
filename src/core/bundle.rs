//! Certificate lookup by resource name.
//!
//! The core only ever consumes certificate bytes. A [`CertificateBundle`]
//! is the seam where an application resolves a certificate name to those
//! bytes, whether from disk, embedded assets, or a key server.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File extension of certificate resources.
pub const CERTIFICATE_EXTENSION: &str = "der";

/// A named store of DER-encoded certificates.
pub trait CertificateBundle {
    /// Returns the DER bytes of the certificate called `name`, if present.
    fn certificate_der(&self, name: &str) -> Option<Vec<u8>>;
}

/// Resolves `name` to `<root>/<name>.der`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryBundle {
    root: PathBuf,
}

impl DirectoryBundle {
    /// Creates a bundle rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The bundle's root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> Option<PathBuf> {
        // Names are single path components; anything else is not in the bundle.
        let single_component = !matches!(name, "" | "." | "..")
            && !name.contains(std::path::is_separator);
        if !single_component {
            return None;
        }
        Some(self.root.join(format!("{name}.{CERTIFICATE_EXTENSION}")))
    }
}

impl CertificateBundle for DirectoryBundle {
    fn certificate_der(&self, name: &str) -> Option<Vec<u8>> {
        let path = self.path_for(name)?;
        match std::fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "certificate resource not readable");
                None
            }
        }
    }
}

/// An in-memory bundle, e.g. for certificates compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct MemoryBundle {
    certificates: HashMap<String, Vec<u8>>,
}

impl MemoryBundle {
    /// Creates an empty bundle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the certificate called `name`.
    #[must_use]
    pub fn with_certificate(mut self, name: impl Into<String>, der: impl Into<Vec<u8>>) -> Self {
        self.certificates.insert(name.into(), der.into());
        self
    }
}

impl CertificateBundle for MemoryBundle {
    fn certificate_der(&self, name: &str) -> Option<Vec<u8>> {
        self.certificates.get(name).cloned()
    }
}
