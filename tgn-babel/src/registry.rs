//! Typesetter registry for backend discovery and selection
//!
//! Backends are registered explicitly under a unique name, together with a factory that builds
//! a configured [`Backend`] from an option map. Registering a name twice fails at registration
//! time, so a bad registry is caught at startup, before any document is produced.

use crate::data::VerseDatabase;
use crate::error::{Result, TgnError};
use crate::formats::{html, plain, sile, tex};
use crate::typesetter::{Backend, Typesetter};
use std::collections::HashMap;
use tracing::debug;

/// Flat `key → value` options handed to backend factories
pub type BackendOptions = HashMap<String, String>;

/// Builds a configured backend
pub type BackendFactory = fn(&BackendOptions, &VerseDatabase) -> Result<Box<dyn Backend>>;

struct Entry {
    description: &'static str,
    factory: BackendFactory,
}

/// Registry of typesetting backends
///
/// # Examples
///
/// ```ignore
/// let registry = TypesetterRegistry::with_defaults()?;
/// let mut ts = registry.create("tex", &BackendOptions::new(), &db)?;
/// ts.start(std::io::stdout())?;
/// ```
pub struct TypesetterRegistry {
    entries: HashMap<String, Entry>,
}

impl TypesetterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        TypesetterRegistry {
            entries: HashMap::new(),
        }
    }

    /// Register a backend factory under `name`
    ///
    /// Fails with [`TgnError::DuplicateRegistration`] if the name is taken.
    pub fn register(
        &mut self,
        name: &str,
        description: &'static str,
        factory: BackendFactory,
    ) -> Result<()> {
        if self.entries.contains_key(name) {
            return Err(TgnError::DuplicateRegistration(name.to_string()));
        }
        debug!(typesetter = name, "registered typesetter");
        self.entries.insert(
            name.to_string(),
            Entry {
                description,
                factory,
            },
        );
        Ok(())
    }

    /// Check if a backend exists
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn description(&self, name: &str) -> Option<&'static str> {
        self.entries.get(name).map(|entry| entry.description)
    }

    /// List all registered typesetter names (sorted)
    pub fn list_typesetters(&self) -> Vec<String> {
        let mut names: Vec<_> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }

    /// Build the named backend with the given options
    pub fn backend(
        &self,
        name: &str,
        options: &BackendOptions,
        db: &VerseDatabase,
    ) -> Result<Box<dyn Backend>> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| TgnError::TypesetterNotFound(name.to_string()))?;
        (entry.factory)(options, db)
    }

    /// Build an unstarted [`Typesetter`] for the named backend
    pub fn create<'a>(
        &self,
        name: &str,
        options: &BackendOptions,
        db: &'a VerseDatabase,
    ) -> Result<Typesetter<'a>> {
        let backend = self.backend(name, options, db)?;
        Ok(Typesetter::new(name, backend, db))
    }

    /// Create a registry with the built-in backends
    pub fn with_defaults() -> Result<Self> {
        let mut registry = Self::new();

        registry.register(
            plain::NAME,
            "Fixed-column plain text",
            |options, db| Ok(Box::new(plain::PlainTextBackend::from_options(options, db)?)),
        )?;
        registry.register(
            html::NAME,
            "HTML5 document with embedded CSS",
            |options, _| Ok(Box::new(html::HtmlBackend::from_options(options)?)),
        )?;
        registry.register(
            tex::NAME,
            "Plain TeX with marginal references",
            |options, _| Ok(Box::new(tex::PlainTexBackend::from_options(options)?)),
        )?;
        registry.register(
            sile::NAME,
            "Inline SILE prose with superscript references",
            |options, _| Ok(Box::new(sile::SileBackend::from_options(options)?)),
        )?;

        Ok(registry)
    }
}

impl Default for TypesetterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
