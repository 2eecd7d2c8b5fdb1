//! Registry mapping file extensions to loader factories.

use std::collections::HashMap;
use std::path::Path;

use crate::import::catalog::Catalog;
use crate::import::error::ImportError;
use crate::import::loader::LoaderFactory;
use crate::import::loaders::{DescriptorLoader, NpyVolumeLoader, RawVolumeLoader};
use crate::volume::ImportObject;

/// Registry of available format loaders, keyed by file extension.
///
/// Lifecycle: construct once at startup, perform all [`register`] calls (the
/// built-ins are registered by [`new`], external crates add theirs through the
/// same public API), then treat the registry as frozen. A frozen registry may
/// be read from any number of threads; registering concurrently with
/// resolution is out of contract and must be serialized by the caller.
///
/// [`register`]: LoaderRegistry::register
/// [`new`]: LoaderRegistry::new
pub struct LoaderRegistry {
    factories: HashMap<String, LoaderFactory>,
}

impl LoaderRegistry {
    /// Create a registry with all built-in loaders registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();

        // Built-in formats; extensions are unique so these cannot collide.
        registry
            .register("raw", RawVolumeLoader::factory)
            .expect("built-in raw registration");
        registry
            .register("npy", NpyVolumeLoader::factory)
            .expect("built-in npy registration");
        registry
            .register("json", DescriptorLoader::factory)
            .expect("built-in json registration");

        registry
    }

    /// Create a registry with no loaders registered.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Bind a file extension to a loader factory.
    ///
    /// The extension token is case-normalized, so `register("RAW", ..)` and a
    /// later lookup of `volume.raw` meet in the middle. Binding an extension
    /// twice is a configuration error and fails with
    /// [`ImportError::DuplicateFormat`] rather than silently replacing the
    /// first binding.
    pub fn register(&mut self, extension: &str, factory: LoaderFactory) -> Result<(), ImportError> {
        let extension = extension.to_lowercase();
        if self.factories.contains_key(&extension) {
            return Err(ImportError::DuplicateFormat { extension });
        }
        log::debug!("registered loader for extension '{}'", extension);
        self.factories.insert(extension, factory);
        Ok(())
    }

    /// Resolve a path to the factory bound to its extension.
    pub fn resolve(&self, path: &Path) -> Result<LoaderFactory, ImportError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        extension
            .and_then(|e| self.factories.get(&e).copied())
            .ok_or_else(|| ImportError::UnknownFormat {
                path: path.to_path_buf(),
            })
    }

    /// Resolve `path`, construct the loader and run the import.
    pub fn import<'t>(
        &self,
        path: impl AsRef<Path>,
        target: Option<&'t mut dyn ImportObject>,
    ) -> Result<Catalog<'t>, ImportError> {
        let path = path.as_ref();
        let factory = self.resolve(path)?;
        let mut loader = factory(path.to_path_buf());
        log::debug!("importing {:?} with {}", path, loader.type_name());
        loader.import(target)
    }

    /// All registered extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self.factories.keys().map(|e| e.as_str()).collect();
        extensions.sort_unstable();
        extensions
    }

    /// Check whether a path's extension has a registered loader.
    pub fn is_supported_file(&self, path: impl AsRef<Path>) -> bool {
        self.resolve(path.as_ref()).is_ok()
    }
}

impl Default for LoaderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
