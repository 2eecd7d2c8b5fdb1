//! The format-loader contract.
//!
//! Each supported file format implements [`FormatLoader`]. A loader is a
//! single-use unit of work: constructed bound to a source path, asked once to
//! import, then dropped. The shared diagnostic helpers tag every message with
//! the loader's type name so interleaved output from multiple formats stays
//! traceable.

use std::path::{Path, PathBuf};

use crate::import::catalog::Catalog;
use crate::import::error::ImportError;
use crate::volume::ImportObject;

/// Constructs a ready-to-use loader bound to a source path.
///
/// Registered per extension in the [`LoaderRegistry`] and invoked on every
/// import request that resolves to that extension.
///
/// [`LoaderRegistry`]: crate::import::LoaderRegistry
pub type LoaderFactory = fn(PathBuf) -> Box<dyn FormatLoader>;

/// One in-flight import operation for a specific file format.
pub trait FormatLoader {
    /// Type name reported in every diagnostic (e.g. `"RawVolumeLoader"`).
    fn type_name(&self) -> &'static str;

    /// The source path this loader was constructed with.
    fn source_path(&self) -> &Path;

    /// Run the import.
    ///
    /// `target` is the pre-existing object to fill, when the format requires
    /// one; formats that describe their own object (descriptor files) accept
    /// `None` and return an owned catalog instead.
    fn import<'t>(
        &mut self,
        target: Option<&'t mut dyn ImportObject>,
    ) -> Result<Catalog<'t>, ImportError>;

    /// Write a leveled diagnostic tagged with this loader's type name.
    fn emit(&self, level: log::Level, message: &str) {
        log::log!(level, "[{}] {}", self.type_name(), message);
    }

    /// Fatal check: when `condition` holds, emit an ERROR and fail the whole
    /// import with the supplied error.
    fn fail_on(
        &self,
        condition: bool,
        error: impl FnOnce() -> ImportError,
    ) -> Result<(), ImportError>
    where
        Self: Sized,
    {
        if condition {
            let error = error();
            self.emit(log::Level::Error, &error.to_string());
            Err(error)
        } else {
            Ok(())
        }
    }

    /// Non-fatal check: when `condition` holds, log a WARNING and continue.
    fn warn_on(&self, condition: bool, message: &str) {
        if condition {
            self.emit(log::Level::Warn, message);
        }
    }
}
