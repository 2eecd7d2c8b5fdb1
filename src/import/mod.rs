//! Format-agnostic import framework.
//!
//! This module provides:
//! - `LoaderRegistry`: extension-dispatched loader construction
//! - `FormatLoader`: the per-format unit of work with shared diagnostics
//! - `VoxelRowBuffer`: the one-scanline staging buffer raw decoding streams
//!   through
//! - `Catalog`: the immutable post-import introspection handle
//! - Built-in loaders for raw volumes, NumPy arrays and JSON descriptors
//!
//! ## Adding New Formats
//!
//! To add support for a new format:
//!
//! 1. Implement [`FormatLoader`] for a type constructed from a source path
//! 2. Register a factory for its extension with [`LoaderRegistry::register`]
//!
//! ```rust,ignore
//! use voxport::import::{FormatLoader, LoaderRegistry};
//!
//! let mut registry = LoaderRegistry::new();
//! registry.register("mhd", MetaImageLoader::factory)?;
//! ```

mod catalog;
mod error;
mod loader;
pub mod loaders;
mod registry;
mod row;

pub use catalog::Catalog;
pub use error::ImportError;
pub use loader::{FormatLoader, LoaderFactory};
pub use registry::LoaderRegistry;
pub use row::VoxelRowBuffer;
