//! voxport - volume dataset import
//!
//! Loads externally stored volumetric datasets into a rendering engine's
//! in-memory volume objects. Formats are dispatched by file extension through
//! an extensible [`LoaderRegistry`]; the raw-volume decoder streams scanlines
//! through a fixed one-row buffer, so arbitrarily large files import without
//! ever being held in memory whole.
//!
//! ```rust,no_run
//! use voxport::import::LoaderRegistry;
//! use voxport::volume::{InMemoryVolume, Vec3, VoxelType};
//!
//! # fn main() -> Result<(), voxport::import::ImportError> {
//! let registry = LoaderRegistry::new();
//! let mut volume = InMemoryVolume::new(Vec3::new(256, 256, 128), VoxelType::U16);
//! let catalog = registry.import("scan.raw", Some(&mut volume))?;
//! println!("imported '{}' with {:?}", catalog.name(), catalog.parameters());
//! # Ok(())
//! # }
//! ```

pub mod import;
pub mod volume;

pub use import::{Catalog, FormatLoader, ImportError, LoaderFactory, LoaderRegistry};
pub use volume::{ImportObject, InMemoryVolume, ParamSet, StructuredVolume, Vec3, VoxelType};
