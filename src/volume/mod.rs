//! Target-side data model for volume imports.
//!
//! This module provides:
//! - `VoxelType`: enumerated element types with known sizes
//! - `ParamSet`: the parameter table loaders read settings from
//! - `ImportObject` / `StructuredVolume`: the capability surfaces the import
//!   logic depends on instead of concrete volume implementations
//! - `InMemoryVolume`: a host-memory structured volume

mod memory;
mod object;
mod params;
mod voxel;

pub use memory::InMemoryVolume;
pub use object::{ImportObject, StructuredVolume, Vec3};
pub use params::{ParamSet, ParamValue};
pub use voxel::VoxelType;
