//! Traits describing the objects an import can target or produce.
//!
//! The import logic depends only on these capability surfaces, never on a
//! concrete volume implementation. A loader that requires a structured volume
//! asks the target for that capability explicitly instead of downcasting.

use crate::volume::{ParamSet, VoxelType};

/// Integer triple used for volume dimensions, region origins and extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vec3 {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Vec3 {
    /// Create a new triple.
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Component product (e.g. total voxel count of a volume).
    pub fn product(&self) -> usize {
        self.x * self.y * self.z
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// An object that an import operation can target or produce.
///
/// Implementations are owned by the caller (or by a loader that constructs
/// its own object) and outlive the import call.
pub trait ImportObject {
    /// Short kind tag for diagnostics and catalogs (e.g. `"volume"`).
    fn kind(&self) -> &'static str;

    /// Named parameters attached to this object.
    fn params(&self) -> &ParamSet;

    /// Query the structured-volume capability.
    ///
    /// Returns `None` when this object is not a structured volume; loaders
    /// that need one treat that as a type mismatch, not a reason to downcast.
    fn as_structured_volume_mut(&mut self) -> Option<&mut dyn StructuredVolume> {
        None
    }
}

/// A volume whose voxels lie on a regular 3D integer grid, addressable by
/// (x, y, z) origin and extent.
pub trait StructuredVolume: ImportObject {
    /// Grid dimensions in voxels.
    fn dimensions(&self) -> Vec3;

    /// Element type of one voxel.
    fn voxel_type(&self) -> VoxelType;

    /// Prepare backing storage for the declared dimensions and voxel type.
    ///
    /// Called once per import before any region write; the storage strategy
    /// (host memory, device memory, ...) is the implementation's business.
    fn allocate(&mut self);

    /// Write `data` into the region starting at `origin` with size `extent`.
    ///
    /// `data` holds `extent.product()` voxel elements, tightly packed. Callers
    /// pass disjoint regions that together cover the volume exactly once.
    fn write_region(&mut self, data: &[u8], origin: Vec3, extent: Vec3);
}
