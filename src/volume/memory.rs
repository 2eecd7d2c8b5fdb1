//! Host-memory structured volume.

use crate::volume::{ImportObject, ParamSet, StructuredVolume, Vec3, VoxelType};

/// CPU-side structured volume backed by a flat byte vector.
///
/// Storage is laid out x-fastest: the element at `(x, y, z)` lives at index
/// `(z * dimY + y) * dimX + x`. Rendering backends supply their own
/// [`StructuredVolume`] implementations; this one makes the crate usable and
/// testable without one.
pub struct InMemoryVolume {
    dimensions: Vec3,
    voxel_type: VoxelType,
    params: ParamSet,
    data: Vec<u8>,
}

impl InMemoryVolume {
    /// Create a volume with the given dimensions and element type.
    ///
    /// Storage is not allocated until the import calls [`allocate`].
    ///
    /// [`allocate`]: StructuredVolume::allocate
    pub fn new(dimensions: Vec3, voxel_type: VoxelType) -> Self {
        Self {
            dimensions,
            voxel_type,
            params: ParamSet::new(),
            data: Vec::new(),
        }
    }

    /// Mutable access to the parameter table, for seeding import settings.
    pub fn params_mut(&mut self) -> &mut ParamSet {
        &mut self.params
    }

    /// Raw voxel storage, x-fastest. Empty until allocated.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn byte_index(&self, x: usize, y: usize, z: usize) -> usize {
        ((z * self.dimensions.y + y) * self.dimensions.x + x) * self.voxel_type.size_in_bytes()
    }
}

impl ImportObject for InMemoryVolume {
    fn kind(&self) -> &'static str {
        "volume"
    }

    fn params(&self) -> &ParamSet {
        &self.params
    }

    fn as_structured_volume_mut(&mut self) -> Option<&mut dyn StructuredVolume> {
        Some(self)
    }
}

impl StructuredVolume for InMemoryVolume {
    fn dimensions(&self) -> Vec3 {
        self.dimensions
    }

    fn voxel_type(&self) -> VoxelType {
        self.voxel_type
    }

    fn allocate(&mut self) {
        let bytes = self.dimensions.product() * self.voxel_type.size_in_bytes();
        if self.data.len() != bytes {
            log::debug!(
                "InMemoryVolume: allocating {} bytes for {} {} voxels",
                bytes,
                self.dimensions,
                self.voxel_type
            );
            self.data = vec![0; bytes];
        }
    }

    fn write_region(&mut self, data: &[u8], origin: Vec3, extent: Vec3) {
        let elem = self.voxel_type.size_in_bytes();
        debug_assert_eq!(data.len(), extent.product() * elem);
        debug_assert!(origin.x + extent.x <= self.dimensions.x);
        debug_assert!(origin.y + extent.y <= self.dimensions.y);
        debug_assert!(origin.z + extent.z <= self.dimensions.z);

        let row_bytes = extent.x * elem;
        let mut src = 0;
        for dz in 0..extent.z {
            for dy in 0..extent.y {
                let dst = self.byte_index(origin.x, origin.y + dy, origin.z + dz);
                self.data[dst..dst + row_bytes].copy_from_slice(&data[src..src + row_bytes]);
                src += row_bytes;
            }
        }
    }
}
