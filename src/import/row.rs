//! One-scanline staging buffer.

use std::io::{self, Read};

use crate::volume::VoxelType;

/// Fixed-size buffer holding exactly one scanline of voxels.
///
/// Allocated once per import and reused for every row, so the import's memory
/// footprint stays proportional to one row of the volume regardless of total
/// volume size. The element count always equals the target's X dimension and
/// is never changed mid-import.
pub struct VoxelRowBuffer {
    voxel_type: VoxelType,
    count: usize,
    bytes: Vec<u8>,
}

impl VoxelRowBuffer {
    /// Create a buffer for `count` elements of the given type.
    pub fn new(voxel_type: VoxelType, count: usize) -> Self {
        Self {
            voxel_type,
            count,
            bytes: vec![0; count * voxel_type.size_in_bytes()],
        }
    }

    /// Element type of the buffered voxels.
    pub fn voxel_type(&self) -> VoxelType {
        self.voxel_type
    }

    /// Number of voxel elements the buffer holds.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The buffered scanline bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Fill the buffer with exactly one scanline from `reader`.
    ///
    /// Returns `ErrorKind::UnexpectedEof` when fewer elements were available
    /// than the buffer holds; the buffer contents are unspecified after a
    /// short read.
    pub fn fill_from(&mut self, reader: &mut impl Read) -> io::Result<()> {
        reader.read_exact(&mut self.bytes)
    }
}
