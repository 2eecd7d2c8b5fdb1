//! Voxel element types.

use serde::{Deserialize, Serialize};

/// Data type of a single voxel element.
///
/// Raw volume files carry no self-describing header, so the element type is
/// always supplied by the target volume (or by a descriptor file) rather than
/// discovered from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoxelType {
    /// Unsigned 8-bit integer
    U8,
    /// Unsigned 16-bit integer
    U16,
    /// 32-bit float
    F32,
    /// 64-bit float
    F64,
}

impl VoxelType {
    /// Size of one voxel element in bytes.
    pub fn size_in_bytes(&self) -> usize {
        match self {
            VoxelType::U8 => 1,
            VoxelType::U16 => 2,
            VoxelType::F32 => 4,
            VoxelType::F64 => 8,
        }
    }

    /// Get the display name for this voxel type.
    pub fn name(&self) -> &'static str {
        match self {
            VoxelType::U8 => "u8",
            VoxelType::U16 => "u16",
            VoxelType::F32 => "f32",
            VoxelType::F64 => "f64",
        }
    }

    /// Get all voxel types.
    pub fn all() -> &'static [VoxelType] {
        &[VoxelType::U8, VoxelType::U16, VoxelType::F32, VoxelType::F64]
    }
}

impl std::fmt::Display for VoxelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
