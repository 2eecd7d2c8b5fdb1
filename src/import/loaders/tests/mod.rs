//! Unit tests for the built-in format loaders.
//!
//! These tests verify the streaming decode behavior, the region-write tiling
//! contract, and failure reporting for each loader.

mod raw_tests;

use crate::volume::{ImportObject, ParamSet, StructuredVolume, Vec3, VoxelType};

/// Structured volume that records every storage call instead of storing
/// voxels, for asserting on the exact write sequence a loader produces.
pub struct RecordingVolume {
    dims: Vec3,
    voxel_type: VoxelType,
    params: ParamSet,
    pub allocations: usize,
    pub writes: Vec<(Vec<u8>, Vec3, Vec3)>,
}

impl RecordingVolume {
    pub fn new(dims: Vec3, voxel_type: VoxelType) -> Self {
        Self {
            dims,
            voxel_type,
            params: ParamSet::new(),
            allocations: 0,
            writes: Vec::new(),
        }
    }

    pub fn params_mut(&mut self) -> &mut ParamSet {
        &mut self.params
    }
}

impl ImportObject for RecordingVolume {
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

impl StructuredVolume for RecordingVolume {
    fn dimensions(&self) -> Vec3 {
        self.dims
    }

    fn voxel_type(&self) -> VoxelType {
        self.voxel_type
    }

    fn allocate(&mut self) {
        self.allocations += 1;
    }

    fn write_region(&mut self, data: &[u8], origin: Vec3, extent: Vec3) {
        self.writes.push((data.to_vec(), origin, extent));
    }
}

/// An importable object without the structured-volume capability.
pub struct OpaqueObject {
    params: ParamSet,
}

impl OpaqueObject {
    pub fn new() -> Self {
        Self {
            params: ParamSet::new(),
        }
    }
}

impl ImportObject for OpaqueObject {
    fn kind(&self) -> &'static str {
        "opaque"
    }

    fn params(&self) -> &ParamSet {
        &self.params
    }
}

/// Route loader diagnostics through the test harness.
pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Write `bytes` to a fresh temp file and return its guard.
pub fn temp_file_with(bytes: &[u8]) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write temp file");
    file
}
