//! Tests for the streaming raw volume loader.

use std::collections::HashSet;

use super::{OpaqueObject, RecordingVolume, init_logs, temp_file_with};
use crate::import::loaders::{OFFSET_PARAM, RawVolumeLoader};
use crate::import::{FormatLoader, ImportError};
use crate::volume::{InMemoryVolume, Vec3, VoxelType};

#[test]
fn test_concrete_write_sequence() {
    init_logs();

    // Dimensions (4,2,2), 1-byte voxels, file bytes 0..15.
    let bytes: Vec<u8> = (0..16).collect();
    let file = temp_file_with(&bytes);

    let mut volume = RecordingVolume::new(Vec3::new(4, 2, 2), VoxelType::U8);
    let mut loader = RawVolumeLoader::new(file.path());
    loader.import(Some(&mut volume)).unwrap();

    assert_eq!(volume.allocations, 1);
    assert_eq!(
        volume.writes,
        vec![
            (vec![0, 1, 2, 3], Vec3::new(0, 0, 0), Vec3::new(4, 1, 1)),
            (vec![4, 5, 6, 7], Vec3::new(0, 1, 0), Vec3::new(4, 1, 1)),
            (vec![8, 9, 10, 11], Vec3::new(0, 0, 1), Vec3::new(4, 1, 1)),
            (vec![12, 13, 14, 15], Vec3::new(0, 1, 1), Vec3::new(4, 1, 1)),
        ]
    );
}

#[test]
fn test_round_trip_in_memory() {
    let bytes: Vec<u8> = (0..24).map(|i| i as u8 ^ 0x5a).collect();
    let file = temp_file_with(&bytes);

    let mut volume = InMemoryVolume::new(Vec3::new(2, 3, 4), VoxelType::U8);
    let mut loader = RawVolumeLoader::new(file.path());
    let catalog = loader.import(Some(&mut volume)).unwrap();
    assert_eq!(catalog.name(), "volume");
    drop(catalog);

    // Every voxel read back equals the source file's content.
    assert_eq!(volume.data(), bytes.as_slice());
}

#[test]
fn test_writes_tile_the_volume_exactly_once() {
    let dims = Vec3::new(3, 4, 5);
    let bytes = vec![7u8; dims.product()];
    let file = temp_file_with(&bytes);

    let mut volume = RecordingVolume::new(dims, VoxelType::U8);
    RawVolumeLoader::new(file.path())
        .import(Some(&mut volume))
        .unwrap();

    // One write per (j, k), all extents one full row, no duplicates.
    assert_eq!(volume.writes.len(), dims.y * dims.z);
    let mut seen = HashSet::new();
    for (data, origin, extent) in &volume.writes {
        assert_eq!(data.len(), dims.x);
        assert_eq!(*extent, Vec3::new(dims.x, 1, 1));
        assert_eq!(origin.x, 0);
        assert!(origin.y < dims.y && origin.z < dims.z);
        assert!(seen.insert((origin.y, origin.z)), "row written twice");
    }
    assert_eq!(seen.len(), dims.y * dims.z);
}

#[test]
fn test_offset_equivalence() {
    let payload: Vec<u8> = (100..116).collect();
    let mut shifted = vec![0xee; 5];
    shifted.extend_from_slice(&payload);

    let plain_file = temp_file_with(&payload);
    let shifted_file = temp_file_with(&shifted);

    let dims = Vec3::new(4, 2, 2);
    let mut plain = InMemoryVolume::new(dims, VoxelType::U8);
    RawVolumeLoader::new(plain_file.path())
        .import(Some(&mut plain))
        .unwrap();

    let mut offset = InMemoryVolume::new(dims, VoxelType::U8);
    offset.params_mut().set_int(OFFSET_PARAM, 5);
    RawVolumeLoader::new(shifted_file.path())
        .import(Some(&mut offset))
        .unwrap();

    assert_eq!(plain.data(), offset.data());
}

#[test]
fn test_short_file_reports_failing_row() {
    init_logs();

    // (4,2,2) needs 16 bytes; 10 bytes cover rows 0 and 1, row 2 comes short.
    let file = temp_file_with(&[1u8; 10]);

    let mut volume = RecordingVolume::new(Vec3::new(4, 2, 2), VoxelType::U8);
    let err = RawVolumeLoader::new(file.path())
        .import(Some(&mut volume))
        .unwrap_err();

    assert!(matches!(err, ImportError::ShortRead { row: 2 }));
    // No scanline beyond the failing one was attempted.
    assert_eq!(volume.writes.len(), 2);
}

#[test]
fn test_out_of_range_offset_surfaces_as_short_read() {
    let file = temp_file_with(&[0u8; 8]);

    let mut volume = RecordingVolume::new(Vec3::new(4, 2, 2), VoxelType::U8);
    volume.params_mut().set_int(OFFSET_PARAM, 1024);
    let err = RawVolumeLoader::new(file.path())
        .import(Some(&mut volume))
        .unwrap_err();

    assert!(matches!(err, ImportError::ShortRead { row: 0 }));
}

#[test]
fn test_negative_offset_is_rejected() {
    let file = temp_file_with(&[0u8; 16]);

    let mut volume = RecordingVolume::new(Vec3::new(4, 2, 2), VoxelType::U8);
    volume.params_mut().set_int(OFFSET_PARAM, -3);
    let err = RawVolumeLoader::new(file.path())
        .import(Some(&mut volume))
        .unwrap_err();

    assert!(matches!(err, ImportError::InvalidParameter { name, .. } if name == OFFSET_PARAM));
}

#[test]
fn test_missing_file_fails_to_open() {
    let mut volume = InMemoryVolume::new(Vec3::new(1, 1, 1), VoxelType::U8);
    let err = RawVolumeLoader::new("/nonexistent/volume.raw")
        .import(Some(&mut volume))
        .unwrap_err();

    assert!(matches!(err, ImportError::FileOpen { .. }));
}

#[test]
fn test_target_without_capability_is_a_type_mismatch() {
    let file = temp_file_with(&[0u8; 16]);

    let mut object = OpaqueObject::new();
    let err = RawVolumeLoader::new(file.path())
        .import(Some(&mut object))
        .unwrap_err();

    assert!(matches!(
        err,
        ImportError::TypeMismatch { loader: "RawVolumeLoader", .. }
    ));
}

#[test]
fn test_missing_target_is_a_type_mismatch() {
    let file = temp_file_with(&[0u8; 16]);

    let err = RawVolumeLoader::new(file.path()).import(None).unwrap_err();
    assert!(matches!(err, ImportError::TypeMismatch { .. }));
}

#[test]
fn test_wide_voxel_rows_preserve_bytes() {
    // (2,2,1) of u16: rows are 4 bytes each, copied through untouched.
    let bytes: Vec<u8> = vec![0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88];
    let file = temp_file_with(&bytes);

    let mut volume = InMemoryVolume::new(Vec3::new(2, 2, 1), VoxelType::U16);
    RawVolumeLoader::new(file.path())
        .import(Some(&mut volume))
        .unwrap();

    assert_eq!(volume.data(), bytes.as_slice());
}
