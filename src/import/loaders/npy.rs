//! Loader for NumPy `.npy` volume files.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use ndarray::ArrayD;
use ndarray_npy::{ReadNpyExt, ReadableElement};

use crate::import::catalog::Catalog;
use crate::import::error::ImportError;
use crate::import::loader::FormatLoader;
use crate::volume::{ImportObject, StructuredVolume, Vec3, VoxelType};

/// Loader for 3-D NumPy arrays.
///
/// The array's dtype must match the target's voxel type and its shape must be
/// `(dimZ, dimY, dimX)` (slowest-varying dimension first, NumPy's C order).
/// Unlike raw files, `.npy` is header-described and read eagerly; rows are
/// still written to the target one scanline at a time through the same
/// region-write contract the raw loader uses.
pub struct NpyVolumeLoader {
    path: PathBuf,
}

impl NpyVolumeLoader {
    /// Create a loader bound to a source path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Factory registered for the `npy` extension.
    pub fn factory(path: PathBuf) -> Box<dyn FormatLoader> {
        Box::new(Self::new(path))
    }

    fn import_array<T>(
        &self,
        reader: BufReader<File>,
        volume: &mut dyn StructuredVolume,
    ) -> Result<(), ImportError>
    where
        T: ReadableElement + VoxelBytes + Copy,
    {
        let array = ArrayD::<T>::read_npy(reader).map_err(|e| {
            let error =
                ImportError::invalid_format(format!("failed to read NumPy array: {}", e));
            self.emit(log::Level::Error, &error.to_string());
            error
        })?;

        let dims = volume.dimensions();
        let expected = [dims.z, dims.y, dims.x];
        let found = array.shape().to_vec();
        self.fail_on(found != expected, || ImportError::ShapeMismatch {
            expected,
            found,
        })?;

        volume.allocate();

        let mut row = Vec::with_capacity(dims.x * volume.voxel_type().size_in_bytes());
        for index in 0..dims.y * dims.z {
            let j = index % dims.y;
            let k = index / dims.y;

            row.clear();
            for i in 0..dims.x {
                array[[k, j, i]].extend_bytes(&mut row);
            }
            volume.write_region(&row, Vec3::new(0, j, k), Vec3::new(dims.x, 1, 1));
        }

        Ok(())
    }
}

impl FormatLoader for NpyVolumeLoader {
    fn type_name(&self) -> &'static str {
        "NpyVolumeLoader"
    }

    fn source_path(&self) -> &Path {
        &self.path
    }

    fn import<'t>(
        &mut self,
        target: Option<&'t mut dyn ImportObject>,
    ) -> Result<Catalog<'t>, ImportError> {
        let mismatch = || ImportError::TypeMismatch {
            loader: "NpyVolumeLoader",
            expected: "structured volume",
        };
        let Some(target) = target else {
            let error = mismatch();
            self.emit(log::Level::Error, &error.to_string());
            return Err(error);
        };

        let file = File::open(&self.path).map_err(|source| {
            let error = ImportError::FileOpen {
                path: self.path.clone(),
                source,
            };
            self.emit(log::Level::Error, &error.to_string());
            error
        })?;
        let reader = BufReader::new(file);

        {
            let Some(volume) = target.as_structured_volume_mut() else {
                let error = mismatch();
                self.emit(log::Level::Error, &error.to_string());
                return Err(error);
            };

            match volume.voxel_type() {
                VoxelType::U8 => self.import_array::<u8>(reader, volume)?,
                VoxelType::U16 => self.import_array::<u16>(reader, volume)?,
                VoxelType::F32 => self.import_array::<f32>(reader, volume)?,
                VoxelType::F64 => self.import_array::<f64>(reader, volume)?,
            }

            log::debug!(
                "[{}] imported {} {} volume from {:?}",
                self.type_name(),
                volume.dimensions(),
                volume.voxel_type(),
                self.path
            );
        }

        Ok(Catalog::borrowed("volume", target))
    }
}

/// Native-endian byte serialization for supported voxel element types.
trait VoxelBytes {
    fn extend_bytes(self, out: &mut Vec<u8>);
}

impl VoxelBytes for u8 {
    fn extend_bytes(self, out: &mut Vec<u8>) {
        out.push(self);
    }
}

impl VoxelBytes for u16 {
    fn extend_bytes(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_ne_bytes());
    }
}

impl VoxelBytes for f32 {
    fn extend_bytes(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_ne_bytes());
    }
}

impl VoxelBytes for f64 {
    fn extend_bytes(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_ne_bytes());
    }
}
