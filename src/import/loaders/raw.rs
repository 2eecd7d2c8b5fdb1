//! Streaming loader for headerless raw volume files.

use std::fs::File;
use std::io::{BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::import::catalog::Catalog;
use crate::import::error::ImportError;
use crate::import::loader::FormatLoader;
use crate::import::row::VoxelRowBuffer;
use crate::volume::{ImportObject, StructuredVolume, Vec3};

/// Name of the integer parameter giving the byte offset of the voxel data
/// within the source file.
pub const OFFSET_PARAM: &str = "filename offset";

/// Loader for raw binary volume files.
///
/// The file is a bare sequence of scanlines with no header: after an optional
/// leading offset (the target's `"filename offset"` parameter, default 0),
/// `dimY * dimZ` rows of `dimX` voxel elements follow, plane-major and
/// row-minor. Dimensions and element type come entirely from the target.
///
/// Rows are streamed through a single reused [`VoxelRowBuffer`], so importing
/// a multi-gigabyte file never holds more than one scanline in memory.
pub struct RawVolumeLoader {
    path: PathBuf,
}

impl RawVolumeLoader {
    /// Create a loader bound to a source path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Factory registered for the `raw` extension.
    pub fn factory(path: PathBuf) -> Box<dyn FormatLoader> {
        Box::new(Self::new(path))
    }

    /// Stream every scanline of `reader` into `volume`.
    fn import_rows(
        &self,
        reader: &mut BufReader<File>,
        volume: &mut dyn StructuredVolume,
    ) -> Result<(), ImportError> {
        let dims = volume.dimensions();
        let mut buffer = VoxelRowBuffer::new(volume.voxel_type(), dims.x);

        // (j, k) = (row within plane, plane); each index touches a disjoint
        // region of the target, sequential order exists only for the stream.
        for index in 0..dims.y * dims.z {
            let j = index % dims.y;
            let k = index / dims.y;

            buffer.fill_from(reader).map_err(|e| {
                let error = match e.kind() {
                    std::io::ErrorKind::UnexpectedEof => ImportError::ShortRead { row: index },
                    _ => ImportError::Io(e),
                };
                self.emit(log::Level::Error, &error.to_string());
                error
            })?;

            volume.write_region(
                buffer.bytes(),
                Vec3::new(0, j, k),
                Vec3::new(buffer.count(), 1, 1),
            );
        }

        Ok(())
    }
}

impl FormatLoader for RawVolumeLoader {
    fn type_name(&self) -> &'static str {
        "RawVolumeLoader"
    }

    fn source_path(&self) -> &Path {
        &self.path
    }

    fn import<'t>(
        &mut self,
        target: Option<&'t mut dyn ImportObject>,
    ) -> Result<Catalog<'t>, ImportError> {
        // Raw data carries no shape of its own, so a pre-existing structured
        // volume target is required. This is a capability query, not a check
        // against any concrete volume type.
        let mismatch = || ImportError::TypeMismatch {
            loader: "RawVolumeLoader",
            expected: "structured volume",
        };
        let Some(target) = target else {
            let error = mismatch();
            self.emit(log::Level::Error, &error.to_string());
            return Err(error);
        };

        // The handle is scope-owned: dropped here on success and on every
        // failure path alike.
        let file = File::open(&self.path).map_err(|source| {
            let error = ImportError::FileOpen {
                path: self.path.clone(),
                source,
            };
            self.emit(log::Level::Error, &error.to_string());
            error
        })?;
        let mut reader = BufReader::new(file);

        {
            let Some(volume) = target.as_structured_volume_mut() else {
                let error = mismatch();
                self.emit(log::Level::Error, &error.to_string());
                return Err(error);
            };

            // Offset into the volume data file, if any. Whether it lands
            // inside the file is not validated here; an out-of-range offset
            // surfaces as a short read on the first row.
            let offset = volume.params().get_int(OFFSET_PARAM, 0);
            let offset = u64::try_from(offset).map_err(|_| {
                let error = ImportError::invalid_parameter(
                    OFFSET_PARAM,
                    format!("byte offset must be non-negative, got {}", offset),
                );
                self.emit(log::Level::Error, &error.to_string());
                error
            })?;
            reader.seek(SeekFrom::Start(offset))?;

            // Let the target prepare backing storage for its declared shape;
            // the allocation strategy belongs to the rendering backend.
            volume.allocate();

            self.import_rows(&mut reader, volume)?;

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
