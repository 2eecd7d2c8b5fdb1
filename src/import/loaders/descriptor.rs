//! Loader for JSON volume descriptors.
//!
//! A descriptor supplies the shape information a headerless raw file lacks:
//!
//! ```json
//! {
//!     "volume": {
//!         "source": "backpack.raw",
//!         "dimensions": [512, 512, 373],
//!         "voxelType": "u16",
//!         "filenameOffset": 0
//!     }
//! }
//! ```
//!
//! `source` is resolved relative to the descriptor file. `filenameOffset`
//! defaults to 0.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::import::catalog::Catalog;
use crate::import::error::ImportError;
use crate::import::loader::FormatLoader;
use crate::import::loaders::raw::{OFFSET_PARAM, RawVolumeLoader};
use crate::volume::{ImportObject, InMemoryVolume, Vec3, VoxelType};

#[derive(Debug, Deserialize)]
struct DescriptorFile {
    volume: VolumeDescriptor,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeDescriptor {
    source: PathBuf,
    dimensions: [usize; 3],
    voxel_type: VoxelType,
    #[serde(default)]
    filename_offset: i64,
}

/// Loader for descriptor files that name a raw data file together with the
/// dimensions and voxel type needed to decode it.
///
/// This is the one built-in format that needs no pre-existing target: given
/// `None` it constructs an [`InMemoryVolume`] from the descriptor and returns
/// an owning catalog. Given a target, it delegates straight to the raw loader
/// and the target's own shape and parameters win.
pub struct DescriptorLoader {
    path: PathBuf,
}

impl DescriptorLoader {
    /// Create a loader bound to a descriptor path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Factory registered for the `json` extension.
    pub fn factory(path: PathBuf) -> Box<dyn FormatLoader> {
        Box::new(Self::new(path))
    }

    fn read_descriptor(&self) -> Result<VolumeDescriptor, ImportError> {
        let file = File::open(&self.path).map_err(|source| {
            let error = ImportError::FileOpen {
                path: self.path.clone(),
                source,
            };
            self.emit(log::Level::Error, &error.to_string());
            error
        })?;

        let descriptor: DescriptorFile =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                let error = ImportError::Json(e);
                self.emit(log::Level::Error, &error.to_string());
                error
            })?;
        Ok(descriptor.volume)
    }

    /// Resolve the descriptor's source path relative to the descriptor file.
    fn resolve_source(&self, source: &Path) -> PathBuf {
        if source.is_absolute() {
            source.to_path_buf()
        } else {
            match self.path.parent() {
                Some(parent) => parent.join(source),
                None => source.to_path_buf(),
            }
        }
    }
}

impl FormatLoader for DescriptorLoader {
    fn type_name(&self) -> &'static str {
        "DescriptorLoader"
    }

    fn source_path(&self) -> &Path {
        &self.path
    }

    fn import<'t>(
        &mut self,
        target: Option<&'t mut dyn ImportObject>,
    ) -> Result<Catalog<'t>, ImportError> {
        let desc = self.read_descriptor()?;
        self.fail_on(desc.dimensions.iter().any(|&d| d == 0), || {
            ImportError::invalid_format(format!(
                "volume dimensions must be positive, got {:?}",
                desc.dimensions
            ))
        })?;

        let source = self.resolve_source(&desc.source);
        let mut raw = RawVolumeLoader::new(source);

        match target {
            Some(target) => {
                self.warn_on(
                    desc.filename_offset != 0,
                    "descriptor offset ignored; the target's parameters take precedence",
                );
                raw.import(Some(target))
            }
            None => {
                let dims = Vec3::new(desc.dimensions[0], desc.dimensions[1], desc.dimensions[2]);
                let mut volume = InMemoryVolume::new(dims, desc.voxel_type);
                volume.params_mut().set_int(OFFSET_PARAM, desc.filename_offset);

                raw.import(Some(&mut volume))?;
                Ok(Catalog::owned("volume", Box::new(volume)))
            }
        }
    }
}
