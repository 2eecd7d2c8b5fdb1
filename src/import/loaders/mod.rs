//! Built-in format loader implementations.

mod descriptor;
mod npy;
mod raw;

#[cfg(test)]
mod tests;

pub use descriptor::DescriptorLoader;
pub use npy::NpyVolumeLoader;
pub use raw::{OFFSET_PARAM, RawVolumeLoader};
