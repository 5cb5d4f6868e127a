//! # voxel-reslice
//!
//! Reslicing of flat voxel buffers into stacks of 2D slices along the three
//! anatomical axes:
//!  - Axial
//!  - Coronal
//!  - Sagittal
//!
//! The caller hands over a volume that has already been decoded into a
//! single `&[f32]` in its native memory order, where voxel `(x, y, z)` sits
//! at `x + nx * (y + ny * z)`. No 3D container is built on the way; every
//! slice cell is located with incremental index arithmetic over the flat
//! buffer.
//!
//! Two strategies are available behind one [`Reslicer`]:
//!  - [`Strategy::Memoized`] builds the full index map of an orientation once
//!    per grid size and reuses it for every later volume.
//!  - [`Strategy::Direct`] walks the offsets inline and computes the value
//!    range of the volume in the same pass.
//!
//! Both return identical slice stacks. Missing voxels (NaN, or a configured
//! [`Sentinel`]) are copied through and excluded from value ranges.
//!
//! The [`rotate`] module rotates nested 2D and 3D grids by quarter turns.
//!
//! # Examples
//!
//! ```
//! # use voxel_reslice::{GridDimensions, Orientation, Reslicer};
//! let dims = GridDimensions::new(2, 2, 2);
//! let volume: Vec<f32> = (0..8).map(|v| v as f32).collect();
//!
//! let reslicer = Reslicer::new();
//! let (stack, range) = reslicer
//!     .reslice_direct(&volume, Orientation::Axial, dims)
//!     .expect("volume should match the dimensions");
//!
//! assert_eq!(stack.len(), 2);
//! assert_eq!(stack.slice(1).unwrap()[[0, 1]], 5.0);
//! assert_eq!((range.min, range.max), (0.0, 7.0));
//! ```

pub mod dims;
pub mod enums;
pub mod error;
pub mod index_cache;
pub mod plan;
pub mod resampler;
pub mod rotate;
pub mod slice_stack;
pub mod stride;
pub mod walker;

pub use dims::GridDimensions;
pub use enums::{Orientation, ResliceOptions, Sentinel, Strategy};
pub use error::{ResliceError, Result};
pub use index_cache::{IndexCache, IndexMap};
pub use resampler::{Reslicer, Resliced};
pub use rotate::{rotate_2d, rotate_3d};
pub use slice_stack::{Cell, SliceStack, ValueRange};
