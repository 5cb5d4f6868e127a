use std::sync::Arc;

use log::debug;
use ndarray::Array3;

use crate::dims::GridDimensions;
use crate::enums::{Orientation, ResliceOptions, Strategy};
use crate::error::{ResliceError, Result};
use crate::index_cache::IndexCache;
use crate::plan::SlicePlan;
use crate::slice_stack::{SliceStack, ValueRange};

/// Output of [`Reslicer::reslice`].
#[derive(Clone, Debug)]
pub struct Resliced {
    pub stack: SliceStack,
    /// Only produced by [`Strategy::Direct`]
    pub range: Option<ValueRange>,
}

/// Turns flat voxel buffers into slice stacks.
///
/// Holds the index map cache used by the memoized strategy. Clones share
/// the same cache.
#[derive(Clone, Debug, Default)]
pub struct Reslicer {
    cache: Arc<IndexCache>,
    options: ResliceOptions,
}

impl Reslicer {
    /// Reslicer with a fresh, private cache
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cache(cache: Arc<IndexCache>) -> Self {
        Self {
            cache,
            options: ResliceOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResliceOptions) -> Self {
        self.options = options;
        self
    }

    pub fn cache(&self) -> &Arc<IndexCache> {
        &self.cache
    }

    pub fn options(&self) -> ResliceOptions {
        self.options
    }

    pub fn reslice(
        &self,
        volume: &[f32],
        orientation: Orientation,
        dims: GridDimensions,
        strategy: Strategy,
    ) -> Result<Resliced> {
        match strategy {
            Strategy::Memoized => Ok(Resliced {
                stack: self.reslice_memoized(volume, orientation, dims)?,
                range: None,
            }),
            Strategy::Direct => {
                let (stack, range) = self.reslice_direct(volume, orientation, dims)?;
                Ok(Resliced {
                    stack,
                    range: Some(range),
                })
            }
        }
    }

    /// Gather through the cached index map of `(orientation, dims)`.
    ///
    /// # Errors
    ///
    /// [`ResliceError::ShapeMismatch`] if `volume.len()` is not `dims.len()`.
    pub fn reslice_memoized(
        &self,
        volume: &[f32],
        orientation: Orientation,
        dims: GridDimensions,
    ) -> Result<SliceStack> {
        Self::check_volume(volume, dims)?;
        let map = self.cache.get_or_build(orientation, dims);
        map.gather(volume, self.options.sentinel)
    }

    /// Walk the offsets inline and fold the value range in the same pass.
    ///
    /// Nothing is cached. Missing voxels are copied through and left out of
    /// the range; an all-missing volume returns [`ValueRange::empty`].
    ///
    /// # Errors
    ///
    /// [`ResliceError::ShapeMismatch`] if `volume.len()` is not `dims.len()`.
    pub fn reslice_direct(
        &self,
        volume: &[f32],
        orientation: Orientation,
        dims: GridDimensions,
    ) -> Result<(SliceStack, ValueRange)> {
        Self::check_volume(volume, dims)?;
        let sentinel = self.options.sentinel;
        let plan = SlicePlan::new(orientation, dims);

        let mut values = Vec::with_capacity(plan.len());
        let mut range = ValueRange::empty();
        for start in plan.slice_offsets() {
            for index in plan.walk_slice(start) {
                let value = volume[index];
                if !sentinel.is_missing(value) {
                    range.include(value);
                }
                values.push(value);
            }
        }
        debug!(
            "direct {orientation} reslice of {dims}: range [{}, {}]",
            range.min, range.max
        );

        let data = Array3::from_shape_vec(plan.shape(), values)?;
        Ok((SliceStack::new(orientation, sentinel, data), range))
    }

    fn check_volume(volume: &[f32], dims: GridDimensions) -> Result<()> {
        if volume.len() != dims.len() {
            return Err(ResliceError::ShapeMismatch {
                what: "voxel volume",
                expected: dims.len(),
                actual: volume.len(),
            });
        }
        Ok(())
    }
}
