//! Memoized index maps.
//!
//! An [`IndexMap`] lists, for every (slice, row, col) of one orientation, the
//! flat offset of that cell in the native buffer. Maps only depend on the
//! orientation and the grid dimensions, so an [`IndexCache`] builds each one
//! once and hands out shared references afterwards.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, trace};
use ndarray::Array3;
use parking_lot::RwLock;
use rayon::prelude::*;
use web_time::Instant;

use crate::dims::GridDimensions;
use crate::enums::{Orientation, Sentinel};
use crate::error::{ResliceError, Result};
use crate::plan::SlicePlan;
use crate::slice_stack::SliceStack;

/// Precomputed flat offsets of one orientation, a permutation of `0..dims.len()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexMap {
    orientation: Orientation,
    dims: GridDimensions,
    shape: (usize, usize, usize),
    indices: Vec<usize>,
}

impl IndexMap {
    pub fn build(orientation: Orientation, dims: GridDimensions) -> Self {
        let plan = SlicePlan::new(orientation, dims);
        let mut indices = Vec::with_capacity(plan.len());
        for start in plan.slice_offsets() {
            indices.extend(plan.walk_slice(start));
        }
        Self {
            orientation,
            dims,
            shape: plan.shape(),
            indices,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn dims(&self) -> GridDimensions {
        self.dims
    }

    /// (slices, rows, cols)
    pub fn shape(&self) -> (usize, usize, usize) {
        self.shape
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Read `volume[indices[k]]` for every k and reshape into a slice stack.
    ///
    /// # Errors
    ///
    /// Returns [`ResliceError::ShapeMismatch`] if the volume was not laid out
    /// for the dimensions this map was built for.
    pub fn gather(&self, volume: &[f32], sentinel: Sentinel) -> Result<SliceStack> {
        if volume.len() != self.dims.len() {
            return Err(ResliceError::ShapeMismatch {
                what: "voxel volume",
                expected: self.dims.len(),
                actual: volume.len(),
            });
        }
        let values: Vec<f32> = self.indices.par_iter().map(|&i| volume[i]).collect();
        let data = Array3::from_shape_vec(self.shape, values)?;
        Ok(SliceStack::new(self.orientation, sentinel, data))
    }
}

/// Thread-safe cache of index maps keyed by (orientation, dims).
///
/// Entries are never invalidated. Maps for different dimensions live side by
/// side.
#[derive(Debug, Default)]
pub struct IndexCache {
    maps: RwLock<HashMap<(Orientation, GridDimensions), Arc<IndexMap>>>,
    builds: AtomicUsize,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached map, building it on first request.
    pub fn get_or_build(&self, orientation: Orientation, dims: GridDimensions) -> Arc<IndexMap> {
        let key = (orientation, dims);
        if let Some(map) = self.maps.read().get(&key) {
            trace!("index map cache hit: {orientation} {dims}");
            return Arc::clone(map);
        }

        // Re-check under the write lock; another caller may have built it.
        let mut maps = self.maps.write();
        let map = maps.entry(key).or_insert_with(|| {
            let t0 = Instant::now();
            let map = IndexMap::build(orientation, dims);
            self.builds.fetch_add(1, Ordering::SeqCst);
            debug!(
                "built {orientation} index map for {dims} ({} cells) in {:?}",
                map.len(),
                t0.elapsed()
            );
            Arc::new(map)
        });
        Arc::clone(map)
    }

    pub fn get(&self, orientation: Orientation, dims: GridDimensions) -> Option<Arc<IndexMap>> {
        self.maps.read().get(&(orientation, dims)).cloned()
    }

    pub fn contains(&self, orientation: Orientation, dims: GridDimensions) -> bool {
        self.maps.read().contains_key(&(orientation, dims))
    }

    pub fn len(&self) -> usize {
        self.maps.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.read().is_empty()
    }

    /// Number of maps built so far
    pub fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn is_permutation(indices: &[usize], len: usize) -> bool {
        let mut seen = vec![false; len];
        indices.len() == len
            && indices
                .iter()
                .all(|&i| i < len && !std::mem::replace(&mut seen[i], true))
    }

    #[test]
    fn test_build_is_permutation() {
        for dims in [(2, 2, 2), (3, 4, 5), (7, 1, 3), (1, 6, 1), (4, 3, 0)] {
            let dims = GridDimensions::from(dims);
            for orientation in Orientation::ALL {
                let map = IndexMap::build(orientation, dims);
                assert!(
                    is_permutation(map.indices(), dims.len()),
                    "{orientation} {dims} is not a permutation"
                );
            }
        }
    }

    #[test]
    fn test_single_column_volume() {
        let map = IndexMap::build(Orientation::Axial, GridDimensions::new(1, 1, 5));
        assert_eq!(map.shape(), (5, 1, 1));
        assert_eq!(map.indices(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_gather_reshapes() {
        let map = IndexMap::build(Orientation::Axial, GridDimensions::new(2, 2, 2));
        let volume: Vec<f32> = (0..8).map(|v| v as f32).collect();
        let stack = map.gather(&volume, Sentinel::Nan).unwrap();
        assert_eq!(stack.dim(), (2, 2, 2));
        assert_eq!(stack.slice(0).unwrap(), ndarray::arr2(&[[0.0, 1.0], [2.0, 3.0]]));
        assert_eq!(stack.slice(1).unwrap(), ndarray::arr2(&[[4.0, 5.0], [6.0, 7.0]]));
    }

    #[test]
    fn test_gather_rejects_wrong_length() {
        let map = IndexMap::build(Orientation::Coronal, GridDimensions::new(2, 2, 2));
        let err = map.gather(&[0.0; 7], Sentinel::Nan).unwrap_err();
        assert!(matches!(
            err,
            ResliceError::ShapeMismatch { expected: 8, actual: 7, .. }
        ));
    }

    #[test]
    fn test_cache_miss_then_hit() {
        let cache = IndexCache::new();
        let dims = GridDimensions::new(3, 4, 5);
        assert!(cache.is_empty());
        assert!(cache.get(Orientation::Sagittal, dims).is_none());

        let first = cache.get_or_build(Orientation::Sagittal, dims);
        assert_eq!(cache.builds(), 1);
        let second = cache.get_or_build(Orientation::Sagittal, dims);
        assert_eq!(cache.builds(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.contains(Orientation::Sagittal, dims));
        assert!(!cache.contains(Orientation::Axial, dims));
    }

    #[test]
    fn test_cache_keys_by_dims() {
        let cache = IndexCache::new();
        let small = cache.get_or_build(Orientation::Coronal, GridDimensions::new(2, 2, 2));
        let large = cache.get_or_build(Orientation::Coronal, GridDimensions::new(3, 3, 3));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.builds(), 2);
        assert_eq!(small.len(), 8);
        assert_eq!(large.len(), 27);
    }

    #[test]
    fn test_separate_caches_are_isolated() {
        let a = IndexCache::new();
        let b = IndexCache::new();
        a.get_or_build(Orientation::Axial, GridDimensions::new(2, 2, 2));
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }

    #[test]
    fn test_concurrent_requests_build_once() {
        let cache = Arc::new(IndexCache::new());
        let dims = GridDimensions::new(9, 11, 7);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get_or_build(Orientation::Coronal, dims))
            })
            .collect();
        let maps: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(cache.builds(), 1);
        assert!(maps.iter().all(|m| Arc::ptr_eq(m, &maps[0])));
    }
}
