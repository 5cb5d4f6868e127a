use ndarray::parallel::prelude::*;
use ndarray::{Array3, ArrayView2, Axis};

use crate::enums::{Orientation, Sentinel};

/// Running minimum and maximum over non-missing voxel values.
///
/// An empty range has `min = +inf` and `max = -inf`; check
/// [`ValueRange::is_empty`] before using it to scale colours.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f32,
    pub max: f32,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::empty()
    }
}

impl ValueRange {
    pub fn empty() -> Self {
        Self {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    #[inline]
    pub fn include(&mut self, value: f32) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn merge(self, other: ValueRange) -> ValueRange {
        ValueRange {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Position of `value` within the range, clamped to `[0, 1]`.
    ///
    /// Returns `None` for an empty range or a NaN value. A flat range maps
    /// everything to 0.
    pub fn normalize(&self, value: f32) -> Option<f32> {
        if self.is_empty() || value.is_nan() {
            return None;
        }
        let span = self.max - self.min;
        if span <= 0.0 {
            return Some(0.0);
        }
        Some(((value - self.min) / span).clamp(0.0, 1.0))
    }

    #[inline]
    pub fn normalize_to_u8(&self, value: f32) -> u8 {
        self.normalize(value)
            .map(|n| (n * 255.0).round() as u8)
            .unwrap_or(0)
    }
}

/// One heat-map cell: its column label and the voxel value, `None` when missing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub column: usize,
    pub value: Option<f32>,
}

/// Ordered 2D slices of one orientation, stored as (slice, row, col).
#[derive(Clone, Debug)]
pub struct SliceStack {
    orientation: Orientation,
    sentinel: Sentinel,
    data: Array3<f32>,
}

impl SliceStack {
    pub(crate) fn new(orientation: Orientation, sentinel: Sentinel, data: Array3<f32>) -> Self {
        Self {
            orientation,
            sentinel,
            data,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn sentinel(&self) -> Sentinel {
        self.sentinel
    }

    /// Number of slices, the extent of the frozen axis
    pub fn len(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// (slices, rows, cols)
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    pub fn values(&self) -> &Array3<f32> {
        &self.data
    }

    /// Every value in slice, row, column order
    pub fn as_slice(&self) -> &[f32] {
        // Always built from a Vec in standard layout.
        self.data.as_slice().unwrap_or_default()
    }

    pub fn into_values(self) -> Array3<f32> {
        self.data
    }

    pub fn slice(&self, index: usize) -> Option<ArrayView2<'_, f32>> {
        (index < self.len()).then(|| self.data.index_axis(Axis(0), index))
    }

    pub fn slices(&self) -> impl Iterator<Item = ArrayView2<'_, f32>> {
        self.data.axis_iter(Axis(0))
    }

    /// Heat-map rows of one slice, top row first
    pub fn heatmap(&self, index: usize) -> Option<Vec<Vec<Cell>>> {
        let slice = self.slice(index)?;
        let rows = slice
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(column, &value)| Cell {
                        column,
                        value: (!self.sentinel.is_missing(value)).then_some(value),
                    })
                    .collect::<Vec<Cell>>()
            })
            .collect();
        Some(rows)
    }

    /// Range over the non-missing values of the whole stack
    pub fn value_range(&self) -> ValueRange {
        let sentinel = self.sentinel;
        self.data
            .par_iter()
            .fold(ValueRange::empty, |mut range, &value| {
                if !sentinel.is_missing(value) {
                    range.include(value);
                }
                range
            })
            .reduce(ValueRange::empty, ValueRange::merge)
    }
}
