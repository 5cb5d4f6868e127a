use std::fmt;
use std::str::FromStr;

use crate::error::ResliceError;

/// Anatomical viewing orientation. Each one freezes a different physical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Frozen z, rows along y, columns along x
    Axial,
    /// Frozen y, rows along z (superior first), columns along x
    Coronal,
    /// Frozen x, rows along z (superior first), columns along y (anterior first)
    Sagittal,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [
        Orientation::Axial,
        Orientation::Coronal,
        Orientation::Sagittal,
    ];
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Axial => write!(f, "axial"),
            Orientation::Coronal => write!(f, "coronal"),
            Orientation::Sagittal => write!(f, "sagittal"),
        }
    }
}

impl FromStr for Orientation {
    type Err = ResliceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "axial" => Ok(Orientation::Axial),
            "coronal" => Ok(Orientation::Coronal),
            "sagittal" => Ok(Orientation::Sagittal),
            _ => Err(ResliceError::InvalidOrientation(s.to_string())),
        }
    }
}

/// How the flat offsets of a reslice are obtained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Precompute the full index map once per (orientation, dims) and cache it
    #[default]
    Memoized,
    /// Walk the offsets inline and fold the value range in the same pass
    Direct,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memoized" => Ok(Strategy::Memoized),
            "direct" => Ok(Strategy::Direct),
            other => Err(format!("unknown strategy: {other}")),
        }
    }
}

/// Marker for voxels outside the brain mask.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Sentinel {
    /// Only NaN is missing
    #[default]
    Nan,
    /// NaN and every voxel equal to the given value are missing
    Value(f32),
}

impl Sentinel {
    #[inline]
    pub fn is_missing(self, value: f32) -> bool {
        match self {
            Sentinel::Nan => value.is_nan(),
            Sentinel::Value(sentinel) => value.is_nan() || value == sentinel,
        }
    }
}

/// Options shared by every reslice a [`Reslicer`](crate::Reslicer) performs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResliceOptions {
    pub sentinel: Sentinel,
}
