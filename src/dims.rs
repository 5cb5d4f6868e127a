use std::fmt;

/// Extent of a volume along its three physical axes.
///
/// Voxel `(x, y, z)` sits at flat offset `x + nx * (y + ny * z)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
}

impl GridDimensions {
    pub fn new(nx: usize, ny: usize, nz: usize) -> Self {
        Self { nx, ny, nz }
    }

    /// Number of voxels a matching flat buffer holds
    pub fn len(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.nx * (y + self.ny * z)
    }
}

impl From<(usize, usize, usize)> for GridDimensions {
    fn from((nx, ny, nz): (usize, usize, usize)) -> Self {
        Self::new(nx, ny, nz)
    }
}

impl fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.nx, self.ny, self.nz)
    }
}
