use crate::dims::GridDimensions;
use crate::enums::Orientation;
use crate::stride;
use crate::walker::{CorrectionSet, IndexWalker};

/// Walk constants of one orientation, derived from the grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlicePlan {
    pub orientation: Orientation,
    pub dims: GridDimensions,
    slices: usize,
    rows: usize,
    cols: usize,
    slice_start: isize,
    slice_step: isize,
    default_delta: isize,
    alternate_delta: isize,
    corrections: CorrectionSet,
}

impl SlicePlan {
    pub fn new(orientation: Orientation, dims: GridDimensions) -> Self {
        let nx = dims.nx as isize;
        let ny = dims.ny as isize;
        let nz = dims.nz as isize;
        let plane = nx * ny;

        match orientation {
            // Each z-plane is contiguous in memory.
            Orientation::Axial => Self {
                orientation,
                dims,
                slices: dims.nz,
                rows: dims.ny,
                cols: dims.nx,
                slice_start: 0,
                slice_step: plane,
                default_delta: 1,
                alternate_delta: 1,
                corrections: CorrectionSet::none(),
            },
            // Rows run x forwards, then drop one z-plane and rewind the row.
            Orientation::Coronal => Self {
                orientation,
                dims,
                slices: dims.ny,
                rows: dims.nz,
                cols: dims.nx,
                slice_start: plane * (nz - 1),
                slice_step: nx,
                default_delta: 1,
                alternate_delta: 1 - nx - plane,
                corrections: CorrectionSet::every(dims.nx),
            },
            // Stepping back by nx walks y downwards and wraps into the z-plane below.
            Orientation::Sagittal => Self {
                orientation,
                dims,
                slices: dims.nx,
                rows: dims.nz,
                cols: dims.ny,
                slice_start: nx * (ny * nz - 1),
                slice_step: 1,
                default_delta: -nx,
                alternate_delta: -nx,
                corrections: CorrectionSet::none(),
            },
        }
    }

    /// (slices, rows, cols)
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.slices, self.rows, self.cols)
    }

    pub fn cells_per_slice(&self) -> usize {
        self.rows * self.cols
    }

    /// Total number of output cells; always equal to `dims.len()`
    pub fn len(&self) -> usize {
        self.slices * self.cells_per_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flat offset of cell (0, 0) of every slice
    pub fn slice_offsets(&self) -> impl Iterator<Item = isize> {
        stride::offsets(self.slice_start, self.slice_step, self.slices)
    }

    pub fn walk_slice(&self, start: isize) -> IndexWalker {
        IndexWalker::new(
            start,
            self.cells_per_slice(),
            self.default_delta,
            self.alternate_delta,
            self.corrections,
        )
    }

    /// Flat offsets of every output cell, slice by slice
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slice_offsets()
            .flat_map(move |start| self.walk_slice(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(orientation: Orientation, dims: (usize, usize, usize)) -> Vec<usize> {
        SlicePlan::new(orientation, dims.into()).indices().collect()
    }

    #[test]
    fn test_axial_is_native_order() {
        assert_eq!(collect(Orientation::Axial, (2, 2, 2)), (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_coronal_walk() {
        // y = 0: z = 1 then z = 0; y = 1 likewise.
        assert_eq!(
            collect(Orientation::Coronal, (2, 2, 2)),
            vec![4, 5, 0, 1, 6, 7, 2, 3]
        );
    }

    #[test]
    fn test_sagittal_walk() {
        assert_eq!(
            collect(Orientation::Sagittal, (2, 2, 2)),
            vec![6, 4, 2, 0, 7, 5, 3, 1]
        );
    }

    #[test]
    fn test_walk_matches_coordinates() {
        let dims = GridDimensions::new(3, 4, 5);
        let coronal = collect(Orientation::Coronal, (3, 4, 5));
        let mut expected = Vec::new();
        for y in 0..dims.ny {
            for z in (0..dims.nz).rev() {
                for x in 0..dims.nx {
                    expected.push(dims.offset(x, y, z));
                }
            }
        }
        assert_eq!(coronal, expected);

        let sagittal = collect(Orientation::Sagittal, (3, 4, 5));
        let mut expected = Vec::new();
        for x in 0..dims.nx {
            for z in (0..dims.nz).rev() {
                for y in (0..dims.ny).rev() {
                    expected.push(dims.offset(x, y, z));
                }
            }
        }
        assert_eq!(sagittal, expected);
    }

    #[test]
    fn test_shapes() {
        let dims = GridDimensions::new(3, 4, 5);
        assert_eq!(SlicePlan::new(Orientation::Axial, dims).shape(), (5, 4, 3));
        assert_eq!(SlicePlan::new(Orientation::Coronal, dims).shape(), (4, 5, 3));
        assert_eq!(SlicePlan::new(Orientation::Sagittal, dims).shape(), (3, 5, 4));
    }

    #[test]
    fn test_zero_extent_yields_nothing() {
        for orientation in Orientation::ALL {
            assert!(collect(orientation, (3, 0, 2)).is_empty());
            assert!(collect(orientation, (0, 0, 0)).is_empty());
        }
    }
}
