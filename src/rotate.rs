//! Quarter-turn rotation of nested 2D and 3D grids.
//!
//! Rotations are counter-clockwise as seen with row 0 at the top and
//! column 0 on the left. For a 3D grid the plane perpendicular to the frozen
//! axis uses the lower remaining axis for rows and the higher one for
//! columns.

use crate::error::{ResliceError, Result};

/// Rotate `grid` counter-clockwise by `k` quarter turns.
///
/// `k` may be any integer; only `k mod 4` matters. The input is left
/// untouched.
///
/// # Errors
///
/// [`ResliceError::ShapeMismatch`] if the rows do not all have the same length.
pub fn rotate_2d<T: Clone>(grid: &[Vec<T>], k: i32) -> Result<Vec<Vec<T>>> {
    let cols = grid_width(grid)?;
    let rows = grid.len();

    let rotated = match k.rem_euclid(4) {
        0 => grid.to_vec(),
        1 => (0..cols)
            .map(|i| grid.iter().map(|row| row[cols - 1 - i].clone()).collect::<Vec<T>>())
            .collect(),
        2 => grid
            .iter()
            .rev()
            .map(|row| row.iter().rev().cloned().collect::<Vec<T>>())
            .collect(),
        _ => (0..cols)
            .map(|i| (0..rows).rev().map(|r| grid[r][i].clone()).collect::<Vec<T>>())
            .collect(),
    };
    Ok(rotated)
}

/// Rotate every plane perpendicular to `frozen_axis` by `k` quarter turns.
///
/// The result keeps the input's axis order: the frozen axis stays where it
/// was and, for odd `k`, the two rotated extents swap.
///
/// # Errors
///
/// [`ResliceError::InvalidAxis`] for an axis other than 0, 1 or 2 and
/// [`ResliceError::ShapeMismatch`] for ragged input.
pub fn rotate_3d<T: Clone>(
    volume: &[Vec<Vec<T>>],
    k: i32,
    frozen_axis: usize,
) -> Result<Vec<Vec<Vec<T>>>> {
    let (d0, d1, d2) = volume_shape(volume)?;
    let swaps = k.rem_euclid(2) == 1;

    match frozen_axis {
        0 => volume.iter().map(|plane| rotate_2d(plane, k)).collect(),
        1 => {
            let (a_len, b_len) = if swaps { (d2, d0) } else { (d0, d2) };
            let mut out = vec![vec![Vec::new(); d1]; a_len];
            for j in 0..d1 {
                let plane: Vec<Vec<T>> = volume.iter().map(|outer| outer[j].clone()).collect();
                for (a, row) in rotate_2d(&plane, k)?.into_iter().enumerate() {
                    debug_assert_eq!(row.len(), b_len);
                    out[a][j] = row;
                }
            }
            Ok(out)
        }
        2 => {
            let (a_len, b_len) = if swaps { (d1, d0) } else { (d0, d1) };
            let mut out = vec![vec![Vec::with_capacity(d2); b_len]; a_len];
            for l in 0..d2 {
                let plane: Vec<Vec<T>> = volume
                    .iter()
                    .map(|outer| outer.iter().map(|inner| inner[l].clone()).collect::<Vec<T>>())
                    .collect();
                for (a, row) in rotate_2d(&plane, k)?.into_iter().enumerate() {
                    for (b, value) in row.into_iter().enumerate() {
                        out[a][b].push(value);
                    }
                }
            }
            Ok(out)
        }
        axis => Err(ResliceError::InvalidAxis(axis)),
    }
}

fn grid_width<T>(grid: &[Vec<T>]) -> Result<usize> {
    let cols = grid.first().map_or(0, Vec::len);
    match grid.iter().find(|row| row.len() != cols) {
        Some(row) => Err(ResliceError::ShapeMismatch {
            what: "grid row",
            expected: cols,
            actual: row.len(),
        }),
        None => Ok(cols),
    }
}

fn volume_shape<T>(volume: &[Vec<Vec<T>>]) -> Result<(usize, usize, usize)> {
    let (d1, d2) = match volume.first() {
        Some(plane) => (plane.len(), grid_width(plane)?),
        None => (0, 0),
    };
    for plane in volume {
        if plane.len() != d1 {
            return Err(ResliceError::ShapeMismatch {
                what: "volume plane",
                expected: d1,
                actual: plane.len(),
            });
        }
        if let Some(row) = plane.iter().find(|row| row.len() != d2) {
            return Err(ResliceError::ShapeMismatch {
                what: "volume row",
                expected: d2,
                actual: row.len(),
            });
        }
    }
    Ok((volume.len(), d1, d2))
}
