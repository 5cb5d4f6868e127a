/// Arithmetic progression `start + i * step` for `i in 0..count`.
///
/// Used for the flat offset of element (0, 0) of every slice. Offsets are
/// signed because some orientations walk the buffer backwards.
pub fn offsets(start: isize, step: isize, count: usize) -> impl Iterator<Item = isize> {
    (0..count).map(move |i| start + i as isize * step)
}
