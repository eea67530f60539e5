/// Builds the evenly spaced sample grid for `segments` segments over
/// `[a, b]`.
///
/// The grid has `segments + 1` points. The first point is exactly `a` and
/// the last is pinned to exactly `b`, so accumulated rounding in the step
/// cannot drift the grid off the interval. The step `(b - a) / segments` may
/// be negative when `a > b`, in which case the grid descends.
///
/// Callers must have validated the parameters first: `segments >= 1` and
/// both bounds finite.
///
/// # Parameters
/// - `a`: Start of the interval.
/// - `b`: End of the interval.
/// - `segments`: Number of equal segments to divide the interval into.
///
/// # Returns
/// The sample points, in order from `a` to `b`.
#[must_use]
pub(crate) fn sample_grid(a: f64, b: f64, segments: usize) -> Vec<f64> {
    let h = (b - a) / segments as f64;
    let mut grid: Vec<f64> = (0..=segments).map(|i| a + i as f64 * h).collect();
    grid[segments] = b;
    grid
}
