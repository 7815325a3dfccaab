use waypath_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Saturates at `i32::MAX` instead of overflowing for points near the
/// `i32` limits.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    let d = a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y));
    i32::try_from(d).unwrap_or(i32::MAX)
}
