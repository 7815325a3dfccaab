use waypath_core::Point;

/// Traversability oracle consulted by the path search.
///
/// Answers must be deterministic and side-effect free for a fixed map
/// state. The search asks about each in-bounds cell at most once per call
/// and never asks about cells outside its bounds, so implementations may
/// do non-trivial work here (scanning several layers, for instance).
pub trait Walkable {
    /// Whether a unit may stand on `p`.
    fn is_walkable(&self, p: Point) -> bool;
}

impl<F> Walkable for F
where
    F: Fn(Point) -> bool,
{
    #[inline]
    fn is_walkable(&self, p: Point) -> bool {
        self(p)
    }
}
