use waypath_core::Point;

/// Result of a single path search.
///
/// Paths never include the start cell and always end at the cell the unit
/// should walk to: the goal for [`Reached`](Self::Reached), the closest
/// reachable cell for [`Partial`](Self::Partial).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathOutcome {
    /// The goal was reached. Empty when start and goal are the same cell.
    Reached(Vec<Point>),
    /// The goal is unreachable; the path leads to the finalized walkable
    /// cell nearest to it. Never empty.
    Partial(Vec<Point>),
    /// No move brings the unit any closer to the goal.
    NoPath,
}

impl PathOutcome {
    /// The waypoints to follow, empty for [`NoPath`](Self::NoPath).
    pub fn into_path(self) -> Vec<Point> {
        match self {
            Self::Reached(path) | Self::Partial(path) => path,
            Self::NoPath => Vec::new(),
        }
    }

    /// Borrowed view of the waypoints.
    pub fn path(&self) -> &[Point] {
        match self {
            Self::Reached(path) | Self::Partial(path) => path,
            Self::NoPath => &[],
        }
    }

    /// Whether the search reached the goal itself.
    pub fn is_reached(&self) -> bool {
        matches!(self, Self::Reached(_))
    }

    /// Last waypoint, if any.
    pub fn destination(&self) -> Option<Point> {
        self.path().last().copied()
    }
}

/// Work counters for one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes removed from the frontier and finalized.
    pub expanded: usize,
    /// Calls made to the traversability oracle.
    pub oracle_queries: usize,
    /// Pending nodes pushed again after a cheaper route to them was found.
    pub requeued: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_path_flattens_variants() {
        let p = vec![Point::new(1, 0), Point::new(2, 0)];
        assert_eq!(PathOutcome::Reached(p.clone()).into_path(), p);
        assert_eq!(PathOutcome::Partial(p.clone()).into_path(), p);
        assert!(PathOutcome::NoPath.into_path().is_empty());
    }

    #[test]
    fn destination_is_last_waypoint() {
        let out = PathOutcome::Partial(vec![Point::new(0, 1), Point::new(0, 2)]);
        assert_eq!(out.destination(), Some(Point::new(0, 2)));
        assert!(!out.is_reached());
        assert_eq!(PathOutcome::Reached(Vec::new()).destination(), None);
    }
}
