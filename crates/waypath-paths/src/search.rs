use waypath_core::{Point, Range};

use crate::distance::manhattan;
use crate::frontier::{Frontier, NO_PARENT, Node, NodeRef, NodeState};
use crate::outcome::{PathOutcome, SearchStats};
use crate::traits::Walkable;

/// Compute the waypoints leading from `from` towards `to`.
///
/// Equivalent to [`search`] followed by [`PathOutcome::into_path`]: the
/// returned path excludes `from` and ends either at `to` or, when `to`
/// cannot be reached, at the closest walkable cell the search finalized.
/// The path is empty when `from == to` or when no move gets any closer.
///
/// `bounds` must not be empty. `from` and `to` may lie outside `bounds` or
/// on blocked cells; such cells are simply never entered.
pub fn find_path<W: Walkable + ?Sized>(oracle: &W, bounds: Range, from: Point, to: Point) -> Vec<Point> {
    search(oracle, bounds, from, to).into_path()
}

/// [`find_path`] for real-valued world positions, truncated to cells with
/// [`Point::from_position`].
pub fn find_path_from_positions<W: Walkable + ?Sized>(
    oracle: &W,
    bounds: Range,
    from: (f32, f32),
    to: (f32, f32),
) -> Vec<Point> {
    find_path(
        oracle,
        bounds,
        Point::from_position(from.0, from.1),
        Point::from_position(to.0, to.1),
    )
}

/// Run a best-first search and report how it ended.
pub fn search<W: Walkable + ?Sized>(oracle: &W, bounds: Range, from: Point, to: Point) -> PathOutcome {
    search_with_stats(oracle, bounds, from, to).0
}

/// Like [`search`], also returning work counters.
///
/// Expansion order is ascending `f = g + manhattan(p, to)`, ties broken by
/// ascending `x` then `y`. A cost improvement for a pending node takes
/// effect immediately, so the path found to the goal is a shortest one.
///
/// A blocked goal is a dead end: it can be entered as the last step of a
/// route and is finalized when popped, but it is never expanded, so no
/// route passes through it. The search then falls back to the closest
/// walkable cell it finalized.
pub fn search_with_stats<W: Walkable + ?Sized>(
    oracle: &W,
    bounds: Range,
    from: Point,
    to: Point,
) -> (PathOutcome, SearchStats) {
    if from == to {
        return (PathOutcome::Reached(Vec::new()), SearchStats::default());
    }
    log::trace!("path search {from} -> {to} within {bounds}");

    let Some(start_idx) = bounds.index(from) else {
        log::debug!("path search from {from}: start outside {bounds}");
        return (PathOutcome::NoPath, SearchStats::default());
    };

    let mut s = Search {
        oracle,
        bounds,
        to,
        nodes: vec![Node::default(); bounds.len()],
        stats: SearchStats::default(),
    };
    let outcome = s.run(start_idx, from);
    (outcome, s.stats)
}

/// State owned by one search call.
struct Search<'a, W: ?Sized> {
    oracle: &'a W,
    bounds: Range,
    to: Point,
    nodes: Vec<Node>,
    stats: SearchStats,
}

impl<W: Walkable + ?Sized> Search<'_, W> {
    fn run(&mut self, start_idx: usize, from: Point) -> PathOutcome {
        let to = self.to;
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = manhattan(from, to);
            node.state = NodeState::Open;
        }

        let mut open = Frontier::new();
        open.push(NodeRef {
            idx: start_idx,
            pos: from,
            f: self.nodes[start_idx].f,
        });

        // Closest finalized walkable cell so far, with its distance to `to`.
        let mut best: Option<(usize, i32)> = None;

        while let Some(current) = open.pop(&self.nodes) {
            let ci = current.idx;
            let cp = current.pos;
            self.nodes[ci].state = NodeState::Closed;
            self.stats.expanded += 1;

            let walkable = self.walkable(ci, cp);
            let h = manhattan(cp, to);
            if walkable && best.is_none_or(|(_, bh)| h < bh) {
                best = Some((ci, h));
            }

            if cp == to {
                if walkable {
                    return PathOutcome::Reached(self.reconstruct(start_idx, ci));
                }
                // A blocked goal can be approached but never walked through.
                continue;
            }

            let current_g = self.nodes[ci].g;
            for np in cp.neighbors_4() {
                let Some(ni) = self.bounds.index(np) else {
                    continue;
                };
                if self.nodes[ni].state == NodeState::Closed {
                    continue;
                }
                if np != to && !self.walkable(ni, np) {
                    continue;
                }

                let tentative_g = current_g.saturating_add(1);
                let n = &mut self.nodes[ni];
                if n.state == NodeState::Open {
                    if tentative_g >= n.g {
                        continue;
                    }
                    self.stats.requeued += 1;
                }
                n.g = tentative_g;
                n.f = tentative_g.saturating_add(manhattan(np, to));
                n.parent = ci;
                n.state = NodeState::Open;
                open.push(NodeRef {
                    idx: ni,
                    pos: np,
                    f: n.f,
                });
            }
        }

        match best {
            Some((bi, h)) if bi != start_idx => {
                let path = self.reconstruct(start_idx, bi);
                log::debug!(
                    "goal {to} unreachable from {from}; falling back to {} at distance {h}",
                    self.point(bi)
                );
                PathOutcome::Partial(path)
            }
            _ => {
                log::debug!("no progress possible from {from} towards {to}");
                PathOutcome::NoPath
            }
        }
    }

    /// Oracle answer for an in-bounds cell, asked at most once per call.
    fn walkable(&mut self, idx: usize, p: Point) -> bool {
        if let Some(w) = self.nodes[idx].walkable {
            return w;
        }
        self.stats.oracle_queries += 1;
        let w = self.oracle.is_walkable(p);
        self.nodes[idx].walkable = Some(w);
        w
    }

    /// Walk parent links back from `end`, excluding the start cell.
    fn reconstruct(&self, start_idx: usize, end: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = end;
        while ci != start_idx && ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        path
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        let w = self.bounds.width() as usize;
        Point::new(
            (idx % w) as i32 + self.bounds.min.x,
            (idx / w) as i32 + self.bounds.min.y,
        )
    }
}
