use std::cmp::Ordering;
use std::collections::BinaryHeap;

use waypath_core::Point;

/// Sentinel parent index for the start node and undiscovered cells.
pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum NodeState {
    #[default]
    Unseen,
    Open,
    Closed,
}

/// Per-cell search record, indexed by the row-major index of the bounds.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) state: NodeState,
    /// Cached oracle answer; `None` until the cell is first asked about.
    pub(crate) walkable: Option<bool>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: NO_PARENT,
            state: NodeState::Unseen,
            walkable: None,
        }
    }
}

/// Heap entry. Ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// `f` first, and among equal `f` the smallest point in `(x, y)` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) pos: Point,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.pos.cmp(&self.pos))
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open list of a single search.
///
/// Lowering a pending node's cost pushes a second entry rather than
/// repositioning the first; [`Frontier::pop`] drops entries that no longer
/// match their node's current `f` or whose node is already closed.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<NodeRef>,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: NodeRef) {
        self.heap.push(entry);
    }

    /// Pop the next live entry, skipping stale ones.
    pub(crate) fn pop(&mut self, nodes: &[Node]) -> Option<NodeRef> {
        while let Some(entry) = self.heap.pop() {
            let node = &nodes[entry.idx];
            if node.state == NodeState::Open && node.f == entry.f {
                return Some(entry);
            }
        }
        None
    }
}
