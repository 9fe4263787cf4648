use maze_core::Square;

/// Sentinel g value for a node whose cost is not known yet, and distance
/// value for squares a breadth-first search never reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// Index of a node in the solver's arena.
pub(crate) type NodeId = usize;

/// Bookkeeping for one discovered square.
///
/// There is at most one node per square. When a cheaper route to a square
/// still on the frontier is found, its node is updated in place.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    square: Square,
    g: i32,
    h: i32,
    f: i32,
    parent: Option<NodeId>,
    pub(crate) open: bool,
}

impl SearchNode {
    /// Create a node with an unknown cost and the given heuristic estimate.
    pub(crate) fn new(square: Square, h: i32) -> Self {
        Self {
            square,
            g: UNREACHABLE,
            h,
            f: UNREACHABLE,
            parent: None,
            open: false,
        }
    }

    #[inline]
    pub(crate) fn square(&self) -> Square {
        self.square
    }

    /// Best known cost from the start, or [`UNREACHABLE`].
    #[inline]
    pub(crate) fn g(&self) -> i32 {
        self.g
    }

    /// `g + h`. Only meaningful once `g` has been set.
    #[inline]
    pub(crate) fn f(&self) -> i32 {
        debug_assert!(self.g != UNREACHABLE, "f read before g was set for {}", self.square);
        self.f
    }

    /// The node this one was reached from; `None` for the start node.
    #[inline]
    pub(crate) fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Set the cost from the start and recompute `f`.
    #[inline]
    pub(crate) fn set_g(&mut self, g: i32) {
        self.g = g;
        self.f = g + self.h;
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    /// Frontier ranking key.
    #[inline]
    pub(crate) fn key(&self) -> NodeKey {
        NodeKey {
            f: self.f(),
            h: self.h,
            row: self.square.row,
            column: self.square.column,
        }
    }
}

/// Exploration order: smaller `f` first, then smaller `h`, then smaller row,
/// then smaller column. Field order gives the lexicographic derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeKey {
    pub(crate) f: i32,
    pub(crate) h: i32,
    pub(crate) row: i32,
    pub(crate) column: i32,
}
