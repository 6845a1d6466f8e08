//! Fixed-size chain of bar nodes with index-based traversal.

use crate::colors::BAR;
use crate::geometry::{Canvas, Layout};
use crate::state::AnimationState;

/// Direction the sequencer walks the chain in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Traversal {
    /// Toward higher indices.
    #[default]
    Forward,
    /// Toward lower indices.
    Backward,
}

impl Traversal {
    /// The opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Traversal::Forward => Traversal::Backward,
            Traversal::Backward => Traversal::Forward,
        }
    }

    /// Signed step: `1` forward, `-1` backward.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Traversal::Forward => 1,
            Traversal::Backward => -1,
        }
    }
}

/// Result of looking up a neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Neighbor {
    /// Moved to the node at this index.
    Moved(usize),
    /// No node in that direction; stayed on this index.
    Boundary(usize),
}

impl Neighbor {
    /// Index landed on, whether or not a move happened.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Neighbor::Moved(i) | Neighbor::Boundary(i) => i,
        }
    }
}

/// One bar row and its animation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    index: usize,
    state: AnimationState,
}

impl Node {
    /// Creates an idle node at `index`.
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            state: AnimationState::new(),
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    /// Advances this node's leg; on completion returns `(index, committed_scale)`.
    pub fn update(&mut self) -> Option<(usize, f32)> {
        self.state.update().map(|scale| (self.index, scale))
    }

    /// Starts a leg if this node is idle.
    pub fn start_updating(&mut self) -> bool {
        self.state.start_updating()
    }

    /// Paints this node's two segments.
    pub fn draw<C: Canvas>(&self, canvas: &mut C, layout: &Layout) {
        for rect in layout.segments(self.index, self.state.scale()) {
            canvas.fill_rect(rect, BAR);
        }
    }
}

/// `N` nodes with contiguous indices `0..N`.
///
/// Neighbors are found by index arithmetic; the first node has no
/// predecessor and the last has no successor.
#[derive(Debug, Clone)]
pub struct Chain<const N: usize> {
    nodes: [Node; N],
}

impl<const N: usize> Chain<N> {
    /// Builds the chain with every node idle.
    pub fn new() -> Self {
        Self {
            nodes: core::array::from_fn(Node::new),
        }
    }

    /// Number of nodes.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns the node at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    /// Index of the previous node, if `index` is not the first.
    pub fn prev(&self, index: usize) -> Option<usize> {
        index.checked_sub(1).filter(|&i| i < N)
    }

    /// Index of the following node, if `index` is not the last.
    pub fn next(&self, index: usize) -> Option<usize> {
        index.checked_add(1).filter(|&i| i < N)
    }

    /// Neighbor of `index` in `traversal` direction.
    ///
    /// At either end of the chain this stays on `index` and reports
    /// [`Neighbor::Boundary`] so the caller can reverse direction.
    pub fn next_index(&self, index: usize, traversal: Traversal) -> Neighbor {
        let neighbor = match traversal {
            Traversal::Forward => self.next(index),
            Traversal::Backward => self.prev(index),
        };
        match neighbor {
            Some(i) => Neighbor::Moved(i),
            None => Neighbor::Boundary(index),
        }
    }

    /// Iterates nodes root to tail.
    pub fn iter(&self) -> core::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Draws every node, root to tail.
    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        let (width, _) = canvas.size();
        let layout = Layout::new(width, N);
        for node in &self.nodes {
            node.draw(canvas, &layout);
        }
    }
}

impl<const N: usize> Default for Chain<N> {
    fn default() -> Self {
        Self::new()
    }
}
