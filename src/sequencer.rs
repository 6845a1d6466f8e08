//! Chain-level controller that walks the bars one leg at a time.
//!
//! Provides [`BarSequencer`], which owns a [`Chain`] and tracks which node is
//! animating and which way the walk is heading. Each completed leg moves the
//! walk one node along; hitting either end reverses it, so repeated taps sweep
//! the bars down the stack and back up again.

use crate::chain::{Chain, Neighbor, Node, Traversal};
use crate::geometry::Canvas;

/// A completed leg: the node that finished and the scale it committed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepEvent {
    pub index: usize,
    pub scale: f32,
}

/// Walks a chain of `N` bars.
///
/// # Type Parameters
/// * `N` - Number of bars in the stack
#[derive(Debug, Clone)]
pub struct BarSequencer<const N: usize> {
    chain: Chain<N>,
    current: usize,
    traversal: Traversal,
}

impl<const N: usize> BarSequencer<N> {
    /// Creates a sequencer at the first node, walking forward.
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
            current: 0,
            traversal: Traversal::Forward,
        }
    }

    /// Advances the current node's leg.
    ///
    /// When the leg completes, `current` moves to its neighbor in the walk
    /// direction (reversing at the ends) and the completed step is returned.
    pub fn update(&mut self) -> Option<StepEvent> {
        let (index, scale) = self.chain.get_mut(self.current)?.update()?;

        match self.chain.next_index(self.current, self.traversal) {
            Neighbor::Moved(next) => self.current = next,
            Neighbor::Boundary(_) => {
                self.traversal = self.traversal.reversed();
                #[cfg(feature = "defmt")]
                defmt::debug!("walk reversed at node {}: {}", index, self.traversal);
            }
        }

        Some(StepEvent { index, scale })
    }

    /// Starts a leg on the current node.
    ///
    /// Returns `false` if that node is already mid-leg.
    pub fn start_updating(&mut self) -> bool {
        self.chain
            .get_mut(self.current)
            .is_some_and(|node| node.start_updating())
    }

    /// Draws the whole chain.
    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        self.chain.draw(canvas);
    }

    /// Index of the node the next leg runs on.
    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Current walk direction.
    #[inline]
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Returns true while the current node is mid-leg.
    pub fn is_animating(&self) -> bool {
        self.chain
            .get(self.current)
            .is_some_and(|node| !node.state().is_idle())
    }

    /// Returns the node at `index`, if any.
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.chain.get(index)
    }

    /// Returns the underlying chain.
    pub fn chain(&self) -> &Chain<N> {
        &self.chain
    }
}

impl<const N: usize> Default for BarSequencer<N> {
    fn default() -> Self {
        Self::new()
    }
}
