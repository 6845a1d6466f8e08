#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`AnimationState`**: Scale of one bar and the leg it is running (`Sweep`)
//! - **`Chain`**: Fixed array of `Node`s with index-based neighbor lookup
//! - **`BarSequencer`**: Walks the chain one leg at a time, reversing at either end
//! - **`FrameAnimator`**: Non-blocking frame scheduler with a fixed interval
//! - **`Renderer`**: Paints the widget, handles taps and reports `FrameTiming`
//! - **`Canvas`**: Trait to implement for your drawing surface
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! The library uses `Srgb<f32>` (0.0-1.0 range) for all colors. When
//! implementing `Canvas`, convert these values to your surface's native format.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod animator;
pub mod chain;
pub mod colors;
pub mod geometry;
pub mod input;
pub mod renderer;
pub mod sequencer;
pub mod state;
pub mod time;

pub use animator::{FrameAnimator, FrameTiming, Tick};
pub use chain::{Chain, Neighbor, Node, Traversal};
pub use colors::{BACKGROUND, BAR};
pub use geometry::{Canvas, Layout, Rect};
pub use input::{InputError, TouchAction};
pub use renderer::{Renderer, STEP_HISTORY};
pub use sequencer::{BarSequencer, StepEvent};
pub use state::{AnimationState, StateEvent, Sweep};
pub use time::{FRAME_INTERVAL_MS, TimeDuration, TimeInstant, TimeSource};

/// Number of bars in the stack.
pub const NODES: usize = 5;

/// Sequencer for the standard five-bar stack.
pub type StepMoveBar = BarSequencer<NODES>;

/// Renderer for the standard five-bar stack.
pub type BarRenderer<'t, I, T> = Renderer<'t, I, T, NODES>;
