//! Shared test infrastructure for step-move-bar integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use step_move_bar::{Canvas, Rect, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Recording Canvas
// ============================================================================

/// Canvas that records the last frame's clear color and rectangles
pub struct RecordingCanvas {
    width: f32,
    height: f32,
    background: Option<Srgb>,
    rects: heapless::Vec<(Rect, Srgb), 32>,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            background: None,
            rects: heapless::Vec::new(),
        }
    }

    pub fn background(&self) -> Option<Srgb> {
        self.background
    }

    pub fn rects(&self) -> &[(Rect, Srgb)] {
        &self.rects
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Srgb) {
        self.background = Some(color);
        self.rects.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Srgb) {
        let _ = self.rects.push((rect, color));
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}

/// Compare two floats with tolerance
pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.001
}
