// File: crates/trends-core/src/types.rs
// Summary: Shared layout constants (surface size, plot insets).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels; the figure is drawn 700px tall.
pub const HEIGHT: i32 = 700;

/// Plot area margins, in pixels. Top leaves room for title, subtitle and legend;
/// bottom for category labels and the source/note caption.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(70, 30, 160, 170)
    }
}
