// File: crates/trends-core/src/gate.rs
// Summary: One-shot render trigger: first visibility notification waits a settling delay, then renders.

use std::time::Duration;

use tracing::debug;

/// Default wait between the figure becoming visible and the first draw.
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Fires its render callback exactly once, on the first `on_visible` call.
#[derive(Debug)]
pub struct RenderGate {
    delay: Duration,
    fired: bool,
}

impl RenderGate {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fired: false }
    }

    pub fn has_fired(&self) -> bool { self.fired }

    /// Blocks for the settling delay, then runs `render`. Later calls do nothing and return None.
    pub fn on_visible<R>(&mut self, render: impl FnOnce() -> R) -> Option<R> {
        if self.fired {
            return None;
        }
        self.fired = true;
        debug!(delay_ms = self.delay.as_millis() as u64, "figure visible; rendering after delay");
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        Some(render())
    }
}

impl Default for RenderGate {
    fn default() -> Self { Self::new(SETTLE_DELAY) }
}
