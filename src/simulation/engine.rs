//! High-level runtime engine settings
//!
//! Frame timing and the narration switch used when building and
//! running a `Scenario`

#[derive(Debug, Clone)]
pub struct Engine {
    pub frame_dt: f64, // fixed frame delta for scripted runs
    pub max_dt: f64, // larger host deltas are clamped to this
    pub narrate: bool, // false = physics only
}

impl Engine {
    /// Clamp a host frame delta so a stalled host does not fling balloons
    pub fn clamp_dt(&self, dt: f64) -> f64 {
        if dt > self.max_dt {
            tracing::warn!(dt, max_dt = self.max_dt, "frame delta clamped");
            self.max_dt
        } else {
            dt.max(0.0)
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            frame_dt: 1.0 / 60.0,
            max_dt: 0.1,
            narrate: true,
        }
    }
}
