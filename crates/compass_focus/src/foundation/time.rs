//! Time management utilities

/// Accumulates real time spent continuously focusing a marker
///
/// Unlike a wall-clock stopwatch this is advanced explicitly with the host's
/// frame delta, so a frame with zero elapsed time leaves it untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FocusClock {
    elapsed: f32,
}

impl FocusClock {
    /// Create a clock at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame's real-time delta in seconds
    ///
    /// Negative deltas are ignored.
    pub fn advance(&mut self, delta_seconds: f32) {
        if delta_seconds > 0.0 {
            self.elapsed += delta_seconds;
        }
    }

    /// Reset the clock to zero
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Seconds accumulated since the last reset
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed
    }

    /// Whether at least `delay_seconds` have accumulated
    pub fn has_reached(&self, delay_seconds: f32) -> bool {
        self.elapsed >= delay_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clock_accumulates_and_resets() {
        let mut clock = FocusClock::new();
        clock.advance(0.25);
        clock.advance(0.5);
        assert_relative_eq!(clock.elapsed_secs(), 0.75);
        assert!(clock.has_reached(0.75));
        assert!(!clock.has_reached(0.8));

        clock.reset();
        assert_eq!(clock.elapsed_secs(), 0.0);
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let mut clock = FocusClock::new();
        clock.advance(-1.0);
        assert_eq!(clock.elapsed_secs(), 0.0);
    }
}
