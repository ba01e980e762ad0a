//! Gameplay break periods.

/// A pause in active gameplay, in clock milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreakPeriod {
    pub start_time: f64,
    pub end_time: f64,
}

impl BreakPeriod {
    /// Breaks shorter than this are not displayed at all.
    pub const MIN_DURATION: f64 = 650.0;

    pub fn new(start_time: f64, end_time: f64) -> Self {
        assert!(
            end_time >= start_time,
            "break period must not end before it starts ({start_time}..{end_time})"
        );
        Self {
            start_time,
            end_time,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Whether this break is long enough to be displayed.
    pub fn has_effect(&self) -> bool {
        self.duration() >= Self::MIN_DURATION
    }

    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time < self.end_time
    }
}

#[cfg(test)]
#[path = "../../tests/unit/game/breaks.rs"]
mod tests;
