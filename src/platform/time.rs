//! Monotonic frame clock

use std::time::Instant;

/// Source of elapsed wall-clock time
pub trait Clock {
    /// Milliseconds since the previous call (or since creation on the first)
    fn elapsed_ms(&mut self) -> f32;
}

/// `Instant`-backed clock
#[derive(Debug)]
pub struct SystemClock {
    last: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed_ms(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed.as_secs_f32() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_system_clock_measures_since_previous_poll() {
        let mut clock = SystemClock::new();
        std::thread::sleep(Duration::from_millis(5));
        let first = clock.elapsed_ms();
        assert!(first >= 5.0);

        let second = clock.elapsed_ms();
        assert!(second >= 0.0);
        assert!(second < first);
    }
}
