//! Frame clock: per-frame delta and a once-per-second FPS sample.

use std::time::{Duration, Instant};

const FPS_WINDOW: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
    window_start: Instant,
    frames: u32,
}

impl FrameClock {
    pub fn new(now: Instant) -> Self {
        Self {
            last: now,
            window_start: now,
            frames: 0,
        }
    }

    /// Milliseconds since the previous tick.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        self.frames += 1;
        dt.as_secs_f32() * 1000.0
    }

    /// Frames per second over the last full window, once per window.
    pub fn fps(&mut self, now: Instant) -> Option<f32> {
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < FPS_WINDOW {
            return None;
        }
        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.window_start = now;
        self.frames = 0;
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reports_milliseconds() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);
        assert_eq!(clock.tick(t0), 0.0);
        let dt = clock.tick(t0 + Duration::from_millis(16));
        assert!((dt - 16.0).abs() < 1e-3);
    }

    #[test]
    fn fps_is_sampled_once_per_window() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0);
        for i in 1..=30 {
            clock.tick(t0 + Duration::from_millis(20 * i));
        }
        assert_eq!(clock.fps(t0 + Duration::from_millis(600)), None);

        for i in 31..=60 {
            clock.tick(t0 + Duration::from_millis(20 * i));
        }
        let fps = clock.fps(t0 + Duration::from_millis(1200)).unwrap();
        assert!((fps - 50.0).abs() < 1e-3);
        assert_eq!(clock.fps(t0 + Duration::from_millis(1300)), None);
    }
}
