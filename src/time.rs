//! Frame clock for the render loop.
//!
//! Tracks delta time, elapsed time, a frame counter and a periodically
//! refreshed FPS figure. The delta is capped so a stalled frame (window drag,
//! debugger break) cannot fling a time-based field across the screen.

use std::time::{Duration, Instant};

/// Longest step a single tick may report, in seconds.
pub const MAX_DELTA: f32 = 0.1;

/// Per-frame timing for the viewer.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
    paused: bool,
    pause_elapsed: Duration,
    fixed_delta: Option<f32>,
}

impl FrameClock {
    /// Start a clock at the current instant.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
            paused: false,
            pause_elapsed: Duration::ZERO,
            fixed_delta: None,
        }
    }

    /// Advance the clock by one frame and return the delta in seconds.
    ///
    /// While paused the delta is zero and the frame counter does not move.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();

        if self.paused {
            self.delta_secs = 0.0;
            return self.delta_secs;
        }

        let raw_delta = now.duration_since(self.last_frame).as_secs_f32();
        self.delta_secs = self.fixed_delta.unwrap_or(raw_delta).min(MAX_DELTA);
        self.last_frame = now;

        let raw_elapsed = now.duration_since(self.start).saturating_sub(self.pause_elapsed);
        self.elapsed_secs = raw_elapsed.as_secs_f32();
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        self.delta_secs
    }

    /// Seconds since start, excluding time spent paused.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Seconds covered by the last tick.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Frames ticked while running.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second, refreshed twice a second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        if self.paused {
            let now = Instant::now();
            self.pause_elapsed += now.duration_since(self.last_frame);
            self.last_frame = now;
            self.paused = false;
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Report a constant delta every tick. `None` returns to wall-clock timing.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clock_new() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame(), 0);
        assert!(!clock.is_paused());
        assert_eq!(clock.delta(), 0.0);
    }

    #[test]
    fn test_clock_tick() {
        let mut clock = FrameClock::new();
        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta > 0.0);
        assert!(clock.elapsed() > 0.0);
        assert_eq!(clock.frame(), 1);
    }

    #[test]
    fn test_clock_pause() {
        let mut clock = FrameClock::new();
        clock.tick();

        clock.toggle_pause();
        assert!(clock.is_paused());

        let elapsed_before = clock.elapsed();
        thread::sleep(Duration::from_millis(10));
        assert_eq!(clock.tick(), 0.0);
        assert_eq!(clock.elapsed(), elapsed_before);
        assert_eq!(clock.frame(), 1);

        clock.toggle_pause();
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_delta_is_capped() {
        let mut clock = FrameClock::new();
        clock.set_fixed_delta(Some(5.0));
        assert_eq!(clock.tick(), MAX_DELTA);
    }

    #[test]
    fn test_fixed_delta() {
        let mut clock = FrameClock::new();
        clock.set_fixed_delta(Some(1.0 / 60.0));

        thread::sleep(Duration::from_millis(50));
        clock.tick();

        assert!((clock.delta() - 1.0 / 60.0).abs() < 1e-6);
    }
}
