use std::time::{Duration, Instant};

/// Per-frame animation clock advancing by a fixed step, independent of wall time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ticker {
    step: f64,
    value: f64,
}

impl Ticker {
    pub const fn new(step: f64) -> Self {
        Self { step, value: 0.0 }
    }

    pub fn tick(&mut self) -> f32 {
        self.value += self.step;
        self.value as f32
    }

    pub fn value(&self) -> f32 {
        self.value as f32
    }
}

pub struct Stopwatch {
    start: Option<Instant>,
    elapsed: Duration,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            start: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn start_new() -> Self {
        let mut sw = Self::new();
        sw.start();

        sw
    }

    pub fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.elapsed = self.elapsed();
        self.start = None;
    }

    /// Returns the time since the last (re)start and starts counting again.
    pub fn restart(&mut self) -> Duration {
        let elapsed = self.elapsed();
        self.elapsed = elapsed;
        self.start = Some(Instant::now());

        elapsed
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
        self.start = None;
    }

    pub fn elapsed(&self) -> Duration {
        match self.start {
            Some(start) => start.elapsed(),
            None => self.elapsed,
        }
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts frames and reports the rate once per `window` of accumulated frame time.
pub struct FpsCounter {
    window: Duration,
    accumulated: Duration,
    frames: u32,
}

impl FpsCounter {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            accumulated: Duration::ZERO,
            frames: 0,
        }
    }

    pub fn record(&mut self, delta: Duration) -> Option<f64> {
        self.accumulated += delta;
        self.frames += 1;

        if self.accumulated >= self.window {
            let fps = self.frames as f64 / self.accumulated.as_secs_f64();
            self.accumulated = Duration::ZERO;
            self.frames = 0;

            Some(fps)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_advances_by_its_step() {
        let mut ticker = Ticker::new(0.25);
        assert_eq!(ticker.value(), 0.0);
        assert_eq!(ticker.tick(), 0.25);
        assert_eq!(ticker.tick(), 0.5);
        assert_eq!(ticker.value(), 0.5);
    }

    #[test]
    fn stopped_stopwatch_keeps_its_reading() {
        let mut sw = Stopwatch::start_new();
        std::thread::sleep(Duration::from_millis(2));
        sw.stop();

        let reading = sw.elapsed();
        assert!(reading >= Duration::from_millis(2));
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(sw.elapsed(), reading);

        sw.reset();
        assert_eq!(sw.elapsed(), Duration::ZERO);
    }

    #[test]
    fn fps_is_reported_once_per_window() {
        let mut fps = FpsCounter::new(Duration::from_secs(1));
        let frame = Duration::from_millis(250);

        assert_eq!(fps.record(frame), None);
        assert_eq!(fps.record(frame), None);
        assert_eq!(fps.record(frame), None);
        let rate = fps.record(frame).unwrap();
        assert!((rate - 4.0).abs() < 1e-9);

        assert_eq!(fps.record(frame), None);
    }
}
