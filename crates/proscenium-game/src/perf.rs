use std::fmt;
use std::time::{Duration, Instant};

/// Accumulating stopwatch for one section of the frame.
#[derive(Debug, Clone)]
pub struct PerfCounter {
    name: &'static str,
    started: Option<Instant>,
    current: Duration,
    total: Duration,
    min: Duration,
    max: Duration,
    count: u64,
}

impl PerfCounter {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            started: None,
            current: Duration::ZERO,
            total: Duration::ZERO,
            min: Duration::MAX,
            max: Duration::ZERO,
            count: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Stops the running measurement and records it. Returns the measured span,
    /// or `None` if `start` was not called.
    pub fn stop(&mut self) -> Option<Duration> {
        let elapsed = self.started.take()?.elapsed();
        self.record(elapsed);
        Some(elapsed)
    }

    /// Adds one sample.
    pub fn record(&mut self, sample: Duration) {
        self.current = sample;
        self.total += sample;
        self.min = self.min.min(sample);
        self.max = self.max.max(sample);
        self.count += 1;
    }

    /// Latest sample.
    pub fn current(&self) -> Duration {
        self.current
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn min(&self) -> Option<Duration> {
        (self.count > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<Duration> {
        (self.count > 0).then_some(self.max)
    }

    pub fn average(&self) -> Option<Duration> {
        // u32 samples at 60 fps last about two years.
        let count = u32::try_from(self.count).ok().filter(|&c| c > 0)?;
        Some(self.total / count)
    }
}

fn millis(d: Option<Duration>) -> f64 {
    d.map_or(0.0, |d| d.as_secs_f64() * 1000.0)
}

impl fmt::Display for PerfCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: n={} cur={:.3}ms avg={:.3}ms min={:.3}ms max={:.3}ms",
            self.name,
            self.count,
            self.current.as_secs_f64() * 1000.0,
            millis(self.average()),
            millis(self.min()),
            millis(self.max()),
        )
    }
}

/// The counters measured around every frame.
#[derive(Debug, Clone)]
pub struct FrameCounters {
    /// Whole frame: swap, update, render and presentation, pacing excluded.
    pub frame: PerfCounter,
    pub update: PerfCounter,
    pub draw: PerfCounter,
}

impl Default for FrameCounters {
    fn default() -> Self {
        Self {
            frame: PerfCounter::new("loop"),
            update: PerfCounter::new("update"),
            draw: PerfCounter::new("draw"),
        }
    }
}

impl FrameCounters {
    pub fn iter(&self) -> impl Iterator<Item = &PerfCounter> {
        [&self.frame, &self.update, &self.draw].into_iter()
    }
}
