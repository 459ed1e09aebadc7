use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: &'static str,
    pub duration: Duration,
}

/// Durations of the steps of one decode-compose cycle.
#[derive(Debug, Default)]
pub struct CycleTimings {
    index: u64,
    steps: Vec<StepTiming>,
}

impl CycleTimings {
    pub fn new(index: u64) -> Self {
        Self {
            index,
            steps: Vec::new(),
        }
    }

    pub fn add_step(&mut self, name: &'static str, duration: Duration) {
        self.steps.push(StepTiming { name, duration });
    }

    /// Runs `f` and records its duration under `name`.
    pub fn time<T>(&mut self, name: &'static str, f: impl FnOnce() -> T) -> T {
        let timer = Timer::start(name);
        let out = f();
        let (name, duration) = timer.stop();
        self.add_step(name, duration);
        out
    }

    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }

    pub fn log_summary(&self) {
        let total = self.total_duration();
        for step in &self.steps {
            debug!(
                index = self.index,
                "{:<20} {:>9.3}ms",
                step.name,
                step.duration.as_secs_f64() * 1000.0
            );
        }
        debug!(
            index = self.index,
            "frame cycle total {:.3}ms",
            total.as_secs_f64() * 1000.0
        );
    }
}

pub struct Timer {
    start: Instant,
    name: &'static str,
}

impl Timer {
    pub fn start(name: &'static str) -> Self {
        Self {
            start: Instant::now(),
            name,
        }
    }

    pub fn stop(self) -> (&'static str, Duration) {
        (self.name, self.start.elapsed())
    }
}
