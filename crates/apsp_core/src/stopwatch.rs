use std::{
    fmt,
    time::{Duration, Instant},
};

use tracing::debug;

/// Wall-clock time accumulated over one or more laps.
pub struct Stopwatch {
    name: &'static str,
    lap_start: Option<Instant>,
    total: Duration,
}

impl Stopwatch {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            lap_start: None,
            total: Duration::ZERO,
        }
    }

    pub fn start(&mut self) {
        self.lap_start = Some(Instant::now());
    }

    /// Ends the running lap and returns its length. Without a running lap
    /// nothing is added.
    pub fn stop(&mut self) -> Duration {
        let lap = self
            .lap_start
            .take()
            .map_or(Duration::ZERO, |start| start.elapsed());
        self.total += lap;
        lap
    }

    /// Times `work` as a single lap.
    pub fn measure<T>(&mut self, work: impl FnOnce() -> T) -> T {
        self.start();
        let output = work();
        self.stop();
        output
    }

    pub fn total_duration(&self) -> Duration {
        self.total
    }

    pub fn report(&self) {
        debug!("{}", self);
    }
}

impl fmt::Display for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]: {:.3} ms",
            self.name,
            self.total.as_secs_f64() * 1000.0
        )
    }
}
