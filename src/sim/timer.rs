//! Frame-driven timers
//!
//! The host only gives us a refresh-synchronized frame callback, so interval
//! work (spawning, ramping, countdown) is measured by accumulating frame
//! time here. A timer stops existing when the phase that owns it ends.

use serde::Serialize;

/// Fires once every `period_ms` of accumulated frame time
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period_ms: f64,
    elapsed_ms: f64,
}

impl IntervalTimer {
    /// Periods below 1ms are raised to 1ms
    pub fn new(period_ms: f64) -> Self {
        Self {
            period_ms: period_ms.max(1.0),
            elapsed_ms: 0.0,
        }
    }

    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    /// Accumulate `dt_ms`; returns how many periods elapsed
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        self.elapsed_ms += dt_ms.max(0.0);
        let mut fired = 0;
        while self.elapsed_ms >= self.period_ms {
            self.elapsed_ms -= self.period_ms;
            fired += 1;
        }
        fired
    }

    /// Start over with a new period (the old partial interval is dropped)
    pub fn restart(&mut self, period_ms: f64) {
        *self = Self::new(period_ms);
    }
}

/// What the countdown overlay shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CountdownDisplay {
    Count(u8),
    Go,
}

/// 3-2-1 countdown followed by a short "Go!" flash
#[derive(Debug, Clone)]
pub struct Countdown {
    display: CountdownDisplay,
    elapsed_ms: f64,
    step_ms: f64,
    go_ms: f64,
}

impl Countdown {
    pub fn new(from: u8, step_ms: f64, go_ms: f64) -> Self {
        let display = if from == 0 {
            CountdownDisplay::Go
        } else {
            CountdownDisplay::Count(from)
        };
        Self {
            display,
            elapsed_ms: 0.0,
            step_ms: step_ms.max(1.0),
            go_ms: go_ms.max(0.0),
        }
    }

    pub fn display(&self) -> CountdownDisplay {
        self.display
    }

    /// Advance by `dt_ms`; returns true once the "Go!" flash has finished
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        self.elapsed_ms += dt_ms.max(0.0);
        loop {
            match self.display {
                CountdownDisplay::Count(n) => {
                    if self.elapsed_ms < self.step_ms {
                        return false;
                    }
                    self.elapsed_ms -= self.step_ms;
                    self.display = if n > 1 {
                        CountdownDisplay::Count(n - 1)
                    } else {
                        CountdownDisplay::Go
                    };
                }
                CountdownDisplay::Go => return self.elapsed_ms >= self.go_ms,
            }
        }
    }
}
