use core::time::Duration;

use web_time::Instant;

/// Passive wall-clock timer, polled by its owner instead of ticking on its own.
#[derive(Clone, Debug, Default)]
pub struct GameTimer {
    started_at: Option<Instant>,
    frozen: Option<Duration>,
}

impl GameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (or restarts) counting from now.
    pub fn start(&mut self) {
        log::debug!("timer started");
        self.started_at = Some(Instant::now());
        self.frozen = None;
    }

    /// Freezes the elapsed value; stopping a stopped timer does nothing.
    pub fn stop(&mut self) {
        if let (Some(started_at), None) = (self.started_at, self.frozen) {
            let elapsed = started_at.elapsed();
            log::debug!("timer stopped after {:?}", elapsed);
            self.frozen = Some(elapsed);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.frozen.is_none()
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn elapsed(&self) -> Duration {
        match (self.started_at, self.frozen) {
            (_, Some(frozen)) => frozen,
            (Some(started_at), None) => started_at.elapsed(),
            (None, None) => Duration::ZERO,
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}
