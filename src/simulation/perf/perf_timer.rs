//! Phase clock for one step: laps for collision and propagation, plus the
//! total since the step began.

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

pub(crate) struct StepClock {
    started: f64,
    last_lap: f64,
}

impl StepClock {
    pub(crate) fn start() -> Self {
        let now = now_ms();
        Self { started: now, last_lap: now }
    }

    /// Milliseconds since the previous lap (or the start).
    pub(crate) fn lap(&mut self) -> f64 {
        let now = now_ms();
        let ms = (now - self.last_lap).max(0.0);
        self.last_lap = now;
        ms
    }

    pub(crate) fn total(&self) -> f64 {
        (now_ms() - self.started).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laps_never_exceed_the_total() {
        let mut clock = StepClock::start();
        let a = clock.lap();
        let b = clock.lap();
        assert!(a >= 0.0 && b >= 0.0);
        assert!(a + b <= clock.total() + 1e-9);
    }
}
