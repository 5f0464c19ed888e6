use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic time source for animation scheduling, in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock measured from its own creation.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Externally driven clock.
///
/// Clones share the same time value, so a test or a host frame callback can
/// keep one handle and advance time while the scheduler owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: Rc<Cell<f64>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn starting_at(now_ms: f64) -> Self {
        Self {
            now_ms: Rc::new(Cell::new(now_ms)),
        }
    }

    pub fn set_ms(&self, now_ms: f64) {
        self.now_ms.set(now_ms);
    }

    pub fn advance_ms(&self, delta_ms: f64) {
        self.now_ms.set(self.now_ms.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }
}
