use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::animation::Clock;
use crate::error::ChartResult;

/// Lifecycle of one animation instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationPhase {
    Running,
    Completed,
    Cancelled,
}

/// Caller-side reference to one started animation.
///
/// A host that schedules its own frame callbacks keeps the handle and passes
/// it back through `AnimationScheduler::tick_scheduled`; once the animation is
/// cancelled or superseded those callbacks become no-ops.
#[derive(Debug, Clone)]
pub struct AnimationHandle {
    id: u64,
    phase: Rc<Cell<AnimationPhase>>,
}

impl AnimationHandle {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase.get()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.phase.get() == AnimationPhase::Cancelled
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase.get() == AnimationPhase::Running
    }
}

/// Ephemeral per-animation state.
#[derive(Debug, Clone)]
pub struct AnimationState {
    id: u64,
    start_ms: f64,
    duration_ms: f64,
    progress: f64,
    phase: Rc<Cell<AnimationPhase>>,
}

impl AnimationState {
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Last progress handed to the tick callback.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.phase.get() == AnimationPhase::Cancelled
    }

    fn progress_at(&self, now_ms: f64) -> f64 {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed = (now_ms - self.start_ms).max(0.0);
        let raw = (elapsed / self.duration_ms).min(1.0);
        let raw = if raw.is_finite() { raw } else { 1.0 };
        // Clocks may step backwards; progress never does.
        raw.max(self.progress)
    }
}

/// Result of one scheduler tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickStatus {
    /// No animation is active, or the tick belonged to a retired animation.
    Idle,
    Running { progress: f64 },
    /// The callback received `1.0` and the animation stopped.
    Completed,
}

type TickCallback<T> = Box<dyn FnMut(&mut T, f64) -> ChartResult<()>>;

struct ActiveAnimation<T> {
    state: AnimationState,
    on_tick: TickCallback<T>,
}

/// Drives progressive reveal with one active animation at a time.
///
/// Single-threaded and cooperative: the host calls `tick` from its per-frame
/// callback or a fixed-interval timer, and every tick invokes the callback at
/// most once with non-decreasing progress. `T` is the context handed to the
/// callback, typically the drawing surface.
pub struct AnimationScheduler<C: Clock, T> {
    clock: C,
    next_id: u64,
    active: Option<ActiveAnimation<T>>,
}

impl<C: Clock, T> AnimationScheduler<C, T> {
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            next_id: 1,
            active: None,
        }
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Starts a new animation, cancelling any animation still in flight.
    ///
    /// The callback is not invoked here; the first `tick` delivers the first
    /// progress value.
    pub fn start<F>(&mut self, duration_ms: f64, on_tick: F) -> AnimationHandle
    where
        F: FnMut(&mut T, f64) -> ChartResult<()> + 'static,
    {
        self.cancel();

        let id = self.next_id;
        self.next_id += 1;
        let phase = Rc::new(Cell::new(AnimationPhase::Running));
        let state = AnimationState {
            id,
            start_ms: self.clock.now_ms(),
            duration_ms,
            progress: 0.0,
            phase: Rc::clone(&phase),
        };
        debug!(id, duration_ms, "animation started");

        self.active = Some(ActiveAnimation {
            state,
            on_tick: Box::new(on_tick),
        });
        AnimationHandle { id, phase }
    }

    /// Cancels the active animation. Returns `true` when one was running.
    pub fn cancel(&mut self) -> bool {
        match self.active.take() {
            Some(active) => {
                active.state.phase.set(AnimationPhase::Cancelled);
                debug!(
                    id = active.state.id,
                    progress = active.state.progress,
                    "animation cancelled"
                );
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn state(&self) -> Option<&AnimationState> {
        self.active.as_ref().map(|active| &active.state)
    }

    /// Advances the active animation to the current clock time.
    pub fn tick(&mut self, context: &mut T) -> ChartResult<TickStatus> {
        let now_ms = self.clock.now_ms();
        let Some(active) = self.active.as_mut() else {
            return Ok(TickStatus::Idle);
        };

        let progress = active.state.progress_at(now_ms);
        active.state.progress = progress;
        trace!(id = active.state.id, progress, "animation tick");

        if let Err(err) = (active.on_tick)(context, progress) {
            warn!(id = active.state.id, error = %err, "animation tick failed; stopping");
            self.cancel();
            return Err(err);
        }

        if progress >= 1.0 {
            if let Some(finished) = self.active.take() {
                finished.state.phase.set(AnimationPhase::Completed);
                debug!(id = finished.state.id, "animation completed");
            }
            return Ok(TickStatus::Completed);
        }

        Ok(TickStatus::Running { progress })
    }

    /// Tick issued by a host callback that was scheduled for `handle`.
    ///
    /// Does nothing unless `handle` still refers to the active animation.
    pub fn tick_scheduled(
        &mut self,
        handle: &AnimationHandle,
        context: &mut T,
    ) -> ChartResult<TickStatus> {
        let is_current = self
            .active
            .as_ref()
            .is_some_and(|active| active.state.id == handle.id);
        if !is_current {
            trace!(id = handle.id, phase = ?handle.phase(), "ignoring stale scheduled tick");
            return Ok(TickStatus::Idle);
        }
        self.tick(context)
    }
}

impl<C: Clock + fmt::Debug, T> fmt::Debug for AnimationScheduler<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationScheduler")
            .field("clock", &self.clock)
            .field("next_id", &self.next_id)
            .field("active", &self.state())
            .finish()
    }
}
