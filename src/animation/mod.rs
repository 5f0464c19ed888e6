//! Progressive-reveal animation.
//!
//! `AnimationScheduler` replaces self-rescheduling frame callbacks with an
//! explicit start/cancel/tick object over an injectable `Clock`, so tests can
//! drive progress deterministically.

mod clock;
mod reveal;
mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use reveal::{RevealProgress, RevealStrategy};
pub use scheduler::{
    AnimationHandle, AnimationPhase, AnimationScheduler, AnimationState, TickStatus,
};
