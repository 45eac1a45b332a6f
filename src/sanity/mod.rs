//! Sanity value and the Normal/Panic state machine.
//!
//! The transitions here are pure; the simulation owns the timer queue and
//! schedules whatever a transition asks for.

use crate::core::constants::PANIC_RESTORE_STEP;
use crate::core::TimerId;

/// What the caller must do after [`SanityState::apply_delta`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanityChange {
    /// In panic; nothing happened.
    Ignored,
    /// Sanity is full. No timer needed.
    Full,
    /// Partially depleted: (re)schedule the regeneration timer.
    Depleted,
    /// Hit zero: cancel regeneration, run panic hooks, start panic stepping.
    EnteredPanic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanicStep {
    Continue,
    Recovered,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SanityState {
    pub current: f64,
    pub is_panic: bool,
    /// The single outstanding regen or panic-step timer.
    pub timer: Option<TimerId>,
}

impl SanityState {
    pub fn new(max_sanity: f64) -> Self {
        Self {
            current: max_sanity,
            is_panic: false,
            timer: None,
        }
    }

    pub fn fraction(&self, max_sanity: f64) -> f64 {
        if max_sanity <= 0.0 {
            return 0.0;
        }
        (self.current / max_sanity).clamp(0.0, 1.0)
    }

    pub fn apply_delta(&mut self, delta: f64, max_sanity: f64) -> SanityChange {
        if self.is_panic {
            return SanityChange::Ignored;
        }

        self.current += delta;
        if self.current <= 0.0 {
            self.current = 0.0;
            self.is_panic = true;
            return SanityChange::EnteredPanic;
        }

        if self.current >= max_sanity {
            self.current = max_sanity;
            return SanityChange::Full;
        }

        SanityChange::Depleted
    }

    /// One recovery tick while in panic, against the current maximum.
    pub fn panic_step(&mut self, max_sanity: f64) -> PanicStep {
        if !self.is_panic {
            return PanicStep::Recovered;
        }
        self.current += PANIC_RESTORE_STEP;
        if self.current >= max_sanity {
            self.current = max_sanity;
            self.is_panic = false;
            self.timer = None;
            return PanicStep::Recovered;
        }
        PanicStep::Continue
    }

    /// Regeneration timer fired: jump straight to full.
    pub fn regenerate(&mut self, max_sanity: f64) {
        if !self.is_panic {
            self.current = max_sanity;
            self.timer = None;
        }
    }

    /// Direct restore used by panic hooks. Works in either state.
    pub fn restore(&mut self, amount: f64, max_sanity: f64) {
        self.current = (self.current + amount).clamp(0.0, max_sanity);
    }

    /// Keeps the value inside a maximum that shrank.
    pub fn clamp_to(&mut self, max_sanity: f64) {
        if self.current > max_sanity {
            self.current = max_sanity;
        }
    }
}
