//! Fixed-duration delays used to pace presentation flows.

use std::time::Duration;

/// Labeled phases that complete strictly in order, each after the same
/// fixed duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedSequence {
    phases: Vec<&'static str>,
    phase_duration: Duration,
    elapsed: Duration,
}

impl StagedSequence {
    pub fn new(phases: Vec<&'static str>, phase_duration: Duration) -> Self {
        Self {
            phases,
            phase_duration,
            elapsed: Duration::ZERO,
        }
    }

    pub fn phases(&self) -> &[&'static str] {
        &self.phases
    }

    /// Moves time forward; returns true once every phase has completed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(elapsed).min(self.total());
        self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.total()
    }

    /// Index of the phase in progress, `None` once complete.
    pub fn current_phase(&self) -> Option<usize> {
        if self.is_complete() {
            return None;
        }
        if self.phase_duration.is_zero() {
            return Some(0);
        }
        let index = self.elapsed.as_nanos() / self.phase_duration.as_nanos();
        usize::try_from(index).ok()
    }

    pub fn current_label(&self) -> Option<&'static str> {
        self.current_phase()
            .and_then(|index| self.phases.get(index).copied())
    }

    /// Number of phases already finished.
    pub fn completed_phases(&self) -> usize {
        match self.current_phase() {
            Some(index) => index,
            None => self.phases.len(),
        }
    }

    fn total(&self) -> Duration {
        let count = u32::try_from(self.phases.len()).unwrap_or(u32::MAX);
        self.phase_duration.saturating_mul(count)
    }
}

/// A single delayed value, e.g. an assistant reply that surfaces after a
/// typing pause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delayed<T> {
    value: T,
    remaining: Duration,
}

impl<T> Delayed<T> {
    pub fn new(value: T, delay: Duration) -> Self {
        Self {
            value,
            remaining: delay,
        }
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn is_due(&self) -> bool {
        self.remaining.is_zero()
    }

    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.is_due()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
