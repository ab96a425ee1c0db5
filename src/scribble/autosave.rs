//! Debounced autosave.
//!
//! Drafts are saved after the user stops typing for a quiet period. Each new input
//! replaces the pending draft and restarts the window; the draft fires exactly once
//! when the window elapses uninterrupted.
//!
//! The debouncer owns no timer and no thread. Callers pass the current [`Instant`]
//! in, which keeps it deterministic under test and lets a UI drive it from whatever
//! loop it already has (see `cli/compose.rs` for a blocking reader loop).

use std::time::{Duration, Instant};

/// A title/body pair captured from the creation fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    /// Builds a draft from raw lines: the first line is the title, the rest is the body.
    pub fn from_lines(lines: &[String]) -> Self {
        match lines.split_first() {
            Some((title, body)) => Self {
                title: title.clone(),
                content: body.join("\n"),
            },
            None => Self::default(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    last_input_at: Instant,
}

/// Holds at most one pending value and releases it after `delay` of quiet.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replace any pending value and restart the quiet window at `now`.
    pub fn schedule(&mut self, now: Instant, value: T) {
        self.pending = Some(Pending {
            value,
            last_input_at: now,
        });
    }

    /// Drop the pending value without firing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }

    /// When the pending value becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.last_input_at + self.delay)
    }

    /// How long a caller may block before polling again. `None` when idle.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Release the pending value if its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(deadline) if now >= deadline => self.cancel(),
            _ => None,
        }
    }

    /// Release the pending value immediately, e.g. when input ends.
    pub fn flush(&mut self) -> Option<T> {
        self.cancel()
    }
}
