// SPDX-License-Identifier: MPL-2.0
//! Deferred callbacks for the notification lifecycle.
//!
//! The host drives time explicitly through [`Timers::pop_due`]; nothing here
//! spawns threads or sleeps. Callbacks with equal deadlines run in the order
//! they were armed.

use super::notification::NotificationId;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

/// What a deferred callback does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKind {
    /// Start closing an auto-dismissing notification.
    AutoDismiss,
    /// Detach a closing notification from the container.
    Detach,
    /// One-shot overflow check after insertion.
    MeasureOverflow,
}

/// A deferred callback bound to one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timer {
    pub due: Instant,
    seq: u64,
    pub kind: TimerKind,
    pub id: NotificationId,
}

/// Min-heap of pending callbacks ordered by `(due, arming order)`.
#[derive(Debug, Default)]
pub struct Timers {
    pending: BinaryHeap<Reverse<Timer>>,
    next_seq: u64,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a callback to fire at `due`.
    pub fn arm(&mut self, due: Instant, kind: TimerKind, id: NotificationId) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Reverse(Timer { due, seq, kind, id }));
    }

    /// Removes and returns the earliest callback due at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<Timer> {
        if self.pending.peek().is_some_and(|Reverse(timer)| timer.due <= now) {
            self.pending.pop().map(|Reverse(timer)| timer)
        } else {
            None
        }
    }

    /// Deadline of the next pending callback, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.peek().map(|Reverse(timer)| timer.due)
    }

    /// Pending callbacks for one notification, earliest first.
    #[must_use]
    pub fn scheduled_for(&self, id: NotificationId) -> Vec<Timer> {
        let mut timers: Vec<Timer> = self
            .pending
            .iter()
            .map(|Reverse(timer)| *timer)
            .filter(|timer| timer.id == id)
            .collect();
        timers.sort_unstable();
        timers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn pop_due_respects_deadline() {
        let base = Instant::now();
        let id = NotificationId::new();
        let mut timers = Timers::new();
        timers.arm(base + Duration::from_millis(100), TimerKind::AutoDismiss, id);

        assert!(timers.pop_due(base).is_none());
        assert!(timers.pop_due(base + Duration::from_millis(99)).is_none());

        let timer = timers.pop_due(base + Duration::from_millis(100)).unwrap();
        assert_eq!(timer.kind, TimerKind::AutoDismiss);
        assert!(timers.is_empty());
    }

    #[test]
    fn earlier_deadline_fires_first() {
        let base = Instant::now();
        let first = NotificationId::new();
        let second = NotificationId::new();
        let mut timers = Timers::new();
        timers.arm(base + Duration::from_millis(500), TimerKind::AutoDismiss, second);
        timers.arm(base + Duration::from_millis(10), TimerKind::Detach, first);

        let later = base + Duration::from_secs(1);
        assert_eq!(timers.pop_due(later).unwrap().id, first);
        assert_eq!(timers.pop_due(later).unwrap().id, second);
    }

    #[test]
    fn equal_deadlines_fire_in_arming_order() {
        let base = Instant::now();
        let ids: Vec<NotificationId> = (0..4).map(|_| NotificationId::new()).collect();
        let mut timers = Timers::new();
        // Arm in reverse id order so ordering by id would be visible.
        for id in ids.iter().rev() {
            timers.arm(base, TimerKind::MeasureOverflow, *id);
        }

        let fired: Vec<NotificationId> =
            std::iter::from_fn(|| timers.pop_due(base)).map(|t| t.id).collect();
        let expected: Vec<NotificationId> = ids.into_iter().rev().collect();
        assert_eq!(fired, expected);
    }

    #[test]
    fn scheduled_for_filters_by_notification() {
        let base = Instant::now();
        let a = NotificationId::new();
        let b = NotificationId::new();
        let mut timers = Timers::new();
        timers.arm(base + Duration::from_millis(5), TimerKind::AutoDismiss, a);
        timers.arm(base, TimerKind::MeasureOverflow, a);
        timers.arm(base, TimerKind::MeasureOverflow, b);

        let kinds: Vec<TimerKind> = timers.scheduled_for(a).iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![TimerKind::MeasureOverflow, TimerKind::AutoDismiss]);
        assert_eq!(timers.len(), 3);
        assert_eq!(timers.next_deadline(), Some(base));
    }
}
