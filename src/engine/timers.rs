//! Virtual-time timer queue owned by a single view.
//!
//! Time is a `Duration` since the owning view mounted. The GUI feeds wall-clock
//! elapsed time every frame; tests feed whatever instants they like. Nothing
//! here sleeps or spawns, so dropping (or `cancel_all`-ing) the queue is all it
//! takes to guarantee no callback ever touches a torn-down view.

use std::time::Duration;

use crate::config::DF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A timer that came due during `pop_due`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<E> {
    pub id: TimerId,
    /// The deadline it was scheduled for (not the instant it was observed).
    pub at: Duration,
    pub event: E,
}

#[derive(Debug)]
struct Entry<E> {
    id: TimerId,
    due: Duration,
    period: Option<Duration>,
    event: E,
}

#[derive(Debug)]
pub struct TimerQueue<E> {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry<E>>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<E: Clone> TimerQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One-shot: fires once, `delay` after the current virtual instant.
    pub fn after(&mut self, delay: Duration, event: E) -> TimerId {
        let due = self.now.saturating_add(delay);
        self.push(due, None, event)
    }

    /// Repeating: first fire one `period` from now, then on the period grid.
    pub fn every(&mut self, period: Duration, event: E) -> TimerId {
        // A zero period would never move past `now`.
        let period = period.max(Duration::from_millis(1));
        let due = self.now.saturating_add(period);
        self.push(due, Some(period), event)
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        if removed && DF.log_timers {
            log::info!("timer {:?} cancelled", id);
        }
        removed
    }

    /// Drops every pending timer. Returns how many were pending.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        if DF.log_timers && count > 0 {
            log::info!("{} timers cancelled", count);
        }
        count
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// Pops the earliest timer due at or before `until` and moves the virtual
    /// clock to its deadline, so anything scheduled while handling it is
    /// measured from the right instant. Ties fire in registration order.
    ///
    /// A repeating timer that fell several periods behind fires once and
    /// re-arms on the first grid point after `until`.
    pub fn pop_due(&mut self, until: Duration) -> Option<Fired<E>> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= until)
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(i, _)| i)?;

        let due = self.entries[idx].due;
        self.now = self.now.max(due);

        match self.entries[idx].period {
            Some(period) => {
                let entry = &mut self.entries[idx];
                let behind = until.saturating_sub(entry.due).as_nanos();
                let steps = behind / period.as_nanos() + 1;
                let next = entry.due.as_nanos() + steps * period.as_nanos();
                entry.due = Duration::from_nanos(u64::try_from(next).unwrap_or(u64::MAX));
                Some(Fired {
                    id: entry.id,
                    at: due,
                    event: entry.event.clone(),
                })
            }
            None => {
                let entry = self.entries.swap_remove(idx);
                Some(Fired {
                    id: entry.id,
                    at: due,
                    event: entry.event,
                })
            }
        }
    }

    /// Moves the clock forward without firing anything. Never moves it back.
    pub fn settle(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Fires everything due up to `now` and leaves the clock at `now`.
    pub fn advance_to(&mut self, now: Duration) -> Vec<E> {
        let mut fired = Vec::new();
        while let Some(f) = self.pop_due(now) {
            fired.push(f.event);
        }
        self.settle(now);
        fired
    }

    fn push(&mut self, due: Duration, period: Option<Duration>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        if DF.log_timers {
            log::info!("timer {:?} due at {:?} (period {:?})", id, due, period);
        }
        self.entries.push(Entry {
            id,
            due,
            period,
            event,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn one_shot_never_fires_early() {
        let mut q = TimerQueue::new();
        q.after(ms(1000), "reply");
        assert!(q.advance_to(ms(999)).is_empty());
        assert_eq!(q.advance_to(ms(1000)), vec!["reply"]);
        assert!(q.is_empty());
        assert!(q.advance_to(ms(5000)).is_empty());
    }

    #[test]
    fn due_timers_fire_in_deadline_then_registration_order() {
        let mut q = TimerQueue::new();
        q.after(ms(300), "c");
        q.after(ms(100), "a");
        q.after(ms(300), "d");
        q.after(ms(200), "b");
        assert_eq!(q.advance_to(ms(1000)), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn interval_refires_on_its_grid() {
        let mut q = TimerQueue::new();
        q.every(ms(30), "tick");
        assert!(q.advance_to(ms(29)).is_empty());
        assert_eq!(q.advance_to(ms(30)), vec!["tick"]);
        assert_eq!(q.next_due(), Some(ms(60)));
        assert_eq!(q.advance_to(ms(60)), vec!["tick"]);
    }

    #[test]
    fn interval_skips_missed_periods() {
        let mut q = TimerQueue::new();
        q.every(ms(30), "tick");
        // Four periods elapsed at once: one fire, then back on the grid.
        assert_eq!(q.advance_to(ms(125)), vec!["tick"]);
        assert_eq!(q.next_due(), Some(ms(150)));
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut q = TimerQueue::new();
        let keep = q.after(ms(10), "keep");
        let drop_me = q.after(ms(10), "drop");
        assert!(q.cancel(drop_me));
        assert!(!q.cancel(drop_me));
        assert_eq!(q.advance_to(ms(10)), vec!["keep"]);
        assert!(!q.cancel(keep));

        q.every(ms(5), "tick");
        q.after(ms(50), "later");
        assert_eq!(q.cancel_all(), 2);
        assert!(q.advance_to(ms(10_000)).is_empty());
        assert_eq!(q.next_due(), None);
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut q = TimerQueue::new();
        q.settle(ms(500));
        q.settle(ms(100));
        assert_eq!(q.now(), ms(500));
        // Relative delays are measured from the settled clock.
        q.after(ms(100), "x");
        assert_eq!(q.next_due(), Some(ms(600)));
        assert!(q.advance_to(ms(200)).is_empty());
    }

    #[test]
    fn pop_due_moves_clock_to_the_deadline() {
        let mut q = TimerQueue::new();
        q.after(ms(30), "degrade");
        let fired = q.pop_due(ms(100)).unwrap();
        assert_eq!(fired.at, ms(30));
        assert_eq!(q.now(), ms(30));
        // Scheduled while handling: measured from 30, not 100.
        q.after(ms(5), "recover");
        assert_eq!(q.pop_due(ms(100)).map(|f| f.at), Some(ms(35)));
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut q = TimerQueue::new();
        q.every(Duration::ZERO, ());
        assert_eq!(q.next_due(), Some(ms(1)));
        assert_eq!(q.advance_to(ms(10)).len(), 1);
    }
}
