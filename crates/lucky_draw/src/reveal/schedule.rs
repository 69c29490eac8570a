//! Cancellable queue of delayed steps.
//!
//! [`Schedule`] replaces chains of timer callbacks: steps are queued with a due
//! time and drained in due order as the host clock advances. [`Schedule::cancel`]
//! drops every pending step in one call and bumps the generation, so a
//! [`Scheduled`] step held by a host across a cancel is recognisably stale.
use std::collections::VecDeque;
use std::time::Duration;

/// A step together with its due time and the generation it was queued under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scheduled<T> {
    pub due: Duration,
    pub generation: u64,
    pub step: T,
}

/// Due-ordered queue of pending steps.
#[derive(Debug)]
pub struct Schedule<T> {
    queue: VecDeque<Scheduled<T>>,
    generation: u64,
}

impl<T> Schedule<T> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Due time of the earliest pending step.
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.front().map(|s| s.due)
    }

    /// Queues `step` at `due`. Steps with equal due times keep insertion order.
    pub fn push_at(&mut self, due: Duration, step: T) {
        let pos = self.queue.partition_point(|s| s.due <= due);
        self.queue.insert(
            pos,
            Scheduled {
                due,
                generation: self.generation,
                step,
            },
        );
    }

    /// Pops the earliest step if it is due at `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Scheduled<T>> {
        match self.queue.front() {
            Some(front) if front.due <= now => self.queue.pop_front(),
            _ => None,
        }
    }

    /// Pops every step due at `now`, in due order.
    pub fn drain_due(&mut self, now: Duration) -> Vec<Scheduled<T>> {
        let mut out = Vec::new();
        while let Some(s) = self.pop_due(now) {
            out.push(s);
        }
        out
    }

    /// Whether `scheduled` was queued under the current generation.
    pub fn is_current(&self, scheduled: &Scheduled<T>) -> bool {
        scheduled.generation == self.generation
    }

    /// Drops all pending steps and invalidates outstanding ones. Returns the number dropped.
    pub fn cancel(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        self.generation = self.generation.wrapping_add(1);
        dropped
    }
}

impl<T> Default for Schedule<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn steps_come_out_in_due_order() {
        let mut schedule = Schedule::new();
        schedule.push_at(ms(800), "c");
        schedule.push_at(ms(400), "a");
        schedule.push_at(ms(600), "b");
        assert_eq!(schedule.next_due(), Some(ms(400)));
        let steps: Vec<_> = schedule
            .drain_due(ms(1000))
            .into_iter()
            .map(|s| s.step)
            .collect();
        assert_eq!(steps, vec!["a", "b", "c"]);
    }

    #[test]
    fn equal_due_times_keep_insertion_order() {
        let mut schedule = Schedule::new();
        schedule.push_at(ms(100), 1);
        schedule.push_at(ms(100), 2);
        schedule.push_at(ms(100), 3);
        let steps: Vec<_> = schedule.drain_due(ms(100)).into_iter().map(|s| s.step).collect();
        assert_eq!(steps, vec![1, 2, 3]);
    }

    #[test]
    fn nothing_pops_before_due() {
        let mut schedule = Schedule::new();
        schedule.push_at(ms(400), ());
        assert!(schedule.pop_due(ms(399)).is_none());
        assert!(schedule.pop_due(ms(400)).is_some());
        assert!(schedule.is_empty());
    }

    #[test]
    fn cancel_drops_pending_and_invalidates_held_steps() {
        let mut schedule = Schedule::new();
        schedule.push_at(ms(100), 'x');
        schedule.push_at(ms(200), 'y');
        let held = schedule.pop_due(ms(100)).unwrap();
        assert!(schedule.is_current(&held));

        assert_eq!(schedule.cancel(), 1);
        assert!(schedule.is_empty());
        assert_eq!(schedule.next_due(), None);
        assert!(!schedule.is_current(&held));
        assert!(schedule.drain_due(ms(10_000)).is_empty());
    }

    #[test]
    fn steps_after_cancel_use_new_generation() {
        let mut schedule = Schedule::new();
        schedule.cancel();
        schedule.push_at(ms(5), ());
        let s = schedule.pop_due(ms(5)).unwrap();
        assert_eq!(s.generation, 1);
        assert!(schedule.is_current(&s));
    }
}
