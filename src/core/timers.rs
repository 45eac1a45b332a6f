//! Delayed-event queue (deadline + payload) driven by the simulation clock.
//!
//! Events fire in deadline order; events sharing a deadline fire in the order
//! they were scheduled. Nothing fires on its own: the owner polls
//! [`TimerQueue::pop_due`] with the current time.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Entry<E> {
    id: TimerId,
    deadline: f64,
    event: E,
}

#[derive(Debug, Clone)]
pub struct TimerQueue<E> {
    entries: Vec<Entry<E>>,
    next_id: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub fn schedule(&mut self, deadline: f64, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        // Keep sorted by deadline; equal deadlines stay in insertion order.
        let index = self.entries.partition_point(|e| e.deadline <= deadline);
        self.entries.insert(
            index,
            Entry {
                id,
                deadline,
                event,
            },
        );
        id
    }

    /// Removes a pending event. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Pops the earliest event whose deadline is at or before `now`.
    /// Returns the event together with its deadline.
    pub fn pop_due(&mut self, now: f64) -> Option<(TimerId, f64, E)> {
        if self.entries.first().is_some_and(|e| e.deadline <= now) {
            let entry = self.entries.remove(0);
            Some((entry.id, entry.deadline, entry.event))
        } else {
            None
        }
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
