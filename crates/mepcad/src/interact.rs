//! Interaction-layer plumbing: pick outcomes and the command queue.
//!
//! The picking layer lives outside the core; it hands results back as
//! explicit [`PickOutcome`] values rather than driving control flow
//! with exceptions. Deferred work is queued on a single-threaded
//! [`CommandQueue`] drained by the host's interaction loop — the core
//! never raises events.

use std::collections::VecDeque;

/// Result of one interactive pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickOutcome<T> {
    /// The user cancelled the pick.
    Cancelled,
    /// The user picked `T`.
    Picked(T),
}

impl<T> PickOutcome<T> {
    /// `Some(value)` when picked, `None` when cancelled.
    pub fn picked(self) -> Option<T> {
        match self {
            PickOutcome::Picked(value) => Some(value),
            PickOutcome::Cancelled => None,
        }
    }

    /// Map the picked value, keeping cancellation as-is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PickOutcome<U> {
        match self {
            PickOutcome::Picked(value) => PickOutcome::Picked(f(value)),
            PickOutcome::Cancelled => PickOutcome::Cancelled,
        }
    }
}

/// A FIFO of deferred commands over some context `Ctx` (typically the
/// host document), executed by a single-threaded drain on the
/// interaction thread.
pub struct CommandQueue<Ctx> {
    queue: VecDeque<Box<dyn FnOnce(&mut Ctx)>>,
}

impl<Ctx> CommandQueue<Ctx> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Queue a command for the next drain.
    pub fn submit(&mut self, command: impl FnOnce(&mut Ctx) + 'static) {
        self.queue.push_back(Box::new(command));
    }

    /// Number of pending commands.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Run every pending command in submission order. Returns the
    /// number executed.
    pub fn drain(&mut self, ctx: &mut Ctx) -> usize {
        let mut executed = 0;
        while let Some(command) = self.queue.pop_front() {
            command(ctx);
            executed += 1;
        }
        executed
    }
}

impl<Ctx> Default for CommandQueue<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_outcome_map_and_picked() {
        let p = PickOutcome::Picked(2).map(|v| v * 10);
        assert_eq!(p.picked(), Some(20));
        let c: PickOutcome<i32> = PickOutcome::Cancelled;
        assert_eq!(c.map(|v| v * 10).picked(), None);
    }

    #[test]
    fn test_queue_drains_in_order() {
        let mut queue: CommandQueue<Vec<u32>> = CommandQueue::new();
        queue.submit(|log| log.push(1));
        queue.submit(|log| log.push(2));
        assert_eq!(queue.len(), 2);

        let mut log = Vec::new();
        let executed = queue.drain(&mut log);
        assert_eq!(executed, 2);
        assert_eq!(log, vec![1, 2]);
        assert!(queue.is_empty());
    }
}
