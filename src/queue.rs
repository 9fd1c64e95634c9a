//! # Ready Queue
//!
//! Strict FIFO over owned tasks. Arrival order is execution order: the
//! queue never reorders, deduplicates, or prioritizes. Append and pop are
//! O(1) at their respective ends, and popping from an empty queue is a
//! normal sentinel outcome, not an error.

use std::collections::VecDeque;

use crate::task::Task;

/// FIFO of tasks awaiting dispatch. Owns the tasks it holds; a task leaves
/// the queue only by being popped for dispatch or by the queue being
/// dropped at shutdown (which reclaims every queued task).
pub struct ReadyQueue {
    tasks: VecDeque<Task>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Insert `task` at the tail.
    pub fn append(&mut self, task: Task) {
        self.tasks.push_back(task);
    }

    /// Remove and return the head task, or `None` if the queue is empty.
    /// Never blocks.
    pub fn pop_front(&mut self) -> Option<Task> {
        self.tasks.pop_front()
    }

    /// Number of queued tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for ReadyQueue {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
