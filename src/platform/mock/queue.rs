//! Mock command queue for testing

use core::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::vec::Vec;

use crate::core::app::{Command, CommandQueue, QueueError};

/// Mock command queue
///
/// Unbounded FIFO that keeps a history of every accepted command. Can be
/// switched to reject enqueues to exercise queue-full handling.
#[derive(Debug, Default)]
pub struct MockCommandQueue {
    pending: RefCell<VecDeque<Command>>,
    history: RefCell<Vec<Command>>,
    rejecting: Cell<bool>,
}

impl MockCommandQueue {
    /// Create an empty queue that accepts commands
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue that rejects every enqueue with `QueueError::Full`
    pub fn rejecting() -> Self {
        let queue = Self::new();
        queue.set_rejecting(true);
        queue
    }

    /// Switch enqueue rejection on or off
    pub fn set_rejecting(&self, rejecting: bool) {
        self.rejecting.set(rejecting);
    }

    /// Number of pending commands
    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Check if no command is pending
    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Every command accepted so far, in order
    pub fn history(&self) -> Vec<Command> {
        self.history.borrow().clone()
    }
}

impl CommandQueue for MockCommandQueue {
    fn enqueue(&self, command: Command) -> Result<(), QueueError> {
        if self.rejecting.get() {
            return Err(QueueError::Full);
        }
        self.pending.borrow_mut().push_back(command);
        self.history.borrow_mut().push(command);
        Ok(())
    }

    fn try_dequeue(&self) -> Option<Command> {
        self.pending.borrow_mut().pop_front()
    }
}
