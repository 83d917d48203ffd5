//! Bring-up command queue
//!
//! Bring-up phases are discrete messages consumed in FIFO order by a single
//! worker, so no phase ever runs concurrently with another or with itself.

use core::fmt;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;

/// Bring-up phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Configure the sensor subsystem
    Setup,
    /// Enable sensors, start sampling, initialise handles
    Enable,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Setup => write!(f, "Setup"),
            Command::Enable => write!(f, "Enable"),
        }
    }
}

/// Queue failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QueueError {
    /// No free slot
    Full,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::Full => write!(f, "command queue full"),
        }
    }
}

/// FIFO command queue with a single consumer
///
/// `enqueue` never blocks; the caller returns immediately and the command
/// runs later on the worker context.
pub trait CommandQueue {
    /// Append a command
    fn enqueue(&self, command: Command) -> Result<(), QueueError>;

    /// Take the oldest pending command, if any
    fn try_dequeue(&self) -> Option<Command>;
}

impl<M: RawMutex, const N: usize> CommandQueue for Channel<M, Command, N> {
    fn enqueue(&self, command: Command) -> Result<(), QueueError> {
        self.try_send(command).map_err(|_| QueueError::Full)
    }

    fn try_dequeue(&self) -> Option<Command> {
        self.try_receive().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[test]
    fn test_channel_queue_is_fifo() {
        let queue: Channel<NoopRawMutex, Command, 4> = Channel::new();
        queue.enqueue(Command::Setup).unwrap();
        queue.enqueue(Command::Enable).unwrap();

        assert_eq!(queue.try_dequeue(), Some(Command::Setup));
        assert_eq!(queue.try_dequeue(), Some(Command::Enable));
        assert_eq!(queue.try_dequeue(), None);
    }

    #[test]
    fn test_channel_queue_full() {
        let queue: Channel<NoopRawMutex, Command, 1> = Channel::new();
        queue.enqueue(Command::Setup).unwrap();
        assert_eq!(queue.enqueue(Command::Enable), Err(QueueError::Full));
    }
}
