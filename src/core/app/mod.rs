//! Application controller
//!
//! Two-phase bring-up (Setup, then Enable) driven through a single-consumer
//! command queue, followed by the periodic sampling task.
//!
//! ## Usage
//!
//! ```ignore
//! static COMMANDS: Channel<CriticalSectionRawMutex, Command, 4> = Channel::new();
//!
//! let mut controller = AppController::new(AppConfig::xdk110(), sensors, spawner, board);
//! if let Err(e) = controller.init(Some(&COMMANDS)) {
//!     fail_stop(&e);
//! }
//! let error = run_command_worker(&COMMANDS, &mut controller).await;
//! fail_stop(&error);
//! ```

pub mod cancel;
pub mod controller;
pub mod error;
pub mod queue;
pub mod sampler;

pub use cancel::CancelToken;
pub use controller::{AppController, BringUpState};
pub use error::{AppError, FatalError, TransientError};
pub use queue::{Command, CommandQueue, QueueError};
pub use sampler::{sample_cycle, CycleReport, SampleLine, SamplerStats, SamplingTask};

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;

use crate::log_error;
use crate::platform::traits::{BoardDiagnostics, SamplerSpawner, SensorSubsystem};

/// Command queue worker
///
/// Receives bring-up commands in FIFO order and executes them one at a time
/// on the calling task. Only returns when a command fails; once bring-up is
/// complete it waits on the empty queue forever.
pub async fn run_command_worker<'a, M, const N: usize, S, P, B>(
    queue: &'a Channel<M, Command, N>,
    controller: &mut AppController<'a, S, Channel<M, Command, N>, P, B>,
) -> FatalError
where
    M: RawMutex,
    S: SensorSubsystem,
    P: SamplerSpawner,
    B: BoardDiagnostics,
{
    loop {
        let command = queue.receive().await;
        if let Err(e) = controller.dispatch(command) {
            return e;
        }
    }
}

/// Terminal halt after a fatal bring-up error
///
/// Logs the error and panics; the panic handler provides the board's fault
/// indication.
pub fn fail_stop(error: &FatalError) -> ! {
    log_error!("Fatal error, halting: {}", error);
    panic!("halted: {}", error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AppConfig;
    use crate::platform::mock::{MockBoard, MockSensors, MockSpawner};
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[test]
    fn test_worker_returns_first_fatal_error() {
        let sensors = MockSensors::new();
        sensors.fail_enable(crate::platform::ErrorCode::error(
            crate::platform::ErrorReason::BusFailure,
        ));
        let queue: Channel<NoopRawMutex, Command, 4> = Channel::new();
        let mut controller = AppController::new(
            AppConfig::xdk110(),
            &sensors,
            MockSpawner::new(),
            MockBoard::new(),
        );

        controller.init(Some(&queue)).unwrap();
        let error = block_on(run_command_worker(&queue, &mut controller));

        assert!(matches!(error, FatalError::SensorEnable(_)));
        assert_eq!(controller.state(), BringUpState::Halted);
        assert_eq!(controller.spawner().spawn_count(), 0);
    }

    #[test]
    #[should_panic(expected = "halted: Sampling task already started")]
    fn test_fail_stop_panics() {
        fail_stop(&FatalError::SamplerAlreadyStarted);
    }
}
