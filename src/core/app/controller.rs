//! Bring-up sequencer
//!
//! Drives the board from power-on to active sampling in two queued phases:
//!
//! ```text
//! Uninitialized --init--> SetupQueued --Setup--> Enabling --Enable--> SamplingActive
//!        \                     \                     \
//!         +---------------------+---------------------+--> Halted (any fatal error)
//! ```
//!
//! Setup enqueues Enable, so the two phases are strictly ordered and run on
//! the queue's single worker context. There is no way back to
//! `Uninitialized`; the sequence runs once per power cycle.

use core::fmt;

use super::error::{AppError, FatalError};
use super::queue::{Command, CommandQueue};
use crate::core::config::AppConfig;
use crate::devices::traits::SensorHandle;
use crate::platform::traits::{BoardDiagnostics, SamplerSpawner, SensorSubsystem};
use crate::{log_error, log_info};

/// Bring-up state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BringUpState {
    /// Init not yet called
    Uninitialized,
    /// Setup waiting on the command queue
    SetupQueued,
    /// Sensors configured, Enable waiting on the command queue
    Enabling,
    /// Sampling task running
    SamplingActive,
    /// A fatal error occurred
    Halted,
}

impl fmt::Display for BringUpState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BringUpState::Uninitialized => "Uninitialized",
            BringUpState::SetupQueued => "SetupQueued",
            BringUpState::Enabling => "Enabling",
            BringUpState::SamplingActive => "SamplingActive",
            BringUpState::Halted => "Halted",
        };
        f.write_str(s)
    }
}

/// Application controller
///
/// Owns the configuration and the board services for the lifetime of the
/// process. Every fatal error is logged, raised on the board and moves the
/// controller to [`BringUpState::Halted`]; halting the system is left to
/// the caller (see [`fail_stop`](super::fail_stop)).
pub struct AppController<'a, S, Q, P, B> {
    config: AppConfig,
    sensors: S,
    spawner: P,
    board: B,
    queue: Option<&'a Q>,
    state: BringUpState,
    sampler_started: bool,
}

impl<'a, S, Q, P, B> AppController<'a, S, Q, P, B>
where
    S: SensorSubsystem,
    Q: CommandQueue,
    P: SamplerSpawner,
    B: BoardDiagnostics,
{
    /// Create a controller in the `Uninitialized` state
    pub fn new(config: AppConfig, sensors: S, spawner: P, board: B) -> Self {
        Self {
            config,
            sensors,
            spawner,
            board,
            queue: None,
            state: BringUpState::Uninitialized,
            sampler_started: false,
        }
    }

    /// Current bring-up state
    pub fn state(&self) -> BringUpState {
        self.state
    }

    /// Configuration in use
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Check if the sampling task has been created
    pub fn sampler_started(&self) -> bool {
        self.sampler_started
    }

    /// Board services
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Sampling task spawner
    pub fn spawner(&self) -> &P {
        &self.spawner
    }

    /// Start bring-up by queueing the Setup phase
    ///
    /// Returns immediately; Setup runs later on the queue's worker. A missing
    /// queue is fatal and nothing is enqueued.
    pub fn init(&mut self, queue: Option<&'a Q>) -> Result<(), FatalError> {
        if self.state != BringUpState::Uninitialized {
            return self.fail(FatalError::AlreadyInitialized { state: self.state });
        }

        let Some(queue) = queue else {
            return self.fail(FatalError::NullQueueHandle);
        };

        self.queue = Some(queue);
        if let Err(e) = self.enqueue(Command::Setup) {
            return self.fail(e);
        }

        self.state = BringUpState::SetupQueued;
        log_info!("Bring-up started, Setup queued");
        Ok(())
    }

    /// Execute one queued bring-up command
    pub fn dispatch(&mut self, command: Command) -> Result<(), FatalError> {
        let result = match (self.state, command) {
            (BringUpState::SetupQueued, Command::Setup) => self.setup(),
            (BringUpState::Enabling, Command::Enable) => self.enable(),
            (state, command) => Err(FatalError::UnexpectedCommand { state, command }),
        };

        match result {
            Ok(()) => Ok(()),
            Err(e) => self.fail(e),
        }
    }

    /// Execute every pending command in FIFO order
    ///
    /// Returns the number of commands executed. Stops at the first fatal
    /// error.
    pub fn run_pending(&mut self) -> Result<usize, FatalError> {
        let mut executed = 0;
        while let Some(command) = self.queue.and_then(|queue| queue.try_dequeue()) {
            self.dispatch(command)?;
            executed += 1;
        }
        Ok(executed)
    }

    fn setup(&mut self) -> Result<(), FatalError> {
        log_info!(
            "Setup: configuring {} sensors",
            self.config.sensors.enable.count()
        );

        self.config
            .sensors
            .validate()
            .map_err(FatalError::InvalidConfig)?;
        self.sensors
            .configure(&self.config.sensors)
            .map_err(FatalError::SensorSetup)?;
        self.enqueue(Command::Enable)?;

        self.state = BringUpState::Enabling;
        Ok(())
    }

    fn enable(&mut self) -> Result<(), FatalError> {
        log_info!("Enable: starting sensors");

        self.sensors.enable().map_err(FatalError::SensorEnable)?;

        // The task is only scheduled here; it cannot run before this phase
        // returns to the worker, by which time the handles are initialised.
        self.start_sampler()?;

        for handle in SensorHandle::ALL {
            self.sensors.init_handle(handle).map_err(|code| {
                log_error!("Failed to initialize the {}", handle);
                FatalError::HandleInit { handle, code }
            })?;
        }

        self.state = BringUpState::SamplingActive;
        log_info!("Sampling active, reset cause: {}", self.board.reset_cause());
        Ok(())
    }

    fn start_sampler(&mut self) -> Result<(), FatalError> {
        if self.sampler_started {
            return Err(FatalError::SamplerAlreadyStarted);
        }
        self.spawner
            .spawn_sampler()
            .map_err(FatalError::SamplerSpawn)?;
        self.sampler_started = true;
        Ok(())
    }

    fn enqueue(&self, command: Command) -> Result<(), FatalError> {
        let queue = self.queue.ok_or(FatalError::NullQueueHandle)?;
        queue
            .enqueue(command)
            .map_err(|error| FatalError::Enqueue { command, error })
    }

    fn fail<T>(&mut self, error: FatalError) -> Result<T, FatalError> {
        log_error!("Bring-up failed in state {}: {}", self.state, error);
        self.board.raise(&AppError::Fatal(error));
        self.state = BringUpState::Halted;
        Err(error)
    }
}
