//! Host simulation of the XDK110 streaming application
//!
//! Runs the full bring-up and sampling pipeline against the simulated board
//! on the embassy std executor and prints sample lines to stdout.
//!
//! ```text
//! xdk_stream_sim [CYCLES] [GYRO_FAIL_EVERY]
//! ```
//!
//! Without `CYCLES` the simulation streams until interrupted. With
//! `GYRO_FAIL_EVERY` every n-th gyroscope read fails, producing lines
//! without the trailing newline.

use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::Timer;
use static_cell::StaticCell;

use xdk_stream::core::app::{
    fail_stop, run_command_worker, AppController, CancelToken, Command, SamplingTask,
};
use xdk_stream::core::config::AppConfig;
use xdk_stream::devices::traits::SensorHandle;
use xdk_stream::platform::sim::{SimDiagnostics, SimSensors, StdoutSink};
use xdk_stream::platform::traits::{EmbassyDelay, ResetCause, SamplerSpawner, SpawnError};
use xdk_stream::{log_info, log_warn};

const QUEUE_DEPTH: usize = 4;

static COMMANDS: Channel<CriticalSectionRawMutex, Command, QUEUE_DEPTH> = Channel::new();
static CANCEL: CancelToken<CriticalSectionRawMutex> = CancelToken::new();
static SENSORS: StaticCell<SimSensors> = StaticCell::new();

/// Spawns the sampling task on the embassy executor
struct SimSpawner {
    spawner: Spawner,
    sensors: &'static SimSensors,
    period_ms: u32,
}

impl SamplerSpawner for SimSpawner {
    fn spawn_sampler(&mut self) -> Result<(), SpawnError> {
        self.spawner
            .spawn(sampler_task(self.sensors, self.period_ms))
            .map_err(|_| SpawnError::OutOfResources)
    }
}

#[embassy_executor::task]
async fn sampler_task(sensors: &'static SimSensors, period_ms: u32) {
    let mut task = SamplingTask::new(
        sensors,
        StdoutSink::new(),
        EmbassyDelay,
        SimDiagnostics::default(),
        period_ms,
    );
    let stats = task.run(&CANCEL).await;

    log_info!(
        "Simulation finished: {} cycles, {} with errors, {} lines dropped",
        stats.cycles,
        stats.failed_cycles,
        stats.dropped_lines
    );
    std::process::exit(0);
}

#[embassy_executor::task]
async fn shutdown_task(after_ms: u64) {
    Timer::after_millis(after_ms).await;
    CANCEL.cancel();
}

fn parse_arg(position: usize) -> Option<u32> {
    let raw = std::env::args().nth(position)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log_warn!("Ignoring invalid argument '{}'", raw);
            None
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let config = AppConfig::xdk110();
    let period_ms = config.sample_delay_ms;

    let sensors: &'static SimSensors = SENSORS.init(SimSensors::new(period_ms));
    if let Some(every) = parse_arg(2) {
        sensors.fail_every(SensorHandle::CalibratedGyroscope, every);
    }

    if let Some(cycles) = parse_arg(1) {
        // Stop partway through the last cycle's sleep
        let period = u64::from(period_ms);
        let after_ms = (u64::from(cycles) * period).saturating_sub(period / 2);
        if spawner.spawn(shutdown_task(after_ms)).is_err() {
            log_warn!("Shutdown timer unavailable, streaming until interrupted");
        }
    }

    let mut controller = AppController::new(
        config,
        sensors,
        SimSpawner {
            spawner,
            sensors,
            period_ms,
        },
        SimDiagnostics::new(ResetCause::PowerOn),
    );

    if let Err(e) = controller.init(Some(&COMMANDS)) {
        fail_stop(&e);
    }

    let error = run_command_worker(&COMMANDS, &mut controller).await;
    fail_stop(&error);
}
