//! Periodic sampling task
//!
//! Each cycle reads orientation, linear acceleration and calibrated angular
//! rate, in that order, and writes the successful groups as one text line:
//!
//! ```text
//! <w> <x> <y> <z> <ax> <ay> <az> <gx> <gy> <gz>\n
//! ```
//!
//! A failed read drops its group for that cycle without a placeholder. The
//! newline belongs to the gyroscope group, so it is only written when the
//! gyroscope read succeeds. After the three reads the last failure of the
//! cycle, if any, is logged and raised as a non-fatal error. The task then
//! sleeps for the configured delay.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use heapless::String;

use super::cancel::CancelToken;
use super::error::{AppError, TransientError};
use crate::devices::traits::{SensorHandle, MAX_FIELD_WIDTH};
use crate::platform::traits::{BoardDiagnostics, DelayMs, SensorSubsystem, SerialSink};
use crate::platform::ErrorCode;
use crate::{log_info, log_warn};

/// Fields on a complete output line
pub const FIELDS_PER_LINE: usize = 10;

/// Capacity of one output line
///
/// Every field plus its separator (space or newline) at the widest rendering.
pub const LINE_CAPACITY: usize = FIELDS_PER_LINE * (MAX_FIELD_WIDTH + 1);

/// One cycle's output line
pub type SampleLine = String<LINE_CAPACITY>;

/// Result of one sampling cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CycleReport {
    /// Text to emit (possibly empty)
    pub line: SampleLine,
    /// Last read failure of the cycle
    pub error: Option<TransientError>,
    /// Number of failed reads (0-3)
    pub failures: u8,
}

impl CycleReport {
    /// Check if all three reads succeeded
    pub fn is_complete(&self) -> bool {
        self.failures == 0
    }

    fn record_failure(&mut self, handle: SensorHandle, code: ErrorCode) {
        self.failures += 1;
        self.error = Some(TransientError::Read { handle, code });
    }
}

/// Run the three reads of one cycle and format the successful ones
///
/// Pure with respect to output: nothing is written, logged or raised here.
pub fn sample_cycle<S: SensorSubsystem + ?Sized>(sensors: &S) -> CycleReport {
    let mut report = CycleReport::default();

    // Write errors cannot occur: LINE_CAPACITY covers ten fields of maximum width
    match sensors.read_quaternion() {
        Ok(q) => {
            let _ = q.write_fields(&mut report.line);
        }
        Err(code) => report.record_failure(SensorHandle::Orientation, code),
    }

    match sensors.read_linear_acceleration() {
        Ok(accel) => {
            let _ = accel.write_fields(&mut report.line);
        }
        Err(code) => report.record_failure(SensorHandle::LinearAcceleration, code),
    }

    match sensors.read_calibrated_gyro() {
        Ok(gyro) => {
            let _ = gyro.write_fields(&mut report.line);
        }
        Err(code) => report.record_failure(SensorHandle::CalibratedGyroscope, code),
    }

    report
}

/// Counters kept by the sampling task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SamplerStats {
    /// Cycles executed
    pub cycles: u32,
    /// Cycles with at least one failed read
    pub failed_cycles: u32,
    /// Lines the sink refused
    pub dropped_lines: u32,
}

/// Sampling task state
///
/// Owns its collaborators; the sensor subsystem is usually passed as a
/// shared reference since the bring-up sequencer uses it too.
pub struct SamplingTask<S, O, D, B> {
    sensors: S,
    sink: O,
    delay: D,
    board: B,
    period_ms: u32,
    stats: SamplerStats,
}

impl<S, O, D, B> SamplingTask<S, O, D, B>
where
    S: SensorSubsystem,
    O: SerialSink,
    D: DelayMs,
    B: BoardDiagnostics,
{
    /// Create a sampling task with the given cycle delay
    pub fn new(sensors: S, sink: O, delay: D, board: B, period_ms: u32) -> Self {
        Self {
            sensors,
            sink,
            delay,
            board,
            period_ms,
            stats: SamplerStats::default(),
        }
    }

    /// Counters so far
    pub fn stats(&self) -> SamplerStats {
        self.stats
    }

    /// Output sink
    pub fn sink(&self) -> &O {
        &self.sink
    }

    /// Board services
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Delay primitive
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Execute one cycle: read, write the line, report the last failure
    pub fn run_cycle(&mut self) -> CycleReport {
        let report = sample_cycle(&self.sensors);
        self.stats.cycles = self.stats.cycles.wrapping_add(1);

        if !report.line.is_empty() {
            let written = self
                .sink
                .write(report.line.as_bytes())
                .and_then(|_| self.sink.flush());
            if let Err(e) = written {
                log_warn!("Sample line dropped: {}", e);
                self.stats.dropped_lines = self.stats.dropped_lines.wrapping_add(1);
            }
        }

        if let Some(error) = report.error {
            self.stats.failed_cycles = self.stats.failed_cycles.wrapping_add(1);
            log_warn!("{}", error);
            self.board.raise(&AppError::Transient(error));
        }

        report
    }

    /// Run cycles until `cancel` is triggered
    ///
    /// Cancellation is checked before each cycle and ends the sleep early.
    pub async fn run<M: RawMutex>(&mut self, cancel: &CancelToken<M>) -> SamplerStats {
        log_info!("Sampling every {} ms", self.period_ms);

        while !cancel.is_cancelled() {
            self.run_cycle();

            if let Either::Second(()) =
                select(self.delay.delay_ms(self.period_ms), cancel.wait()).await
            {
                break;
            }
        }

        log_info!(
            "Sampling stopped after {} cycles ({} with errors)",
            self.stats.cycles,
            self.stats.failed_cycles
        );
        self.stats
    }
}
