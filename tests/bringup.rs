//! Bring-up sequence tests against mock collaborators
//!
//! Run with `cargo test --features mock`.

#![cfg(feature = "mock")]

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::Channel;

use xdk_stream::core::app::{
    AppController, AppError, BringUpState, Command, CommandQueue, FatalError, QueueError,
};
use xdk_stream::core::config::{AppConfig, ConfigError, SensorEnableSet};
use xdk_stream::devices::traits::SensorHandle;
use xdk_stream::platform::mock::{
    MockBoard, MockCall, MockCommandQueue, MockSensors, MockSpawner,
};
use xdk_stream::platform::{ErrorCode, ErrorReason};

type Controller<'a> =
    AppController<'a, &'a MockSensors, MockCommandQueue, MockSpawner, MockBoard>;

fn controller(sensors: &MockSensors) -> Controller<'_> {
    AppController::new(
        AppConfig::xdk110(),
        sensors,
        MockSpawner::new(),
        MockBoard::new(),
    )
}

#[test]
fn test_bring_up_reaches_sampling() {
    let sensors = MockSensors::new();
    let queue = MockCommandQueue::new();
    let mut controller = controller(&sensors);

    controller.init(Some(&queue)).unwrap();
    assert_eq!(controller.state(), BringUpState::SetupQueued);
    // Init only queues; nothing touches the sensors yet
    assert!(sensors.calls().is_empty());

    assert_eq!(controller.run_pending(), Ok(2));

    assert_eq!(controller.state(), BringUpState::SamplingActive);
    assert_eq!(queue.history(), vec![Command::Setup, Command::Enable]);
    assert_eq!(
        sensors.calls(),
        vec![
            MockCall::Configure,
            MockCall::Enable,
            MockCall::InitHandle(SensorHandle::Orientation),
            MockCall::InitHandle(SensorHandle::LinearAcceleration),
            MockCall::InitHandle(SensorHandle::CalibratedGyroscope),
        ]
    );
    assert_eq!(controller.spawner().spawn_count(), 1);
    assert!(controller.sampler_started());
    assert!(controller.board().raised().is_empty());
}

#[test]
fn test_configure_receives_board_defaults() {
    let sensors = MockSensors::new();
    let queue = MockCommandQueue::new();
    let mut controller = controller(&sensors);

    controller.init(Some(&queue)).unwrap();
    controller.run_pending().unwrap();

    let setup = sensors.configured().unwrap();
    assert_eq!(setup, AppConfig::xdk110().sensors);
    assert!(!setup.enable.noise);
    assert_eq!(setup.enable.count(), 7);
}

#[test]
fn test_bring_up_over_embassy_channel() {
    let sensors = MockSensors::new();
    let queue: Channel<NoopRawMutex, Command, 4> = Channel::new();
    let mut controller = AppController::new(
        AppConfig::xdk110(),
        &sensors,
        MockSpawner::new(),
        MockBoard::new(),
    );

    controller.init(Some(&queue)).unwrap();
    assert_eq!(controller.run_pending(), Ok(2));
    assert_eq!(controller.state(), BringUpState::SamplingActive);
    assert_eq!(queue.try_dequeue(), None);
}

#[test]
fn test_missing_queue_halts_without_side_effects() {
    let sensors = MockSensors::new();
    let mut controller = controller(&sensors);

    let err = controller.init(None).unwrap_err();

    assert_eq!(err, FatalError::NullQueueHandle);
    assert_eq!(controller.state(), BringUpState::Halted);
    assert_eq!(
        controller.board().raised(),
        &[AppError::Fatal(FatalError::NullQueueHandle)]
    );
    assert!(sensors.calls().is_empty());
    assert_eq!(controller.spawner().spawn_count(), 0);
}

#[test]
fn test_full_queue_on_init_is_fatal() {
    let sensors = MockSensors::new();
    let queue = MockCommandQueue::rejecting();
    let mut controller = controller(&sensors);

    let err = controller.init(Some(&queue)).unwrap_err();

    assert_eq!(
        err,
        FatalError::Enqueue {
            command: Command::Setup,
            error: QueueError::Full
        }
    );
    assert_eq!(controller.state(), BringUpState::Halted);
    assert_eq!(controller.board().fatal_count(), 1);
}

#[test]
fn test_setup_failure_never_enables() {
    let sensors = MockSensors::new();
    let code = ErrorCode::error(ErrorReason::BusFailure);
    sensors.fail_configure(code);
    let queue = MockCommandQueue::new();
    let mut controller = controller(&sensors);

    controller.init(Some(&queue)).unwrap();
    let err = controller.run_pending().unwrap_err();

    assert_eq!(err, FatalError::SensorSetup(code));
    assert_eq!(err.code(), code);
    assert_eq!(controller.state(), BringUpState::Halted);
    assert_eq!(queue.history(), vec![Command::Setup]);
    assert_eq!(sensors.count(MockCall::Enable), 0);
    assert_eq!(controller.spawner().spawn_count(), 0);
    assert_eq!(controller.board().raised().len(), 1);
}

#[test]
fn test_empty_setup_is_rejected_before_configure() {
    let sensors = MockSensors::new();
    let queue = MockCommandQueue::new();
    let mut config = AppConfig::xdk110();
    config.sensors.enable = SensorEnableSet::default();
    let mut controller: Controller<'_> =
        AppController::new(config, &sensors, MockSpawner::new(), MockBoard::new());

    controller.init(Some(&queue)).unwrap();
    let err = controller.run_pending().unwrap_err();

    assert_eq!(err, FatalError::InvalidConfig(ConfigError::NothingEnabled));
    assert!(sensors.calls().is_empty());
}

#[test]
fn test_enable_enqueue_failure_is_fatal() {
    let sensors = MockSensors::new();
    let queue = MockCommandQueue::new();
    let mut controller = controller(&sensors);

    controller.init(Some(&queue)).unwrap();
    queue.set_rejecting(true);
    let err = controller.run_pending().unwrap_err();

    assert_eq!(
        err,
        FatalError::Enqueue {
            command: Command::Enable,
            error: QueueError::Full
        }
    );
    assert_eq!(sensors.calls(), vec![MockCall::Configure]);
    assert_eq!(controller.state(), BringUpState::Halted);
}

#[test]
fn test_enable_failure_skips_sampler_and_handles() {
    let sensors = MockSensors::new();
    let code = ErrorCode::error(ErrorReason::Timeout);
    sensors.fail_enable(code);
    let queue = MockCommandQueue::new();
    let mut controller = controller(&sensors);

    controller.init(Some(&queue)).unwrap();
    let err = controller.run_pending().unwrap_err();

    assert_eq!(err, FatalError::SensorEnable(code));
    assert_eq!(controller.spawner().spawn_count(), 0);
    assert_eq!(
        sensors.count(MockCall::InitHandle(SensorHandle::Orientation)),
        0
    );
}

#[test]
fn test_spawn_failure_is_out_of_resources() {
    let sensors = MockSensors::new();
    let queue = MockCommandQueue::new();
    let mut controller: Controller<'_> = AppController::new(
        AppConfig::xdk110(),
        &sensors,
        MockSpawner::failing(),
        MockBoard::new(),
    );

    controller.init(Some(&queue)).unwrap();
    let err = controller.run_pending().unwrap_err();

    assert!(matches!(err, FatalError::SamplerSpawn(_)));
    assert_eq!(err.code(), ErrorCode::error(ErrorReason::OutOfResources));
    assert!(!controller.sampler_started());
    assert!(sensors
        .calls()
        .iter()
        .all(|call| !matches!(call, MockCall::InitHandle(_))));
}

#[test]
fn test_handle_init_failure_stops_bring_up() {
    let sensors = MockSensors::new();
    let code = ErrorCode::error(ErrorReason::NotInitialized);
    sensors.fail_handle(SensorHandle::LinearAcceleration, code);
    let queue = MockCommandQueue::new();
    let mut controller = controller(&sensors);

    controller.init(Some(&queue)).unwrap();
    let err = controller.run_pending().unwrap_err();

    assert_eq!(
        err,
        FatalError::HandleInit {
            handle: SensorHandle::LinearAcceleration,
            code
        }
    );
    assert_eq!(err.code(), ErrorCode::error(ErrorReason::OutOfResources));
    assert_eq!(
        sensors.count(MockCall::InitHandle(SensorHandle::CalibratedGyroscope)),
        0
    );
    // The sampler was already scheduled when the handle failed
    assert_eq!(controller.spawner().spawn_count(), 1);
    assert_eq!(controller.state(), BringUpState::Halted);
}

#[test]
fn test_commands_after_halt_are_rejected() {
    let sensors = MockSensors::new();
    let queue = MockCommandQueue::new();
    let mut controller = controller(&sensors);

    controller.init(None).unwrap_err();
    let err = controller.dispatch(Command::Setup).unwrap_err();

    assert_eq!(
        err,
        FatalError::UnexpectedCommand {
            state: BringUpState::Halted,
            command: Command::Setup
        }
    );
    assert!(queue.is_empty());
    assert!(sensors.calls().is_empty());
}

#[test]
fn test_second_enable_does_not_respawn() {
    let sensors = MockSensors::new();
    let queue = MockCommandQueue::new();
    let mut controller = controller(&sensors);

    controller.init(Some(&queue)).unwrap();
    controller.run_pending().unwrap();
    let err = controller.dispatch(Command::Enable).unwrap_err();

    assert!(matches!(err, FatalError::UnexpectedCommand { .. }));
    assert_eq!(controller.spawner().spawn_count(), 1);
    assert_eq!(sensors.count(MockCall::Enable), 1);
}
