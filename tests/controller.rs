mod common;

use pretty_assertions::assert_eq;

use common::{ManualScheduler, RecordingDisplay};
use stopwatch_widget::{
    ControlEvent, SetupError, StopwatchController, TimerHandle, TICK_PERIOD,
};

type Controller = StopwatchController<RecordingDisplay, ManualScheduler>;

fn controller() -> Controller {
    StopwatchController::new(RecordingDisplay::default(), ManualScheduler::default())
}

fn tick_n(controller: &mut Controller, n: usize) {
    let handle = controller.timer().expect("stopwatch should be running");
    for _ in 0..n {
        controller.tick(handle);
    }
}

#[test]
fn renders_zero_when_wired() {
    let controller = controller();
    assert_eq!(controller.display().renders, vec!["00:00:00"]);
    assert!(!controller.is_running());
    assert!(!controller.is_paused());
}

#[test]
fn start_then_three_ticks_reads_three_seconds() {
    let mut controller = controller();
    controller.start();
    tick_n(&mut controller, 3);

    assert_eq!(controller.elapsed_seconds(), 3);
    assert_eq!(controller.display().last(), "00:00:03");
    assert_eq!(controller.scheduler().registered, vec![(controller.timer().unwrap(), TICK_PERIOD)]);
}

#[test]
fn pause_freezes_the_counter() {
    let mut controller = controller();
    controller.start();
    let handle = controller.timer().unwrap();
    tick_n(&mut controller, 2);

    controller.pause();
    assert!(!controller.is_running());
    assert!(controller.is_paused());
    assert!(controller.display().paused);
    assert!(controller.scheduler().active.is_empty());

    // Ticks already queued for the cancelled registration change nothing
    controller.tick(handle);
    controller.tick(handle);
    assert_eq!(controller.elapsed_seconds(), 2);
    assert_eq!(controller.display().last(), "00:00:02");
}

#[test]
fn resume_continues_from_frozen_value() {
    let mut controller = controller();
    controller.start();
    tick_n(&mut controller, 2);
    controller.pause();

    controller.start();
    assert!(!controller.is_paused());
    assert!(!controller.display().paused);
    tick_n(&mut controller, 1);
    assert_eq!(controller.elapsed_seconds(), 3);
    assert_eq!(controller.display().last(), "00:00:03");
}

#[test]
fn reset_from_any_state_returns_to_zero() {
    // while running
    let mut running = controller();
    running.start();
    let handle = running.timer().unwrap();
    tick_n(&mut running, 5);
    running.reset();
    running.tick(handle);

    // while paused
    let mut paused = controller();
    paused.start();
    tick_n(&mut paused, 4);
    paused.pause();
    paused.reset();

    // while idle
    let mut idle = controller();
    idle.reset();

    for controller in [&running, &paused, &idle] {
        assert_eq!(controller.elapsed_seconds(), 0);
        assert_eq!(controller.display().last(), "00:00:00");
        assert!(!controller.is_running());
        assert!(!controller.is_paused());
        assert!(!controller.display().paused);
        assert!(controller.scheduler().active.is_empty());
    }
}

#[test]
fn double_start_leaves_exactly_one_registration() {
    let mut controller = controller();
    controller.start();
    let first = controller.timer().unwrap();
    tick_n(&mut controller, 1);

    controller.start();
    let second = controller.timer().unwrap();
    assert_ne!(first, second);
    assert_eq!(controller.scheduler().active.len(), 1);
    assert_eq!(controller.scheduler().cancelled, vec![first]);

    // Only the surviving registration advances the count
    controller.tick(first);
    controller.tick(second);
    assert_eq!(controller.elapsed_seconds(), 2);
}

#[test]
fn repeated_pause_and_idle_reset_still_render() {
    let mut controller = controller();
    controller.pause();
    controller.pause();
    controller.reset();

    assert_eq!(controller.display().renders.len(), 4);
    assert!(controller.display().renders.iter().all(|text| text == "00:00:00"));
    assert!(controller.scheduler().registered.is_empty());
}

#[test]
fn ticks_without_a_registration_are_ignored() {
    let mut controller = controller();
    controller.tick(TimerHandle::new(42));
    assert_eq!(controller.elapsed_seconds(), 0);
    assert_eq!(controller.display().renders.len(), 1);
}

#[test]
fn handle_dispatches_control_events() {
    let mut controller = controller();
    controller.handle(ControlEvent::Start);
    assert!(controller.is_running());
    controller.handle(ControlEvent::Pause);
    assert!(controller.is_paused());
    controller.handle(ControlEvent::Reset);
    assert!(!controller.is_paused());
}

#[test]
fn status_reflects_last_action() {
    let mut controller = controller();
    controller.start();
    tick_n(&mut controller, 61);

    let status = controller.status();
    assert_eq!(status.display, "00:01:01");
    assert_eq!(status.elapsed_seconds, 61);
    assert!(status.running);
    assert!(!status.paused);
    assert_eq!(status.last_action, Some(ControlEvent::Start));
    assert!(status.last_action_time.is_some());
}

#[test]
fn builder_fails_fast_without_collaborators() {
    let missing_display = StopwatchController::<RecordingDisplay, ManualScheduler>::builder()
        .scheduler(ManualScheduler::default())
        .build();
    assert_eq!(missing_display.err(), Some(SetupError::MissingDisplay));

    let missing_scheduler = StopwatchController::<RecordingDisplay, ManualScheduler>::builder()
        .display(RecordingDisplay::default())
        .build();
    assert_eq!(missing_scheduler.err(), Some(SetupError::MissingScheduler));

    let built = StopwatchController::builder()
        .display(RecordingDisplay::default())
        .scheduler(ManualScheduler::default())
        .build()
        .unwrap();
    assert_eq!(built.display_text(), "00:00:00");
}
