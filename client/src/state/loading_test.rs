use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;
use crate::util::scheduler::testing::{ManualScheduler, ManualTimer};

struct Harness {
    scheduler: ManualScheduler,
    session: Option<LoadingSession<ManualTimer>>,
    progress: Rc<RefCell<Vec<u8>>>,
    completions: Rc<Cell<usize>>,
    completed_at: Rc<Cell<Option<u64>>>,
}

fn start(config: LoadingConfig) -> Harness {
    let scheduler = ManualScheduler::default();
    let progress = Rc::new(RefCell::new(Vec::new()));
    let completions = Rc::new(Cell::new(0));
    let completed_at = Rc::new(Cell::new(None));

    let seen = progress.clone();
    let count = completions.clone();
    let at = completed_at.clone();
    let clock = scheduler.clone();
    let session = start_loading(
        &scheduler,
        config,
        move |p| seen.borrow_mut().push(p),
        move || {
            count.set(count.get() + 1);
            at.set(Some(clock.now()));
        },
    );

    Harness { scheduler, session: Some(session), progress, completions, completed_at }
}

impl Harness {
    fn progress(&self) -> u8 {
        self.session.as_ref().map_or(0, LoadingSession::progress)
    }
}

// =============================================================
// LoadingConfig
// =============================================================

#[test]
fn default_config_steps_every_30ms() {
    let config = LoadingConfig::default();
    assert_eq!(config.duration_ms, 3_000);
    assert_eq!(config.steps, 100);
    assert_eq!(config.settle_ms, 500);
    assert_eq!(config.step_delay_ms(1), 30);
    assert_eq!(config.step_deadline_ms(99), 2_970);
    assert_eq!(config.step_deadline_ms(100), 3_000);
}

#[test]
fn uneven_step_deadlines_still_end_at_duration() {
    let config = LoadingConfig { duration_ms: 1_000, steps: 30, settle_ms: 0 };
    let delays = (1..=30).map(|k| config.step_delay_ms(k)).collect::<Vec<_>>();
    assert!(delays.iter().all(|&d| d == 33 || d == 34));
    assert_eq!(delays.iter().sum::<u32>(), 1_000);
    assert_eq!(config.step_deadline_ms(30), 1_000);
    assert_eq!(config.step_deadline_ms(31), 1_000);
}

#[test]
fn zero_steps_behaves_as_one() {
    let config = LoadingConfig { duration_ms: 10, steps: 0, settle_ms: 0 };
    assert_eq!(config.step_delay_ms(1), 10);
    let mut machine = LoadingMachine::new(0);
    assert_eq!(machine.tick(), TickOutcome::Reached);
}

// =============================================================
// LoadingMachine
// =============================================================

#[test]
fn machine_runs_settles_and_completes() {
    let mut machine = LoadingMachine::default();
    assert_eq!(machine.phase(), LoadingPhase::Running(0));

    for expected in 1..100 {
        assert_eq!(machine.tick(), TickOutcome::Advanced(expected));
    }
    assert_eq!(machine.tick(), TickOutcome::Reached);
    assert_eq!(machine.phase(), LoadingPhase::Settling);
    assert_eq!(machine.progress(), 100);

    assert_eq!(machine.tick(), TickOutcome::Ignored);
    assert_eq!(machine.progress(), 100);

    assert!(machine.settle());
    assert!(machine.is_complete());
    assert!(!machine.settle());
}

#[test]
fn machine_scales_progress_to_step_count() {
    let mut machine = LoadingMachine::new(4);
    assert_eq!(machine.tick(), TickOutcome::Advanced(25));
    assert_eq!(machine.tick(), TickOutcome::Advanced(50));
    assert_eq!(machine.tick(), TickOutcome::Advanced(75));
    assert_eq!(machine.tick(), TickOutcome::Reached);
    assert_eq!(machine.step(), 4);

    let mut machine = LoadingMachine::new(3);
    assert_eq!(machine.tick(), TickOutcome::Advanced(33));
    assert_eq!(machine.tick(), TickOutcome::Advanced(66));
    assert_eq!(machine.tick(), TickOutcome::Reached);
}

#[test]
fn machine_cannot_settle_while_running() {
    let mut machine = LoadingMachine::default();
    machine.tick();
    assert!(!machine.settle());
    assert_eq!(machine.phase(), LoadingPhase::Running(1));
}

// =============================================================
// LoadingStage
// =============================================================

#[test]
fn stage_boundaries_are_exact() {
    assert_eq!(LoadingStage::from_progress(19).topic(), "initializing");
    assert_eq!(LoadingStage::from_progress(20).topic(), "components");
    assert_eq!(LoadingStage::from_progress(59).topic(), "components");
    assert_eq!(LoadingStage::from_progress(60).topic(), "projects");
    assert_eq!(LoadingStage::from_progress(94).topic(), "finalizing");
    assert_eq!(LoadingStage::from_progress(95).topic(), "complete");
    assert_eq!(LoadingStage::from_progress(100).topic(), "complete");
}

#[test]
fn stages_are_contiguous_and_ordered() {
    let mut seen = Vec::new();
    for p in 0..=100u8 {
        let stage = LoadingStage::from_progress(p);
        if seen.last() != Some(&stage) {
            seen.push(stage);
        }
    }
    assert_eq!(seen, LoadingStage::ALL.to_vec());
}

#[test]
fn stage_transitions_happen_at_thresholds() {
    let transitions = (1..=100u8)
        .filter(|&p| LoadingStage::from_progress(p) != LoadingStage::from_progress(p - 1))
        .collect::<Vec<_>>();
    assert_eq!(transitions, vec![20, 40, 60, 80, 95]);
}

#[test]
fn stage_threshold_maps_back_to_itself() {
    for stage in LoadingStage::ALL {
        assert_eq!(LoadingStage::from_progress(stage.threshold()), stage);
    }
}

#[test]
fn stage_messages_are_distinct() {
    for (i, a) in LoadingStage::ALL.iter().enumerate() {
        for b in &LoadingStage::ALL[i + 1..] {
            assert_ne!(a.message(), b.message());
        }
    }
}

// =============================================================
// LoadingSession
// =============================================================

#[test]
fn progress_reaches_100_at_duration() {
    let h = start(LoadingConfig::default());
    h.scheduler.advance(2_970);
    assert_eq!(h.progress(), 99);
    h.scheduler.advance(30);
    assert_eq!(h.progress(), 100);
    assert_eq!(h.completions.get(), 0);
}

#[test]
fn progress_is_non_decreasing_and_bounded() {
    let h = start(LoadingConfig::default());
    h.scheduler.advance(10_000);
    let progress = h.progress.borrow();
    assert_eq!(progress.len(), 100);
    assert!(progress.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(progress.last(), Some(&100));
    assert!(progress.iter().all(|&p| p <= 100));
}

#[test]
fn completion_fires_once_after_settling_delay() {
    let h = start(LoadingConfig::default());
    h.scheduler.advance(3_000);
    assert_eq!(h.session.as_ref().map(LoadingSession::phase), Some(LoadingPhase::Settling));

    h.scheduler.advance(499);
    assert_eq!(h.completions.get(), 0);
    h.scheduler.advance(1);
    assert_eq!(h.completions.get(), 1);
    assert_eq!(h.completed_at.get(), Some(3_500));

    h.scheduler.advance(60_000);
    assert_eq!(h.completions.get(), 1);
    assert_eq!(h.scheduler.pending(), 0);
    assert_eq!(h.session.as_ref().map(LoadingSession::phase), Some(LoadingPhase::Complete));
}

#[test]
fn teardown_before_completion_cancels_everything() {
    let mut h = start(LoadingConfig::default());
    h.scheduler.advance(1_500);
    let before = h.progress();
    assert_eq!(before, 50);

    h.session = None;
    assert_eq!(h.scheduler.pending(), 0);
    h.scheduler.advance(10_000);
    assert_eq!(h.progress.borrow().last(), Some(&50));
    assert_eq!(h.completions.get(), 0);
}

#[test]
fn teardown_during_settling_suppresses_callback() {
    let mut h = start(LoadingConfig::default());
    h.scheduler.advance(3_200);
    h.session = None;
    h.scheduler.advance(1_000);
    assert_eq!(h.completions.get(), 0);
}

#[test]
fn cancel_keeps_session_readable() {
    let h = start(LoadingConfig::default());
    h.scheduler.advance(300);
    if let Some(session) = h.session.as_ref() {
        session.cancel();
    }
    h.scheduler.advance(5_000);
    assert_eq!(h.progress(), 10);
    assert_eq!(h.completions.get(), 0);
}

#[test]
fn owner_may_drop_session_from_completion_callback() {
    let scheduler = ManualScheduler::default();
    let slot: Rc<RefCell<Option<LoadingSession<ManualTimer>>>> = Rc::default();
    let done = Rc::new(Cell::new(false));

    let own = slot.clone();
    let flag = done.clone();
    let session = start_loading(
        &scheduler,
        LoadingConfig { duration_ms: 100, steps: 10, settle_ms: 50 },
        |_| {},
        move || {
            own.borrow_mut().take();
            flag.set(true);
        },
    );
    *slot.borrow_mut() = Some(session);

    scheduler.advance(149);
    assert!(!done.get());
    scheduler.advance(1);
    assert!(done.get());
    assert_eq!(scheduler.now(), 150);
    assert!(slot.borrow().is_none());
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn short_config_scales_timeline() {
    let h = start(LoadingConfig { duration_ms: 1_000, steps: 100, settle_ms: 200 });
    h.scheduler.advance(1_000);
    assert_eq!(h.progress(), 100);
    h.scheduler.advance(200);
    assert_eq!(h.completed_at.get(), Some(1_200));
}

#[test]
fn fewer_steps_still_reach_100_at_duration() {
    let h = start(LoadingConfig { duration_ms: 3_000, steps: 50, settle_ms: 500 });
    h.scheduler.advance(2_999);
    assert_eq!(h.progress(), 98);
    h.scheduler.advance(1);
    assert_eq!(h.progress(), 100);
    h.scheduler.advance(500);
    assert_eq!(h.completed_at.get(), Some(3_500));
    assert_eq!(h.completions.get(), 1);

    let progress = h.progress.borrow();
    assert_eq!(progress.len(), 50);
    assert!(progress.iter().all(|p| p % 2 == 0));
}

#[test]
fn uneven_step_count_completes_at_duration_plus_settle() {
    let h = start(LoadingConfig { duration_ms: 1_000, steps: 30, settle_ms: 250 });
    h.scheduler.advance(999);
    assert!(h.progress() < 100);
    h.scheduler.advance(1);
    assert_eq!(h.progress(), 100);
    h.scheduler.advance(10_000);
    assert_eq!(h.completed_at.get(), Some(1_250));
    assert_eq!(h.completions.get(), 1);
}

#[test]
fn more_steps_than_percent_reports_each_value_once() {
    let h = start(LoadingConfig { duration_ms: 3_000, steps: 300, settle_ms: 500 });
    h.scheduler.advance(3_000);
    assert_eq!(h.progress(), 100);
    let progress = h.progress.borrow();
    assert_eq!(*progress, (1..=100).collect::<Vec<u8>>());
    drop(progress);
    h.scheduler.advance(500);
    assert_eq!(h.completed_at.get(), Some(3_500));
}
