//! Splash-screen loading progression.
//!
//! DESIGN
//! ======
//! `LoadingMachine` is the pure state machine (`Running → Settling →
//! Complete`). `start_loading` wires it to a [`Scheduler`]: step `k` of `N`
//! fires at `k * duration / N` from activation, so the last step lands on
//! `duration` exactly for any step count, and one more timeout covers the
//! settling delay. Timer callbacks only hold weak references to the
//! session, so dropping the `LoadingSession` is enough to guarantee
//! nothing fires afterwards.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::util::scheduler::Scheduler;

pub const DEFAULT_DURATION_MS: u32 = 3_000;
pub const DEFAULT_STEPS: u32 = 100;
pub const DEFAULT_SETTLE_MS: u32 = 500;
pub const MAX_PROGRESS: u8 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadingConfig {
    /// Time from activation until progress reaches 100.
    pub duration_ms: u32,
    /// Number of progress updates; `0` is treated as `1`.
    pub steps: u32,
    /// Pause between reaching 100 and the completion callback.
    pub settle_ms: u32,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self { duration_ms: DEFAULT_DURATION_MS, steps: DEFAULT_STEPS, settle_ms: DEFAULT_SETTLE_MS }
    }
}

impl LoadingConfig {
    fn step_count(&self) -> u32 {
        self.steps.max(1)
    }

    /// Offset from activation at which `step` fires. Non-decreasing in
    /// `step`, and equal to `duration_ms` for the final step.
    pub fn step_deadline_ms(&self, step: u32) -> u32 {
        let steps = self.step_count();
        let elapsed = u64::from(self.duration_ms) * u64::from(step.min(steps)) / u64::from(steps);
        u32::try_from(elapsed).unwrap_or(self.duration_ms)
    }

    /// Delay between `step - 1` and `step`.
    pub fn step_delay_ms(&self, step: u32) -> u32 {
        self.step_deadline_ms(step) - self.step_deadline_ms(step.saturating_sub(1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingPhase {
    Running(u8),
    Settling,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Advanced(u8),
    /// This tick brought progress to 100; settling starts now.
    Reached,
    /// Already past running; nothing changed.
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadingMachine {
    phase: LoadingPhase,
    step: u32,
    steps: u32,
}

impl Default for LoadingMachine {
    fn default() -> Self {
        Self::new(DEFAULT_STEPS)
    }
}

impl LoadingMachine {
    /// Machine that reaches 100 on its `steps`-th tick.
    pub fn new(steps: u32) -> Self {
        Self { phase: LoadingPhase::Running(0), step: 0, steps: steps.max(1) }
    }

    /// Ticks taken so far.
    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    pub fn progress(&self) -> u8 {
        match self.phase {
            LoadingPhase::Running(p) => p,
            LoadingPhase::Settling | LoadingPhase::Complete => MAX_PROGRESS,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == LoadingPhase::Complete
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !matches!(self.phase, LoadingPhase::Running(_)) {
            return TickOutcome::Ignored;
        }
        self.step += 1;
        let scaled = u64::from(self.step) * u64::from(MAX_PROGRESS) / u64::from(self.steps);
        let next = u8::try_from(scaled).unwrap_or(MAX_PROGRESS).min(MAX_PROGRESS);
        if self.step >= self.steps {
            self.phase = LoadingPhase::Settling;
            TickOutcome::Reached
        } else {
            self.phase = LoadingPhase::Running(next);
            TickOutcome::Advanced(next)
        }
    }

    /// Finish settling. Returns `true` exactly once per machine.
    pub fn settle(&mut self) -> bool {
        if self.phase != LoadingPhase::Settling {
            return false;
        }
        self.phase = LoadingPhase::Complete;
        true
    }
}

/// Status message bucket derived from progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadingStage {
    /// [0, 20)
    Initializing,
    /// [20, 40)
    LoadingComponents,
    /// [40, 60)
    AssemblingComponents,
    /// [60, 80)
    Projects,
    /// [80, 95)
    Finalizing,
    /// [95, 100]
    Complete,
}

impl LoadingStage {
    pub const ALL: [Self; 6] = [
        Self::Initializing,
        Self::LoadingComponents,
        Self::AssemblingComponents,
        Self::Projects,
        Self::Finalizing,
        Self::Complete,
    ];

    pub fn from_progress(progress: u8) -> Self {
        match progress {
            0..20 => Self::Initializing,
            20..40 => Self::LoadingComponents,
            40..60 => Self::AssemblingComponents,
            60..80 => Self::Projects,
            80..95 => Self::Finalizing,
            _ => Self::Complete,
        }
    }

    /// Lowest progress value that maps to this stage.
    pub fn threshold(self) -> u8 {
        match self {
            Self::Initializing => 0,
            Self::LoadingComponents => 20,
            Self::AssemblingComponents => 40,
            Self::Projects => 60,
            Self::Finalizing => 80,
            Self::Complete => 95,
        }
    }

    /// Short keyword for the stage.
    pub fn topic(self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::LoadingComponents | Self::AssemblingComponents => "components",
            Self::Projects => "projects",
            Self::Finalizing => "finalizing",
            Self::Complete => "complete",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Initializing => "Initializing portfolio...",
            Self::LoadingComponents => "Loading components...",
            Self::AssemblingComponents => "Assembling components...",
            Self::Projects => "Fetching projects...",
            Self::Finalizing => "Finalizing details...",
            Self::Complete => "Ready!",
        }
    }
}

struct SessionInner<H> {
    machine: LoadingMachine,
    /// Pending step timeout, or the settle timeout once progress is 100.
    timer: Option<H>,
    on_progress: Box<dyn FnMut(u8)>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

/// A running loading sequence. Dropping it cancels every pending timer.
pub struct LoadingSession<H: 'static> {
    inner: Rc<RefCell<SessionInner<H>>>,
}

impl<H: 'static> LoadingSession<H> {
    pub fn progress(&self) -> u8 {
        self.inner.borrow().machine.progress()
    }

    pub fn phase(&self) -> LoadingPhase {
        self.inner.borrow().machine.phase()
    }

    /// Stop the pending timer and drop the completion callback unfired.
    pub fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.timer = None;
        inner.on_complete = None;
    }
}

/// Start a loading sequence on `scheduler`.
///
/// `on_progress` sees every new progress value; `on_complete` runs once,
/// `config.settle_ms` after progress reaches 100. `on_progress` runs while
/// the session is borrowed and must not call back into it.
pub fn start_loading<S>(
    scheduler: &S,
    config: LoadingConfig,
    on_progress: impl FnMut(u8) + 'static,
    on_complete: impl FnOnce() + 'static,
) -> LoadingSession<S::Handle>
where
    S: Scheduler + Clone + 'static,
{
    let inner = Rc::new(RefCell::new(SessionInner {
        machine: LoadingMachine::new(config.steps),
        timer: None,
        on_progress: Box::new(on_progress),
        on_complete: Some(Box::new(on_complete)),
    }));

    let first = schedule_step(Rc::downgrade(&inner), scheduler, config, 1);
    inner.borrow_mut().timer = Some(first);

    log::debug!("loading started: {}ms over {} steps", config.duration_ms, config.step_count());
    LoadingSession { inner }
}

fn schedule_step<S>(
    weak: Weak<RefCell<SessionInner<S::Handle>>>,
    scheduler: &S,
    config: LoadingConfig,
    step: u32,
) -> S::Handle
where
    S: Scheduler + Clone + 'static,
{
    let next_scheduler = scheduler.clone();
    scheduler.after(
        config.step_delay_ms(step),
        Box::new(move || on_step(&weak, &next_scheduler, config)),
    )
}

fn on_step<S>(weak: &Weak<RefCell<SessionInner<S::Handle>>>, scheduler: &S, config: LoadingConfig)
where
    S: Scheduler + Clone + 'static,
{
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let mut guard = inner.borrow_mut();
    let state = &mut *guard;
    let before = state.machine.progress();
    match state.machine.tick() {
        TickOutcome::Advanced(progress) => {
            if progress != before {
                (state.on_progress)(progress);
            }
            let next = state.machine.step() + 1;
            state.timer = Some(schedule_step(weak.clone(), scheduler, config, next));
        }
        TickOutcome::Reached => {
            (state.on_progress)(MAX_PROGRESS);
            let settle_weak = weak.clone();
            state.timer = Some(scheduler.after(config.settle_ms, Box::new(move || on_settled(&settle_weak))));
        }
        TickOutcome::Ignored => {}
    }
}

fn on_settled<H>(weak: &Weak<RefCell<SessionInner<H>>>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    let callback = {
        let mut state = inner.borrow_mut();
        if !state.machine.settle() {
            return;
        }
        state.on_complete.take()
    };
    log::debug!("loading complete");
    if let Some(callback) = callback {
        callback();
    }
}
