use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::testing::ManualScheduler;
use super::*;

#[test]
fn manual_after_fires_once_at_its_deadline() {
    let scheduler = ManualScheduler::default();
    let count = Rc::new(Cell::new(0));
    let seen = count.clone();
    let _timer = scheduler.after(30, Box::new(move || seen.set(seen.get() + 1)));

    scheduler.advance(29);
    assert_eq!(count.get(), 0);
    scheduler.advance(1);
    assert_eq!(count.get(), 1);
    scheduler.advance(90);
    assert_eq!(count.get(), 1);
    assert_eq!(scheduler.now(), 120);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn zero_delay_fires_on_next_advance() {
    let scheduler = ManualScheduler::default();
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    let _timer = scheduler.after(0, Box::new(move || flag.set(true)));
    assert!(!fired.get());
    scheduler.advance(0);
    assert!(fired.get());
}

#[test]
fn dropping_handle_cancels_timer() {
    let scheduler = ManualScheduler::default();
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    let timer = scheduler.after(100, Box::new(move || flag.set(true)));
    assert_eq!(scheduler.pending(), 1);

    drop(timer);
    scheduler.advance(500);
    assert!(!fired.get());
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn handle_dropped_inside_own_callback_is_harmless() {
    let scheduler = ManualScheduler::default();
    let slot: Rc<RefCell<Option<testing::ManualTimer>>> = Rc::default();
    let count = Rc::new(Cell::new(0));

    let seen = count.clone();
    let own = slot.clone();
    let timer = scheduler.after(
        5,
        Box::new(move || {
            seen.set(seen.get() + 1);
            own.borrow_mut().take();
        }),
    );
    *slot.borrow_mut() = Some(timer);

    scheduler.advance(50);
    assert_eq!(count.get(), 1);
    assert!(slot.borrow().is_none());
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn timers_fire_in_due_order_across_one_advance() {
    let scheduler = ManualScheduler::default();
    let log = Rc::new(RefCell::new(Vec::new()));

    let a = log.clone();
    let _late = scheduler.after(20, Box::new(move || a.borrow_mut().push("late")));
    let b = log.clone();
    let _early = scheduler.after(10, Box::new(move || b.borrow_mut().push("early")));

    scheduler.advance(25);
    assert_eq!(*log.borrow(), vec!["early", "late"]);
}

#[test]
fn timer_scheduled_from_callback_fires_in_same_advance() {
    let scheduler = ManualScheduler::default();
    let fired_at = Rc::new(Cell::new(None));
    let nested: Rc<RefCell<Option<testing::ManualTimer>>> = Rc::default();

    let inner_scheduler = scheduler.clone();
    let at = fired_at.clone();
    let keep = nested.clone();
    let _outer = scheduler.after(
        10,
        Box::new(move || {
            let clock = inner_scheduler.clone();
            let at = at.clone();
            let timer = inner_scheduler.after(5, Box::new(move || at.set(Some(clock.now()))));
            *keep.borrow_mut() = Some(timer);
        }),
    );

    scheduler.advance(100);
    assert_eq!(fired_at.get(), Some(15));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_scheduler_never_fires_outside_browser() {
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    let _timer = BrowserScheduler.after(0, Box::new(move || flag.set(true)));
    assert!(!fired.get());
}
