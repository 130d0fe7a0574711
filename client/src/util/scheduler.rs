//! Host timer abstraction.
//!
//! `BrowserScheduler` schedules one-shot timeouts through `gloo-timers`;
//! tests drive a virtual clock instead. Dropping a handle cancels its timer
//! immediately, including from inside that timer's own callback.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

pub trait Scheduler {
    /// Cancels the timer when dropped.
    type Handle: 'static;

    /// Call `fire` once after `delay_ms` unless the handle is dropped first.
    fn after(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> Self::Handle;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// Handle to a `gloo-timers` timeout.
pub struct BrowserTimer {
    #[cfg(feature = "hydrate")]
    timeout: Option<gloo_timers::callback::Timeout>,
}

impl Drop for BrowserTimer {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(timeout) = self.timeout.take() {
                // Clear the host timer now; free its JS closure after the
                // current callback returns, since it may be the one running.
                let closure = timeout.cancel();
                leptos::task::spawn_local(async move { drop(closure) });
            }
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn after(&self, delay_ms: u32, fire: Box<dyn FnOnce()>) -> BrowserTimer {
        #[cfg(feature = "hydrate")]
        {
            BrowserTimer { timeout: Some(gloo_timers::callback::Timeout::new(delay_ms, fire)) }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, fire);
            BrowserTimer {}
        }
    }
}
