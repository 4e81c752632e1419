//! Browser timers behind the carousel's `Scheduler` seam.

use std::time::Duration;

use aoclima_carousel::{CarouselError, Scheduler};
use leptos::prelude::*;

/// Schedules on `window.setTimeout` / `window.setInterval`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

/// A live browser timer; cleared when dropped.
#[derive(Debug)]
pub enum BrowserTimer {
    Timeout(TimeoutHandle),
    Interval(IntervalHandle),
}

impl Drop for BrowserTimer {
    fn drop(&mut self) {
        // clearing an already-fired timeout is a no-op in the browser
        match self {
            BrowserTimer::Timeout(handle) => handle.clear(),
            BrowserTimer::Interval(handle) => handle.clear(),
        }
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn once(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce()>,
    ) -> aoclima_carousel::Result<BrowserTimer> {
        set_timeout_with_handle(task, delay)
            .map(BrowserTimer::Timeout)
            .map_err(|err| CarouselError::Timer(format!("{err:?}")))
    }

    fn every(&self, period: Duration, task: Box<dyn Fn()>) -> aoclima_carousel::Result<BrowserTimer> {
        set_interval_with_handle(task, period)
            .map(BrowserTimer::Interval)
            .map_err(|err| CarouselError::Timer(format!("{err:?}")))
    }
}
