use std::cell::Cell;
use std::ops::ControlFlow;
use std::rc::Rc;
use std::time::Duration;

/// Monotonic time source for the tick loop.
pub trait Clock {
    /// Time elapsed since the clock's own epoch.
    fn now(&self) -> Duration;
}

/// Wall clock backed by `instant`, which maps to `performance.now()` on wasm.
pub struct SystemClock {
    start: instant::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: instant::Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Hand-driven clock. Clones share the same time, so a test can keep one
/// handle and give the other to the loop.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Shared on/off switch for a running loop. Whoever holds a clone can stop it.
#[derive(Clone, Debug)]
pub struct ActiveFlag(Rc<Cell<bool>>);

impl ActiveFlag {
    pub fn new(active: bool) -> Self {
        Self(Rc::new(Cell::new(active)))
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.0.get()
    }

    pub fn deactivate(&self) {
        self.0.set(false);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickInfo {
    /// Zero-based index of this tick.
    pub index: u64,
    pub now: Duration,
}

/// Explicit per-frame loop.
///
/// The host calls [`TickLoop::poll`] whenever it gets a chance to run a frame
/// (an animation frame in the browser, a manual step in tests) and only asks
/// for another frame when `poll` returns `Continue`. The active flag is read
/// both before the body runs and again before answering, so deactivating the
/// flag from anywhere stops the chain at the next opportunity.
pub struct TickLoop<C> {
    clock: C,
    active: ActiveFlag,
    interval: Duration,
    last_tick: Option<Duration>,
    ticks: u64,
}

impl<C: Clock> TickLoop<C> {
    pub fn new(clock: C, interval: Duration) -> Self {
        Self {
            clock,
            active: ActiveFlag::new(true),
            interval,
            last_tick: None,
            ticks: 0,
        }
    }

    pub fn active_flag(&self) -> ActiveFlag {
        self.active.clone()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_active()
    }

    pub fn stop(&self) {
        self.active.deactivate();
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn last_tick(&self) -> Option<Duration> {
        self.last_tick
    }

    pub fn poll(&mut self, body: impl FnOnce(TickInfo)) -> ControlFlow<()> {
        if !self.active.is_active() {
            return ControlFlow::Break(());
        }
        let now = self.clock.now();
        let due = match self.last_tick {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.interval,
        };
        if due {
            body(TickInfo {
                index: self.ticks,
                now,
            });
            self.ticks += 1;
            self.last_tick = Some(now);
        }
        if self.active.is_active() {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_gates_ticks() {
        let clock = ManualClock::new();
        let mut tl = TickLoop::new(clock.clone(), Duration::from_millis(10));
        let mut ran = 0;
        _ = tl.poll(|_| ran += 1);
        _ = tl.poll(|_| ran += 1);
        assert_eq!(ran, 1);
        clock.advance(Duration::from_millis(10));
        _ = tl.poll(|_| ran += 1);
        assert_eq!(ran, 2);
        assert_eq!(tl.last_tick(), Some(Duration::from_millis(10)));
    }

    #[test]
    fn stopping_inside_body_breaks() {
        let mut tl = TickLoop::new(ManualClock::new(), Duration::ZERO);
        let flag = tl.active_flag();
        let flow = tl.poll(|_| flag.deactivate());
        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(tl.ticks(), 1);
    }
}
