use std::time::Duration;

/// Identity token for a registered tick handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickerId(u64);

impl TickerId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Periodic frame scheduler the game registers its runner with.
pub trait TickSource {
    fn add(&mut self) -> TickerId;
    fn remove(&mut self, id: TickerId) -> bool;
    fn handlers(&self) -> Vec<TickerId>;
    fn is_registered(&self, id: TickerId) -> bool {
        self.handlers().contains(&id)
    }

    fn min_fps(&self) -> f64;
    fn max_fps(&self) -> f64;
    fn set_min_fps(&mut self, fps: f64);
    fn set_max_fps(&mut self, fps: f64);

    /// Number of ticks emitted so far.
    fn frame(&self) -> u64;

    /// Feeds wall-clock time; returns how many ticks are due now.
    fn poll(&mut self, elapsed: Duration) -> u32;
}

/// Time-accumulating ticker. `max_fps` sets the tick period, `min_fps`
/// bounds how much time a single poll may contribute, so a stalled host
/// does not trigger a burst of catch-up ticks.
pub struct Ticker {
    handlers: Vec<TickerId>,
    next_id: u64,
    min_fps: f64,
    max_fps: f64,
    accumulated: f64,
    frame: u64,
}

impl Ticker {
    pub fn new(min_fps: f64, max_fps: f64) -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
            min_fps,
            max_fps,
            accumulated: 0.0,
            frame: 0,
        }
    }
}

impl TickSource for Ticker {
    fn add(&mut self) -> TickerId {
        self.next_id += 1;
        let id = TickerId(self.next_id);
        self.handlers.push(id);
        id
    }

    fn remove(&mut self, id: TickerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|h| *h != id);
        if self.handlers.is_empty() {
            self.accumulated = 0.0;
        }
        self.handlers.len() != before
    }

    fn handlers(&self) -> Vec<TickerId> {
        self.handlers.clone()
    }

    fn min_fps(&self) -> f64 {
        self.min_fps
    }

    fn max_fps(&self) -> f64 {
        self.max_fps
    }

    fn set_min_fps(&mut self, fps: f64) {
        self.min_fps = fps;
    }

    fn set_max_fps(&mut self, fps: f64) {
        self.max_fps = fps;
    }

    fn frame(&self) -> u64 {
        self.frame
    }

    fn poll(&mut self, elapsed: Duration) -> u32 {
        if self.handlers.is_empty() || self.max_fps <= 0.0 {
            return 0;
        }

        let mut delta = elapsed.as_secs_f64();
        if self.min_fps > 0.0 {
            delta = delta.min(1.0 / self.min_fps);
        }
        self.accumulated += delta;

        let period = 1.0 / self.max_fps;
        let mut due = 0;
        while self.accumulated >= period {
            self.accumulated -= period;
            due += 1;
        }
        self.frame += due as u64;
        due
    }
}
