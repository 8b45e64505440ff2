use std::fmt::Debug;

use log::Level;
use stationary_core::Observer;

/// An observer that logs every event and never steers the solver.
///
/// Events are written with their `Debug` representation at the configured
/// [`Level`], prefixed by a label, under the `stationary_observers` target.
/// Pass `&mut LogObserver` to keep access to [`events`](Self::events) after
/// the solve.
///
/// # Example
///
/// ```rust
/// use stationary_core::{Derivatives, Polynomial, Variables};
/// use stationary_observers::LogObserver;
/// use stationary_solvers::newton;
///
/// let f = Polynomial::parse("x1^2 + x2^2", &Variables::default()).unwrap();
/// let problem = Derivatives::of(&f);
///
/// let mut observer = LogObserver::new("newton");
/// newton::solve(&problem, [1.0, 1.0], &newton::Config::default(), &mut observer).unwrap();
/// assert_eq!(observer.events(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct LogObserver {
    label: String,
    level: Level,
    events: usize,
}

impl LogObserver {
    /// Creates an observer that logs at [`Level::Debug`].
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            level: Level::Debug,
            events: 0,
        }
    }

    /// Sets the log level.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the number of events seen so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl<E: Debug, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events += 1;
        log::log!(self.level, "{} #{}: {event:?}", self.label, self.events);
        None
    }
}

impl<E: Debug, A> Observer<E, A> for &mut LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Tick(u32);

    fn feed(observer: &mut LogObserver, event: Tick) -> Option<()> {
        observer.observe(&event)
    }

    #[test]
    fn counts_events_and_never_acts() {
        let mut observer = LogObserver::new("test").with_level(Level::Trace);

        assert!(feed(&mut observer, Tick(1)).is_none());
        assert!(feed(&mut observer, Tick(2)).is_none());

        assert_eq!(observer.events(), 2);
        assert_eq!(observer.level(), Level::Trace);
    }

    #[test]
    fn mutable_reference_forwards_to_observer() {
        let mut observer = LogObserver::new("by-ref");
        {
            let mut by_ref = &mut observer;
            let action = <&mut LogObserver as Observer<Tick, ()>>::observe(&mut by_ref, &Tick(7));
            assert!(action.is_none());
        }
        assert_eq!(observer.events(), 1);
    }
}
