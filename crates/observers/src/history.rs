use unimin_core::Observer;
use unimin_solvers::{Action, Event, Point};

/// Records every event a solver emits.
///
/// Never stops the solver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    events: Vec<Event>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in evaluation order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the evaluated points in evaluation order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.events.iter().map(|event| event.point)
    }

    /// Returns the bracket width at each evaluation.
    pub fn widths(&self) -> impl Iterator<Item = f64> + '_ {
        self.events.iter().map(Event::width)
    }

    /// Returns the lowest evaluated point, or `None` if nothing was recorded.
    ///
    /// Ties keep the earliest point.
    #[must_use]
    pub fn best(&self) -> Option<Point> {
        self.points().reduce(Point::better)
    }
}

impl Observer<Event, Action> for History {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        self.events.push(*event);
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the events can be read after the solve completes.
impl Observer<Event, Action> for &mut History {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (*self).observe(event)
    }
}
