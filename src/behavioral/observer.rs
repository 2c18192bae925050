// Observer Pattern - a subject fans notifications out to attached observers.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

pub trait Observer {
    /// Called once per `Subject::notify`; returns what the observer reports.
    fn update(&self) -> String;
}

/// Handle returned by `attach`, used to detach the same observer later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObserverId(u64);

#[derive(Default)]
pub struct Subject {
    observers: Vec<(ObserverId, Rc<dyn Observer>)>,
    next_id: u64,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, observer: Rc<dyn Observer>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        debug!(?id, count = self.observers.len(), "observer attached");
        id
    }

    /// Returns false when the id was never attached or is already gone.
    pub fn detach(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(attached, _)| *attached != id);
        let removed = self.observers.len() != before;
        debug!(?id, removed, "observer detached");
        removed
    }

    /// Notify every observer in attachment order, collecting their reports.
    pub fn notify(&self) -> Vec<String> {
        self.observers
            .iter()
            .map(|(_, observer)| observer.update())
            .collect()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

#[derive(Default)]
pub struct ConcreteObserver {
    notified: Cell<usize>,
}

impl ConcreteObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn times_notified(&self) -> usize {
        self.notified.get()
    }
}

impl Observer for ConcreteObserver {
    fn update(&self) -> String {
        self.notified.set(self.notified.get() + 1);
        "Observer has been notified.".to_string()
    }
}
