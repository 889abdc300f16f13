//! Observer: a subject broadcasts each state change to every attached observer.

use crate::domain::model::{Pattern, Trace};
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SUBJECT_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubjectId(u64);

impl SubjectId {
    fn next() -> Self {
        Self(NEXT_SUBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

pub trait Observer<T> {
    fn update(&mut self, state: &T, trace: &mut Trace);

    /// Back-reference to the subject this observer is attached to.
    fn subject(&self) -> Option<SubjectId>;
    fn set_subject(&mut self, subject: Option<SubjectId>);
}

pub type SharedObserver<T> = Rc<RefCell<dyn Observer<T>>>;

/// Observers are held in an identity set keyed by allocation, so the same
/// handle attached twice is notified once. Notification order is unspecified.
pub struct Subject<T> {
    id: SubjectId,
    observers: HashMap<usize, SharedObserver<T>>,
    state: Option<T>,
}

fn identity<T>(observer: &SharedObserver<T>) -> usize {
    Rc::as_ptr(observer) as *const () as usize
}

impl<T> Subject<T> {
    pub fn new() -> Self {
        Self {
            id: SubjectId::next(),
            observers: HashMap::new(),
            state: None,
        }
    }

    pub fn id(&self) -> SubjectId {
        self.id
    }

    pub fn attach(&mut self, observer: SharedObserver<T>) {
        observer.borrow_mut().set_subject(Some(self.id));
        self.observers.insert(identity(&observer), observer);
    }

    pub fn detach(&mut self, observer: &SharedObserver<T>) {
        observer.borrow_mut().set_subject(None);
        self.observers.remove(&identity(observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn state(&self) -> Option<&T> {
        self.state.as_ref()
    }

    /// Stores the new state and notifies every attached observer.
    pub fn set_state(&mut self, state: T, trace: &mut Trace) {
        let state = &*self.state.insert(state);
        tracing::debug!(observers = self.observers.len(), "notifying observers");
        for observer in self.observers.values() {
            observer.borrow_mut().update(state, trace);
        }
    }
}

impl<T> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps a copy of the subject's state and reports each update by name.
pub struct ConcreteObserver<T> {
    name: String,
    subject: Option<SubjectId>,
    observer_state: Option<T>,
    updates: usize,
}

impl<T> ConcreteObserver<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subject: None,
            observer_state: None,
            updates: 0,
        }
    }

    pub fn observer_state(&self) -> Option<&T> {
        self.observer_state.as_ref()
    }

    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl<T: Clone> Observer<T> for ConcreteObserver<T> {
    fn update(&mut self, state: &T, trace: &mut Trace) {
        self.observer_state = Some(state.clone());
        self.updates += 1;
        trace.line(format!("{} - updated", self.name));
    }

    fn subject(&self) -> Option<SubjectId> {
        self.subject
    }

    fn set_subject(&mut self, subject: Option<SubjectId>) {
        self.subject = subject;
    }
}

pub struct ObserverDemo;

impl Demo for ObserverDemo {
    fn pattern(&self) -> Pattern {
        Pattern::Observer
    }

    fn run(&self, trace: &mut Trace) -> Result<()> {
        let mut subject: Subject<i64> = Subject::new();
        let first = Rc::new(RefCell::new(ConcreteObserver::<i64>::new("ConcreteObserver1")));
        let second = Rc::new(RefCell::new(ConcreteObserver::<i64>::new("ConcreteObserver2")));

        subject.attach(first);
        subject.attach(second);
        subject.set_state(123, trace);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observer(name: &str) -> Rc<RefCell<ConcreteObserver<i64>>> {
        Rc::new(RefCell::new(ConcreteObserver::new(name)))
    }

    #[test]
    fn test_each_observer_updated_once() {
        let mut subject: Subject<i64> = Subject::new();
        let observers: Vec<_> = (1..=4).map(|i| observer(&format!("obs{i}"))).collect();
        for o in &observers {
            subject.attach(o.clone());
        }

        let mut trace = Trace::new();
        subject.set_state(7, &mut trace);

        assert_eq!(trace.len(), 4);
        for (i, o) in observers.iter().enumerate() {
            let o = o.borrow();
            assert_eq!(o.updates(), 1);
            assert_eq!(o.observer_state(), Some(&7));
            let expected = format!("obs{} - updated", i + 1);
            assert_eq!(trace.lines().iter().filter(|l| **l == expected).count(), 1);
        }
        assert_eq!(subject.state(), Some(&7));
    }

    #[test]
    fn test_attach_sets_back_reference_and_detach_clears_it() {
        let mut subject: Subject<i64> = Subject::new();
        let o = observer("obs");

        subject.attach(o.clone());
        assert_eq!(o.borrow().subject(), Some(subject.id()));

        let shared: SharedObserver<i64> = o.clone();
        subject.detach(&shared);
        assert_eq!(o.borrow().subject(), None);
        assert_eq!(subject.observer_count(), 0);

        let mut trace = Trace::new();
        subject.set_state(1, &mut trace);
        assert!(trace.is_empty());
        assert_eq!(o.borrow().updates(), 0);
    }

    #[test]
    fn test_attaching_twice_keeps_one_membership() {
        let mut subject: Subject<i64> = Subject::new();
        let o = observer("obs");

        subject.attach(o.clone());
        subject.attach(o.clone());
        assert_eq!(subject.observer_count(), 1);

        let mut trace = Trace::new();
        subject.set_state(5, &mut trace);
        assert_eq!(o.borrow().updates(), 1);
    }

    #[test]
    fn test_subjects_have_distinct_ids() {
        let a: Subject<i64> = Subject::new();
        let b: Subject<i64> = Subject::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_demo_trace_membership() {
        let mut trace = Trace::new();
        ObserverDemo.run(&mut trace).unwrap();

        let mut lines = trace.into_lines();
        lines.sort();
        assert_eq!(
            lines,
            vec![
                "ConcreteObserver1 - updated".to_string(),
                "ConcreteObserver2 - updated".to_string(),
            ]
        );
    }
}
