//! Singleton: one lazily-created, process-wide instance behind access functions.

use crate::domain::model::{Pattern, Trace};
use crate::domain::ports::Demo;
use crate::utils::error::{PatternError, Result};
use std::sync::{OnceLock, PoisonError, RwLock};

/// A slot that can be filled exactly once.
///
/// `get_or_init` is the lazy accessor; `create` is direct construction and
/// fails once the slot holds a value, whichever path filled it.
pub struct SingletonCell<T> {
    slot: OnceLock<T>,
}

impl<T> SingletonCell<T> {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }

    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.slot.get_or_init(init)
    }

    pub fn create(&self, value: T) -> Result<&T> {
        self.slot
            .set(value)
            .map_err(|_| PatternError::AlreadyInstantiated {
                type_name: std::any::type_name::<T>(),
            })?;
        tracing::debug!(type_name = std::any::type_name::<T>(), "singleton instantiated");
        self.slot.get().ok_or(PatternError::AlreadyInstantiated {
            type_name: std::any::type_name::<T>(),
        })
    }
}

impl<T> Default for SingletonCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub const DEFAULT_TEST: &str = "Atma";

static INSTANCE: SingletonCell<Singleton> = SingletonCell::new();

#[derive(Debug)]
pub struct Singleton {
    test: RwLock<String>,
}

impl Singleton {
    fn fresh() -> Self {
        Self {
            test: RwLock::new(DEFAULT_TEST.to_string()),
        }
    }

    /// The process-wide cell backing `instance` and `create`.
    pub fn cell() -> &'static SingletonCell<Singleton> {
        &INSTANCE
    }

    /// Returns the shared instance, constructing it on first use.
    pub fn instance() -> &'static Singleton {
        Self::instance_in(&INSTANCE)
    }

    /// Direct construction. Fails if the instance already exists.
    pub fn create() -> Result<&'static Singleton> {
        Self::create_in(&INSTANCE)
    }

    pub fn instance_in(cell: &SingletonCell<Singleton>) -> &Singleton {
        cell.get_or_init(Self::fresh)
    }

    pub fn create_in(cell: &SingletonCell<Singleton>) -> Result<&Singleton> {
        cell.create(Self::fresh())
    }

    pub fn set_test(&self, test: impl Into<String>) {
        *self.test.write().unwrap_or_else(PoisonError::into_inner) = test.into();
    }

    pub fn test(&self) -> String {
        self.test
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Runs against the process-wide cell unless given another, so tests can
/// replay the demo on a cell of their own.
pub struct SingletonDemo {
    cell: &'static SingletonCell<Singleton>,
}

impl SingletonDemo {
    pub fn new() -> Self {
        Self::with_cell(Singleton::cell())
    }

    pub fn with_cell(cell: &'static SingletonCell<Singleton>) -> Self {
        Self { cell }
    }
}

impl Default for SingletonDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Demo for SingletonDemo {
    fn pattern(&self) -> Pattern {
        Pattern::Singleton
    }

    fn run(&self, trace: &mut Trace) -> Result<()> {
        let first = Singleton::create_in(self.cell)?;
        let second = Singleton::instance_in(self.cell);

        first.set_test("Ultima");
        trace.line(format!("SecondInstance - variable test:  {}", second.test()));

        trace.line("Trying to create another instance:");
        Singleton::create_in(self.cell)?;
        Ok(())
    }
}
