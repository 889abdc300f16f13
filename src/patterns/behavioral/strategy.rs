//! Strategy: the context stores its behavior as a value picked at construction.

use crate::domain::model::{Pattern, Trace};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

pub type Behavior = Box<dyn Fn(&str) -> String + Send + Sync>;

pub const DEFAULT_NAME: &str = "Strategy Example 0";

pub struct Strategy {
    name: String,
    behavior: Behavior,
}

impl Strategy {
    /// A context running the default behavior, which reports its name.
    pub fn new() -> Self {
        Self::with_behavior(|name| name.to_string())
    }

    pub fn with_behavior<F>(behavior: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            name: DEFAULT_NAME.to_string(),
            behavior: Box::new(behavior),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn execute(&self) -> String {
        (self.behavior)(&self.name)
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::new()
    }
}

pub fn execute_replacement1(name: &str) -> String {
    format!("{} from execute 1", name)
}

pub fn execute_replacement2(name: &str) -> String {
    format!("{} from execute 2", name)
}

pub struct StrategyDemo;

impl Demo for StrategyDemo {
    fn pattern(&self) -> Pattern {
        Pattern::Strategy
    }

    fn run(&self, trace: &mut Trace) -> Result<()> {
        let contexts = [
            Strategy::new(),
            Strategy::with_behavior(execute_replacement1),
            Strategy::with_behavior(execute_replacement2),
        ];
        for context in &contexts {
            trace.line(context.execute());
        }
        Ok(())
    }
}
