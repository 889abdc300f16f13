//! Bridge: the abstraction delegates to whichever implementor it holds.

use crate::domain::model::{Pattern, Trace};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

pub trait Implementor {
    fn operation_imp(&self) -> String;
}

pub struct ConcreteImplementorA;

impl Implementor for ConcreteImplementorA {
    fn operation_imp(&self) -> String {
        "Operation A".to_string()
    }
}

pub struct ConcreteImplementorB;

impl Implementor for ConcreteImplementorB {
    fn operation_imp(&self) -> String {
        "Operation B".to_string()
    }
}

pub struct Abstraction {
    imp: Box<dyn Implementor>,
}

impl Abstraction {
    pub fn new(imp: Box<dyn Implementor>) -> Self {
        Self { imp }
    }

    /// Swaps the implementor, returning the previous one.
    pub fn replace_implementor(&mut self, imp: Box<dyn Implementor>) -> Box<dyn Implementor> {
        std::mem::replace(&mut self.imp, imp)
    }

    pub fn operation(&self) -> String {
        self.imp.operation_imp()
    }
}

pub struct BridgeDemo;

impl Demo for BridgeDemo {
    fn pattern(&self) -> Pattern {
        Pattern::Bridge
    }

    fn run(&self, trace: &mut Trace) -> Result<()> {
        let abstraction = Abstraction::new(Box::new(ConcreteImplementorA));
        trace.line(abstraction.operation());

        let abstraction = Abstraction::new(Box::new(ConcreteImplementorB));
        trace.line(abstraction.operation());
        Ok(())
    }
}
