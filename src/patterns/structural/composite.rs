//! Composite: leaves and composites answer the same `operation`.

use crate::domain::model::{Pattern, Trace};
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::rc::Rc;

pub trait Component {
    fn operation(&self) -> String;
}

pub type SharedComponent = Rc<dyn Component>;

pub struct Leaf {
    id: u32,
}

impl Leaf {
    pub fn new(id: u32) -> Self {
        Self { id }
    }
}

impl Component for Leaf {
    fn operation(&self) -> String {
        format!("Leaf {} - Operation", self.id)
    }
}

/// Children live in an identity set; iteration order is unspecified.
#[derive(Default)]
pub struct Composite {
    children: HashMap<usize, SharedComponent>,
}

fn identity(component: &SharedComponent) -> usize {
    Rc::as_ptr(component) as *const () as usize
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, component: SharedComponent) {
        self.children.insert(identity(&component), component);
    }

    pub fn remove(&mut self, component: &SharedComponent) {
        self.children.remove(&identity(component));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Component for Composite {
    /// Each child's output followed by a newline.
    fn operation(&self) -> String {
        let mut out = String::new();
        for child in self.children.values() {
            out.push_str(&child.operation());
            out.push('\n');
        }
        out
    }
}

pub struct CompositeDemo;

impl Demo for CompositeDemo {
    fn pattern(&self) -> Pattern {
        Pattern::Composite
    }

    fn run(&self, trace: &mut Trace) -> Result<()> {
        let mut composite = Composite::new();
        for id in 1..=3 {
            composite.add(Rc::new(Leaf::new(id)));
        }

        for line in composite.operation().lines() {
            trace.line(line);
        }
        trace.line("");
        Ok(())
    }
}
