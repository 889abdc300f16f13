//! Template Method: `go` fixes the order of the steps, variants fill them in.

use crate::domain::model::{Pattern, Trace};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

/// The steps a meal supplies.
pub trait Meal {
    fn prepare(&self, trace: &mut Trace);
    fn cook(&self, trace: &mut Trace);
    fn eat(&self, trace: &mut Trace);
}

/// The skeleton. Blanket-implemented for every `Meal`, so no variant can
/// provide its own `go`.
pub trait MakeMeal {
    fn go(&self, trace: &mut Trace);
}

impl<M: Meal + ?Sized> MakeMeal for M {
    fn go(&self, trace: &mut Trace) {
        self.prepare(trace);
        self.cook(trace);
        self.eat(trace);
    }
}

pub struct MakePizza;

impl Meal for MakePizza {
    fn prepare(&self, trace: &mut Trace) {
        trace.line("Prepare Pizza");
    }

    fn cook(&self, trace: &mut Trace) {
        trace.line("Cook Pizza");
    }

    fn eat(&self, trace: &mut Trace) {
        trace.line("Eat Pizza");
    }
}

pub struct MakeTea;

impl Meal for MakeTea {
    fn prepare(&self, trace: &mut Trace) {
        trace.line("Prepare Tea");
    }

    fn cook(&self, trace: &mut Trace) {
        trace.line("Cook Tea");
    }

    fn eat(&self, trace: &mut Trace) {
        trace.line("Eat Tea");
    }
}

pub struct TemplateMethodDemo;

impl Demo for TemplateMethodDemo {
    fn pattern(&self) -> Pattern {
        Pattern::TemplateMethod
    }

    fn run(&self, trace: &mut Trace) -> Result<()> {
        MakePizza.go(trace);
        trace.line("+".repeat(25));
        MakeTea.go(trace);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sandwich;

    impl Meal for Sandwich {
        fn prepare(&self, trace: &mut Trace) {
            trace.line("slice");
        }

        fn cook(&self, _trace: &mut Trace) {}

        fn eat(&self, trace: &mut Trace) {
            trace.line("bite");
        }
    }

    #[test]
    fn test_go_runs_steps_in_order() {
        let mut trace = Trace::new();
        MakeTea.go(&mut trace);
        assert_eq!(
            trace.lines(),
            &["Prepare Tea".to_string(), "Cook Tea".to_string(), "Eat Tea".to_string()]
        );
    }

    #[test]
    fn test_skeleton_works_through_trait_objects() {
        let meals: Vec<Box<dyn Meal>> = vec![Box::new(MakePizza), Box::new(Sandwich)];
        let mut trace = Trace::new();
        for meal in &meals {
            meal.go(&mut trace);
        }
        assert_eq!(trace.len(), 5);
        assert_eq!(trace.lines()[3], "slice");
        assert_eq!(trace.lines()[4], "bite");
    }

    #[test]
    fn test_demo_trace() {
        let mut trace = Trace::new();
        TemplateMethodDemo.run(&mut trace).unwrap();

        let lines = trace.lines();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Prepare Pizza");
        assert_eq!(lines[3], "+++++++++++++++++++++++++");
        assert_eq!(lines[6], "Eat Tea");
    }
}
