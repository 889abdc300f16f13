//! Decorator: toppings wrap a coffee, each adding to its cost and ingredients.

use crate::domain::model::{Pattern, Trace};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

pub const TAX_RATE: f64 = 0.1;

pub trait Coffee {
    fn cost(&self) -> f64;
    fn ingredients(&self) -> String;

    fn tax(&self) -> f64 {
        TAX_RATE * self.cost()
    }
}

impl<C: Coffee + ?Sized> Coffee for Box<C> {
    fn cost(&self) -> f64 {
        (**self).cost()
    }

    fn ingredients(&self) -> String {
        (**self).ingredients()
    }

    fn tax(&self) -> f64 {
        (**self).tax()
    }
}

pub struct ConcreteCoffee;

impl Coffee for ConcreteCoffee {
    fn cost(&self) -> f64 {
        1.00
    }

    fn ingredients(&self) -> String {
        "coffee".to_string()
    }
}

pub struct Milk<C: Coffee> {
    inner: C,
}

impl<C: Coffee> Milk<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Coffee> Coffee for Milk<C> {
    fn cost(&self) -> f64 {
        self.inner.cost() + 0.25
    }

    fn ingredients(&self) -> String {
        self.inner.ingredients() + ", milk"
    }
}

pub struct Vanilla<C: Coffee> {
    inner: C,
}

impl<C: Coffee> Vanilla<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Coffee> Coffee for Vanilla<C> {
    fn cost(&self) -> f64 {
        self.inner.cost() + 0.75
    }

    fn ingredients(&self) -> String {
        self.inner.ingredients() + ", vanilla"
    }
}

/// Free of charge.
pub struct Sugar<C: Coffee> {
    inner: C,
}

impl<C: Coffee> Sugar<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Coffee> Coffee for Sugar<C> {
    fn cost(&self) -> f64 {
        self.inner.cost()
    }

    fn ingredients(&self) -> String {
        self.inner.ingredients() + ", sugar"
    }
}

/// Whole numbers keep one decimal place (`1.0`); everything else uses the
/// shortest round-trip form.
pub fn format_amount(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

fn describe(coffee: &dyn Coffee) -> String {
    format!(
        "Ingredients: {}; Cost: {}; sales tax = {}",
        coffee.ingredients(),
        format_amount(coffee.cost()),
        format_amount(coffee.tax())
    )
}

pub struct DecoratorDemo;

impl Demo for DecoratorDemo {
    fn pattern(&self) -> Pattern {
        Pattern::Decorator
    }

    fn run(&self, trace: &mut Trace) -> Result<()> {
        let mut coffee: Box<dyn Coffee> = Box::new(ConcreteCoffee);
        trace.line(describe(coffee.as_ref()));

        coffee = Box::new(Milk::new(coffee));
        trace.line(describe(coffee.as_ref()));

        coffee = Box::new(Vanilla::new(coffee));
        trace.line(describe(coffee.as_ref()));

        coffee = Box::new(Sugar::new(coffee));
        trace.line(describe(coffee.as_ref()));
        Ok(())
    }
}
