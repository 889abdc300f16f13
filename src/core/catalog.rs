use crate::core::{Category, Demo, Pattern};
use crate::patterns::behavioral::{
    command::CommandDemo, observer::ObserverDemo, strategy::StrategyDemo,
    template_method::TemplateMethodDemo,
};
use crate::patterns::creational::{
    abstract_factory::AbstractFactoryDemo, factory_method::FactoryMethodDemo,
    singleton::SingletonDemo,
};
use crate::patterns::structural::{
    adapter::AdapterDemo, bridge::BridgeDemo, composite::CompositeDemo, decorator::DecoratorDemo,
};
use crate::utils::error::{PatternError, Result};

/// Registry of demos, at most one per pattern, kept in registration order.
#[derive(Default)]
pub struct Catalog {
    demos: Vec<Box<dyn Demo>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All eleven demos: behavioral, then creational, then structural.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register(Box::new(CommandDemo));
        catalog.register(Box::new(ObserverDemo));
        catalog.register(Box::new(StrategyDemo));
        catalog.register(Box::new(TemplateMethodDemo));
        catalog.register(Box::new(AbstractFactoryDemo));
        catalog.register(Box::new(FactoryMethodDemo));
        catalog.register(Box::new(SingletonDemo::new()));
        catalog.register(Box::new(AdapterDemo));
        catalog.register(Box::new(BridgeDemo));
        catalog.register(Box::new(CompositeDemo));
        catalog.register(Box::new(DecoratorDemo));
        catalog
    }

    /// Adds a demo, replacing any demo already registered for its pattern.
    pub fn register(&mut self, demo: Box<dyn Demo>) {
        let pattern = demo.pattern();
        match self.demos.iter().position(|d| d.pattern() == pattern) {
            Some(index) => {
                tracing::debug!(pattern = pattern.slug(), "replacing registered demo");
                self.demos[index] = demo;
            }
            None => self.demos.push(demo),
        }
    }

    pub fn find(&self, pattern: Pattern) -> Option<&dyn Demo> {
        self.demos
            .iter()
            .find(|d| d.pattern() == pattern)
            .map(|d| d.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Demo> {
        self.demos.iter().map(|d| d.as_ref())
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &dyn Demo> {
        self.iter()
            .filter(move |d| d.pattern().category() == category)
    }

    pub fn len(&self) -> usize {
        self.demos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }

    /// Resolves pattern names to demos. An empty selection means every demo.
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn select(&self, names: &[String]) -> Result<Vec<&dyn Demo>> {
        if names.is_empty() {
            return Ok(self.iter().collect());
        }

        let mut selected: Vec<&dyn Demo> = Vec::with_capacity(names.len());
        for name in names {
            let pattern: Pattern = name.parse()?;
            let demo = self
                .find(pattern)
                .ok_or_else(|| PatternError::UnknownPattern { name: name.clone() })?;
            if !selected.iter().any(|d| d.pattern() == pattern) {
                selected.push(demo);
            }
        }
        Ok(selected)
    }
}
