//! Factory Method: products are built from a tag through an explicit registry
//! of constructors.

use crate::domain::model::{Pattern, Trace};
use crate::domain::ports::Demo;
use crate::utils::error::{PatternError, Result};
use std::collections::HashMap;

pub trait Component {
    fn start_component(&self) -> &str;
}

pub struct Component1;

impl Component for Component1 {
    fn start_component(&self) -> &str {
        "Atma"
    }
}

pub struct Component2;

impl Component for Component2 {
    fn start_component(&self) -> &str {
        "Ultima"
    }
}

pub struct Component3;

impl Component for Component3 {
    fn start_component(&self) -> &str {
        "Emerald"
    }
}

pub type Constructor = fn() -> Box<dyn Component>;

/// Uppercases the first character and lowercases the rest, so `component1`,
/// `COMPONENT1` and `Component1` all name the same product.
pub fn normalize_tag(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

pub struct ComponentFactory {
    registry: HashMap<String, Constructor>,
}

impl ComponentFactory {
    pub fn empty() -> Self {
        Self {
            registry: HashMap::new(),
        }
    }

    /// A factory that knows `Component1`, `Component2` and `Component3`.
    pub fn with_defaults() -> Self {
        let mut factory = Self::empty();
        factory.register("Component1", || Box::new(Component1));
        factory.register("Component2", || Box::new(Component2));
        factory.register("Component3", || Box::new(Component3));
        factory
    }

    /// Registers a constructor, replacing any previous one for the same tag.
    pub fn register(&mut self, tag: &str, constructor: Constructor) {
        self.registry.insert(normalize_tag(tag), constructor);
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.registry.contains_key(&normalize_tag(tag))
    }

    pub fn create_component(&self, tag: &str) -> Result<Box<dyn Component>> {
        let key = normalize_tag(tag);
        let constructor = self
            .registry
            .get(&key)
            .ok_or_else(|| PatternError::UnknownProduct {
                tag: tag.to_string(),
            })?;
        tracing::debug!(tag = %key, "constructing component");
        Ok(constructor())
    }
}

impl Default for ComponentFactory {
    fn default() -> Self {
        Self::with_defaults()
    }
}

pub struct FactoryMethodDemo;

impl Demo for FactoryMethodDemo {
    fn pattern(&self) -> Pattern {
        Pattern::FactoryMethod
    }

    fn run(&self, trace: &mut Trace) -> Result<()> {
        let factory = ComponentFactory::with_defaults();
        for tag in ["Component1", "Component2", "Component3"] {
            let component = factory.create_component(tag)?;
            trace.line(component.start_component());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Prototype;

    impl Component for Prototype {
        fn start_component(&self) -> &str {
            "Prototype"
        }
    }

    #[test]
    fn test_known_tags_map_to_labels() {
        let factory = ComponentFactory::with_defaults();
        let cases = [
            ("Component1", "Atma"),
            ("Component2", "Ultima"),
            ("Component3", "Emerald"),
        ];
        for (tag, label) in cases {
            assert_eq!(factory.create_component(tag).unwrap().start_component(), label);
        }
    }

    #[test]
    fn test_tag_lookup_is_case_insensitive() {
        let factory = ComponentFactory::with_defaults();
        assert_eq!(factory.create_component("component2").unwrap().start_component(), "Ultima");
        assert_eq!(factory.create_component("COMPONENT3").unwrap().start_component(), "Emerald");
    }

    #[test]
    fn test_unknown_tag_fails() {
        let factory = ComponentFactory::with_defaults();
        let err = factory.create_component("Component4").err().unwrap();
        assert!(matches!(err, PatternError::UnknownProduct { tag } if tag == "Component4"));
        assert!(factory.create_component("").is_err());
    }

    #[test]
    fn test_register_extends_registry() {
        let mut factory = ComponentFactory::with_defaults();
        assert!(!factory.is_registered("prototype"));

        factory.register("prototype", || Box::new(Prototype));

        assert!(factory.is_registered("Prototype"));
        assert_eq!(factory.create_component("PROTOTYPE").unwrap().start_component(), "Prototype");
    }

    #[test]
    fn test_empty_factory_knows_nothing() {
        let factory = ComponentFactory::empty();
        assert!(factory.create_component("Component1").is_err());
    }

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("cOMPONENT1"), "Component1");
        assert_eq!(normalize_tag(""), "");
    }

    #[test]
    fn test_demo_trace() {
        let mut trace = Trace::new();
        FactoryMethodDemo.run(&mut trace).unwrap();
        assert_eq!(
            trace.lines(),
            &["Atma".to_string(), "Ultima".to_string(), "Emerald".to_string()]
        );
    }
}
