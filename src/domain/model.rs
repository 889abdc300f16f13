use crate::utils::error::PatternError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Behavioral,
    Creational,
    Structural,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Behavioral => "behavioral",
            Category::Creational => "creational",
            Category::Structural => "structural",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    Command,
    Observer,
    Strategy,
    TemplateMethod,
    AbstractFactory,
    FactoryMethod,
    Singleton,
    Adapter,
    Bridge,
    Composite,
    Decorator,
}

impl Pattern {
    pub const ALL: [Pattern; 11] = [
        Pattern::Command,
        Pattern::Observer,
        Pattern::Strategy,
        Pattern::TemplateMethod,
        Pattern::AbstractFactory,
        Pattern::FactoryMethod,
        Pattern::Singleton,
        Pattern::Adapter,
        Pattern::Bridge,
        Pattern::Composite,
        Pattern::Decorator,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Command => "Command",
            Pattern::Observer => "Observer",
            Pattern::Strategy => "Strategy",
            Pattern::TemplateMethod => "Template Method",
            Pattern::AbstractFactory => "Abstract Factory",
            Pattern::FactoryMethod => "Factory Method",
            Pattern::Singleton => "Singleton",
            Pattern::Adapter => "Adapter",
            Pattern::Bridge => "Bridge",
            Pattern::Composite => "Composite",
            Pattern::Decorator => "Decorator",
        }
    }

    /// Kebab-case identifier accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            Pattern::Command => "command",
            Pattern::Observer => "observer",
            Pattern::Strategy => "strategy",
            Pattern::TemplateMethod => "template-method",
            Pattern::AbstractFactory => "abstract-factory",
            Pattern::FactoryMethod => "factory-method",
            Pattern::Singleton => "singleton",
            Pattern::Adapter => "adapter",
            Pattern::Bridge => "bridge",
            Pattern::Composite => "composite",
            Pattern::Decorator => "decorator",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Pattern::Command | Pattern::Observer | Pattern::Strategy | Pattern::TemplateMethod => {
                Category::Behavioral
            }
            Pattern::AbstractFactory | Pattern::FactoryMethod | Pattern::Singleton => {
                Category::Creational
            }
            Pattern::Adapter | Pattern::Bridge | Pattern::Composite | Pattern::Decorator => {
                Category::Structural
            }
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Pattern::Command => "Encapsulate a request as an object so it can be queued and replayed",
            Pattern::Observer => "Notify every dependent automatically when a subject changes state",
            Pattern::Strategy => "Swap the algorithm a context runs without subclassing it",
            Pattern::TemplateMethod => "Fix the skeleton of an algorithm and let variants fill in the steps",
            Pattern::AbstractFactory => "Create families of related products without naming their types",
            Pattern::FactoryMethod => "Defer the choice of which product to build to a tag lookup",
            Pattern::Singleton => "Guarantee a single lazily-created instance with a global access point",
            Pattern::Adapter => "Convert one interface into the interface a client expects",
            Pattern::Bridge => "Decouple an abstraction from the implementation it delegates to",
            Pattern::Composite => "Treat leaves and trees of components through one interface",
            Pattern::Decorator => "Attach extra responsibilities to an object by wrapping it",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    /// Accepts `template-method`, `template_method`, `Template Method` and `TemplateMethod`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        Pattern::ALL
            .iter()
            .copied()
            .find(|p| p.slug().replace('-', "") == key)
            .ok_or_else(|| PatternError::UnknownPattern {
                name: s.to_string(),
            })
    }
}

/// Ordered lines of text a demo produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    lines: Vec<String>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
