//! Abstract Factory: one factory per product family, one creation method per product.

use crate::domain::model::{Pattern, Trace};
use crate::domain::ports::Demo;
use crate::utils::error::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    X,
    Y,
    Z,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::X => "X",
            ComponentKind::Y => "Y",
            ComponentKind::Z => "Z",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    origin: &'static str,
    component: ComponentKind,
}

impl Product {
    pub fn origin(&self) -> &str {
        self.origin
    }

    pub fn start_component(&self) -> ComponentKind {
        self.component
    }
}

pub trait AbstractFactory {
    /// The family every product of this factory belongs to.
    fn origin(&self) -> &'static str;

    fn get_x(&self) -> Product;
    fn get_y(&self) -> Product;
    fn get_z(&self) -> Product;

    fn create(&self, kind: ComponentKind) -> Product {
        match kind {
            ComponentKind::X => self.get_x(),
            ComponentKind::Y => self.get_y(),
            ComponentKind::Z => self.get_z(),
        }
    }
}

pub struct AtmaFactory;

impl AbstractFactory for AtmaFactory {
    fn origin(&self) -> &'static str {
        "Atma"
    }

    fn get_x(&self) -> Product {
        Product { origin: self.origin(), component: ComponentKind::X }
    }

    fn get_y(&self) -> Product {
        Product { origin: self.origin(), component: ComponentKind::Y }
    }

    fn get_z(&self) -> Product {
        Product { origin: self.origin(), component: ComponentKind::Z }
    }
}

pub struct UltimaFactory;

impl AbstractFactory for UltimaFactory {
    fn origin(&self) -> &'static str {
        "Ultima"
    }

    fn get_x(&self) -> Product {
        Product { origin: self.origin(), component: ComponentKind::X }
    }

    fn get_y(&self) -> Product {
        Product { origin: self.origin(), component: ComponentKind::Y }
    }

    fn get_z(&self) -> Product {
        Product { origin: self.origin(), component: ComponentKind::Z }
    }
}

pub struct AbstractFactoryDemo;

impl Demo for AbstractFactoryDemo {
    fn pattern(&self) -> Pattern {
        Pattern::AbstractFactory
    }

    fn run(&self, trace: &mut Trace) -> Result<()> {
        let factories: [(&str, &dyn AbstractFactory); 2] =
            [("Product 1", &AtmaFactory), ("Product 2", &UltimaFactory)];

        for (label, factory) in factories {
            let products = [factory.get_x(), factory.get_y(), factory.get_z()];
            trace.line(format!("--- {} ---", label));
            for product in &products {
                // Two spaces before "from" are part of the expected output.
                trace.line(format!(
                    "Start component {}  from origin {}",
                    product.start_component(),
                    product.origin()
                ));
            }
        }
        Ok(())
    }
}
