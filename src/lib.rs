pub mod config;
pub mod core;
pub mod domain;
pub mod patterns;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::GalleryConfig;
pub use core::{catalog::Catalog, gallery::Gallery, report::OutputFormat};
pub use domain::model::{Category, Pattern, Trace};
pub use domain::ports::Demo;
pub use utils::error::{PatternError, Result};
