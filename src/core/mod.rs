pub mod catalog;
pub mod gallery;
pub mod report;

pub use crate::domain::model::{Category, Pattern, Trace};
pub use crate::domain::ports::Demo;
pub use crate::utils::error::Result;
