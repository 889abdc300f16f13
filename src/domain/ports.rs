use crate::domain::model::{Pattern, Trace};
use crate::utils::error::Result;

/// A runnable pattern demonstration.
///
/// `run` appends to the trace as it goes, so a demo that fails part-way
/// still leaves the lines it produced before the error.
pub trait Demo: Send + Sync {
    fn pattern(&self) -> Pattern;
    fn run(&self, trace: &mut Trace) -> Result<()>;
}
