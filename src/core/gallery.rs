use crate::core::catalog::Catalog;
use crate::core::{Category, Demo, Pattern, Trace};
use crate::utils::error::{PatternError, Result};
use serde::Serialize;
use std::time::Instant;

/// Outcome of one demo: the lines it produced and, if it failed, why.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub pattern: Pattern,
    pub name: String,
    pub category: Category,
    pub lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DemoReport {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<DemoReport>,
    /// Demos selected but never started because an earlier one failed.
    pub skipped: Vec<Pattern>,
    pub(crate) failure: Option<PatternError>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.reports.iter().all(DemoReport::succeeded)
    }

    /// The first error any demo returned.
    pub fn failure(&self) -> Option<&PatternError> {
        self.failure.as_ref()
    }

    pub fn into_failure(self) -> Option<PatternError> {
        self.failure
    }
}

pub struct Gallery {
    catalog: Catalog,
    fail_fast: bool,
}

impl Gallery {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            fail_fast: true,
        }
    }

    /// With fail-fast on (the default) the first failing demo ends the run.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn run_all(&self) -> RunSummary {
        let demos: Vec<&dyn Demo> = self.catalog.iter().collect();
        self.run_demos(&demos)
    }

    /// Runs the named demos in the order given. Unknown names fail before
    /// anything runs.
    pub fn run(&self, names: &[String]) -> Result<RunSummary> {
        let demos = self.catalog.select(names)?;
        Ok(self.run_demos(&demos))
    }

    fn run_demos(&self, demos: &[&dyn Demo]) -> RunSummary {
        tracing::info!("Running {} demo(s)", demos.len());
        let mut summary = RunSummary::default();

        for (index, demo) in demos.iter().enumerate() {
            let pattern = demo.pattern();
            tracing::debug!(pattern = pattern.slug(), "starting demo");

            let started = Instant::now();
            let mut trace = Trace::new();
            let result = demo.run(&mut trace);
            let elapsed = started.elapsed();

            let error = match result {
                Ok(()) => {
                    tracing::info!(
                        pattern = pattern.slug(),
                        lines = trace.len(),
                        elapsed_us = elapsed.as_micros() as u64,
                        "demo finished"
                    );
                    None
                }
                Err(e) => {
                    tracing::warn!(
                        pattern = pattern.slug(),
                        lines = trace.len(),
                        "demo failed: {} (Category: {:?})",
                        e,
                        e.category()
                    );
                    Some(e)
                }
            };

            summary.reports.push(DemoReport {
                pattern,
                name: pattern.name().to_string(),
                category: pattern.category(),
                lines: trace.into_lines(),
                error: error.as_ref().map(|e| e.to_string()),
            });

            if let Some(e) = error {
                if summary.failure.is_none() {
                    summary.failure = Some(e);
                }
                if self.fail_fast {
                    summary.skipped = demos[index + 1..].iter().map(|d| d.pattern()).collect();
                    if !summary.skipped.is_empty() {
                        tracing::warn!("Stopping early, {} demo(s) skipped", summary.skipped.len());
                    }
                    break;
                }
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing(Pattern);

    impl Demo for Failing {
        fn pattern(&self) -> Pattern {
            self.0
        }

        fn run(&self, trace: &mut Trace) -> Result<()> {
            trace.line("before failure");
            Err(PatternError::EmptyHistory)
        }
    }

    struct Echo(Pattern);

    impl Demo for Echo {
        fn pattern(&self) -> Pattern {
            self.0
        }

        fn run(&self, trace: &mut Trace) -> Result<()> {
            trace.line(self.0.name());
            Ok(())
        }
    }

    fn catalog_with_failure_in_middle() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.register(Box::new(Echo(Pattern::Command)));
        catalog.register(Box::new(Failing(Pattern::Observer)));
        catalog.register(Box::new(Echo(Pattern::Bridge)));
        catalog
    }

    #[test]
    fn test_run_all_success() {
        let mut catalog = Catalog::new();
        catalog.register(Box::new(Echo(Pattern::Command)));
        catalog.register(Box::new(Echo(Pattern::Adapter)));

        let summary = Gallery::new(catalog).run_all();

        assert!(summary.is_success());
        assert!(summary.failure().is_none());
        assert_eq!(summary.reports.len(), 2);
        assert_eq!(summary.reports[1].lines, vec!["Adapter".to_string()]);
        assert_eq!(summary.reports[1].category, Category::Structural);
    }

    #[test]
    fn test_fail_fast_stops_and_keeps_partial_trace() {
        let summary = Gallery::new(catalog_with_failure_in_middle()).run_all();

        assert!(!summary.is_success());
        assert_eq!(summary.reports.len(), 2);
        assert_eq!(summary.reports[1].lines, vec!["before failure".to_string()]);
        assert_eq!(summary.reports[1].error.as_deref(), Some("Command history is empty"));
        assert_eq!(summary.skipped, vec![Pattern::Bridge]);
        assert!(matches!(summary.into_failure(), Some(PatternError::EmptyHistory)));
    }

    #[test]
    fn test_keep_going_runs_everything() {
        let summary = Gallery::new(catalog_with_failure_in_middle())
            .with_fail_fast(false)
            .run_all();

        assert_eq!(summary.reports.len(), 3);
        assert!(summary.skipped.is_empty());
        assert!(summary.reports[2].succeeded());
        assert!(summary.failure().is_some());
    }

    #[test]
    fn test_run_selection_unknown_name_runs_nothing() {
        let gallery = Gallery::new(Catalog::standard());
        let result = gallery.run(&["bogus".to_string()]);
        assert!(matches!(result, Err(PatternError::UnknownPattern { .. })));
    }

    #[test]
    fn test_run_selection_in_given_order() {
        let gallery = Gallery::new(Catalog::standard());
        let summary = gallery
            .run(&["bridge".to_string(), "strategy".to_string()])
            .unwrap();

        let patterns: Vec<Pattern> = summary.reports.iter().map(|r| r.pattern).collect();
        assert_eq!(patterns, vec![Pattern::Bridge, Pattern::Strategy]);
        assert!(summary.is_success());
    }
}
