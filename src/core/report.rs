use crate::core::catalog::Catalog;
use crate::core::gallery::RunSummary;
use crate::utils::error::{PatternError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 2] = ["text", "json"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(PatternError::InvalidConfigValue {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: format!("Valid formats: {}", OutputFormat::NAMES.join(", ")),
            }),
        }
    }
}

/// Plain traces, one line each. Banners only appear when more than one demo
/// was run.
pub fn render_text(summary: &RunSummary, banners: bool, out: &mut dyn Write) -> Result<()> {
    let banners = banners && summary.reports.len() > 1;

    for (index, report) in summary.reports.iter().enumerate() {
        if banners {
            if index > 0 {
                writeln!(out)?;
            }
            writeln!(out, "== {} ({}) ==", report.name, report.category)?;
        }
        for line in &report.lines {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

pub fn render_json(summary: &RunSummary, out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &summary.reports)?;
    writeln!(out)?;
    Ok(())
}

pub fn render(
    summary: &RunSummary,
    format: OutputFormat,
    banners: bool,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(summary, banners, out),
        OutputFormat::Json => render_json(summary, out),
    }
}

pub fn render_listing(catalog: &Catalog, out: &mut dyn Write) -> Result<()> {
    for demo in catalog.iter() {
        let pattern = demo.pattern();
        writeln!(
            out,
            "{:<18}{:<12}{}",
            pattern.name(),
            pattern.category().as_str(),
            pattern.summary()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gallery::{DemoReport, Gallery};
    use crate::core::Pattern;

    fn report(pattern: Pattern, lines: &[&str]) -> DemoReport {
        DemoReport {
            pattern,
            name: pattern.name().to_string(),
            category: pattern.category(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
            error: None,
        }
    }

    fn render_to_string(summary: &RunSummary, format: OutputFormat, banners: bool) -> String {
        let mut buffer = Vec::new();
        render(summary, format, banners, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" Text ".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(PatternError::InvalidConfigValue { .. })
        ));
    }

    #[test]
    fn test_text_with_banners() {
        let summary = RunSummary {
            reports: vec![
                report(Pattern::Bridge, &["Operation A", "Operation B"]),
                report(Pattern::Strategy, &["Strategy Example 0"]),
            ],
            ..RunSummary::default()
        };

        let text = render_to_string(&summary, OutputFormat::Text, true);
        assert_eq!(
            text,
            "== Bridge (structural) ==\nOperation A\nOperation B\n\n\
             == Strategy (behavioral) ==\nStrategy Example 0\n"
        );
    }

    #[test]
    fn test_text_single_demo_has_no_banner() {
        let summary = RunSummary {
            reports: vec![report(Pattern::Bridge, &["Operation A", "Operation B"])],
            ..RunSummary::default()
        };

        let text = render_to_string(&summary, OutputFormat::Text, true);
        assert_eq!(text, "Operation A\nOperation B\n");
    }

    #[test]
    fn test_text_without_banners_is_plain_concatenation() {
        let summary = Gallery::new(Catalog::standard())
            .run(&["bridge".to_string(), "adapter".to_string()])
            .unwrap();

        let text = render_to_string(&summary, OutputFormat::Text, false);
        assert_eq!(text, "Operation A\nOperation B\nCoffee time!\n");
    }

    #[test]
    fn test_json_output() {
        let mut failed = report(Pattern::Singleton, &["Trying to create another instance:"]);
        failed.error = Some("boom".to_string());
        let summary = RunSummary {
            reports: vec![report(Pattern::TemplateMethod, &["x"]), failed],
            ..RunSummary::default()
        };

        let json = render_to_string(&summary, OutputFormat::Json, true);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["pattern"], "template-method");
        assert_eq!(value[0]["category"], "behavioral");
        assert!(value[0].get("error").is_none());
        assert_eq!(value[1]["error"], "boom");
        assert_eq!(value[1]["lines"][0], "Trying to create another instance:");
    }

    #[test]
    fn test_listing_has_one_row_per_pattern() {
        let mut buffer = Vec::new();
        render_listing(&Catalog::standard(), &mut buffer).unwrap();
        let listing = String::from_utf8(buffer).unwrap();

        assert_eq!(listing.lines().count(), Pattern::ALL.len());
        let first = listing.lines().next().unwrap();
        assert!(first.starts_with("Command"));
        assert!(first.contains("behavioral"));
        assert!(first.ends_with(Pattern::Command.summary()));
    }
}
