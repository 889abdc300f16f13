use crate::config::toml_config::GalleryConfig;
use crate::core::report::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pattern-gallery")]
#[command(about = "Runs small demonstrations of classic design patterns")]
pub struct CliConfig {
    /// Patterns to run, e.g. `command template-method`. Runs all when empty.
    pub patterns: Vec<String>,

    /// TOML file with [run] and [output] sections
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Run every selected demo even after one fails
    #[arg(long)]
    pub keep_going: bool,

    #[arg(long)]
    pub no_banners: bool,

    /// List the available patterns and exit
    #[arg(long)]
    pub list: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// Flags given on the command line win over the file.
    pub fn apply_to(&self, config: &mut GalleryConfig) {
        if !self.patterns.is_empty() {
            config.run.patterns = self.patterns.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format.as_str().to_string();
        }
        if self.keep_going {
            config.run.fail_fast = false;
        }
        if self.no_banners {
            config.output.banners = false;
        }
    }

    pub fn load_config(&self) -> crate::Result<GalleryConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path.display());
                GalleryConfig::from_file(path)?
            }
            None => GalleryConfig::default(),
        };
        self.apply_to(&mut config);
        Ok(config)
    }
}
