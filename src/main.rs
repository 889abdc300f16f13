use anyhow::Context;
use clap::Parser;
use pattern_gallery::utils::error::{ErrorSeverity, PatternError};
use pattern_gallery::utils::{logger, validation::Validate};
use pattern_gallery::{core::report, Catalog, CliConfig, Gallery};
use std::io::Write;

fn exit_code(e: &PatternError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report_failure(e: &PatternError) {
    tracing::error!(
        "Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let catalog = Catalog::standard();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        report::render_listing(&catalog, &mut out).context("failed to write pattern listing")?;
        return Ok(());
    }

    let config = match cli.load_config().and_then(|c| c.validate().map(|()| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    let format = config
        .output_format()
        .context("output format passed validation but did not parse")?;

    let gallery = Gallery::new(catalog).with_fail_fast(config.run.fail_fast);
    let summary = match gallery.run(&config.run.patterns) {
        Ok(summary) => summary,
        Err(e) => {
            report_failure(&e);
            std::process::exit(exit_code(&e));
        }
    };

    report::render(&summary, format, config.output.banners, &mut out)
        .context("failed to write demo output")?;
    out.flush().context("failed to flush stdout")?;

    if let Some(e) = summary.into_failure() {
        report_failure(&e);
        let code = exit_code(&e);
        if code > 0 {
            std::process::exit(code);
        }
    } else {
        tracing::info!("All demos completed");
    }

    Ok(())
}
