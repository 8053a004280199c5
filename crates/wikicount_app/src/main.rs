mod config;
mod logging;
mod report;
mod runner;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use wikicount_logging::wc_info;

/// Count the words of Wikipedia articles and estimate a prize tier.
#[derive(Parser, Debug)]
#[command(name = "wikicount", version)]
struct Cli {
    /// RON config file; defaults to ./wikicount.ron when present.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Pause between articles, in milliseconds.
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Per-request timeout, in seconds.
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Also write logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Logging verbosity, -v (info) to -vvv (trace). Default shows warnings.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Article titles to count instead of the configured list.
    #[arg(value_name = "TITLE")]
    titles: Vec<String>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut config::AppConfig) {
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.request_timeout_secs = timeout_secs;
        }
        if !self.titles.is_empty() {
            config.articles = self.titles.clone();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(
        logging::LogDestination::from_log_file(cli.log_file.as_deref()),
        wikicount_logging::level_for_verbosity(cli.verbose),
    );

    let mut config = config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let tally = runner::run(&config)?;
    wc_info!(
        "Counted {} words across {} successful articles",
        tally.total_words,
        tally.successful_count
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;
    use crate::config::AppConfig;

    #[test]
    fn cli_overrides_replace_configured_values() {
        let cli = Cli::parse_from([
            "wikicount",
            "--delay-ms",
            "0",
            "--timeout-secs",
            "3",
            "-vv",
            "Expo 67",
            "ইডরেড",
        ]);
        assert_eq!(cli.verbose, 2);

        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.delay_ms, 0);
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.articles, vec!["Expo 67", "ইডরেড"]);
    }

    #[test]
    fn cli_without_titles_keeps_configured_list() {
        let cli = Cli::parse_from(["wikicount"]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, AppConfig::default());
    }
}
