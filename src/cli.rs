use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use crate::config::FileConfig;
use tflog_filter::{FilterFn, FilterStats};

const DEFAULT_LEVEL: &str = "INFO";

/// tflog - filter Terraform-style logs by level, time range and keyword
#[derive(Parser, Debug)]
#[command(name = "tflog")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the log file to be processed
    #[arg(long, value_name = "PATH")]
    pub file: Option<String>,

    /// Minimum log level to display (TRACE, DEBUG, INFO, WARN, ERROR) [default: INFO]
    #[arg(long)]
    pub level: Option<String>,

    /// Only show entries at or after this time (e.g. 2024-10-03T00:43:29.918-0400)
    #[arg(long, value_name = "TIMESTAMP")]
    pub start_time: Option<String>,

    /// Only show entries at or before this time
    #[arg(long, value_name = "TIMESTAMP")]
    pub end_time: Option<String>,

    /// Keyword to search for in log messages (case-sensitive)
    #[arg(long, value_name = "KEYWORD")]
    pub search: Option<String>,

    /// TOML file supplying defaults for the options above
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Fully resolved filter settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub file: String,
    pub level: String,
    pub start_time: String,
    pub end_time: String,
    pub search: String,
}

impl Args {
    /// Merge flags over config file values over built-in defaults
    pub fn resolve(self) -> Result<FilterOptions> {
        let file_config = match &self.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(self.merge(file_config))
    }

    fn merge(self, config: FileConfig) -> FilterOptions {
        FilterOptions {
            file: self.file.or(config.file).unwrap_or_default(),
            level: self
                .level
                .or(config.level)
                .unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
            start_time: self.start_time.or(config.start_time).unwrap_or_default(),
            end_time: self.end_time.or(config.end_time).unwrap_or_default(),
            search: self.search.or(config.search).unwrap_or_default(),
        }
    }
}

/// Validate the options and hand them to the injected filter
pub fn execute(options: &FilterOptions, filter_logs: FilterFn) -> Result<FilterStats> {
    if options.file.is_empty() {
        bail!("please provide a log file path using the --file flag");
    }

    filter_logs(
        &options.file,
        &options.level,
        &options.start_time,
        &options.end_time,
        &options.search,
    )
    .context("error filtering logs")
}
