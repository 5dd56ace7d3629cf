use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::classify::is_continuation;
use crate::error::{FilterError, Result};
use crate::filter::CompiledFilter;
use crate::parser::LogParser;
use tflog_types::LogEntry;

/// Counters collected over one filtering run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub lines_read: u64,
    pub entries_parsed: u64,
    pub parse_errors: u64,
    pub timestamp_errors: u64,
    /// Continuation lines seen before any entry
    pub orphaned_lines: u64,
    pub emitted: u64,
}

/// Single-pass driver: stitches continuation lines onto the current entry
/// and evaluates each entry once it is finalized.
pub struct LogPipeline<'a, W: Write> {
    filter: &'a CompiledFilter,
    out: W,
    current: Option<LogEntry>,
    stats: FilterStats,
}

impl<'a, W: Write> LogPipeline<'a, W> {
    pub fn new(filter: &'a CompiledFilter, out: W) -> Self {
        Self {
            filter,
            out,
            current: None,
            stats: FilterStats::default(),
        }
    }

    /// Feed one physical line (without its line terminator)
    pub fn push_line(&mut self, line: &str) -> Result<()> {
        self.stats.lines_read += 1;

        if is_continuation(line) {
            match self.current.as_mut() {
                Some(entry) => entry.append_continuation(line),
                None => self.stats.orphaned_lines += 1,
            }
            return Ok(());
        }

        match LogParser::parse(line) {
            Ok(entry) => {
                self.stats.entries_parsed += 1;
                if let Some(previous) = self.current.replace(entry) {
                    self.evaluate(previous)?;
                }
            }
            Err(err) => {
                self.stats.parse_errors += 1;
                warn!(line = self.stats.lines_read, "Error parsing log line: {}", err);
            }
        }
        Ok(())
    }

    /// Evaluate the last pending entry and return the run's counters
    pub fn finish(mut self) -> Result<FilterStats> {
        if let Some(last) = self.current.take() {
            self.evaluate(last)?;
        }
        self.out.flush().map_err(FilterError::Write)?;
        Ok(self.stats)
    }

    fn evaluate(&mut self, entry: LogEntry) -> Result<()> {
        match self.filter.matches(&entry) {
            Ok(true) => {
                writeln!(self.out, "{}", entry).map_err(FilterError::Write)?;
                self.stats.emitted += 1;
            }
            Ok(false) => {}
            Err(err) => {
                self.stats.timestamp_errors += 1;
                warn!("Error parsing log timestamp: {}", err);
            }
        }
        Ok(())
    }
}

/// Run the filter over a buffered reader, writing accepted entries to `out`
pub fn run<R: BufRead, W: Write>(filter: &CompiledFilter, reader: R, out: W) -> Result<FilterStats> {
    let mut pipeline = LogPipeline::new(filter, out);

    for chunk in reader.split(b'\n') {
        let mut bytes = chunk.map_err(FilterError::Read)?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        pipeline.push_line(&String::from_utf8_lossy(&bytes))?;
    }

    pipeline.finish()
}

/// Filter a log file and print matching entries to stdout.
///
/// All configuration is validated before the file is opened.
pub fn filter_logs(
    file_path: &str,
    min_level: &str,
    start_time: &str,
    end_time: &str,
    keyword: &str,
) -> Result<FilterStats> {
    if file_path.is_empty() {
        return Err(FilterError::MissingFilePath);
    }
    let filter = CompiledFilter::new(min_level, start_time, end_time, keyword)?;
    debug!(?filter, file = file_path, "starting log filter");

    let stdout = io::stdout();
    let stats = filter_file(&filter, Path::new(file_path), stdout.lock())?;

    debug!(
        lines = stats.lines_read,
        entries = stats.entries_parsed,
        emitted = stats.emitted,
        parse_errors = stats.parse_errors,
        timestamp_errors = stats.timestamp_errors,
        "log filter finished"
    );
    Ok(stats)
}

/// Open `path` and run the filter over it
pub fn filter_file<W: Write>(filter: &CompiledFilter, path: &Path, out: W) -> Result<FilterStats> {
    let file = File::open(path).map_err(|source| FilterError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    run(filter, BufReader::new(file), io::BufWriter::new(out))
}
