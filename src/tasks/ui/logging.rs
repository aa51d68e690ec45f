use crate::FailResult;

use log::{Level, LevelFilter};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Crates whose messages are shown at `Trace` level under `--verbose`.
const OUR_CRATES: &[&str] = &[
    "cellmetric_lattice",
    "cellmetric_config",
    "cellmetric_tasks",
];

/// Builder-style setup for logging
#[derive(Debug, Clone, Default)]
pub struct GlobalLogger {
    path: Option<PathBuf>,
    verbosity: Verbosity,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity { Default, Loud }

impl Default for Verbosity {
    fn default() -> Self { Verbosity::Default }
}

impl GlobalLogger {
    /// Also write messages (uncolored) to this file.
    pub fn path<P: AsRef<Path>>(&mut self, path: P) -> &mut Self
    { self.path = Some(path.as_ref().to_owned()); self }

    pub fn verbose(&mut self, verbose: bool) -> &mut Self {
        self.verbosity = match verbose {
            true => Verbosity::Loud,
            false => Verbosity::Default,
        };
        self
    }

    fn our_level(&self) -> LevelFilter {
        match self.verbosity {
            Verbosity::Default => LevelFilter::Info,
            Verbosity::Loud => LevelFilter::Trace,
        }
    }

    /// Install the logger.  This can only succeed once per process.
    pub fn apply(&self) -> FailResult<()> {
        let start = Instant::now();

        let mut fern = fern::Dispatch::new().level(LevelFilter::Info);
        for &target in OUR_CRATES {
            fern = fern.level_for(target, self.our_level());
        }

        fern = fern.chain({
            fern::Dispatch::new()
                .format(move |out, message, record| write_record(out, message, record, start, true))
                .chain(::std::io::stderr())
        });
        if let Some(path) = self.path.as_ref() {
            fern = fern.chain({
                fern::Dispatch::new()
                    .format(move |out, message, record| write_record(out, message, record, start, false))
                    .chain(fern::log_file(path)?)
            });
        }

        fern.apply()?;
        debug!("logging initialized (verbosity: {:?})", self.verbosity);
        Ok(())
    }
}

fn write_record(
    out: fern::FormatCallback<'_>,
    message: &fmt::Arguments<'_>,
    record: &log::Record<'_>,
    start: Instant,
    colorize: bool,
) {
    let t = start.elapsed();
    out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
        t.as_secs(),
        t.subsec_millis(),
        record.target(),
        ColorizedLevel { level: record.level(), colorize },
        message))
}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel {
    pub level: Level,
    pub colorize: bool,
}

impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.colorize {
            return write!(f, "{}", self.level);
        }
        let style = match self.level {
            Level::Error => ansi_term::Colour::Red.bold(),
            Level::Warn  => ansi_term::Colour::Red.normal(),
            Level::Info  => ansi_term::Colour::Cyan.bold(),
            Level::Debug => ansi_term::Colour::Yellow.dimmed(),
            Level::Trace => ansi_term::Colour::Cyan.normal(),
        };
        write!(f, "{}", style.paint(self.level.to_string()))
    }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn levels() {
        let mut logger = GlobalLogger::default();
        assert_eq!(logger.our_level(), LevelFilter::Info);
        logger.verbose(true).path("cellmetric.log");
        assert_eq!(logger.our_level(), LevelFilter::Trace);
        assert_eq!(logger.path, Some(PathBuf::from("cellmetric.log")));
    }

    #[test]
    fn plain_level() {
        let level = ColorizedLevel { level: Level::Warn, colorize: false };
        assert_eq!(level.to_string(), "WARN");
        let level = ColorizedLevel { level: Level::Warn, colorize: true };
        assert!(level.to_string().contains("WARN"));
    }
}
