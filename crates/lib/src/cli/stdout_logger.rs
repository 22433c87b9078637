use std::io::Write;

use log::Log;

/// Minimal logger writing records straight to stdout, keeping
/// diagnostics on the same stream as the answers.
pub(crate) struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        let _ = writeln!(
            out,
            "{level}: {args} ({file}:{line})",
            level = record.level(),
            args = record.args(),
            file = record.file().unwrap_or("?"),
            line = record.line().unwrap_or_default()
        );
    }

    fn flush(&self) {}
}
