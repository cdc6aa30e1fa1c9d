//! Progress reporting for long archive parses
//!
//! Purely observational: reporters never influence what gets parsed.

/// Receives progress updates as storms are parsed
pub trait ProgressReporter {
    /// Called after each storm with the number of storms done so far
    fn advance(&mut self, done: usize, total: usize);

    /// Called once when every storm has been parsed
    fn finish(&mut self, _total: usize) {}
}

/// Reporter that ignores all updates
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn advance(&mut self, _done: usize, _total: usize) {}
}

/// Reporter that logs every tenth of the way through
#[derive(Debug, Clone)]
pub struct LogProgress {
    label: String,
    last_decile: usize,
}

impl LogProgress {
    pub fn new(label: impl Into<String>) -> Self {
        LogProgress {
            label: label.into(),
            last_decile: 0,
        }
    }
}

impl ProgressReporter for LogProgress {
    fn advance(&mut self, done: usize, total: usize) {
        if total == 0 {
            return;
        }
        let decile = done * 10 / total;
        if decile > self.last_decile {
            self.last_decile = decile;
            log::info!(
                "{}: {}/{} storms ({}%)",
                self.label,
                done,
                total,
                decile * 10
            );
        }
    }

    fn finish(&mut self, total: usize) {
        log::info!("{}: done ({} storms)", self.label, total);
    }
}
