use crate::Chronometer;
use std::fmt::Display;

/// Writes to standard error so standard output stays machine-readable.
#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
    enabled: bool,
}

impl Logger {
    pub fn new(enabled: bool) -> Self {
        Self {
            chronometer: Chronometer::new(),
            enabled,
        }
    }

    pub fn log(&self, value: impl Display) {
        if self.enabled {
            eprintln!("{} ({} elapsed)", value, self.chronometer.elapsed());
        }
    }
}

/// Logs only every `interval`-th call.
#[derive(Clone, Copy)]
pub struct PartialLogger<'a> {
    index: usize,
    interval: usize,
    logger: &'a Logger,
}

impl<'a> PartialLogger<'a> {
    pub fn new(interval: usize, logger: &'a Logger) -> Self {
        Self {
            index: 0,
            interval: interval.max(1),
            logger,
        }
    }

    /// Returns whether the call was logged.
    pub fn log<D: Display>(&mut self, f: impl FnOnce(usize) -> D) -> bool {
        let logged = self.index % self.interval == 0;
        if logged {
            self.logger.log(f(self.index));
        }
        self.index += 1;
        logged
    }

    pub fn count(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::{Logger, PartialLogger};

    #[test]
    fn partial_logger() {
        let logger = Logger::new(false);
        let mut partial = PartialLogger::new(3, &logger);
        let logged: Vec<bool> = (0..7).map(|_| partial.log(|index| index)).collect();
        assert_eq!(logged, vec![true, false, false, true, false, false, true]);
        assert_eq!(partial.count(), 7);
    }

    #[test]
    fn zero_interval_logs_everything() {
        let logger = Logger::new(false);
        let mut partial = PartialLogger::new(0, &logger);
        assert!(partial.log(|index| index));
        assert!(partial.log(|index| index));
    }
}
