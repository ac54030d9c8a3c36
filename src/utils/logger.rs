use std::io;

use tracing_core::Level;
use tracing_subscriber::fmt;

/// possible log levels
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Initializes a global tracing subscriber for all logs produced by
/// ranger and the libraries it consumes. By default, no logs are
/// printed.
pub fn init(level: Option<Level>) {
    if let Some(level) = level {
        let format = fmt::format().without_time().compact();
        fmt()
            .with_max_level(level)
            .event_format(format)
            .with_writer(io::stderr)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use tracing_core::metadata::ParseLevelError;

    use super::{Level, LEVELS};

    #[test]
    fn it_parses_all_possible_levels() -> Result<(), ParseLevelError> {
        for level in &LEVELS {
            Level::from_str(level)?;
        }
        Ok(())
    }
}
