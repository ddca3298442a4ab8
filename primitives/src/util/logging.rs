use slog::{o, Drain, LevelFilter, Logger};

pub use slog_async::Async;
pub use slog_term::TermDecorator;

use crate::config::Environment;

/// Creates the root [`Logger`] of a service.
///
/// Records are written asynchronously to the terminal in compact format
/// and every record carries the `service` name.
pub fn new_logger(service: &str, environment: Environment) -> Logger {
    let decorator = TermDecorator::new().build();
    let drain = slog_term::CompactFormat::new(decorator).build().fuse();
    let drain = LevelFilter::new(drain, environment.log_level()).fuse();
    let drain = Async::new(drain).build().fuse();

    Logger::root(drain, o!("service" => service.to_owned()))
}
