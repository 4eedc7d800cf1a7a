use tracing::Level;

/// Map a `-v` count to the maximum level emitted.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install a stderr fmt subscriber. Later calls are no-ops.
pub fn init_logging(verbose: u8) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level_for_verbosity(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

#[cfg(test)]
#[path = "../tests/unit/logging.rs"]
mod tests;
