use log::LevelFilter;

/// Sets up `env_logger` at `level`. `RUST_LOG` is read first, so per-module
/// directives such as `volmarch::integrator=trace` still apply on top.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp_millis()
        .init();
}
