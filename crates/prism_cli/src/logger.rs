use log::LevelFilter;

/// Initialize the logger at the given level. `RUST_LOG`, when set, takes
/// precedence.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
