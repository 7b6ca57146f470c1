//! Logger initialization.

use log::LevelFilter;

/// Install the global logger at `level`, still honoring `RUST_LOG` overrides.
pub(crate) fn init(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
