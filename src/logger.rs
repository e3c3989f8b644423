// src/logger.rs
// =============================================================================
// Sets up env_logger as the backend of the `log` facade.
//
// RUST_LOG always wins. Without it, the number of -v flags picks the level
// for this crate while dependencies stay at `warn`:
//   (none) warn, -v info, -vv debug, -vvv trace
// =============================================================================

use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbosity: u8) {
    let env = Env::default().filter_or("RUST_LOG", "warn");
    let mut builder = Builder::from_env(env);

    if std::env::var("RUST_LOG").is_err() {
        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("asset_guardian", level_for(verbosity));
    }

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}",
            buf.timestamp_seconds(),
            record.level(),
            record.args()
        )
    });

    // try_init: a second call (tests) must not panic
    let _ = builder.try_init();
}
