use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

const DEFAULT_FILTER: &str = "warn,captioner=info,captioner_core=info";

/// Logs go to stderr so they never interleave with the session output on stdout.
pub fn init_logger(verbose: bool) {
    let env = Env::default().filter_or("RUST_LOG", DEFAULT_FILTER);
    let mut builder = Builder::from_env(env);

    if verbose {
        builder
            .filter_module("captioner", LevelFilter::Debug)
            .filter_module("captioner_core", LevelFilter::Debug);
    }

    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();
}
