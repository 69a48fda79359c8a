//! The `search_bench` binary: times naive, Boyer-Moore and Rabin-Karp search.
use std::io::Write;

use algobench::{BenchConfig, Cli, run_search_suite};
use clap::Parser;
use env_logger::Env;
use log::error;

/// Environment variable holding the log filter, e.g. `ALGOBENCH_LOG=debug`.
const LOG_ENV: &str = "ALGOBENCH_LOG";

fn main() {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, "warn"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}: {:<5}: {}",
                record.module_path().unwrap_or("???"),
                record.level(),
                record.args()
            )
        })
        .init();

    let result = Cli::parse()
        .into_config(BenchConfig::search())
        .and_then(|config| run_search_suite(&config, &mut std::io::stdout().lock()));

    if let Err(error) = result {
        error!("{error}");
        std::process::exit(1)
    }
}
