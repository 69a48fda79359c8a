//! The `sort_bench` binary: times bubble, quick and counting sort.
use std::io::Write;

use algobench::{BenchConfig, Cli, run_sorting_suite};
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
        .into_config(BenchConfig::sorting())
        .and_then(|config| run_sorting_suite(&config, &mut std::io::stdout().lock()));

    if let Err(error) = result {
        error!("{error}");
        std::process::exit(1)
    }
}
