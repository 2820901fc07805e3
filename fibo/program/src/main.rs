use std::process::ExitCode;

use fibo_program::{exit_status, fib, N};
use tracing_subscriber::filter::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let res = fib(N);
    let status = exit_status(res);
    tracing::debug!(n = N, res, status, "fib computed");

    ExitCode::from(status)
}
