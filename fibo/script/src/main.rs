use anyhow::{Context, Result};
use fibo_program::{exit_status, fib, N};
use serde::Serialize;
use std::env::VarError;
use std::str::FromStr;
use std::time::Instant;
use tracing_subscriber::filter::EnvFilter;

#[derive(Serialize)]
struct Stats {
    program: &'static str,
    n: u32,
    res: i32,
    exit_status: u8,
    setup_secs: f32,
    exec_secs: f32,
}

fn env_or<T: FromStr>(var: &str, def: T) -> Result<T>
where
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(var) {
        Ok(s) => s
            .parse::<T>()
            .with_context(|| format!("Could not parse {var}")),
        Err(VarError::NotPresent) => Ok(def),
        Err(err) => Err(anyhow::Error::new(err).context(format!("Could not parse {var}"))),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // setup
    let it = Instant::now();
    let n = env_or("FIB_ARG", N)?;
    tracing::debug!(n, "iteration count resolved");
    let setup_secs = it.elapsed().as_secs_f32();

    // execution
    let it = Instant::now();
    let res = fib(n);
    let exec_secs = it.elapsed().as_secs_f32();

    eprintln!("fib({n}) = {res}");

    let stats = Stats {
        program: "fibo-native",
        n,
        res,
        exit_status: exit_status(res),
        setup_secs,
        exec_secs,
    };

    println!("{}", serde_json::to_string(&stats)?);
    Ok(())
}
