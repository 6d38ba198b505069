//! Wrapped-call world-size program.
//!
//! cargo run --bin world_size
//! cargo mpirun -n 4 --features mpi-support --bin world_size

use std::process::ExitCode;

use mpwrap::config::Config;
use mpwrap::facade;
use mpwrap::report;

fn main() -> ExitCode {
    env_logger::init();

    let config = Config::from_env();
    let args: Vec<String> = std::env::args().collect();
    log::debug!("backend: {}", facade::backend_name());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match report::run(&facade::calls(), &args, &mut out, config.status_policy) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("world_size: {e}");
            ExitCode::FAILURE
        }
    }
}
