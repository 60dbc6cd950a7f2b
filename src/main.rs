use std::{
    io::IsTerminal,
    process::ExitCode,
};

use mazewalk::{app, config::SEED_ENV_VAR, logging};

fn main() -> ExitCode {
    let _guard = logging::init("mazewalk.log");

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let stdout = std::io::stdout();
    let is_terminal = stdout.is_terminal();
    let result = app::run(
        &args,
        std::env::var(SEED_ENV_VAR).ok(),
        &mut std::io::stdin().lock(),
        &mut stdout.lock(),
        is_terminal,
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("[main] {}", err);
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
