//! Binary entrypoint for the `mark-step` CLI.

use std::process::ExitCode;

use mark_step::adapters::live::rpc::LiveRpcTransport;
use mark_step::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // A missing .env is fine; real env vars always win.
    let _ = dotenvy::dotenv();
    mark_step::logging::init();

    let transport = LiveRpcTransport::new();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    // Every failure has already been reported by `run`.
    match mark_step::run(
        std::env::args_os(),
        Config::from_env,
        &transport,
        &mut stdout,
        &mut stderr,
    )
    .await
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
