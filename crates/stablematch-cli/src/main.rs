use std::process::ExitCode;

use stablematch_cli::{Command, Console, RunStatus, USAGE, logging, parse_args, run};
use stablematch_types::constants;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match parse_args(&args) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n");
            eprint!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    logging::init(config.log_format);
    tracing::info!(
        engine = constants::ENGINE_NAME,
        version = constants::VERSION,
        mode = %config.mode,
        "Starting"
    );

    match run(&config, &mut Console::stdio()) {
        Ok(status) => {
            if let RunStatus::Unstable(pair) = status {
                tracing::warn!(%pair, "Run ended on an unstable matching");
            }
            ExitCode::from(status.exit_code())
        }
        Err(err) => {
            tracing::error!(input_error = err.is_input_error(), error = %err, "Run failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
