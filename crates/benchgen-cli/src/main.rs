use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = benchgen_cli::cli().get_matches();
    benchgen_cli::init_tracing(matches.get_flag("log-json"));

    let mut stdout = std::io::stdout().lock();
    match benchgen_cli::dispatch(&matches, &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!(error = %err, "benchgen failed");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
