use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = apigen::logging::init_logging("info") {
        eprintln!("{:#}", err);
    }
    apigen::cli::run_cli()
}
