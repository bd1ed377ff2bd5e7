use std::process::ExitCode;

fn main() -> ExitCode {
    gazetteer::cli::run()
}
