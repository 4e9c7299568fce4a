use std::process::ExitCode;

fn main() -> ExitCode {
    infrascan::cli::run()
}
