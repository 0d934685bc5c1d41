use std::process::ExitCode;

fn main() -> ExitCode {
    shopfront_cli::run()
}
