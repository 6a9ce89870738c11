use std::process::ExitCode;

fn main() -> ExitCode {
    match textalyze::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("textalyze: {e}");
            ExitCode::FAILURE
        }
    }
}
