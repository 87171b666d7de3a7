use std::process::ExitCode;

fn main() -> ExitCode {
    match chessboard::cli::run_loop() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("chessboard: {e}");
            ExitCode::FAILURE
        }
    }
}
