use std::process::ExitCode;

fn main() -> ExitCode {
    hotel_reviews::cli::run()
}
