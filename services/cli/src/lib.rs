mod cli;
mod render;

use trust_score::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
