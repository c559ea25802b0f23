mod ceremony;
mod cli;
mod presentation;
mod prompt;

use sorting_hat::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
