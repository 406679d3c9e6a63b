mod cli;
mod demo;
mod sample;

use fuzzy_names::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
