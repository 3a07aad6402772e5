mod cli;
mod console;
mod demo;
mod infra;
mod menu;

use career_compass::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
