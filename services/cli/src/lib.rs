mod cli;
mod generate;
mod parse;
mod recommend;
mod score;

use internship_match::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
