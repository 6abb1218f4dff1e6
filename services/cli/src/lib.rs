mod cli;
mod commands;
mod render;

use diagnostico::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
