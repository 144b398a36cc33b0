mod cli;
mod infra;
mod points;
mod routes;
mod server;

use receipt_points::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
