mod cli;
mod infra;
mod report;
mod routes;
mod server;

use coparent_plan::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
