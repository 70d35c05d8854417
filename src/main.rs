use crate::cli::Args;
use clap::Parser;

mod app_context;
mod cli;
mod contacts;
mod health;
mod http;
mod logging;
mod route_table;
mod storage;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init();
    let app_context = app_context::init();
    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!("Listening on {}...", args.listen_address);
    axum::serve(listener, router)
        .await
        .expect("Failed to run the server.");
}
