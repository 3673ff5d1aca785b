//! In-memory user registration and login service.
//!
//! Accounts live only for the lifetime of the process; restarting the
//! server loses them.

mod account;
mod api;
mod error;

use std::sync::Arc;

use clap::Parser;

use account::service::CredentialService;

#[derive(Parser)]
#[command(name = "userauth")]
#[command(about = "In-memory user registration and login service", long_about = None)]
struct Cli {
    /// Port to listen on
    #[arg(long, default_value_t = 9999)]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let service = Arc::new(CredentialService::new());
    let server = api::ApiServer::new(service, format!("{}:{}", cli.bind, cli.port));

    if let Err(err) = server.start().await {
        tracing::error!("server error: {}", err);
        std::process::exit(1);
    }
}
