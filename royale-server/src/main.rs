use std::{io, path::PathBuf};

use anyhow::Error;

use clap::Parser as _;

use royale_client::http::Client;

use royale_server::{
    app::{serve_http, serve_stdio},
    cli::{Args, Transport, run_command},
    config::Config,
    tools::RoyaleServer,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    // stdout belongs to the stdio transport
    tracing_subscriber::fmt::fmt()
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // load config
    let config_path = args.config.unwrap_or_else(|| PathBuf::from("./royale.toml"));
    let config = Config::load(config_path)?;

    let client = Client::new(&config.api)?;

    tracing::info!("using api at {}", client.endpoint());

    // Execute command if it exists
    if let Some(command) = args.command {
        return run_command(&command, &client).await;
    }

    let server = RoyaleServer::new(client);

    match args.transport {
        Transport::Http => serve_http(server, &config.server).await,
        Transport::Stdio => serve_stdio(server).await,
    }
}
