//! hosting Server Binary
//!
//! Runs the HTTP server for a live board game session.
//! Players connect over WebSocket at `/enter/{name}`.

use clap::Parser;
use ludoroom::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    hosting::Server::run(hosting::Config::parse()).await
}
