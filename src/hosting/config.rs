use clap::Parser;

/// Command-line configuration for the hosting server.
#[derive(Debug, Clone, Parser)]
#[command(name = "hosting", about = "Host a multiplayer board game session over WebSocket")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8888")]
    pub bind: String,
    /// CPU players to seat before anyone connects.
    #[arg(long, default_value_t = 0)]
    pub bots: usize,
    /// HTTP worker threads.
    #[arg(long, default_value_t = 4)]
    pub workers: usize,
}
