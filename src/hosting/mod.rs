//! WebSocket transport for the lobby.
mod bridge;
mod client;
mod config;
mod server;

pub use bridge::*;
pub use client::*;
pub use config::*;
pub use server::*;
