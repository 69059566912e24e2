use crate::gameplay::Roll;

/// Trait for automated players.
///
/// Bots are not reachable through the transport. An [`Actor`](super::Actor)
/// polls the lobby on their behalf and asks for a roll only when the bot
/// holds the turn; the lobby re-checks ownership under its lock before
/// applying it.
///
/// The async design lets implementations think as long as they like
/// (or sleep, to look human) without blocking the session.
#[async_trait::async_trait]
pub trait Bot: Send {
    /// Name the bot is seated under. Must be stable.
    fn name(&self) -> &str;
    /// Pick a die value. Called only when it's this bot's turn.
    async fn roll(&mut self) -> Roll;
}
