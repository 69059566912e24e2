use super::*;
use crate::BOT_POLL_INTERVAL;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Runs a Bot in its own async task.
///
/// - Polls the lobby for turn ownership on a fixed interval
/// - Calls Bot::roll when the bot holds the turn
/// - Submits the roll through Lobby::bot_tick, which re-checks the turn
/// - Exits once the bot is no longer seated
pub struct Actor {
    name: String,
    bot: Box<dyn Bot>,
    lobby: Lobby,
    every: Duration,
}

impl Actor {
    pub fn spawn(bot: Box<dyn Bot>, lobby: Lobby) -> JoinHandle<()> {
        Self::spawn_with(bot, lobby, BOT_POLL_INTERVAL)
    }
    pub fn spawn_with(bot: Box<dyn Bot>, lobby: Lobby, every: Duration) -> JoinHandle<()> {
        let name = bot.name().to_string();
        let actor = Self {
            name,
            bot,
            lobby,
            every,
        };
        tokio::spawn(actor.run())
    }
    async fn run(mut self) {
        let mut ticker = tokio::time::interval(self.every);
        loop {
            ticker.tick().await;
            if !self.lobby.contains(&self.name).await {
                log::info!("[actor {}] unseated, stopping", self.name);
                break;
            }
            if self.lobby.is_current_turn(&self.name).await {
                self.act().await;
            }
        }
    }
    async fn act(&mut self) {
        let roll = self.bot.roll().await;
        log::debug!("[actor {}] rolling {}", self.name, roll);
        self.lobby.bot_tick(&self.name, roll).await;
    }
}
