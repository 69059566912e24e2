use super::*;
use crate::gameplay::Player;
use crate::gameplay::Roll;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Shared handle to the one session every connection and bot talks to.
///
/// The whole session sits behind a single mutex, so each call below is one
/// atomic step: at most one join, leave, roll or broadcast is in flight.
/// Cloning is cheap and yields another handle to the same session.
#[derive(Debug, Clone, Default)]
pub struct Lobby {
    session: Arc<Mutex<Session>>,
}

impl Lobby {
    pub async fn join<P>(&self, player: Player, peer: P) -> bool
    where
        P: Peer + 'static,
    {
        self.session.lock().await.join(player, peer)
    }
    pub async fn leave(&self, name: &str) {
        self.session.lock().await.leave(name)
    }
    pub async fn start(&self) {
        self.session.lock().await.start()
    }
    pub async fn handle(&self, message: Message, sender: &str) {
        log::debug!("[lobby] {} sent {}", sender, message);
        self.session.lock().await.handle(message, sender)
    }
    pub async fn broadcast(&self, message: Message) {
        self.session.lock().await.broadcast(message)
    }
    pub async fn bot_tick(&self, name: &str, roll: Roll) {
        self.session.lock().await.bot_tick(name, roll)
    }
    pub async fn is_current_turn(&self, name: &str) -> bool {
        self.session.lock().await.is_current_turn(name)
    }
    pub async fn contains(&self, name: &str) -> bool {
        self.session.lock().await.contains(name)
    }
    pub async fn roster(&self) -> Vec<String> {
        self.session.lock().await.roster()
    }
    pub async fn snapshot(&self) -> Snapshot {
        self.session.lock().await.snapshot()
    }
}

impl Lobby {
    /// Seats a bot and spawns the actor that plays for it.
    pub async fn add_bot<B>(&self, bot: B) -> anyhow::Result<JoinHandle<()>>
    where
        B: Bot + 'static,
    {
        self.seat(&bot)
            .await
            .then(|| Actor::spawn(Box::new(bot), self.clone()))
            .ok_or_else(|| anyhow::anyhow!("name is taken or invalid"))
    }
    /// Seats a bot whose actor polls on a custom interval.
    pub async fn add_bot_with<B>(
        &self,
        bot: B,
        every: std::time::Duration,
    ) -> anyhow::Result<JoinHandle<()>>
    where
        B: Bot + 'static,
    {
        self.seat(&bot)
            .await
            .then(|| Actor::spawn_with(Box::new(bot), self.clone(), every))
            .ok_or_else(|| anyhow::anyhow!("name is taken or invalid"))
    }
    async fn seat<B>(&self, bot: &B) -> bool
    where
        B: Bot,
    {
        self.session.lock().await.add_bot(bot.name())
    }
}
