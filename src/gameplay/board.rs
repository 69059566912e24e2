use super::*;
use crate::Position;
use indexmap::IndexMap;

/// Turn/state engine for a single session.
///
/// Holds the canonical ring of players and the pointer to whoever holds the
/// turn. Ring order is join order and is never reshuffled by removals. The
/// turn pointer is `Some` exactly when at least one player is seated.
///
/// Board does no locking of its own; the session that owns it serializes
/// every call.
#[derive(Debug, Clone, Default)]
pub struct Board {
    players: IndexMap<String, Player>,
    current: Option<String>,
}

impl Board {
    /// Seats a player at the end of the ring.
    /// The first player ever seated takes the turn.
    /// A name that is already seated is ignored and `false` returned.
    pub fn add(&mut self, player: Player) -> bool {
        if self.players.contains_key(player.name()) {
            log::warn!("[board] {} already seated, ignoring", player.name());
            return false;
        }
        if self.current.is_none() {
            self.current = Some(player.name().to_string());
        }
        self.players.insert(player.name().to_string(), player);
        true
    }
    /// Moves the named player forward by the roll.
    ///
    /// Returns `None` without touching anything if the name is unknown.
    /// Otherwise returns whether the roll grants an extra turn; if it does
    /// not, the turn passes to the next player in ring order.
    pub fn advance(&mut self, name: &str, roll: Roll) -> Option<bool> {
        let position = self.players.get_mut(name)?.step(roll);
        log::debug!("[board] {} rolled {} to {}", name, roll, position);
        match roll.grants_extra_turn() {
            true => Some(true),
            false => {
                self.rotate();
                Some(false)
            }
        }
    }
    /// Removes a player, preserving the order of everyone else.
    ///
    /// If the removed player held the turn, it passes to whoever followed
    /// them in the ring, wrapping to the front. Unknown names are a no-op.
    pub fn remove(&mut self, name: &str) -> Option<Player> {
        let (index, _, player) = self.players.shift_remove_full(name)?;
        if self.is_turn(name) {
            self.current = match self.players.len() {
                0 => None,
                n => self.players.get_index(index % n).map(|(k, _)| k.clone()),
            };
            log::debug!("[board] turn passes to {:?} after {} left", self.current, name);
        }
        Some(player)
    }
}

impl Board {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
    pub fn is_turn(&self, name: &str) -> bool {
        self.current() == Some(name)
    }
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }
    pub fn contains(&self, name: &str) -> bool {
        self.players.contains_key(name)
    }
    pub fn len(&self) -> usize {
        self.players.len()
    }
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
    /// Players in ring order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }
    /// Names in ring order.
    pub fn names(&self) -> Vec<String> {
        self.players.keys().cloned().collect()
    }
    /// `name → position` pairs in ring order.
    pub fn positions(&self) -> Vec<(String, Position)> {
        self.players()
            .map(|p| (p.name().to_string(), p.position()))
            .collect()
    }
    /// STATE content: `name=position,` for every player in ring order.
    pub fn encode(&self) -> String {
        self.players().map(|p| format!("{},", p)).collect()
    }
}

impl Board {
    fn rotate(&mut self) {
        let n = self.players.len();
        self.current = self
            .current
            .as_deref()
            .and_then(|name| self.players.get_index_of(name))
            .map(|i| (i + 1) % n)
            .and_then(|i| self.players.get_index(i))
            .map(|(k, _)| k.clone());
    }
}
