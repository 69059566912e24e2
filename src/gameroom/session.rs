use super::*;
use crate::Arbitrary;
use crate::gameplay::*;

/// Authoritative coordinator for one game session.
///
/// Owns the [`Board`] (functional core) and the [`Directory`] of reachable
/// peers, and is the only thing that mutates either. Every method takes
/// `&mut self`; callers share a session through [`Lobby`], whose single lock
/// linearizes all joins, leaves, rolls and broadcasts.
///
/// Key responsibilities:
/// - Gate rolls on turn ownership
/// - Broadcast moves, snapshots and turn changes
/// - Route public and private chat
/// - Prune peers whose delivery fails, keeping board and directory in step
///
/// Pruning never calls back into a locked entry point. Failures from a
/// delivery pass are collected first and then handed to the pruning loop,
/// which keeps detaching and re-announcing until a pass completes cleanly.
#[derive(Debug, Default)]
pub struct Session {
    board: Board,
    directory: Directory,
    started: bool,
}

impl Session {
    /// Registers a reachable player.
    /// Rejects names already on the board or in the directory, and names
    /// that would not survive the STATE encoding.
    pub fn join<P>(&mut self, player: Player, peer: P) -> bool
    where
        P: Peer + 'static,
    {
        let name = player.name().to_string();
        if !self.is_available(&name) {
            log::warn!("[session] {:?} is unavailable, rejecting join", name);
            return false;
        }
        self.directory.register(&name, Box::new(peer));
        self.board.add(player);
        log::info!("[session] {} joined ({} seated)", name, self.board.len());
        self.broadcast(Message::info(format!("{} joined!", name)));
        self.broadcast(Message::roster(self.directory.names()));
        // joining an emptied session that is already under way
        if self.started && self.board.len() == 1 && self.board.is_turn(&name) {
            self.announce();
        }
        true
    }
    /// Seats an automated player. Bots have no directory entry, so they
    /// never receive pushes and must poll [`Session::is_current_turn`].
    pub fn add_bot(&mut self, name: &str) -> bool {
        if !self.is_available(name) || !self.board.add(Player::new(name)) {
            log::warn!("[session] {:?} is unavailable, rejecting bot", name);
            return false;
        }
        log::info!("[session] bot {} seated", name);
        true
    }
    /// Removes a player from directory and board together.
    /// Absent names are a no-op.
    pub fn leave(&mut self, name: &str) {
        match self.directory.contains(name) || self.board.contains(name) {
            true => self.prune(vec![name.to_string()]),
            false => log::trace!("[session] {} already gone", name),
        }
    }
    /// Opens play: notice, roster, initial snapshot, first turn.
    pub fn start(&mut self) {
        if self.started {
            log::warn!("[session] already started");
            return;
        }
        self.started = true;
        log::info!("[session] starting with {} players", self.board.len());
        self.broadcast(Message::info(format!(
            "Game started with {} players!",
            self.board.len()
        )));
        self.broadcast(Message::roster(self.directory.names()));
        self.broadcast(self.state());
        self.announce();
    }
    /// Dispatches an inbound message from a connected peer.
    /// `sender` is the name the connection joined under.
    pub fn handle(&mut self, message: Message, sender: &str) {
        match message.kind() {
            Kind::Roll => self.roll(sender, Roll::random()),
            Kind::PublicChat => self.chat(&message.signed(sender)),
            Kind::PrivateChat => self.whisper(&message.signed(sender), sender),
            kind => log::trace!("[session] ignoring {} from {}", kind, sender),
        }
    }
    /// Applies a bot's roll exactly as if it had sent ROLL.
    pub fn bot_tick(&mut self, name: &str, roll: Roll) {
        self.roll(name, roll);
    }
    /// Delivers to every peer, then prunes whoever failed.
    pub fn broadcast(&mut self, message: Message) {
        let failed = self.directory.broadcast(&message);
        self.prune(failed);
    }
}

impl Session {
    pub fn is_current_turn(&self, name: &str) -> bool {
        self.board.is_turn(name)
    }
    pub fn is_started(&self) -> bool {
        self.started
    }
    pub fn contains(&self, name: &str) -> bool {
        self.board.contains(name)
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    /// Names of reachable peers, in join order.
    pub fn roster(&self) -> Vec<String> {
        self.directory.names()
    }
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.board)
    }
}

impl Session {
    fn is_available(&self, name: &str) -> bool {
        Player::is_valid_name(name) && !self.board.contains(name) && !self.directory.contains(name)
    }
    fn roll(&mut self, name: &str, roll: Roll) {
        if !self.board.is_turn(name) {
            log::trace!("[session] {} rolled out of turn, ignoring", name);
            return;
        }
        log::info!("[session] {} rolled {}", name, roll);
        self.broadcast(Message::info(format!("{} rolled {}", name, roll)));
        let Some(extra) = self.board.advance(name, roll) else {
            log::debug!("[session] {} was pruned before moving", name);
            return;
        };
        let next = self.board.current().map(String::from);
        let position = self.board.get(name).map(Player::position).unwrap_or_default();
        self.broadcast(Message::moved(name, position));
        self.broadcast(self.state());
        // a prune during the pushes above has already announced any new holder
        if !extra && self.board.current() == next.as_deref() {
            self.announce();
        }
    }
    fn chat(&self, message: &Message) {
        log::info!("[chat] {}: {}", message.sender(), message.content());
        self.directory
            .broadcast(message)
            .into_iter()
            .for_each(|name| log::warn!("[chat] failed to reach {}", name));
    }
    fn whisper(&self, message: &Message, sender: &str) {
        let Some(recipient) = message.recipient().filter(|r| self.directory.contains(r)) else {
            log::debug!("[chat] {} whispered to nobody reachable", sender);
            return;
        };
        log::info!("[chat] {} -> {}: {}", sender, recipient, message.content());
        let mut targets = vec![recipient, sender];
        targets.dedup();
        targets
            .into_iter()
            .filter_map(|name| self.directory.unicast(name, message).map(|res| (name, res)))
            .filter(|(_, res)| res.is_err())
            .for_each(|(name, _)| log::warn!("[chat] failed to reach {}", name));
    }
    fn announce(&mut self) {
        let failed = self.notify_turn();
        self.prune(failed);
    }
    /// Tells everyone whose turn it is and prompts the holder directly.
    /// Returns peers that could not be reached.
    fn notify_turn(&self) -> Vec<String> {
        let Some(current) = self.board.current() else {
            return Vec::new();
        };
        log::info!("[session] {}'s turn", current);
        let mut failed = self
            .directory
            .broadcast(&Message::info(format!("It's {}'s turn!", current)));
        if let Some(Err(_)) = self.directory.unicast(current, &Message::your_turn()) {
            failed.push(current.to_string());
        }
        failed
    }
    /// Detaches every failed peer, then pushes a fresh roster (and the new
    /// turn holder, if the departure moved the turn). Repeats while those
    /// pushes fail; each round strictly shrinks the directory.
    fn prune(&mut self, mut failed: Vec<String>) {
        while !failed.is_empty() {
            let holder = self.board.current().map(String::from);
            failed.iter().for_each(|name| self.detach(name));
            failed = self.directory.broadcast(&Message::roster(self.directory.names()));
            if self.started && self.board.current() != holder.as_deref() {
                failed.extend(self.notify_turn());
            }
        }
    }
    fn detach(&mut self, name: &str) {
        let peer = self.directory.remove(name);
        let seat = self.board.remove(name).is_some();
        if peer || seat {
            log::info!("[session] {} left ({} seated)", name, self.board.len());
        }
    }
    fn state(&self) -> Message {
        Message::state(self.board.encode())
    }
}
