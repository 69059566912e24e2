use super::*;
use indexmap::IndexMap;

/// Reachable peers keyed by player name.
/// Separates transport handles from game logic; entries live exactly as
/// long as the connection is believed to be alive.
#[derive(Default)]
pub struct Directory {
    peers: IndexMap<String, Box<dyn Peer>>,
}

impl Directory {
    /// Registers a peer under a name. Returns false if the name is taken.
    pub fn register(&mut self, name: &str, peer: Box<dyn Peer>) -> bool {
        if self.peers.contains_key(name) {
            return false;
        }
        self.peers.insert(name.to_string(), peer);
        true
    }
    /// Drops the peer handle. Returns whether one was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.peers.shift_remove(name).is_some()
    }
    pub fn contains(&self, name: &str) -> bool {
        self.peers.contains_key(name)
    }
    pub fn len(&self) -> usize {
        self.peers.len()
    }
    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }
    /// Names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.peers.keys().cloned().collect()
    }
    /// Sends a message to one peer.
    /// Returns None if no such peer is registered.
    pub fn unicast(&self, name: &str, message: &Message) -> Option<Result<(), DeliveryError>> {
        log::debug!("[directory] unicast to {}: {}", name, message);
        self.peers
            .get(name)
            .map(|peer| peer.deliver(message))
            .inspect(|res| {
                if let Err(e) = res {
                    log::warn!("[directory] unicast to {} failed: {}", name, e)
                }
            })
    }
    /// Sends a message to every peer, completing the whole pass before
    /// returning the names whose delivery failed.
    pub fn broadcast(&self, message: &Message) -> Vec<String> {
        log::debug!("[directory] broadcast: {}", message);
        self.peers
            .iter()
            .filter_map(|(name, peer)| peer.deliver(message).err().map(|e| (name, e)))
            .inspect(|(name, e)| log::warn!("[directory] broadcast to {} failed: {}", name, e))
            .map(|(name, _)| name.clone())
            .collect()
    }
}

impl std::fmt::Debug for Directory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.peers.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;
    #[test]
    fn register_and_remove() {
        let mut directory = Directory::default();
        let (tx, _rx) = unbounded_channel::<Message>();
        assert!(directory.register("alice", Box::new(tx.clone())));
        assert!(!directory.register("alice", Box::new(tx)));
        assert_eq!(directory.len(), 1);
        assert!(directory.remove("alice"));
        assert!(!directory.remove("alice"));
        assert!(directory.is_empty());
    }
    #[test]
    fn unicast_unknown_peer() {
        let directory = Directory::default();
        assert!(directory.unicast("nobody", &Message::your_turn()).is_none());
    }
    #[test]
    fn broadcast_reports_failures_after_full_pass() {
        let mut directory = Directory::default();
        let (a, mut a_rx) = unbounded_channel::<Message>();
        let (b, b_rx) = unbounded_channel::<Message>();
        let (c, mut c_rx) = unbounded_channel::<Message>();
        directory.register("a", Box::new(a));
        directory.register("b", Box::new(b));
        directory.register("c", Box::new(c));
        drop(b_rx);
        let failed = directory.broadcast(&Message::info("hi"));
        assert_eq!(failed, vec!["b".to_string()]);
        assert!(a_rx.try_recv().is_ok());
        assert!(c_rx.try_recv().is_ok());
        assert_eq!(directory.len(), 3);
    }
}
