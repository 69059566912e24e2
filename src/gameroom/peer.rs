use super::*;
use tokio::sync::mpsc::UnboundedSender;

/// Errors that can occur while delivering a message to a peer.
/// Every variant means the same thing to the session: the peer is gone.
#[derive(Debug, Clone)]
pub enum DeliveryError {
    Closed(String),
    Encode(String),
}

impl std::fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Closed(s) => write!(f, "peer closed: {}", s),
            Self::Encode(s) => write!(f, "encode failed: {}", s),
        }
    }
}

impl std::error::Error for DeliveryError {}

/// Transport capability: deliver this message to this peer, or fail if the
/// peer is unreachable.
///
/// Delivery runs while the session lock is held, so implementations should
/// hand the message off (e.g. into a channel drained by a socket task) rather
/// than block on I/O.
pub trait Peer: Send {
    fn deliver(&self, message: &Message) -> Result<(), DeliveryError>;
}

impl Peer for UnboundedSender<Message> {
    fn deliver(&self, message: &Message) -> Result<(), DeliveryError> {
        self.send(message.clone())
            .map_err(|e| DeliveryError::Closed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;
    #[test]
    fn channel_peer_delivers() {
        let (tx, mut rx) = unbounded_channel::<Message>();
        assert!(tx.deliver(&Message::info("hello")).is_ok());
        assert_eq!(rx.try_recv().ok(), Some(Message::info("hello")));
    }
    #[test]
    fn dropped_receiver_fails_delivery() {
        let (tx, rx) = unbounded_channel::<Message>();
        drop(rx);
        assert!(matches!(
            tx.deliver(&Message::info("hello")),
            Err(DeliveryError::Closed(_))
        ));
    }
}
