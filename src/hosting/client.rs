use crate::gameroom::DeliveryError;
use crate::gameroom::Message;
use crate::gameroom::Peer;
use tokio::sync::mpsc::UnboundedSender;

/// Network peer that communicates via a tokio channel.
/// Designed to bridge a WebSocket connection to the session.
///
/// Delivery encodes the message as JSON and hands it to the socket writer
/// task. The send fails once that task has ended, which is how the session
/// learns the connection is gone.
#[derive(Debug, Clone)]
pub struct Client {
    tx: UnboundedSender<String>,
}

impl Client {
    pub fn new(tx: UnboundedSender<String>) -> Self {
        Self { tx }
    }
}

impl Peer for Client {
    fn deliver(&self, message: &Message) -> Result<(), DeliveryError> {
        let json = message
            .to_json()
            .map_err(|e| DeliveryError::Encode(e.to_string()))?;
        self.tx
            .send(json)
            .map_err(|e| DeliveryError::Closed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;
    #[test]
    fn delivers_json() {
        let (tx, mut rx) = unbounded_channel();
        let client = Client::new(tx);
        assert!(client.deliver(&Message::your_turn()).is_ok());
        let json = rx.try_recv().unwrap();
        assert_eq!(Message::try_from(json.as_str()).unwrap(), Message::your_turn());
    }
    #[test]
    fn fails_after_socket_task_ends() {
        let (tx, rx) = unbounded_channel();
        let client = Client::new(tx);
        drop(rx);
        assert!(client.deliver(&Message::info("bye")).is_err());
    }
}
