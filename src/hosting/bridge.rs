use super::*;
use crate::gameplay::Player;
use crate::gameroom::Lobby;
use crate::gameroom::Message;
use tokio::sync::mpsc::unbounded_channel;

/// Joins a WebSocket connection to the lobby and spawns the task that
/// shuttles frames between the two.
///
/// Inbound text frames are decoded as [`Message`] and handled with the
/// connection's joined name as sender; the name on the wire is ignored.
/// The connection leaves the lobby when the socket closes or errors, and
/// the socket closes when the lobby drops the connection's peer. A refused
/// name still completes the upgrade, then gets an INFO notice and a close.
pub async fn bridge(
    lobby: Lobby,
    name: String,
    mut session: actix_ws::Session,
    mut stream: actix_ws::MessageStream,
) -> anyhow::Result<()> {
    use futures::StreamExt;
    let (tx, mut rx) = unbounded_channel::<String>();
    if !lobby.join(Player::new(name.as_str()), Client::new(tx)).await {
        let notice = Message::info(format!("{} is taken or invalid", name)).to_json()?;
        log::warn!("[bridge {}] refused", name);
        actix_web::rt::spawn(async move {
            let _ = session.text(notice).await;
            let _ = session.close(None).await;
        });
        return Ok(());
    }
    log::debug!("[bridge {}] connected", name);
    actix_web::rt::spawn(async move {
        'sesh: loop {
            tokio::select! {
                biased;
                msg = rx.recv() => match msg {
                    Some(json) => if session.text(json).await.is_err() { break 'sesh },
                    None => break 'sesh,
                },
                msg = stream.next() => match msg {
                    Some(Ok(actix_ws::Message::Text(text))) => match Message::try_from(&*text) {
                        Ok(message) => lobby.handle(message, &name).await,
                        Err(e) => log::warn!("[bridge {}] dropping malformed frame: {}", name, e),
                    },
                    Some(Ok(actix_ws::Message::Ping(bytes))) => if session.pong(&bytes).await.is_err() { break 'sesh },
                    Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                    Some(Err(_)) => break 'sesh,
                    None => break 'sesh,
                    _ => continue 'sesh,
                },
            }
        }
        lobby.leave(&name).await;
        let _ = session.close(None).await;
        log::debug!("[bridge {}] disconnected", name);
    });
    Ok(())
}
