use ludoroom::gameplay::*;
use ludoroom::gameroom::*;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::unbounded_channel;

async fn seat(lobby: &Lobby, name: &str) -> UnboundedReceiver<Message> {
    let (tx, rx) = unbounded_channel();
    assert!(lobby.join(Player::from(name), tx).await);
    rx
}

fn drain(rx: &mut UnboundedReceiver<Message>) -> Vec<Message> {
    std::iter::from_fn(|| rx.try_recv().ok()).collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_rolls_are_linearized() {
    let lobby = Lobby::default();
    let _alice = seat(&lobby, "alice").await;
    let _bob = seat(&lobby, "bob").await;
    lobby.start().await;
    let tasks = (0..64)
        .map(|_| {
            let lobby = lobby.clone();
            tokio::spawn(async move { lobby.bot_tick("alice", Roll::from(1)).await })
        })
        .collect::<Vec<_>>();
    for task in tasks {
        task.await.unwrap();
    }
    let snapshot = lobby.snapshot().await;
    assert_eq!(snapshot.get("alice"), Some(1));
    assert_eq!(snapshot.get("bob"), Some(0));
    assert!(lobby.is_current_turn("bob").await);
}

#[tokio::test]
async fn failed_peer_is_pruned_from_lobby() {
    let lobby = Lobby::default();
    let mut alice = seat(&lobby, "alice").await;
    let mut bob = seat(&lobby, "bob").await;
    let carol = seat(&lobby, "carol").await;
    drain(&mut alice);
    drain(&mut bob);
    drop(carol);
    lobby.broadcast(Message::info("ping")).await;
    assert_eq!(lobby.roster().await, vec!["alice", "bob"]);
    assert!(!lobby.contains("carol").await);
    for rx in [&mut alice, &mut bob] {
        let roster = drain(rx)
            .into_iter()
            .filter(|m| m.kind() == Kind::UserList)
            .last()
            .and_then(|m| m.users().map(<[String]>::len));
        assert_eq!(roster, Some(2));
    }
}

#[tokio::test(start_paused = true)]
async fn fish_takes_its_turns() {
    let lobby = Lobby::default();
    let mut alice = seat(&lobby, "alice").await;
    let actor = lobby
        .add_bot_with(Fish::new("fish"), Duration::from_millis(10))
        .await
        .unwrap();
    lobby.start().await;
    let moved = tokio::time::timeout(Duration::from_secs(60), async {
        while let Some(message) = alice.recv().await {
            if message.kind() != Kind::State {
                continue;
            }
            let snapshot = Snapshot::try_from(&message).unwrap();
            if snapshot.get("fish").is_some_and(|p| p > 0) {
                return snapshot;
            }
            if lobby.is_current_turn("alice").await {
                lobby.handle(Message::roll("alice"), "alice").await;
            }
        }
        Snapshot::default()
    })
    .await
    .unwrap();
    assert!(moved.get("fish").is_some_and(|p| p > 0));
    lobby.leave("fish").await;
    tokio::time::timeout(Duration::from_secs(1), actor)
        .await
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn duplicate_bot_is_rejected() {
    let lobby = Lobby::default();
    let _alice = seat(&lobby, "alice").await;
    assert!(lobby.add_bot(Fish::new("alice")).await.is_err());
    assert!(lobby.add_bot(Fish::new("fish")).await.is_ok());
    assert!(lobby.add_bot(Fish::new("fish")).await.is_err());
}
