use crate::Position;
use crate::SERVER;
use serde::Deserialize;
use serde::Serialize;

/// Tag carried by every wire message.
///
/// Serialized as its SCREAMING_SNAKE_CASE name. Tags this server does not
/// know decode to [`Kind::Unknown`] instead of failing, so older or newer
/// clients never knock over the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Kind {
    Roll,
    Move,
    Info,
    State,
    YourTurn,
    PublicChat,
    PrivateChat,
    UserList,
    Unknown,
}

impl From<&str> for Kind {
    fn from(s: &str) -> Self {
        match s {
            "ROLL" => Self::Roll,
            "MOVE" => Self::Move,
            "INFO" => Self::Info,
            "STATE" => Self::State,
            "YOUR_TURN" => Self::YourTurn,
            "PUBLIC_CHAT" => Self::PublicChat,
            "PRIVATE_CHAT" => Self::PrivateChat,
            "USER_LIST" => Self::UserList,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for Kind {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> Self {
        kind.to_string()
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Roll => write!(f, "ROLL"),
            Self::Move => write!(f, "MOVE"),
            Self::Info => write!(f, "INFO"),
            Self::State => write!(f, "STATE"),
            Self::YourTurn => write!(f, "YOUR_TURN"),
            Self::PublicChat => write!(f, "PUBLIC_CHAT"),
            Self::PrivateChat => write!(f, "PRIVATE_CHAT"),
            Self::UserList => write!(f, "USER_LIST"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// One wire exchange between the session and a peer.
/// Immutable once built; travels by value across the transport boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    kind: Kind,
    #[serde(default)]
    content: String,
    #[serde(default)]
    sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    recipient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_list: Option<Vec<String>>,
}

impl Message {
    pub fn new<C, S>(kind: Kind, content: C, sender: S) -> Self
    where
        C: Into<String>,
        S: Into<String>,
    {
        Self {
            kind,
            content: content.into(),
            sender: sender.into(),
            recipient: None,
            user_list: None,
        }
    }
    /// Server notice shown in every participant's log.
    pub fn info<C>(content: C) -> Self
    where
        C: Into<String>,
    {
        Self::new(Kind::Info, content, SERVER)
    }
    /// Announcement that a player landed on a square.
    pub fn moved(name: &str, position: Position) -> Self {
        Self::new(
            Kind::Move,
            format!("{} moved to position {}", name, position),
            SERVER,
        )
    }
    /// Full board snapshot, as produced by [`crate::gameplay::Board::encode`].
    pub fn state<C>(content: C) -> Self
    where
        C: Into<String>,
    {
        Self::new(Kind::State, content, SERVER)
    }
    /// Unicast prompt to the player who now holds the turn.
    pub fn your_turn() -> Self {
        Self::new(Kind::YourTurn, "", SERVER)
    }
    /// Roster of reachable peers.
    pub fn roster(users: Vec<String>) -> Self {
        Self {
            user_list: Some(users),
            ..Self::new(Kind::UserList, "", SERVER)
        }
    }
    /// Request to roll, sent by the player holding the turn.
    pub fn roll<S>(sender: S) -> Self
    where
        S: Into<String>,
    {
        Self::new(Kind::Roll, "", sender)
    }
    pub fn public<S, C>(sender: S, content: C) -> Self
    where
        S: Into<String>,
        C: Into<String>,
    {
        Self::new(Kind::PublicChat, content, sender)
    }
    pub fn private<S, R, C>(sender: S, recipient: R, content: C) -> Self
    where
        S: Into<String>,
        R: Into<String>,
        C: Into<String>,
    {
        Self {
            recipient: Some(recipient.into()),
            ..Self::new(Kind::PrivateChat, content, sender)
        }
    }
}

impl Message {
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn content(&self) -> &str {
        &self.content
    }
    pub fn sender(&self) -> &str {
        &self.sender
    }
    pub fn recipient(&self) -> Option<&str> {
        self.recipient.as_deref()
    }
    pub fn users(&self) -> Option<&[String]> {
        self.user_list.as_deref()
    }
    /// Same message, attributed to `sender`.
    pub fn signed<S>(self, sender: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            sender: sender.into(),
            ..self
        }
    }
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl TryFrom<&str> for Message {
    type Error = serde_json::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        serde_json::from_str(s)
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.recipient, &self.user_list) {
            (Some(to), _) => write!(f, "{} {} -> {}: {}", self.kind, self.sender, to, self.content),
            (_, Some(users)) => write!(f, "{} [{}]", self.kind, users.join(", ")),
            _ => write!(f, "{} {}: {}", self.kind, self.sender, self.content),
        }
    }
}
