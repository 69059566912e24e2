use super::*;
use crate::Position;
use crate::gameplay::Board;
use indexmap::IndexMap;
use serde::Serialize;

/// Read-only `name → position` view of the board, in ring order.
///
/// This is what a board renderer consumes. It is rebuilt from the content
/// of every STATE push, so clients never need access to the engine itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot(IndexMap<String, Position>);

impl Snapshot {
    pub fn get(&self, name: &str) -> Option<Position> {
        self.0.get(name).copied()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, Position)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Parses STATE content. Empty segments (including the trailing comma)
/// are skipped, as are pairs that do not read as `name=position`.
impl From<&str> for Snapshot {
    fn from(s: &str) -> Self {
        Self(
            s.split(',')
                .map(str::trim)
                .filter(|pair| !pair.is_empty())
                .filter_map(|pair| pair.split_once('='))
                .filter_map(|(name, pos)| {
                    pos.trim()
                        .parse::<Position>()
                        .ok()
                        .map(|pos| (name.trim().to_string(), pos))
                })
                .collect(),
        )
    }
}

impl TryFrom<&Message> for Snapshot {
    type Error = &'static str;
    fn try_from(message: &Message) -> Result<Self, Self::Error> {
        match message.kind() {
            Kind::State => Ok(Self::from(message.content())),
            _ => Err("snapshot requires a STATE message"),
        }
    }
}

impl From<&Board> for Snapshot {
    fn from(board: &Board) -> Self {
        Self(board.positions().into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::Player;
    use crate::gameplay::Roll;
    #[test]
    fn parse_with_trailing_comma() {
        let snapshot = Snapshot::from("alice=3,bob=10,");
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("alice"), Some(3));
        assert_eq!(snapshot.get("bob"), Some(10));
    }
    #[test]
    fn parse_keeps_ring_order() {
        let snapshot = Snapshot::from("zed=1,amy=2,");
        let names = snapshot.iter().map(|(n, _)| n).collect::<Vec<_>>();
        assert_eq!(names, vec!["zed", "amy"]);
    }
    #[test]
    fn parse_skips_malformed_pairs() {
        let snapshot = Snapshot::from("alice=3,,bob,carol=x, dave = 7 ");
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get("dave"), Some(7));
    }
    #[test]
    fn parse_empty() {
        assert!(Snapshot::from("").is_empty());
    }
    #[test]
    fn only_state_messages_convert() {
        assert!(Snapshot::try_from(&Message::state("a=1,")).is_ok());
        assert!(Snapshot::try_from(&Message::info("a=1,")).is_err());
    }
    #[test]
    fn board_and_wire_agree() {
        let mut board = Board::default();
        board.add(Player::from("alice"));
        board.add(Player::from("bob"));
        board.advance("alice", Roll::from(5));
        assert_eq!(Snapshot::from(&board), Snapshot::from(board.encode().as_str()));
    }
}
