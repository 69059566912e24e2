use crate::Arbitrary;
use crate::DIE_FACES;
use crate::EXTRA_TURN_ROLL;
use rand::Rng;

/// A single die result.
///
/// Random rolls are uniform over `1..=DIE_FACES`; explicit values of any
/// size can be constructed for bots and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Roll(u8);

impl Roll {
    pub fn value(&self) -> u8 {
        self.0
    }
    /// Whether this roll lets the same player act again.
    pub fn grants_extra_turn(&self) -> bool {
        self.0 == EXTRA_TURN_ROLL
    }
}

impl Arbitrary for Roll {
    fn random() -> Self {
        Self(rand::rng().random_range(1..=DIE_FACES))
    }
}

impl From<u8> for Roll {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Roll> for u8 {
    fn from(roll: Roll) -> Self {
        roll.0
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn random_rolls_stay_on_the_die() {
        (0..1000)
            .map(|_| Roll::random().value())
            .for_each(|v| assert!((1..=DIE_FACES).contains(&v)));
    }
    #[test]
    fn random_rolls_cover_every_face() {
        let seen = (0..1000)
            .map(|_| Roll::random().value())
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(seen.len(), DIE_FACES as usize);
    }
    #[test]
    fn only_six_grants_extra_turn() {
        assert!(Roll::from(6).grants_extra_turn());
        (0..6)
            .map(Roll::from)
            .for_each(|r| assert!(!r.grants_extra_turn()));
        assert!(!Roll::from(12).grants_extra_turn());
    }
}
