//! Turn/state engine: the ring of players, their positions, and whose turn it is.
mod board;
mod player;
mod roll;

pub use board::*;
pub use player::*;
pub use roll::*;
