//! Session manager: the single authoritative gateway between connected
//! peers and the turn engine.
//!
//! - [`Session`] — Owns board and peer directory, dispatches and broadcasts
//! - [`Lobby`] — Shared, locked handle to the session
//! - [`Message`] — Wire payload exchanged with peers
//! - [`Peer`] — Transport capability the session delivers through
//! - [`Actor`] — Polling task that plays a [`Bot`]
mod actor;
mod bot;
mod directory;
mod lobby;
mod message;
mod peer;
mod players;
mod session;
mod snapshot;

pub use actor::*;
pub use bot::*;
pub use directory::*;
pub use lobby::*;
pub use message::*;
pub use peer::*;
pub use players::*;
pub use session::*;
pub use snapshot::*;
