//! Authoritative server core for a turn-based multiplayer board game.
//!
//! ## Architecture
//!
//! - [`gameplay`] — Player records, die rolls, and the [`gameplay::Board`] turn engine
//! - [`gameroom`] — Session manager, wire messages, peer directory, bots
//! - [`hosting`] — WebSocket transport bridging connections into the lobby
pub mod gameplay;
pub mod gameroom;
#[cfg(feature = "server")]
pub mod hosting;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Square index along the track, always in `[0, TRACK_LENGTH)`.
pub type Position = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for dice and tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// BOARD PARAMETERS
// ============================================================================
/// Number of squares on the circular track.
pub const TRACK_LENGTH: Position = 52;
/// Faces on the die. Rolls are uniform over `1..=DIE_FACES`.
pub const DIE_FACES: u8 = 6;
/// The roll that keeps the turn with the same player.
pub const EXTRA_TURN_ROLL: u8 = 6;
/// Sender name stamped on every server-originated message.
pub const SERVER: &str = "SERVER";
/// How often a bot driver checks whether it holds the turn.
pub const BOT_POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(500);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
/// Sessions hold no persistent state, so there is nothing to flush.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        log::warn!("interrupt received, closing session");
        std::process::exit(0);
    });
}
