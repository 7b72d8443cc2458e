//! Error types for the cantina core library.

use thiserror::Error;

use crate::npc::NpcKindTag;
use crate::types::NpcId;

/// Top-level error type for all registry operations.
#[derive(Error, Debug)]
pub enum CantinaError {
    /// The player is not landed, so the bar cannot be populated.
    #[error("Not landed: bar NPCs are only available at a landing site")]
    NotLanded,

    /// No NPC with the given ID is at the bar.
    #[error("NPC not found: {0}")]
    NpcNotFound(NpcId),

    /// Index outside of the bar listing.
    #[error("NPC index {index} out of range (bar holds {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of NPCs at the bar.
        len: usize,
    },

    /// The NPC exists but is of a different kind than the operation expects.
    #[error("NPC {id} is a {found} NPC, expected {expected}")]
    KindMismatch {
        /// The NPC that was looked up.
        id: NpcId,
        /// Kind the operation works on.
        expected: NpcKindTag,
        /// Kind actually stored.
        found: NpcKindTag,
    },

    /// The NPC does not belong to the mission or event asking for it.
    #[error("NPC {id} belongs to a different owner")]
    OwnerMismatch {
        /// The NPC that was looked up.
        id: NpcId,
    },

    /// The player has no free mission slot left.
    #[error("Mission slots full: {active} active (limit: {limit})")]
    MissionSlotsFull {
        /// Missions the player currently runs.
        active: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// The image subsystem could not load a portrait.
    #[error("Failed to load portrait '{path}': {reason}")]
    PortraitLoad {
        /// Requested portrait path.
        path: String,
        /// Loader-provided reason.
        reason: String,
    },

    /// A mission or event callback reported an error.
    #[error("Callback {target}::{func} failed: {reason}")]
    CallbackFailed {
        /// Mission or event the callback belongs to.
        target: String,
        /// Callback function name.
        func: String,
        /// Runtime-provided reason.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, CantinaError>;
