//! # Cantina Core Library
//!
//! The NPC registry behind a spaceport bar screen.
//!
//! When the player lands, the bar fills up with characters they can talk to:
//!
//! - **Mission givers**: generated from the missions available at the bar,
//!   each holding its own copy of the mission it offers
//! - **Mission NPCs**: placed by a running mission script, with a callback
//! - **Event NPCs**: placed by a running event script, with a callback
//!
//! The [`NpcRegistry`] keeps these records ordered by priority, answers the
//! bar screen's queries and dispatches the player's "approach" to the
//! mission or event runtime. Everything outside the registry (mission
//! engine, event engine, textures, dialogue) is reached through the
//! collaborator traits in [`host`].
//!
//! ## Lifecycle
//!
//! ```text
//!   land ──► generate() ──► approach() / add_*() / remove_*() ──► free_all() ──► take off
//! ```

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod host;
pub mod npc;
pub mod registry;
pub mod sandbox;
pub mod types;

pub use config::CantinaConfig;
pub use error::CantinaError;
pub use host::BarHost;
pub use npc::{NpcKind, NpcKindTag, NpcProfile, NpcRecord};
pub use registry::{Approach, NpcRegistry};
pub use types::*;
