//! Core type definitions shared by the registry and its collaborators.

use std::fmt;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Identity Types
// ---------------------------------------------------------------------------

/// Identifier of an NPC at the bar.
///
/// Issued by [`crate::NpcRegistry`] on insertion. Never zero, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NpcId(pub u32);

/// Identifier of a mission, as assigned by the mission subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MissionId(pub u32);

/// Identifier of a running event, as assigned by the event subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(pub u32);

impl fmt::Display for NpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "npc#{}", self.0)
    }
}

impl fmt::Display for MissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mission#{}", self.0)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event#{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Portraits
// ---------------------------------------------------------------------------

/// Texture data behind a portrait, as produced by the image subsystem.
#[derive(Debug, PartialEq, Eq)]
pub struct Texture {
    /// Path the texture was loaded from.
    pub path: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Reference-counted handle to a portrait texture.
///
/// Cloning duplicates the handle without reloading the image; the texture is
/// released when the last handle is dropped.
#[derive(Debug, Clone)]
pub struct Portrait(Arc<Texture>);

impl Portrait {
    /// Wrap freshly loaded texture data.
    #[must_use]
    pub fn new(path: impl Into<String>, width: u32, height: u32) -> Self {
        Self(Arc::new(Texture {
            path: path.into(),
            width,
            height,
        }))
    }

    /// Path the texture was loaded from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.0.path
    }

    /// The underlying texture.
    #[must_use]
    pub fn texture(&self) -> &Texture {
        &self.0
    }

    /// Number of live handles sharing this texture.
    #[must_use]
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    /// Whether both handles point at the same loaded texture.
    #[must_use]
    pub fn same_texture(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

// ---------------------------------------------------------------------------
// Missions
// ---------------------------------------------------------------------------

/// Where a mission can be offered to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvailabilityClass {
    /// Never offered automatically.
    None,
    /// Mission computer listing.
    Computer,
    /// Spaceport bar, through a giver NPC.
    Bar,
    /// Triggered when landing.
    Land,
    /// Triggered when entering a system.
    Enter,
    /// Triggered in space.
    Space,
}

/// A mission offer as produced by the mission subsystem.
///
/// Giver NPCs hold their own clone of this descriptor.
#[derive(Debug, Clone)]
pub struct Mission {
    /// Mission identity.
    pub id: MissionId,
    /// Mission title.
    pub name: String,
    /// Display name of the NPC offering the mission.
    pub npc: String,
    /// Description shown when the giver is selected.
    pub desc: String,
    /// Portrait of the giver.
    pub portrait: Portrait,
    /// Bar ordering priority, lower first.
    pub priority: i32,
    /// Faction issuing the mission, if any.
    pub faction: Option<String>,
}

impl Mission {
    /// Create a mission offer without an issuing faction.
    #[must_use]
    pub fn new(
        id: MissionId,
        name: impl Into<String>,
        npc: impl Into<String>,
        desc: impl Into<String>,
        portrait: Portrait,
        priority: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            npc: npc.into(),
            desc: desc.into(),
            portrait,
            priority,
            faction: None,
        }
    }

    /// Set the issuing faction.
    #[must_use]
    pub fn with_faction(mut self, faction: impl Into<String>) -> Self {
        self.faction = Some(faction.into());
        self
    }
}

/// Result of asking the mission subsystem to accept a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptOutcome {
    /// The player took the mission.
    Accepted,
    /// The mission finished immediately (e.g. it ran to completion on accept).
    AcceptedAlt,
    /// The mission errored while being accepted.
    Failed,
    /// The player turned the offer down.
    Declined,
}

impl AcceptOutcome {
    /// Whether this outcome uses up the giver offering the mission.
    #[must_use]
    pub fn consumes_giver(self) -> bool {
        !matches!(self, Self::Declined)
    }
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// The place the player is currently landed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingSite {
    /// Planet or station name.
    pub planet: String,
    /// Star system name.
    pub system: String,
    /// Faction controlling the planet.
    pub faction: String,
}

impl LandingSite {
    /// Describe a landing site.
    #[must_use]
    pub fn new(
        planet: impl Into<String>,
        system: impl Into<String>,
        faction: impl Into<String>,
    ) -> Self {
        Self {
            planet: planet.into(),
            system: system.into(),
            faction: faction.into(),
        }
    }
}

impl fmt::Display for LandingSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.planet, self.system, self.faction)
    }
}
