//! NPC records held by the registry.

use std::fmt;

use crate::types::{EventId, Mission, MissionId, NpcId, Portrait};

/// What an NPC at the bar does when approached.
#[derive(Debug, Clone)]
pub enum NpcKind {
    /// Offers a mission. Holds its own copy of the mission descriptor.
    Giver(Mission),
    /// Placed by a running mission; approaching calls back into it.
    ///
    /// `mission` is a key, not an owner: the mission engine decides how long
    /// the mission lives and should remove the NPC before dropping it.
    MissionRef {
        /// Mission that placed the NPC.
        mission: MissionId,
        /// Callback run on approach.
        func: String,
    },
    /// Placed by a running event; approaching calls back into it.
    EventRef {
        /// Event that placed the NPC.
        event: EventId,
        /// Callback run on approach.
        func: String,
    },
}

impl NpcKind {
    /// Payload-free tag of this kind.
    #[must_use]
    pub fn tag(&self) -> NpcKindTag {
        match self {
            Self::Giver(_) => NpcKindTag::Giver,
            Self::MissionRef { .. } => NpcKindTag::Mission,
            Self::EventRef { .. } => NpcKindTag::Event,
        }
    }
}

/// Kind of an NPC without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NpcKindTag {
    /// Mission giver.
    Giver,
    /// Mission-placed NPC.
    Mission,
    /// Event-placed NPC.
    Event,
}

impl fmt::Display for NpcKindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Giver => "giver",
            Self::Mission => "mission",
            Self::Event => "event",
        })
    }
}

/// Presentation data for an NPC placed by a mission or event script.
#[derive(Debug, Clone)]
pub struct NpcProfile {
    /// Display name.
    pub name: String,
    /// Ordering priority, lower first.
    pub priority: i32,
    /// Path of the portrait image to load.
    pub portrait: String,
    /// Description text.
    pub desc: String,
}

impl NpcProfile {
    /// Describe a scripted NPC.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        priority: i32,
        portrait: impl Into<String>,
        desc: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            priority,
            portrait: portrait.into(),
            desc: desc.into(),
        }
    }
}

/// A single NPC at the bar.
#[derive(Debug, Clone)]
pub struct NpcRecord {
    pub(crate) id: NpcId,
    pub(crate) priority: i32,
    pub(crate) name: String,
    pub(crate) portrait: Portrait,
    pub(crate) desc: String,
    pub(crate) kind: NpcKind,
}

impl NpcRecord {
    /// Build a giver record around its own mission copy.
    ///
    /// Name, description and portrait come from the mission; the portrait
    /// handle is duplicated, not reloaded.
    pub(crate) fn giver(id: NpcId, mission: Mission) -> Self {
        Self {
            id,
            priority: mission.priority,
            name: mission.npc.clone(),
            portrait: mission.portrait.clone(),
            desc: mission.desc.clone(),
            kind: NpcKind::Giver(mission),
        }
    }

    /// Build a scripted record from its profile and an already loaded portrait.
    pub(crate) fn scripted(id: NpcId, profile: NpcProfile, portrait: Portrait, kind: NpcKind) -> Self {
        Self {
            id,
            priority: profile.priority,
            name: profile.name,
            portrait,
            desc: profile.desc,
            kind,
        }
    }

    /// Registry-issued identifier.
    #[must_use]
    pub fn id(&self) -> NpcId {
        self.id
    }

    /// Ordering priority, lower first.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Portrait handle.
    #[must_use]
    pub fn portrait(&self) -> &Portrait {
        &self.portrait
    }

    /// Description text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.desc
    }

    /// Kind and kind-specific payload.
    #[must_use]
    pub fn kind(&self) -> &NpcKind {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn giver_copies_mission_fields() {
        let portrait = Portrait::new("gfx/portraits/merchant.png", 64, 64);
        let mission = Mission::new(
            MissionId(3),
            "Cargo Run",
            "Shifty Merchant",
            "A merchant looking for a pilot.",
            portrait.clone(),
            4,
        );
        let npc = NpcRecord::giver(NpcId(1), mission);

        assert_eq!(npc.name(), "Shifty Merchant");
        assert_eq!(npc.description(), "A merchant looking for a pilot.");
        assert_eq!(npc.priority(), 4);
        assert!(npc.portrait().same_texture(&portrait));
        assert_eq!(npc.kind().tag(), NpcKindTag::Giver);
        match npc.kind() {
            NpcKind::Giver(copy) => assert_eq!(copy.id, MissionId(3)),
            other => panic!("expected giver, got {other:?}"),
        }
    }

    #[test]
    fn kind_tags_display() {
        assert_eq!(NpcKindTag::Giver.to_string(), "giver");
        assert_eq!(NpcKindTag::Mission.to_string(), "mission");
        assert_eq!(NpcKindTag::Event.to_string(), "event");
    }
}
