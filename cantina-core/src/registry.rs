//! The bar NPC registry.
//!
//! An ordered list of [`NpcRecord`]s. Lookup by id is a linear scan: a bar
//! holds a handful of characters, and the display order is what the screen
//! indexes into.

use tracing::{debug, info, warn};

use crate::config::CantinaConfig;
use crate::error::{CantinaError, Result};
use crate::host::{BarHost, LandingContext, MissionBoard, PortraitLoader};
use crate::npc::{NpcKind, NpcKindTag, NpcProfile, NpcRecord};
use crate::types::{AcceptOutcome, AvailabilityClass, EventId, Mission, MissionId, NpcId, Portrait};

/// What happened to an NPC after the player approached it.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approach {
    /// The NPC was used up and has left the bar.
    Destroyed,
    /// The NPC is still at the bar.
    Retained,
}

/// NPCs at the spaceport bar, in display order.
///
/// Owned by the landing screen for as long as the player is landed. Call
/// [`NpcRegistry::free_all`] on take-off so giver missions get cleaned up.
#[derive(Debug, Default)]
pub struct NpcRegistry {
    npcs: Vec<NpcRecord>,
    last_id: u32,
    config: CantinaConfig,
}

impl NpcRegistry {
    /// Create an empty registry. Nothing is allocated until the first add.
    #[must_use]
    pub fn new(config: CantinaConfig) -> Self {
        Self {
            npcs: Vec::new(),
            last_id: 0,
            config,
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &CantinaConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Adding
    // -----------------------------------------------------------------------

    /// Add a mission giver holding its own copy of `mission`.
    ///
    /// # Errors
    /// Returns [`CantinaError::NotLanded`] if the player is not landed.
    pub fn add_giver<H>(&mut self, host: &H, mission: &Mission) -> Result<NpcId>
    where
        H: LandingContext + ?Sized,
    {
        if !host.is_landed() {
            return Err(CantinaError::NotLanded);
        }
        let id = self.next_id();
        Ok(self.insert(NpcRecord::giver(id, mission.clone())))
    }

    /// Add an NPC placed by a running mission.
    ///
    /// Approaching it runs `func` in the mission's script. The mission is
    /// referenced by id only and must remove the NPC before it ends.
    ///
    /// # Errors
    /// Returns [`CantinaError::NotLanded`] if the player is not landed, or
    /// [`CantinaError::PortraitLoad`] if the portrait cannot be loaded.
    pub fn add_mission<H>(
        &mut self,
        host: &mut H,
        mission: MissionId,
        func: &str,
        profile: NpcProfile,
    ) -> Result<NpcId>
    where
        H: LandingContext + PortraitLoader + ?Sized,
    {
        let kind = NpcKind::MissionRef {
            mission,
            func: func.to_string(),
        };
        self.add_scripted(host, profile, kind)
    }

    /// Add an NPC placed by a running event.
    ///
    /// # Errors
    /// Returns [`CantinaError::NotLanded`] if the player is not landed, or
    /// [`CantinaError::PortraitLoad`] if the portrait cannot be loaded.
    pub fn add_event<H>(
        &mut self,
        host: &mut H,
        event: EventId,
        func: &str,
        profile: NpcProfile,
    ) -> Result<NpcId>
    where
        H: LandingContext + PortraitLoader + ?Sized,
    {
        let kind = NpcKind::EventRef {
            event,
            func: func.to_string(),
        };
        self.add_scripted(host, profile, kind)
    }

    fn add_scripted<H>(&mut self, host: &mut H, profile: NpcProfile, kind: NpcKind) -> Result<NpcId>
    where
        H: LandingContext + PortraitLoader + ?Sized,
    {
        if !host.is_landed() {
            return Err(CantinaError::NotLanded);
        }
        let portrait = host.load_portrait(&profile.portrait)?;
        let id = self.next_id();
        Ok(self.insert(NpcRecord::scripted(id, profile, portrait, kind)))
    }

    /// Populate the bar with givers for every bar mission on offer here.
    ///
    /// NPCs already present are kept. The whole list is re-sorted afterwards.
    /// Returns the number of givers added.
    ///
    /// # Errors
    /// Returns [`CantinaError::NotLanded`] if the player is not landed.
    pub fn generate<H>(&mut self, host: &mut H) -> Result<usize>
    where
        H: LandingContext + MissionBoard + ?Sized,
    {
        let site = host.landing_site().cloned().ok_or(CantinaError::NotLanded)?;
        let missions = host.available_missions(&site, AvailabilityClass::Bar);
        let added = missions.len();

        for mission in missions {
            let id = self.next_id();
            self.insert(NpcRecord::giver(id, mission));
        }
        self.sort();

        info!(site = %site, added, total = self.npcs.len(), "Generated bar NPCs");
        Ok(added)
    }

    /// Order NPCs by ascending priority.
    ///
    /// Stable: NPCs of equal priority keep their insertion order.
    pub fn sort(&mut self) {
        self.npcs.sort_by_key(NpcRecord::priority);
    }

    fn next_id(&mut self) -> NpcId {
        self.last_id += 1;
        NpcId(self.last_id)
    }

    fn insert(&mut self, npc: NpcRecord) -> NpcId {
        if self.npcs.capacity() == 0 {
            self.npcs.reserve(self.config.bar.initial_capacity);
        }
        let id = npc.id;
        debug!(
            id = %id,
            kind = %npc.kind.tag(),
            priority = npc.priority,
            name = %npc.name,
            "NPC added to bar"
        );
        self.npcs.push(npc);
        id
    }

    // -----------------------------------------------------------------------
    // Removing
    // -----------------------------------------------------------------------

    /// Remove an event NPC on behalf of the event that placed it.
    ///
    /// Nothing changes if any check fails.
    ///
    /// # Errors
    /// Returns [`CantinaError::NpcNotFound`] for an unknown id,
    /// [`CantinaError::KindMismatch`] if the NPC is not an event NPC, or
    /// [`CantinaError::OwnerMismatch`] if it belongs to another event.
    pub fn remove_event(&mut self, id: NpcId, event: EventId) -> Result<()> {
        let index = self.position(id).ok_or(CantinaError::NpcNotFound(id))?;
        match &self.npcs[index].kind {
            NpcKind::EventRef { event: owner, .. } if *owner == event => {}
            NpcKind::EventRef { event: owner, .. } => {
                warn!(id = %id, owner = %owner, requested = %event, "Event NPC removal by non-owner");
                return Err(CantinaError::OwnerMismatch { id });
            }
            other => {
                return Err(CantinaError::KindMismatch {
                    id,
                    expected: NpcKindTag::Event,
                    found: other.tag(),
                });
            }
        }
        self.npcs.remove(index);
        debug!(id = %id, event = %event, "Event NPC removed");
        Ok(())
    }

    /// Remove a mission NPC on behalf of the mission that placed it.
    ///
    /// Nothing changes if any check fails.
    ///
    /// # Errors
    /// Returns [`CantinaError::NpcNotFound`] for an unknown id,
    /// [`CantinaError::KindMismatch`] if the NPC is not a mission NPC, or
    /// [`CantinaError::OwnerMismatch`] if it belongs to another mission.
    pub fn remove_mission(&mut self, id: NpcId, mission: MissionId) -> Result<()> {
        let index = self.position(id).ok_or(CantinaError::NpcNotFound(id))?;
        match &self.npcs[index].kind {
            NpcKind::MissionRef { mission: owner, .. } if *owner == mission => {}
            NpcKind::MissionRef { mission: owner, .. } => {
                warn!(id = %id, owner = %owner, requested = %mission, "Mission NPC removal by non-owner");
                return Err(CantinaError::OwnerMismatch { id });
            }
            other => {
                return Err(CantinaError::KindMismatch {
                    id,
                    expected: NpcKindTag::Mission,
                    found: other.tag(),
                });
            }
        }
        self.npcs.remove(index);
        debug!(id = %id, mission = %mission, "Mission NPC removed");
        Ok(())
    }

    /// Remove every NPC, keeping the allocated storage.
    pub fn clear<M>(&mut self, host: &mut M)
    where
        M: MissionBoard + ?Sized,
    {
        for npc in self.npcs.drain(..) {
            Self::release(host, npc);
        }
    }

    /// Remove every NPC and release the storage.
    ///
    /// Must be called when the player leaves the landing site. The id
    /// generator keeps counting.
    pub fn free_all<M>(&mut self, host: &mut M)
    where
        M: MissionBoard + ?Sized,
    {
        let count = self.npcs.len();
        self.clear(host);
        self.npcs = Vec::new();
        info!(released = count, "Bar NPCs freed");
    }

    fn release<M>(host: &mut M, npc: NpcRecord)
    where
        M: MissionBoard + ?Sized,
    {
        match npc.kind {
            NpcKind::Giver(mission) => host.cleanup_mission(mission),
            NpcKind::MissionRef { .. } | NpcKind::EventRef { .. } => {}
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Number of NPCs at the bar.
    #[must_use]
    pub fn len(&self) -> usize {
        self.npcs.len()
    }

    /// Whether the bar is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.npcs.is_empty()
    }

    /// Allocated slots. Zero before the first add and after [`Self::free_all`].
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.npcs.capacity()
    }

    /// Name of the NPC at `index`.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.npcs.get(index).map(NpcRecord::name)
    }

    /// Portrait of the NPC at `index`.
    #[must_use]
    pub fn portrait(&self, index: usize) -> Option<&Portrait> {
        self.npcs.get(index).map(NpcRecord::portrait)
    }

    /// Description of the NPC at `index`.
    #[must_use]
    pub fn description(&self, index: usize) -> Option<&str> {
        self.npcs.get(index).map(NpcRecord::description)
    }

    /// Kind of the NPC at `index`.
    #[must_use]
    pub fn kind_of(&self, index: usize) -> Option<NpcKindTag> {
        self.npcs.get(index).map(|npc| npc.kind.tag())
    }

    /// Look up an NPC by id.
    #[must_use]
    pub fn get(&self, id: NpcId) -> Option<&NpcRecord> {
        self.npcs.iter().find(|npc| npc.id == id)
    }

    /// Display index of an NPC.
    #[must_use]
    pub fn position(&self, id: NpcId) -> Option<usize> {
        self.npcs.iter().position(|npc| npc.id == id)
    }

    /// NPCs in display order.
    pub fn iter(&self) -> impl Iterator<Item = &NpcRecord> {
        self.npcs.iter()
    }

    /// Append copies of up to `max` names to `out`. Returns how many were written.
    pub fn write_names(&self, out: &mut Vec<String>, max: usize) -> usize {
        let before = out.len();
        out.extend(self.npcs.iter().take(max).map(|npc| npc.name.clone()));
        out.len() - before
    }

    /// Append up to `max` portrait handles to `out`. Returns how many were written.
    ///
    /// Handles share the NPCs' textures; nothing is reloaded.
    pub fn write_portraits(&self, out: &mut Vec<Portrait>, max: usize) -> usize {
        let before = out.len();
        out.extend(self.npcs.iter().take(max).map(|npc| npc.portrait.clone()));
        out.len() - before
    }

    // -----------------------------------------------------------------------
    // Approach
    // -----------------------------------------------------------------------

    /// The player walks up to the NPC at `index`.
    ///
    /// Givers offer their mission and leave once it is taken, finished or
    /// broken. Mission and event NPCs call back into their script and stay;
    /// their owner removes them.
    ///
    /// # Errors
    /// Returns [`CantinaError::IndexOutOfRange`] for a bad index,
    /// [`CantinaError::MissionSlotsFull`] if a giver is approached with no
    /// free mission slot, or the callback's error for scripted NPCs.
    pub fn approach<H>(&mut self, host: &mut H, index: usize) -> Result<Approach>
    where
        H: BarHost + ?Sized,
    {
        let len = self.npcs.len();
        let Some(npc) = self.npcs.get_mut(index) else {
            return Err(CantinaError::IndexOutOfRange { index, len });
        };
        let id = npc.id;

        match &mut npc.kind {
            NpcKind::Giver(mission) => {
                let limit = self.config.bar.max_active_missions;
                let active = host.active_missions();
                if active >= limit {
                    host.alert(&self.config.messages.too_many_missions);
                    warn!(id = %id, active, limit, "Giver approached with no free mission slot");
                    return Err(CantinaError::MissionSlotsFull { active, limit });
                }

                let outcome = host.accept_mission(mission);
                if !outcome.consumes_giver() {
                    debug!(id = %id, "Mission offer declined");
                    return Ok(Approach::Retained);
                }
                if outcome == AcceptOutcome::Failed {
                    warn!(id = %id, "Mission failed during accept");
                }

                let npc = self.npcs.remove(index);
                Self::release(host, npc);
                debug!(id = %id, ?outcome, "Giver left the bar");
                Ok(Approach::Destroyed)
            }
            NpcKind::MissionRef { mission, func } => {
                host.run_mission(*mission, func).inspect_err(|e| {
                    warn!(id = %id, error = %e, "Mission NPC callback failed");
                })?;
                Ok(Approach::Retained)
            }
            NpcKind::EventRef { event, func } => {
                host.run_event(*event, func).inspect_err(|e| {
                    warn!(id = %id, error = %e, "Event NPC callback failed");
                })?;
                Ok(Approach::Retained)
            }
        }
    }
}

impl Drop for NpcRegistry {
    fn drop(&mut self) {
        if !self.npcs.is_empty() {
            warn!(
                remaining = self.npcs.len(),
                "Bar registry dropped without free_all; giver missions were not cleaned up"
            );
        }
    }
}
