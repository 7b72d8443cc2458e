//! In-memory host for tests, benchmarks and tooling.
//!
//! [`SandboxHost`] implements every collaborator trait without a game
//! behind it: mission offers are a plain list, accept outcomes are scripted,
//! callbacks and alerts are recorded for inspection.

use std::collections::VecDeque;

use crate::error::{CantinaError, Result};
use crate::host::{AlertSink, EventRunner, LandingContext, MissionBoard, PortraitLoader};
use crate::types::{
    AcceptOutcome, AvailabilityClass, EventId, LandingSite, Mission, MissionId, Portrait,
};

/// Side length of portraits produced by the sandbox loader.
pub const SANDBOX_PORTRAIT_SIZE: u32 = 64;

/// A self-contained [`crate::BarHost`].
#[derive(Debug, Default)]
pub struct SandboxHost {
    /// Where the player is landed, if anywhere.
    pub landing: Option<LandingSite>,
    /// Mission offers with the class they are available in.
    pub offers: Vec<(AvailabilityClass, Mission)>,
    /// Outcomes returned by successive accepts. [`AcceptOutcome::Accepted`] once exhausted.
    pub accept_script: VecDeque<AcceptOutcome>,
    /// Missions the player currently runs.
    pub active_missions: usize,
    /// Missions passed to accept, in order.
    pub accept_log: Vec<MissionId>,
    /// Missions passed to cleanup, in order.
    pub cleanup_log: Vec<MissionId>,
    /// Mission callbacks invoked, in order.
    pub mission_calls: Vec<(MissionId, String)>,
    /// Event callbacks invoked, in order.
    pub event_calls: Vec<(EventId, String)>,
    /// Missions whose callbacks fail as if the mission had ended.
    pub ended_missions: Vec<MissionId>,
    /// Events whose callbacks fail as if the event had ended.
    pub ended_events: Vec<EventId>,
    /// Portrait paths that fail to load.
    pub missing_portraits: Vec<String>,
    /// Number of successful portrait loads.
    pub portrait_loads: usize,
    /// Alerts shown to the player.
    pub alerts: Vec<String>,
}

impl SandboxHost {
    /// A host that is in space, with nothing on offer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A host landed at `site`.
    #[must_use]
    pub fn landed_at(site: LandingSite) -> Self {
        Self {
            landing: Some(site),
            ..Self::default()
        }
    }

    /// Leave the landing site.
    pub fn take_off(&mut self) {
        self.landing = None;
    }

    /// Offer `mission` in `class`.
    pub fn offer(&mut self, class: AvailabilityClass, mission: Mission) {
        self.offers.push((class, mission));
    }

    /// Queue the outcome of the next accept.
    pub fn script_accept(&mut self, outcome: AcceptOutcome) {
        self.accept_script.push_back(outcome);
    }
}

impl LandingContext for SandboxHost {
    fn landing_site(&self) -> Option<&LandingSite> {
        self.landing.as_ref()
    }
}

impl MissionBoard for SandboxHost {
    fn available_missions(
        &mut self,
        site: &LandingSite,
        class: AvailabilityClass,
    ) -> Vec<Mission> {
        self.offers
            .iter()
            .filter(|(c, _)| *c == class)
            .filter(|(_, m)| m.faction.as_ref().is_none_or(|f| *f == site.faction))
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn accept_mission(&mut self, mission: &mut Mission) -> AcceptOutcome {
        self.accept_log.push(mission.id);
        let outcome = self
            .accept_script
            .pop_front()
            .unwrap_or(AcceptOutcome::Accepted);
        if outcome == AcceptOutcome::Accepted {
            self.active_missions += 1;
        }
        outcome
    }

    fn cleanup_mission(&mut self, mission: Mission) {
        self.cleanup_log.push(mission.id);
    }

    fn active_missions(&self) -> usize {
        self.active_missions
    }

    fn run_mission(&mut self, mission: MissionId, func: &str) -> Result<()> {
        if self.ended_missions.contains(&mission) {
            return Err(CantinaError::CallbackFailed {
                target: mission.to_string(),
                func: func.to_string(),
                reason: "mission is no longer running".to_string(),
            });
        }
        self.mission_calls.push((mission, func.to_string()));
        Ok(())
    }
}

impl EventRunner for SandboxHost {
    fn run_event(&mut self, event: EventId, func: &str) -> Result<()> {
        if self.ended_events.contains(&event) {
            return Err(CantinaError::CallbackFailed {
                target: event.to_string(),
                func: func.to_string(),
                reason: "event is no longer running".to_string(),
            });
        }
        self.event_calls.push((event, func.to_string()));
        Ok(())
    }
}

impl PortraitLoader for SandboxHost {
    fn load_portrait(&mut self, path: &str) -> Result<Portrait> {
        if path.is_empty() || self.missing_portraits.iter().any(|p| p == path) {
            return Err(CantinaError::PortraitLoad {
                path: path.to_string(),
                reason: "no such image".to_string(),
            });
        }
        self.portrait_loads += 1;
        Ok(Portrait::new(
            path,
            SANDBOX_PORTRAIT_SIZE,
            SANDBOX_PORTRAIT_SIZE,
        ))
    }
}

impl AlertSink for SandboxHost {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> LandingSite {
        LandingSite::new("Ulios", "Dvaer", "Dvaered")
    }

    fn mission(id: u32, faction: Option<&str>) -> Mission {
        let m = Mission::new(
            MissionId(id),
            format!("Mission {id}"),
            "Pilot",
            "A pilot.",
            Portrait::new("gfx/portraits/pilot.png", 64, 64),
            5,
        );
        match faction {
            Some(f) => m.with_faction(f),
            None => m,
        }
    }

    #[test]
    fn offers_filter_by_class_and_faction() {
        let mut host = SandboxHost::landed_at(site());
        host.offer(AvailabilityClass::Bar, mission(1, None));
        host.offer(AvailabilityClass::Computer, mission(2, None));
        host.offer(AvailabilityClass::Bar, mission(3, Some("Empire")));
        host.offer(AvailabilityClass::Bar, mission(4, Some("Dvaered")));

        let ids: Vec<_> = host
            .available_missions(&site(), AvailabilityClass::Bar)
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![MissionId(1), MissionId(4)]);
    }

    #[test]
    fn scripted_accepts_then_default() {
        let mut host = SandboxHost::new();
        host.script_accept(AcceptOutcome::Declined);
        let mut m = mission(1, None);
        assert_eq!(host.accept_mission(&mut m), AcceptOutcome::Declined);
        assert_eq!(host.accept_mission(&mut m), AcceptOutcome::Accepted);
        assert_eq!(host.active_missions(), 1);
        assert_eq!(host.accept_log, vec![MissionId(1), MissionId(1)]);
    }

    #[test]
    fn ended_targets_fail_callbacks() {
        let mut host = SandboxHost::new();
        host.ended_events.push(EventId(2));
        assert!(host.run_event(EventId(1), "approach").is_ok());
        assert!(matches!(
            host.run_event(EventId(2), "approach"),
            Err(CantinaError::CallbackFailed { .. })
        ));
        assert_eq!(host.event_calls, vec![(EventId(1), "approach".to_string())]);
    }

    #[test]
    fn missing_portrait_fails_to_load() {
        let mut host = SandboxHost::new();
        host.missing_portraits.push("gfx/none.png".to_string());
        assert!(host.load_portrait("gfx/none.png").is_err());
        assert!(host.load_portrait("").is_err());
        assert!(host.load_portrait("gfx/some.png").is_ok());
        assert_eq!(host.portrait_loads, 1);
    }
}
