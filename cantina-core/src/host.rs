//! Collaborator traits for the subsystems the bar depends on.
//!
//! The registry never reaches for global game state. Everything it needs
//! from the landing screen, the mission engine, the event engine, the image
//! loader and the dialogue layer comes through these traits, bundled as
//! [`BarHost`]. [`crate::sandbox::SandboxHost`] implements all of them in
//! memory for tests and tooling.

use crate::error::Result;
use crate::types::{
    AcceptOutcome, AvailabilityClass, EventId, LandingSite, Mission, MissionId, Portrait,
};

/// Tells whether the player is currently landed, and where.
pub trait LandingContext {
    /// The current landing site, or `None` while in space.
    fn landing_site(&self) -> Option<&LandingSite>;

    /// Whether bar NPCs may be added right now.
    fn is_landed(&self) -> bool {
        self.landing_site().is_some()
    }
}

/// The mission engine.
pub trait MissionBoard {
    /// Missions offered at `site` for the given availability class.
    fn available_missions(&mut self, site: &LandingSite, class: AvailabilityClass)
    -> Vec<Mission>;

    /// Run the accept logic for a giver's mission copy.
    fn accept_mission(&mut self, mission: &mut Mission) -> AcceptOutcome;

    /// Release whatever the engine attached to a mission copy that is going away.
    fn cleanup_mission(&mut self, mission: Mission);

    /// Number of missions the player currently runs.
    fn active_missions(&self) -> usize;

    /// Invoke `func` in the script of a running mission.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CantinaError::CallbackFailed`] if the mission no
    /// longer exists or the callback errors.
    fn run_mission(&mut self, mission: MissionId, func: &str) -> Result<()>;
}

/// The event engine.
pub trait EventRunner {
    /// Invoke `func` in the script of a running event.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CantinaError::CallbackFailed`] if the event no
    /// longer exists or the callback errors.
    fn run_event(&mut self, event: EventId, func: &str) -> Result<()>;
}

/// The image subsystem.
pub trait PortraitLoader {
    /// Load a fresh portrait texture from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CantinaError::PortraitLoad`] if the image cannot be loaded.
    fn load_portrait(&mut self, path: &str) -> Result<Portrait>;
}

/// User-facing message channel.
pub trait AlertSink {
    /// Show `message` to the player.
    fn alert(&mut self, message: &str);
}

/// Everything the registry needs from the game.
pub trait BarHost: LandingContext + MissionBoard + EventRunner + PortraitLoader + AlertSink {}

impl<T> BarHost for T where T: LandingContext + MissionBoard + EventRunner + PortraitLoader + AlertSink {}
