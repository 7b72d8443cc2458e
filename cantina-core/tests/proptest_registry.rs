//! Property-Based Tests for the bar registry
//!
//! Random sequences of adds and removals against the registry's
//! bookkeeping invariants.

use proptest::prelude::*;

use cantina_core::sandbox::SandboxHost;
use cantina_core::{
    AvailabilityClass, EventId, LandingSite, Mission, MissionId, NpcId, NpcProfile, NpcRegistry,
    Portrait,
};

#[derive(Debug, Clone)]
enum Op {
    AddEvent { event: u32, priority: i32 },
    AddMission { mission: u32, priority: i32 },
    RemoveEvent { pick: usize, event: u32 },
    RemoveMission { pick: usize, mission: u32 },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..4u32, -5..5i32).prop_map(|(event, priority)| Op::AddEvent { event, priority }),
        (0..4u32, -5..5i32).prop_map(|(mission, priority)| Op::AddMission { mission, priority }),
        (0..16usize, 0..4u32).prop_map(|(pick, event)| Op::RemoveEvent { pick, event }),
        (0..16usize, 0..4u32).prop_map(|(pick, mission)| Op::RemoveMission { pick, mission }),
    ]
}

fn host() -> SandboxHost {
    SandboxHost::landed_at(LandingSite::new("Ulios", "Dvaer", "Dvaered"))
}

fn profile(priority: i32) -> NpcProfile {
    NpcProfile::new("Stranger", priority, "gfx/portraits/stranger.png", "A stranger.")
}

// ---------------------------------------------------------------------------
// Property: len() == successful adds − successful removals; ids increase
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn size_tracks_adds_and_removals(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut host = host();
        let mut reg = NpcRegistry::default();
        let mut issued: Vec<NpcId> = Vec::new();
        let mut removed = 0usize;

        for op in ops {
            match op {
                Op::AddEvent { event, priority } => {
                    let id = reg.add_event(&mut host, EventId(event), "talk", profile(priority))
                        .expect("landed add succeeds");
                    prop_assert!(issued.last().is_none_or(|last| id > *last));
                    issued.push(id);
                }
                Op::AddMission { mission, priority } => {
                    let id = reg.add_mission(&mut host, MissionId(mission), "talk", profile(priority))
                        .expect("landed add succeeds");
                    prop_assert!(issued.last().is_none_or(|last| id > *last));
                    issued.push(id);
                }
                Op::RemoveEvent { pick, event } => {
                    let id = issued.get(pick).copied().unwrap_or(NpcId(u32::MAX));
                    let before = reg.len();
                    if reg.remove_event(id, EventId(event)).is_ok() {
                        removed += 1;
                        prop_assert_eq!(reg.len(), before - 1);
                    } else {
                        prop_assert_eq!(reg.len(), before);
                    }
                }
                Op::RemoveMission { pick, mission } => {
                    let id = issued.get(pick).copied().unwrap_or(NpcId(u32::MAX));
                    let before = reg.len();
                    if reg.remove_mission(id, MissionId(mission)).is_ok() {
                        removed += 1;
                        prop_assert_eq!(reg.len(), before - 1);
                    } else {
                        prop_assert_eq!(reg.len(), before);
                    }
                }
            }
            prop_assert_eq!(reg.len(), issued.len() - removed);
        }
        reg.free_all(&mut host);
    }
}

// ---------------------------------------------------------------------------
// Property: generate() leaves the bar sorted, ties in insertion order
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn generate_sorts_stably(priorities in prop::collection::vec(-20..20i32, 0..40)) {
        let mut host = host();
        for (i, priority) in priorities.iter().enumerate() {
            let id = u32::try_from(i).expect("small index");
            host.offer(AvailabilityClass::Bar, Mission::new(
                MissionId(id),
                format!("Mission {id}"),
                format!("Giver {id}"),
                "Looking for a pilot.",
                Portrait::new("gfx/portraits/giver.png", 64, 64),
                *priority,
            ));
        }

        let mut reg = NpcRegistry::default();
        prop_assert_eq!(reg.generate(&mut host).expect("generate"), priorities.len());

        let records: Vec<_> = reg.iter().collect();
        for pair in records.windows(2) {
            prop_assert!(pair[0].priority() <= pair[1].priority());
            if pair[0].priority() == pair[1].priority() {
                prop_assert!(pair[0].id() < pair[1].id());
            }
        }
        reg.free_all(&mut host);
    }
}
