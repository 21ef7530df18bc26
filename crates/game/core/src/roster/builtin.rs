//! Shipped archetype data.
//!
//! Locomotion loops run at 12 sprite frames per second. Attack stages carry
//! their own total durations.

use crate::roster::{
    ArchetypeDefinition, ArchetypeId, AttackDefinition, LocomotionTimelines, MoveId, Timeline,
};

const LOCOMOTION_FPS: f32 = 12.0;

fn locomotion(idle: u8, walk: u8, back_walk: u8) -> LocomotionTimelines {
    LocomotionTimelines {
        idle: Timeline::at_fps(idle, LOCOMOTION_FPS),
        walk: Timeline::at_fps(walk, LOCOMOTION_FPS),
        back_walk: Timeline::at_fps(back_walk, LOCOMOTION_FPS),
    }
}

const fn stage(frame_count: u8, duration: f32) -> Timeline {
    Timeline::new(frame_count, duration)
}

fn archetype(
    id: ArchetypeId,
    move_speed: f32,
    locomotion: LocomotionTimelines,
    moves: impl IntoIterator<Item = AttackDefinition>,
) -> ArchetypeDefinition {
    ArchetypeDefinition {
        id,
        move_speed,
        locomotion,
        moves: moves.into_iter().collect(),
    }
}

pub fn priest() -> ArchetypeDefinition {
    archetype(
        ArchetypeId::Priest,
        250.0,
        locomotion(4, 8, 8),
        [
            AttackDefinition::single(MoveId::FastMiddle, stage(6, 0.6)),
            AttackDefinition::chain(MoveId::StrongMiddle, &[stage(6, 0.9), stage(8, 1.2)]),
            AttackDefinition::single(MoveId::StrongUpper, stage(12, 1.8)).with_reach_multiplier(2.0),
            AttackDefinition::single(MoveId::StrongLower, stage(9, 1.35)),
            AttackDefinition::single(MoveId::Rage, stage(18, 1.0)),
        ],
    )
}

pub fn thief() -> ArchetypeDefinition {
    archetype(
        ArchetypeId::Thief,
        300.0,
        locomotion(6, 6, 7),
        [
            AttackDefinition::chain(
                MoveId::FastMiddle,
                &[stage(6, 0.6), stage(6, 0.6), stage(6, 0.6)],
            ),
            AttackDefinition::chain(MoveId::StrongMiddle, &[stage(5, 0.75), stage(5, 0.75)]),
            AttackDefinition::chain(MoveId::StrongUpper, &[stage(5, 0.75), stage(5, 0.75)]),
            AttackDefinition::single(MoveId::StrongLower, stage(4, 0.6)),
        ],
    )
}

pub fn fighter() -> ArchetypeDefinition {
    archetype(
        ArchetypeId::Fighter,
        300.0,
        locomotion(4, 8, 5),
        [
            AttackDefinition::chain(
                MoveId::FastMiddle,
                &[stage(4, 0.4), stage(3, 0.3), stage(3, 0.3)],
            ),
            AttackDefinition::single(MoveId::FastLower, stage(4, 0.4)),
            AttackDefinition::single(MoveId::FastUpper, stage(6, 0.6)),
            AttackDefinition::single(MoveId::StrongMiddle, stage(5, 0.75)).with_chainable(true),
            AttackDefinition::chain(MoveId::StrongUpper, &[stage(4, 0.6), stage(4, 0.6)]),
            AttackDefinition::single(MoveId::StrongLower, stage(5, 0.75)),
        ],
    )
}
