//! Combatant physics: position, velocity, gravity, and arena bounds.

use crate::config::{ArenaConfig, BodyConfig};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in arena space. `y` grows upward from the ground.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hitbox {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Hitbox {
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.bottom < other.top
            && other.bottom < self.top
    }

    /// Horizontal penetration depth, zero when the boxes do not overlap.
    pub fn overlap_x(&self, other: &Hitbox) -> f32 {
        if !self.overlaps(other) {
            return 0.0;
        }
        self.right.min(other.right) - self.left.max(other.left)
    }
}

/// Physical body of one combatant, anchored at the feet.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub grounded: bool,
    /// Horizontal deceleration (px/s²) applied to `velocity.x`.
    pub drag: f32,
}

impl CombatantBody {
    pub fn grounded_at(x: f32, ground_level: f32) -> Self {
        Self {
            position: Vec2::new(x, ground_level),
            velocity: Vec2::ZERO,
            grounded: true,
            drag: 0.0,
        }
    }

    /// Advances one step. Returns `true` on the step the body touches down.
    pub fn integrate(&mut self, dt: f32, arena: &ArenaConfig) -> bool {
        if !self.grounded {
            self.velocity.y -= arena.gravity * dt;
        }

        self.position.x += self.velocity.x * dt;
        self.position.y += self.velocity.y * dt;
        self.apply_drag(dt);

        let clamped = arena.clamp_x(self.position.x);
        if clamped != self.position.x {
            self.position.x = clamped;
            self.velocity.x = 0.0;
        }

        if self.position.y <= arena.ground_level {
            self.position.y = arena.ground_level;
            if !self.grounded {
                self.grounded = true;
                self.velocity.y = 0.0;
                return true;
            }
            self.velocity.y = self.velocity.y.max(0.0);
        }
        false
    }

    fn apply_drag(&mut self, dt: f32) {
        if self.velocity.x == 0.0 || self.drag <= 0.0 {
            return;
        }
        let step = self.drag * dt;
        if self.velocity.x.abs() <= step {
            self.velocity.x = 0.0;
        } else {
            self.velocity.x -= step * self.velocity.x.signum();
        }
    }

    /// Launches the body into the air.
    pub fn apply_impulse(&mut self, vx: f32, vy: f32, drag: f32) {
        self.velocity = Vec2::new(vx, vy);
        self.drag = drag;
        self.grounded = false;
    }

    /// Ground knockback: horizontal slide without leaving the floor.
    pub fn slide(&mut self, vx: f32, drag: f32) {
        self.velocity.x = vx;
        self.drag = drag;
    }

    /// Moves horizontally under player control, staying inside the arena.
    pub fn walk(&mut self, dx: f32, arena: &ArenaConfig) {
        self.position.x = arena.clamp_x(self.position.x + dx);
    }

    pub fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
        self.drag = 0.0;
    }

    pub fn hitbox(&self, body: &BodyConfig) -> Hitbox {
        Hitbox {
            left: self.position.x - body.half_width,
            right: self.position.x + body.half_width,
            bottom: self.position.y,
            top: self.position.y + body.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn launched_body_lands_and_snaps_to_ground() {
        let arena = ArenaConfig::default();
        let mut body = CombatantBody::grounded_at(640.0, arena.ground_level);
        body.apply_impulse(180.0, 720.0, 120.0);
        assert!(!body.grounded);

        let mut landed_at = None;
        for frame in 0..600 {
            if body.integrate(DT, &arena) {
                landed_at = Some(frame);
                break;
            }
            assert!(body.position.y >= arena.ground_level);
        }

        assert!(landed_at.is_some(), "body never landed");
        assert!(body.grounded);
        assert_eq!(body.position.y, arena.ground_level);
        assert_eq!(body.velocity.y, 0.0);
        assert!(body.position.x > 640.0);
    }

    #[test]
    fn position_clamped_to_arena_margins() {
        let arena = ArenaConfig::default();
        let mut body = CombatantBody::grounded_at(arena.max_x() - 5.0, arena.ground_level);
        body.slide(2000.0, 0.0);
        body.integrate(DT, &arena);
        assert_eq!(body.position.x, arena.max_x());
        assert_eq!(body.velocity.x, 0.0);

        body.walk(-5000.0, &arena);
        assert_eq!(body.position.x, arena.min_x());
    }

    #[test]
    fn ground_slide_decelerates_to_rest() {
        let arena = ArenaConfig::default();
        let mut body = CombatantBody::grounded_at(640.0, arena.ground_level);
        body.slide(150.0, 900.0);
        for _ in 0..30 {
            assert!(!body.integrate(DT, &arena));
        }
        assert_eq!(body.velocity.x, 0.0);
        assert!(body.grounded);
    }

    #[test]
    fn hitboxes_overlap_only_when_intersecting() {
        let config = BodyConfig::default();
        let a = CombatantBody::grounded_at(100.0, 0.0).hitbox(&config);
        let b = CombatantBody::grounded_at(170.0, 0.0).hitbox(&config);
        let c = CombatantBody::grounded_at(180.0, 0.0).hitbox(&config);
        assert!(a.overlaps(&b));
        assert_eq!(a.overlap_x(&b), 10.0);
        assert!(!a.overlaps(&c));
        assert_eq!(a.overlap_x(&c), 0.0);
    }
}
