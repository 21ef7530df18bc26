//! Cross-combatant rules: reach, knockback, body push-apart, and the
//! per-tick hit resolver.

pub mod collision;
pub mod knockback;
pub mod range;
pub mod resolver;

pub use knockback::Reaction;
pub use resolver::{Judgment, judge, resolve};
