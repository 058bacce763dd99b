//! ECS systems that operate on the session world.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components, the ground and the
//! player list.

pub mod aim;
pub mod collision;
pub mod damage;
pub mod decision;
pub mod explosion;
pub mod height;
pub mod projectile;
pub mod snapshot;
pub mod turn;
