//! Height correction: keeps every tank standing on the ground.

use hecs::World;

use scorched_core::components::Tank;
use scorched_core::types::Position;
use scorched_terrain::Ground;

/// Snap every tank (wrecks included) to the terrain surface.
pub fn run(world: &mut World, ground: &Ground) {
    for (_entity, (_tank, pos)) in world.query_mut::<(&Tank, &mut Position)>() {
        pos.y = ground.height_at(pos.x);
    }
}
