use crate::systems::{apply_collision, apply_propagation};

use super::{LatticeCore, StepClock};

pub(super) fn collide(core: &mut LatticeCore) {
    apply_collision(&mut core.grid);
}

pub(super) fn propagate(core: &mut LatticeCore) {
    apply_propagation(&mut core.grid);
}

pub(super) fn step(core: &mut LatticeCore) {
    let perf_on = core.perf_enabled;
    if !perf_on {
        collide(core);
        propagate(core);
        core.generation += 1;
        return;
    }

    core.perf_stats.reset();
    let mut clock = StepClock::start();

    collide(core);
    core.perf_stats.collision_ms = clock.lap();

    // Propagation must see the fully collided generation; the pass above
    // returns only after every row is done.
    propagate(core);
    core.perf_stats.propagation_ms = clock.lap();

    core.generation += 1;

    // Post-step snapshot
    core.perf_stats.particle_count = core.grid.particle_count();
    core.perf_stats.grid_size = core.grid.len() as u32;
    core.perf_stats.memory_bytes = (core.grid.len() as u32).saturating_mul(3); // cells + scratch + occupancy
    core.perf_stats.generation = core.generation;
    core.perf_stats.step_ms = clock.total();
}
