use hpp_engine::{Lattice, Rect};

#[test]
fn perf_smoke_step() {
    let mut lattice = Lattice::with_obstacle(128, 20, 60, 20, 60, 7).unwrap();
    lattice.enable_perf_metrics(true);
    let before = lattice.particle_count();
    lattice.step();
    let stats = lattice.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.collision_ms() >= 0.0);
    assert!(stats.propagation_ms() >= 0.0);
    assert_eq!(stats.grid_size(), 128 * 128);
    assert_eq!(stats.generation(), 1);
    assert!(lattice.particle_count() <= before);
    assert!(Rect::square(20, 60).contains(30, 30));
}

#[test]
fn ticks_only_step_while_playing() {
    let mut lattice = Lattice::new(32, 1).unwrap();
    assert!(!lattice.playing());
    assert!(!lattice.tick());
    assert_eq!(lattice.generation(), 0);

    assert!(lattice.toggle_playing());
    for _ in 0..5 {
        assert!(lattice.tick());
    }
    assert_eq!(lattice.generation(), 5);

    lattice.set_playing(false);
    lattice.tick();
    assert_eq!(lattice.generation(), 5);
}

#[test]
fn occupancy_buffer_is_exposed_for_renderers() {
    let mut lattice = Lattice::reference().unwrap();
    let ptr = lattice.extract_occupancy();
    assert!(!ptr.is_null());
    assert_eq!(lattice.occupancy_len(), 384 * 384);
    assert_eq!(lattice.cells_len(), 384 * 384);
    assert_eq!(lattice.core().occupancy(100, 100), Ok(4));
}
