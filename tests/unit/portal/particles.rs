use super::*;
use crate::host::headless::HeadlessStage;
use crate::host::ManualClock;

fn emitter() -> Emitter {
    Emitter {
        center: Point::new(400.0, 300.0),
        width: 600.0,
        height: 200.0,
    }
}

#[test]
fn spawned_particles_start_inside_the_opening() {
    let mut rng = Rng64::new(5);
    let e = emitter();
    for _ in 0..500 {
        let p = e.spawn(&mut rng);
        assert!((p.pos.x - 400.0).abs() <= 240.0);
        assert!((p.pos.y - 300.0).abs() <= 20.0);
        assert!(p.vel.y < -1.0 + 1e-12 && p.vel.y >= -3.0);
        assert!((1.0..4.0).contains(&p.size));
        assert_eq!(p.life, 1.0);
    }
}

#[test]
fn live_count_never_exceeds_cap_with_forced_spawning() {
    let mut pool = ParticlePool::new(50, 0.02);
    let mut rng = Rng64::new(42);
    let e = emitter();
    for _ in 0..1_000 {
        pool.maybe_spawn(&e, 1.0, &mut rng);
        pool.advance(1.0);
        assert!(pool.len() <= pool.cap());
    }
    assert!(pool.len() > 0);
}

#[test]
fn zero_probability_never_spawns() {
    let mut pool = ParticlePool::new(50, 0.02);
    let mut rng = Rng64::new(1);
    for _ in 0..100 {
        assert!(!pool.maybe_spawn(&emitter(), 0.0, &mut rng));
    }
    assert!(pool.is_empty());
}

#[test]
fn advance_moves_decays_and_culls() {
    let mut pool = ParticlePool::new(4, 0.25);
    let mut rng = Rng64::new(3);
    assert!(pool.maybe_spawn(&emitter(), 1.0, &mut rng));
    let before = pool.particles()[0];

    pool.advance(1.0);
    let after = pool.particles()[0];
    assert_eq!(after.pos, before.pos + before.vel);
    assert!((after.life - 0.75).abs() < 1e-12);

    pool.advance(3.0);
    assert!(pool.is_empty());
}

#[test]
fn draw_emits_one_spark_per_particle() {
    let stage = HeadlessStage::new();
    let mut layers = stage.layers(Box::new(ManualClock::new()));
    let mut pool = ParticlePool::new(10, 0.02);
    let mut rng = Rng64::new(8);
    for _ in 0..3 {
        pool.maybe_spawn(&emitter(), 1.0, &mut rng);
    }
    pool.draw(layers.canvas.as_mut(), Rgba8::rgb(0, 255, 255));
    assert_eq!(stage.snapshot().spark_draws, 3);

    pool.clear();
    assert!(pool.is_empty());
}
