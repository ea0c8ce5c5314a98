use approx::assert_abs_diff_eq;
use curtain::{Bounds, Particle, Vec2};
use curtain::vec::Vec;

#[test]
fn free_fall_gravity() {
    let mut p: Particle<Vec2<f32>> = Particle::new(Vec2::new(0.0, 0.0), 2.0, 0.0).unwrap();
    let g = 392.0;
    let dt = 0.025;

    for _ in 0..40 {
        p.apply_force(Vec2::new(0.0, p.mass() * g));
        p.integrate(dt);
    }

    // Implicit velocity only gains 0.5 * a * dt^2 per step, so after one
    // second the fall is roughly half of 0.5 * g * t^2.
    let analytic = 0.5 * g * 1.0 * 1.0;
    assert!(p.pos.y > 0.25 * analytic && p.pos.y < analytic, "pos.y = {}", p.pos.y);
}

#[test]
fn single_step_matches_closed_form() {
    let mut p: Particle<Vec2<f32>> = Particle::new(Vec2::new(3.0, 4.0), 1.0, 20.0).unwrap();
    p.apply_force(Vec2::new(0.0, 392.0));
    p.integrate(0.025);
    // Starting at rest, damping has nothing to act on.
    assert_abs_diff_eq!(p.pos.y, 4.0 + 0.5 * 392.0 * 0.025 * 0.025, epsilon = 1e-5);
    assert_eq!(p.pos.x, 3.0);
    assert_eq!(p.prev_pos, Vec2::new(3.0, 4.0));
}

#[test]
fn damping_slows_drift() {
    let mut damped: Particle<Vec2<f32>> = Particle::new(Vec2::new(0.0, 0.0), 1.0, 20.0).unwrap();
    let mut free: Particle<Vec2<f32>> = Particle::new(Vec2::new(0.0, 0.0), 1.0, 0.0).unwrap();
    for p in [&mut damped, &mut free] {
        p.prev_pos = Vec2::new(-1.0, 0.0);
        for _ in 0..10 {
            p.integrate(0.025);
        }
    }
    assert_abs_diff_eq!(free.pos.x, 10.0, epsilon = 1e-4);
    assert!(damped.pos.x < free.pos.x);
    assert!(damped.velocity().x < free.velocity().x);
}

#[test]
fn pinned_particle_stays_fixed() {
    let pin = Vec2::new(5.0f32, 5.0);
    let mut p: Particle<Vec2<f32>> = Particle::new(pin, 1.0, 20.0).unwrap();
    p.pin_to(pin);
    for i in 0..100 {
        p.apply_force(Vec2::new(1000.0, 1000.0 * i as f32));
        // Something else (a link) dragged it away this step.
        p.pos = p.pos + Vec2::new(3.0, -7.0);
        p.integrate(0.025);
        assert_eq!(p.pos, pin);
    }
    assert_eq!(p.pin_location(), Some(pin));
}

#[test]
fn pin_to_moves_target() {
    let mut p: Particle<Vec2<f32>> = Particle::new(Vec2::new(0.0, 0.0), 1.0, 20.0).unwrap();
    assert_eq!(p.pin_location(), None);
    p.pin_to(Vec2::new(10.0, -2.0));
    p.integrate(0.025);
    assert_eq!(p.pos, Vec2::new(10.0, -2.0));
    p.unpin();
    assert!(!p.is_pinned());
}

#[test]
fn interaction_injects_apparent_velocity() {
    let mut p: Particle<Vec2<f32>> = Particle::new(Vec2::new(0.0, 0.0), 1.0, 20.0).unwrap();
    p.apply_interaction(Vec2::new(6.0, 3.0));
    assert_eq!(p.pos, Vec2::new(6.0, 3.0));
    // (0 + 2 * pos) / 3
    assert_abs_diff_eq!(p.prev_pos.x, 4.0, epsilon = 1e-6);
    assert_abs_diff_eq!(p.prev_pos.y, 2.0, epsilon = 1e-6);
    assert_abs_diff_eq!(p.velocity().x, 2.0, epsilon = 1e-6);
}

#[test]
fn interaction_ignores_pinned() {
    let mut p: Particle<Vec2<f32>> = Particle::new(Vec2::new(1.0, 1.0), 1.0, 20.0).unwrap();
    p.pin_to(Vec2::new(1.0, 1.0));
    p.apply_interaction(Vec2::new(6.0, 3.0));
    assert_eq!(p.pos, Vec2::new(1.0, 1.0));
}

#[test]
fn clamp_reflects_off_each_edge() {
    let bounds = Bounds::new(Vec2::new(-100.0f32, -50.0), Vec2::new(100.0, 50.0)).unwrap();
    let e = 3.0;
    let cases = [
        (Vec2::new(100.0 + e, 0.0), Vec2::new(100.0 - e, 0.0)),
        (Vec2::new(-100.0 - e, 0.0), Vec2::new(-100.0 + e, 0.0)),
        (Vec2::new(0.0, 50.0 + e), Vec2::new(0.0, 50.0 - e)),
        (Vec2::new(0.0, -50.0 - e), Vec2::new(0.0, -50.0 + e)),
    ];
    for (start, expected) in cases {
        let mut p: Particle<Vec2<f32>> = Particle::new(start, 1.0, 20.0).unwrap();
        p.prev_pos = Vec2::new(0.0, 0.0);
        p.clamp_to_bounds(&bounds);
        assert_eq!(p.pos, expected);
        // Velocity is not inverted, only the position moves.
        assert_eq!(p.prev_pos, Vec2::new(0.0, 0.0));
        assert!(bounds.contains(p.pos));
    }
}

#[test]
fn clamp_keeps_far_particles_inside() {
    let bounds = Bounds::viewport(200.0f32, 100.0).unwrap();
    let mut p: Particle<Vec2<f32>> = Particle::new(Vec2::new(5_000.0, -9_000.0), 1.0, 20.0).unwrap();
    p.clamp_to_bounds(&bounds);
    assert!(bounds.contains(p.pos), "{:?}", p.pos);
}

#[test]
fn velocity_is_derived() {
    let mut p: Particle<Vec2<f32>> = Particle::new(Vec2::new(1.0, 1.0), 1.0, 0.0).unwrap();
    p.prev_pos = Vec2::new(0.5, 2.0);
    assert_eq!(p.velocity(), Vec2::new(0.5, -1.0));
    assert_abs_diff_eq!(p.velocity().length(), (1.25f32).sqrt(), epsilon = 1e-6);
}
