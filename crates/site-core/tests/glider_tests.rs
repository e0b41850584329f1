// Host-side tests for the hero glider controller.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use site_core::{
    bob_offset, in_bounds, nearby_position, GliderController, GliderMode, RandomSource,
};

/// Always returns the same unit sample. `Fixed(0.5)` means no offset at all.
struct Fixed(f32);

impl RandomSource for Fixed {
    fn unit(&mut self) -> f32 {
        self.0
    }
}

/// Cycles through a fixed list of samples.
struct Cycle {
    values: Vec<f32>,
    next: usize,
}

impl RandomSource for Cycle {
    fn unit(&mut self) -> f32 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}

fn still() -> Fixed {
    Fixed(0.5)
}

#[test]
fn starts_parked_at_origin() {
    let g = GliderController::new(still());
    assert_eq!(g.position(), Vec2::ZERO);
    assert_eq!(g.target(), Vec2::ZERO);
    assert_eq!(g.mode(), GliderMode::Idle);
    assert!(!g.is_dragging());
}

#[test]
fn nearby_position_clamps_forced_offsets() {
    // (3, 2.9) + (1, 1) = (4, 3.9); y is clamped to the ceiling.
    let mut rng = Fixed(1.0);
    let t = nearby_position(Vec2::new(3.0, 2.9), &mut rng);
    assert_eq!(t, Vec2::new(4.0, 3.0));

    let mut g = GliderController::starting_at(Vec2::new(3.0, 2.9), Vec2::ZERO, Fixed(1.0));
    assert_eq!(g.nearby_position(Vec2::new(3.0, 2.9)), Vec2::new(4.0, 3.0));
}

#[test]
fn nearby_position_stays_within_one_step() {
    let mut rng = StdRng::seed_from_u64(11);
    let current = Vec2::new(0.5, 1.0);
    for _ in 0..1000 {
        let t = nearby_position(current, &mut rng);
        assert!(in_bounds(t));
        assert!((t.x - current.x).abs() <= 1.0 + 1e-6);
        assert!((t.y - current.y).abs() <= 1.0 + 1e-6);
    }
}

#[test]
fn position_stays_in_bounds_under_random_events() {
    let mut driver = StdRng::seed_from_u64(42);
    let mut g = GliderController::new(StdRng::seed_from_u64(7));
    let mut t = 0.0_f32;
    for _ in 0..20_000 {
        match driver.gen_range(0..6) {
            0 | 1 => {
                t += 1.0 / 60.0;
                g.on_frame(t);
            }
            2 => g.on_idle_tick(),
            3 => {
                let p = Vec2::new(driver.gen_range(-50.0..50.0), driver.gen_range(-50.0..50.0));
                g.on_drag_start(p);
            }
            4 => {
                let p = Vec2::new(driver.gen_range(-50.0..50.0), driver.gen_range(-50.0..50.0));
                g.on_drag_move(p);
            }
            _ => g.on_drag_end(),
        }
        assert!(in_bounds(g.position()), "position {:?}", g.position());
        assert!(in_bounds(g.target()), "target {:?}", g.target());
    }
}

#[test]
fn idle_frames_converge_toward_target() {
    let mut g = GliderController::starting_at(Vec2::new(4.0, 2.5), Vec2::new(-3.0, 0.0), still());
    let mut prev = g.position().distance(g.target());
    for i in 1..=600 {
        g.on_frame(i as f32 / 60.0);
        let d = g.position().distance(g.target());
        assert!(d < prev, "distance grew at frame {i}: {prev} -> {d}");
        prev = d;
    }
    assert!(prev < Vec2::new(7.0, 2.5).length());
}

#[test]
fn y_follows_slower_than_x() {
    let mut g = GliderController::starting_at(Vec2::ZERO, Vec2::new(2.0, 2.0), still());
    g.on_frame(0.0);
    let p = g.position();
    assert!((p.x - 2.0 * 0.003).abs() < 1e-6);
    assert!((p.y - 2.0 * 0.002).abs() < 1e-6);
}

#[test]
fn idle_pose_adds_bob_and_attitude() {
    let mut g = GliderController::starting_at(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0), still());
    let t = 1.7;
    g.on_frame(t);
    let p = g.position();
    let pose = g.pose();
    assert_eq!(pose.translation.x, p.x);
    assert!((pose.translation.y - (p.y + bob_offset(t))).abs() < 1e-6);
    let roll = (2.0 - p.x) * 0.12 + (t * 0.8).sin() * 0.05;
    let pitch = (2.0 - p.y) * 0.01 + (t * 0.1).cos() * 0.1;
    assert!((pose.roll - roll).abs() < 1e-6);
    assert!((pose.pitch - pitch).abs() < 1e-6);
}

#[test]
fn turbulence_only_nudges_x() {
    // Sample 1.0 maps to the top of the jitter range.
    let mut g = GliderController::starting_at(Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0), Fixed(1.0));
    g.on_frame(0.0);
    assert!((g.position().x - 1.005).abs() < 1e-6);
    assert_eq!(g.position().y, 1.0);
}

#[test]
fn frames_do_not_move_a_dragged_glider() {
    let noisy = Cycle {
        values: vec![0.0, 1.0, 0.25, 0.9],
        next: 0,
    };
    let mut g = GliderController::starting_at(Vec2::new(1.0, 1.0), Vec2::new(-4.0, 2.0), noisy);
    g.on_frame(0.5);
    let held = g.position();
    g.on_drag_start(held + Vec2::new(0.1, 0.1));
    for i in 0..120 {
        g.on_frame(1.0 + i as f32 / 60.0);
        assert_eq!(g.position(), held);
        assert_eq!(g.pose().translation, held);
    }
}

#[test]
fn drag_keeps_the_grab_offset() {
    let mut g = GliderController::starting_at(Vec2::new(1.0, 1.0), Vec2::ZERO, still());
    let p0 = Vec2::new(1.5, 0.5);
    g.on_drag_start(p0);
    assert_eq!(g.mode(), GliderMode::Dragging);
    assert_eq!(g.drag_state().offset, Vec2::new(0.5, -0.5));

    let p1 = Vec2::new(2.0, 2.0);
    g.on_drag_move(p1);
    assert_eq!(g.position(), p1 - (p0 - Vec2::new(1.0, 1.0)));
    assert_eq!(g.position(), Vec2::new(1.5, 2.5));
}

#[test]
fn drag_clamps_instead_of_rejecting() {
    let mut g = GliderController::new(still());
    g.on_drag_start(Vec2::ZERO);
    g.on_drag_move(Vec2::new(100.0, -100.0));
    assert_eq!(g.position(), Vec2::new(5.0, -1.0));
}

#[test]
fn drag_move_without_drag_is_ignored() {
    let mut g = GliderController::starting_at(Vec2::new(1.0, 1.0), Vec2::ZERO, still());
    g.on_drag_move(Vec2::new(3.0, 0.0));
    assert_eq!(g.position(), Vec2::new(1.0, 1.0));
}

#[test]
fn release_rerolls_target_near_drop_point() {
    let mut g = GliderController::new(Fixed(1.0));
    g.on_drag_start(Vec2::ZERO);
    g.on_drag_move(Vec2::new(4.5, 2.8));
    g.on_drag_end();
    assert_eq!(g.mode(), GliderMode::Idle);
    assert_eq!(g.target(), Vec2::new(5.0, 3.0));

    let mut g = GliderController::new(StdRng::seed_from_u64(3));
    for i in 0..200 {
        let drop = Vec2::new((i as f32 * 0.37).sin() * 4.0, (i as f32 * 0.11).cos() * 2.0 + 1.0);
        g.on_drag_start(g.position());
        g.on_drag_move(drop);
        g.on_drag_cancel();
        let (pos, target) = (g.position(), g.target());
        assert!(!g.is_dragging());
        assert!(in_bounds(target));
        assert!((target.x - pos.x).abs() <= 1.0 + 1e-6);
        assert!((target.y - pos.y).abs() <= 1.0 + 1e-6);
    }
}

#[test]
fn idle_tick_is_gated_while_dragging() {
    let mut g = GliderController::starting_at(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0), Fixed(0.0));
    g.on_drag_start(Vec2::new(1.0, 1.0));
    g.on_idle_tick();
    assert_eq!(g.target(), Vec2::new(2.0, 2.0));

    g.on_drag_end();
    // Release already rerolled from (1, 1) with offsets (-1, -1).
    assert_eq!(g.target(), Vec2::new(0.0, 0.0));
    g.on_idle_tick();
    assert_eq!(g.target(), Vec2::new(0.0, 0.0));
}

#[test]
fn idle_tick_rerolls_around_current_position() {
    let mut g = GliderController::starting_at(Vec2::new(-4.5, 0.0), Vec2::ZERO, Fixed(0.0));
    g.on_idle_tick();
    assert_eq!(g.target(), Vec2::new(-5.0, -1.0));
}
