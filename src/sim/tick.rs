//! Per-frame simulation step
//!
//! Advances every ball by its velocity, reflects off the viewport walls, then
//! runs the triple-collision scan. Rendering happens before this step, so a
//! ball is drawn once at its overlapping pre-reflection position and the
//! bounce takes effect on the following frame's move.

use super::collision::is_colliding;
use super::state::{Ball, SimState};

/// Advance the state by one frame
pub fn step(state: &mut SimState) {
    let (width, height) = (state.width, state.height);

    for ball in &mut state.balls {
        ball.pos += ball.vel;

        // Static post-move checks: negate the component, don't clamp
        if ball.pos.x - ball.radius < 0.0 || ball.pos.x + ball.radius > width {
            ball.vel.x = -ball.vel.x;
        }
        if ball.pos.y - ball.radius < 0.0 || ball.pos.y + ball.radius > height {
            ball.vel.y = -ball.vel.y;
        }
    }

    // At most one merge per frame; sources stay in the collection
    if let Some(triple) = find_colliding_triple(&state.balls) {
        state.spawn_merged(triple);
    }
}

/// First triple (in nested-ascending i<j<k index order) whose three pairwise
/// collision checks all hold
pub fn find_colliding_triple(balls: &[Ball]) -> Option<[usize; 3]> {
    for i in 0..balls.len() {
        for j in i + 1..balls.len() {
            if !is_colliding(&balls[i], &balls[j]) {
                continue;
            }
            for k in j + 1..balls.len() {
                if is_colliding(&balls[j], &balls[k]) && is_colliding(&balls[i], &balls[k]) {
                    return Some([i, j, k]);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BALL_RADIUS, MERGE_LIFT};
    use crate::sim::state::{Color, SimState};
    use glam::Vec2;

    fn ball(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(dx, dy),
            radius: BALL_RADIUS,
            color: Color::Named("red"),
        }
    }

    /// Three mutually overlapping balls around (cx, cy), moving slowly enough
    /// to still overlap after one move
    fn cluster(cx: f32, cy: f32) -> [Ball; 3] {
        [
            ball(cx, cy, 1.0, 0.0),
            ball(cx + 5.0, cy, 0.0, 1.0),
            ball(cx, cy + 5.0, -1.0, 0.0),
        ]
    }

    #[test]
    fn first_frame_advances_each_ball_by_its_velocity() {
        // The 8 starting balls all sit well inside the viewport, so the first
        // frame is pure movement
        let mut state = SimState::new(500.0, 500.0, 8);
        let before = state.balls.clone();
        state.start();
        step(&mut state);
        assert_eq!(state.balls.len(), 8);
        for (after, before) in state.balls.iter().zip(before.iter()) {
            assert_eq!(after.pos, before.pos + before.vel);
            assert_eq!(after.vel, before.vel);
        }
    }

    #[test]
    fn right_wall_reflection_flips_sign_keeps_magnitude() {
        let mut state = SimState::new(500.0, 500.0, 5);
        state.balls = vec![ball(483.0, 250.0, 3.0, 0.0)];
        step(&mut state);

        // Drawn once past the wall; direction reverses for the next move
        let b = state.balls[0];
        assert_eq!(b.pos.x, 486.0);
        assert_eq!(b.vel.x, -3.0);
        assert_eq!(b.vel.y, 0.0);
    }

    #[test]
    fn top_wall_reflection_is_symmetric() {
        let mut state = SimState::new(500.0, 500.0, 6);
        state.balls = vec![ball(250.0, 17.0, 0.0, -3.0)];
        step(&mut state);

        let b = state.balls[0];
        assert_eq!(b.pos.y, 14.0);
        assert_eq!(b.vel.y, 3.0);
    }

    #[test]
    fn triple_merge_appends_mean_ball() {
        let mut state = SimState::new(500.0, 500.0, 3);
        state.balls = cluster(250.0, 250.0).to_vec();
        step(&mut state);
        assert_eq!(state.balls.len(), 4);

        let (a, b, c) = (state.balls[0], state.balls[1], state.balls[2]);
        let merged = state.balls[3];
        let mean_pos = (a.pos + b.pos + c.pos) / 3.0;
        let mean_vel = (a.vel + b.vel + c.vel) / 3.0;
        assert!((merged.pos.x - mean_pos.x).abs() < 1e-4);
        assert!((merged.pos.y - (mean_pos.y - MERGE_LIFT)).abs() < 1e-4);
        assert!((merged.vel - mean_vel).length() < 1e-4);
        assert_eq!(merged.radius, a.radius);
        assert!(matches!(merged.color, Color::Rgb(..)));
    }

    #[test]
    fn at_most_one_merge_per_frame() {
        // Two disjoint qualifying triples, far apart
        let mut state = SimState::new(500.0, 500.0, 4);
        let mut balls = cluster(100.0, 100.0).to_vec();
        balls.extend_from_slice(&cluster(400.0, 400.0));
        state.balls = balls;

        step(&mut state);
        assert_eq!(state.balls.len(), 7);
    }

    #[test]
    fn scan_finds_first_triple_in_index_order() {
        let mut balls = cluster(400.0, 400.0).to_vec();
        balls.splice(0..0, cluster(100.0, 100.0));
        assert_eq!(find_colliding_triple(&balls), Some([0, 1, 2]));
    }

    #[test]
    fn no_triple_for_pairwise_only_overlap() {
        // A chain: 0 overlaps 1, 1 overlaps 2, but 0 and 2 are apart
        let balls = vec![
            ball(100.0, 100.0, 0.0, 0.0),
            ball(125.0, 100.0, 0.0, 0.0),
            ball(150.0, 100.0, 0.0, 0.0),
        ];
        assert_eq!(find_colliding_triple(&balls), None);
    }

    #[test]
    fn ball_count_never_decreases() {
        let mut state = SimState::new(500.0, 500.0, 9);
        state.start();
        let mut count = state.balls.len();
        for _ in 0..500 {
            step(&mut state);
            assert!(state.balls.len() >= count);
            count = state.balls.len();
        }
    }
}
