use crate::bbox::BBox;
use crate::math::distance;

use nalgebra as na;

/// Probe points on a player box used to approximate its distance to the ball.
///
/// The eight corners and edge midpoints always come first. When the ball is
/// level with the box vertically, the two points where the ball's row meets
/// the left and right edges are appended; when it is level horizontally, the
/// two points where the ball's column meets the top and bottom edges follow.
/// Either way the straight horizontal or vertical gap to the box is one of
/// the probes.
pub fn anchor_points(player: &BBox, ball_center: &na::Point2<f32>) -> Vec<na::Point2<f32>> {
    let (x1, y1, x2, y2) = (player.left(), player.top(), player.right(), player.bottom());
    let cx = x1 + player.width() / 2.0;
    let cy = y1 + player.height() / 2.0;

    let mut points = Vec::with_capacity(12);
    points.extend_from_slice(&[
        na::Point2::new(x1, y1),
        na::Point2::new(x2, y1),
        na::Point2::new(x1, y2),
        na::Point2::new(x2, y2),
        na::Point2::new(cx, y1),
        na::Point2::new(cx, y2),
        na::Point2::new(x1, cy),
        na::Point2::new(x2, cy),
    ]);

    if ball_center.y > y1 && ball_center.y < y2 {
        points.push(na::Point2::new(x1, ball_center.y));
        points.push(na::Point2::new(x2, ball_center.y));
    }

    if ball_center.x > x1 && ball_center.x < x2 {
        points.push(na::Point2::new(ball_center.x, y1));
        points.push(na::Point2::new(ball_center.x, y2));
    }

    points
}

pub fn min_distance_to_ball(player: &BBox, ball_center: &na::Point2<f32>) -> f32 {
    anchor_points(player, ball_center)
        .iter()
        .map(|p| distance(ball_center, p))
        .fold(f32::INFINITY, f32::min)
}
