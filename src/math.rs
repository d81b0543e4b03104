use crate::bbox::BBox;
use crate::error::Error;

use nalgebra as na;
use num_traits::Float;

#[inline]
pub fn distance(a: &na::Point2<f32>, b: &na::Point2<f32>) -> f32 {
    na::distance(a, b)
}

/// Fraction of the ball's area covered by the player box, in `[0, 1]`.
///
/// Fails on a zero-area ball instead of dividing by zero.
pub fn containment_ratio(player: &BBox, ball: &BBox) -> Result<f32, Error> {
    let ball_area = ball.area();
    if ball_area <= 0.0 {
        return Err(Error::DegenerateBall {
            width: ball.width(),
            height: ball.height(),
        });
    }

    let ratio = match player.intersection(ball) {
        Some(inter) => inter.area() / ball_area,
        None => 0.0,
    };

    Ok(ratio)
}

#[inline]
pub fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}
