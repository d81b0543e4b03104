use crate::anchors::min_distance_to_ball;
use crate::bbox::BBox;
use crate::detector::PossessionConfig;
use crate::error::Error;
use crate::frame::{PlayerFrame, PlayerId};
use crate::math::containment_ratio;

use nalgebra as na;

/// How one visible player relates to the ball in a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerScore {
    pub player_id: PlayerId,
    pub containment: f32,
    pub distance: f32,
}

impl PlayerScore {
    pub fn measure(
        player_id: PlayerId,
        player: &BBox,
        ball: &BBox,
        ball_center: &na::Point2<f32>,
    ) -> Result<Self, Error> {
        player.validate()?;

        Ok(Self {
            player_id,
            containment: containment_ratio(player, ball)?,
            distance: min_distance_to_ball(player, ball_center),
        })
    }
}

/// Picks the single player most likely holding the ball in one frame.
///
/// Containment above the threshold wins outright, highest ratio first. Only
/// when nobody clears it does the nearest player within the possession
/// threshold get the ball. Ties go to the lowest player id.
pub fn resolve_frame(
    config: &PossessionConfig,
    ball: &BBox,
    players: &PlayerFrame,
) -> Result<Option<PlayerId>, Error> {
    ball.validate()?;
    if ball.area() <= 0.0 {
        return Err(Error::DegenerateBall {
            width: ball.width(),
            height: ball.height(),
        });
    }

    let ball_center = ball.center();

    let mut contained: Option<PlayerScore> = None;
    let mut nearest: Option<PlayerScore> = None;

    for (id, bbox) in players.visible() {
        let score = PlayerScore::measure(id, bbox, ball, &ball_center)?;

        if score.containment > config.containment_threshold {
            match contained {
                Some(best) if best.containment >= score.containment => {}
                _ => contained = Some(score),
            }
        } else {
            match nearest {
                Some(best) if best.distance <= score.distance => {}
                _ => nearest = Some(score),
            }
        }
    }

    if let Some(best) = contained {
        return Ok(Some(best.player_id));
    }

    Ok(nearest
        .filter(|best| best.distance < config.possession_threshold)
        .map(|best| best.player_id))
}
