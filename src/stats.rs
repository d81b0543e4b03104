use crate::error::Error;
use crate::frame::PlayerId;
use crate::timeline::PossessionTimeline;

use serde_derive::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub type TeamId = u8;

/// Team in control of the ball for every frame.
///
/// Frames where nobody (or an unassigned player) holds the ball keep the
/// previous team, since the ball is usually in flight between teammates.
/// Frames before the first team touch stay `None`.
pub fn team_ball_control(
    timeline: &PossessionTimeline,
    assignments: &[HashMap<PlayerId, TeamId>],
) -> Result<Vec<Option<TeamId>>, Error> {
    if timeline.len() != assignments.len() {
        return Err(Error::LengthMismatch {
            players: assignments.len(),
            balls: timeline.len(),
        });
    }

    let mut current = None;

    Ok(timeline
        .iter()
        .zip(assignments)
        .map(|(owner, teams)| {
            if let Some(team) = owner.and_then(|id| teams.get(&id)) {
                current = Some(*team);
            }

            current
        })
        .collect())
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PossessionStats {
    pub frames_per_team: BTreeMap<TeamId, usize>,
    pub controlled_frames: usize,
}

impl PossessionStats {
    pub fn from_control(control: &[Option<TeamId>]) -> Self {
        let mut stats = Self::default();

        for team in control.iter().flatten() {
            *stats.frames_per_team.entry(*team).or_insert(0) += 1;
            stats.controlled_frames += 1;
        }

        stats
    }

    /// Fraction of controlled frames held by `team`.
    pub fn share(&self, team: TeamId) -> f32 {
        if self.controlled_frames == 0 {
            return 0.0;
        }

        let frames = self.frames_per_team.get(&team).copied().unwrap_or(0);

        frames as f32 / self.controlled_frames as f32
    }
}
