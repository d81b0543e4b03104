use crate::error::Error;
use crate::frame::{BallFrame, PlayerFrame, PlayerId};
use crate::resolver::resolve_frame;
use crate::state::{FrameEvent, PossessionState};
use crate::timeline::PossessionTimeline;

use log::{debug, trace};
use rayon::prelude::*;
use serde_derive::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct PossessionConfig {
    /// Max distance in px between the ball center and the nearest player anchor.
    pub possession_threshold: f32,
    /// Consecutive winning frames needed before possession is reported.
    pub min_frames: u32,
    /// Fraction of the ball box that must lie inside a player box.
    pub containment_threshold: f32,
}

impl Default for PossessionConfig {
    fn default() -> Self {
        Self {
            possession_threshold: 50.0,
            min_frames: 11,
            containment_threshold: 0.8,
        }
    }
}

impl PossessionConfig {
    pub fn new(possession_threshold: f32, min_frames: u32, containment_threshold: f32) -> Self {
        Self {
            possession_threshold,
            min_frames,
            containment_threshold,
        }
    }

    pub fn with_possession_threshold(mut self, px: f32) -> Self {
        self.possession_threshold = px;
        self
    }

    pub fn with_min_frames(mut self, frames: u32) -> Self {
        self.min_frames = frames;
        self
    }

    pub fn with_containment_threshold(mut self, ratio: f32) -> Self {
        self.containment_threshold = ratio;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.possession_threshold.is_finite() || self.possession_threshold < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "possession_threshold must be a non-negative number, got {}",
                self.possession_threshold
            )));
        }

        if !(0.0..=1.0).contains(&self.containment_threshold) {
            return Err(Error::InvalidConfig(format!(
                "containment_threshold must be within [0, 1], got {}",
                self.containment_threshold
            )));
        }

        if self.min_frames == 0 {
            return Err(Error::InvalidConfig("min_frames must be at least 1".into()));
        }

        Ok(())
    }
}

/// Turns per-frame player and ball boxes into a debounced possession timeline.
///
/// Runs in two passes: every frame is resolved independently (in parallel),
/// then a single ordered scan applies the consecutive-frame rule.
#[derive(Debug, Clone)]
pub struct BallAcquisitionDetector {
    config: PossessionConfig,
}

impl BallAcquisitionDetector {
    pub fn new(config: PossessionConfig) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &PossessionConfig {
        &self.config
    }

    /// Classifies a single frame.
    pub fn resolve(&self, players: &PlayerFrame, ball: &BallFrame) -> Result<FrameEvent, Error> {
        let ball = match ball {
            Some(ball) => ball,
            None => return Ok(FrameEvent::BallMissing),
        };

        let event = match resolve_frame(&self.config, ball, players)? {
            Some(id) => FrameEvent::Candidate(id),
            None => FrameEvent::NoCandidate,
        };

        Ok(event)
    }

    /// First pass. Frames have no dependency on each other here.
    pub fn resolve_frames(
        &self,
        players: &[PlayerFrame],
        balls: &[BallFrame],
    ) -> Result<Vec<FrameEvent>, Error> {
        if players.len() != balls.len() {
            return Err(Error::LengthMismatch {
                players: players.len(),
                balls: balls.len(),
            });
        }

        players
            .par_iter()
            .zip(balls.par_iter())
            .map(|(players, ball)| self.resolve(players, ball))
            .collect()
    }

    /// Second pass. Must see the events in frame order.
    pub fn debounce(&self, events: &[FrameEvent]) -> PossessionTimeline {
        let mut state = PossessionState::new();
        let mut current: Option<PlayerId> = None;

        events
            .iter()
            .enumerate()
            .map(|(frame, event)| {
                trace!("frame {}: {:?}", frame, event);

                let owner = state.observe(*event, self.config.min_frames);
                if owner != current {
                    debug!("frame {}: possession {:?} -> {:?}", frame, current, owner);
                    current = owner;
                }

                owner
            })
            .collect()
    }

    pub fn detect_ball_possession(
        &self,
        players: &[PlayerFrame],
        balls: &[BallFrame],
    ) -> Result<PossessionTimeline, Error> {
        debug!(
            "detecting possession over {} frames with {:?}",
            balls.len(),
            self.config
        );

        let events = self.resolve_frames(players, balls)?;

        Ok(self.debounce(&events))
    }
}

impl Default for BallAcquisitionDetector {
    fn default() -> Self {
        Self {
            config: PossessionConfig::default(),
        }
    }
}

impl crate::PossessionDetection for BallAcquisitionDetector {
    #[inline]
    fn detect(
        &self,
        players: &[PlayerFrame],
        balls: &[BallFrame],
    ) -> Result<PossessionTimeline, Error> {
        self.detect_ball_possession(players, balls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bbox::BBox;
    use crate::state::FrameEvent::*;

    fn detector(min_frames: u32) -> BallAcquisitionDetector {
        BallAcquisitionDetector::new(PossessionConfig::default().with_min_frames(min_frames))
            .unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = PossessionConfig::default();
        assert_eq!(config.possession_threshold, 50.0);
        assert_eq!(config.min_frames, 11);
        assert_eq!(config.containment_threshold, 0.8);
        assert!(config.validate().is_ok());
        assert_eq!(PossessionConfig::new(50.0, 11, 0.8), config);
        assert_eq!(BallAcquisitionDetector::default().config(), &config);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let bad = [
            PossessionConfig::default().with_min_frames(0),
            PossessionConfig::default().with_containment_threshold(1.5),
            PossessionConfig::default().with_possession_threshold(-1.0),
            PossessionConfig::default().with_possession_threshold(f32::NAN),
        ];

        for config in bad {
            assert!(matches!(
                BallAcquisitionDetector::new(config),
                Err(Error::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_config_partial_json() {
        let config: PossessionConfig = serde_json::from_str(r#"{"min_frames": 5}"#).unwrap();
        assert_eq!(config, PossessionConfig::default().with_min_frames(5));
    }

    #[test]
    fn test_debounce_switch() {
        let events = [Candidate(1), Candidate(1), Candidate(1), Candidate(1), Candidate(2)];
        let timeline = detector(3).debounce(&events);
        assert_eq!(
            timeline.as_slice(),
            &[None, None, Some(1), Some(1), None]
        );
    }

    #[test]
    fn test_debounce_gap() {
        let events = [
            Candidate(1),
            Candidate(1),
            BallMissing,
            Candidate(1),
            Candidate(1),
            Candidate(1),
        ];
        let timeline = detector(3).debounce(&events);
        assert_eq!(
            timeline.as_slice(),
            &[None, None, None, None, None, Some(1)]
        );
    }

    #[test]
    fn test_resolve_missing_ball() {
        let players = PlayerFrame::new().with(1, BBox::ltrb(100.0, 50.0, 180.0, 190.0));
        assert_eq!(detector(3).resolve(&players, &None).unwrap(), BallMissing);
    }

    #[test]
    fn test_length_mismatch() {
        let res = detector(3).detect_ball_possession(&[PlayerFrame::new()], &[None, None]);
        assert_eq!(
            res,
            Err(Error::LengthMismatch {
                players: 1,
                balls: 2
            })
        );
    }
}
