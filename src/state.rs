use crate::frame::PlayerId;

/// Outcome of resolving a single frame, fed to [`PossessionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// The ball was not detected in this frame.
    BallMissing,
    /// The ball was seen but nobody was close enough.
    NoCandidate,
    /// The resolver picked this player.
    Candidate(PlayerId),
}

/// Running debounce accumulator: the leading candidate and how many
/// consecutive frames it has won.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PossessionState {
    leader: Option<(PlayerId, u32)>,
}

impl PossessionState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn leader(&self) -> Option<(PlayerId, u32)> {
        self.leader
    }

    #[inline]
    pub fn reset(&mut self) {
        self.leader = None;
    }

    /// Advances one frame and returns the confirmed possessor, if any.
    ///
    /// A player is confirmed once it has won `min_frames` frames in a row;
    /// any other event resets the run.
    pub fn observe(&mut self, event: FrameEvent, min_frames: u32) -> Option<PlayerId> {
        let id = match event {
            FrameEvent::BallMissing | FrameEvent::NoCandidate => {
                self.reset();
                return None;
            }
            FrameEvent::Candidate(id) => id,
        };

        let count = match self.leader {
            Some((leader, count)) if leader == id => count.saturating_add(1),
            _ => 1,
        };
        self.leader = Some((id, count));

        (count >= min_frames).then(|| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FrameEvent::*;

    fn run(events: &[FrameEvent], min_frames: u32) -> Vec<Option<PlayerId>> {
        let mut state = PossessionState::new();
        events
            .iter()
            .map(|e| state.observe(*e, min_frames))
            .collect()
    }

    #[test]
    fn test_confirms_after_min_frames() {
        let out = run(&[Candidate(1), Candidate(1), Candidate(1), Candidate(1)], 3);
        assert_eq!(out, vec![None, None, Some(1), Some(1)]);
    }

    #[test]
    fn test_switch_restarts_count() {
        let out = run(
            &[Candidate(1), Candidate(1), Candidate(1), Candidate(1), Candidate(2)],
            3,
        );
        assert_eq!(out, vec![None, None, Some(1), Some(1), None]);
    }

    #[test]
    fn test_ball_missing_resets() {
        let mut state = PossessionState::new();
        state.observe(Candidate(4), 3);
        state.observe(Candidate(4), 3);
        assert_eq!(state.leader(), Some((4, 2)));

        assert_eq!(state.observe(BallMissing, 3), None);
        assert_eq!(state.leader(), None);
    }

    #[test]
    fn test_no_candidate_resets() {
        let mut state = PossessionState::new();
        state.observe(Candidate(4), 3);
        state.observe(Candidate(4), 3);

        assert_eq!(state.observe(NoCandidate, 3), None);
        assert_eq!(state.leader(), None);
        assert_eq!(state.observe(Candidate(4), 3), None);
        assert_eq!(state.leader(), Some((4, 1)));
    }

    #[test]
    fn test_gap_then_rebuild() {
        let out = run(
            &[
                Candidate(7),
                Candidate(7),
                BallMissing,
                Candidate(7),
                Candidate(7),
                Candidate(7),
            ],
            3,
        );
        assert_eq!(out, vec![None, None, None, None, None, Some(7)]);
    }

    #[test]
    fn test_min_frames_one_confirms_immediately() {
        let out = run(&[Candidate(2), NoCandidate, Candidate(3)], 1);
        assert_eq!(out, vec![Some(2), None, Some(3)]);
    }
}
