use crate::frame::PlayerId;

use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Confirmed possessor per frame, `None` where nobody holds the ball.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct PossessionTimeline(Vec<Option<PlayerId>>);

impl PossessionTimeline {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, frame: usize) -> Option<PlayerId> {
        self.0.get(frame).copied().flatten()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Option<PlayerId>> + '_ {
        self.0.iter().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Option<PlayerId>] {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> Vec<Option<PlayerId>> {
        self.0
    }

    pub fn frames_per_player(&self) -> BTreeMap<PlayerId, usize> {
        let mut counts = BTreeMap::new();
        for id in self.0.iter().flatten() {
            *counts.entry(*id).or_insert(0) += 1;
        }

        counts
    }
}

impl From<Vec<Option<PlayerId>>> for PossessionTimeline {
    fn from(v: Vec<Option<PlayerId>>) -> Self {
        Self(v)
    }
}

impl FromIterator<Option<PlayerId>> for PossessionTimeline {
    fn from_iter<I: IntoIterator<Item = Option<PlayerId>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_per_player() {
        let timeline = PossessionTimeline::from(vec![None, Some(3), Some(3), None, Some(8)]);
        let counts = timeline.frames_per_player();

        assert_eq!(counts.get(&3), Some(&2));
        assert_eq!(counts.get(&8), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_get_out_of_range() {
        let timeline = PossessionTimeline::from(vec![Some(1)]);
        assert_eq!(timeline.get(0), Some(1));
        assert_eq!(timeline.get(5), None);
        assert_eq!(timeline.into_inner(), vec![Some(1)]);
    }

    #[test]
    fn test_serializes_as_sequence() {
        let timeline = PossessionTimeline::from(vec![None, Some(4)]);
        assert_eq!(serde_json::to_string(&timeline).unwrap(), "[null,4]");
    }
}
