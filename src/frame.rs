use crate::bbox::BBox;

use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Track id assigned to a player by the upstream tracker.
pub type PlayerId = u32;

/// The ball's box for one frame, `None` when it was not detected.
pub type BallFrame = Option<BBox>;

/// Player boxes seen in one frame, keyed by track id.
///
/// Iteration is in ascending id order. A `None` box marks a player the
/// tracker knows about but did not see in this frame.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct PlayerFrame {
    pub players: BTreeMap<PlayerId, Option<BBox>>,
}

impl PlayerFrame {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn insert(&mut self, id: PlayerId, bbox: BBox) {
        self.players.insert(id, Some(bbox));
    }

    #[inline]
    pub fn with(mut self, id: PlayerId, bbox: BBox) -> Self {
        self.insert(id, bbox);
        self
    }

    #[inline]
    pub fn get(&self, id: PlayerId) -> Option<&BBox> {
        self.players.get(&id)?.as_ref()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players with a box in this frame.
    #[inline]
    pub fn visible(&self) -> impl Iterator<Item = (PlayerId, &BBox)> {
        self.players
            .iter()
            .filter_map(|(id, bbox)| Some((*id, bbox.as_ref()?)))
    }
}

impl FromIterator<(PlayerId, BBox)> for PlayerFrame {
    fn from_iter<I: IntoIterator<Item = (PlayerId, BBox)>>(iter: I) -> Self {
        Self {
            players: iter.into_iter().map(|(id, b)| (id, Some(b))).collect(),
        }
    }
}
