//! Cleanup for raw ball tracks before possession detection.
//!
//! Detectors occasionally fire on a far-away object for a frame or two, and
//! miss the ball entirely for longer stretches. `remove_wrong_detections`
//! drops jumps that are too fast to be the same ball and `interpolate` fills
//! the holes, so the detector sees a continuous ball track.

use crate::bbox::BBox;
use crate::frame::BallFrame;
use crate::math::{distance, lerp};

use log::warn;
use serde_derive::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct BallFilterConfig {
    /// Max px the ball's top-left corner may travel per elapsed frame.
    pub max_displacement_per_frame: f32,
}

impl Default for BallFilterConfig {
    fn default() -> Self {
        Self {
            max_displacement_per_frame: 25.0,
        }
    }
}

/// Clears detections that jumped too far from the last accepted one.
///
/// The allowed jump grows linearly with the number of frames since the last
/// accepted detection. Returns how many detections were cleared.
pub fn remove_wrong_detections(balls: &mut [BallFrame], config: &BallFilterConfig) -> usize {
    let mut last_good: Option<(usize, BBox)> = None;
    let mut removed = 0;

    for (frame, slot) in balls.iter_mut().enumerate() {
        let current = match slot {
            Some(bbox) => *bbox,
            None => continue,
        };

        let (last_frame, last_box) = match last_good {
            Some(good) => good,
            None => {
                last_good = Some((frame, current));
                continue;
            }
        };

        let gap = (frame - last_frame) as f32;
        let jump = distance(&last_box.top_left(), &current.top_left());

        if jump > config.max_displacement_per_frame * gap {
            warn!(
                "frame {}: ball jumped {:.1}px in {} frames, dropping detection",
                frame, jump, gap
            );
            *slot = None;
            removed += 1;
        } else {
            last_good = Some((frame, current));
        }
    }

    removed
}

/// Fills missing frames from the neighbouring detections.
///
/// Gaps between two detections are linearly interpolated per coordinate,
/// trailing frames hold the last detection and leading frames take the
/// first one. A track with no detection at all is returned as is.
pub fn interpolate(balls: &[BallFrame]) -> Vec<BallFrame> {
    let known: Vec<(usize, BBox)> = balls
        .iter()
        .enumerate()
        .filter_map(|(i, b)| Some((i, (*b)?)))
        .collect();

    let (first, last) = match (known.first(), known.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return balls.to_vec(),
    };

    let mut out: Vec<BallFrame> = vec![None; balls.len()];

    for slot in out.iter_mut().take(first.0) {
        *slot = Some(first.1);
    }

    for pair in known.windows(2) {
        let (from, a) = pair[0];
        let (to, b) = pair[1];
        let span = (to - from) as f32;

        for (i, slot) in out.iter_mut().enumerate().take(to).skip(from) {
            let t = (i - from) as f32 / span;
            let (a, b) = (a.as_slice(), b.as_slice());

            *slot = Some(BBox::ltrb(
                lerp(a[0], b[0], t),
                lerp(a[1], b[1], t),
                lerp(a[2], b[2], t),
                lerp(a[3], b[3], t),
            ));
        }
    }

    for slot in out.iter_mut().skip(last.0) {
        *slot = Some(last.1);
    }

    out
}
