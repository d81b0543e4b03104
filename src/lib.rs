pub mod anchors;
pub mod ball;
pub mod bbox;
pub mod detector;
pub mod error;
pub mod frame;
pub mod math;
pub mod resolver;
pub mod state;
pub mod stats;
pub mod timeline;

pub use bbox::BBox;
pub use detector::{BallAcquisitionDetector, PossessionConfig};
pub use frame::{BallFrame, PlayerFrame, PlayerId};
pub use state::{FrameEvent, PossessionState};
pub use timeline::PossessionTimeline;

use error::Error;

pub trait PossessionDetection {
    fn detect(
        &self,
        players: &[PlayerFrame],
        balls: &[BallFrame],
    ) -> Result<PossessionTimeline, Error>;
}
