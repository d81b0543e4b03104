use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("Malformed box: ({left}, {top}, {right}, {bottom})")]
    MalformedBox {
        left: f32,
        top: f32,
        right: f32,
        bottom: f32,
    },

    #[error("Degenerate ball box: {width}x{height} has no area")]
    DegenerateBall { width: f32, height: f32 },

    #[error("Length mismatch: {players} player frames vs {balls} ball frames")]
    LengthMismatch { players: usize, balls: usize },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
