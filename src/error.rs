use thiserror::Error;

pub type SvgViewResult<T> = Result<T, SvgViewError>;

/// Host-contract violations surfaced to the embedder.
///
/// Failures of native animation-control primitives are deliberately not
/// represented here; those are `runtime::ControlError` values consumed by
/// the tiered fallbacks and never escape the engine.
#[derive(Debug, Error)]
pub enum SvgViewError {
    #[error("invalid frame size: width={width}, height={height}")]
    InvalidFrameSize { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),
}
