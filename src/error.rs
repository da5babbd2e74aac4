use thiserror::Error;

/// Failure of one stage of the per-clip conversion.
///
/// Any of these aborts the whole run; callers attach the file name as context.
#[derive(Debug, Error)]
pub enum ClipError {
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("resample failed: {0}")]
    Resample(String),
    #[error("quantize failed: clip has no dynamic range (every sample is {level})")]
    DegenerateClip { level: f64 },
    #[error("quantize failed: clip contains no samples")]
    Empty,
    #[error("quantize failed: sample {index} is not a finite number ({value})")]
    NonFinite { index: usize, value: f64 },
}
