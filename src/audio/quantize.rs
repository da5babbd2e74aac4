use super::clip::{QuantizedClip, ResampledClip};
use crate::error::ClipError;

/// Stretch the clip's own min..max range onto 0..=255.
///
/// Every clip is normalized independently, so a quiet recording ends up using
/// the full 8-bit range just like a loud one.
pub fn quantize(clip: &ResampledClip) -> Result<QuantizedClip, ClipError> {
    let non_finite = clip.samples.iter().enumerate().find(|(_, v)| !v.is_finite());
    if let Some((index, &value)) = non_finite {
        return Err(ClipError::NonFinite { index, value });
    }

    match clip.samples.len() {
        0 => return Err(ClipError::Empty),
        // One sample has no range to normalize against; it maps to the bottom.
        1 => return Ok(QuantizedClip { samples: vec![0] }),
        _ => {}
    }

    let (min, max) = clip
        .samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let range = max - min;
    if range <= 0.0 {
        return Err(ClipError::DegenerateClip { level: min });
    }

    let samples = clip
        .samples
        .iter()
        .map(|&v| {
            let n = (v - min) / range;
            (n * 255.0).floor().clamp(0.0, 255.0) as u8
        })
        .collect();

    Ok(QuantizedClip { samples })
}
