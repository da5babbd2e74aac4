//! Sample-rate conversion to the fixed playback rate.
//!
//! Uses rubato's windowed-sinc resampler at its most expensive settings. The
//! output is quantized to 8 bits afterwards, so interpolation noise has very
//! little headroom to hide in.

use rubato::{
    Resampler as RubatoResampler, SincFixedIn, SincInterpolationParameters,
    SincInterpolationType, WindowFunction,
};

use super::clip::{MonoClip, ResampledClip};
use crate::error::ClipError;

/// Playback rate of the PWM output
pub const TARGET_SAMPLE_RATE: u32 = 44100;

const SINC_LEN: usize = 256;

/// Upper bound on zero-input flush calls while draining the resampler tail.
const MAX_FLUSHES: usize = 4096;

/// Number of output frames for `input_len` frames converted between the two rates.
pub fn expected_len(input_len: usize, native_rate: u32, target_rate: u32) -> usize {
    (input_len as f64 * target_rate as f64 / native_rate as f64).round() as usize
}

/// Resample a mono clip to `target_rate`.
///
/// The result has exactly `expected_len` frames, front-aligned with the input
/// (an impulse at input frame n lands at output frame n * ratio). The tail is
/// flushed with silence.
pub fn resample(clip: &MonoClip, target_rate: u32) -> Result<ResampledClip, ClipError> {
    if clip.samples.is_empty() {
        return Err(ClipError::Resample("input clip has no samples".into()));
    }
    if clip.sample_rate == 0 || target_rate == 0 {
        return Err(ClipError::Resample(format!(
            "invalid conversion {}Hz -> {}Hz",
            clip.sample_rate, target_rate
        )));
    }

    let input: Vec<f64> = clip.samples.iter().map(|&s| s as f64).collect();

    if clip.sample_rate == target_rate {
        log::debug!("Sample rate already at {}Hz, skipping resample", target_rate);
        return Ok(ResampledClip {
            samples: input,
            sample_rate: target_rate,
        });
    }

    let out_len = expected_len(input.len(), clip.sample_rate, target_rate);
    if out_len == 0 {
        return Err(ClipError::Resample(format!(
            "{} sample(s) at {}Hz is too short to produce any output at {}Hz",
            input.len(),
            clip.sample_rate,
            target_rate
        )));
    }

    let ratio = target_rate as f64 / clip.sample_rate as f64;
    let chunk_size = input.len().max(SINC_LEN);
    let mut resampler = SincFixedIn::<f64>::new(ratio, 1.0, sinc_params(), chunk_size, 1)
        .map_err(|e| ClipError::Resample(format!("failed to create resampler: {}", e)))?;

    log::debug!(
        "Resampling {} frames {}Hz -> {}Hz (ratio {:.5})",
        input.len(),
        clip.sample_rate,
        target_rate,
        ratio
    );

    let waves_in = vec![input];
    // process_partial output starts aligned with input frame 0; output_delay()
    // does not apply to it.
    let mut output = Vec::with_capacity(out_len);
    let first = resampler
        .process_partial(Some(waves_in.as_slice()), None)
        .map_err(|e| ClipError::Resample(e.to_string()))?;
    output.extend(first.into_iter().next().unwrap_or_default());

    let mut flushes = 0;
    while output.len() < out_len {
        if flushes == MAX_FLUSHES {
            return Err(ClipError::Resample(format!(
                "resampler stalled after {} of {} frames",
                output.len(),
                out_len
            )));
        }
        let tail = resampler
            .process_partial::<Vec<f64>>(None, None)
            .map_err(|e| ClipError::Resample(e.to_string()))?;
        output.extend(tail.into_iter().next().unwrap_or_default());
        flushes += 1;
    }

    output.truncate(out_len);

    Ok(ResampledClip {
        samples: output,
        sample_rate: target_rate,
    })
}

fn sinc_params() -> SincInterpolationParameters {
    SincInterpolationParameters {
        sinc_len: SINC_LEN,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Cubic,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    }
}
