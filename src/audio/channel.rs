use super::clip::{MonoClip, RawClip};

/// Keep channel 0 of every frame. Other channels are dropped, never mixed in.
pub fn reduce_to_mono(clip: &RawClip) -> MonoClip {
    let samples = if clip.channels <= 1 {
        clip.samples.clone()
    } else {
        clip.samples
            .chunks(clip.channels)
            .map(|frame| frame[0])
            .collect()
    };

    MonoClip {
        samples,
        sample_rate: clip.sample_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stereo_keeps_first_channel() {
        // ch0 = [0.0, 1.0], ch1 = [1.0, 0.0]
        let raw = RawClip {
            samples: vec![0.0, 1.0, 1.0, 0.0],
            channels: 2,
            sample_rate: 48000,
        };
        let mono = reduce_to_mono(&raw);
        assert_eq!(mono.samples, vec![0.0, 1.0]);
        assert_eq!(mono.sample_rate, 48000);
    }

    #[test]
    fn mono_passes_through() {
        let raw = RawClip {
            samples: vec![0.25, -0.5, 0.75],
            channels: 1,
            sample_rate: 8000,
        };
        let mono = reduce_to_mono(&raw);
        assert_eq!(mono.samples, raw.samples);
        assert_eq!(mono.sample_rate, 8000);
    }

    #[test]
    fn partial_trailing_frame_keeps_its_first_sample() {
        let raw = RawClip {
            samples: vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7],
            channels: 3,
            sample_rate: 44100,
        };
        assert_eq!(reduce_to_mono(&raw).samples, vec![0.1, 0.4, 0.7]);
    }
}
