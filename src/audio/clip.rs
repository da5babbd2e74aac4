/// Decoded recording, interleaved frame by frame.
#[derive(Clone, Debug)]
pub struct RawClip {
    pub samples: Vec<f32>,
    /// Always at least 1
    pub channels: usize,
    pub sample_rate: u32,
}

impl RawClip {
    pub fn frames(&self) -> usize {
        self.samples.len().div_ceil(self.channels.max(1))
    }
}

/// Single-channel recording at its native rate
#[derive(Clone, Debug, PartialEq)]
pub struct MonoClip {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

/// Recording at the target rate, arbitrary scale
#[derive(Clone, Debug)]
pub struct ResampledClip {
    pub samples: Vec<f64>,
    pub sample_rate: u32,
}

/// Output-ready 8-bit unsigned samples
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuantizedClip {
    pub samples: Vec<u8>,
}

impl QuantizedClip {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
