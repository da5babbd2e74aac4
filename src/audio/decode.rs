use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use super::clip::RawClip;
use crate::error::ClipError;

/// Decode every frame of the first audio track, keeping all channels interleaved.
pub fn load_clip(path: &Path) -> Result<RawClip, ClipError> {
    let file = std::fs::File::open(path)
        .map_err(|e| ClipError::Decode(format!("failed to open file: {}", e)))?;

    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .map_err(|e| ClipError::Decode(format!("unrecognized audio format: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| ClipError::Decode("no audio tracks found".into()))?;

    let track_id = track.id;
    let mut channels = track.codec_params.channels.map_or(1, |c| c.count());
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| ClipError::Decode("unknown sample rate".into()))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| ClipError::Decode(format!("failed to create audio decoder: {}", e)))?;

    let mut samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => return Err(ClipError::Decode(e.to_string())),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(SymphoniaError::DecodeError(msg)) => {
                log::warn!("Skipping undecodable packet in {}: {}", path.display(), msg);
                continue;
            }
            Err(e) => return Err(ClipError::Decode(e.to_string())),
        };

        let spec = *decoded.spec();
        channels = spec.channels.count().max(1);

        let mut sample_buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);
        samples.extend_from_slice(sample_buf.samples());
    }

    let clip = RawClip {
        samples,
        channels: channels.max(1),
        sample_rate,
    };

    log::debug!(
        "Decoded {}: {} frames, {} channel(s), {}Hz",
        path.display(),
        clip.frames(),
        clip.channels,
        clip.sample_rate
    );

    Ok(clip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{SampleFormat, WavSpec, WavWriter};

    fn write_wav(path: &Path, channels: u16, sample_rate: u32, samples: &[i16]) {
        let spec = WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn decodes_stereo_wav_interleaved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swing0.wav");
        write_wav(&path, 2, 22050, &[0, 16384, 16384, 0, -16384, 0]);

        let clip = load_clip(&path).unwrap();
        assert_eq!(clip.channels, 2);
        assert_eq!(clip.sample_rate, 22050);
        assert_eq!(clip.frames(), 3);
        assert_eq!(clip.samples.len(), 6);
        assert!((clip.samples[1] - 0.5).abs() < 1e-3);
        assert!((clip.samples[4] + 0.5).abs() < 1e-3);
    }

    #[test]
    fn missing_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_clip(&dir.path().join("hum.wav")).unwrap_err();
        assert!(matches!(err, ClipError::Decode(_)));
    }

    #[test]
    fn garbage_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clash0.wav");
        std::fs::write(&path, b"definitely not a RIFF container").unwrap();
        let err = load_clip(&path).unwrap_err();
        assert!(matches!(err, ClipError::Decode(_)));
    }
}
