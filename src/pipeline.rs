use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::audio::channel::reduce_to_mono;
use crate::audio::clip::QuantizedClip;
use crate::audio::decode::load_clip;
use crate::audio::quantize::quantize;
use crate::audio::resample::{resample, TARGET_SAMPLE_RATE};
use crate::header::category::{plan_tunes, TunePlan};
use crate::header::document::{render_document, EmittedTune, HeaderOptions};
use crate::header::record::render_record;

pub struct RunOptions {
    pub input_dir: PathBuf,
    pub extensions: Vec<String>,
    pub header: HeaderOptions,
}

#[derive(Debug)]
pub struct RunSummary {
    pub tunes: Vec<(String, usize)>,
    pub swing_count: usize,
    pub clash_count: usize,
    pub total_samples: usize,
    pub ignored: Vec<String>,
    pub unrecognized: Vec<String>,
}

/// File names in `dir` with a matching extension, sorted by name.
pub fn discover_clips(dir: &Path, extensions: &[String]) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read input directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        // Follows symlinks, unlike DirEntry::file_type
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => continue,
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        }
        let matches_ext = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)));
        if !matches_ext {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        } else {
            log::warn!("Skipping non UTF-8 file name: {}", path.display());
        }
    }

    names.sort();
    Ok(names)
}

/// Decode, reduce, resample and quantize one recording.
pub fn convert_clip(path: &Path) -> Result<QuantizedClip> {
    let raw = load_clip(path)?;
    let mono = reduce_to_mono(&raw);
    let resampled = resample(&mono, TARGET_SAMPLE_RATE)?;
    let quantized = quantize(&resampled)?;

    log::info!(
        "{}: {} frames @ {}Hz, {} channel(s) -> {} samples @ {}Hz",
        path.display(),
        raw.frames(),
        raw.sample_rate,
        raw.channels,
        quantized.len(),
        resampled.sample_rate
    );

    Ok(quantized)
}

/// Convert every planned tune and render the complete header text.
pub fn build_header(
    plan: &TunePlan,
    input_dir: &Path,
    header: &HeaderOptions,
    pb: &ProgressBar,
) -> Result<(String, Vec<EmittedTune>)> {
    let planned = plan.tunes();
    pb.set_length(planned.len() as u64);

    let mut emitted = Vec::with_capacity(planned.len());
    for tune in &planned {
        pb.set_message(tune.file_name.clone());
        let path = input_dir.join(&tune.file_name);
        let clip = convert_clip(&path)
            .with_context(|| format!("Failed converting {}", path.display()))?;

        emitted.push(EmittedTune {
            id: tune.id,
            record: render_record(&tune.id, &tune.file_name, &clip, &header.style),
            len: clip.len(),
            source: tune.file_name.clone(),
        });
        pb.inc(1);
    }

    Ok((render_document(header, &emitted), emitted))
}

/// Write through a temp file in the same directory so a failed run never
/// leaves a partial header behind.
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(contents.as_bytes())
        .context("Failed to write header")?;
    tmp.as_file().sync_all().context("Failed to flush header")?;
    tmp.persist(path)
        .with_context(|| format!("Failed to move header into place: {}", path.display()))?;
    Ok(())
}

/// Discover, plan, convert and (unless `output` is None) write the header.
pub fn run(opts: &RunOptions, output: Option<&Path>, pb: &ProgressBar) -> Result<RunSummary> {
    let names = discover_clips(&opts.input_dir, &opts.extensions)?;
    log::info!("Found {} candidate file(s) in {}", names.len(), opts.input_dir.display());

    let plan = plan_tunes(&names);
    for name in &plan.unrecognized {
        log::debug!("No category for {}, skipping", name);
    }

    let (text, emitted) = build_header(&plan, &opts.input_dir, &opts.header, pb)?;

    if let Some(path) = output {
        write_atomically(path, &text)?;
        log::info!("Wrote {} ({} bytes)", path.display(), text.len());
    }

    Ok(RunSummary {
        total_samples: emitted.iter().map(|t| t.len).sum(),
        swing_count: plan.swing.len(),
        clash_count: plan.clash.len(),
        tunes: emitted.into_iter().map(|t| (t.source, t.len)).collect(),
        ignored: plan.ignored,
        unrecognized: plan.unrecognized,
    })
}
