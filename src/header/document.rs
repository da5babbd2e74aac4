use super::aggregate::{render_counts, render_tables};
use super::category::{ListKind, TuneId};
use super::record::RecordStyle;
use crate::audio::resample::TARGET_SAMPLE_RATE;

/// Text surrounding the per-tune records.
#[derive(Clone, Debug)]
pub struct HeaderOptions {
    /// Shown on the `@file` line
    pub file_name: String,
    pub brief: String,
    /// Header pulled in with `#include <...>`; empty to skip
    pub include: String,
    pub style: RecordStyle,
}

/// One rendered record and what the aggregate tables need to know about it.
#[derive(Clone, Debug)]
pub struct EmittedTune {
    pub id: TuneId,
    pub source: String,
    pub len: usize,
    pub record: String,
}

pub fn render_preamble(opts: &HeaderOptions) -> String {
    let mut out = String::new();
    out.push_str("/**\n");
    out.push_str(&format!(" * @file    {}\n", opts.file_name));
    out.push_str(&format!(" * @brief   {}\n", opts.brief));
    out.push_str(" *\n");
    out.push_str(&format!(" * Unsigned 8-bit PWM samples at {} Hz.\n", TARGET_SAMPLE_RATE));
    out.push_str(" */\n\n\n");
    if !opts.include.is_empty() {
        out.push_str(&format!("#include <{}>\n\n\n", opts.include));
    }
    out
}

/// Assemble the full header from records already in emission order.
pub fn render_document(opts: &HeaderOptions, tunes: &[EmittedTune]) -> String {
    let count_of = |list: ListKind| tunes.iter().filter(|t| t.id.kind() == list.kind()).count();
    let swing = count_of(ListKind::Swing);
    let clash = count_of(ListKind::Clash);
    let total: usize = tunes.iter().map(|t| t.len).sum();

    let mut out = render_preamble(opts);
    for tune in tunes {
        out.push_str(&tune.record);
    }
    out.push_str(&render_counts(swing, clash));
    out.push_str(&render_tables(ListKind::Swing, swing));
    out.push_str(&render_tables(ListKind::Clash, clash));
    out.push_str(&format!("// Total size: {}\n\n", total));
    out
}
