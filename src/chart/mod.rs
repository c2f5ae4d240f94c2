//! Chart rendering.
//!
//! Every renderer reads the same [`Report`], draws onto its own
//! [`BitMapBackend`] surface and writes one PNG into the output directory.
//! No data flows between renderers.

use std::{
    fs,
    path::{Path, PathBuf},
};

use plotters::prelude::*;

use crate::{
    error::{BenchplotError, Result},
    print_if,
    report::Report,
};

pub mod allocations;
pub mod category;
pub mod comparison;
pub mod delta;

/// Bars for the old run.
pub const COLOR_OLD: RGBColor = RGBColor(0x4A, 0x90, 0xD9);
/// Bars for the new run.
pub const COLOR_NEW: RGBColor = RGBColor(0xE7, 0x4C, 0x3C);
pub const COLOR_IMPROVED: RGBColor = RGBColor(0x27, 0xAE, 0x60);
pub const COLOR_REGRESSED: RGBColor = RGBColor(0xE7, 0x4C, 0x3C);
pub const COLOR_NEUTRAL: RGBColor = RGBColor(0x95, 0xA5, 0xA6);

/// Opacity applied to every bar.
pub const BAR_ALPHA: f64 = 0.85;

/// Changes within +/- this many percent are treated as noise.
pub const DEADBAND_PCT: f64 = 1.0;

pub(crate) const FONT: &str = "sans-serif";
pub(crate) const TITLE_FONT_SIZE: u32 = 32;
pub(crate) const AXIS_DESC_FONT_SIZE: u32 = 22;
pub(crate) const TICK_FONT_SIZE: u32 = 16;
pub(crate) const LEGEND_FONT_SIZE: u32 = 18;
pub(crate) const VALUE_FONT_SIZE: u32 = 15;

/// How a percent change reads once the deadband is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeClass {
    Improved,
    Regressed,
    Neutral,
}

impl ChangeClass {
    /// Classify a signed percent change. Both boundaries are neutral.
    pub fn of(change_pct: f64) -> Self {
        if change_pct < -DEADBAND_PCT {
            ChangeClass::Improved
        } else if change_pct > DEADBAND_PCT {
            ChangeClass::Regressed
        } else {
            ChangeClass::Neutral
        }
    }

    pub fn color(self) -> RGBColor {
        match self {
            ChangeClass::Improved => COLOR_IMPROVED,
            ChangeClass::Regressed => COLOR_REGRESSED,
            ChangeClass::Neutral => COLOR_NEUTRAL,
        }
    }
}

/// Bar color for a signed percent change.
pub fn change_color(change_pct: f64) -> RGBColor {
    ChangeClass::of(change_pct).color()
}

/// The four charts, each with a fixed output file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Comparison,
    Delta,
    Allocations,
    Category,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Comparison,
        ChartKind::Delta,
        ChartKind::Allocations,
        ChartKind::Category,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::Comparison => "ns_per_op_comparison.png",
            ChartKind::Delta => "pct_change.png",
            ChartKind::Allocations => "allocs_comparison.png",
            ChartKind::Category => "category_summary.png",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Comparison => "ns/op comparison",
            ChartKind::Delta => "percent change",
            ChartKind::Allocations => "allocations",
            ChartKind::Category => "category summary",
        }
    }
}

/// Configuration for a single chart: caption, output path and canvas size
/// in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub caption: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl ChartConfig {
    /// Builder pattern for configuring the chart
    pub fn builder() -> ChartConfigBuilder {
        ChartConfigBuilder::default()
    }
}

/// Builder for [`ChartConfig`].
#[derive(Debug, Default)]
pub struct ChartConfigBuilder {
    caption: Option<String>,
    path: Option<PathBuf>,
    width: Option<u32>,
    height: Option<u32>,
}

impl ChartConfigBuilder {
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Build the final `ChartConfig`. Unset fields fall back to an empty
    /// caption, `chart.png` and a 1500x900 canvas.
    pub fn build(self) -> ChartConfig {
        ChartConfig {
            caption: self.caption.unwrap_or_default(),
            path: self.path.unwrap_or_else(|| PathBuf::from("chart.png")),
            width: self.width.unwrap_or(1500),
            height: self.height.unwrap_or(900),
        }
    }
}

/// Where and how loudly to render.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub output_dir: PathBuf,
    pub verbose: bool,
}

/// Check that text can be laid out before any file is touched.
///
/// The bitmap backend needs a system sans-serif font for every caption and
/// tick label; without one each chart would fail halfway through.
pub fn check_font_support() -> Result<()> {
    (FONT, TICK_FONT_SIZE)
        .into_font()
        .box_size("ns/op 0123456789")
        .map(|_| ())
        .map_err(|err| BenchplotError::MissingCapability {
            reason: format!("no usable '{FONT}' font for chart text: {err}"),
        })
}

/// Draw all four charts for `report` into `options.output_dir`.
///
/// Returns the written paths in drawing order. A failure stops the run;
/// charts written before it remain on disk.
pub fn render_all(report: &Report, options: &RenderOptions) -> Result<Vec<PathBuf>> {
    if report.is_empty() {
        return Err(BenchplotError::NoEntries);
    }
    check_font_support()?;

    fs::create_dir_all(&options.output_dir).map_err(|source| BenchplotError::Io {
        path: options.output_dir.clone(),
        source,
    })?;

    print_if!(
        options.verbose,
        "{} entries in {} categories",
        report.entries.len(),
        category::category_rollup(&report.entries).len()
    );

    let mut written = Vec::with_capacity(ChartKind::ALL.len());
    for kind in ChartKind::ALL {
        let config = default_config(kind, report, &options.output_dir);
        print_if!(
            options.verbose,
            "Rendering {} ({}x{} px)",
            kind.name(),
            config.width,
            config.height
        );

        match kind {
            ChartKind::Comparison => comparison::render(report, &config)?,
            ChartKind::Delta => delta::render(report, &config)?,
            ChartKind::Allocations => allocations::render(report, &config)?,
            ChartKind::Category => category::render(report, &config)?,
        }

        println!("Saved: {}", config.path.display());
        written.push(config.path);
    }

    Ok(written)
}

/// Layout for `kind`, sized from the number of rows it will draw.
pub fn default_config(kind: ChartKind, report: &Report, output_dir: &Path) -> ChartConfig {
    match kind {
        ChartKind::Comparison => comparison::default_config(report, output_dir),
        ChartKind::Delta => delta::default_config(report, output_dir),
        ChartKind::Allocations => allocations::default_config(report, output_dir),
        ChartKind::Category => category::default_config(report, output_dir),
    }
}

/// Tick label for a slot axis: the name at an integer position, nothing in
/// between.
pub(crate) fn slot_label(names: &[String], value: f64) -> String {
    let idx = value.round();
    if idx < 0.0 || (value - idx).abs() > 0.3 {
        return String::new();
    }
    names.get(idx as usize).cloned().unwrap_or_default()
}

/// Pixels reserved for a column of row labels.
pub(crate) fn label_area_for(names: &[String]) -> u32 {
    let longest = names.iter().map(|n| n.chars().count()).max().unwrap_or(0) as u32;
    (longest * (TICK_FONT_SIZE / 2 + 1) + 20).clamp(60, 480)
}

/// `(min, max)` of `values` stretched to include zero and padded on the
/// side(s) where bar labels go.
pub(crate) fn signed_range(values: impl IntoIterator<Item = f64>, pad_ratio: f64) -> (f64, f64) {
    let (lo, hi) = values
        .into_iter()
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let pad = ((hi - lo) * pad_ratio).max(1.0);
    let lo = if lo < 0.0 { lo - pad } else { -pad * 0.25 };
    let hi = if hi > 0.0 { hi + pad } else { pad * 0.25 };
    (lo, hi)
}
