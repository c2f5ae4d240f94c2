//! Side-by-side B/op and allocs/op panels, one row per benchmark in input
//! order.

use std::path::Path;

use plotters::{coord::Shift, prelude::*};

use super::{
    label_area_for, slot_label, ChartConfig, ChartKind, AXIS_DESC_FONT_SIZE, BAR_ALPHA, COLOR_NEW,
    COLOR_OLD, FONT, LEGEND_FONT_SIZE, TICK_FONT_SIZE, TITLE_FONT_SIZE,
};
use crate::{
    error::{BenchplotError, Result},
    report::{Entry, Report},
    utils::display_name,
};

/// Thickness of one bar in row units.
pub const BAR_HEIGHT: f64 = 0.3;

/// Distance of each bar's center from the row center.
pub const BAR_OFFSET: f64 = 0.15;

/// One of the two metrics drawn side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocMetric {
    Bytes,
    Allocs,
}

impl AllocMetric {
    pub fn title(self) -> &'static str {
        match self {
            AllocMetric::Bytes => "Bytes per Operation",
            AllocMetric::Allocs => "Allocations per Operation",
        }
    }

    pub fn axis_desc(self) -> &'static str {
        match self {
            AllocMetric::Bytes => "B/op (lower is better)",
            AllocMetric::Allocs => "allocs/op (lower is better)",
        }
    }

    /// `(old, new)` value of this metric for `entry`.
    pub fn values(self, entry: &Entry) -> (f64, f64) {
        match self {
            AllocMetric::Bytes => (entry.old_bytes_per_op, entry.new_bytes_per_op),
            AllocMetric::Allocs => (entry.old_allocs_per_op, entry.new_allocs_per_op),
        }
    }
}

pub fn default_config(report: &Report, output_dir: &Path) -> ChartConfig {
    let n = report.entries.len() as u32;
    ChartConfig::builder()
        .caption(format!(
            "Memory Allocation Comparison: {} vs {}",
            report.old_label, report.new_label
        ))
        .path(output_dir.join(ChartKind::Allocations.file_name()))
        .width(2700)
        .height((n * 45).max(900))
        .build()
}

pub fn render(report: &Report, config: &ChartConfig) -> Result<()> {
    draw(report, config)
        .map_err(|err| BenchplotError::render(ChartKind::Allocations.name(), err))
}

fn draw(
    report: &Report,
    config: &ChartConfig,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let names: Vec<String> = report.entries.iter().map(|e| display_name(&e.name)).collect();

    let root = BitMapBackend::new(&config.path, (config.width, config.height))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let body = root.titled(&config.caption, (FONT, TITLE_FONT_SIZE))?;
    let panels = body.split_evenly((1, 2));

    for (area, metric) in panels.iter().zip([AllocMetric::Bytes, AllocMetric::Allocs]) {
        draw_panel(area, report, &names, metric)?;
    }

    root.present()?;
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    report: &Report,
    names: &[String],
    metric: AllocMetric,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let n = report.entries.len();
    let max = report
        .entries
        .iter()
        .map(|e| {
            let (old, new) = metric.values(e);
            old.max(new)
        })
        .fold(0.0_f64, f64::max);
    let x_max = if max > 0.0 { max * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .caption(metric.title(), (FONT, AXIS_DESC_FONT_SIZE + 4))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(label_area_for(names))
        .build_cartesian_2d(0.0..x_max, -0.5..(n as f64 - 0.5))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.3))
        .y_labels(n + 1)
        .y_label_formatter(&|y| slot_label(names, *y))
        .label_style((FONT, TICK_FONT_SIZE))
        .x_desc(metric.axis_desc())
        .axis_desc_style((FONT, AXIS_DESC_FONT_SIZE))
        .draw()?;

    let old_color = COLOR_OLD.mix(BAR_ALPHA);
    let new_color = COLOR_NEW.mix(BAR_ALPHA);

    chart
        .draw_series(report.entries.iter().enumerate().map(|(i, e)| {
            let y = i as f64 - BAR_OFFSET;
            Rectangle::new(
                [
                    (0.0, y - BAR_HEIGHT / 2.0),
                    (metric.values(e).0, y + BAR_HEIGHT / 2.0),
                ],
                old_color.filled(),
            )
        }))?
        .label(report.old_label.as_str())
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 6), (x + 20, y + 6)], old_color.filled())
        });

    chart
        .draw_series(report.entries.iter().enumerate().map(|(i, e)| {
            let y = i as f64 + BAR_OFFSET;
            Rectangle::new(
                [
                    (0.0, y - BAR_HEIGHT / 2.0),
                    (metric.values(e).1, y + BAR_HEIGHT / 2.0),
                ],
                new_color.filled(),
            )
        }))?
        .label(report.new_label.as_str())
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 6), (x + 20, y + 6)], new_color.filled())
        });

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font((FONT, LEGEND_FONT_SIZE - 2))
        .draw()?;

    Ok(())
}
