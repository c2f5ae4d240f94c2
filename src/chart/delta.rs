//! Horizontal percent-change bars, most improved first.

use std::path::Path;

use plotters::{
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use super::{
    change_color, label_area_for, signed_range, slot_label, ChartConfig, ChartKind,
    AXIS_DESC_FONT_SIZE, BAR_ALPHA, FONT, TICK_FONT_SIZE, TITLE_FONT_SIZE, VALUE_FONT_SIZE,
};
use crate::{
    error::{BenchplotError, Result},
    report::{Entry, Report},
    utils::{display_name, format_signed_pct},
};

/// Thickness of one bar in row units.
pub const BAR_HEIGHT: f64 = 0.8;

pub fn default_config(report: &Report, output_dir: &Path) -> ChartConfig {
    let n = report.entries.len() as u32;
    ChartConfig::builder()
        .caption(format!(
            "Performance Change: {} -> {}",
            report.old_label, report.new_label
        ))
        .path(output_dir.join(ChartKind::Delta.file_name()))
        .width(1800)
        .height((n * 52).max(900))
        .build()
}

/// Entries ordered by percent change, ascending. Ties keep input order.
pub fn sorted_by_change(entries: &[Entry]) -> Vec<&Entry> {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.ns_per_op_change_pct.total_cmp(&b.ns_per_op_change_pct));
    sorted
}

pub fn render(report: &Report, config: &ChartConfig) -> Result<()> {
    draw(report, config)
        .map_err(|err| BenchplotError::render(ChartKind::Delta.name(), err))
}

fn draw(
    report: &Report,
    config: &ChartConfig,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let sorted = sorted_by_change(&report.entries);
    let names: Vec<String> = sorted.iter().map(|e| display_name(&e.name)).collect();
    let n = sorted.len();
    let (x_min, x_max) = signed_range(sorted.iter().map(|e| e.ns_per_op_change_pct), 0.12);
    let y_range = -0.5..(n as f64 - 0.5);

    let root = BitMapBackend::new(&config.path, (config.width, config.height))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.caption, (FONT, TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(label_area_for(&names))
        .build_cartesian_2d(x_min..x_max, y_range.clone())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.3))
        .y_labels(n + 1)
        .y_label_formatter(&|y| slot_label(&names, *y))
        .label_style((FONT, TICK_FONT_SIZE))
        .x_desc("% Change (negative = improvement)")
        .axis_desc_style((FONT, AXIS_DESC_FONT_SIZE))
        .draw()?;

    chart.draw_series(sorted.iter().enumerate().map(|(i, e)| {
        let v = e.ns_per_op_change_pct;
        let y = i as f64;
        Rectangle::new(
            [(0.0, y - BAR_HEIGHT / 2.0), (v, y + BAR_HEIGHT / 2.0)],
            change_color(v).mix(BAR_ALPHA).filled(),
        )
    }))?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, y_range.start), (0.0, y_range.end)],
        BLACK.stroke_width(2),
    )))?;

    // Labels sit just past the bar end, on the side the bar grows towards.
    let offset = (x_max - x_min) * 0.008;
    chart.draw_series(sorted.iter().enumerate().map(|(i, e)| {
        let v = e.ns_per_op_change_pct;
        let (x, anchor) = if v >= 0.0 {
            (v + offset, HPos::Left)
        } else {
            (v - offset, HPos::Right)
        };
        Text::new(
            format_signed_pct(v, 1),
            (x, i as f64),
            (FONT, VALUE_FONT_SIZE)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(anchor, VPos::Center)),
        )
    }))?;

    root.present()?;
    Ok(())
}
