//! Mean percent change per category.

use std::{collections::BTreeMap, path::Path};

use plotters::{
    prelude::*,
    style::{
        text_anchor::{HPos, Pos, VPos},
        FontStyle,
    },
};

use super::{
    change_color, label_area_for, signed_range, slot_label, ChartConfig, ChartKind,
    AXIS_DESC_FONT_SIZE, BAR_ALPHA, FONT, TICK_FONT_SIZE, TITLE_FONT_SIZE, VALUE_FONT_SIZE,
};
use crate::{
    error::{BenchplotError, Result},
    report::{Entry, Report},
    utils::format_signed_pct,
};

/// Thickness of one bar in row units.
pub const BAR_HEIGHT: f64 = 0.8;

/// Rollup of every entry sharing one `category`.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAggregate {
    pub category: String,
    pub mean_change_pct: f64,
    pub count: usize,
}

impl CategoryAggregate {
    /// Axis label, e.g. `matching (n=4)`.
    pub fn label(&self) -> String {
        format!("{} (n={})", self.category, self.count)
    }
}

/// Group entries by category and average their ns/op change.
///
/// The result is sorted by category name, not by first appearance.
pub fn category_rollup(entries: &[Entry]) -> Vec<CategoryAggregate> {
    let mut changes: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for entry in entries {
        changes
            .entry(entry.category.as_str())
            .or_default()
            .push(entry.ns_per_op_change_pct);
    }

    changes
        .into_iter()
        .map(|(category, deltas)| CategoryAggregate {
            category: category.to_string(),
            mean_change_pct: deltas.iter().sum::<f64>() / deltas.len() as f64,
            count: deltas.len(),
        })
        .collect()
}

pub fn default_config(report: &Report, output_dir: &Path) -> ChartConfig {
    let categories = category_rollup(&report.entries).len() as u32;
    ChartConfig::builder()
        .caption(format!(
            "Performance Change by Category: {} -> {}",
            report.old_label, report.new_label
        ))
        .path(output_dir.join(ChartKind::Category.file_name()))
        .width(1500)
        .height((categories * 90).max(600))
        .build()
}

pub fn render(report: &Report, config: &ChartConfig) -> Result<()> {
    draw(report, config)
        .map_err(|err| BenchplotError::render(ChartKind::Category.name(), err))
}

fn draw(
    report: &Report,
    config: &ChartConfig,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let rollup = category_rollup(&report.entries);
    let labels: Vec<String> = rollup.iter().map(CategoryAggregate::label).collect();
    let k = rollup.len();
    let (x_min, x_max) = signed_range(rollup.iter().map(|c| c.mean_change_pct), 0.15);
    let y_range = -0.5..(k as f64 - 0.5);

    let root = BitMapBackend::new(&config.path, (config.width, config.height))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.caption, (FONT, TITLE_FONT_SIZE - 4))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(label_area_for(&labels))
        .build_cartesian_2d(x_min..x_max, y_range.clone())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.3))
        .y_labels(k + 1)
        .y_label_formatter(&|y| slot_label(&labels, *y))
        .label_style((FONT, TICK_FONT_SIZE))
        .x_desc("Average % Change (negative = improvement)")
        .axis_desc_style((FONT, AXIS_DESC_FONT_SIZE))
        .draw()?;

    chart.draw_series(rollup.iter().enumerate().map(|(i, c)| {
        let v = c.mean_change_pct;
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

    let offset = (x_max - x_min) * 0.006;
    chart.draw_series(rollup.iter().enumerate().map(|(i, c)| {
        let v = c.mean_change_pct;
        let (x, anchor) = if v >= 0.0 {
            (v + offset, HPos::Left)
        } else {
            (v - offset, HPos::Right)
        };
        Text::new(
            format_signed_pct(v, 1),
            (x, i as f64),
            (FONT, VALUE_FONT_SIZE + 3, FontStyle::Bold)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(anchor, VPos::Center)),
        )
    }))?;

    root.present()?;
    Ok(())
}
