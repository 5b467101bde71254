//! Bar chart rendering for frequency distributions.
//!
//! Charts are drawn with the [`plotters`] bitmap backend and saved as PNG.
//! Each distinct value gets one bar, in the order of the distribution, with
//! horizontal tick labels and horizontal grid lines only.

use crate::domain::model::{field_label, FrequencyDistribution};
use crate::utils::error::{AnalysisError, Result};
use plotters::prelude::*;
use std::path::Path;
use std::process::Command;

/// 10x6 inches at 100 dpi
pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 600;

const BAR_HALF_WIDTH: f64 = 0.4;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ChartStyle {
    /// Labels derived from the column name: `age` gives "Age Distribution" / "Age" / "Frequency".
    pub fn for_field(field: &str, width: u32, height: u32) -> Self {
        let label = field_label(field);
        Self {
            width,
            height,
            title: format!("{} Distribution", label),
            x_label: label,
            y_label: "Frequency".to_string(),
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::for_field("age", DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

fn plot_error(e: impl std::fmt::Display) -> AnalysisError {
    AnalysisError::PlotError {
        message: e.to_string(),
    }
}

/// Renders `distribution` as a bar chart PNG at `output_path`, replacing any existing file.
pub fn render_bar_chart(
    distribution: &FrequencyDistribution,
    style: &ChartStyle,
    output_path: &Path,
) -> Result<()> {
    if distribution.is_empty() {
        return Err(AnalysisError::EmptyDataError {
            field: distribution.field.clone(),
            operation: "plot".to_string(),
        });
    }

    let labels = distribution.labels();
    let max_count = distribution.max_count() as u32;
    let y_max = max_count + max_count / 10 + 1;

    let root = BitMapBackend::new(output_path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    // one unit per bin, ticks on the bin centers
    let x_range =
        (-0.5f64..labels.len() as f64 - 0.5).with_key_points(tick_positions(labels.len()));

    let mut chart = ChartBuilder::on(&root)
        .caption(&style.title, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, 0u32..y_max)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&|x: &f64| tick_label(&labels, *x))
        .x_desc(style.x_label.as_str())
        .y_desc(style.y_label.as_str())
        .axis_desc_style(("sans-serif", 20))
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(plot_error)?;

    let bar_style = BLUE.mix(0.8).filled();
    chart
        .draw_series(
            distribution
                .counts()
                .into_iter()
                .enumerate()
                .map(|(i, count)| {
                    let (left, right) = bar_bounds(i);
                    Rectangle::new([(left, 0), (right, count as u32)], bar_style)
                }),
        )
        .map_err(plot_error)?;

    root.present().map_err(plot_error)?;

    tracing::debug!(
        "Rendered {} bars to {}",
        labels.len(),
        output_path.display()
    );
    Ok(())
}

fn tick_positions(bins: usize) -> Vec<f64> {
    (0..bins).map(|i| i as f64).collect()
}

fn tick_label(labels: &[&str], x: f64) -> String {
    let nearest = x.round();
    if nearest < 0.0 || (x - nearest).abs() > 1e-6 {
        return String::new();
    }
    labels
        .get(nearest as usize)
        .map(|label| label.to_string())
        .unwrap_or_default()
}

/// Horizontal extent of bar `i`, centered on its tick.
fn bar_bounds(i: usize) -> (f64, f64) {
    let center = i as f64;
    (center - BAR_HALF_WIDTH, center + BAR_HALF_WIDTH)
}

/// Whether a chart viewer can be shown: always on macOS and Windows, and on
/// other systems only when an X11 or Wayland display is reachable.
pub fn display_available() -> bool {
    has_display_surface(
        std::env::consts::OS,
        std::env::var_os("DISPLAY").is_some_and(|v| !v.is_empty()),
        std::env::var_os("WAYLAND_DISPLAY").is_some_and(|v| !v.is_empty()),
    )
}

fn has_display_surface(os: &str, x11: bool, wayland: bool) -> bool {
    matches!(os, "macos" | "windows") || x11 || wayland
}

/// Opens the rendered chart with the platform image viewer without waiting for it.
pub fn present_chart(path: &Path) -> std::io::Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };

    command.arg(path).spawn()?;
    Ok(())
}

/// Text rendering needs a system sans-serif font; chart tests skip without one.
#[cfg(test)]
pub(crate) fn fonts_available() -> bool {
    FontDesc::new(FontFamily::SansSerif, 16.0, FontStyle::Normal)
        .box_size("0")
        .is_ok()
}
