//! Frequency bar chart, drawn with plotters either into an RGB buffer for the
//! dashboard or straight to a PNG file.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::error::{LotoError, LotoResult};

pub const CHART_SIZE: (u32, u32) = (1000, 400);

/// Renders the chart into a freshly allocated `width * height * 3` RGB buffer.
pub fn render_rgb(counts: &[u32], window: usize, size: (u32, u32)) -> LotoResult<Vec<u8>> {
    let mut buffer = vec![0u8; (size.0 * size.1 * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
        draw_frequency(&root, counts, window)?;
        root.present().map_err(chart_err)?;
    }
    Ok(buffer)
}

pub fn write_png(path: &Path, counts: &[u32], window: usize) -> LotoResult<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    draw_frequency(&root, counts, window)?;
    root.present().map_err(chart_err)?;
    info!(path = %path.display(), "frequency chart written");
    Ok(())
}

fn draw_frequency(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    counts: &[u32],
    window: usize,
) -> LotoResult<()> {
    root.fill(&WHITE).map_err(chart_err)?;

    let last = counts.len().max(1) as u32;
    let mut chart = ChartBuilder::on(root)
        .caption(format!("Frequency (last {window} draws)"), ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(45)
        .build_cartesian_2d((1u32..last).into_segmented(), 0u32..y_upper_bound(counts))
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Number")
        .y_desc("Occurrences")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.7).filled())
                .margin(2)
                .data(counts.iter().enumerate().map(|(i, &c)| (i as u32 + 1, c))),
        )
        .map_err(chart_err)?;

    Ok(())
}

/// Headroom above the tallest bar, never below 1 so an empty chart still has
/// an axis.
fn y_upper_bound(counts: &[u32]) -> u32 {
    let max = counts.iter().copied().max().unwrap_or(0);
    (max + max / 10).max(max + 1)
}

fn chart_err<E: std::error::Error>(err: E) -> LotoError {
    LotoError::Chart(err.to_string())
}
