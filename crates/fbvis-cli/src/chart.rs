//! Parameter-deviation chart rendering.

use anyhow::Result;
use fbvis_core::domain::DeviationSeries;
use plotters::prelude::*;
use std::path::Path;

/// Renders one line series per parameter: X = iteration index, Y = percent
/// deviation from the initial value. Returns `false` without touching the
/// output path when no parameter has any deviation data.
pub(crate) fn render_deviation_chart(
    series: &[DeviationSeries],
    out_path: &Path,
    width: u32,
    height: u32,
) -> Result<bool> {
    let populated: Vec<&DeviationSeries> = series
        .iter()
        .filter(|entry| !entry.deviations.is_empty())
        .collect();
    if populated.is_empty() {
        return Ok(false);
    }

    let iteration_count = populated
        .iter()
        .map(|entry| entry.deviations.len())
        .max()
        .unwrap_or(1);
    let x_max = (iteration_count.saturating_sub(1)).max(1) as f64;

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for entry in &populated {
        for &value in &entry.deviations {
            y_min = y_min.min(value);
            y_max = y_max.max(value);
        }
    }
    // Flat traces still need a visible band around zero deviation.
    let span = (y_max - y_min).max(1.0);
    let y_low = y_min - 0.05 * span;
    let y_high = y_max + 0.05 * span;

    let root = BitMapBackend::new(out_path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption("Parameter deviation from initial value", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0f64..x_max, y_low..y_high)?;

    chart
        .configure_mesh()
        .x_desc("iteration")
        .y_desc("deviation from initial value (%)")
        .draw()?;

    for (index, entry) in populated.iter().enumerate() {
        let color = Palette99::pick(index).mix(0.9);
        let points: Vec<(f64, f64)> = entry
            .deviations
            .iter()
            .enumerate()
            .map(|(iteration, &value)| (iteration as f64, value))
            .collect();
        chart
            .draw_series(LineSeries::new(points, &color))?
            .label(entry.identifier.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::render_deviation_chart;
    use fbvis_core::domain::DeviationSeries;
    use tempfile::TempDir;

    fn series(identifier: &str, deviations: Vec<f64>) -> DeviationSeries {
        DeviationSeries {
            identifier: identifier.to_string(),
            initial_value: 1.0,
            deviations,
        }
    }

    #[test]
    fn empty_deviation_set_skips_rendering() {
        let temp = TempDir::new().expect("tempdir");
        let out = temp.path().join("chart.png");
        let rendered = render_deviation_chart(&[series("sigma1", Vec::new())], &out, 400, 300)
            .expect("skip is not an error");
        assert!(!rendered);
        assert!(!out.exists());
    }

    #[test]
    fn populated_series_produce_a_png_artifact() {
        let temp = TempDir::new().expect("tempdir");
        let out = temp.path().join("chart.png");
        let traces = vec![
            series("sigma1", vec![0.0, 10.0, -5.0]),
            series("eps1", vec![0.0, 0.0, 0.0]),
        ];
        let rendered =
            render_deviation_chart(&traces, &out, 400, 300).expect("chart should render");
        assert!(rendered);
        let bytes = std::fs::read(&out).expect("artifact exists");
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
