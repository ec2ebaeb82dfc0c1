use geocore::model::Location;
use geocore::navigate::primary;
use geocore::validate::has_missing_series;
use log::debug;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

use crate::chart::{axis_range, ChartKind, DEFAULT_FIGURE_SIZE};
use crate::error::ChartError;
use crate::style::ChartStyle;

const THEORETICAL_LABEL: &str = "Field Ave. Velocity (m/s)";
const SITE_LABEL: &str = "Inverted Phase Velocity (m/s)";

/// The two dispersion curves, as (frequency, phase velocity) pairs.
#[derive(Debug, Clone)]
pub struct DispersionSeries {
    pub theoretical: Vec<(f64, f64)>,
    pub site: Vec<(f64, f64)>,
}

/// Locates the primary dispersion record and gates it on completeness.
pub fn extract(location: &Location) -> Result<Option<DispersionSeries>, ChartError> {
    let dispersion = primary(&location.children.dispersion_data, "dispersionData")?;
    if has_missing_series(&[
        &dispersion.theoretical_dispersion_velocity,
        &dispersion.site_dispersion_velocity,
        &dispersion.frequency,
    ]) {
        return Ok(None);
    }

    let frequency = dispersion.frequency.numbers();
    let theoretical = frequency
        .iter()
        .copied()
        .zip(dispersion.theoretical_dispersion_velocity.numbers())
        .collect();
    let site = frequency
        .iter()
        .copied()
        .zip(dispersion.site_dispersion_velocity.numbers())
        .collect();

    Ok(Some(DispersionSeries { theoretical, site }))
}

/// Renders the overlaid dispersion-curve chart for one location.
pub fn render(
    location: &Location,
    style: &ChartStyle,
    out_dir: &Path,
) -> Result<Option<PathBuf>, ChartError> {
    let tag = ChartKind::DispersionData.tag(&location.name);
    println!("{tag}");

    let Some(series) = extract(location)? else {
        return Ok(None);
    };

    let path = ChartKind::DispersionData.output_path(out_dir, &location.name);
    {
        let root = BitMapBackend::new(&path, DEFAULT_FIGURE_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(ChartError::backend)?;

        let frequency_range = axis_range(series.theoretical.iter().map(|p| p.0));
        let velocity_range = axis_range(
            series
                .theoretical
                .iter()
                .chain(series.site.iter())
                .map(|p| p.1),
        );

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .x_label_area_size(44)
            .y_label_area_size(52)
            .build_cartesian_2d(frequency_range, velocity_range)
            .map_err(ChartError::backend)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_desc("Frequency (Hz)")
            .y_desc("Phase Velocity (m/s)")
            .label_style(style.tick_font())
            .axis_desc_style(style.axis_font())
            .draw()
            .map_err(ChartError::backend)?;

        chart
            .draw_series(LineSeries::new(series.theoretical.clone(), &BLUE))
            .map_err(ChartError::backend)?
            .label(THEORETICAL_LABEL)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
        chart
            .draw_series(LineSeries::new(series.site.clone(), &MAGENTA))
            .map_err(ChartError::backend)?
            .label(SITE_LABEL)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], MAGENTA));
        chart
            .draw_series(
                series
                    .site
                    .iter()
                    .map(|&(x, y)| Cross::new((x, y), 3, BLACK.stroke_width(1))),
            )
            .map_err(ChartError::backend)?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(style.panel_font())
            .draw()
            .map_err(ChartError::backend)?;

        root.present().map_err(ChartError::backend)?;
    }
    debug!("wrote {}", path.display());
    Ok(Some(path))
}
