use geocore::model::Location;
use geocore::navigate::primary;
use geocore::validate::has_missing_series;
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

use crate::chart::{axis_range, step_trace, ChartKind, DEFAULT_FIGURE_SIZE};
use crate::error::ChartError;
use crate::style::ChartStyle;

/// Series backing the two velocity panels, as (velocity, depth) pairs.
#[derive(Debug, Clone)]
pub struct VelocityProfileSeries {
    pub shear: Vec<(f64, f64)>,
    pub compression: Vec<(f64, f64)>,
    pub shear_units: String,
    pub compression_units: String,
    pub depth_units: String,
}

/// Locates the primary velocity profile and gates it on completeness.
/// Returns `None` when any of the three series is degenerate.
pub fn extract(location: &Location) -> Result<Option<VelocityProfileSeries>, ChartError> {
    let profile = primary(&location.children.velocity_profile, "velocityProfile")?;
    if has_missing_series(&[&profile.vp, &profile.vs, &profile.depth]) {
        return Ok(None);
    }

    let depth = profile.depth.numbers();
    let shear = profile
        .vs
        .numbers()
        .into_iter()
        .zip(depth.iter().copied())
        .collect();
    let compression = profile
        .vp
        .numbers()
        .into_iter()
        .zip(depth.iter().copied())
        .collect();

    Ok(Some(VelocityProfileSeries {
        shear,
        compression,
        shear_units: profile.vs.units.clone(),
        compression_units: profile.vp.units.clone(),
        depth_units: profile.depth.units.clone(),
    }))
}

/// Renders the two-panel velocity profile chart for one location.
pub fn render(
    location: &Location,
    style: &ChartStyle,
    out_dir: &Path,
) -> Result<Option<PathBuf>, ChartError> {
    let tag = ChartKind::VelocityProfile.tag(&location.name);
    println!("{tag}");

    let Some(series) = extract(location)? else {
        return Ok(None);
    };

    let path = ChartKind::VelocityProfile.output_path(out_dir, &location.name);
    {
        let root = BitMapBackend::new(&path, DEFAULT_FIGURE_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(ChartError::backend)?;
        let panels = root.split_evenly((1, 2));

        draw_panel(
            &panels[0],
            style,
            &series.shear,
            &BLUE,
            &format!("S-Wave V. ({})", series.shear_units),
            Some(&format!("Depth ({})", series.depth_units)),
        )?;
        draw_panel(
            &panels[1],
            style,
            &series.compression,
            &RED,
            &format!("P-Wave V. ({})", series.compression_units),
            None,
        )?;

        root.present().map_err(ChartError::backend)?;
    }
    debug!("wrote {}", path.display());
    Ok(Some(path))
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend, Shift>,
    style: &ChartStyle,
    points: &[(f64, f64)],
    color: &RGBColor,
    x_label: &str,
    y_label: Option<&str>,
) -> Result<(), ChartError> {
    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .x_label_area_size(44)
        .y_label_area_size(52)
        .build_cartesian_2d(
            axis_range(points.iter().map(|p| p.0)),
            axis_range(points.iter().map(|p| p.1)),
        )
        .map_err(ChartError::backend)?;

    let mut mesh = chart.configure_mesh();
    mesh.disable_x_mesh()
        .disable_y_mesh()
        .x_desc(x_label)
        .label_style(style.tick_font())
        .axis_desc_style(style.axis_font());
    if let Some(label) = y_label {
        mesh.y_desc(label);
    }
    mesh.draw().map_err(ChartError::backend)?;

    chart
        .draw_series(LineSeries::new(step_trace(points), color))
        .map_err(ChartError::backend)?;
    chart
        .draw_series(
            points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
        )
        .map_err(ChartError::backend)?;
    Ok(())
}
