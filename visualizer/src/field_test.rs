use geocore::model::Location;
use geocore::navigate::primary;
use geocore::validate::has_missing_series;
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

use crate::chart::{axis_range, ChartKind, FIELD_FIGURE_SIZE};
use crate::error::ChartError;
use crate::style::ChartStyle;

/// Series backing the four sounding panels, as (measurement, depth)
/// pairs. The SPT and CPT depth series are independently indexed.
#[derive(Debug, Clone)]
pub struct FieldTestSeries {
    pub blow_count: Vec<(f64, f64)>,
    pub tip_resistance: Vec<(f64, f64)>,
    pub sleeve_friction: Vec<(f64, f64)>,
    pub pore_pressure: Vec<(f64, f64)>,
}

/// Locates the primary SPT and CPT soundings and gates all six series
/// jointly: degeneracy in any one suppresses the whole chart.
pub fn extract(location: &Location) -> Result<Option<FieldTestSeries>, ChartError> {
    let geotechnical = primary(&location.children.geotechnical_data, "geotechnicalData")?;
    let field = primary(&geotechnical.children.field_test, "fieldTest")?;
    let spt = primary(
        &field.children.standard_penetration_test,
        "standardPenetrationTest",
    )?;
    let cpt = primary(
        &field.children.cone_penetration_test,
        "conePenetrationTest",
    )?;

    if has_missing_series(&[
        &spt.blow_count,
        &spt.depth,
        &cpt.sleeve_friction,
        &cpt.tip_resistance,
        &cpt.pore_pressure,
        &cpt.depth,
    ]) {
        return Ok(None);
    }

    let spt_depth = spt.depth.numbers();
    let cpt_depth = cpt.depth.numbers();
    Ok(Some(FieldTestSeries {
        blow_count: spt
            .blow_count
            .numbers()
            .into_iter()
            .zip(spt_depth)
            .collect(),
        tip_resistance: cpt
            .tip_resistance
            .numbers()
            .into_iter()
            .zip(cpt_depth.iter().copied())
            .collect(),
        sleeve_friction: cpt
            .sleeve_friction
            .numbers()
            .into_iter()
            .zip(cpt_depth.iter().copied())
            .collect(),
        pore_pressure: cpt
            .pore_pressure
            .numbers()
            .into_iter()
            .zip(cpt_depth)
            .collect(),
    }))
}

/// Renders the four-panel borehole-log figure for one location.
pub fn render(
    location: &Location,
    style: &ChartStyle,
    out_dir: &Path,
) -> Result<Option<PathBuf>, ChartError> {
    let tag = ChartKind::FieldTest.tag(&location.name);
    println!("{tag}");

    let Some(series) = extract(location)? else {
        return Ok(None);
    };

    let path = ChartKind::FieldTest.output_path(out_dir, &location.name);
    {
        let root = BitMapBackend::new(&path, FIELD_FIGURE_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(ChartError::backend)?;
        let panels = root.split_evenly((1, 4));

        draw_panel(&panels[0], style, &series.blow_count, &BLUE, "SPT", false)?;
        draw_panel(
            &panels[1],
            style,
            &series.tip_resistance,
            &RED,
            "Tip Resistance (kPa)",
            true,
        )?;
        draw_panel(
            &panels[2],
            style,
            &series.sleeve_friction,
            &RED,
            "Sleeve Friction (kPa)",
            true,
        )?;
        draw_panel(
            &panels[3],
            style,
            &series.pore_pressure,
            &RED,
            "Pore Pressure (kPa)",
            true,
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
    label: &str,
    grid: bool,
) -> Result<(), ChartError> {
    // borehole-log convention: the quantity label sits above the panel
    let mut chart = ChartBuilder::on(area)
        .caption(label, style.panel_font())
        .margin(8)
        .x_label_area_size(24)
        .y_label_area_size(36)
        .build_cartesian_2d(
            axis_range(points.iter().map(|p| p.0)),
            axis_range(points.iter().map(|p| p.1)),
        )
        .map_err(ChartError::backend)?;

    let mut mesh = chart.configure_mesh();
    if !grid {
        mesh.disable_x_mesh().disable_y_mesh();
    }
    mesh.label_style(style.tick_font())
        .draw()
        .map_err(ChartError::backend)?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), color))
        .map_err(ChartError::backend)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_location(
        blow_count: &str,
        spt_depth: &str,
        sleeve: &str,
        tip: &str,
        pore: &str,
        cpt_depth: &str,
    ) -> Location {
        let json = format!(
            r#"{{
                "name": "SiteA",
                "children": {{
                    "geotechnicalData": [{{
                        "children": {{
                            "fieldTest": [{{
                                "children": {{
                                    "standardPenetrationTest": [{{
                                        "Blow count (N)": {{"units": "blows/ft", "values": {blow_count}}},
                                        "depth": {{"units": "m", "values": {spt_depth}}}
                                    }}],
                                    "conePenetrationTest": [{{
                                        "Sleeve Friction": {{"units": "kPa", "values": {sleeve}}},
                                        "Tip Resistance": {{"units": "kPa", "values": {tip}}},
                                        "Pore Pressure": {{"units": "kPa", "values": {pore}}},
                                        "depth": {{"units": "m", "values": {cpt_depth}}}
                                    }}]
                                }}
                            }}]
                        }}
                    }}]
                }}
            }}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn extract_pairs_each_sounding_with_its_own_depth() {
        let location = sample_location(
            "[5.0, 10.0]",
            "[1.0, 2.0]",
            "[12.0, 14.0, 16.0]",
            "[800.0, 900.0, 950.0]",
            "[30.0, 40.0, 50.0]",
            "[0.5, 1.0, 1.5]",
        );
        let series = extract(&location).unwrap().unwrap();
        assert_eq!(series.blow_count, vec![(5.0, 1.0), (10.0, 2.0)]);
        assert_eq!(series.tip_resistance.len(), 3);
        assert_eq!(series.pore_pressure[2], (50.0, 1.5));
    }

    #[test]
    fn any_degenerate_series_suppresses_the_whole_chart() {
        let location = sample_location(
            "[5.0, 10.0, 15.0]",
            "[1.0, 2.0, 3.0]",
            "[null]",
            "[800.0]",
            "[30.0]",
            "[0.5]",
        );
        assert!(extract(&location).unwrap().is_none());
    }

    #[test]
    fn extract_fails_without_field_test_records() {
        let json = r#"{
            "name": "SiteA",
            "children": {"geotechnicalData": [{"children": {}}]}
        }"#;
        let location: Location = serde_json::from_str(json).unwrap();
        assert!(matches!(extract(&location), Err(ChartError::Navigation(_))));
    }
}
