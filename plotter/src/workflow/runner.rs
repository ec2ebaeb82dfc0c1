use crate::workflow::config::RunConfig;
use anyhow::Context;
use geocore::dataset::SiteDataset;
use geocore::model::Location;
use geocore::telemetry::RenderMetrics;
use log::info;
use std::path::{Path, PathBuf};
use visualizer::error::ChartError;
use visualizer::style::ChartStyle;
use visualizer::{dispersion, field_test, lab_test, velocity_profile};

type Renderer = fn(&Location, &ChartStyle, &Path) -> Result<Option<PathBuf>, ChartError>;

/// The fixed per-location chart order.
const RENDERERS: [Renderer; 4] = [
    velocity_profile::render,
    dispersion::render,
    lab_test::render,
    field_test::render,
];

/// Totals for one full rendering pass.
pub struct RunSummary {
    pub locations: usize,
    pub charts_rendered: usize,
    pub charts_skipped: usize,
}

pub struct Runner {
    config: RunConfig,
    style: ChartStyle,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            style: ChartStyle::default(),
        }
    }

    pub fn execute(&self) -> anyhow::Result<RunSummary> {
        let dataset = SiteDataset::load(&self.config.data_path)
            .with_context(|| format!("loading dataset {}", self.config.data_path.display()))?;
        self.render_dataset(&dataset)
    }

    /// Walks the locations in source order and invokes every renderer on
    /// each one. Skipped charts are tallied; structural and backend
    /// errors abort the remaining run.
    pub fn render_dataset(&self, dataset: &SiteDataset) -> anyhow::Result<RunSummary> {
        let metrics = RenderMetrics::new();
        let out_dir = self.config.out_dir.as_path();

        for location in &dataset.location {
            println!("Plotting {}...", location.name);
            for render in RENDERERS {
                let outcome = render(location, &self.style, out_dir)
                    .with_context(|| format!("rendering charts for {}", location.name))?;
                match outcome {
                    Some(_) => metrics.record_rendered(),
                    None => metrics.record_skipped(),
                }
            }
            metrics.record_location();
        }

        let (locations, rendered, skipped) = metrics.snapshot();
        info!("run complete: {rendered} charts rendered, {skipped} skipped");
        Ok(RunSummary {
            locations,
            charts_rendered: rendered,
            charts_skipped: skipped,
        })
    }
}
