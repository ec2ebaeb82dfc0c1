/// Process-wide chart text configuration.
///
/// Built once by the driver during initialization and read by every
/// renderer; nothing mutates it mid-run.
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub font_family: String,
    pub axis_label_size: u32,
    pub panel_label_size: u32,
    pub tick_label_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            font_family: "serif".to_string(),
            axis_label_size: 13,
            panel_label_size: 10,
            tick_label_size: 7,
        }
    }
}

impl ChartStyle {
    pub(crate) fn axis_font(&self) -> (&str, u32) {
        (self.font_family.as_str(), self.axis_label_size)
    }

    pub(crate) fn panel_font(&self) -> (&str, u32) {
        (self.font_family.as_str(), self.panel_label_size)
    }

    pub(crate) fn tick_font(&self) -> (&str, u32) {
        (self.font_family.as_str(), self.tick_label_size)
    }
}
