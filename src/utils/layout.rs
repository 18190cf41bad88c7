use crate::config::{LOG_OUTPUT_ID, LOG_OUTPUT_RATIO, TECHNICAL_OUTPUT_ID, TECHNICAL_OUTPUT_RATIO};

/// Panel heights in pixels for a single viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelHeights {
    pub log_output: f64,
    pub technical_output: f64,
}

/// A pending `height` write for one region.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionHeight<'a> {
    pub id: &'a str,
    pub css: String,
}

impl PanelHeights {
    /// Negative, NaN and infinite heights are treated as 0.
    pub fn for_viewport(viewport_height: f64) -> Self {
        let h = if viewport_height.is_finite() && viewport_height > 0.0 {
            viewport_height
        } else {
            0.0
        };

        Self {
            log_output: h * LOG_OUTPUT_RATIO,
            technical_output: h * TECHNICAL_OUTPUT_RATIO,
        }
    }

    pub fn regions(&self) -> [RegionHeight<'static>; 2] {
        [
            RegionHeight {
                id: LOG_OUTPUT_ID,
                css: format_px(self.log_output),
            },
            RegionHeight {
                id: TECHNICAL_OUTPUT_ID,
                css: format_px(self.technical_output),
            },
        ]
    }
}

/// Formats a pixel length without rounding, e.g. `300px` or `12.5px`.
pub fn format_px(value: f64) -> String {
    format!("{}px", value)
}
