//! Chart input types: data lines and axis specifications.

use crate::color::Rgb;

/// Default stroke for lines that specify none.
pub const DEFAULT_STROKE: Rgb = Rgb::WHITE;
/// Default stroke width for lines that specify none.
pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;

/// One data series plus optional styling.
///
/// Holds the values to plot; the renderer owns the coordinate mapping.
/// Unstyled fields fall back to [`DEFAULT_STROKE`] / [`DEFAULT_STROKE_WIDTH`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub values: Vec<f64>,
    pub stroke: Option<Rgb>,
    pub width: Option<f32>,
}

impl ChartLine {
    /// A line with default styling.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, stroke: None, width: None }
    }

    /// A line with explicit stroke color and width.
    pub fn styled(values: Vec<f64>, stroke: Rgb, width: f32) -> Self {
        Self { values, stroke: Some(stroke), width: Some(width) }
    }
}

/// Axis configuration for one chart.
///
/// `x_increment` is the number of data indices between horizontal ticks;
/// the vertical axis runs from 0 to `y_max` labeled every `y_increment`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub x_increment: usize,
    pub y_max: f64,
    pub y_increment: f64,
    pub x_label: String,
    pub y_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstyled_line_has_no_overrides() {
        let line = ChartLine::new(vec![1.0, 2.0]);
        assert_eq!(line.stroke, None);
        assert_eq!(line.width, None);
    }

    #[test]
    fn styled_line_keeps_its_overrides() {
        let line = ChartLine::styled(vec![1.0], Rgb(255, 0, 0), 4.0);
        assert_eq!(line.stroke, Some(Rgb(255, 0, 0)));
        assert_eq!(line.width, Some(4.0));
    }
}
